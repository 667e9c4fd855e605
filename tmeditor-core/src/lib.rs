//! Algorithm expression validation for Level-1 trigger menus
//!
//! The crate parses trigger algorithm expressions into token streams,
//! identifies the operators, objects, external signals, cuts and functions
//! within them, and enforces the structural and numeric rules of the
//! trigger hardware.
//!
//! # Architecture
//!
//! - **Domain tables** ([`types`]): object, cut and function types and the
//!   mappings between them
//! - **Classifier** ([`classifier`]): what a single token is
//! - **Tokenizer** ([`tokenizer`]): expression text to reverse-Polish tokens
//! - **Extractor** ([`extract`]): distinct objects, externals and cuts
//! - **Rules** ([`rules`]): fail-fast validation against a [`MenuContext`]
//!
//! # Example
//!
//! ```rust
//! use tmeditor_core::{
//!     extract_objects, validate_expression, Cut, CutType, Menu, ObjectType, Scale, ScaleType,
//! };
//!
//! let mut menu = Menu::new("L1Menu_Example");
//! menu.add_scale(Scale::new(ObjectType::Mu, ScaleType::Eta, -2.5, 2.5));
//! menu.import_cuts([Cut::range("DETA_0to6", None, CutType::DeltaEta, 0.0, 6.0)]);
//!
//! let objects = extract_objects("MU10 AND comb{MU10,EG20}").unwrap();
//! assert_eq!(objects.len(), 2);
//!
//! // Two muons can be at most 5.0 apart in eta
//! let error = validate_expression("dist{MU10,MU10}[DETA_0to6]", &menu).unwrap_err();
//! assert!(error.to_string().contains("exceed valid object DETA range"));
//! ```

pub mod classifier;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod menu;
pub mod model;
pub mod rules;
pub mod threshold;
pub mod tokenizer;
pub mod types;

pub use classifier::{classify, FunctionToken, TokenKind};
pub use config::{defaults, Config, ConfigBuilder};
pub use context::MenuContext;
pub use error::{AlgorithmSyntaxError, Error, ModelError, ParseError, Result, SyntaxError};
pub use menu::{AlgorithmReport, ImportReport, Menu, Relocated, Renamed};
pub use model::{Algorithm, Cut, CutValue, External, Object, Scale};
pub use rules::{AlgorithmSyntaxValidator, CutRange, SyntaxRule};
pub use threshold::{decode_threshold, encode_threshold, Threshold};
pub use tokenizer::{tokenize, TokenCache};
pub use types::{ComparisonOperator, CutType, FunctionType, ObjectType, ScaleType};

/// Validate an expression with the default rules.
///
/// Syntax errors are reported before any rule runs.
pub fn validate_expression(expression: &str, context: &dyn MenuContext) -> Result<()> {
    tokenize(expression)?;
    AlgorithmSyntaxValidator::new().validate(expression, context)
}

/// Distinct objects of an expression, first occurrence order
pub fn extract_objects(expression: &str) -> Result<Vec<Object>> {
    Ok(extract::collect_objects(expression)?)
}

/// Distinct external signals of an expression, first occurrence order
pub fn extract_externals(expression: &str) -> Result<Vec<External>> {
    Ok(extract::collect_externals(expression)?)
}

/// Distinct cut names of an expression, first occurrence order
pub fn extract_cut_names(expression: &str) -> Result<Vec<String>> {
    Ok(extract::collect_cuts(expression)?)
}
