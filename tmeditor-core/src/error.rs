//! Layered error types
//!
//! - [`ParseError`]: a single token could not be classified
//! - [`SyntaxError`]: an expression could not be parsed; wraps the
//!   [`ParseError`] that caused it
//! - [`AlgorithmSyntaxError`]: an expression parsed but violates a rule
//! - [`ModelError`]: algorithm, external or menu consistency failures

use thiserror::Error;
use tmeditor_grammar::GrammarError;

/// Token level classification errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token does not start with a known object type
    #[error("invalid object type `{0}`")]
    UnknownObjectType(String),

    /// Name is not a member of a keyword table
    #[error("unknown {kind} `{name}`")]
    UnknownKeyword {
        /// Table the name was looked up in
        kind: &'static str,
        /// The offending name
        name: String,
    },

    /// Encoded threshold is malformed
    #[error("invalid threshold `{0}`")]
    InvalidThreshold(String),

    /// Token is not a function
    #[error("not a function `{0}`")]
    NotAFunction(String),

    /// Underlying grammar failure
    #[error(transparent)]
    Grammar(#[from] GrammarError),
}

/// The grammar rejected an expression
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to parse expression `{expression}`")]
pub struct SyntaxError {
    expression: String,
    #[source]
    source: ParseError,
}

impl SyntaxError {
    /// Create a syntax error for an expression
    pub fn new(expression: impl Into<String>, source: impl Into<ParseError>) -> Self {
        Self {
            expression: expression.into(),
            source: source.into(),
        }
    }

    /// The rejected expression text
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// The token level cause
    pub fn cause(&self) -> &ParseError {
        &self.source
    }
}

/// A structural or domain rule violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AlgorithmSyntaxError {
    message: String,
    token: Option<String>,
}

impl AlgorithmSyntaxError {
    /// Violation not attributable to a single token
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: None,
        }
    }

    /// Violation caused by `token`
    pub fn with_token(message: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            token: Some(token.into()),
        }
    }

    /// Human readable description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending token, if attributable
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

/// Consistency errors of algorithms, externals and menus
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Algorithm index not below the configured maximum
    #[error("algorithm index out of range: {index} : {name}")]
    IndexOutOfRange {
        /// Algorithm index
        index: u32,
        /// Algorithm name
        name: String,
    },

    /// Algorithm name does not match `L1_[A-Za-z0-9_]+`
    #[error("invalid algorithm name: {index} : {name}")]
    InvalidName {
        /// Algorithm index
        index: u32,
        /// Algorithm name
        name: String,
    },

    /// External signal name does not match `EXT_NAME[(+|-)N]`
    #[error("invalid external signal name: {0}")]
    InvalidExternalName(String),

    /// Algorithm references a cut missing from the menu
    #[error("missing cut {cut}, unable to add algorithm {algorithm}")]
    MissingCut {
        /// Cut name
        cut: String,
        /// Algorithm name
        algorithm: String,
    },

    /// Another algorithm already uses the name
    #[error("algorithm name already in use: {0}")]
    DuplicateName(String),

    /// Another algorithm already uses the index
    #[error("algorithm index already in use: {0}")]
    DuplicateIndex(u32),

    /// Every algorithm index is taken
    #[error("no free algorithm index left")]
    NoFreeIndex,

    /// Cut is referenced by an algorithm
    #[error("cut {cut} is used by algorithm {algorithm}")]
    CutInUse {
        /// Cut name
        cut: String,
        /// First algorithm using it
        algorithm: String,
    },

    /// No cut of that name
    #[error("no such cut: {0}")]
    UnknownCut(String),

    /// A name pattern failed to compile
    #[error("invalid name pattern: {0}")]
    Pattern(String),
}

/// Umbrella error of the crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Expression could not be parsed
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    /// Expression violates a syntax rule
    #[error(transparent)]
    Rule(#[from] AlgorithmSyntaxError),

    /// Menu consistency failure
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Configuration or snapshot loading failure
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_syntax_error_chain() {
        let error = SyntaxError::new("MU10 AND", GrammarError::EmptyExpression);
        assert_eq!(error.to_string(), "failed to parse expression `MU10 AND`");
        assert_eq!(error.expression(), "MU10 AND");
        assert_eq!(error.source().unwrap().to_string(), "empty expression");
    }

    #[test]
    fn test_algorithm_syntax_error_token() {
        let error = AlgorithmSyntaxError::with_token("bad", "comb{MU10,MU10+1}");
        assert_eq!(error.to_string(), "bad");
        assert_eq!(error.token(), Some("comb{MU10,MU10+1}"));
        assert_eq!(AlgorithmSyntaxError::new("bad").token(), None);
    }

    #[test]
    fn test_model_error_display() {
        let error = ModelError::IndexOutOfRange {
            index: 600,
            name: "L1_SingleMu10".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "algorithm index out of range: 600 : L1_SingleMu10"
        );
    }

    #[test]
    fn test_umbrella_conversion() {
        let error: Error = AlgorithmSyntaxError::new("bad").into();
        assert!(matches!(error, Error::Rule(_)));
        let error: Error = ModelError::NoFreeIndex.into();
        assert_eq!(error.to_string(), "no free algorithm index left");
    }
}
