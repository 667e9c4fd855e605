//! Grammar engine for Level-1 trigger menu algorithm expressions
//!
//! An algorithm expression is a boolean formula over object requirements
//! (`MU10`, `JET.eq.30-1[JET-ETA_2p52]`), external signals (`EXT_ZeroBias`)
//! and functions (`dist{MU10,MU10}[DETA_0to2]`), joined by the gates
//! `AND`, `OR`, `XOR` and `NOT`.
//!
//! This crate only knows the syntax. It turns expression text into a
//! reverse-Polish token sequence and parses individual object and function
//! tokens into items; the domain rules live in `tmeditor-core`.
//!
//! All entry points are pure functions, so concurrent callers never share
//! parser state.
//!
//! # Example
//!
//! ```rust
//! use tmeditor_grammar::{parse_algorithm, parse_function, parse_object};
//!
//! let tokens = parse_algorithm("MU10 AND dist{MU10,EG20}[DETA_0to2]").unwrap();
//! assert_eq!(tokens.len(), 3);
//!
//! let function = parse_function(&tokens[1]).unwrap();
//! assert_eq!(function.name, "dist");
//! assert_eq!(function.cuts(), ["DETA_0to2"]);
//!
//! let object = parse_object("EG20-1").unwrap();
//! assert_eq!(object.bx_offset, -1);
//! ```

pub mod algorithm;
pub mod error;
pub mod function;
pub mod keywords;
mod lexer;
pub mod object;

pub use algorithm::parse_algorithm;
pub use error::{GrammarError, Result};
pub use function::{parse_function, FunctionItem, FunctionOperand};
pub use keywords::{is_cut_name, is_function, is_gate, is_object};
pub use object::{parse_external, parse_object, ExternalItem, ObjectItem};
