//! Grammar error types (deterministic only)

use thiserror::Error;

/// Errors raised while parsing expressions, objects and functions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// Expression contains no tokens
    #[error("empty expression")]
    EmptyExpression,

    /// Character that cannot start any token
    #[error("unexpected character '{found}' at offset {offset}")]
    UnexpectedCharacter {
        /// Byte offset of the character
        offset: usize,
        /// The offending character
        found: char,
    },

    /// Opening and closing parentheses do not pair up
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,

    /// An operator or parenthesis where an operand is required
    #[error("missing operand near `{near}`")]
    MissingOperand {
        /// Token following the gap, or the last token at end of input
        near: String,
    },

    /// An operand or parenthesis where an operator is required
    #[error("unexpected token `{0}`")]
    UnexpectedToken(String),

    /// Word that is neither a gate, an object, an external nor a function
    #[error("unknown token `{0}`")]
    UnknownToken(String),

    /// Object token without a known object type prefix
    #[error("unknown object type in `{0}`")]
    UnknownObjectType(String),

    /// Malformed object requirement
    #[error("invalid object requirement `{token}` at offset {offset}")]
    InvalidObject {
        /// The object token
        token: String,
        /// Byte offset where parsing stopped
        offset: usize,
    },

    /// Malformed external signal
    #[error("invalid external signal `{0}`")]
    InvalidExternal(String),

    /// Malformed function
    #[error("invalid function `{token}`: {reason}")]
    InvalidFunction {
        /// The function token
        token: String,
        /// What went wrong
        reason: String,
    },
}

/// Result type for grammar operations
pub type Result<T> = std::result::Result<T, GrammarError>;
