//! Expression tokenizer
//!
//! [`tokenize`] is a pure function: every call parses the text anew and no
//! parser state is shared between callers. [`TokenCache`] memoizes token
//! streams by expression text for callers that query the same expression
//! repeatedly.

use crate::error::SyntaxError;
use std::collections::HashMap;
use std::sync::Arc;
use tmeditor_grammar::parse_algorithm;

/// Reduce an expression to its reverse-Polish token sequence.
///
/// The sequence interleaves operands and operators and never contains
/// parentheses.
///
/// ```
/// use tmeditor_core::tokenize;
///
/// let tokens = tokenize("MU10 AND (EG20 OR JET30)").unwrap();
/// assert_eq!(tokens, ["MU10", "EG20", "JET30", "OR", "AND"]);
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<String>, SyntaxError> {
    match parse_algorithm(expression) {
        Ok(tokens) => {
            log::debug!("tokenized `{}` into {} tokens", expression, tokens.len());
            log::trace!("tokens: {:?}", tokens);
            Ok(tokens)
        }
        Err(e) => {
            log::debug!("failed to parse expression `{}`: {}", expression, e);
            Err(SyntaxError::new(expression, e))
        }
    }
}

/// Token streams memoized by expression text
///
/// Entries are keyed by the exact text, so an edited expression is a new
/// entry; [`invalidate`](Self::invalidate) drops a stale one.
#[derive(Debug, Default)]
pub struct TokenCache {
    entries: HashMap<String, Arc<[String]>>,
}

impl TokenCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens of `expression`, tokenizing on first use. Failures are not
    /// cached.
    pub fn tokens(&mut self, expression: &str) -> Result<Arc<[String]>, SyntaxError> {
        if let Some(tokens) = self.entries.get(expression) {
            return Ok(Arc::clone(tokens));
        }
        let tokens: Arc<[String]> = tokenize(expression)?.into();
        self.entries
            .insert(expression.to_string(), Arc::clone(&tokens));
        Ok(tokens)
    }

    /// Drop the entry of `expression`.
    pub fn invalidate(&mut self, expression: &str) -> bool {
        self.entries.remove(expression).is_some()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
