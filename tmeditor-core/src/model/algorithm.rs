//! Algorithms

use super::compiled;
use crate::error::{ModelError, SyntaxError};
use crate::extract::{collect_cuts, collect_externals, collect_objects};
use crate::model::{External, Object};
use crate::tokenizer::tokenize;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;

fn name_pattern() -> Result<&'static Regex, ModelError> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, r"^(L1_)([a-zA-Z\d_]+)$")
}

/// A trigger algorithm: index, name and expression.
///
/// Tokens and references are derived from the expression on every call.
/// Equality and ordering use (index, name, expression); the comment is
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Algorithm {
    /// Position in the menu, unique and below the maximum
    pub index: u32,
    /// Unique name (`L1_SingleMu10`)
    pub name: String,
    /// Expression text
    pub expression: String,
    /// Free text comment
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Algorithm {
    pub fn new(index: u32, name: impl Into<String>, expression: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            expression: expression.into(),
            comment: String::new(),
        }
    }

    /// Set the comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Reverse-Polish tokens of the expression
    pub fn tokens(&self) -> Result<Vec<String>, SyntaxError> {
        tokenize(&self.expression)
    }

    /// Objects referenced, first occurrence order
    pub fn objects(&self) -> Result<Vec<Object>, SyntaxError> {
        collect_objects(&self.expression)
    }

    /// Externals referenced, first occurrence order
    pub fn externals(&self) -> Result<Vec<External>, SyntaxError> {
        collect_externals(&self.expression)
    }

    /// Cut names referenced, first occurrence order
    pub fn cuts(&self) -> Result<Vec<String>, SyntaxError> {
        collect_cuts(&self.expression)
    }

    /// Check index range and name pattern.
    pub fn validate(&self, max_algorithms: u32) -> Result<(), ModelError> {
        if self.index >= max_algorithms {
            log::error!(
                "algorithm index out of range: {} : {}",
                self.index,
                self.name
            );
            return Err(ModelError::IndexOutOfRange {
                index: self.index,
                name: self.name.clone(),
            });
        }
        if !name_pattern()?.is_match(&self.name) {
            log::error!("invalid algorithm name: {} : {}", self.index, self.name);
            return Err(ModelError::InvalidName {
                index: self.index,
                name: self.name.clone(),
            });
        }
        Ok(())
    }

    fn key(&self) -> (u32, &str, &str) {
        (self.index, &self.name, &self.expression)
    }
}

impl PartialEq for Algorithm {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Algorithm {}

impl PartialOrd for Algorithm {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Algorithm {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
