//! External signals

use super::compiled;
use crate::error::ModelError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

fn signal_pattern() -> Result<&'static Regex, ModelError> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, r"^(EXT_)([a-zA-Z\d._]+)([+-]\d+)?$")
}

fn offset_pattern() -> Result<&'static Regex, ModelError> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    compiled(&PATTERN, r"([+-]\d+)$")
}

/// A named external signal with optional bunch crossing offset
/// (`EXT_BPTX_plus+1`).
///
/// Equality and ordering are by ([`basename`](Self::basename), offset).
/// Serialized as its name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct External {
    name: String,
    bx_offset: i32,
}

impl External {
    /// Create an external from its token; the offset is taken from a
    /// trailing `+N`/`-N`, defaulting to zero.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let bx_offset = match offset_pattern() {
            Ok(pattern) => pattern
                .captures(&name)
                .and_then(|captures| captures.get(1))
                .and_then(|offset| offset.as_str().parse().ok())
                .unwrap_or(0),
            Err(e) => {
                log::error!("{e}");
                0
            }
        };
        Self { name, bx_offset }
    }

    /// Full token text
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bx_offset(&self) -> i32 {
        self.bx_offset
    }

    fn captures(&self) -> Option<regex::Captures<'_>> {
        match signal_pattern() {
            Ok(pattern) => pattern.captures(&self.name),
            Err(e) => {
                log::error!("{e}");
                None
            }
        }
    }

    /// Signal name with `EXT_` prefix but without offset.
    pub fn basename(&self) -> &str {
        self.captures()
            .and_then(|captures| {
                let span = captures.get(1)?.start()..captures.get(2)?.end();
                self.name.get(span)
            })
            .unwrap_or(&self.name)
    }

    /// Signal name without `EXT_` prefix and offset.
    pub fn signal_name(&self) -> &str {
        self.captures()
            .and_then(|captures| captures.get(2))
            .map_or(self.name.as_str(), |signal| signal.as_str())
    }

    /// Check the name against `EXT_NAME[(+|-)N]`.
    pub fn validate(&self) -> Result<(), ModelError> {
        if signal_pattern()?.is_match(&self.name) {
            return Ok(());
        }
        log::error!("invalid external signal name: {}", self.name);
        Err(ModelError::InvalidExternalName(self.name.clone()))
    }
}

impl PartialEq for External {
    fn eq(&self, other: &Self) -> bool {
        self.basename() == other.basename() && self.bx_offset == other.bx_offset
    }
}

impl Eq for External {}

impl Hash for External {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.basename().hash(state);
        self.bx_offset.hash(state);
    }
}

impl PartialOrd for External {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for External {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.basename(), self.bx_offset).cmp(&(other.basename(), other.bx_offset))
    }
}

impl fmt::Display for External {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<String> for External {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<External> for String {
    fn from(external: External) -> Self {
        external.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(signal_pattern().is_ok());
        assert!(offset_pattern().is_ok());
        assert!(signal_pattern().unwrap().is_match("EXT_BPTX_plus.v0-2"));
    }

    #[test]
    fn test_offset() {
        assert_eq!(External::new("EXT_ZeroBias").bx_offset(), 0);
        assert_eq!(External::new("EXT_BPTX_plus+1").bx_offset(), 1);
        assert_eq!(External::new("EXT_BPTX_minus-2").bx_offset(), -2);
    }

    #[test]
    fn test_names() {
        let external = External::new("EXT_BPTX_plus.v0-2");
        assert_eq!(external.name(), "EXT_BPTX_plus.v0-2");
        assert_eq!(external.basename(), "EXT_BPTX_plus.v0");
        assert_eq!(external.signal_name(), "BPTX_plus.v0");

        let external = External::new("EXT_ZeroBias");
        assert_eq!(external.basename(), "EXT_ZeroBias");
        assert_eq!(external.signal_name(), "ZeroBias");
    }

    #[test]
    fn test_invalid_name_keeps_raw_text() {
        let external = External::new("ZeroBias");
        assert_eq!(external.basename(), "ZeroBias");
        assert_eq!(
            external.validate(),
            Err(ModelError::InvalidExternalName("ZeroBias".to_string()))
        );
        assert!(External::new("EXT_ZeroBias+1").validate().is_ok());
    }

    #[test]
    fn test_equality_and_order() {
        assert_eq!(External::new("EXT_A+0"), External::new("EXT_A"));
        assert_ne!(External::new("EXT_A+1"), External::new("EXT_A"));
        assert!(External::new("EXT_A+1") < External::new("EXT_B-1"));
        assert!(External::new("EXT_A-1") < External::new("EXT_A"));
    }
}
