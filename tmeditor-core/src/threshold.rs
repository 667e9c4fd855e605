//! Threshold codec
//!
//! Thresholds are written with `p` standing for the decimal point
//! (`10p5` is 10.5). Integral values carry no `p` part.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Decode an encoded threshold into its value.
pub fn decode_threshold(encoded: &str) -> Result<f64, ParseError> {
    let invalid = || ParseError::InvalidThreshold(encoded.to_string());
    let (integral, fraction) = match encoded.split_once('p') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (encoded, None),
    };
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(integral) || !fraction.map_or(true, digits) {
        return Err(invalid());
    }
    encoded.replace('p', ".").parse().map_err(|_| invalid())
}

/// Encode a threshold value (`10.5` becomes `10p5`, `10.0` becomes `10`).
pub fn encode_threshold(value: f64) -> String {
    format!("{value}").replace('.', "p")
}

/// Encoded threshold together with its decoded value.
///
/// Comparison and hashing use the decoded value, so `10p0` and `10` are
/// the same threshold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Threshold {
    encoded: String,
    value: f64,
}

impl Threshold {
    /// Parse an encoded threshold.
    pub fn parse(encoded: &str) -> Result<Self, ParseError> {
        Ok(Self {
            value: decode_threshold(encoded)?,
            encoded: encoded.to_string(),
        })
    }

    /// Threshold of a decoded value.
    pub fn from_value(value: f64) -> Self {
        Self {
            encoded: encode_threshold(value),
            value,
        }
    }

    /// Decoded value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Encoded text as written in the expression
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}

impl PartialEq for Threshold {
    fn eq(&self, other: &Self) -> bool {
        self.value.total_cmp(&other.value) == Ordering::Equal
    }
}

impl Eq for Threshold {}

impl PartialOrd for Threshold {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Threshold {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl Hash for Threshold {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encoded)
    }
}

impl FromStr for Threshold {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Threshold {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        threshold.encoded
    }
}
