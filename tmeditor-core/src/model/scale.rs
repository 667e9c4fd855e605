//! Detector scales

use crate::types::{ObjectType, ScaleType};
use serde::{Deserialize, Serialize};

/// Acceptance and resolution of one quantity of one object type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    /// Object type described
    pub object: ObjectType,
    /// Quantity described
    pub kind: ScaleType,
    /// Lower acceptance limit
    pub minimum: f64,
    /// Upper acceptance limit
    pub maximum: f64,
    /// Bin width
    #[serde(default)]
    pub step: f64,
    /// Hardware bit width
    #[serde(default)]
    pub n_bits: u32,
}

impl Scale {
    pub fn new(object: ObjectType, kind: ScaleType, minimum: f64, maximum: f64) -> Self {
        Self {
            object,
            kind,
            minimum,
            maximum,
            step: 0.0,
            n_bits: 0,
        }
    }

    /// Whether the scale describes `kind` of `object`
    pub fn describes(&self, object: ObjectType, kind: ScaleType) -> bool {
        self.object == object && self.kind == kind
    }
}
