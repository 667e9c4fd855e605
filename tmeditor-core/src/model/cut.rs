//! Cuts

use crate::types::{CutType, ObjectType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tmeditor_grammar::keywords::SEPARATOR;

/// Value carried by a cut
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CutValue {
    /// Numeric window
    Range {
        /// Lower limit
        minimum: f64,
        /// Upper limit
        maximum: f64,
    },
    /// Enumerated bitmask (quality, isolation, charge)
    Data {
        /// Bitmask text
        data: String,
    },
}

/// A named constraint on an object or a function.
///
/// Object cuts are scoped by their object (`MU-ETA_2p1`), function cuts
/// have none (`DETA_0to2`). `minimum <= maximum` is not enforced here;
/// range rules check limits against the detector scales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cut {
    /// Unique name
    pub name: String,
    /// Object scope, absent for function cuts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object: Option<ObjectType>,
    /// Cut type
    #[serde(rename = "type")]
    pub cut_type: CutType,
    /// Range or data value
    #[serde(flatten)]
    pub value: CutValue,
    /// Free text comment
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl Cut {
    /// Numeric cut
    pub fn range(
        name: impl Into<String>,
        object: Option<ObjectType>,
        cut_type: CutType,
        minimum: f64,
        maximum: f64,
    ) -> Self {
        Self {
            name: name.into(),
            object,
            cut_type,
            value: CutValue::Range { minimum, maximum },
            comment: String::new(),
        }
    }

    /// Data valued cut
    pub fn data(
        name: impl Into<String>,
        object: Option<ObjectType>,
        cut_type: CutType,
        data: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            object,
            cut_type,
            value: CutValue::Data { data: data.into() },
            comment: String::new(),
        }
    }

    /// Object and type joined by `-` (`MU-ETA`), or the type alone.
    pub fn typename(&self) -> String {
        match self.object {
            Some(object) => format!("{}{}{}", object, SEPARATOR, self.cut_type),
            None => self.cut_type.to_string(),
        }
    }

    /// Remainder of the name after the typename and its separator
    /// (`2p1` for `MU-ETA_2p1`).
    pub fn suffix(&self) -> &str {
        self.name.get(self.typename().len() + 1..).unwrap_or("")
    }

    /// `(minimum, maximum)` of a numeric cut
    pub fn limits(&self) -> Option<(f64, f64)> {
        match self.value {
            CutValue::Range { minimum, maximum } => Some((minimum, maximum)),
            CutValue::Data { .. } => None,
        }
    }

    /// Bitmask text of a data cut
    pub fn data_value(&self) -> Option<&str> {
        match &self.value {
            CutValue::Data { data } => Some(data),
            CutValue::Range { .. } => None,
        }
    }

    fn sort_key(&self) -> (&'static str, Option<&'static str>, &str, &str) {
        (
            self.cut_type.name(),
            self.object.map(ObjectType::name),
            self.suffix(),
            &self.name,
        )
    }
}

impl PartialEq for Cut {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Cut {}

impl PartialOrd for Cut {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by type name, object name and suffix, then by name.
impl Ord for Cut {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typename_and_suffix() {
        let cut = Cut::range("MU-ETA_2p1", Some(ObjectType::Mu), CutType::Eta, -2.1, 2.1);
        assert_eq!(cut.typename(), "MU-ETA");
        assert_eq!(cut.suffix(), "2p1");

        let cut = Cut::range("DETA_0to2", None, CutType::DeltaEta, 0.0, 2.0);
        assert_eq!(cut.typename(), "DETA");
        assert_eq!(cut.suffix(), "0to2");
    }

    #[test]
    fn test_suffix_of_short_name() {
        let cut = Cut::range("DR", None, CutType::DeltaR, 0.0, 1.0);
        assert_eq!(cut.suffix(), "");
    }

    #[test]
    fn test_values() {
        let cut = Cut::data("MU-QLTY_SNGL", Some(ObjectType::Mu), CutType::Qlty, "0xf000");
        assert_eq!(cut.limits(), None);
        assert_eq!(cut.data_value(), Some("0xf000"));

        let cut = Cut::range("DPHI_0to1", None, CutType::DeltaPhi, 0.0, 1.0);
        assert_eq!(cut.limits(), Some((0.0, 1.0)));
    }

    #[test]
    fn test_order() {
        let mut cuts = vec![
            Cut::range("MU-PHI_1", Some(ObjectType::Mu), CutType::Phi, 0.0, 1.0),
            Cut::range("MU-ETA_b", Some(ObjectType::Mu), CutType::Eta, 0.0, 1.0),
            Cut::range("MU-ETA_a", Some(ObjectType::Mu), CutType::Eta, 0.0, 1.0),
        ];
        cuts.sort();
        let names: Vec<_> = cuts.iter().map(|cut| cut.name.as_str()).collect();
        assert_eq!(names, vec!["MU-ETA_a", "MU-ETA_b", "MU-PHI_1"]);
    }

    #[test]
    fn test_order_follows_keyword_names() {
        let mut cuts = vec![
            Cut::range("MU-ETA_2p1", Some(ObjectType::Mu), CutType::Eta, -2.1, 2.1),
            Cut::range("EG-ETA_2p1", Some(ObjectType::Eg), CutType::Eta, -2.1, 2.1),
            Cut::range("DETA_0to2", None, CutType::DeltaEta, 0.0, 2.0),
        ];
        cuts.sort();
        let names: Vec<_> = cuts.iter().map(|cut| cut.name.as_str()).collect();
        assert_eq!(names, vec!["DETA_0to2", "EG-ETA_2p1", "MU-ETA_2p1"]);
    }

    #[test]
    fn test_deserialize_range_and_data() {
        let cut: Cut = toml::from_str(
            r#"
            name = "MU-ETA_2p1"
            object = "MU"
            type = "ETA"
            minimum = -2.1
            maximum = 2.1
            "#,
        )
        .unwrap();
        assert_eq!(cut.object, Some(ObjectType::Mu));
        assert_eq!(cut.limits(), Some((-2.1, 2.1)));

        let cut: Cut = toml::from_str(
            r#"
            name = "CHGCOR_OS"
            type = "CHGCOR"
            data = "os"
            "#,
        )
        .unwrap();
        assert_eq!(cut.object, None);
        assert_eq!(cut.data_value(), Some("os"));
    }
}
