//! Object requirements

use crate::error::ParseError;
use crate::threshold::Threshold;
use crate::types::{ComparisonOperator, ObjectType};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use tmeditor_grammar::{parse_object, GrammarError, ObjectItem};

/// A detector object requirement (`MU10`, `JET.eq.20p5-1`).
///
/// Two objects are equal when type, comparison, decoded threshold and
/// bunch crossing offset match; the name is not compared. Serialized as
/// its canonical name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Object {
    name: String,
    object_type: ObjectType,
    comparison: ComparisonOperator,
    threshold: Threshold,
    bx_offset: i32,
}

impl Object {
    /// Parse an object token. Attached cut lists are accepted and dropped.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let item = parse_object(token).map_err(|e| match e {
            GrammarError::UnknownObjectType(token) => ParseError::UnknownObjectType(token),
            other => ParseError::Grammar(other),
        })?;
        Self::from_item(&item)
    }

    pub(crate) fn from_item(item: &ObjectItem) -> Result<Self, ParseError> {
        Ok(Self {
            name: item.object_name(),
            object_type: item.type_name.parse()?,
            comparison: item.comparison.parse()?,
            threshold: Threshold::parse(&item.threshold)?,
            bx_offset: item.bx_offset,
        })
    }

    /// Canonical name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn object_type(&self) -> ObjectType {
        self.object_type
    }

    pub fn comparison(&self) -> ComparisonOperator {
        self.comparison
    }

    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Decoded threshold value
    pub fn decoded_threshold(&self) -> f64 {
        self.threshold.value()
    }

    pub fn bx_offset(&self) -> i32 {
        self.bx_offset
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        (self.object_type, self.comparison, &self.threshold, self.bx_offset)
            == (other.object_type, other.comparison, &other.threshold, other.bx_offset)
    }
}

impl Eq for Object {}

impl Hash for Object {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.object_type.hash(state);
        self.comparison.hash(state);
        self.threshold.hash(state);
        self.bx_offset.hash(state);
    }
}

impl PartialOrd for Object {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordered by type, threshold and offset. The comparison operator only
/// breaks ties so that ordering agrees with equality.
impl Ord for Object {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.object_type, &self.threshold, self.bx_offset, self.comparison).cmp(&(
            other.object_type,
            &other.threshold,
            other.bx_offset,
            other.comparison,
        ))
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl TryFrom<String> for Object {
    type Error = ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::parse(&name)
    }
}

impl From<Object> for String {
    fn from(object: Object) -> Self {
        object.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let object = Object::parse("MU10").unwrap();
        assert_eq!(object.name(), "MU10");
        assert_eq!(object.object_type(), ObjectType::Mu);
        assert_eq!(object.comparison(), ComparisonOperator::Ge);
        assert_eq!(object.decoded_threshold(), 10.0);
        assert_eq!(object.bx_offset(), 0);
    }

    #[test]
    fn test_parse_full() {
        let object = Object::parse("JET.eq.20p5-1[JET-ETA_2p52]").unwrap();
        assert_eq!(object.name(), "JET.eq.20p5-1");
        assert_eq!(object.object_type(), ObjectType::Jet);
        assert_eq!(object.comparison(), ComparisonOperator::Eq);
        assert_eq!(object.decoded_threshold(), 20.5);
        assert_eq!(object.bx_offset(), -1);
    }

    #[test]
    fn test_longest_type_prefix() {
        assert_eq!(Object::parse("ETMHF40").unwrap().object_type(), ObjectType::Etmhf);
        assert_eq!(Object::parse("ETM40").unwrap().object_type(), ObjectType::Etm);
    }

    #[test]
    fn test_unknown_type_is_typed_error() {
        assert_eq!(
            Object::parse("XYZ10"),
            Err(ParseError::UnknownObjectType("XYZ10".to_string()))
        );
        assert!(matches!(Object::parse("MU"), Err(ParseError::Grammar(_))));
    }

    #[test]
    fn test_equality_ignores_encoding() {
        let a = Object::parse("MU10p0").unwrap();
        let b = Object::parse("MU10").unwrap();
        assert_eq!(a, b);
        assert_ne!(a.name(), b.name());
        assert_ne!(Object::parse("MU10").unwrap(), Object::parse("MU10+1").unwrap());
        assert_ne!(Object::parse("MU10").unwrap(), Object::parse("MU.eq.10").unwrap());
    }

    #[test]
    fn test_ordering() {
        let mut objects: Vec<_> = ["EG5", "MU20", "MU3p5", "MU3p5-1"]
            .into_iter()
            .map(|name| Object::parse(name).unwrap())
            .collect();
        objects.sort();
        let names: Vec<_> = objects.iter().map(Object::name).collect();
        assert_eq!(names, vec!["MU3p5-1", "MU3p5", "MU20", "EG5"]);
    }
}
