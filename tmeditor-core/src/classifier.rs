//! Token classifier
//!
//! Answers what a single token of a tokenized expression is, and turns
//! object, external and function tokens into typed values. Every valid
//! token falls into exactly one [`TokenKind`].

use crate::error::ParseError;
use crate::model::{External, Object};
use crate::types::{CutType, FunctionType, ObjectType};
use smallvec::SmallVec;
use std::fmt;
use tmeditor_grammar::keywords::{EXT_PREFIX, SEPARATOR};
use tmeditor_grammar::{self as grammar, FunctionItem};

/// Objects of a function; functions rarely take more than four.
pub type FunctionObjects = SmallVec<[Object; 4]>;

/// Category of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Gate symbol (`AND`, `OR`, `XOR`, `NOT`)
    Operator,
    /// Object requirement (`MU10`)
    Object,
    /// External signal (`EXT_ZeroBias`)
    External,
    /// Function (`dist{MU10,MU10}`)
    Function,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Operator => "operator",
            TokenKind::Object => "object",
            TokenKind::External => "external",
            TokenKind::Function => "function",
        };
        f.write_str(name)
    }
}

/// Category of a token, `None` for anything the grammar would reject.
pub fn classify(token: &str) -> Option<TokenKind> {
    if is_operator(token) {
        Some(TokenKind::Operator)
    } else if is_function(token) {
        Some(TokenKind::Function)
    } else if is_external_signal(token) {
        Some(TokenKind::External)
    } else if is_object_requirement(token) {
        Some(TokenKind::Object)
    } else {
        None
    }
}

pub fn is_operator(token: &str) -> bool {
    grammar::is_gate(token)
}

/// Starts with a known object type and is not an external signal.
pub fn is_object_requirement(token: &str) -> bool {
    grammar::is_object(token) && !token.starts_with(EXT_PREFIX)
}

pub fn is_external_signal(token: &str) -> bool {
    token.starts_with(EXT_PREFIX)
}

/// Matches `NAME{...}` for a known function name.
pub fn is_function(token: &str) -> bool {
    grammar::is_function(token)
}

pub fn is_cut(token: &str) -> bool {
    grammar::is_cut_name(token)
}

/// Cut type named by a cut reference (`DETA` for `DETA_0to2`,
/// `ETA` for `MU-ETA_2p1`).
pub fn cut_type_of(name: &str) -> Option<CutType> {
    let unscoped = match name.split_once(SEPARATOR) {
        Some((object, rest)) if ObjectType::from_name(object).is_some() => rest,
        _ => name,
    };
    unscoped.split('_').next().and_then(CutType::from_name)
}

/// Parse an object token.
pub fn to_object(token: &str) -> Result<Object, ParseError> {
    log::trace!("classifying object `{token}`");
    Object::parse(token)
}

/// External signal of a token; the offset defaults to zero.
pub fn to_external(token: &str) -> External {
    log::trace!("classifying external `{token}`");
    External::new(token)
}

/// Cut names attached to an object token.
pub fn object_cuts(token: &str) -> Result<Vec<String>, ParseError> {
    grammar::parse_object(token)
        .map(|item| item.cuts)
        .map_err(ParseError::from)
}

/// A parsed function token
#[derive(Debug, Clone)]
pub struct FunctionToken {
    function_type: FunctionType,
    item: FunctionItem,
    objects: FunctionObjects,
}

impl FunctionToken {
    /// Parse a function token, keeping only object operands.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let function_type =
            FunctionType::from_token(token).ok_or_else(|| ParseError::NotAFunction(token.to_string()))?;
        let item = grammar::parse_function(token)?;
        let objects = item
            .objects()
            .filter(|operand| is_object_requirement(operand))
            .map(Object::parse)
            .collect::<Result<FunctionObjects, _>>()?;
        log::trace!(
            "function `{token}`: {} objects, {} cuts",
            objects.len(),
            item.cuts().len()
        );
        Ok(Self {
            function_type,
            item,
            objects,
        })
    }

    pub fn function_type(&self) -> FunctionType {
        self.function_type
    }

    /// Object operands in order of appearance
    pub fn objects(&self) -> &[Object] {
        &self.objects
    }

    /// Cut names attached to the function itself
    pub fn cuts(&self) -> &[String] {
        self.item.cuts()
    }

    /// Cut names attached to the operands, deduplicated, first
    /// occurrence order.
    pub fn object_cuts(&self) -> Vec<String> {
        let mut cuts: Vec<String> = Vec::new();
        for field in self.item.object_cuts() {
            for name in field.split(',').map(str::trim).filter(|name| !name.is_empty()) {
                if !cuts.iter().any(|cut| cut == name) {
                    cuts.push(name.to_string());
                }
            }
        }
        cuts
    }
}

/// Object operands of a function token.
pub fn function_objects(token: &str) -> Result<FunctionObjects, ParseError> {
    FunctionToken::parse(token).map(|function| function.objects)
}

/// Function level cut names of a function token.
pub fn function_cuts(token: &str) -> Result<Vec<String>, ParseError> {
    FunctionToken::parse(token).map(|function| function.cuts().to_vec())
}

/// Operand cut names of a function token.
pub fn function_object_cuts(token: &str) -> Result<Vec<String>, ParseError> {
    FunctionToken::parse(token).map(|function| function.object_cuts())
}
