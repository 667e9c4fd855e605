//! Object requirement and external signal items
//!
//! Object grammar: `TYPE [-ET] [.ge.|.eq.] THRESHOLD [(+|-)N] ['[' cut, ... ']']`
//! where THRESHOLD is `\d+(p\d+)?` with `p` standing for the decimal point.
//! The `-ET` spelling is only accepted for threshold object types and is
//! dropped from the canonical name.
//!
//! External grammar: `EXT_NAME[(+|-)N]` with NAME over `[A-Za-z0-9._]`.

use crate::error::{GrammarError, Result};
use crate::keywords::{self, EQ, ET, EXT_PREFIX, GE, SEPARATOR, THRESHOLD_OBJECTS};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while1},
    character::complete::{char, digit1, one_of, space0},
    combinator::{all_consuming, map_res, opt, recognize, verify},
    multi::separated_list1,
    sequence::{delimited, pair, preceded, tuple},
    IResult,
};

/// Parsed object requirement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectItem {
    /// Object type name (`MU`, `JET`, ...)
    pub type_name: &'static str,
    /// Comparison operator (`.ge.` or `.eq.`)
    pub comparison: &'static str,
    /// Encoded threshold (`10p5`)
    pub threshold: String,
    /// Bunch crossing offset
    pub bx_offset: i32,
    /// Cut names attached to the object
    pub cuts: Vec<String>,
}

impl ObjectItem {
    /// Canonical object name: type, non-default comparison, threshold and
    /// non-zero offset (`MU10`, `MU.eq.10`, `JET20-1`).
    pub fn object_name(&self) -> String {
        let mut name = String::from(self.type_name);
        if self.comparison != GE {
            name.push_str(self.comparison);
        }
        name.push_str(&self.threshold);
        if self.bx_offset != 0 {
            name.push_str(&format!("{:+}", self.bx_offset));
        }
        name
    }
}

/// Parsed external signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalItem {
    /// Signal name including the `EXT_` prefix, without offset
    pub signal: String,
    /// Bunch crossing offset
    pub bx_offset: i32,
}

fn bx_offset(input: &str) -> IResult<&str, i32> {
    map_res(recognize(pair(one_of("+-"), digit1)), str::parse::<i32>)(input)
}

fn threshold(input: &str) -> IResult<&str, &str> {
    recognize(pair(digit1, opt(pair(char('p'), digit1))))(input)
}

fn comparison(input: &str) -> IResult<&str, &'static str> {
    let (rest, matched) = alt((tag(GE), tag(EQ)))(input)?;
    Ok((rest, if matched == EQ { EQ } else { GE }))
}

fn object_type(input: &str) -> IResult<&str, &'static str> {
    match keywords::object_prefix(input) {
        Some(name) => Ok((&input[name.len()..], name)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

/// Object type, optionally followed by `-ET` for threshold types.
fn typed_prefix(input: &str) -> IResult<&str, &'static str> {
    let (rest, type_name) = object_type(input)?;
    if !THRESHOLD_OBJECTS.contains(&type_name) {
        return Ok((rest, type_name));
    }
    let (rest, _) = opt(pair(char(SEPARATOR), tag(ET)))(rest)?;
    Ok((rest, type_name))
}

fn cut_name(input: &str) -> IResult<&str, &str> {
    verify(
        take_while1(|c: char| c.is_ascii_alphanumeric() || "_-.".contains(c)),
        keywords::is_cut_name,
    )(input)
}

/// Bracketed, comma separated cut list (`[MU-ETA_2p1, MU-QLTY_SNGL]`)
pub(crate) fn cut_list(input: &str) -> IResult<&str, Vec<&str>> {
    delimited(
        pair(char('['), space0),
        separated_list1(delimited(space0, char(','), space0), cut_name),
        pair(space0, char(']')),
    )(input)
}

fn object_item(input: &str) -> IResult<&str, ObjectItem> {
    let (rest, (type_name, comparison, threshold, bx_offset, cuts)) = tuple((
        object_type,
        opt(comparison),
        threshold,
        opt(bx_offset),
        opt(cut_list),
    ))(input)?;

    Ok((
        rest,
        ObjectItem {
            type_name,
            comparison: comparison.unwrap_or(GE),
            threshold: threshold.to_string(),
            bx_offset: bx_offset.unwrap_or(0),
            cuts: cuts
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
    ))
}

fn external_item(input: &str) -> IResult<&str, ExternalItem> {
    let (rest, (signal, bx_offset)) = pair(
        recognize(preceded(
            tag(EXT_PREFIX),
            take_while1(|c: char| c.is_ascii_alphanumeric() || c == '.' || c == '_'),
        )),
        opt(bx_offset),
    )(input)?;

    Ok((
        rest,
        ExternalItem {
            signal: signal.to_string(),
            bx_offset: bx_offset.unwrap_or(0),
        },
    ))
}

/// Parse an object requirement token.
pub fn parse_object(token: &str) -> Result<ObjectItem> {
    if keywords::object_prefix(token).is_none() {
        return Err(GrammarError::UnknownObjectType(token.to_string()));
    }
    match all_consuming(object_item)(token) {
        Ok((_, item)) => Ok(item),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(GrammarError::InvalidObject {
            token: token.to_string(),
            offset: token.len() - e.input.len(),
        }),
        Err(nom::Err::Incomplete(_)) => Err(GrammarError::InvalidObject {
            token: token.to_string(),
            offset: token.len(),
        }),
    }
}

/// Parse an external signal token.
pub fn parse_external(token: &str) -> Result<ExternalItem> {
    all_consuming(external_item)(token)
        .map(|(_, item)| item)
        .map_err(|_| GrammarError::InvalidExternal(token.to_string()))
}
