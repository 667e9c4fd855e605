//! Function items
//!
//! Function grammar: `NAME '{' operand (',' operand)* '}' ['[' cut, ... ']']`
//! where every operand is an object requirement or an external signal,
//! optionally carrying its own cut list.

use crate::error::{GrammarError, Result};
use crate::keywords::{self, EXT_PREFIX};
use crate::object::{cut_list, parse_external, parse_object};
use nom::{
    bytes::complete::take_while1,
    character::complete::{char, multispace0},
    combinator::{all_consuming, consumed, opt},
    multi::separated_list1,
    sequence::{delimited, pair, tuple},
    IResult,
};

/// Single operand of a function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOperand {
    /// Operand text including its cut list (`MU10[MU-ETA_2p1]`)
    pub token: String,
    /// Cut names attached to the operand
    pub cuts: Vec<String>,
}

/// Parsed function
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionItem {
    /// Function name (`comb`, `dist`, ...)
    pub name: &'static str,
    /// Operands in order of appearance
    pub operands: Vec<FunctionOperand>,
    /// Cut names attached to the function itself
    pub cuts: Vec<String>,
}

impl FunctionItem {
    /// Operand tokens in order of appearance.
    pub fn objects(&self) -> impl Iterator<Item = &str> {
        self.operands.iter().map(|operand| operand.token.as_str())
    }

    /// One comma-joined cut field per operand, empty when the operand has
    /// no cuts.
    pub fn object_cuts(&self) -> Vec<String> {
        self.operands
            .iter()
            .map(|operand| operand.cuts.join(","))
            .collect()
    }

    /// Function level cut names.
    pub fn cuts(&self) -> &[String] {
        &self.cuts
    }
}

fn function_name(input: &str) -> IResult<&str, &'static str> {
    match keywords::function_prefix(input) {
        Some(name) => Ok((&input[name.len()..], name)),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::Tag,
        ))),
    }
}

fn operand(input: &str) -> IResult<&str, (&str, Option<Vec<&str>>)> {
    let (rest, (token, (_, cuts))) = consumed(pair(
        take_while1(|c: char| !c.is_whitespace() && !",{}[]".contains(c)),
        opt(cut_list),
    ))(input)?;
    Ok((rest, (token, cuts)))
}

type RawFunction<'a> = (&'static str, Vec<(&'a str, Option<Vec<&'a str>>)>, Option<Vec<&'a str>>);

fn function_item(input: &str) -> IResult<&str, RawFunction<'_>> {
    tuple((
        function_name,
        delimited(
            pair(char('{'), multispace0),
            separated_list1(delimited(multispace0, char(','), multispace0), operand),
            pair(multispace0, char('}')),
        ),
        opt(cut_list),
    ))(input)
}

fn check_operand(token: &str, operand: &str) -> Result<()> {
    let parsed = if operand.starts_with(EXT_PREFIX) {
        parse_external(operand).map(|_| ())
    } else {
        parse_object(operand).map(|_| ())
    };
    parsed.map_err(|e| GrammarError::InvalidFunction {
        token: token.to_string(),
        reason: e.to_string(),
    })
}

/// Parse a function token.
pub fn parse_function(token: &str) -> Result<FunctionItem> {
    if keywords::function_prefix(token).is_none() {
        return Err(GrammarError::InvalidFunction {
            token: token.to_string(),
            reason: "unknown function name".to_string(),
        });
    }

    let (name, raw_operands, cuts) = match all_consuming(function_item)(token) {
        Ok((_, raw)) => raw,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(GrammarError::InvalidFunction {
                token: token.to_string(),
                reason: format!("malformed near offset {}", token.len() - e.input.len()),
            })
        }
        Err(nom::Err::Incomplete(_)) => {
            return Err(GrammarError::InvalidFunction {
                token: token.to_string(),
                reason: "incomplete function".to_string(),
            })
        }
    };

    let mut operands = Vec::with_capacity(raw_operands.len());
    for (operand, operand_cuts) in raw_operands {
        check_operand(token, operand)?;
        operands.push(FunctionOperand {
            token: operand.to_string(),
            cuts: operand_cuts
                .unwrap_or_default()
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    Ok(FunctionItem {
        name,
        operands,
        cuts: cuts
            .unwrap_or_default()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}
