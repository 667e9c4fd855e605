//! Splits expression text into parentheses and words
//!
//! A word runs until whitespace or a parenthesis, except inside `{...}`
//! and `[...]` groups which may hold commas and spaces.

use crate::error::{GrammarError, Result};
use nom::{
    branch::alt,
    bytes::complete::take_while,
    character::complete::{char, satisfy},
    combinator::{map, recognize, value},
    multi::many1_count,
    sequence::delimited,
    IResult,
};

/// Lexical unit of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lexeme<'a> {
    Open,
    Close,
    Word(&'a str),
}

fn group<'a>(open: char, close: char) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    recognize(delimited(
        char(open),
        take_while(move |c| c != open && c != close),
        char(close),
    ))
}

fn plain_char(input: &str) -> IResult<&str, char> {
    satisfy(|c| !c.is_whitespace() && !"()[]{}".contains(c))(input)
}

fn word(input: &str) -> IResult<&str, &str> {
    recognize(many1_count(alt((
        group('{', '}'),
        group('[', ']'),
        recognize(plain_char),
    ))))(input)
}

fn lexeme(input: &str) -> IResult<&str, Lexeme<'_>> {
    alt((
        value(Lexeme::Open, char('(')),
        value(Lexeme::Close, char(')')),
        map(word, Lexeme::Word),
    ))(input)
}

/// Lex a complete expression.
pub(crate) fn lex(input: &str) -> Result<Vec<Lexeme<'_>>> {
    let mut lexemes = Vec::new();
    let mut rest = input.trim_start();

    while !rest.is_empty() {
        match lexeme(rest) {
            Ok((remaining, lx)) => {
                lexemes.push(lx);
                rest = remaining.trim_start();
            }
            Err(_) => {
                return Err(GrammarError::UnexpectedCharacter {
                    offset: input.len() - rest.len(),
                    found: rest.chars().next().unwrap_or_default(),
                })
            }
        }
    }

    Ok(lexemes)
}
