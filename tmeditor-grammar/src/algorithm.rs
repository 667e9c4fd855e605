//! Algorithm expression parsing
//!
//! Converts an infix expression into reverse-Polish token order with a
//! shunting-yard pass. Parentheses are consumed and never emitted.

use crate::error::{GrammarError, Result};
use crate::function::parse_function;
use crate::keywords::{self, AND, EXT_PREFIX, NOT, OR, XOR};
use crate::lexer::{lex, Lexeme};
use crate::object::{parse_external, parse_object};

/// Gate operators with their binding strength
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Not,
    And,
    Xor,
    Or,
}

impl Gate {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            NOT => Some(Gate::Not),
            AND => Some(Gate::And),
            XOR => Some(Gate::Xor),
            OR => Some(Gate::Or),
            _ => None,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Gate::Not => NOT,
            Gate::And => AND,
            Gate::Xor => XOR,
            Gate::Or => OR,
        }
    }

    fn precedence(self) -> u8 {
        match self {
            Gate::Not => 4,
            Gate::And => 3,
            Gate::Xor => 2,
            Gate::Or => 1,
        }
    }

    fn is_unary(self) -> bool {
        self == Gate::Not
    }
}

#[derive(Debug, Clone, Copy)]
enum Pending {
    Gate(Gate),
    Paren,
}

/// Check that a word is a well-formed operand.
fn check_operand(word: &str) -> Result<()> {
    if keywords::is_function(word) {
        parse_function(word).map(|_| ())
    } else if word.starts_with(EXT_PREFIX) {
        parse_external(word).map(|_| ())
    } else if keywords::is_object(word) {
        parse_object(word).map(|_| ())
    } else {
        Err(GrammarError::UnknownToken(word.to_string()))
    }
}

/// Parse an algorithm expression into reverse-Polish tokens.
///
/// Every operand is checked against the object, external and function
/// grammars; the first malformed one fails the whole expression.
///
/// ```
/// use tmeditor_grammar::parse_algorithm;
///
/// let tokens = parse_algorithm("MU10 AND (EG20 OR NOT JET30)").unwrap();
/// assert_eq!(tokens, ["MU10", "EG20", "JET30", "NOT", "OR", "AND"]);
/// ```
pub fn parse_algorithm(expression: &str) -> Result<Vec<String>> {
    let lexemes = lex(expression)?;
    if lexemes.is_empty() {
        return Err(GrammarError::EmptyExpression);
    }

    let mut output = Vec::with_capacity(lexemes.len());
    let mut pending: Vec<Pending> = Vec::new();
    let mut expect_operand = true;
    let mut last = "";

    for lexeme in lexemes {
        match lexeme {
            Lexeme::Open => {
                if !expect_operand {
                    return Err(GrammarError::UnexpectedToken("(".to_string()));
                }
                pending.push(Pending::Paren);
                last = "(";
            }
            Lexeme::Close => {
                if expect_operand {
                    return Err(GrammarError::MissingOperand {
                        near: ")".to_string(),
                    });
                }
                loop {
                    match pending.pop() {
                        Some(Pending::Gate(gate)) => output.push(gate.keyword().to_string()),
                        Some(Pending::Paren) => break,
                        None => return Err(GrammarError::UnbalancedParenthesis),
                    }
                }
                last = ")";
            }
            Lexeme::Word(word) => match Gate::from_keyword(word) {
                Some(gate) if gate.is_unary() => {
                    if !expect_operand {
                        return Err(GrammarError::UnexpectedToken(word.to_string()));
                    }
                    pending.push(Pending::Gate(gate));
                    last = word;
                }
                Some(gate) => {
                    if expect_operand {
                        return Err(GrammarError::MissingOperand {
                            near: word.to_string(),
                        });
                    }
                    while let Some(Pending::Gate(top)) = pending.last().copied() {
                        if top.precedence() < gate.precedence() {
                            break;
                        }
                        output.push(top.keyword().to_string());
                        pending.pop();
                    }
                    pending.push(Pending::Gate(gate));
                    expect_operand = true;
                    last = word;
                }
                None => {
                    if !expect_operand {
                        return Err(GrammarError::UnexpectedToken(word.to_string()));
                    }
                    check_operand(word)?;
                    output.push(word.to_string());
                    expect_operand = false;
                    last = word;
                }
            },
        }
    }

    if expect_operand {
        return Err(GrammarError::MissingOperand {
            near: last.to_string(),
        });
    }

    while let Some(item) = pending.pop() {
        match item {
            Pending::Gate(gate) => output.push(gate.keyword().to_string()),
            Pending::Paren => return Err(GrammarError::UnbalancedParenthesis),
        }
    }

    Ok(output)
}
