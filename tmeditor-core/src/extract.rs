//! Reference extraction
//!
//! Each collector tokenizes the expression once and walks the tokens,
//! keeping the first occurrence of every name. Nothing is shared between
//! calls, so collectors may run concurrently on the same text.

use crate::classifier::{self, FunctionToken};
use crate::error::{ParseError, SyntaxError};
use crate::model::{External, Object};
use crate::tokenizer::tokenize;

fn push_unique(names: &mut Vec<String>, name: &str) {
    if !names.iter().any(|known| known == name) {
        names.push(name.to_string());
    }
}

/// Objects referenced directly or as function operands, deduplicated by
/// name.
pub fn collect_objects(expression: &str) -> Result<Vec<Object>, SyntaxError> {
    let fail = |e: ParseError| SyntaxError::new(expression, e);
    let mut objects: Vec<Object> = Vec::new();
    let mut push = |object: Object| {
        if !objects.iter().any(|known| known.name() == object.name()) {
            objects.push(object);
        }
    };

    for token in tokenize(expression)? {
        if classifier::is_object_requirement(&token) {
            push(classifier::to_object(&token).map_err(fail)?);
        } else if classifier::is_function(&token) {
            for object in classifier::function_objects(&token).map_err(fail)? {
                push(object);
            }
        }
    }
    log::debug!("collected {} objects from `{}`", objects.len(), expression);
    Ok(objects)
}

/// External signals referenced, deduplicated by name.
pub fn collect_externals(expression: &str) -> Result<Vec<External>, SyntaxError> {
    let mut externals: Vec<External> = Vec::new();
    for token in tokenize(expression)? {
        if classifier::is_external_signal(&token)
            && !externals.iter().any(|known| known.name() == token)
        {
            externals.push(classifier::to_external(&token));
        }
    }
    log::debug!("collected {} externals from `{}`", externals.len(), expression);
    Ok(externals)
}

/// Cut names attached to objects, to functions and to function operands.
pub fn collect_cuts(expression: &str) -> Result<Vec<String>, SyntaxError> {
    let fail = |e: ParseError| SyntaxError::new(expression, e);
    let mut cuts = Vec::new();

    for token in tokenize(expression)? {
        if classifier::is_object_requirement(&token) {
            for name in classifier::object_cuts(&token).map_err(fail)? {
                push_unique(&mut cuts, &name);
            }
        } else if classifier::is_function(&token) {
            let function = FunctionToken::parse(&token).map_err(fail)?;
            for name in function.cuts() {
                push_unique(&mut cuts, name);
            }
            for name in function.object_cuts() {
                push_unique(&mut cuts, &name);
            }
        }
    }
    log::debug!("collected {} cuts from `{}`", cuts.len(), expression);
    Ok(cuts)
}
