//! Every referenced cut exists in the menu

use crate::classifier::{self, FunctionToken};
use crate::context::MenuContext;
use crate::error::{AlgorithmSyntaxError, ParseError, Result, SyntaxError};
use crate::tokenizer::tokenize;

pub(super) fn check(expression: &str, context: &dyn MenuContext) -> Result<()> {
    let fail = |e: ParseError| SyntaxError::new(expression, e);

    for token in tokenize(expression)? {
        let names = if classifier::is_object_requirement(&token) {
            classifier::object_cuts(&token).map_err(fail)?
        } else if classifier::is_function(&token) {
            let function = FunctionToken::parse(&token).map_err(fail)?;
            let mut names = function.cuts().to_vec();
            names.extend(function.object_cuts());
            names
        } else {
            continue;
        };

        if let Some(name) = names
            .iter()
            .find(|name| context.cut_by_name(name).is_none())
        {
            return Err(AlgorithmSyntaxError::with_token(
                format!("Cut \"{name}\" is not defined.\nInvalid expression near \"{token}\""),
                token,
            )
            .into());
        }
    }
    Ok(())
}
