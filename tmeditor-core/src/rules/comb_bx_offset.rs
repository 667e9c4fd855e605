//! All objects of a combination share one bunch crossing offset

use super::function_tokens;
use crate::error::{AlgorithmSyntaxError, Result};

pub(super) fn check(expression: &str) -> Result<()> {
    for (token, function) in function_tokens(expression, |ty| ty.is_combination())? {
        let Some(first) = function.objects().first() else {
            continue;
        };
        if function
            .objects()
            .iter()
            .any(|object| object.bx_offset() != first.bx_offset())
        {
            return Err(AlgorithmSyntaxError::with_token(
                format!(
                    "All object requirements of function comb{{...}} must be of same bunch crossing offset.\n\
                     Invalid expression near \"{token}\""
                ),
                token,
            )
            .into());
        }
    }
    Ok(())
}
