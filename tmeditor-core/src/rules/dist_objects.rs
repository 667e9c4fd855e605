//! Distance functions take exactly two objects

use super::function_tokens;
use crate::error::{AlgorithmSyntaxError, Result};

const DIST_OBJECTS: usize = 2;

pub(super) fn check(expression: &str) -> Result<()> {
    for (token, function) in function_tokens(expression, |ty| ty.is_distance())? {
        if function.objects().len() != DIST_OBJECTS {
            return Err(AlgorithmSyntaxError::with_token(
                format!(
                    "Function dist{{...}} requires exactly two object requirements.\n\
                     Invalid expression near \"{token}\""
                ),
                token,
            )
            .into());
        }
    }
    Ok(())
}
