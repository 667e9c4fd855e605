//! Function cuts are of a type the function accepts

use super::function_tokens;
use crate::classifier::cut_type_of;
use crate::context::MenuContext;
use crate::error::{AlgorithmSyntaxError, Result};

pub(super) fn check(expression: &str, context: &dyn MenuContext) -> Result<()> {
    for (token, function) in function_tokens(expression, |_| true)? {
        let function_type = function.function_type();
        for name in function.cuts() {
            let cut_type = context
                .cut_by_name(name)
                .map(|cut| cut.cut_type)
                .or_else(|| cut_type_of(name));
            let permitted = cut_type
                .is_some_and(|cut_type| function_type.permitted_cuts().contains(&cut_type));
            if !permitted {
                let type_name = cut_type.map_or_else(|| "unknown".to_string(), |t| t.to_string());
                return Err(AlgorithmSyntaxError::with_token(
                    format!(
                        "Cut \"{name}\" of type {type_name} is not permitted for function {function_type}{{...}}.\n\
                         Invalid expression near \"{token}\""
                    ),
                    token,
                )
                .into());
            }
        }
    }
    Ok(())
}
