//! Data model of a trigger menu

mod algorithm;
mod cut;
mod external;
mod object;
mod scale;

pub use algorithm::Algorithm;
pub use cut::{Cut, CutValue};
pub use external::External;
pub use object::Object;
pub use scale::Scale;

use crate::error::ModelError;
use regex::Regex;
use std::sync::OnceLock;

/// Regex stored in `cell`, compiled on first use.
pub(crate) fn compiled(
    cell: &'static OnceLock<Regex>,
    pattern: &str,
) -> Result<&'static Regex, ModelError> {
    if let Some(regex) = cell.get() {
        return Ok(regex);
    }
    let regex = Regex::new(pattern).map_err(|e| ModelError::Pattern(e.to_string()))?;
    Ok(cell.get_or_init(|| regex))
}
