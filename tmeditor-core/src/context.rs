//! Menu context consulted by the syntax rules

use crate::model::{Cut, Scale};
use crate::types::{ObjectType, ScaleType};

/// Read-only view of the menu an expression belongs to
pub trait MenuContext {
    /// Cut registered under `name`
    fn cut_by_name(&self, name: &str) -> Option<&Cut>;

    /// Scale of `kind` for `object`. When several are registered the first
    /// one is returned.
    fn scale_for(&self, object: ObjectType, kind: ScaleType) -> Option<&Scale>;
}
