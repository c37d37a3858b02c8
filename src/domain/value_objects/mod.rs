//! Domain Value Objects
//!
//! Immutable value types handed to the rewrite engine by the caller.

mod alias_map;
mod transform_context;

pub use alias_map::AliasMap;
pub use transform_context::{TransformContext, CONFIGMAPS_DIR};
