//! Transform stage port
//!
//! A conversion pipeline runs a list of stages over the same Compose services
//! and proxy entries. Stages are ordered by ascending priority.

use crate::domain::entities::{ComposeServices, ProxyEntry};
use crate::domain::value_objects::TransformContext;
use crate::error::FlattenResult;

/// One stage of the Kubernetes → Compose conversion pipeline
pub trait Transform {
    /// Relative execution order; larger values run later
    fn priority(&self) -> i32;

    /// Mutate `services` and `proxy_entries` in place.
    ///
    /// The caller holds exclusive access to both for the whole call; `ctx` is
    /// read-only.
    fn transform(
        &self,
        services: &mut ComposeServices,
        proxy_entries: &mut [ProxyEntry],
        ctx: &TransformContext,
    ) -> FlattenResult<()>;
}
