//! composeflat - Kubernetes FQDN flattening for Compose deployments
//!
//! One stage of a Kubernetes → Docker Compose conversion pipeline. It removes
//! references to cluster-internal DNS names (`svc.ns.svc.cluster.local`) and
//! network aliases so the Compose (or nerdctl) deployment resolves services by
//! their short service name only.
//!
//! ```
//! use composeflat::{rewrite_text, AliasMap};
//!
//! let aliases: AliasMap = [("cache", "redis")].into_iter().collect();
//! assert_eq!(
//!     rewrite_text("redis://cache.default.svc.cluster.local:6379/0", &aliases),
//!     "redis://redis:6379/0"
//! );
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{FlattenInternalUrls, FlattenSummary, FLATTEN_PRIORITY};
pub use domain::entities::{
    ComposeServices, Environment, NetworkConfig, Networks, ProxyEntry, ServiceSpec,
};
pub use domain::ports::{FileSystem, Transform};
pub use domain::services::{flatten_fqdns, resolve_aliases, rewrite_text, TextRewriter};
pub use domain::value_objects::{AliasMap, TransformContext};
pub use error::{FlattenError, FlattenResult};
pub use infrastructure::LocalFs;
