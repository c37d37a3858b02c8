//! Flatten Internal URLs
//!
//! Applies the text rewriter to every surface where Kubernetes-internal
//! names end up after conversion:
//! - network aliases (removed outright)
//! - environment variables
//! - materialized ConfigMap files on disk
//! - reverse-proxy upstreams and SNI

mod configmaps;
mod environment;
mod networks;
mod proxy;
mod result;
mod use_case;

pub use configmaps::{
    apply_configmap_rewrites, plan_configmap_rewrites, rewrite_configmap_files, PlannedRewrite,
};
pub use environment::rewrite_environment;
pub use networks::strip_network_aliases;
pub use proxy::{rewrite_proxy_entries, rewrite_upstream};
pub use result::FlattenSummary;
pub use use_case::{FlattenInternalUrls, FLATTEN_PRIORITY};
