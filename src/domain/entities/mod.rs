//! Domain Entities
//!
//! The structures the rewrite engine mutates in place:
//! - `ServiceSpec` - one Compose service (networks, environment)
//! - `ProxyEntry` - one reverse-proxy route (upstream, server_sni)

mod compose_service;
mod proxy_entry;

pub use compose_service::{ComposeServices, Environment, NetworkConfig, Networks, ServiceSpec};
pub use proxy_entry::{split_host_port, ProxyEntry};
