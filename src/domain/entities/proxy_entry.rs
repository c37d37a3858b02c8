//! Reverse-proxy entry entity
//!
//! One Caddy reverse-proxy route as produced by the converter. Caddy's native
//! config is JSON, so fields not interpreted here are kept as JSON values.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A reverse-proxy route to an upstream service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyEntry {
    /// Bare `host:port` of the upstream; absent is treated as `""`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upstream: Option<String>,

    /// Hostname presented via TLS SNI to the upstream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_sni: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProxyEntry {
    pub fn new(upstream: impl Into<String>) -> Self {
        Self {
            upstream: Some(upstream.into()),
            ..Self::default()
        }
    }

    pub fn with_server_sni(mut self, sni: impl Into<String>) -> Self {
        self.server_sni = Some(sni.into());
        self
    }

    pub fn upstream(&self) -> &str {
        self.upstream.as_deref().unwrap_or("")
    }

    pub fn server_sni(&self) -> Option<&str> {
        self.server_sni.as_deref()
    }
}

/// Split `host:port` on the last colon.
///
/// Without a colon the whole string is the host. Bracketed IPv6 literals are
/// not special-cased.
pub fn split_host_port(upstream: &str) -> (&str, Option<&str>) {
    match upstream.rsplit_once(':') {
        Some((host, port)) => (host, Some(port)),
        None => (upstream, None),
    }
}
