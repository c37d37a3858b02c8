//! Compose service entity
//!
//! Only the fields the rewrite engine touches are typed; everything else a
//! service carries is kept verbatim in `extra` so it round-trips untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;

/// Service name → service definition, in document order
pub type ComposeServices = IndexMap<String, ServiceSpec>;

/// One entry under `services:` in a Compose file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServiceSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networks: Option<Networks>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,

    /// Fields not interpreted here (image, ports, volumes, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// `networks:` in either Compose form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Networks {
    /// `networks: {net1: {aliases: [...]}, net2: ~}`
    Map(IndexMap<String, Option<NetworkConfig>>),
    /// `networks: [net1, net2]`
    List(Vec<String>),
}

/// Per-network settings of a service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Kept as a raw value: it is always removed, whatever its shape
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Value>,

    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl NetworkConfig {
    /// Remove the `aliases` key; returns whether one was present
    pub fn take_aliases(&mut self) -> bool {
        self.aliases.take().is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_none() && self.extra.is_empty()
    }
}

/// `environment:` in either Compose form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Environment {
    /// `environment: {KEY: value}`; values may be non-strings
    Map(IndexMap<String, Value>),
    /// `environment: ["KEY=value"]`
    List(Vec<String>),
}
