//! Alias Map Value Object
//!
//! Maps internal (Kubernetes) short service names to the service names the
//! Compose deployment actually exposes.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from internal short name to target service name.
///
/// Insertion order is preserved and significant: aliases are applied one after
/// another, so a target that equals a later key gets rewritten again.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(IndexMap<String, String>);

impl AliasMap {
    /// Create an empty alias map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an alias. Replacing keeps the original position.
    pub fn insert(&mut self, alias: impl Into<String>, target: impl Into<String>) {
        self.0.insert(alias.into(), target.into());
    }

    /// Look up the target for an exact alias
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.0.get(alias).map(String::as_str)
    }

    /// Resolve a host by exact lookup, falling back to the host itself
    pub fn resolve<'a>(&'a self, host: &'a str) -> &'a str {
        self.get(host).unwrap_or(host)
    }

    /// Iterate `(alias, target)` pairs in application order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Aliases whose target is itself another alias key.
    ///
    /// These get substituted twice when the earlier key is applied first.
    pub fn chained(&self) -> Vec<(&str, &str)> {
        self.iter()
            .filter(|(alias, target)| alias != target && self.0.contains_key(*target))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AliasMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
