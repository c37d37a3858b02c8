//! Flatten Internal URLs Use Case
//!
//! Runs the four surface rewrites in their fixed order.

use crate::domain::entities::{ComposeServices, ProxyEntry};
use crate::domain::ports::{FileSystem, Transform};
use crate::domain::services::{is_dns_label, TextRewriter};
use crate::domain::value_objects::TransformContext;
use crate::error::FlattenResult;
use crate::infrastructure::fs::LocalFs;

use super::configmaps::rewrite_configmap_files;
use super::environment::rewrite_environment;
use super::networks::strip_network_aliases;
use super::proxy::rewrite_proxy_entries;
use super::result::FlattenSummary;

/// Stage priority; runs after the structural transforms that may still emit
/// Kubernetes-shaped names
pub const FLATTEN_PRIORITY: i32 = 200;

/// Strip network aliases and rewrite internal FQDNs to Compose service names.
///
/// Incompatible with cert-manager: issued certificates name the FQDNs this
/// stage removes.
#[derive(Debug, Clone, Default)]
pub struct FlattenInternalUrls<FS = LocalFs> {
    fs: FS,
}

impl FlattenInternalUrls<LocalFs> {
    /// Create the stage backed by the local file system
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl<FS: FileSystem> FlattenInternalUrls<FS> {
    /// Create the stage over a custom file system
    pub fn with_fs(fs: FS) -> Self {
        Self { fs }
    }

    /// Run all surfaces and report what changed.
    ///
    /// Order is fixed: strip aliases, environment, configmap files, proxy
    /// entries. An I/O error in the configmap step stops the run; proxy
    /// entries are then left untouched.
    pub fn run(
        &self,
        services: &mut ComposeServices,
        proxy_entries: &mut [ProxyEntry],
        ctx: &TransformContext,
    ) -> FlattenResult<FlattenSummary> {
        let aliases = ctx.alias_map();
        for (alias, _) in aliases.iter().filter(|(alias, _)| !is_dns_label(alias)) {
            tracing::warn!(alias = %alias, "alias is not a DNS label and never matches a flattened FQDN");
        }
        for (alias, target) in aliases.chained() {
            tracing::warn!(
                alias = %alias,
                to = %target,
                "alias target is itself an alias; matching hostnames are substituted twice"
            );
        }

        let rewriter = TextRewriter::new(aliases);
        let mut summary = FlattenSummary {
            aliases_stripped: strip_network_aliases(services),
            ..FlattenSummary::default()
        };
        summary.env_values_rewritten = rewrite_environment(services, &rewriter);
        summary.files_rewritten =
            rewrite_configmap_files(&self.fs, &ctx.configmaps_dir(), &rewriter)?;
        summary.proxy_entries_rewritten = rewrite_proxy_entries(proxy_entries, &rewriter);

        tracing::info!(
            aliases_stripped = summary.aliases_stripped,
            env_values = summary.env_values_rewritten,
            files = summary.files_rewritten,
            proxy_entries = summary.proxy_entries_rewritten,
            "flattened internal URLs"
        );
        Ok(summary)
    }
}

impl<FS: FileSystem> Transform for FlattenInternalUrls<FS> {
    fn priority(&self) -> i32 {
        FLATTEN_PRIORITY
    }

    fn transform(
        &self,
        services: &mut ComposeServices,
        proxy_entries: &mut [ProxyEntry],
        ctx: &TransformContext,
    ) -> FlattenResult<()> {
        self.run(services, proxy_entries, ctx).map(|_| ())
    }
}
