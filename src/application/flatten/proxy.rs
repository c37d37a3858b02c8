//! Reverse-proxy entry rewriting
//!
//! Upstreams are bare `host:port`, so aliases are resolved by exact host
//! lookup rather than the hostname-position scan used for free text.
//! `server_sni` is only flattened: the certificate name a backend presents
//! does not follow Compose service renames.

use crate::domain::entities::{split_host_port, ProxyEntry};
use crate::domain::services::{flatten_fqdns, TextRewriter};
use crate::domain::value_objects::AliasMap;

/// Flatten an upstream, then resolve its host through the alias map
pub fn rewrite_upstream(upstream: &str, aliases: &AliasMap) -> String {
    let flattened = flatten_fqdns(upstream);
    match split_host_port(&flattened) {
        (host, Some(port)) => format!("{}:{}", aliases.resolve(host), port),
        (host, None) => aliases.resolve(host).to_string(),
    }
}

/// Rewrite upstream and SNI of every entry in place, preserving order.
///
/// Empty or missing upstreams are skipped. Returns the number of entries
/// that changed.
pub fn rewrite_proxy_entries(entries: &mut [ProxyEntry], rewriter: &TextRewriter<'_>) -> usize {
    let mut rewritten = 0;

    for entry in entries.iter_mut() {
        let mut changed = false;

        if let Some(upstream) = entry.upstream.as_mut().filter(|u| !u.is_empty()) {
            let resolved = rewrite_upstream(upstream, rewriter.aliases());
            if resolved != *upstream {
                tracing::debug!(from = %upstream, to = %resolved, "rewrote proxy upstream");
                *upstream = resolved;
                changed = true;
            }
        }

        if let Some(sni) = entry.server_sni.as_mut().filter(|s| !s.is_empty()) {
            changed |= rewriter.flatten_in_place(sni);
        }

        if changed {
            rewritten += 1;
        }
    }

    rewritten
}
