//! Environment variable rewriting
//!
//! Connection strings in service environments are the most common place
//! internal FQDNs leak into a Compose file.

use serde_yaml_ng::Value;

use crate::domain::entities::{ComposeServices, Environment};
use crate::domain::services::TextRewriter;

/// Rewrite string environment values of every service.
///
/// Non-string values and services without an environment are skipped.
/// Values are only reassigned when the rewrite changed them. Returns the
/// number of values rewritten.
pub fn rewrite_environment(services: &mut ComposeServices, rewriter: &TextRewriter<'_>) -> usize {
    let mut rewritten = 0;

    for (service, spec) in services.iter_mut() {
        match spec.environment.as_mut() {
            Some(Environment::Map(env)) => {
                for (variable, value) in env.iter_mut() {
                    let Value::String(text) = value else {
                        continue;
                    };
                    if rewriter.rewrite_in_place(text) {
                        tracing::debug!(%service, %variable, "rewrote environment value");
                        rewritten += 1;
                    }
                }
            }
            Some(Environment::List(entries)) => {
                for entry in entries.iter_mut() {
                    if rewrite_list_entry(entry, rewriter) {
                        tracing::debug!(%service, entry = %entry, "rewrote environment entry");
                        rewritten += 1;
                    }
                }
            }
            None => {}
        }
    }

    rewritten
}

/// Rewrite the value half of a `KEY=value` entry; entries without `=` are
/// left alone
fn rewrite_list_entry(entry: &mut String, rewriter: &TextRewriter<'_>) -> bool {
    let Some((key, value)) = entry.split_once('=') else {
        return false;
    };
    let mut value = value.to_string();
    if !rewriter.rewrite_in_place(&mut value) {
        return false;
    }
    *entry = format!("{key}={value}");
    true
}
