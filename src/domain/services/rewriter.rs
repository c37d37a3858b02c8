//! Composed text rewriter
//!
//! FQDN flattening first, then alias resolution. Alias keys are short names,
//! so an FQDN has to be flattened before an alias can match it.

use std::borrow::Cow;

use super::alias::resolve_aliases;
use super::fqdn::flatten_fqdns;
use crate::domain::value_objects::AliasMap;

/// Flatten FQDNs in `text`, then resolve aliases in hostname position.
///
/// Alias resolution is skipped entirely when the map is empty. The result is
/// borrowed when nothing changed.
pub fn rewrite_text<'a>(text: &'a str, aliases: &AliasMap) -> Cow<'a, str> {
    let flattened = flatten_fqdns(text);
    if aliases.is_empty() {
        return flattened;
    }

    match flattened {
        Cow::Borrowed(text) => resolve_aliases(text, aliases),
        Cow::Owned(text) => {
            let resolved = match resolve_aliases(&text, aliases) {
                Cow::Owned(resolved) => Some(resolved),
                Cow::Borrowed(_) => None,
            };
            Cow::Owned(resolved.unwrap_or(text))
        }
    }
}

/// Text rewriter bound to one alias map
#[derive(Debug, Clone, Copy)]
pub struct TextRewriter<'m> {
    aliases: &'m AliasMap,
}

impl<'m> TextRewriter<'m> {
    pub fn new(aliases: &'m AliasMap) -> Self {
        Self { aliases }
    }

    pub fn aliases(&self) -> &'m AliasMap {
        self.aliases
    }

    /// See [`rewrite_text`]
    pub fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        rewrite_text(text, self.aliases)
    }

    /// Rewrite `value` in place; returns whether it changed.
    ///
    /// An unchanged value is not reassigned.
    pub fn rewrite_in_place(&self, value: &mut String) -> bool {
        replace_if_owned(value, |text| rewrite_text(text, self.aliases))
    }

    /// Flatten FQDNs in `value` without alias resolution; returns whether it changed
    pub fn flatten_in_place(&self, value: &mut String) -> bool {
        replace_if_owned(value, flatten_fqdns)
    }
}

fn replace_if_owned<F>(value: &mut String, rewrite: F) -> bool
where
    F: for<'t> Fn(&'t str) -> Cow<'t, str>,
{
    let rewritten = match rewrite(value.as_str()) {
        Cow::Owned(rewritten) if rewritten != *value => rewritten,
        _ => return false,
    };
    *value = rewritten;
    true
}
