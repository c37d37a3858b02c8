//! Alias resolution in hostname position
//!
//! An alias key is only rewritten where it reads as a hostname: directly after
//! `/` or `@` (`scheme://host`, `user@host`) and directly before `/`, `:`,
//! whitespace, a quote, or the end of the text. Anything else, such as a
//! bucket called `my-cache-bucket`, is left alone.

use std::borrow::Cow;

use crate::domain::value_objects::AliasMap;

/// Characters that may precede a hostname
pub fn is_host_prefix(c: char) -> bool {
    matches!(c, '/' | '@')
}

/// Characters that may follow a hostname; `None` is the end of the text.
///
/// Whitespace includes the ASCII separators U+001C..=U+001F.
pub fn is_host_suffix(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => {
            matches!(c, '/' | ':' | '"' | '\'' | '\u{1c}'..='\u{1f}') || c.is_whitespace()
        }
    }
}

/// Check whether `text[start..end]` sits in hostname position
fn in_host_position(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    before.is_some_and(is_host_prefix) && is_host_suffix(after)
}

/// Replace every hostname-position occurrence of `alias` with `target`
pub fn replace_alias<'a>(text: &'a str, alias: &str, target: &str) -> Cow<'a, str> {
    if alias.is_empty() {
        return Cow::Borrowed(text);
    }

    let mut out = String::new();
    let mut copied = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(alias) {
        let start = cursor + offset;
        let end = start + alias.len();
        if in_host_position(text, start, end) {
            out.push_str(&text[copied..start]);
            out.push_str(target);
            copied = end;
            cursor = end;
        } else {
            // Step one character so overlapping candidates are still tried
            cursor = start + text[start..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if copied == 0 {
        return Cow::Borrowed(text);
    }
    out.push_str(&text[copied..]);
    Cow::Owned(out)
}

/// Apply every alias in map order, each over the output of the previous one.
///
/// With `{a: b, b: c}` a hostname `a` ends up
/// as `c`. See [`AliasMap::chained`].
pub fn resolve_aliases<'a>(text: &'a str, aliases: &AliasMap) -> Cow<'a, str> {
    let mut current = Cow::Borrowed(text);
    for (alias, target) in aliases.iter() {
        let next = match replace_alias(&current, alias, target) {
            Cow::Owned(next) => next,
            Cow::Borrowed(_) => continue,
        };
        current = Cow::Owned(next);
    }
    current
}
