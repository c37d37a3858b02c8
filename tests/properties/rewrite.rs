//! Property tests for the text rewriter.

use proptest::prelude::*;

use composeflat::{flatten_fqdns, rewrite_text, AliasMap};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,6}").unwrap()
}

/// Alias keys and targets come from disjoint alphabets so no target is
/// itself a key.
fn alias_map() -> impl Strategy<Value = AliasMap> {
    proptest::collection::vec(("k[a-c]", "t[a-c]"), 0..=3)
        .prop_map(|pairs| pairs.into_iter().collect())
}

fn fqdn() -> impl Strategy<Value = String> {
    (
        prop_oneof![label(), "k[a-c]"],
        label(),
        prop::bool::ANY,
    )
        .prop_map(|(service, namespace, long)| {
            let suffix = if long { ".cluster.local" } else { "" };
            format!("{service}.{namespace}.svc{suffix}")
        })
}

fn token() -> impl Strategy<Value = String> {
    prop_oneof![label(), "k[a-c]", fqdn()]
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(" "),
        Just("\n"),
        Just("/"),
        Just("://"),
        Just("@"),
        Just(":"),
        Just("="),
        Just("\""),
        Just("'"),
        Just("-"),
        Just("_"),
    ]
}

/// Tokens joined by separators that never contain a dot, so flattening
/// one token cannot create a new FQDN out of its neighbors.
fn document() -> impl Strategy<Value = String> {
    proptest::collection::vec((separator(), token()), 0..=12).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(sep, tok)| format!("{sep}{tok}"))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Rewriting never panics on arbitrary input.
    #[test]
    fn property_rewrite_never_panics(
        s in "(?s).{0,256}",
        aliases in alias_map()
    ) {
        let _ = rewrite_text(&s, &aliases);
    }

    /// PROPERTY: A second rewrite with the same map changes nothing.
    #[test]
    fn property_rewrite_is_idempotent(
        text in document(),
        aliases in alias_map()
    ) {
        let once = rewrite_text(&text, &aliases).into_owned();
        let twice = rewrite_text(&once, &aliases).into_owned();
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Text without a dot holds no FQDN and flattens to itself.
    #[test]
    fn property_dotless_text_is_unchanged(
        s in "[^.]{0,128}"
    ) {
        prop_assert_eq!(flatten_fqdns(&s), s.as_str());
        prop_assert_eq!(rewrite_text(&s, &AliasMap::new()), s.as_str());
    }

    /// PROPERTY: Flattened output never holds a recognizable FQDN.
    #[test]
    fn property_flattened_documents_hold_no_fqdn(
        text in document()
    ) {
        let flat = flatten_fqdns(&text);
        prop_assert!(!flat.contains(".svc"), "still has .svc: {flat:?}");
    }
}
