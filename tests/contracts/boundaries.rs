//! Rewrite boundary contracts (REWRITE-001 through REWRITE-004)
//!
//! These contracts pin down exactly which occurrences of a name get
//! rewritten and which are left alone.

use crate::common::*;
use composeflat::{flatten_fqdns, rewrite_text, AliasMap};

/// CONTRACT REWRITE-001: FQDNs reduce to the service label
mod fqdn_reduction {
    use super::*;

    #[test]
    fn contract_cluster_local_fqdn_reduces_to_service() {
        assert_eq!(
            rewrite_text("redis://cache.default.svc.cluster.local:6379/0", &AliasMap::new()),
            "redis://cache:6379/0"
        );
    }

    #[test]
    fn contract_short_svc_fqdn_reduces_to_service() {
        assert_eq!(
            rewrite_text("http://api.prod.svc/health", &AliasMap::new()),
            "http://api/health"
        );
    }

    #[test]
    fn contract_namespace_is_discarded_unvalidated() {
        assert_eq!(flatten_fqdns("x.anything-at-all.svc"), "x");
    }

    #[test]
    fn contract_uppercase_is_not_recognized() {
        let text = "http://Api.Prod.svc/health";
        assert_eq!(flatten_fqdns(text), text);
    }
}

/// CONTRACT REWRITE-002: Aliases only match in hostname position
mod alias_boundaries {
    use super::*;

    #[test]
    fn contract_bucket_name_is_not_an_alias() {
        let map = aliases(&[("cache", "redis")]);
        assert_eq!(
            rewrite_text("s3://my-cache-bucket/obj", &map),
            "s3://my-cache-bucket/obj"
        );
    }

    #[test]
    fn contract_url_host_is_an_alias() {
        let map = aliases(&[("cache", "redis")]);
        assert_eq!(rewrite_text("redis://cache:6379", &map), "redis://redis:6379");
    }

    #[test]
    fn contract_userinfo_host_is_an_alias() {
        let map = aliases(&[("cache", "redis")]);
        assert_eq!(
            rewrite_text("redis://default@cache", &map),
            "redis://default@redis"
        );
    }

    #[test]
    fn contract_each_suffix_delimiter_is_accepted() {
        let map = aliases(&[("db", "postgres")]);
        for (input, expected) in [
            ("tcp://db/x", "tcp://postgres/x"),
            ("tcp://db:1", "tcp://postgres:1"),
            ("tcp://db next", "tcp://postgres next"),
            ("tcp://db\tnext", "tcp://postgres\tnext"),
            ("\"tcp://db\"", "\"tcp://postgres\""),
            ("'tcp://db'", "'tcp://postgres'"),
            ("tcp://db", "tcp://postgres"),
        ] {
            assert_eq!(rewrite_text(input, &map), expected, "input: {input:?}");
        }
    }

    #[test]
    fn contract_other_suffixes_are_rejected() {
        let map = aliases(&[("db", "postgres")]);
        for input in ["tcp://db.example.com", "tcp://db-replica:1", "tcp://db_1", "tcp://dbx"] {
            assert_eq!(rewrite_text(input, &map), input, "input: {input:?}");
        }
    }
}

/// CONTRACT REWRITE-003: Flattening happens before alias resolution
mod ordering {
    use super::*;

    #[test]
    fn contract_fqdn_is_flattened_then_aliased() {
        let map = aliases(&[("redis-master", "cache")]);
        assert_eq!(
            rewrite_text("redis://redis-master.shop.svc:6379/0", &map),
            "redis://cache:6379/0"
        );
    }

    #[test]
    fn contract_aliases_apply_in_map_order() {
        let forward = aliases(&[("a", "b"), ("b", "c")]);
        let backward = aliases(&[("b", "c"), ("a", "b")]);

        assert_eq!(rewrite_text("http://a/", &forward), "http://c/");
        assert_eq!(rewrite_text("http://a/", &backward), "http://b/");
    }
}

/// CONTRACT REWRITE-004: Rewriting is idempotent
mod idempotence {
    use super::*;

    #[test]
    fn contract_rewrite_twice_equals_rewrite_once() {
        let map = aliases(&[("redis-master", "cache"), ("postgres", "db")]);
        let text = COMPOSE_SERVICES;

        let once = rewrite_text(text, &map).into_owned();
        let twice = rewrite_text(&once, &map).into_owned();

        assert_eq!(once, twice);
    }
}
