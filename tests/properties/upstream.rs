//! Property tests for proxy upstream rewriting.

use proptest::prelude::*;

use composeflat::application::flatten::rewrite_upstream;
use composeflat::AliasMap;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: The port survives flattening and alias resolution.
    #[test]
    fn property_port_is_preserved(
        service in "[a-z][a-z0-9-]{0,10}[a-z0-9]",
        namespace in "[a-z][a-z0-9]{0,8}",
        port in 1u16..,
        target in "[a-z]{1,8}"
    ) {
        let aliases: AliasMap = [(service.clone(), target.clone())].into_iter().collect();
        let upstream = format!("{service}.{namespace}.svc.cluster.local:{port}");

        prop_assert_eq!(rewrite_upstream(&upstream, &aliases), format!("{target}:{port}"));
    }

    /// PROPERTY: Hosts missing from the map keep their flattened name.
    #[test]
    fn property_unmapped_host_is_flattened_only(
        service in "[a-z][a-z0-9]{0,10}",
        namespace in "[a-z][a-z0-9]{0,8}",
        port in 1u16..
    ) {
        let upstream = format!("{service}.{namespace}.svc:{port}");

        prop_assert_eq!(
            rewrite_upstream(&upstream, &AliasMap::new()),
            format!("{service}:{port}")
        );
    }
}
