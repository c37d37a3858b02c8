//! Network alias stripping
//!
//! nerdctl ignores network aliases, so once every internal name is flattened
//! to a service name they are dead weight. They are removed unconditionally.

use crate::domain::entities::{ComposeServices, NetworkConfig, Networks};

/// Remove `aliases` from every network of every service.
///
/// A service whose network configs are all empty afterwards loses its
/// `networks` key altogether. Returns the number of alias lists removed.
pub fn strip_network_aliases(services: &mut ComposeServices) -> usize {
    let mut stripped = 0;

    for (name, service) in services.iter_mut() {
        let Some(Networks::Map(networks)) = service.networks.as_mut() else {
            continue;
        };

        for config in networks.values_mut().flatten() {
            if config.take_aliases() {
                stripped += 1;
            }
        }

        if networks.values().all(|config| config.as_ref().is_none_or(NetworkConfig::is_empty)) {
            tracing::debug!(service = %name, "dropping empty networks block");
            service.networks = None;
        }
    }

    stripped
}
