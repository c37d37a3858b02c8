//! Kubernetes FQDN flattening
//!
//! Reduces `<service>.<namespace>.svc[.cluster.local]` to `<service>`
//! wherever it appears in a piece of text.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// A DNS label: lowercase alphanumerics and hyphens, no leading or trailing hyphen.
const DNS_LABEL: &str = r"[a-z0-9](?:[a-z0-9-]*[a-z0-9])?";

/// Internal service DNS name; the service label is captured, the namespace is not.
static K8S_DNS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<service>{DNS_LABEL})\.(?:{DNS_LABEL})\.svc(?:\.cluster\.local)?"
    ))
    .expect("K8s DNS pattern is valid")
});

/// Replace every internal service FQDN in `text` with its bare service name.
///
/// Matching is case-sensitive: Kubernetes service and namespace names are
/// always lowercase. The namespace label is discarded without validation.
/// Borrows when nothing matched.
///
/// ```
/// use composeflat::domain::services::flatten_fqdns;
///
/// assert_eq!(
///     flatten_fqdns("redis://cache.default.svc.cluster.local:6379/0"),
///     "redis://cache:6379/0"
/// );
/// ```
pub fn flatten_fqdns(text: &str) -> Cow<'_, str> {
    K8S_DNS_RE.replace_all(text, "$service")
}

/// Check whether `label` is a valid lowercase DNS label
pub fn is_dns_label(label: &str) -> bool {
    static LABEL_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(&format!("^{DNS_LABEL}$")).expect("DNS label pattern is valid")
    });
    LABEL_RE.is_match(label)
}
