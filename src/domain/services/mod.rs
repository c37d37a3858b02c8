//! Domain Services
//!
//! Pure text rewriting. No I/O; every function maps text to text.

mod alias;
mod fqdn;
mod rewriter;

pub use alias::{is_host_prefix, is_host_suffix, replace_alias, resolve_aliases};
pub use fqdn::{flatten_fqdns, is_dns_label};
pub use rewriter::{rewrite_text, TextRewriter};
