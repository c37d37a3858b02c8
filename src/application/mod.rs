//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain rewrite rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `FlattenInternalUrls` - Flattens internal DNS names across all surfaces

pub mod flatten;

pub use flatten::{FlattenInternalUrls, FlattenSummary, FLATTEN_PRIORITY};
