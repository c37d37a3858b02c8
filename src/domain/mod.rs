//! Domain Layer
//!
//! Pure rewrite logic and the data it operates on, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Compose services and reverse-proxy entries
//! - `value_objects/` - Alias map and transform context
//! - `services/` - FQDN flattening, alias resolution, composed rewriter
//! - `ports/` - Interface definitions for infrastructure and the pipeline

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
