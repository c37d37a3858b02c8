//! Configuration module for composeflat
//!
//! A transform context is normally built by the surrounding converter. For
//! standalone runs and tests it can be loaded from TOML:
//! 1. Environment variables (COMPOSEFLAT_*)
//! 2. Context file
//! 3. Built-in defaults

mod loader;
mod types;

pub use loader::{
    from_toml_str, load, load_with_warnings, with_env_overrides, with_env_overrides_from,
    ConfigWarning, OUTPUT_DIR_ENV,
};
pub use types::FlattenConfig;
