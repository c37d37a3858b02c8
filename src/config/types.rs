//! Configuration type definitions

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{AliasMap, TransformContext};

/// On-disk form of a transform context
///
/// ```toml
/// output_dir = "out"
///
/// [aliases]
/// cache = "redis"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlattenConfig {
    /// Directory the converter writes into; `configmaps/` lives below it
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Internal short name → Compose service name, applied in file order
    #[serde(default)]
    pub aliases: AliasMap,
}

impl FlattenConfig {
    /// Build the context handed to transform stages.
    ///
    /// A missing `output_dir` means the current directory.
    pub fn into_context(self) -> TransformContext {
        let output_dir = self.output_dir.unwrap_or_else(|| PathBuf::from("."));
        TransformContext::new(self.aliases, output_dir)
    }
}
