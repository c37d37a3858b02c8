//! Transform Context Value Object
//!
//! Read-only inputs handed to a pipeline stage by the surrounding converter.

use std::path::{Path, PathBuf};

use super::AliasMap;

/// Name of the subdirectory holding materialized ConfigMap files
pub const CONFIGMAPS_DIR: &str = "configmaps";

/// Context shared by every transform stage of one conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformContext {
    alias_map: AliasMap,
    output_dir: PathBuf,
}

impl TransformContext {
    pub fn new(alias_map: AliasMap, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            alias_map,
            output_dir: output_dir.into(),
        }
    }

    pub fn alias_map(&self) -> &AliasMap {
        &self.alias_map
    }

    /// Root directory the converter writes generated files into
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output_dir>/configmaps`, whether or not it exists
    pub fn configmaps_dir(&self) -> PathBuf {
        self.output_dir.join(CONFIGMAPS_DIR)
    }

    pub(crate) fn set_output_dir(&mut self, output_dir: PathBuf) {
        self.output_dir = output_dir;
    }
}
