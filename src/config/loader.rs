//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::TransformContext;
use crate::error::{FlattenError, FlattenResult};

use super::types::FlattenConfig;

/// Environment variable overriding `output_dir`
pub const OUTPUT_DIR_ENV: &str = "COMPOSEFLAT_OUTPUT_DIR";

/// Non-fatal configuration warning (e.g. an unknown key)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
}

/// Parse a context from TOML text. `file` is only used in error messages.
pub fn from_toml_str(content: &str, file: &Path) -> FlattenResult<TransformContext> {
    parse(content, file).map(|(config, _)| config.into_context())
}

/// Load a context file and apply environment overrides
pub fn load(path: &Path) -> FlattenResult<TransformContext> {
    load_with_warnings(path).map(|(ctx, _)| ctx)
}

/// Load a context file, collecting non-fatal warnings.
///
/// A relative `output_dir` is resolved against the file's directory.
pub fn load_with_warnings(path: &Path) -> FlattenResult<(TransformContext, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| FlattenError::ReadFile {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    let (mut config, unknown) = parse(&content, path)?;
    if let Some(dir) = config.output_dir.as_mut() {
        if dir.is_relative() {
            if let Some(base) = path.parent() {
                *dir = base.join(&*dir);
            }
        }
    }

    let warnings = unknown
        .into_iter()
        .map(|key_path| {
            let key = key_path
                .split('.')
                .next_back()
                .unwrap_or(key_path.as_str())
                .to_string();
            tracing::warn!(key = %key_path, file = %path.display(), "unknown config key");
            ConfigWarning {
                line: find_line_number(&content, &key),
                key,
                file: path.to_path_buf(),
            }
        })
        .collect();

    Ok((with_env_overrides(config.into_context()), warnings))
}

fn parse(content: &str, file: &Path) -> FlattenResult<(FlattenConfig, Vec<String>)> {
    let mut unknown = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);
    let config: FlattenConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown.push(p.to_string());
    })
    .map_err(|e| FlattenError::InvalidConfig {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok((config, unknown))
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content.lines().enumerate().find_map(|(idx, line)| {
        let trimmed = line.trim_start();
        let matches = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        matches.then_some(idx + 1)
    })
}

/// Apply environment variable overrides (COMPOSEFLAT_* prefix)
pub fn with_env_overrides(ctx: TransformContext) -> TransformContext {
    with_env_overrides_from(ctx, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`; empty values are ignored
pub fn with_env_overrides_from<F>(mut ctx: TransformContext, lookup: F) -> TransformContext
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|dir| !dir.is_empty()) {
        ctx.set_output_dir(PathBuf::from(dir));
    }
    ctx
}
