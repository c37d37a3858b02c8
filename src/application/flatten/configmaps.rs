//! ConfigMap file rewriting
//!
//! The converter materializes ConfigMap data as plain files under
//! `<output_dir>/configmaps/`. Those bodies (nginx configs, application
//! properties, ...) reference internal FQDNs just like environment values do.
//!
//! Every file is read and rewritten in memory before anything is written, so
//! an unreadable or non-UTF-8 file aborts the stage with nothing on disk
//! touched. Writes are atomic per file but not across files: if a later write
//! fails, earlier files stay rewritten.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::services::TextRewriter;
use crate::error::{FlattenError, FlattenResult};

/// A file whose rewritten content differs from what is on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedRewrite {
    pub path: PathBuf,
    pub content: String,
}

/// Read every file below `dir` and compute the rewrites to apply.
///
/// A missing directory yields an empty plan.
pub fn plan_configmap_rewrites<FS: FileSystem>(
    fs: &FS,
    dir: &Path,
    rewriter: &TextRewriter<'_>,
) -> FlattenResult<Vec<PlannedRewrite>> {
    if !fs.is_dir(dir) {
        tracing::trace!(dir = %dir.display(), "no configmaps directory");
        return Ok(Vec::new());
    }

    let files = fs.list_files(dir).map_err(|source| FlattenError::Walk {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut plan = Vec::new();
    for path in files {
        let content = fs.read(&path).map_err(|source| FlattenError::ReadFile {
            path: path.clone(),
            source,
        })?;
        if let Cow::Owned(rewritten) = rewriter.rewrite(&content) {
            if rewritten != content {
                plan.push(PlannedRewrite {
                    path,
                    content: rewritten,
                });
            }
        }
    }
    Ok(plan)
}

/// Write planned rewrites back, in order
pub fn apply_configmap_rewrites<FS: FileSystem>(
    fs: &FS,
    plan: &[PlannedRewrite],
) -> FlattenResult<usize> {
    for rewrite in plan {
        fs.write(&rewrite.path, &rewrite.content)
            .map_err(|source| FlattenError::WriteFile {
                path: rewrite.path.clone(),
                source,
            })?;
        tracing::debug!(path = %rewrite.path.display(), "rewrote configmap file");
    }
    Ok(plan.len())
}

/// Rewrite every file below `dir` whose content changes; returns the number of
/// files written
pub fn rewrite_configmap_files<FS: FileSystem>(
    fs: &FS,
    dir: &Path,
    rewriter: &TextRewriter<'_>,
) -> FlattenResult<usize> {
    let plan = plan_configmap_rewrites(fs, dir, rewriter)?;
    apply_configmap_rewrites(fs, &plan)
}
