//! Custom assertion macros for contract and scenario tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

use std::path::Path;

/// List all files in a directory recursively (for debugging)
pub fn list_all_files(dir: &Path) -> Vec<String> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(list_all_files(&path));
            } else {
                files.push(path.display().to_string());
            }
        }
    }
    files.sort();
    files
}

/// Assert that a configmap file holds exactly the expected content.
///
/// # Example
/// ```ignore
/// assert_file_content!(out, "nginx/nginx.conf", "server api:8080;\n");
/// ```
#[macro_export]
macro_rules! assert_file_content {
    ($out:expr, $relative:expr, $expected:expr) => {
        let path = $out.configmap_path($relative);
        assert!(
            path.exists(),
            "Expected configmap '{}', but it doesn't exist.\nFiles found:\n  {}",
            $relative,
            $crate::common::list_all_files($out.path()).join("\n  ")
        );
        let actual = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            actual, $expected,
            "Unexpected content in configmap '{}'",
            $relative
        );
    };
}
