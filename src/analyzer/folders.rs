//! Top-level folder signals and candidate narrowing.

use crate::analyzer::monorepo::folders_look_like_monorepo;
use crate::defaults::{SOURCE_FOLDER_CANDIDATES, TEST_FOLDER_CANDIDATES};
use std::path::Path;

/// Lists the names of the top-level entries under `root` - files and
/// directories alike, undistinguished at this layer.
///
/// An unreadable or non-existent `root` yields an empty listing rather than
/// an error, so callers degrade gracefully when run outside a real project.
pub fn list_top_level_entries(root: &Path) -> Vec<String> {
    let mut entries = Vec::new();

    if let Ok(dir) = std::fs::read_dir(root) {
        for entry in dir.flatten() {
            entries.push(entry.file_name().to_string_lossy().to_string());
        }
    }

    entries
}

/// Checks whether `relative` names an existing entry under `root`.
pub fn file_exists(root: &Path, relative: &str) -> bool {
    root.join(relative).exists()
}

/// Narrows a default candidate list down to what is actually on disk.
///
/// In a monorepo, top-level names are not a reliable signal of source
/// location, so the candidates pass through verbatim. Otherwise only the
/// candidates present in `actual_folders` survive, in candidate order -
/// this narrows, it never invents new names.
pub fn folder_candidates(
    candidates: &[&str],
    actual_folders: &[String],
    monorepo: bool,
) -> Vec<String> {
    if monorepo {
        return candidates.iter().map(|c| c.to_string()).collect();
    }

    candidates
        .iter()
        .filter(|candidate| actual_folders.iter().any(|actual| actual == *candidate))
        .map(|c| c.to_string())
        .collect()
}

/// The pre-filled default for the "where do your sources live?" prompt.
pub fn source_folder_candidates(root: &Path) -> Vec<String> {
    let actual = list_top_level_entries(root);
    let monorepo = folders_look_like_monorepo(&actual);
    folder_candidates(SOURCE_FOLDER_CANDIDATES, &actual, monorepo)
}

/// The pre-filled default for the "where do your tests live?" prompt.
pub fn test_folder_candidates(root: &Path) -> Vec<String> {
    let actual = list_top_level_entries(root);
    let monorepo = folders_look_like_monorepo(&actual);
    folder_candidates(TEST_FOLDER_CANDIDATES, &actual, monorepo)
}
