//! Monorepo detection.

use crate::analyzer::folders::list_top_level_entries;
use crate::defaults::MONOREPO_MARKER;
use std::path::Path;

/// Classifies a set of top-level folder names as monorepo-shaped.
///
/// True iff the conventional multi-package marker folder (`packages`) is
/// among them; an empty set is not a monorepo.
pub fn folders_look_like_monorepo(folders: &[String]) -> bool {
    folders.iter().any(|name| name == MONOREPO_MARKER)
}

/// Reads `root`'s top-level entries and classifies them.
///
/// This signal gates several wizard prompts entirely: a monorepo is assumed
/// to need per-package configuration rather than a single source/test split.
pub fn is_likely_monorepo(root: &Path) -> bool {
    folders_look_like_monorepo(&list_top_level_entries(root))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_no_folders_means_no_monorepo() {
        assert!(!folders_look_like_monorepo(&[]));
    }

    #[test]
    fn test_no_packages_folder_means_no_monorepo() {
        let folders = to_strings(&["bin", "src", "node_modules", "test"]);
        assert!(!folders_look_like_monorepo(&folders));
    }

    #[test]
    fn test_packages_folder_means_monorepo() {
        let folders = to_strings(&["packages"]);
        assert!(folders_look_like_monorepo(&folders));
    }

    #[test]
    fn test_marker_must_match_exactly() {
        let folders = to_strings(&["package", "packagesets"]);
        assert!(!folders_look_like_monorepo(&folders));
    }
}
