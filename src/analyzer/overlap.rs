//! Do the test folders coincide with the source tree?

use regex::Regex;

/// Joins an ordered list of folder names into an anchored alternation
/// pattern: `["bin", "src"]` becomes `^(bin|src)`.
///
/// Alternatives keep their input order - no de-duplication, no sorting.
/// An empty list yields `^()`, the never-widening sentinel. Names are
/// embedded verbatim; regex metacharacters are not escaped.
pub fn folder_names_to_pattern(folder_names: &[String]) -> String {
    format!("^({})", folder_names.join("|"))
}

/// Decides whether the test folders physically live inside the source tree,
/// in which case the wizard should not ask for a separate test location.
///
/// No test candidates at all counts as co-located: there is no evidence of a
/// separate test area. Otherwise every single test folder must match the
/// anchored alternation over the source folders - one test folder outside
/// the source tree is enough to conclude tests are separate, even if the
/// others coincide.
pub fn tests_within_source(test_folders: &[String], source_folders: &[String]) -> bool {
    if test_folders.is_empty() {
        return true;
    }

    let pattern = folder_names_to_pattern(source_folders);
    match Regex::new(&pattern) {
        Ok(re) => test_folders.iter().all(|name| re.is_match(name)),
        // A folder name mangled the pattern; treat as no overlap
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_name_list_yields_sentinel_pattern() {
        assert_eq!(folder_names_to_pattern(&[]), "^()");
    }

    #[test]
    fn test_single_name_pattern() {
        assert_eq!(folder_names_to_pattern(&to_strings(&["src"])), "^(src)");
    }

    #[test]
    fn test_multiple_names_keep_input_order() {
        assert_eq!(
            folder_names_to_pattern(&to_strings(&["bin", "src", "lib"])),
            "^(bin|src|lib)"
        );
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        assert_eq!(
            folder_names_to_pattern(&to_strings(&["src", "src"])),
            "^(src|src)"
        );
    }

    // Names are embedded unescaped, so a dot in a folder name widens the
    // match. Recorded here as the current contract, not an endorsement.
    #[test]
    fn test_metacharacters_pass_through_unescaped() {
        assert_eq!(folder_names_to_pattern(&to_strings(&["a.b"])), "^(a.b)");
        assert!(tests_within_source(
            &to_strings(&["axb"]),
            &to_strings(&["a.b"])
        ));
    }

    #[test]
    fn test_no_test_folders_means_colocated() {
        assert!(tests_within_source(&[], &[]));
        assert!(tests_within_source(&[], &to_strings(&["src"])));
    }

    #[test]
    fn test_separate_test_folder_means_not_colocated() {
        assert!(!tests_within_source(
            &to_strings(&["spec"]),
            &to_strings(&["src"])
        ));
    }

    #[test]
    fn test_single_overlapping_folder_is_colocated() {
        assert!(tests_within_source(
            &to_strings(&["src"]),
            &to_strings(&["bin", "src", "types"])
        ));
    }

    #[test]
    fn test_all_folders_overlapping_is_colocated() {
        assert!(tests_within_source(
            &to_strings(&["src", "lib"]),
            &to_strings(&["bin", "src", "types", "lib"])
        ));
    }

    #[test]
    fn test_partial_overlap_is_not_colocated() {
        assert!(!tests_within_source(
            &to_strings(&["src", "lib", "spec"]),
            &to_strings(&["bin", "src", "types", "lib"])
        ));
    }
}
