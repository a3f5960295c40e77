//! Layout inference: pure, filesystem-reading functions that turn directory
//! listings and package metadata into the heuristic signals the wizard uses
//! for its defaults.
//!
//! Every function here takes an explicit project root. The ambient working
//! directory is applied only at the CLI boundary, so the whole module is
//! testable against throwaway fixture trees. All of it is total: unreadable
//! directories degrade to empty listings and a broken manifest degrades to
//! `false`, never to an error.

pub mod folders;
pub mod monorepo;
pub mod overlap;
pub mod package_manager;

pub use folders::{
    file_exists, folder_candidates, list_top_level_entries, source_folder_candidates,
    test_folder_candidates,
};
pub use monorepo::{folders_look_like_monorepo, is_likely_monorepo};
pub use overlap::{folder_names_to_pattern, tests_within_source};
pub use package_manager::pnp_is_enabled;
