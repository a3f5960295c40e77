//! Free-text folder location validation.
//!
//! The location prompts accept a single path or a comma-separated list of
//! paths. Validation walks the segments left to right and reports the first
//! offending one; later segments are not checked once one fails. Outcomes
//! are values, never errors - the wizard shows the message inline and
//! re-prompts.

use inquire::validator::{ErrorMessage, StringValidator, Validation};
use inquire::CustomUserError;
use std::path::{Path, PathBuf};

/// Outcome of checking a location answer against the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationCheck {
    /// Every segment names an existing directory
    Valid,
    /// Message naming the first failing segment and the reason
    Invalid(String),
}

impl LocationCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, LocationCheck::Valid)
    }
}

/// Splits a raw location answer into trimmed segments.
///
/// `"src, lib"` becomes `["src", "lib"]`; a lone empty string stays a single
/// empty segment so validation can name it.
pub fn split_locations(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Validates a raw location answer (single path or comma-separated list)
/// relative to `root`.
pub fn validate_location(root: &Path, input: &str) -> LocationCheck {
    validate_location_list(root, &split_locations(input))
}

/// Validates already-split location segments relative to `root`, in order.
///
/// The empty segment is rejected up front: `root.join("")` is `root` itself
/// and would otherwise sail through the existence check.
pub fn validate_location_list(root: &Path, segments: &[String]) -> LocationCheck {
    for segment in segments {
        if segment.is_empty() {
            return LocationCheck::Invalid(format!(
                "'{}' doesn't seem to exist - please try again",
                segment
            ));
        }

        let path = root.join(segment);
        if !path.exists() {
            return LocationCheck::Invalid(format!(
                "'{}' doesn't seem to exist - please try again",
                segment
            ));
        }
        if !path.is_dir() {
            return LocationCheck::Invalid(format!(
                "'{}' doesn't seem to be a folder - please try again",
                segment
            ));
        }
    }

    LocationCheck::Valid
}

/// Adapter exposing [`validate_location`] as an `inquire` prompt validator.
#[derive(Clone)]
pub struct LocationValidator {
    root: PathBuf,
}

impl LocationValidator {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl StringValidator for LocationValidator {
    fn validate(&self, input: &str) -> Result<Validation, CustomUserError> {
        Ok(match validate_location(&self.root, input) {
            LocationCheck::Valid => Validation::Valid,
            LocationCheck::Invalid(message) => {
                Validation::Invalid(ErrorMessage::Custom(message))
            }
        })
    }
}
