//! The init question flow.
//!
//! Replaces the declarative when/default metadata of question lists with
//! straight-line control flow: each conditional prompt sits behind the
//! signal that gates it, and each default comes from the layout inference.

use crate::analyzer::{
    file_exists, is_likely_monorepo, pnp_is_enabled, source_folder_candidates,
    test_folder_candidates, tests_within_source,
};
use crate::defaults::{TYPESCRIPT_CONFIG, WEBPACK_CONFIG};
use crate::error::Result;
use crate::wizard::answers::{ConfigStyle, InitAnswers, Preset};
use crate::wizard::validate::{split_locations, LocationValidator};
use inquire::validator::{ErrorMessage, Validation};
use inquire::{Confirm, CustomUserError, Select, Text};
use std::path::{Path, PathBuf};

/// Walks the user through the full question flow against the project at
/// `root` and returns the collected answers.
///
/// Prompts that the layout inference can rule out up front (monorepo, no
/// TypeScript config, no webpack config, Plug'n'Play off) are skipped
/// entirely rather than asked with a guessed default.
pub fn run_init_wizard(root: &Path) -> Result<InitAnswers> {
    let monorepo = is_likely_monorepo(root);
    log::debug!("monorepo signal for {}: {}", root.display(), monorepo);

    let config_type = Select::new(
        "Do you want to use a preset or a self-contained configuration?",
        vec![ConfigStyle::SelfContained, ConfigStyle::Preset],
    )
    .prompt()?;

    let mut answers = InitAnswers::new(config_type);

    if config_type == ConfigStyle::Preset {
        answers.preset = Some(
            Select::new(
                "Pick a preset",
                vec![Preset::RecommendedWarnOnly, Preset::RecommendedStrict],
            )
            .prompt()?,
        );
    }

    if !monorepo {
        let source_default = source_folder_candidates(root).join(", ");
        let source_answer = Text::new("Where do your source files live?")
            .with_default(&source_default)
            .with_validator(LocationValidator::new(root))
            .prompt()?;
        let source_folders = split_locations(&source_answer);

        let separate_tests_default =
            !tests_within_source(&test_folder_candidates(root), &source_folders);
        let has_tests_outside_source = Confirm::new("Do your test files live in a separate folder?")
            .with_default(separate_tests_default)
            .prompt()?;

        if has_tests_outside_source {
            let test_default = test_folder_candidates(root).join(", ");
            let test_answer = Text::new("Where do your test files live?")
                .with_default(&test_default)
                .with_validator(LocationValidator::new(root))
                .prompt()?;
            answers.test_location = Some(split_locations(&test_answer));
        }

        answers.source_location = Some(source_folders);
        answers.has_tests_outside_source = Some(has_tests_outside_source);
    }

    if pnp_is_enabled(root) {
        answers.use_yarn_pnp = Some(
            Confirm::new("You seem to be using yarn Plug'n'Play. Take that into account?")
                .with_default(true)
                .prompt()?,
        );
    }

    if file_exists(root, TYPESCRIPT_CONFIG) {
        let use_ts_config = Confirm::new("Looks like you're using TypeScript. Use a 'tsconfig.json'?")
            .with_default(true)
            .prompt()?;
        answers.use_ts_config = Some(use_ts_config);

        if use_ts_config {
            let default_path = format!("./{}", TYPESCRIPT_CONFIG);
            answers.ts_config = Some(
                Text::new("Full path to 'tsconfig.json':")
                    .with_default(&default_path)
                    .with_validator(existing_file_validator(root))
                    .prompt()?,
            );
            answers.ts_pre_compilation_deps = Some(
                Confirm::new(
                    "Also regard TypeScript dependencies that exist only before compilation?",
                )
                .with_default(true)
                .prompt()?,
            );
        }
    }

    if file_exists(root, WEBPACK_CONFIG) {
        let use_webpack_config =
            Confirm::new("Looks like you're using webpack - specify a webpack config?")
                .with_default(true)
                .prompt()?;
        answers.use_webpack_config = Some(use_webpack_config);

        if use_webpack_config {
            let default_path = format!("./{}", WEBPACK_CONFIG);
            answers.webpack_config = Some(
                Text::new("Full path to webpack config:")
                    .with_default(&default_path)
                    .with_validator(existing_file_validator(root))
                    .prompt()?,
            );
        }
    }

    Ok(answers)
}

/// Validator for config-file path prompts: the answer merely has to exist.
fn existing_file_validator(
    root: &Path,
) -> impl Fn(&str) -> std::result::Result<Validation, CustomUserError> + Clone {
    let root: PathBuf = root.to_path_buf();
    move |input: &str| {
        if root.join(input).exists() {
            Ok(Validation::Valid)
        } else {
            Ok(Validation::Invalid(ErrorMessage::Custom(format!(
                "hmm, '{}' doesn't seem to exist - try again?",
                input
            ))))
        }
    }
}
