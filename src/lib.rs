//! # Depmap CLI
//!
//! A Rust-based command-line application that inspects a repository's layout
//! and interactively bootstraps a dependency-rules configuration from what it
//! finds.
//!
//! ## Features
//!
//! - **Layout Inference**: Detects where source and test folders live
//! - **Monorepo Awareness**: Recognizes multi-package repositories and adapts
//! - **Package Manager Signals**: Picks up yarn Plug'n'Play from the manifest
//! - **Guided Setup**: Pre-fills an interactive wizard with the inferred facts
//! - **Validated Input**: Checks free-form folder answers against the filesystem
//!
//! ## Example
//!
//! ```rust,no_run
//! use depmap_cli::analyzer::{is_likely_monorepo, source_folder_candidates};
//! use std::path::Path;
//!
//! let root = Path::new("./my-project");
//! if !is_likely_monorepo(root) {
//!     let candidates = source_folder_candidates(root);
//!     println!("source probably lives in: {}", candidates.join(", "));
//! }
//! ```

pub mod analyzer;
pub mod cli;
pub mod defaults;
pub mod error;
pub mod handlers;
pub mod wizard;

// Re-export commonly used types and functions
pub use error::{DepmapError, Result};
pub use wizard::answers::InitAnswers;
pub use wizard::validate::{validate_location, LocationCheck};
use cli::Commands;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn run_command(command: Commands) -> Result<()> {
    match command {
        Commands::Init { path } => handlers::handle_init(path),
        Commands::Layout { path, json } => handlers::handle_layout(path, json),
    }
}
