use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "depmap-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Bootstrap a dependency-rules configuration from your codebase")]
#[command(
    long_about = "Inspects a repository's top-level layout and package manifest to infer where source and test folders live, whether the repository is a monorepo, and which compiler/bundler configs are present - then walks you through an interactive setup pre-filled with those guesses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive configuration wizard
    Init {
        /// Path to the project directory to configure
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,
    },

    /// Show the layout facts the wizard would infer, without prompting
    Layout {
        /// Path to the project directory to inspect
        #[arg(value_name = "PROJECT_PATH", default_value = ".")]
        path: PathBuf,

        /// Output the inferred facts in JSON format
        #[arg(short, long)]
        json: bool,
    },
}

impl Cli {
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
