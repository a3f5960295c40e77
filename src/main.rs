use clap::Parser;
use depmap_cli::cli::Cli;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> depmap_cli::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    cli.init_logging();

    depmap_cli::run_command(cli.command)
}
