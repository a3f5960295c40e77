use crate::wizard::run_init_wizard;
use colored::Colorize;
use std::path::PathBuf;

pub fn handle_init(path: PathBuf) -> crate::Result<()> {
    println!(
        "🧭 Setting up a dependency-rules configuration for: {}",
        path.display().to_string().cyan()
    );
    println!();

    let answers = run_init_wizard(&path)?;

    println!();
    println!("{}", "Here's what you picked:".dimmed());
    println!("{}", serde_json::to_string_pretty(&answers)?);

    Ok(())
}
