use crate::analyzer::{
    file_exists, is_likely_monorepo, pnp_is_enabled, source_folder_candidates,
    test_folder_candidates, tests_within_source,
};
use crate::defaults::{TYPESCRIPT_CONFIG, WEBPACK_CONFIG};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// The layout facts the wizard bases its defaults and skips on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutFacts {
    pub likely_monorepo: bool,
    pub source_folder_candidates: Vec<String>,
    pub test_folder_candidates: Vec<String>,
    pub tests_within_source: bool,
    pub yarn_pnp_enabled: bool,
    pub has_typescript_config: bool,
    pub has_webpack_config: bool,
}

impl LayoutFacts {
    /// Gathers every inference signal for the project at `root`.
    pub fn gather(root: &Path) -> Self {
        let source_candidates = source_folder_candidates(root);
        let test_candidates = test_folder_candidates(root);
        let colocated = tests_within_source(&test_candidates, &source_candidates);

        Self {
            likely_monorepo: is_likely_monorepo(root),
            source_folder_candidates: source_candidates,
            test_folder_candidates: test_candidates,
            tests_within_source: colocated,
            yarn_pnp_enabled: pnp_is_enabled(root),
            has_typescript_config: file_exists(root, TYPESCRIPT_CONFIG),
            has_webpack_config: file_exists(root, WEBPACK_CONFIG),
        }
    }
}

pub fn handle_layout(path: PathBuf, json: bool) -> crate::Result<()> {
    log::info!("inspecting project layout at {}", path.display());
    let facts = LayoutFacts::gather(&path);

    if json {
        println!("{}", serde_json::to_string_pretty(&facts)?);
        return Ok(());
    }

    println!("🔍 Layout facts for: {}", path.display().to_string().cyan());
    println!();
    println!("  monorepo:          {}", flag(facts.likely_monorepo));
    println!("  source candidates: {}", folder_list(&facts.source_folder_candidates));
    println!("  test candidates:   {}", folder_list(&facts.test_folder_candidates));
    println!("  tests in source:   {}", flag(facts.tests_within_source));
    println!("  yarn Plug'n'Play:  {}", flag(facts.yarn_pnp_enabled));
    println!("  tsconfig.json:     {}", flag(facts.has_typescript_config));
    println!("  webpack config:    {}", flag(facts.has_webpack_config));

    Ok(())
}

fn flag(value: bool) -> String {
    if value {
        format!("{} yes", "✓".green())
    } else {
        format!("{} no", "✗".red())
    }
}

fn folder_list(folders: &[String]) -> String {
    if folders.is_empty() {
        "(none found)".dimmed().to_string()
    } else {
        folders.join(", ").cyan().to_string()
    }
}
