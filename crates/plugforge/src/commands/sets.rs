//! Sets command - list available template sets

use crate::commands::resolve_templates_root;
use anyhow::Result;
use colored::Colorize;
use plugforge_core::config::Config;
use plugforge_core::template::MANIFEST_SUFFIX;
use serde_json::json;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// List template sets under the root
///
/// # Arguments
///
/// * `templates_root` - Optional root override
/// * `json` - Output as JSON if true
/// * `verbose` - Enable verbose output if true
pub fn run(templates_root: Option<PathBuf>, json: bool, verbose: bool) -> Result<()> {
    let current_dir = env::current_dir()?;
    let config = Config::load_or_default(&current_dir)?;
    let root = resolve_templates_root(templates_root, &config, &current_dir);

    let sets = discover_sets(&root)?;

    if json {
        output_sets_json(&root, &sets)?;
    } else {
        output_sets_human(&root, &sets, verbose);
    }

    Ok(())
}

/// A directory is a template set iff it contains its own `<name>.files`
/// manifest.
fn discover_sets(root: &Path) -> Result<Vec<String>> {
    let mut sets = Vec::new();

    if !root.is_dir() {
        return Ok(sets);
    }

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let manifest = entry.path().join(format!("{}{}", name, MANIFEST_SUFFIX));
        if manifest.is_file() {
            sets.push(name);
        }
    }

    sets.sort();
    Ok(sets)
}

/// Output sets in JSON format
fn output_sets_json(root: &Path, sets: &[String]) -> Result<()> {
    let output = json!({
        "root": root.display().to_string(),
        "sets": sets,
        "count": sets.len(),
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Output sets in human-readable format
fn output_sets_human(root: &Path, sets: &[String], verbose: bool) {
    if sets.is_empty() {
        println!(
            "{} No template sets found under {}",
            "!".yellow(),
            root.display()
        );
        println!("\n{} A template set is a directory with a", "→".cyan());
        println!("  <name>{} manifest inside it", MANIFEST_SUFFIX);
    } else {
        println!("{} Template sets in {}:", "→".cyan(), root.display());
        println!();

        for name in sets {
            println!("  {} {}", "•".cyan(), name);
            if verbose {
                println!(
                    "    Manifest: {}",
                    root.join(name)
                        .join(format!("{}{}", name, MANIFEST_SUFFIX))
                        .display()
                );
            }
        }

        println!();
        println!("{} Total: {} set(s)", "→".cyan(), sets.len());
    }
}
