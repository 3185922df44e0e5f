//! New command - generate a plugin project from a template set

use crate::cli::NewArgs;
use crate::commands::resolve_templates_root;
use crate::vcs;
use anyhow::{Result, bail};
use colored::Colorize;
use plugforge_core::config::Config;
use plugforge_core::path::is_safe_single_component;
use plugforge_core::plugin::PluginSpec;
use plugforge_core::template::{GeneratedFile, TemplateSet};
use std::env;
use std::path::Path;

/// Generate a plugin project
///
/// # Arguments
///
/// * `args` - Parsed `new` arguments
/// * `verbose` - Enable verbose output if true
pub fn run(args: NewArgs, verbose: bool) -> Result<()> {
    let current_dir = env::current_dir()?;
    let config = Config::load_or_default(&current_dir)?;

    if args.name.trim().is_empty() {
        bail!("Plugin name cannot be empty");
    }
    if !args.mime_type.starts_with("application/x-") {
        println!(
            "{} MIME type '{}' is not application-private (expected an \"application/x-\" prefix)",
            "!".yellow(),
            args.mime_type
        );
    }

    let spec = build_spec(&args, &config);

    // The target becomes a directory name under the invocation directory;
    // the solution directory may be nested but must stay below it.
    is_safe_single_component(Path::new(&spec.target))?;
    if let Some(solution) = &spec.solution {
        plugforge_core::path::is_safe_relative(solution)?;
    }

    let sets_root = resolve_templates_root(args.templates_root, &config, &current_dir);
    if verbose {
        println!(
            "{} Using template sets from {}",
            "→".cyan(),
            sets_root.display()
        );
    }

    let context = spec.context();
    let set = TemplateSet::load(&sets_root, &args.set, &context)?;
    let out_root = current_dir.join(spec.output_root());

    if verbose {
        println!(
            "{} Generating {} file(s) from set '{}' into {}",
            "→".cyan(),
            set.files().len(),
            set.name(),
            out_root.display()
        );
    }

    let written = set.install(&out_root, &context)?;

    if verbose {
        for file in &written {
            println!("{} {}", "✓".green().bold(), file.path.display());
        }
    }

    println!(
        "{} Created plugin '{}' at {}",
        "✓".green().bold(),
        spec.name,
        out_root.display()
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&written)?);
    }

    if args.no_git {
        if verbose {
            println!("{} Skipping git staging (--no-git)", "→".cyan());
        }
    } else {
        stage_files(&out_root, &written, verbose)?;
    }

    print_next_steps(&spec.target);

    Ok(())
}

/// Build the plugin spec from flags, falling back to config defaults
fn build_spec(args: &NewArgs, config: &Config) -> PluginSpec {
    let mut spec = PluginSpec::new(&args.name, &args.mime_type)
        .with_description(&args.descr)
        .with_version(
            args.version
                .clone()
                .unwrap_or_else(|| config.defaults.version.clone()),
        )
        .with_instance_class(
            args.instance
                .clone()
                .unwrap_or_else(|| config.defaults.instance_class.clone()),
        )
        .with_module_class(
            args.module
                .clone()
                .unwrap_or_else(|| config.defaults.module_class.clone()),
        );

    if let Some(namespace) = &args.namespace {
        spec = spec.with_namespace(namespace);
    }
    if let Some(target) = &args.target_name {
        spec = spec.with_target(target);
    }
    if let Some(solution) = &args.solution {
        spec = spec.with_solution(solution);
    }

    spec
}

/// Stage generated files into the enclosing git repository, initializing one
/// at the output root when none exists. A missing git binary downgrades
/// staging to a warning; generation has already succeeded at this point.
fn stage_files(out_root: &Path, written: &[GeneratedFile], verbose: bool) -> Result<()> {
    if !vcs::git_available() {
        println!(
            "{} git not found on PATH, skipping repository staging",
            "!".yellow()
        );
        return Ok(());
    }

    let mut repo = vcs::Repo::discover(out_root);
    if !repo.exists() {
        if verbose {
            println!(
                "{} No enclosing repository, initializing {}",
                "→".cyan(),
                out_root.display()
            );
        }
        repo.init()?;
    }

    for file in written {
        repo.add(&file.path)?;
    }

    println!(
        "{} Staged {} file(s) in {}",
        "✓".green().bold(),
        written.len(),
        repo.root().display()
    );

    Ok(())
}

/// Print next steps after generation
fn print_next_steps(target: &str) {
    println!("\n{} Next steps:", "→".cyan());
    println!("  1. cd {}", target);
    println!("  2. Review the generated sources");
    println!("  3. Build with your platform toolchain");
}

#[cfg(test)]
mod tests {
    // Integration tests will be in tests/ directory
}
