//! CLI command structure using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plugforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a plugin project from a template set
    New(NewArgs),

    /// List available template sets
    Sets {
        /// Root directory containing template sets
        #[arg(long = "templates-root", value_name = "DIR", env = "PLUGFORGE_TEMPLATES")]
        templates_root: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub struct NewArgs {
    /// Name of the plugin
    pub name: String,

    /// MIME type to support (should be application-private, "application/x-...")
    #[arg(long = "mime-type", value_name = "TYPE")]
    pub mime_type: String,

    /// Plugin description (default: empty)
    #[arg(long, default_value = "")]
    pub descr: String,

    /// Plugin version (default: from plugforge.toml, else 1.0.0)
    #[arg(long)]
    pub version: Option<String>,

    /// Code namespace (default: derived from the plugin name)
    #[arg(long, value_name = "NS")]
    pub namespace: Option<String>,

    /// Library/output name (default: same as namespace)
    #[arg(long = "target-name", value_name = "NAME")]
    pub target_name: Option<String>,

    /// Class to use for the instance (default: Instance)
    #[arg(long, value_name = "CLASS")]
    pub instance: Option<String>,

    /// Class to use for the module (default: Module)
    #[arg(long, value_name = "CLASS")]
    pub module: Option<String>,

    /// Generate into a solution directory and include the solution file
    #[arg(long, value_name = "DIR")]
    pub solution: Option<PathBuf>,

    /// Template set to generate from
    #[arg(long = "set", value_name = "NAME", default_value = "pepper")]
    pub set: String,

    /// Root directory containing template sets
    #[arg(long = "templates-root", value_name = "DIR", env = "PLUGFORGE_TEMPLATES")]
    pub templates_root: Option<PathBuf>,

    /// Skip git repository detection and staging
    #[arg(long)]
    pub no_git: bool,

    /// Print the generated file table as JSON
    #[arg(long)]
    pub json: bool,
}
