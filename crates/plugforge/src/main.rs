mod cli;
mod commands;
mod vcs;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::New(args) => commands::new::run(args, cli.verbose),
        Commands::Sets {
            templates_root,
            json,
        } => commands::sets::run(templates_root, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
