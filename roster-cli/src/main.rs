mod cli;
mod config;
mod excel;
mod roster;

use anyhow::Result;
use clap::Parser;
use colored::*;

use cli::commands::config::handle_config_command;
use cli::commands::convert::handle_convert_command;
use cli::{Cli, Commands};
use config::Config;

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(cli) {
        eprintln!("{} {}", "Error:".bright_red().bold(), err);
        for cause in err.chain().skip(1) {
            eprintln!("  {} {}", "Caused by:".red(), cause);
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Convert(args) => {
            let config = Config::load(cli.config.as_deref())?;
            handle_convert_command(args, &config)
        }
        Commands::Config(command) => handle_config_command(command, cli.config.as_deref()),
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
