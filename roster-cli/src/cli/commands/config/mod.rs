//! `config` command

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use std::path::Path;

use crate::config::{Config, default_config_path};

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective layout configuration as TOML
    Show,
    /// Print the default configuration file location
    Path,
}

pub fn handle_config_command(command: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load(config_path)?;
            print!("{}", config.to_toml_string()?);
        }
        ConfigCommands::Path => match default_config_path() {
            Some(path) => {
                let status = if path.exists() {
                    "(exists)".green()
                } else {
                    "(not found, using defaults)".dimmed()
                };
                println!("{} {}", path.display(), status);
            }
            None => anyhow::bail!("Could not determine the configuration directory"),
        },
    }
    Ok(())
}
