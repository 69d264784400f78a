//! Command-line interface

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::config::ConfigCommands;
use commands::convert::ConvertCommands;

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(about = "Convert district roster workbooks into a flat upload sheet")]
#[command(version)]
pub struct Cli {
    /// Layout configuration file (TOML)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a roster workbook for upload
    Convert(ConvertCommands),
    /// Inspect the layout configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["roster-cli", "convert", "명단.xlsx"]).unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.input, PathBuf::from("명단.xlsx"));
                assert!(args.output.is_none());
            }
            _ => panic!("expected convert"),
        }

        let cli = Cli::try_parse_from([
            "roster-cli",
            "-vv",
            "--no-color",
            "convert",
            "명단.xlsx",
            "업로드용_명단.xlsx",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.output, Some(PathBuf::from("업로드용_명단.xlsx")));
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_convert_requires_input() {
        assert!(Cli::try_parse_from(["roster-cli", "convert"]).is_err());
    }
}
