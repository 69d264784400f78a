//! `convert` command

mod handler;
mod report;

use clap::Args;
use std::path::PathBuf;

pub use handler::handle_convert_command;

#[derive(Args, Debug)]
pub struct ConvertCommands {
    /// Source roster workbook (.xlsx), one sheet per district
    pub input: PathBuf,

    /// Output workbook; defaults to the input name with the configured prefix
    pub output: Option<PathBuf>,
}
