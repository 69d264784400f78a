//! Convert command handler

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use super::ConvertCommands;
use super::report::{print_paths, print_sheet_progress, print_summary};
use crate::config::Config;
use crate::excel::{default_output_path, read_source_workbook, write_roster_excel};
use crate::roster::{Conversion, convert_sheets};

/// Handle the convert command
pub fn handle_convert_command(args: ConvertCommands, config: &Config) -> Result<()> {
    let output = resolve_output_path(&args.input, args.output, config)?;
    print_paths(&args.input, &output);

    let conversion = run_conversion(&args.input, &output, config)?;

    print_summary(&conversion, &output);
    Ok(())
}

fn resolve_output_path(input: &Path, output: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }

    let output = match output {
        Some(path) => path,
        None => default_output_path(input, &config.output.prefix)?,
    };

    if is_same_file(input, &output)? {
        bail!(
            "Output path is the same as the input file: {}",
            output.display()
        );
    }

    Ok(output)
}

/// Whether `output` would land on `input`, however either path is spelled
fn is_same_file(input: &Path, output: &Path) -> Result<bool> {
    let input = input
        .canonicalize()
        .with_context(|| format!("Failed to resolve input path: {}", input.display()))?;

    // An existing output may be a link to the input
    if let Ok(resolved) = output.canonicalize() {
        return Ok(resolved == input);
    }

    let Some(file_name) = output.file_name() else {
        bail!("Output path has no file name: {}", output.display());
    };
    let parent = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // A missing output directory can't hold the input; saving reports it
    match parent.canonicalize() {
        Ok(parent) => Ok(parent.join(file_name) == input),
        Err(_) => Ok(false),
    }
}

/// Read, convert and write; the output file is only created on success
fn run_conversion(input: &Path, output: &Path, config: &Config) -> Result<Conversion> {
    let sheets = read_source_workbook(input)?;
    let conversion = convert_sheets(&sheets, &config.source, print_sheet_progress);

    write_roster_excel(&conversion.records, &config.output, output)?;
    log::info!(
        "Wrote {} records to {}",
        conversion.total(),
        output.display()
    );

    Ok(conversion)
}
