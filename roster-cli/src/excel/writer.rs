//! Write records to the flat upload sheet

use anyhow::{Context, Result};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use std::path::{Path, PathBuf};

use crate::config::OutputLayout;
use crate::roster::Record;

/// Column indices of the upload sheet
mod cols {
    pub const NAME: u16 = 0;
    pub const PHONE: u16 = 1;
    pub const SECONDARY_NAME: u16 = 2;
    pub const GROUP: u16 = 3;
}

/// Write records to a new workbook at `path`
///
/// Nothing is written to disk unless the whole sheet was built.
pub fn write_roster_excel(records: &[Record], layout: &OutputLayout, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name(&layout.sheet_name)?;
    write_header(worksheet, layout)?;

    for (idx, record) in records.iter().enumerate() {
        let row = (idx + 1) as u32;
        write_cell(worksheet, row, cols::NAME, &record.name)?;
        write_cell(worksheet, row, cols::PHONE, &record.phone)?;
        write_cell(worksheet, row, cols::SECONDARY_NAME, &record.secondary_name)?;
        write_cell(worksheet, row, cols::GROUP, &record.group)?;
    }

    for (col, width) in layout.widths.in_order().into_iter().enumerate() {
        worksheet.set_column_width(col as u16, width)?;
    }

    log::debug!("Saving {} records to {}", records.len(), path.display());
    workbook
        .save(path)
        .with_context(|| format!("Failed to save Excel file: {}", path.display()))?;

    Ok(())
}

fn write_header(ws: &mut Worksheet, layout: &OutputLayout) -> Result<()> {
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xDDDDDD))
        .set_border(FormatBorder::Thin)
        .set_align(FormatAlign::Center);

    for (col, title) in layout.headers.in_order().into_iter().enumerate() {
        ws.write_string_with_format(0, col as u16, title, &header_format)?;
    }
    Ok(())
}

fn write_cell(ws: &mut Worksheet, row: u32, col: u16, value: &str) -> Result<()> {
    // Blank optional fields stay as empty cells
    if !value.is_empty() {
        ws.write_string(row, col, value)?;
    }
    Ok(())
}

/// Output path next to the input, with `prefix` prepended to the file name
pub fn default_output_path(input: &Path, prefix: &str) -> Result<PathBuf> {
    let file_name = input
        .file_name()
        .with_context(|| format!("Input path has no file name: {}", input.display()))?;

    Ok(input.with_file_name(format!("{}{}", prefix, file_name.to_string_lossy())))
}
