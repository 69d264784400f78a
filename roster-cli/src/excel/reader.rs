//! Read district sheets from the source workbook

use anyhow::{Context, Result, bail};
use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use std::path::Path;

use crate::roster::SourceSheet;

/// Read every sheet of the workbook, in workbook order
pub fn read_source_workbook(path: &Path) -> Result<Vec<SourceSheet>> {
    if !path.exists() {
        bail!("Input file not found: {}", path.display());
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open Excel file: {}", path.display()))?;

    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    log::debug!("Workbook has {} sheets: {:?}", sheet_names.len(), sheet_names);

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in sheet_names {
        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

        sheets.push(SourceSheet {
            rows: absolute_rows(&range),
            title: sheet_name,
        });
    }

    Ok(sheets)
}

/// Rows indexed from A1, up to the last populated row
///
/// calamine ranges start at the first used cell, which would shift fixed
/// row/column offsets for sheets with an empty top or left margin.
fn absolute_rows(range: &Range<Data>) -> Vec<Vec<Data>> {
    let Some((end_row, end_col)) = range.end() else {
        return Vec::new();
    };

    (0..=end_row)
        .map(|row| {
            (0..=end_col)
                .map(|col| range.get_value((row, col)).cloned().unwrap_or(Data::Empty))
                .collect()
        })
        .collect()
}
