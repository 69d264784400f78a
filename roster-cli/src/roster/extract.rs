//! Row extraction from a district sheet

use calamine::Data;

use super::Record;
use super::phone::normalize_phone;
use crate::config::SourceLayout;

/// Render a cell as text the way it reads in the spreadsheet
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            // Numbers typed into a sheet come back as floats
            if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        // Dates read like the spreadsheet shows them; durations and
        // out-of-range serials fall back to the raw serial
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.to_string(),
            None => format!("{}", dt),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

fn get_cell_string(row: &[Data], col: usize) -> String {
    row.get(col)
        .map(|c| cell_text(c).trim().to_string())
        .unwrap_or_default()
}

/// Build a record from one data row, or `None` when the name cell is blank
pub fn extract_record(row: &[Data], layout: &SourceLayout, group: &str) -> Option<Record> {
    let name = get_cell_string(row, layout.name_column.index());
    if name.is_empty() {
        return None;
    }

    let secondary_name = get_cell_string(row, layout.secondary_name_column.index());
    let phone = normalize_phone(&get_cell_string(row, layout.phone_column.index()));

    Some(Record {
        name,
        phone,
        secondary_name,
        group: group.to_string(),
    })
}
