//! Excel I/O for district rosters and the flat upload sheet

mod reader;
mod writer;

pub use reader::read_source_workbook;
pub use writer::{default_output_path, write_roster_excel};
