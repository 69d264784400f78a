//! Source and output sheet layouts
//!
//! The source layout describes where member data lives in each district
//! sheet; the output layout describes the flat upload sheet.

use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// Built-in defaults for the district roster layout
pub mod defaults {
    /// Spreadsheet row (1-based) holding the first member
    pub const FIRST_DATA_ROW: u32 = 4;
    /// Column C
    pub const NAME_COLUMN: usize = 2;
    /// Column D
    pub const SECONDARY_NAME_COLUMN: usize = 3;
    /// Column E
    pub const PHONE_COLUMN: usize = 4;

    pub const OUTPUT_PREFIX: &str = "변환_";
    pub const SHEET_NAME: &str = "회원 명단";

    pub const NAME_HEADER: &str = "이름";
    pub const PHONE_HEADER: &str = "전화번호";
    pub const SECONDARY_NAME_HEADER: &str = "세례명";
    pub const GROUP_HEADER: &str = "구역";

    pub const NAME_WIDTH: f64 = 15.0;
    pub const PHONE_WIDTH: f64 = 18.0;
    pub const SECONDARY_NAME_WIDTH: f64 = 15.0;
    pub const GROUP_WIDTH: f64 = 12.0;

    /// Excel's last column is XFD
    pub const MAX_COLUMNS: usize = 16_384;
}

/// A spreadsheet column, written as letters ("C") in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Column(usize);

impl Column {
    /// Column from a 0-based index (A = 0)
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    /// Parse column letters such as "C" or "AA", up to "XFD"
    pub fn from_letters(letters: &str) -> Option<Self> {
        let letters = letters.trim();
        if letters.is_empty() {
            return None;
        }

        let mut number: usize = 0;
        for ch in letters.chars() {
            if !ch.is_ascii_alphabetic() {
                return None;
            }
            let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
            number = number.checked_mul(26)?.checked_add(digit)?;
            if number > defaults::MAX_COLUMNS {
                return None;
            }
        }

        Some(Self(number - 1))
    }

    pub fn letters(self) -> String {
        let mut n = self.0 + 1;
        let mut out = Vec::new();
        while n > 0 {
            n -= 1;
            out.push(b'A' + (n % 26) as u8);
            n /= 26;
        }
        out.reverse();
        String::from_utf8(out).unwrap_or_default()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}

impl TryFrom<String> for Column {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Column::from_letters(&value).ok_or_else(|| format!("invalid column '{}'", value))
    }
}

impl From<Column> for String {
    fn from(column: Column) -> Self {
        column.letters()
    }
}

/// Where member data sits in every district sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceLayout {
    /// First data row, 1-based as shown in spreadsheet applications
    #[serde(deserialize_with = "deserialize_row_number")]
    pub first_data_row: u32,
    pub name_column: Column,
    pub secondary_name_column: Column,
    pub phone_column: Column,
}

impl SourceLayout {
    /// 0-based index of the first data row
    pub fn start_index(&self) -> usize {
        self.first_data_row.saturating_sub(1) as usize
    }
}

fn deserialize_row_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let row = u32::deserialize(deserializer)?;
    if row == 0 {
        return Err(de::Error::custom(
            "invalid row 0, rows are numbered from 1",
        ));
    }
    Ok(row)
}

impl Default for SourceLayout {
    fn default() -> Self {
        Self {
            first_data_row: defaults::FIRST_DATA_ROW,
            name_column: Column::new(defaults::NAME_COLUMN),
            secondary_name_column: Column::new(defaults::SECONDARY_NAME_COLUMN),
            phone_column: Column::new(defaults::PHONE_COLUMN),
        }
    }
}

/// Header titles of the upload sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Headers {
    pub name: String,
    pub phone: String,
    pub secondary_name: String,
    pub group: String,
}

impl Headers {
    /// Titles in column order: name, phone, secondary name, group
    pub fn in_order(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.phone.as_str(),
            self.secondary_name.as_str(),
            self.group.as_str(),
        ]
    }
}

impl Default for Headers {
    fn default() -> Self {
        Self {
            name: defaults::NAME_HEADER.to_string(),
            phone: defaults::PHONE_HEADER.to_string(),
            secondary_name: defaults::SECONDARY_NAME_HEADER.to_string(),
            group: defaults::GROUP_HEADER.to_string(),
        }
    }
}

/// Column widths of the upload sheet, in characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Widths {
    pub name: f64,
    pub phone: f64,
    pub secondary_name: f64,
    pub group: f64,
}

impl Widths {
    pub fn in_order(&self) -> [f64; 4] {
        [self.name, self.phone, self.secondary_name, self.group]
    }
}

impl Default for Widths {
    fn default() -> Self {
        Self {
            name: defaults::NAME_WIDTH,
            phone: defaults::PHONE_WIDTH,
            secondary_name: defaults::SECONDARY_NAME_WIDTH,
            group: defaults::GROUP_WIDTH,
        }
    }
}

/// Shape of the flat upload sheet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputLayout {
    /// Prepended to the input file name when no output path is given
    pub prefix: String,
    pub sheet_name: String,
    pub headers: Headers,
    pub widths: Widths,
}

impl Default for OutputLayout {
    fn default() -> Self {
        Self {
            prefix: defaults::OUTPUT_PREFIX.to_string(),
            sheet_name: defaults::SHEET_NAME.to_string(),
            headers: Headers::default(),
            widths: Widths::default(),
        }
    }
}
