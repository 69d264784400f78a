//! District roster conversion
//!
//! Turns a workbook with one sheet per district into a flat list of member
//! records, tagged with the district label taken from each sheet title.

mod extract;
mod label;
mod phone;

use calamine::Data;
use std::collections::BTreeMap;

use crate::config::SourceLayout;

pub use extract::extract_record;
pub use label::clean_group_label;

/// One member entry of the upload sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub phone: String,
    pub secondary_name: String,
    pub group: String,
}

/// A sheet of the source workbook
///
/// Rows are indexed from the top of the sheet (row 1 in Excel is index 0),
/// so fixed row offsets line up regardless of where the data starts.
#[derive(Debug, Clone, Default)]
pub struct SourceSheet {
    pub title: String,
    pub rows: Vec<Vec<Data>>,
}

/// Outcome of a single sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub title: String,
    pub group: String,
    pub count: usize,
}

/// Progress notification for one sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetProgress<'a> {
    /// About to read the sheet's rows
    Started { title: &'a str, group: &'a str },
    Finished(&'a SheetSummary),
}

/// Accumulated result of a conversion run
#[derive(Debug, Clone, Default)]
pub struct Conversion {
    /// Records in sheet order, then row order
    pub records: Vec<Record>,
    /// One entry per source sheet, in sheet order
    pub sheets: Vec<SheetSummary>,
    /// Record count per district, sorted by label. Districts without records are absent.
    pub groups: BTreeMap<String, usize>,
}

impl Conversion {
    pub fn total(&self) -> usize {
        self.records.len()
    }

    fn push_sheet(&mut self, title: &str, group: String, records: Vec<Record>) -> &SheetSummary {
        let count = records.len();
        if count > 0 {
            *self.groups.entry(group.clone()).or_insert(0) += count;
        }
        self.records.extend(records);
        self.sheets.push(SheetSummary {
            title: title.to_string(),
            group,
            count,
        });
        &self.sheets[self.sheets.len() - 1]
    }
}

/// Extract every member of one sheet, in row order
pub fn convert_sheet(sheet: &SourceSheet, layout: &SourceLayout, group: &str) -> Vec<Record> {
    sheet
        .rows
        .iter()
        .skip(layout.start_index())
        .filter_map(|row| extract_record(row, layout, group))
        .collect()
}

/// Convert all sheets in order, reporting each sheet before and after it is read
pub fn convert_sheets<'a, I, F>(sheets: I, layout: &SourceLayout, mut on_progress: F) -> Conversion
where
    I: IntoIterator<Item = &'a SourceSheet>,
    F: FnMut(SheetProgress<'_>),
{
    let mut conversion = Conversion::default();

    for sheet in sheets {
        let group = clean_group_label(&sheet.title);
        log::debug!(
            "Sheet '{}' -> group '{}' ({} rows)",
            sheet.title,
            group,
            sheet.rows.len()
        );
        on_progress(SheetProgress::Started {
            title: &sheet.title,
            group: &group,
        });

        let records = convert_sheet(sheet, layout, &group);
        let summary = conversion.push_sheet(&sheet.title, group, records);

        if summary.count == 0 {
            log::info!("Sheet '{}' has no member rows", summary.title);
        } else {
            log::info!("Sheet '{}': {} records", summary.title, summary.count);
        }
        on_progress(SheetProgress::Finished(summary));
    }

    log::info!(
        "Converted {} records from {} sheets",
        conversion.total(),
        conversion.sheets.len()
    );
    conversion
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Data {
        if s.is_empty() {
            Data::Empty
        } else {
            Data::String(s.to_string())
        }
    }

    /// Sheet with three header rows followed by (name, secondary, phone) rows in C:E
    fn make_sheet(title: &str, members: &[(&str, &str, &str)]) -> SourceSheet {
        let mut rows = vec![
            vec![text("명단")],
            vec![],
            vec![Data::Empty, Data::Empty, text("이름"), text("세례명"), text("전화번호")],
        ];
        for (name, secondary, phone) in members {
            rows.push(vec![
                Data::Float(1.0),
                Data::Empty,
                text(name),
                text(secondary),
                text(phone),
            ]);
        }
        SourceSheet {
            title: title.to_string(),
            rows,
        }
    }

    #[test]
    fn test_two_sheet_scenario() {
        let sheets = vec![
            make_sheet(
                "1.A구역",
                &[
                    ("홍길동", "베드로", "01012345678"),
                    ("", "바오로", "01099998888"),
                    ("김철수", "", ""),
                ],
            ),
            make_sheet(
                "2.B구역",
                &[
                    ("이영희", "마리아", "0212345678"),
                    ("박민수", "요한", "123"),
                    ("최지은", "안나", "010-5555-6666"),
                ],
            ),
        ];

        let mut seen = Vec::new();
        let conversion = convert_sheets(&sheets, &SourceLayout::default(), |progress| {
            if let SheetProgress::Finished(summary) = progress {
                seen.push(summary.clone());
            }
        });

        assert_eq!(conversion.total(), 5);
        assert_eq!(conversion.groups.get("A구역"), Some(&2));
        assert_eq!(conversion.groups.get("B구역"), Some(&3));
        assert_eq!(conversion.groups.values().sum::<usize>(), conversion.total());

        let order: Vec<&str> = conversion.groups.keys().map(|k| k.as_str()).collect();
        assert_eq!(order, vec!["A구역", "B구역"]);

        let names: Vec<&str> = conversion.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["홍길동", "김철수", "이영희", "박민수", "최지은"]);

        assert_eq!(conversion.records[0].phone, "010-1234-5678");
        assert_eq!(conversion.records[2].phone, "021-234-5678");
        assert_eq!(conversion.records[3].phone, "123");
        assert_eq!(conversion.records[4].phone, "010-5555-6666");

        assert_eq!(seen, conversion.sheets);
        assert_eq!(seen[0].group, "A구역");
        assert_eq!(seen[0].count, 2);
    }

    #[test]
    fn test_progress_announces_sheet_before_finishing() {
        let sheets = vec![
            make_sheet("1.A구역", &[("홍길동", "", "")]),
            make_sheet("2.B구역", &[]),
        ];

        let mut events = Vec::new();
        convert_sheets(&sheets, &SourceLayout::default(), |progress| {
            events.push(match progress {
                SheetProgress::Started { title, group } => format!("start {} {}", title, group),
                SheetProgress::Finished(summary) => {
                    format!("done {} {}", summary.title, summary.count)
                }
            });
        });

        assert_eq!(
            events,
            vec![
                "start 1.A구역 A구역",
                "done 1.A구역 1",
                "start 2.B구역 B구역",
                "done 2.B구역 0",
            ]
        );
    }

    #[test]
    fn test_header_rows_are_ignored() {
        let sheet = make_sheet("청년회", &[("홍길동", "", "")]);
        let records = convert_sheet(&sheet, &SourceLayout::default(), "청년회");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "홍길동");
    }

    #[test]
    fn test_empty_sheets_reported_with_zero() {
        let sheets = vec![
            SourceSheet {
                title: "3) 빈구역".to_string(),
                rows: vec![],
            },
            make_sheet("4 - 교우구역", &[]),
        ];

        let conversion = convert_sheets(&sheets, &SourceLayout::default(), |_| {});

        assert_eq!(conversion.total(), 0);
        assert!(conversion.groups.is_empty());
        assert_eq!(conversion.sheets.len(), 2);
        assert_eq!(conversion.sheets[0].group, "빈구역");
        assert_eq!(conversion.sheets[0].count, 0);
        assert_eq!(conversion.sheets[1].group, "교우구역");
    }

    #[test]
    fn test_duplicate_labels_are_summed() {
        let sheets = vec![
            make_sheet("1. 본당구역", &[("가", "", ""), ("나", "", "")]),
            make_sheet("2. 본당구역", &[("다", "", "")]),
        ];

        let conversion = convert_sheets(&sheets, &SourceLayout::default(), |_| {});

        assert_eq!(conversion.groups.len(), 1);
        assert_eq!(conversion.groups.get("본당구역"), Some(&3));
        assert_eq!(conversion.sheets[0].count, 2);
        assert_eq!(conversion.sheets[1].count, 1);
    }

    #[test]
    fn test_conversion_is_deterministic() {
        let sheets = vec![make_sheet(
            "1.A구역",
            &[("홍길동", "베드로", "01012345678"), ("김철수", "", "")],
        )];

        let first = convert_sheets(&sheets, &SourceLayout::default(), |_| {});
        let second = convert_sheets(&sheets, &SourceLayout::default(), |_| {});
        assert_eq!(first.records, second.records);
    }
}
