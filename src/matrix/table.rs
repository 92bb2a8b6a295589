//! Flat and pivot table assembly plus export serialization

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{MatrixError, Result};
use crate::types::AssetRecord;

/// Column headers for the flat (trafficking) layout
pub const FLAT_COLUMNS: [&str; 11] = [
    "FUNNEL",
    "MESSAGING",
    "REGION",
    "LANGUAGE",
    "DURATION",
    "SIZE",
    "CREATIVE NAME",
    "WARNINGS",
    "START DATE",
    "END DATE",
    "URL",
];

/// Index columns for the pivot (sheet) layout; size columns are inserted
/// between these and the trailing metadata columns.
pub const PIVOT_INDEX_COLUMNS: [&str; 5] =
    ["FUNNEL", "MESSAGING", "REGION", "LANGUAGE", "DURATION"];

/// Trailing metadata columns shared by both layouts
pub const METADATA_COLUMNS: [&str; 3] = ["START DATE", "END DATE", "URL"];

/// A rendered table: header plus string cells, in final export order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatrixTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl MatrixTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Serialize as UTF-8 CSV with a header row. Every field is quoted and
    /// embedded quotes are doubled, matching the sheet tooling downstream.
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(csv_line(&self.columns));
        for row in &self.rows {
            lines.push(csv_line(row));
        }
        lines.join("\n")
    }

    /// Write the CSV rendering to a file
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_csv()).map_err(|e| {
            MatrixError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })
    }

    /// Tab-separated rendering for clipboard-style hand-off
    pub fn to_tsv(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 1);
        lines.push(self.columns.join("\t"));
        for row in &self.rows {
            lines.push(row.join("\t"));
        }
        lines.join("\n")
    }
}

fn csv_line(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(",")
}

/// One row per record, columns per `FLAT_COLUMNS`
pub fn flatten(records: &[AssetRecord]) -> MatrixTable {
    MatrixTable {
        columns: FLAT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: records
            .iter()
            .map(|r| {
                vec![
                    r.funnel.clone(),
                    r.messaging.clone(),
                    r.region.clone(),
                    r.language.clone(),
                    r.duration.clone(),
                    r.size.clone(),
                    r.creative_name.clone(),
                    r.warnings.clone(),
                    r.start_date.clone(),
                    r.end_date.clone(),
                    r.url.clone(),
                ]
            })
            .collect(),
    }
}

/// Pivot rows are grouped by every column except size and creative name;
/// one column per distinct size label (sorted); cell = the creative name for
/// that (group, size) pair.
///
/// When two records collide on the same group and size, the first one wins
/// and later names are dropped from the cell. The flat table keeps every
/// record, and the duplicate report surfaces the collision, so nothing is
/// lost silently.
pub fn pivot(records: &[AssetRecord]) -> MatrixTable {
    let mut size_columns: Vec<String> = records.iter().map(|r| r.size.clone()).collect();
    size_columns.sort();
    size_columns.dedup();

    struct Group {
        index: [String; 5],
        cells: HashMap<String, String>,
        start_date: String,
        end_date: String,
        url: String,
    }

    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Group> = HashMap::new();

    for record in records {
        let key = format!(
            "{}|{}|{}|{}|{}",
            record.funnel, record.messaging, record.region, record.language, record.duration
        );
        let group = groups.entry(key.clone()).or_insert_with(|| {
            order.push(key);
            Group {
                index: [
                    record.funnel.clone(),
                    record.messaging.clone(),
                    record.region.clone(),
                    record.language.clone(),
                    record.duration.clone(),
                ],
                cells: HashMap::new(),
                start_date: record.start_date.clone(),
                end_date: record.end_date.clone(),
                url: record.url.clone(),
            }
        });
        group
            .cells
            .entry(record.size.clone())
            .or_insert_with(|| record.creative_name.clone());
    }

    let mut columns: Vec<String> = PIVOT_INDEX_COLUMNS.iter().map(|c| c.to_string()).collect();
    columns.extend(size_columns.iter().cloned());
    columns.extend(METADATA_COLUMNS.iter().map(|c| c.to_string()));

    let rows = order
        .iter()
        .map(|key| {
            let group = &groups[key];
            let mut row: Vec<String> = group.index.to_vec();
            for size in &size_columns {
                row.push(group.cells.get(size).cloned().unwrap_or_default());
            }
            row.push(group.start_date.clone());
            row.push(group.end_date.clone());
            row.push(group.url.clone());
            row
        })
        .collect();

    MatrixTable { columns, rows }
}

/// Copy-ready list: newline-joined creative names in flat row order
pub fn copy_list(records: &[AssetRecord]) -> String {
    records
        .iter()
        .map(|r| r.creative_name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// CSV export filename, e.g. `Asset_Matrix_Connected_Home_pivot_20250627.csv`
pub fn export_filename(label: &str, mode: &str, date: NaiveDate) -> String {
    format!(
        "Asset_Matrix_{}_{}_{}.csv",
        label.trim().replace(' ', "_"),
        mode,
        date.format("%Y%m%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(funnel: &str, size: &str, name: &str) -> AssetRecord {
        AssetRecord {
            funnel: funnel.into(),
            messaging: "Offer".into(),
            region: "ATL".into(),
            language: "EN".into(),
            duration: "15s".into(),
            size: size.into(),
            creative_name: name.into(),
            warnings: String::new(),
            start_date: "Jun.27.2025".into(),
            end_date: "Aug.27.2025".into(),
            url: String::new(),
        }
    }

    #[test]
    fn flat_table_has_one_row_per_record() {
        let table = flatten(&[record("COS", "1x1", "a"), record("COS", "9x16", "b")]);
        assert_eq!(table.columns, FLAT_COLUMNS.to_vec());
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0][6], "a");
        assert_eq!(table.rows[1][5], "9x16");
    }

    #[test]
    fn pivot_groups_by_non_size_tuple() {
        let records = vec![
            record("COS", "1x1", "cos-1x1"),
            record("COS", "9x16", "cos-9x16"),
            record("AWR", "1x1", "awr-1x1"),
        ];
        let table = pivot(&records);
        // Two distinct (funnel, messaging, region, language, duration) tuples
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            table.columns,
            vec![
                "FUNNEL", "MESSAGING", "REGION", "LANGUAGE", "DURATION", "1x1", "9x16",
                "START DATE", "END DATE", "URL"
            ]
        );
        // First-seen group order is preserved
        assert_eq!(table.rows[0][0], "COS");
        assert_eq!(table.rows[0][5], "cos-1x1");
        assert_eq!(table.rows[0][6], "cos-9x16");
        assert_eq!(table.rows[1][0], "AWR");
        assert_eq!(table.rows[1][6], ""); // no 9x16 for AWR
        assert_eq!(table.rows[1][7], "Jun.27.2025");
    }

    #[test]
    fn pivot_cell_collision_keeps_first_name() {
        let records = vec![
            record("COS", "1x1", "first"),
            record("COS", "1x1", "second"),
        ];
        let table = pivot(&records);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][5], "first");
        // The flat table still carries both records
        assert_eq!(flatten(&records).rows.len(), 2);
    }

    #[test]
    fn empty_record_set_produces_empty_tables() {
        assert!(flatten(&[]).is_empty());
        let table = pivot(&[]);
        assert!(table.is_empty());
        assert_eq!(table.columns.len(), 8); // index + metadata, no size columns
    }

    #[test]
    fn csv_quotes_and_escapes_fields() {
        let mut rec = record("COS", "1x1", "name");
        rec.messaging = "Say \"hi\"".into();
        let csv = flatten(&[rec]).to_csv();
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap().split(',').count(), 11);
        assert!(csv.contains("\"Say \"\"hi\"\"\""));
    }

    #[test]
    fn csv_written_file_round_trips_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = flatten(&[record("COS", "1x1", "a")]);
        table.write_csv(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), table.to_csv());
    }

    #[test]
    fn copy_list_matches_flat_row_order() {
        let records = vec![record("COS", "1x1", "a"), record("COS", "9x16", "b")];
        assert_eq!(copy_list(&records), "a\nb");
    }

    #[test]
    fn export_filename_embeds_label_mode_and_date() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 27).unwrap();
        assert_eq!(
            export_filename("Connected Home", "pivot", date),
            "Asset_Matrix_Connected_Home_pivot_20250627.csv"
        );
    }
}
