//! Record-set validation: warning pass-through and duplicate detection

use std::collections::HashMap;

use crate::types::AssetRecord;

/// A set of records sharing one creative name
#[derive(Debug, Clone, PartialEq)]
pub struct DuplicateGroup {
    pub creative_name: String,
    /// Indices into the validated record slice, in row order
    pub indices: Vec<usize>,
}

/// Validation outcome for one record set
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Per-record warnings, index-aligned with the input; empty string when clean
    pub record_warnings: Vec<String>,
    /// Every creative name shared by two or more records
    pub duplicates: Vec<DuplicateGroup>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.record_warnings.iter().all(|w| w.is_empty())
    }
}

/// Scan a record set for advisory problems.
///
/// Per-record warnings were produced at build time and pass through
/// unchanged. Duplicate detection groups records by final creative name;
/// it is observational only: nothing is renamed or dropped here.
pub fn validate(records: &[AssetRecord]) -> ValidationReport {
    let mut by_name: HashMap<&str, Vec<usize>> = HashMap::new();
    let mut name_order: Vec<&str> = Vec::new();

    for (i, record) in records.iter().enumerate() {
        let entry = by_name.entry(record.creative_name.as_str()).or_default();
        if entry.is_empty() {
            name_order.push(record.creative_name.as_str());
        }
        entry.push(i);
    }

    let duplicates = name_order
        .into_iter()
        .filter_map(|name| {
            let indices = &by_name[name];
            (indices.len() > 1).then(|| DuplicateGroup {
                creative_name: name.to_string(),
                indices: indices.clone(),
            })
        })
        .collect();

    ValidationReport {
        record_warnings: records.iter().map(|r| r.warnings.clone()).collect(),
        duplicates,
    }
}
