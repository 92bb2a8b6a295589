//! Last-generated-result store
//!
//! One session holds at most one generated matrix. Each generate action
//! overwrites the slot wholesale; collaborator failures after a successful
//! generation leave the stored result untouched for re-display or export.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::matrix::table::MatrixTable;
use crate::types::AssetRecord;

/// Everything produced by one generate action
#[derive(Debug, Clone)]
pub struct GeneratedMatrix {
    pub records: Vec<AssetRecord>,
    pub flat: MatrixTable,
    pub pivot: MatrixTable,
    pub generated_at: DateTime<Utc>,
}

impl GeneratedMatrix {
    pub fn new(records: Vec<AssetRecord>) -> Self {
        let flat = crate::matrix::table::flatten(&records);
        let pivot = crate::matrix::table::pivot(&records);
        Self {
            records,
            flat,
            pivot,
            generated_at: Utc::now(),
        }
    }
}

/// Injectable, thread-safe slot for the last generated matrix
#[derive(Clone, Default)]
pub struct ResultStore {
    inner: Arc<RwLock<Option<GeneratedMatrix>>>,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored result wholesale
    pub fn set(&self, matrix: GeneratedMatrix) {
        let mut slot = self.inner.write();
        *slot = Some(matrix);
    }

    /// Current result, if any generation has run since the last clear
    pub fn get(&self) -> Option<GeneratedMatrix> {
        self.inner.read().clone()
    }

    /// Explicit reset
    pub fn clear(&self) {
        let mut slot = self.inner.write();
        *slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_none()
    }
}
