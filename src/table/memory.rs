//! In-process table adapter
//!
//! Reference implementation of the collaborator contract, and the fixture
//! used by the crate's own tests. Busy state is tracked observably instead
//! of rendered.

use std::collections::{BTreeMap, BTreeSet};

use parking_lot::RwLock;

use super::TableView;
use crate::event::RowRecord;

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<RowRecord>,
    selected: Vec<usize>,
    busy_rows: BTreeSet<usize>,
    busy_cells: BTreeMap<(usize, usize), String>,
}

/// A `TableView` backed by plain in-memory state.
#[derive(Debug, Default)]
pub struct MemoryTable {
    inner: RwLock<Inner>,
}

impl MemoryTable {
    pub fn new(rows: Vec<RowRecord>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows,
                ..Inner::default()
            }),
        }
    }

    /// Currently selected row indices.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.inner.read().selected.clone()
    }

    /// Rows currently covered by a busy mask.
    pub fn busy_row_indices(&self) -> Vec<usize> {
        self.inner.read().busy_rows.iter().copied().collect()
    }

    /// (row, col) cells currently showing a busy placeholder.
    pub fn busy_cells(&self) -> Vec<(usize, usize)> {
        self.inner.read().busy_cells.keys().copied().collect()
    }

    /// Whether any busy affordance is visible.
    pub fn has_busy(&self) -> bool {
        let inner = self.inner.read();
        !inner.busy_rows.is_empty() || !inner.busy_cells.is_empty()
    }
}

impl TableView for MemoryTable {
    fn datasource(&self) -> Vec<RowRecord> {
        self.inner.read().rows.clone()
    }

    fn row_at(&self, index: usize) -> Option<RowRecord> {
        self.inner.read().rows.get(index).cloned()
    }

    fn update_row_at(&self, index: usize, record: RowRecord) {
        let mut inner = self.inner.write();
        if let Some(slot) = inner.rows.get_mut(index) {
            *slot = record;
        }
    }

    fn set_datasource(&self, rows: Vec<RowRecord>) {
        self.inner.write().rows = rows;
    }

    fn set_selected_indices(&self, indices: &[usize]) {
        self.inner.write().selected = indices.to_vec();
    }

    fn show_row_busy(&self, index: usize) {
        self.inner.write().busy_rows.insert(index);
    }

    fn set_cell_text(&self, content: &str, row: usize, col: usize) {
        self.inner
            .write()
            .busy_cells
            .insert((row, col), content.to_string());
    }

    fn clear_busy(&self) {
        let mut inner = self.inner.write();
        inner.busy_rows.clear();
        inner.busy_cells.clear();
    }
}
