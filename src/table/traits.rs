//! Table collaborator contract
//!
//! The dispatcher consumes this trait; widget adapters implement it. All
//! methods are synchronous and take `&self` (adapters use interior
//! mutability): busy display and reconciliation run on the UI task between
//! awaits and must not themselves suspend.

use crate::event::RowRecord;

/// The table widget seam. Position in the datasource is row identity.
pub trait TableView: Send + Sync {
    /// Snapshot of the row collection, ordered by position.
    fn datasource(&self) -> Vec<RowRecord>;

    /// Read the row at `index`, if present.
    fn row_at(&self, index: usize) -> Option<RowRecord>;

    /// Replace the row at `index` in place. Out-of-range writes are left to
    /// the adapter's discretion.
    fn update_row_at(&self, index: usize, record: RowRecord);

    /// Replace the entire row collection.
    fn set_datasource(&self, rows: Vec<RowRecord>);

    /// Restore the selection to the given indices.
    fn set_selected_indices(&self, indices: &[usize]);

    /// Overlay a non-interactive busy mask on one rendered row.
    fn show_row_busy(&self, index: usize);

    /// Replace one cell's content with the given placeholder.
    fn set_cell_text(&self, content: &str, row: usize, col: usize);

    /// Remove every busy mask and placeholder. Idempotent; a no-op when
    /// nothing is currently loading.
    fn clear_busy(&self);
}
