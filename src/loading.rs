//! Transient busy affordances over a table
//!
//! Pure side-effect helpers with no state of their own. Row-level loading
//! overlays a full-row mask; cell-level loading swaps cell content for an
//! inline placeholder.

use crate::table::TableView;

/// Placeholder written into a cell while its edit is in flight.
pub const INLINE_LOADING: &str = "…";

/// Overlay a busy mask on each of the given rows.
pub fn show_row_loading(table: &dyn TableView, rows: &[usize]) {
    for &row in rows {
        table.show_row_busy(row);
    }
}

/// Show an inline placeholder for every cell in the rows × cols cross-product.
pub fn show_cell_loading(table: &dyn TableView, rows: &[usize], cols: &[usize]) {
    for &row in rows {
        for &col in cols {
            table.set_cell_text(INLINE_LOADING, row, col);
        }
    }
}

/// Remove every busy affordance from the table.
///
/// Unconditional and idempotent: safe to call when nothing is loading.
pub fn clear_row_loading(table: &dyn TableView) {
    table.clear_busy();
}
