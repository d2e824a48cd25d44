//! Single-row execution strategy
//!
//! Edits exactly one row in place; row identity and position are preserved.

use serde_json::Value;

use super::executor::ModifyCommandExecutor;
use super::ModifyMethod;
use crate::error::{ContractViolation, ModifyError};
use crate::event::{ExtraRowData, ModifyCommandEvent};
use crate::{loading, merge};

pub(super) async fn inline_modify<M>(
    exec: &ModifyCommandExecutor,
    method: &M,
    event: &ModifyCommandEvent,
    extra: Option<&ExtraRowData>,
) -> Result<Value, ModifyError>
where
    M: ModifyMethod + ?Sized,
{
    // row/col may arrive as one-element sequences; normalize to scalars.
    let row = event
        .data
        .row
        .first()
        .ok_or(ContractViolation::EmptyRowSpec)?;
    let col = match &event.data.col {
        Some(spec) => Some(spec.first().ok_or(ContractViolation::EmptyColSpec)?),
        None => None,
    };

    let table = exec.table();
    let suppressed = extra.is_some_and(ExtraRowData::suppresses_loading);
    if !suppressed {
        match col {
            // Row refresh mode when the gesture names no column.
            None => loading::show_row_loading(table, &[row]),
            Some(col) => loading::show_cell_loading(table, &[row], &[col]),
        }
    }

    match method.invoke(&event.data.args).await {
        Ok(response) => {
            let patches = exec.merger().response_map(&response, event, extra);
            loading::clear_row_loading(table);
            for (index, patch) in &patches {
                // The merge reads from whichever index the response named,
                // but the write always lands on the originally requested
                // row. No existing record at that index means no update.
                if let Some(existing) = table.row_at(*index) {
                    let merged = merge::merge_row(&existing, patch, extra);
                    table.update_row_at(row, merged);
                }
            }
            Ok(response)
        }
        Err(err) => {
            loading::clear_row_loading(table);
            Err(ModifyError::Mutation(err))
        }
    }
}
