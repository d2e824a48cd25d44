//! Batch execution strategy
//!
//! A multi-row edit replaces the whole row collection and restores the
//! selection: batch responses may imply structural change, so the table is
//! resynced rather than patched in place.

use serde_json::Value;

use super::executor::ModifyCommandExecutor;
use super::ModifyMethod;
use crate::error::ModifyError;
use crate::event::{ExtraRowData, ModifyCommandEvent, RowRecord};
use crate::{loading, merge};

/// User-facing notice emitted after a successful batch edit.
pub const EDIT_COMPLETE_MESSAGE: &str = "edit complete";

/// Fixed display duration for the completion notice.
pub const EDIT_COMPLETE_DURATION_MS: u64 = 1000;

pub(super) async fn multi_modify<M>(
    exec: &ModifyCommandExecutor,
    method: &M,
    event: &ModifyCommandEvent,
    extra: Option<&ExtraRowData>,
) -> Result<Value, ModifyError>
where
    M: ModifyMethod + ?Sized,
{
    let rows = event.data.row.indices();
    let table = exec.table();

    let suppressed = extra.is_some_and(ExtraRowData::suppresses_loading);
    if !suppressed {
        // Row granularity only; batch mode has no per-cell affordance.
        loading::show_row_loading(table, &rows);
    }

    match method.invoke(&event.data.args).await {
        Ok(response) => {
            let patches = exec.merger().response_map(&response, event, extra);
            // Rebuild the full collection: patched positions get the merged
            // record, everything else passes through unchanged.
            let updated: Vec<RowRecord> = table
                .datasource()
                .into_iter()
                .enumerate()
                .map(|(index, record)| match patches.get(&index) {
                    Some(patch) => merge::merge_row(&record, patch, extra),
                    None => record,
                })
                .collect();
            loading::clear_row_loading(table);
            table.set_datasource(updated);
            table.set_selected_indices(&rows);
            exec.notifier()
                .notify(EDIT_COMPLETE_MESSAGE, EDIT_COMPLETE_DURATION_MS);
            Ok(response)
        }
        Err(err) => {
            loading::clear_row_loading(table);
            Err(ModifyError::Mutation(err))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use futures::FutureExt;
    use parking_lot::Mutex;
    use serde_json::json;

    use super::*;
    use crate::command::MethodFn;
    use crate::notify::Notifier;
    use crate::table::{MemoryTable, TableView};

    #[derive(Default)]
    struct RecordingNotifier {
        calls: Mutex<Vec<(String, u64)>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, duration_ms: u64) {
            self.calls.lock().push((message.to_string(), duration_ms));
        }
    }

    fn rows(n: usize) -> Vec<RowRecord> {
        (0..n)
            .map(|i| match json!({ "id": i, "status": "live" }) {
                serde_json::Value::Object(map) => map,
                _ => unreachable!(),
            })
            .collect()
    }

    #[tokio::test]
    async fn sparse_response_patches_only_named_rows() {
        let table = Arc::new(MemoryTable::new(rows(3)));
        let notifier = Arc::new(RecordingNotifier::default());
        let exec = ModifyCommandExecutor::new(table.clone(), notifier.clone());
        let event = ModifyCommandEvent::new("pause", vec![0, 1, 2]);
        let method = MethodFn::new(|_args| {
            async move { Ok(json!({ "0": { "a": 1 }, "2": { "a": 3 } })) }.boxed()
        });

        exec.execute_modify_command(&method, &event, None)
            .await
            .unwrap();

        let data = table.datasource();
        assert_eq!(data[0]["a"], json!(1));
        assert!(!data[1].contains_key("a"));
        assert_eq!(data[2]["a"], json!(3));
        assert_eq!(table.selected_indices(), vec![0, 1, 2]);

        let calls = notifier.calls.lock();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], (EDIT_COMPLETE_MESSAGE.to_string(), EDIT_COMPLETE_DURATION_MS));
    }

    #[tokio::test]
    async fn every_named_row_shows_busy_during_flight() {
        let table = Arc::new(MemoryTable::new(rows(4)));
        let probe = table.clone();
        let exec = ModifyCommandExecutor::new(table.clone(), Arc::new(RecordingNotifier::default()));
        let event = ModifyCommandEvent::new("pause", vec![1, 3]);
        let method = MethodFn::new(move |_args| {
            assert_eq!(probe.busy_row_indices(), vec![1, 3]);
            async move { Ok(json!({})) }.boxed()
        });

        exec.execute_modify_command(&method, &event, None)
            .await
            .unwrap();
        assert!(!table.has_busy());
    }

    #[tokio::test]
    async fn extra_data_lands_on_patched_rows_only() {
        let table = Arc::new(MemoryTable::new(rows(2)));
        let exec = ModifyCommandExecutor::new(table.clone(), Arc::new(RecordingNotifier::default()));
        let event = ModifyCommandEvent::new("pause", vec![0, 1]);
        let extra = ExtraRowData::new(match json!({ "touched": true }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        });
        let method = MethodFn::new(|_args| async move { Ok(json!({ "1": { "a": 2 } })) }.boxed());

        exec.execute_modify_command(&method, &event, Some(&extra))
            .await
            .unwrap();

        let data = table.datasource();
        assert!(!data[0].contains_key("touched"));
        assert_eq!(data[1]["touched"], json!(true));
        assert_eq!(data[1]["a"], json!(2));
    }

    #[tokio::test]
    async fn failure_clears_busy_and_skips_notification() {
        let table = Arc::new(MemoryTable::new(rows(2)));
        let notifier = Arc::new(RecordingNotifier::default());
        let exec = ModifyCommandExecutor::new(table.clone(), notifier.clone());
        let event = ModifyCommandEvent::new("pause", vec![0, 1]);
        let method = MethodFn::new(|_args| async move { Err(anyhow::anyhow!("backend down")) }.boxed());

        let err = exec
            .execute_modify_command(&method, &event, None)
            .await
            .unwrap_err();
        assert!(!err.is_contract());
        assert!(!table.has_busy());
        assert!(notifier.calls.lock().is_empty());
        // No row was mutated at all.
        assert_eq!(table.datasource(), rows(2));
    }
}
