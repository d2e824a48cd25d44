//! Response reconciliation
//!
//! Derives the per-row patch map from a raw mutation response, and merges
//! patches onto row records. The merger is an injected extension point with
//! an identity default.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use crate::event::{ExtraRowData, ModifyCommandEvent, RowPatch, RowRecord};

/// Mapping from datasource row index to the partial patch to apply there.
///
/// Covers a subset of indices, not necessarily every row the command named.
/// Produced per invocation, never persisted.
pub type ResponseMap = BTreeMap<usize, RowPatch>;

/// Turns a raw response into a `ResponseMap`.
///
/// Resolved once at executor construction. Callers whose backend returns a
/// differently-shaped payload inject their own implementation.
pub trait ResponseMerger: Send + Sync {
    fn response_map(
        &self,
        response: &Value,
        event: &ModifyCommandEvent,
        extra: Option<&ExtraRowData>,
    ) -> ResponseMap;
}

/// Default merger: treats the response as already indexed by row — a JSON
/// object whose keys are row indices and whose values are patch objects.
/// Entries that do not fit that shape are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct IdentityMerger;

impl ResponseMerger for IdentityMerger {
    fn response_map(
        &self,
        response: &Value,
        _event: &ModifyCommandEvent,
        _extra: Option<&ExtraRowData>,
    ) -> ResponseMap {
        let mut map = ResponseMap::new();
        let entries = match response {
            Value::Object(entries) => entries,
            _ => {
                debug!("response is not an object, nothing to merge");
                return map;
            }
        };
        for (key, value) in entries {
            let index = match key.parse::<usize>() {
                Ok(index) => index,
                Err(_) => {
                    debug!(%key, "skipping non-index response key");
                    continue;
                }
            };
            match value {
                Value::Object(patch) => {
                    map.insert(index, patch.clone());
                }
                _ => debug!(%key, "skipping non-object patch value"),
            }
        }
        map
    }
}

/// Merge `patch`, then the extra data's patch, onto `record`.
///
/// Later sources win: patch fields override the existing record, extra
/// fields override both.
pub fn merge_row(record: &RowRecord, patch: &RowPatch, extra: Option<&ExtraRowData>) -> RowRecord {
    let mut merged = record.clone();
    for (key, value) in patch {
        merged.insert(key.clone(), value.clone());
    }
    if let Some(extra) = extra {
        for (key, value) in &extra.patch {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}
