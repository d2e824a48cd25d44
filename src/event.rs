//! Modify-command event types
//!
//! One `ModifyCommandEvent` is created per edit gesture and discarded after
//! the resulting call settles. Rows have no separate id concept: position in
//! the table's datasource is the identity used throughout.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One table row, keyed by field name.
pub type RowRecord = serde_json::Map<String, Value>;

/// A partial patch applied onto a row record.
pub type RowPatch = serde_json::Map<String, Value>;

/// One or more table indices named by a command.
///
/// A bare index and a one-element sequence mean the same thing to the
/// dispatcher; a sequence of two or more marks the command as batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexSpec {
    One(usize),
    Many(Vec<usize>),
}

impl IndexSpec {
    /// Normalize to a scalar by taking the first element.
    pub fn first(&self) -> Option<usize> {
        match self {
            IndexSpec::One(index) => Some(*index),
            IndexSpec::Many(indices) => indices.first().copied(),
        }
    }

    /// All named indices, in order.
    pub fn indices(&self) -> Vec<usize> {
        match self {
            IndexSpec::One(index) => vec![*index],
            IndexSpec::Many(indices) => indices.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            IndexSpec::One(_) => 1,
            IndexSpec::Many(indices) => indices.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            IndexSpec::One(_) => false,
            IndexSpec::Many(indices) => indices.is_empty(),
        }
    }
}

impl From<usize> for IndexSpec {
    fn from(index: usize) -> Self {
        IndexSpec::One(index)
    }
}

impl From<Vec<usize>> for IndexSpec {
    fn from(indices: Vec<usize>) -> Self {
        IndexSpec::Many(indices)
    }
}

/// Payload carried by an edit gesture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandData {
    /// Arguments forwarded to the mutation method for this invocation.
    #[serde(default)]
    pub args: Vec<Value>,
    /// Affected row(s). More than one index makes the command batch.
    pub row: IndexSpec,
    /// Affected column(s); when present, single-row commands switch from a
    /// row-level busy mask to a per-cell placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<IndexSpec>,
}

/// A user- or component-initiated request to change one or more table rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModifyCommandEvent {
    /// Gesture kind, e.g. "pause".
    #[serde(rename = "type")]
    pub kind: String,
    pub data: CommandData,
}

impl ModifyCommandEvent {
    pub fn new(kind: impl Into<String>, row: impl Into<IndexSpec>) -> Self {
        Self {
            kind: kind.into(),
            data: CommandData {
                args: Vec::new(),
                row: row.into(),
                col: None,
            },
        }
    }

    pub fn with_col(mut self, col: impl Into<IndexSpec>) -> Self {
        self.data.col = Some(col.into());
        self
    }

    pub fn with_args(mut self, args: Vec<Value>) -> Self {
        self.data.args = args;
        self
    }
}

/// Who initiated the edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutedSource {
    /// A direct user gesture; the dispatcher owns the busy affordance.
    #[default]
    User,
    /// A sub-component that already renders its own busy indicator;
    /// suppresses duplicate loading UI at this layer.
    Component,
}

/// Extra patch data merged into every affected row after success.
///
/// Applied last, so its fields override both the existing record and the
/// response patch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraRowData {
    #[serde(default)]
    pub patch: RowPatch,
    #[serde(default)]
    pub executed_source: ExecutedSource,
}

impl ExtraRowData {
    pub fn new(patch: RowPatch) -> Self {
        Self {
            patch,
            executed_source: ExecutedSource::User,
        }
    }

    /// Extra data marking a component-initiated edit.
    pub fn from_component(patch: RowPatch) -> Self {
        Self {
            patch,
            executed_source: ExecutedSource::Component,
        }
    }

    pub fn suppresses_loading(&self) -> bool {
        self.executed_source == ExecutedSource::Component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_spec_normalizes_to_first_element() {
        assert_eq!(IndexSpec::One(3).first(), Some(3));
        assert_eq!(IndexSpec::Many(vec![4, 5]).first(), Some(4));
        assert_eq!(IndexSpec::Many(vec![]).first(), None);
    }

    #[test]
    fn index_spec_emptiness() {
        assert!(!IndexSpec::One(0).is_empty());
        assert!(IndexSpec::Many(vec![]).is_empty());
        assert_eq!(IndexSpec::Many(vec![1, 2, 3]).len(), 3);
    }

    #[test]
    fn event_deserializes_from_gesture_json() {
        let event: ModifyCommandEvent = serde_json::from_value(json!({
            "type": "pause",
            "data": { "row": [0, 1], "args": [42] }
        }))
        .unwrap();
        assert_eq!(event.kind, "pause");
        assert_eq!(event.data.row, IndexSpec::Many(vec![0, 1]));
        assert!(event.data.col.is_none());
    }

    #[test]
    fn scalar_row_deserializes_as_one() {
        let event: ModifyCommandEvent = serde_json::from_value(json!({
            "type": "rename",
            "data": { "row": 7, "col": 2 }
        }))
        .unwrap();
        assert_eq!(event.data.row, IndexSpec::One(7));
        assert_eq!(event.data.col, Some(IndexSpec::One(2)));
    }

    #[test]
    fn component_source_suppresses_loading() {
        let extra = ExtraRowData::from_component(RowPatch::new());
        assert!(extra.suppresses_loading());
        assert!(!ExtraRowData::default().suppresses_loading());
    }
}
