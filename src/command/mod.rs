//! Modify-command dispatch
//!
//! This module handles:
//! - Classifying an edit gesture as single-row or batch
//! - Showing and clearing busy affordances at the right granularity
//! - Invoking the caller-supplied mutation method
//! - Reconciling the confirmed response into the table

mod batch;
mod executor;
mod single;

pub use batch::{EDIT_COMPLETE_DURATION_MS, EDIT_COMPLETE_MESSAGE};
pub use executor::{AfterModifyHook, ModifyCommandExecutor, NoopHook};

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::event::{IndexSpec, ModifyCommandEvent};

/// Which execution strategy a command takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Single,
    Batch,
}

impl CommandKind {
    /// A command is batch iff it names more than one row. A bare index and
    /// a one-element sequence are both single.
    pub fn classify(event: &ModifyCommandEvent) -> Self {
        match &event.data.row {
            IndexSpec::Many(rows) if rows.len() > 1 => CommandKind::Batch,
            _ => CommandKind::Single,
        }
    }
}

/// The caller-supplied asynchronous mutation behind an edit gesture.
///
/// The await of `invoke` is the only suspension point in a command's
/// lifetime. No cancellation or timeout is applied at this layer; the call
/// runs to completion once started.
#[async_trait]
pub trait ModifyMethod: Send + Sync {
    async fn invoke(&self, args: &[Value]) -> anyhow::Result<Value>;
}

/// Adapter so a plain async closure can serve as a [`ModifyMethod`].
pub struct MethodFn<F>(F);

impl<F> MethodFn<F>
where
    F: Fn(Vec<Value>) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        MethodFn(f)
    }
}

#[async_trait]
impl<F> ModifyMethod for MethodFn<F>
where
    F: Fn(Vec<Value>) -> BoxFuture<'static, anyhow::Result<Value>> + Send + Sync,
{
    async fn invoke(&self, args: &[Value]) -> anyhow::Result<Value> {
        (self.0)(args.to_vec()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_element_sequence_is_single() {
        let event = ModifyCommandEvent::new("pause", vec![5]);
        assert_eq!(CommandKind::classify(&event), CommandKind::Single);
    }

    #[test]
    fn bare_index_is_single() {
        let event = ModifyCommandEvent::new("pause", 5);
        assert_eq!(CommandKind::classify(&event), CommandKind::Single);
    }

    #[test]
    fn two_or_more_rows_is_batch() {
        let event = ModifyCommandEvent::new("pause", vec![0, 1]);
        assert_eq!(CommandKind::classify(&event), CommandKind::Batch);
        let event = ModifyCommandEvent::new("pause", vec![0, 1, 2]);
        assert_eq!(CommandKind::classify(&event), CommandKind::Batch);
    }
}
