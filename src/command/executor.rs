//! Dispatcher for modify commands

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use super::{batch, single, CommandKind, ModifyMethod};
use crate::error::{ContractViolation, ModifyError};
use crate::event::{ExtraRowData, ModifyCommandEvent};
use crate::merge::{IdentityMerger, ResponseMerger};
use crate::notify::Notifier;
use crate::table::TableView;

/// Post-success hook, e.g. analytics or dependent-field refresh.
///
/// Runs after the command's result has been reconciled into the table, and
/// only when the command succeeded.
pub trait AfterModifyHook: Send + Sync {
    fn after_modify(&self, event: &ModifyCommandEvent);
}

/// Default hook: does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl AfterModifyHook for NoopHook {
    fn after_modify(&self, _event: &ModifyCommandEvent) {}
}

/// Drives a modify command end to end: classify, show busy state, invoke
/// the mutation, reconcile the response into the table, notify.
///
/// The merger and the after-hook are extension points resolved once at
/// construction; defaults are the identity merger and a no-op hook.
pub struct ModifyCommandExecutor {
    table: Arc<dyn TableView>,
    notifier: Arc<dyn Notifier>,
    merger: Box<dyn ResponseMerger>,
    after_hook: Box<dyn AfterModifyHook>,
}

impl ModifyCommandExecutor {
    pub fn new(table: Arc<dyn TableView>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            table,
            notifier,
            merger: Box::new(IdentityMerger),
            after_hook: Box::new(NoopHook),
        }
    }

    /// Replace the response merger. The default treats the response as
    /// already indexed by row.
    pub fn with_merger(mut self, merger: impl ResponseMerger + 'static) -> Self {
        self.merger = Box::new(merger);
        self
    }

    /// Replace the post-success hook.
    pub fn with_after_hook(mut self, hook: impl AfterModifyHook + 'static) -> Self {
        self.after_hook = Box::new(hook);
        self
    }

    /// Execute a modify command, single or batch.
    ///
    /// A malformed event fails with a `ContractViolation` before any busy
    /// affordance appears or asynchronous work begins. A failing mutation
    /// method propagates its original error unchanged, after the busy state
    /// has been cleared. The after-hook runs only on success; the caller
    /// observes the strategy's result either way.
    pub async fn execute_modify_command<M>(
        &self,
        method: &M,
        event: &ModifyCommandEvent,
        extra: Option<&ExtraRowData>,
    ) -> Result<Value, ModifyError>
    where
        M: ModifyMethod + ?Sized,
    {
        validate_event(event)?;

        let kind = CommandKind::classify(event);
        debug!(?kind, gesture = %event.kind, "executing modify command");

        let result = match kind {
            CommandKind::Single => single::inline_modify(self, method, event, extra).await,
            CommandKind::Batch => batch::multi_modify(self, method, event, extra).await,
        };

        if result.is_ok() {
            self.after_hook.after_modify(event);
        }

        result
    }

    pub(super) fn table(&self) -> &dyn TableView {
        self.table.as_ref()
    }

    pub(super) fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub(super) fn merger(&self) -> &dyn ResponseMerger {
        self.merger.as_ref()
    }
}

/// Reject malformed events before any asynchronous work begins.
fn validate_event(event: &ModifyCommandEvent) -> Result<(), ContractViolation> {
    if event.data.row.is_empty() {
        return Err(ContractViolation::EmptyRowSpec);
    }
    if let Some(col) = &event.data.col {
        if col.is_empty() {
            return Err(ContractViolation::EmptyColSpec);
        }
    }
    Ok(())
}
