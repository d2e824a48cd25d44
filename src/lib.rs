//! gridmod — modify-command dispatcher for tabular editing UIs
//!
//! This crate turns a row/cell edit gesture into an asynchronous mutation,
//! keeps busy affordances correct during the round-trip, and reconciles the
//! authoritative response back into the table's row collection.
//!
//! It owns the decision logic only. Widgets, gesture-to-command binding, and
//! notification rendering live behind the [`TableView`] and [`Notifier`]
//! seams; the mutation itself is a caller-supplied [`ModifyMethod`].
//!
//! A command names one or more rows. One row (a bare index or a one-element
//! sequence) takes the single-row path: busy state at row or cell
//! granularity, then an in-place merge of the confirmed patch. Two or more
//! rows take the batch path: row-level busy masks, a full datasource resync,
//! selection restore, and a completion notice. Both paths guarantee that
//! busy state is cleared whether the mutation succeeds or fails, and the
//! caller always observes the mutation's original result.
//!
//! Concurrency: the dispatcher is single-command cooperative. It neither
//! serializes nor deduplicates overlapping commands against the same rows;
//! callers needing that coordinate above this layer.

pub mod command;
pub mod error;
pub mod event;
pub mod loading;
pub mod merge;
pub mod notify;
pub mod table;

pub use command::{
    AfterModifyHook, CommandKind, MethodFn, ModifyCommandExecutor, ModifyMethod, NoopHook,
    EDIT_COMPLETE_DURATION_MS, EDIT_COMPLETE_MESSAGE,
};
pub use error::{ContractViolation, ModifyError};
pub use event::{
    CommandData, ExecutedSource, ExtraRowData, IndexSpec, ModifyCommandEvent, RowPatch, RowRecord,
};
pub use loading::INLINE_LOADING;
pub use merge::{IdentityMerger, ResponseMap, ResponseMerger};
pub use notify::{LogNotifier, Notifier};
pub use table::{MemoryTable, TableView};
