//! Error taxonomy for the modify-command dispatcher

use thiserror::Error;

/// Malformed input to the executor.
///
/// Indicates a caller bug, not a runtime failure: surfaced before any busy
/// affordance is shown or asynchronous work begins, and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContractViolation {
    #[error("`row` must name at least one index")]
    EmptyRowSpec,

    #[error("`col` must name at least one index when present")]
    EmptyColSpec,
}

/// Failure modes of `execute_modify_command`.
#[derive(Debug, Error)]
pub enum ModifyError {
    #[error("contract violation: {0}")]
    Contract(#[from] ContractViolation),

    /// The invoked mutation method failed. The original error is carried
    /// unchanged; clearing the loading state is the only handling applied
    /// before propagation.
    #[error("mutation failed: {0}")]
    Mutation(#[source] anyhow::Error),
}

impl ModifyError {
    pub fn is_contract(&self) -> bool {
        matches!(self, ModifyError::Contract(_))
    }

    /// Recover the mutation method's original error, if that is what failed.
    pub fn into_mutation_error(self) -> Option<anyhow::Error> {
        match self {
            ModifyError::Mutation(err) => Some(err),
            ModifyError::Contract(_) => None,
        }
    }
}
