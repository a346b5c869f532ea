//! Errors shared by the domain crates.
//!
//! `fleet-workflow` and `fleet-client` wrap these in their own error enums;
//! the CLI flattens everything into `anyhow`.

use thiserror::Error;

use crate::enums::{StepKind, WorkflowKind};

#[derive(Debug, Error)]
pub enum CoreError {
    /// No record with this id in the loaded snapshot.
    #[error("no {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    /// The operator workflow was asked to move along an edge it does not have.
    #[error("cannot move from step {from} to step {to}")]
    InvalidTransition { from: StepKind, to: StepKind },

    /// A submission payload could not be encoded or decoded.
    #[error("{kind} payload: {source}")]
    Payload {
        kind: WorkflowKind,
        #[source]
        source: serde_json::Error,
    },
}
