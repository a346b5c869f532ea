//! Submission event envelope.
//!
//! Every successful operator submission is handed to the persistence layer as
//! a `SubmissionEvent`. The envelope is stable JSON; `payload` carries the
//! validated report for the event's `kind`.
//!
//! The `v` field supports schema versioning: events without a `v` field
//! deserialize with `v == 1` via `#[serde(default)]`.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::enums::WorkflowKind;
use crate::errors::CoreError;

/// Default event version for envelopes written without one.
const fn default_event_version() -> u32 {
    1
}

/// A single submission emitted by the operator workflow.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubmissionEvent {
    /// Schema version. Defaults to 1 when absent.
    #[serde(default = "default_event_version")]
    pub v: u32,

    /// When the submission was accepted.
    pub ts: DateTime<Utc>,

    /// Asset the submission refers to.
    pub asset_id: String,

    /// Which sub-flow produced the submission.
    pub kind: WorkflowKind,

    /// Captured form data. Shape depends on `kind`.
    pub payload: serde_json::Value,
}

impl SubmissionEvent {
    /// Wrap a validated report in a new envelope stamped with the current time.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Payload` if the payload cannot be serialized.
    pub fn new<T: Serialize>(
        asset_id: impl Into<String>,
        kind: WorkflowKind,
        payload: &T,
    ) -> Result<Self, CoreError> {
        let payload =
            serde_json::to_value(payload).map_err(|source| CoreError::Payload { kind, source })?;
        Ok(Self {
            v: default_event_version(),
            ts: Utc::now(),
            asset_id: asset_id.into(),
            kind,
            payload,
        })
    }

    /// Decode the payload back into its report type.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Payload` if the payload does not match `T`.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        serde_json::from_value(self.payload.clone()).map_err(|source| CoreError::Payload {
            kind: self.kind,
            source,
        })
    }
}
