//! The end-to-end reconciliation pipeline with change detection.

use serde::Serialize;
use thiserror::Error;

use crate::device::{wrap_config, ApplyError, ConfigApplier, EditConfigRequest};
use crate::facts::{FactsError, FactsSource};
use crate::model::{facts_differ, FlexiblePort, State};
use crate::payload::{build_payload, PayloadError};
use crate::reconcile::reconcile;

/// Errors raised by one reconciliation run. Collaborator failures propagate
/// unchanged; there is no retry and no partial-state recovery.
#[derive(Debug, Error)]
pub enum ExecuteError {
    #[error("fetching flexible-port facts failed: {0}")]
    Facts(#[from] FactsError),
    #[error("building edit-config payload failed: {0}")]
    Payload(#[from] PayloadError),
    #[error("applying edit-config failed: {0}")]
    Apply(#[from] ApplyError),
}

/// Result of one reconciliation run.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileOutcome {
    pub changed: bool,
    /// The serialized `<fps>` payload that was submitted.
    pub xml: String,
    /// Facts snapshot taken before the edit.
    pub before: Vec<FlexiblePort>,
    /// Post-edit snapshot, present only when it differs from `before`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Vec<FlexiblePort>>,
}

/// Run one reconciliation pass: fetch facts, generate the payload, submit
/// it, re-fetch, and compare.
pub fn execute(
    facts: &mut impl FactsSource,
    applier: &mut impl ConfigApplier,
    want: &[FlexiblePort],
    state: State,
) -> Result<ReconcileOutcome, ExecuteError> {
    let before = facts.fetch()?;

    let fragments = reconcile(want, &before, state);
    let payload = build_payload(fragments)?;

    applier.edit_config(&wrap_config(&payload), &EditConfigRequest::default())?;

    let after = facts.fetch()?;
    let changed = facts_differ(&before, &after);

    Ok(ReconcileOutcome {
        changed,
        xml: String::from_utf8_lossy(&payload).into_owned(),
        before,
        after: changed.then_some(after),
    })
}
