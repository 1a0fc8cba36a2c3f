//! Append-only audit trail maintenance.

use crux_core::models::{Hypothesis, HypothesisAuditEvent};

/// Append an event unless a content-identical one (timestamp excluded) is
/// already on the trail. Returns whether the event was appended.
pub fn append_deduped(hypothesis: &mut Hypothesis, event: HypothesisAuditEvent) -> bool {
    let key = event.dedupe_key();
    if hypothesis.audit.iter().any(|e| e.dedupe_key() == key) {
        return false;
    }
    tracing::debug!(
        hypothesis = %event.hypothesis_id,
        state = event.state.as_str(),
        trigger = event.trigger.as_str(),
        "lifecycle transition recorded"
    );
    hypothesis.audit.push(event);
    true
}
