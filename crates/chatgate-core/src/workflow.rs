//! Workflow-reference resolution.
//!
//! A session request may name its workflow two ways; the gateway falls back
//! to a statically configured default when the body names none.

use chatgate_types::session::SessionRequest;

/// Resolve the workflow reference for a session request.
///
/// Precedence: body `workflow.id`, then body `workflowId`, then the
/// configured default. The first selector *present* wins even when its
/// value is empty; an empty winner is then rejected, not skipped. Returns
/// `None` when no non-empty reference resolves -- the caller must reject
/// the request before any upstream call.
pub fn resolve_workflow(request: &SessionRequest, default: Option<&str>) -> Option<String> {
    let resolved = request
        .workflow
        .as_ref()
        .and_then(|w| w.id.clone())
        .or_else(|| request.workflow_id.clone())
        .or_else(|| default.map(str::to_string));

    resolved.filter(|id| !id.is_empty())
}
