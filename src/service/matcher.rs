use tracing::warn;

use crate::model::PermissionDetail;
use crate::service::capability::Capability;

/// Look up the grant for one capability within one module.
///
/// `None` details (no permission record supplied) means no grants
/// exist, regardless of module. Otherwise the first detail whose
/// `(module_id, controller, action)` triple equals the key exactly —
/// case-sensitive, no normalization — is returned. Duplicate matching
/// rows are a data-quality concern: they are logged and the first one
/// wins, never aborting the projection.
pub fn match_detail<'a>(
    details: Option<&'a [PermissionDetail]>,
    module_id: &str,
    capability: &Capability,
) -> Option<&'a PermissionDetail> {
    let mut matches = details?.iter().filter(|d| {
        d.module_id == module_id
            && d.controller == capability.controller
            && d.action == capability.action
    });

    let first = matches.next()?;
    if matches.next().is_some() {
        warn!(
            "duplicate permission details for ({}, {}, {}); using id {}",
            module_id, capability.controller, capability.action, first.id
        );
    }
    Some(first)
}
