use serde::{Deserialize, Serialize};

/// Sentinel id for a capability with no persisted grant.
///
/// Emitted as `MenuItemView.id` when no `PermissionDetail` matches,
/// and as `UserAccessView.permission_id` when no record was supplied.
pub const UNGRANTED: i64 = 0;

/// A previously persisted grant of one capability within one module.
///
/// The `(module_id, controller, action)` triple uniquely identifies
/// the capability; matching against it is exact and case-sensitive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionDetail {
    /// Row identity of the grant.
    pub id: i64,

    /// Owning module's id.
    pub module_id: String,

    /// Capability controller segment.
    pub controller: String,

    /// Capability action segment.
    pub action: String,

    /// Display label stored at grant time. May have drifted from the
    /// module's current menu item name; the stored value wins on a
    /// granted item.
    pub name: String,

    /// Sort key stored at grant time.
    #[serde(default)]
    pub order: i32,
}

/// The persisted permission set for one role or user.
///
/// Supplied by an external permission store; `None` at the projection
/// boundary means "no prior grants". The projection never writes back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRecord {
    pub id: i64,

    /// Granted capabilities, unordered. Duplicate triples are a
    /// data-quality concern, not a failure; the first match wins.
    #[serde(default)]
    pub details: Vec<PermissionDetail>,
}
