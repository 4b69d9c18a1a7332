use serde::{Deserialize, Serialize};

use crate::model::MenuType;

/// One navigation entry in the output tree, annotated with its grant
/// state.
///
/// On a granted item, `id`/`name`/`order` come from the matching
/// `PermissionDetail` (the stored values, which may have drifted from
/// the module's current declaration). On an ungranted item they come
/// from the menu item itself, with `id = UNGRANTED`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemView {
    pub id: i64,
    pub controller: String,
    pub action: String,
    pub name: String,
    pub order: i32,
    pub is_granted: bool,
}

/// A merged menu group in the output tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuGroupView {
    #[serde(rename = "type")]
    pub menu_type: MenuType,

    /// The shared display name of the merged source menus.
    pub name: String,

    /// Smallest order among the merged source menus.
    pub order: i32,

    /// Entries in catalog order, duplicates across sources preserved.
    pub items: Vec<MenuItemView>,
}

/// The projection output for one active module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleView {
    pub module_id: String,
    pub admin_groups: Vec<MenuGroupView>,
    pub site_groups: Vec<MenuGroupView>,
}

/// The full access matrix for one user or role.
///
/// A single projection carries the grant state of every capability in
/// the system; the caller renders "allowed" and "denied" by filtering
/// it with [`granted`](UserAccessView::granted) and
/// [`denied`](UserAccessView::denied) rather than by running two
/// separate projections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccessView {
    /// Id of the supplied permission record, or `UNGRANTED` when the
    /// user has no record yet.
    pub permission_id: i64,

    /// One view per active module, in catalog order.
    pub modules: Vec<ModuleView>,
}

impl UserAccessView {
    /// The tree restricted to granted items. Groups are kept even when
    /// the filter empties them, so both renderings stay structurally
    /// aligned.
    pub fn granted(&self) -> Vec<ModuleView> {
        self.filtered(true)
    }

    /// The tree restricted to ungranted items.
    pub fn denied(&self) -> Vec<ModuleView> {
        self.filtered(false)
    }

    fn filtered(&self, granted: bool) -> Vec<ModuleView> {
        self.modules
            .iter()
            .map(|module| ModuleView {
                module_id: module.module_id.clone(),
                admin_groups: filter_groups(&module.admin_groups, granted),
                site_groups: filter_groups(&module.site_groups, granted),
            })
            .collect()
    }
}

fn filter_groups(groups: &[MenuGroupView], granted: bool) -> Vec<MenuGroupView> {
    groups
        .iter()
        .map(|group| MenuGroupView {
            menu_type: group.menu_type,
            name: group.name.clone(),
            order: group.order,
            items: group
                .items
                .iter()
                .filter(|item| item.is_granted == granted)
                .cloned()
                .collect(),
        })
        .collect()
}
