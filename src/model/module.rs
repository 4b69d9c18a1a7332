use serde::{Deserialize, Serialize};

/// Which output sub-tree a menu belongs to.
///
/// Admin menus render in the back-office navigation; WebSite menus in
/// the public-site navigation. Grouping never crosses this boundary:
/// an Admin menu and a WebSite menu sharing a display name stay
/// separate groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuType {
    Admin,
    WebSite,
}

/// A leaf navigation entry contributed by a module.
///
/// The `url` is a free-form path ("News/List", "Dashboard", possibly
/// empty); its first two non-empty segments become the entry's derived
/// `(controller, action)` capability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display label.
    pub name: String,

    /// Navigation path. Empty means "no capability" — the entry still
    /// appears in the projection with an empty capability key.
    #[serde(default)]
    pub url: String,

    /// Sort key within the menu.
    #[serde(default)]
    pub order: i32,
}

/// A named navigation group contributed by a module.
///
/// `display_name` is the merge key: menus of the same type sharing a
/// display name collapse into one group in the projection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    /// Group name shown in the UI, and the merge key across sources.
    pub display_name: String,

    /// Admin or WebSite.
    #[serde(rename = "type")]
    pub menu_type: MenuType,

    /// Sort key among groups.
    #[serde(default)]
    pub order: i32,

    /// Entries in declaration order.
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// An installed feature unit.
///
/// Modules are contributed by independently pluggable features; the
/// catalog supplies the active set as an immutable snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Stable string identity (e.g. "blog", "news").
    pub module_id: String,

    /// Menus this module contributes, in declaration order.
    #[serde(default)]
    pub menus: Vec<Menu>,
}
