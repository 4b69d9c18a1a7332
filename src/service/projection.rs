use crate::catalog::{CatalogError, ModuleCatalog};
use crate::model::{
    MenuGroupView, MenuItem, MenuItemView, MenuType, Module, ModuleView, PermissionDetail,
    PermissionRecord, UNGRANTED, UserAccessView,
};
use crate::service::capability::parse_capability;
use crate::service::grouping::group_menus;
use crate::service::matcher::match_detail;

/// Build the access matrix: one `ModuleView` per active module, in
/// catalog order, with every navigation entry annotated against the
/// supplied permission record.
///
/// Pure read over the two inputs; recomputed fresh on every call.
/// `permission = None` yields a tree where every item is ungranted.
pub fn project(
    catalog: &dyn ModuleCatalog,
    permission: Option<&PermissionRecord>,
) -> Result<Vec<ModuleView>, CatalogError> {
    let details = permission.map(|p| p.details.as_slice());

    let mut views = Vec::new();
    for module in catalog.active_modules()? {
        let admin_groups = build_groups(&module, MenuType::Admin, details);
        let site_groups = build_groups(&module, MenuType::WebSite, details);
        views.push(ModuleView {
            module_id: module.module_id,
            admin_groups,
            site_groups,
        });
    }
    Ok(views)
}

/// [`project`] wrapped with the record identity, for the admin
/// user-edit screen. The caller renders the "allowed" and "denied"
/// panes by filtering the one result (`granted()` / `denied()`).
pub fn project_user(
    catalog: &dyn ModuleCatalog,
    permission: Option<&PermissionRecord>,
) -> Result<UserAccessView, CatalogError> {
    let modules = project(catalog, permission)?;
    Ok(UserAccessView {
        permission_id: permission.map(|p| p.id).unwrap_or(UNGRANTED),
        modules,
    })
}

fn build_groups(
    module: &Module,
    menu_type: MenuType,
    details: Option<&[PermissionDetail]>,
) -> Vec<MenuGroupView> {
    group_menus(&module.menus, menu_type)
        .into_iter()
        .map(|group| MenuGroupView {
            menu_type,
            name: group.name,
            order: group.order,
            items: build_items(&group.items, &module.module_id, details),
        })
        .collect()
}

fn build_items(
    items: &[MenuItem],
    module_id: &str,
    details: Option<&[PermissionDetail]>,
) -> Vec<MenuItemView> {
    items
        .iter()
        .map(|item| {
            let capability = parse_capability(&item.url);
            match match_detail(details, module_id, &capability) {
                // Granted: the stored name/order win, even if the
                // module's declaration has since drifted.
                Some(found) => MenuItemView {
                    id: found.id,
                    controller: capability.controller,
                    action: capability.action,
                    name: found.name.clone(),
                    order: found.order,
                    is_granted: true,
                },
                None => MenuItemView {
                    id: UNGRANTED,
                    controller: capability.controller,
                    action: capability.action,
                    name: item.name.clone(),
                    order: item.order,
                    is_granted: false,
                },
            }
        })
        .collect()
}
