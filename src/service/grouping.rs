use crate::model::{Menu, MenuItem, MenuType};

/// One display-name partition of a module's menus, before permission
/// annotation.
#[derive(Debug, Clone)]
pub struct GroupedMenu {
    pub name: String,
    pub order: i32,
    pub items: Vec<MenuItem>,
}

/// Collapse a module's menus of one type into named groups.
///
/// Menus of the requested type sharing a `display_name` merge into a
/// single group: items are concatenated in catalog order (duplicates
/// across sources preserved), and the group order is the smallest
/// order among the merged menus — the deterministic tie-break when
/// sources disagree. Output is sorted by ascending order, ties broken
/// by name, so repeated calls over the same input are identical.
pub fn group_menus(menus: &[Menu], menu_type: MenuType) -> Vec<GroupedMenu> {
    let mut groups: Vec<GroupedMenu> = Vec::new();

    for menu in menus.iter().filter(|m| m.menu_type == menu_type) {
        match groups.iter_mut().find(|g| g.name == menu.display_name) {
            Some(group) => {
                group.order = group.order.min(menu.order);
                group.items.extend(menu.items.iter().cloned());
            }
            None => groups.push(GroupedMenu {
                name: menu.display_name.clone(),
                order: menu.order,
                items: menu.items.clone(),
            }),
        }
    }

    groups.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.name.cmp(&b.name)));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(name: &str, menu_type: MenuType, order: i32, items: &[&str]) -> Menu {
        Menu {
            display_name: name.to_string(),
            menu_type,
            order,
            items: items
                .iter()
                .enumerate()
                .map(|(i, n)| MenuItem {
                    name: n.to_string(),
                    url: format!("{}/Index", n),
                    order: i as i32,
                })
                .collect(),
        }
    }

    #[test]
    fn test_filters_by_type() {
        let menus = vec![
            menu("Content", MenuType::Admin, 1, &["Posts"]),
            menu("Content", MenuType::WebSite, 1, &["Home"]),
        ];

        let admin = group_menus(&menus, MenuType::Admin);
        assert_eq!(admin.len(), 1);
        assert_eq!(admin[0].items[0].name, "Posts");

        // Same display name, different type: no cross-type merge.
        let site = group_menus(&menus, MenuType::WebSite);
        assert_eq!(site.len(), 1);
        assert_eq!(site[0].items[0].name, "Home");
    }

    #[test]
    fn test_same_name_merges_items_in_catalog_order() {
        let menus = vec![
            menu("Content", MenuType::Admin, 2, &["Posts", "Pages"]),
            menu("Content", MenuType::Admin, 5, &["Media"]),
        ];

        let groups = group_menus(&menus, MenuType::Admin);
        assert_eq!(groups.len(), 1);
        let names: Vec<&str> = groups[0].items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Posts", "Pages", "Media"]);
    }

    #[test]
    fn test_duplicate_name_takes_smallest_order() {
        let menus = vec![
            menu("Content", MenuType::Admin, 9, &["Posts"]),
            menu("Content", MenuType::Admin, 3, &["Media"]),
        ];

        let groups = group_menus(&menus, MenuType::Admin);
        assert_eq!(groups[0].order, 3);
    }

    #[test]
    fn test_output_sorted_by_order_then_name() {
        let menus = vec![
            menu("Zeta", MenuType::Admin, 2, &[]),
            menu("Alpha", MenuType::Admin, 2, &[]),
            menu("Beta", MenuType::Admin, 1, &[]),
        ];

        let groups = group_menus(&menus, MenuType::Admin);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha", "Zeta"]);
    }

    #[test]
    fn test_idempotent() {
        let menus = vec![
            menu("Content", MenuType::Admin, 2, &["Posts"]),
            menu("Content", MenuType::Admin, 1, &["Media"]),
            menu("Users", MenuType::Admin, 3, &["List"]),
        ];

        let a = group_menus(&menus, MenuType::Admin);
        let b = group_menus(&menus, MenuType::Admin);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.order, y.order);
            let xi: Vec<&str> = x.items.iter().map(|i| i.name.as_str()).collect();
            let yi: Vec<&str> = y.items.iter().map(|i| i.name.as_str()).collect();
            assert_eq!(xi, yi);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(group_menus(&[], MenuType::Admin).is_empty());
    }
}
