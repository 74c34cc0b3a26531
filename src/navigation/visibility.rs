use crate::menu::MenuTreeNode;
use crate::services::{FeatureGroup, ServiceCombinationState};

/// Whether a menu path belongs to an available feature group, or to none at all.
pub fn is_feature_visible(path: &str, services: &ServiceCombinationState) -> bool {
    FeatureGroup::for_menu_path(path).map_or(true, |group| services.is_available(group))
}

/// The tree presentation code should draw: disabled subtrees are dropped, and so are
/// top-level menus owned by an unavailable feature group.
pub fn visible_tree(tree: &[MenuTreeNode], services: &ServiceCombinationState) -> Vec<MenuTreeNode> {
    tree.iter()
        .filter(|root| is_feature_visible(root.path(), services))
        .filter_map(enabled_subtree)
        .collect()
}

fn enabled_subtree(node: &MenuTreeNode) -> Option<MenuTreeNode> {
    if !node.record.status.is_enabled() {
        return None;
    }
    Some(MenuTreeNode {
        record: node.record.clone(),
        children: node.children.iter().filter_map(enabled_subtree).collect(),
    })
}
