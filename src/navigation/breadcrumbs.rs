use crate::menu::MenuTreeNode;
use serde::Serialize;

/// Titles from the root down to the first node (depth-first, pre-order) whose path equals
/// `target_path`. Empty when nothing matches.
pub fn find_path(tree: &[MenuTreeNode], target_path: &str) -> Vec<String> {
    let mut trail: Vec<&str> = Vec::new();
    let mut stack: Vec<(&MenuTreeNode, usize)> = tree.iter().rev().map(|n| (n, 0)).collect();
    while let Some((node, depth)) = stack.pop() {
        trail.truncate(depth);
        trail.push(node.title());
        if node.path() == target_path {
            return trail.into_iter().map(str::to_string).collect();
        }
        stack.extend(node.children.iter().rev().map(|child| (child, depth + 1)));
    }
    Vec::new()
}

/// Selection state for the navigation surface. Holds no business logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub active_path: String,
    pub breadcrumbs: Vec<String>,
}

impl NavigationState {
    pub fn set_active(&mut self, path: impl Into<String>) {
        self.active_path = path.into();
    }

    pub fn update_breadcrumbs(&mut self, tree: &[MenuTreeNode], path: &str) -> &[String] {
        self.breadcrumbs = find_path(tree, path);
        &self.breadcrumbs
    }

    pub fn clear(&mut self) {
        self.active_path.clear();
        self.breadcrumbs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::{build_menu_tree, MenuRecord};

    #[test]
    fn sibling_subtrees_do_not_leak_into_trail() {
        let tree = build_menu_tree(&[
            MenuRecord::new(1, 0, "A", "/a"),
            MenuRecord::new(2, 1, "A1", "/a/1"),
            MenuRecord::new(3, 2, "A1x", "/a/1/x"),
            MenuRecord::new(4, 0, "B", "/b"),
            MenuRecord::new(5, 4, "B1", "/b/1"),
        ]);
        assert_eq!(find_path(&tree, "/b/1"), vec!["B", "B1"]);
        assert_eq!(find_path(&tree, "/a/1/x"), vec!["A", "A1", "A1x"]);
    }

    #[test]
    fn empty_tree_yields_empty_trail() {
        assert!(find_path(&[], "/anything").is_empty());
    }
}
