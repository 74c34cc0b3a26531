pub mod defaults;
pub mod record;
pub mod tree;

pub use defaults::{default_menu_records, demo_menu_records};
pub use record::{MenuRecord, MenuStatus};
pub use tree::{
    build_menu_tree, build_menu_tree_with_report, forest_node_count, walk_forest, MenuTreeNode,
    TreeBuild, TreeIssue,
};
