pub mod breadcrumbs;
pub mod visibility;

pub use breadcrumbs::{find_path, NavigationState};
pub use visibility::{is_feature_visible, visible_tree};
