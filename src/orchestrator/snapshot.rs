use super::LoadState;
use crate::menu::{MenuRecord, MenuTreeNode};
use crate::navigation::{find_path, visible_tree};
use crate::routing::RouteTable;
use crate::services::ServiceCombinationState;
use crate::shared::logging::NavEvent;
use serde::Serialize;

/// Everything one load produced. Published whole and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSnapshot {
    pub generation: u64,
    pub state: LoadState,
    pub records: Vec<MenuRecord>,
    pub tree: Vec<MenuTreeNode>,
    pub routes: RouteTable,
    pub services: ServiceCombinationState,
    /// Single advisory message for the user, set on the degraded path.
    pub notice: Option<String>,
    pub diagnostics: Vec<NavEvent>,
    pub loaded_at: i64,
}

impl MenuSnapshot {
    pub fn empty() -> Self {
        Self {
            generation: 0,
            state: LoadState::Idle,
            records: Vec::new(),
            tree: Vec::new(),
            routes: RouteTable::new(),
            services: ServiceCombinationState::minimal(),
            notice: None,
            diagnostics: Vec::new(),
            loaded_at: 0,
        }
    }

    pub fn breadcrumbs_for(&self, path: &str) -> Vec<String> {
        find_path(&self.tree, path)
    }

    pub fn visible_tree(&self) -> Vec<MenuTreeNode> {
        visible_tree(&self.tree, &self.services)
    }
}

impl Default for MenuSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}
