use super::{MenuSource, MenuSourceError};
use crate::menu::{default_menu_records, demo_menu_records, MenuRecord};

/// Serves a fixed, in-process record batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticMenuSource {
    records: Vec<MenuRecord>,
}

impl StaticMenuSource {
    pub fn new(records: Vec<MenuRecord>) -> Self {
        Self { records }
    }

    pub fn demo() -> Self {
        Self::new(demo_menu_records())
    }

    pub fn default_menu() -> Self {
        Self::new(default_menu_records())
    }
}

impl MenuSource for StaticMenuSource {
    fn fetch_menu_records(&self) -> Result<Vec<MenuRecord>, MenuSourceError> {
        Ok(self.records.clone())
    }

    fn describe(&self) -> String {
        format!("local ({} records)", self.records.len())
    }
}
