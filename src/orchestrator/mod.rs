use crate::menu::{build_menu_tree_with_report, default_menu_records, MenuRecord, MenuTreeNode};
use crate::navigation::NavigationState;
use crate::routing::{register_routes, RouteTable, ViewRegistry, DEFAULT_PARENT_ROUTE};
use crate::services::{FeatureGroup, ServiceCombinationDetector};
use crate::shared::logging::{EventLog, NavEvent};
use crate::source::{MenuSource, MenuSourceError};
use std::collections::BTreeSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

pub mod snapshot;
pub mod state;

pub use snapshot::MenuSnapshot;
pub use state::LoadState;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Source(#[from] MenuSourceError),
    #[error("menu source {origin} returned no records")]
    NoRecords { origin: String },
    #[error("menu from {origin} produced no routable entries")]
    NoRoutes { origin: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub generation: u64,
    pub state: LoadState,
    /// False when a newer load had already published before this one finished.
    pub published: bool,
    pub error: Option<String>,
}

#[derive(Debug)]
struct LoadControl {
    settled: LoadState,
    issued: u64,
    published: u64,
    in_flight: usize,
}

/// Owns the menu tree, the route table and the service combination for one session.
///
/// Every (re)load runs the full pipeline (fetch, tree, routes, service detection) into a
/// fresh [`MenuSnapshot`] and publishes it in one step; readers only ever see complete
/// snapshots. Loads may overlap: each takes a ticket and only a result newer than the
/// published one replaces it. A failed load publishes the fixed default menu in the
/// [`LoadState::Degraded`] state instead of an error.
pub struct MenuOrchestrator {
    source: Arc<dyn MenuSource>,
    detector: ServiceCombinationDetector,
    registry: RwLock<ViewRegistry>,
    parent_route: String,
    log: EventLog,
    control: Mutex<LoadControl>,
    published: RwLock<Arc<MenuSnapshot>>,
    navigation: Mutex<NavigationState>,
}

impl std::fmt::Debug for MenuOrchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuOrchestrator")
            .field("source", &self.source.describe())
            .field("detector", &self.detector)
            .field("parent_route", &self.parent_route)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MenuOrchestrator {
    pub fn new(
        source: Arc<dyn MenuSource>,
        detector: ServiceCombinationDetector,
        registry: ViewRegistry,
    ) -> Self {
        Self {
            source,
            detector,
            registry: RwLock::new(registry),
            parent_route: DEFAULT_PARENT_ROUTE.to_string(),
            log: EventLog::disabled(),
            control: Mutex::new(LoadControl {
                settled: LoadState::Idle,
                issued: 0,
                published: 0,
                in_flight: 0,
            }),
            published: RwLock::new(Arc::new(MenuSnapshot::empty())),
            navigation: Mutex::new(NavigationState::default()),
        }
    }

    pub fn with_parent_route(mut self, parent_route: impl Into<String>) -> Self {
        self.parent_route = parent_route.into();
        self
    }

    pub fn with_event_log(mut self, log: EventLog) -> Self {
        self.log = log;
        self
    }

    pub fn load_menu(&self) -> LoadOutcome {
        self.run_load()
    }

    /// Re-runs the whole pipeline; the previous route table is superseded, never merged.
    pub fn refresh(&self) -> LoadOutcome {
        self.run_load()
    }

    /// Adds a view module key. Takes effect on the next load.
    pub fn register_view(&self, key: impl Into<String>) -> bool {
        self.registry
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(key)
    }

    pub fn state(&self) -> LoadState {
        let control = lock(&self.control);
        if control.in_flight > 0 {
            LoadState::Loading
        } else {
            control.settled
        }
    }

    pub fn loading(&self) -> bool {
        lock(&self.control).in_flight > 0
    }

    /// The latest published snapshot.
    pub fn snapshot(&self) -> Arc<MenuSnapshot> {
        Arc::clone(&*self.published.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn menu_tree(&self) -> Vec<MenuTreeNode> {
        self.snapshot().tree.clone()
    }

    pub fn visible_menu_tree(&self) -> Vec<MenuTreeNode> {
        self.snapshot().visible_tree()
    }

    pub fn routes(&self) -> RouteTable {
        self.snapshot().routes.clone()
    }

    pub fn notice(&self) -> Option<String> {
        self.snapshot().notice.clone()
    }

    pub fn service_combination_id(&self) -> &'static str {
        self.snapshot().services.combination_id()
    }

    pub fn available_feature_groups(&self) -> BTreeSet<FeatureGroup> {
        self.snapshot().services.available.clone()
    }

    pub fn active_path(&self) -> String {
        lock(&self.navigation).active_path.clone()
    }

    pub fn breadcrumbs(&self) -> Vec<String> {
        lock(&self.navigation).breadcrumbs.clone()
    }

    pub fn set_active_menu(&self, path: impl Into<String>) {
        lock(&self.navigation).set_active(path);
    }

    /// Recomputes the trail for `path` against the current tree; empty before any load.
    pub fn update_breadcrumbs(&self, path: &str) -> Vec<String> {
        let mut navigation = lock(&self.navigation);
        navigation.breadcrumbs = self.snapshot().breadcrumbs_for(path);
        navigation.breadcrumbs.clone()
    }

    fn run_load(&self) -> LoadOutcome {
        let ticket = self.begin_load();
        let (snapshot, error) = match self.load_from_source(ticket) {
            Ok(snapshot) => (snapshot, None),
            Err(err) => (self.degraded_snapshot(ticket, &err), Some(err.to_string())),
        };
        self.log.record_all(&snapshot.diagnostics);
        let state = snapshot.state;
        let published = self.finish_load(ticket, snapshot);
        LoadOutcome {
            generation: ticket,
            state,
            published,
            error,
        }
    }

    fn begin_load(&self) -> u64 {
        let mut control = lock(&self.control);
        control.issued += 1;
        control.in_flight += 1;
        control.issued
    }

    fn finish_load(&self, ticket: u64, snapshot: MenuSnapshot) -> bool {
        let mut control = lock(&self.control);
        control.in_flight = control.in_flight.saturating_sub(1);
        if ticket <= control.published {
            self.log.record(&NavEvent::info(
                "orchestrator.stale_result",
                format!(
                    "load {ticket} finished after load {} was published; discarded",
                    control.published
                ),
            ));
            return false;
        }

        control.published = ticket;
        control.settled = snapshot.state;
        let snapshot = Arc::new(snapshot);
        *self
            .published
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::clone(&snapshot);

        let mut navigation = lock(&self.navigation);
        if navigation.active_path.is_empty() {
            navigation.breadcrumbs.clear();
        } else {
            let active = navigation.active_path.clone();
            navigation.update_breadcrumbs(&snapshot.tree, &active);
        }
        true
    }

    fn load_from_source(&self, ticket: u64) -> Result<MenuSnapshot, LoadError> {
        let origin = self.source.describe();
        let records = self.source.fetch_menu_records()?;
        if records.is_empty() {
            return Err(LoadError::NoRecords { origin });
        }
        let snapshot = self.build_snapshot(ticket, LoadState::Ready, records, Vec::new());
        if snapshot.routes.is_empty() {
            return Err(LoadError::NoRoutes { origin });
        }
        Ok(snapshot)
    }

    fn degraded_snapshot(&self, ticket: u64, err: &LoadError) -> MenuSnapshot {
        let events = vec![NavEvent::error(
            "orchestrator.load_failed",
            format!("{err}; falling back to the default menu"),
        )];
        let mut snapshot =
            self.build_snapshot(ticket, LoadState::Degraded, default_menu_records(), events);
        snapshot.notice = Some(format!(
            "Menu could not be loaded ({err}); showing the default menu."
        ));
        snapshot
    }

    fn build_snapshot(
        &self,
        generation: u64,
        state: LoadState,
        records: Vec<MenuRecord>,
        mut diagnostics: Vec<NavEvent>,
    ) -> MenuSnapshot {
        let build = build_menu_tree_with_report(&records);
        diagnostics.extend(build.issues.iter().map(|issue| issue.to_event()));

        let fold = {
            let registry = self.registry.read().unwrap_or_else(PoisonError::into_inner);
            register_routes(&build.roots, &registry, &self.parent_route)
        };
        diagnostics.extend(fold.events);

        let detection = self.detector.detect_with_report();
        diagnostics.extend(detection.events);

        diagnostics.push(NavEvent::info(
            "orchestrator.loaded",
            format!(
                "load {generation} {state}: {} records, {} routes ({} on fallback view) from {}",
                records.len(),
                fold.table.len(),
                fold.table.degraded_count(),
                if state == LoadState::Degraded {
                    "default menu".to_string()
                } else {
                    self.source.describe()
                }
            ),
        ));

        MenuSnapshot {
            generation,
            state,
            records,
            tree: build.roots,
            routes: fold.table,
            services: detection.state,
            notice: None,
            diagnostics,
            loaded_at: chrono::Utc::now().timestamp(),
        }
    }
}
