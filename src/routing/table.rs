use super::ViewHandle;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::collections::HashMap;

pub const DEFAULT_PARENT_ROUTE: &str = "Layout";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub title: String,
    pub icon: Option<String>,
    pub source_menu_id: u64,
    pub requires_authentication: bool,
}

/// One routable leaf: a derived name, its path and the view it renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRegistration {
    pub name: String,
    pub path: String,
    pub view: ViewHandle,
    pub meta: RouteMeta,
    /// Set when no view matched and the fallback view was substituted.
    pub degraded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredRoute {
    pub parent: String,
    #[serde(flatten)]
    pub registration: RouteRegistration,
}

/// Receiver of route registrations.
pub trait RouteSink {
    fn add_route(&mut self, parent_route_name: &str, registration: RouteRegistration);
}

/// Routing table for one load. Names are unique; re-adding a name replaces the entry in
/// place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RouteTable {
    routes: Vec<RegisteredRoute>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredRoute> {
        self.index.get(name).map(|i| &self.routes[*i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn by_path(&self, path: &str) -> Option<&RegisteredRoute> {
        self.routes
            .iter()
            .find(|route| route.registration.path == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredRoute> {
        self.routes.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.registration.name.as_str())
    }

    pub fn degraded_count(&self) -> usize {
        self.routes
            .iter()
            .filter(|r| r.registration.degraded)
            .count()
    }

    /// Hex SHA-256 over every route's name, path and view key, in table order.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for route in &self.routes {
            let registration = &route.registration;
            for part in [
                route.parent.as_str(),
                registration.name.as_str(),
                registration.path.as_str(),
                registration.view.key.as_str(),
            ] {
                hasher.update(part.as_bytes());
                hasher.update([0]);
            }
            hasher.update([0xff]);
        }
        hasher
            .finalize()
            .iter()
            .map(|byte| format!("{byte:02x}"))
            .collect()
    }
}

impl RouteSink for RouteTable {
    fn add_route(&mut self, parent_route_name: &str, registration: RouteRegistration) {
        let route = RegisteredRoute {
            parent: parent_route_name.to_string(),
            registration,
        };
        match self.index.get(&route.registration.name) {
            Some(&i) => self.routes[i] = route,
            None => {
                self.index
                    .insert(route.registration.name.clone(), self.routes.len());
                self.routes.push(route);
            }
        }
    }
}
