use super::{
    MatchStrategy, RouteMeta, RouteRegistration, RouteSink, RouteTable, ViewHandle, ViewLookup,
    ViewRegistry,
};
use crate::menu::{MenuRecord, MenuTreeNode};
use crate::shared::logging::NavEvent;
use std::collections::HashMap;

const COMMON_COMPONENT: &str = "Common";

/// Infers a view candidate from a route path: `/system/users` -> `system/Users`.
pub fn derive_component_path(path: &str) -> String {
    let parts: Vec<&str> = path.split('/').filter(|p| !p.is_empty()).collect();
    let Some((last, head)) = parts.split_last() else {
        return COMMON_COMPONENT.to_string();
    };
    let mut chars = last.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return COMMON_COMPONENT.to_string(),
    };
    if head.is_empty() {
        capitalized
    } else {
        format!("{}/{}", head.join("/"), capitalized)
    }
}

/// Name of the root route. Escaping never emits a lone `_`.
pub const ROOT_ROUTE_NAME: &str = "_";

/// Route name for a path. `/` becomes `-` and the leading delimiter is dropped; literal
/// `-` and `_` are escaped (`_-`, `__`) so distinct paths never share a name. A missing
/// leading `/` is normalized first, so `system` and `/system` name the same route, and
/// `""` and `/` both name [`ROOT_ROUTE_NAME`].
pub fn route_name(path: &str) -> String {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    if trimmed.is_empty() {
        return ROOT_ROUTE_NAME.to_string();
    }
    let mut name = String::with_capacity(trimmed.len());
    for ch in trimmed.chars() {
        match ch {
            '/' => name.push('-'),
            '-' => name.push_str("_-"),
            '_' => name.push_str("__"),
            other => name.push(other),
        }
    }
    name
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedView {
    pub handle: ViewHandle,
    /// The registry query that was issued.
    pub candidate: String,
    /// `None` when the fallback view was substituted.
    pub matched_by: Option<MatchStrategy>,
}

impl ResolvedView {
    /// True whenever the fallback view ends up rendering, including a lookup that landed on
    /// the fallback key itself.
    pub fn is_degraded(&self) -> bool {
        self.matched_by.is_none() || self.handle.is_fallback()
    }
}

/// Explicit component references are looked up by exact then suffix match; otherwise a
/// candidate derived from the path is searched fuzzily. Never fails: no match yields the
/// registry's fallback view.
pub fn resolve_view(record: &MenuRecord, registry: &ViewRegistry) -> ResolvedView {
    let (candidate, strategies): (String, &[MatchStrategy]) = match record.component_ref() {
        Some(reference) => (
            reference.to_string(),
            &[MatchStrategy::Exact, MatchStrategy::Suffix][..],
        ),
        None => (
            derive_component_path(&record.path),
            &[MatchStrategy::Fuzzy][..],
        ),
    };
    for strategy in strategies {
        if let Some(handle) = strategy.lookup(registry, &candidate) {
            return ResolvedView {
                handle,
                candidate,
                matched_by: Some(*strategy),
            };
        }
    }
    ResolvedView {
        handle: registry.fallback(),
        candidate,
        matched_by: None,
    }
}

pub fn resolve_leaf(node: &MenuTreeNode, registry: &ViewRegistry) -> RouteRegistration {
    registration_for(&node.record, resolve_view(&node.record, registry))
}

fn registration_for(record: &MenuRecord, resolved: ResolvedView) -> RouteRegistration {
    RouteRegistration {
        name: route_name(&record.path),
        path: record.path.clone(),
        degraded: resolved.is_degraded(),
        view: resolved.handle,
        meta: RouteMeta {
            title: record.title.clone(),
            icon: record.icon.clone(),
            source_menu_id: record.id,
            requires_authentication: true,
        },
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteFold {
    pub table: RouteTable,
    pub events: Vec<NavEvent>,
}

/// Builds a fresh [`RouteTable`] with one registration per enabled leaf.
///
/// Leaves under a disabled ancestor are skipped. When two leaves share a route name the
/// first one in depth-first order is kept.
pub fn register_routes(
    tree: &[MenuTreeNode],
    registry: &ViewRegistry,
    parent_route: &str,
) -> RouteFold {
    let mut fold = RouteFold::default();
    let mut owners: HashMap<String, u64> = HashMap::new();
    let mut stack: Vec<(&MenuTreeNode, bool)> = tree.iter().rev().map(|n| (n, true)).collect();

    while let Some((node, ancestors_enabled)) = stack.pop() {
        let enabled = ancestors_enabled && node.record.status.is_enabled();
        if !node.is_leaf() {
            stack.extend(node.children.iter().rev().map(|child| (child, enabled)));
            continue;
        }
        if !enabled {
            fold.events.push(NavEvent::info(
                "route.skipped_disabled",
                format!(
                    "menu `{}` ({}) is disabled; no route registered",
                    node.title(),
                    node.path()
                ),
            ));
            continue;
        }

        let resolved = resolve_view(&node.record, registry);
        let candidate = resolved.candidate.clone();
        let registration = registration_for(&node.record, resolved);
        if let Some(owner) = owners.get(&registration.name) {
            fold.events.push(NavEvent::warn(
                "route.duplicate_path",
                format!(
                    "menu id {} reuses route `{}` already owned by menu id {owner}; skipped",
                    node.id(),
                    registration.path
                ),
            ));
            continue;
        }
        if registration.degraded {
            fold.events.push(NavEvent::warn(
                "route.fallback_view",
                format!(
                    "no dedicated view for `{candidate}` at `{}`; using `{}`",
                    registration.path,
                    registration.view.key
                ),
            ));
        }
        owners.insert(registration.name.clone(), node.id());
        fold.table.add_route(parent_route, registration);
    }
    fold
}
