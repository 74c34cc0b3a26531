pub mod registry;
pub mod resolver;
pub mod table;

pub use registry::{
    key_stem, MatchStrategy, ViewHandle, ViewLookup, ViewRegistry, BUILTIN_VIEWS,
    DEFAULT_FALLBACK_VIEW,
};
pub use resolver::{
    derive_component_path, register_routes, resolve_leaf, resolve_view, route_name, ResolvedView,
    RouteFold, ROOT_ROUTE_NAME,
};
pub use table::{
    RegisteredRoute, RouteMeta, RouteRegistration, RouteSink, RouteTable, DEFAULT_PARENT_ROUTE,
};
