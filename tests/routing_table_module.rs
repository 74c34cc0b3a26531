use menunav::routing::{
    RouteMeta, RouteRegistration, RouteSink, RouteTable, ViewRegistry, DEFAULT_PARENT_ROUTE,
};

fn registration(name: &str, path: &str, view: &str) -> RouteRegistration {
    let registry = ViewRegistry::builtin();
    RouteRegistration {
        name: name.to_string(),
        path: path.to_string(),
        view: registry.handle(view).unwrap_or_else(|| registry.fallback()),
        meta: RouteMeta {
            title: name.to_string(),
            icon: None,
            source_menu_id: 1,
            requires_authentication: true,
        },
        degraded: false,
    }
}

#[test]
fn re_adding_a_name_replaces_in_place() {
    let mut table = RouteTable::new();
    table.add_route(
        DEFAULT_PARENT_ROUTE,
        registration("a", "/a", "views/template/system/Users.vue"),
    );
    table.add_route(
        DEFAULT_PARENT_ROUTE,
        registration("b", "/b", "views/template/system/Roles.vue"),
    );
    table.add_route(
        DEFAULT_PARENT_ROUTE,
        registration("a", "/a2", "views/template/system/Permissions.vue"),
    );

    assert_eq!(table.len(), 2);
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(table.get("a").expect("a").registration.path, "/a2");
    assert!(table.by_path("/a").is_none());
}

#[test]
fn fingerprint_tracks_route_content() {
    let mut first = RouteTable::new();
    first.add_route(
        DEFAULT_PARENT_ROUTE,
        registration("a", "/a", "views/template/system/Users.vue"),
    );
    let mut second = first.clone();
    assert_eq!(first.fingerprint(), second.fingerprint());

    second.add_route(
        DEFAULT_PARENT_ROUTE,
        registration("a", "/a", "views/template/system/Roles.vue"),
    );
    assert_ne!(first.fingerprint(), second.fingerprint());
    assert_eq!(first.fingerprint().len(), 64);
}

#[test]
fn route_table_serializes_with_camel_case_meta() {
    let mut table = RouteTable::new();
    table.add_route(
        DEFAULT_PARENT_ROUTE,
        registration("system-users", "/system/users", "views/template/system/Users.vue"),
    );
    let json = serde_json::to_value(&table).expect("serialize");
    let route = &json["routes"][0];
    assert_eq!(route["parent"], "Layout");
    assert_eq!(route["name"], "system-users");
    assert_eq!(route["meta"]["requiresAuthentication"], true);
}
