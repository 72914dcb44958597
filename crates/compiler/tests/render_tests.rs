//! Rendering behavior across both dialects, driven through an in-memory
//! store and the minimal var-equality matcher.

mod common;

use serde_json::json;

use common::{host, service, set, zone, InMemoryStore};
use setforge_compiler::resolver;
use setforge_compiler::{ConfigRenderer, VarEqualsMatcher};
use setforge_core::emit::Dialect;
use setforge_core::types::{OBJECT_TYPE_OBJECT, OBJECT_TYPE_TEMPLATE};

/// Template 1 "linux-base" owns ping + disk; host web1 (zone dc1) carries
/// set 2 importing the template; web2 lives in zone dc2.
fn fixture() -> InMemoryStore {
    InMemoryStore {
        sets: vec![set(
            Some(1),
            "linux-base",
            OBJECT_TYPE_TEMPLATE,
            None,
            None,
            json!({}),
        )],
        services: vec![
            service(10, 1, "ping", json!({"env": "dev", "tier": "x"})),
            service(11, 1, "disk", json!({})),
        ],
        imports: vec![(2, 1)],
        hosts: vec![
            host(3, "web1", Some(100), json!({"os": "Linux"})),
            host(4, "web2", Some(101), json!({"os": "Linux"})),
            host(5, "win1", Some(100), json!({"os": "Windows"})),
        ],
        zones: vec![zone(100, "dc1"), zone(101, "dc2")],
        ..InMemoryStore::default()
    }
}

fn renderer<'a>(
    store: &'a InMemoryStore,
    matcher: &'a VarEqualsMatcher,
) -> ConfigRenderer<'a> {
    ConfigRenderer::new(store, matcher)
}

#[tokio::test]
async fn template_without_filter_renders_nothing() {
    let store = fixture();
    let matcher = VarEqualsMatcher;
    let template = store.sets[0].clone();

    for dialect in [Dialect::Modern, Dialect::Legacy] {
        let mut config = setforge_compiler::ConfigOutput::new(dialect);
        renderer(&store, &matcher)
            .render_to_config(&template, &mut config)
            .await
            .unwrap();
        assert!(config.is_empty());
    }
}

#[tokio::test]
async fn unsaved_set_resolves_to_no_members() {
    let store = fixture();
    let unsaved = set(None, "fresh", OBJECT_TYPE_TEMPLATE, None, None, json!({}));

    let members = resolver::resolve_members(&store, &unsaved).await.unwrap();
    assert!(members.is_empty());
}

#[tokio::test]
async fn host_bound_set_without_imports_renders_nothing() {
    let mut store = fixture();
    store.imports.clear();
    let matcher = VarEqualsMatcher;
    let bound = set(Some(2), "linux-base", OBJECT_TYPE_OBJECT, Some(3), None, json!({}));
    store.sets.push(bound.clone());

    let mut config = setforge_compiler::ConfigOutput::new(Dialect::Modern);
    renderer(&store, &matcher)
        .render_to_config(&bound, &mut config)
        .await
        .unwrap();
    assert!(config.is_empty());
}

#[tokio::test]
async fn host_bound_set_consults_only_its_first_import() {
    let mut store = fixture();
    // A second imported template whose member must not appear.
    store.sets.push(set(
        Some(6),
        "extras",
        OBJECT_TYPE_TEMPLATE,
        None,
        None,
        json!({}),
    ));
    store.services.push(service(20, 6, "extra", json!({})));
    store.imports = vec![(2, 1), (2, 6)];

    let bound = set(Some(2), "linux-base", OBJECT_TYPE_OBJECT, Some(3), None, json!({}));
    let members = resolver::resolve_members(&store, &bound).await.unwrap();

    assert_eq!(
        members.keys().cloned().collect::<Vec<_>>(),
        vec!["disk", "ping"]
    );
}

#[tokio::test]
async fn duplicate_member_names_keep_the_later_row() {
    let mut store = fixture();
    store
        .services
        .push(service(12, 1, "ping", json!({"marker": "later"})));

    let template = store.sets[0].clone();
    let members = resolver::resolve_members(&store, &template).await.unwrap();

    assert_eq!(members.len(), 2);
    let ping = &members["ping"];
    assert_eq!(ping.id, Some(12));
    assert_eq!(ping.vars().get("marker"), Some(&json!("later")));
    // Materialised copies are detached, template-typed.
    assert_eq!(ping.object_type, OBJECT_TYPE_TEMPLATE);
    assert_eq!(ping.service_set_id, None);
}

#[tokio::test]
async fn filtered_set_emits_apply_objects_in_the_host_zone() {
    let mut store = fixture();
    let bound = set(
        Some(2),
        "linux-base",
        OBJECT_TYPE_OBJECT,
        Some(3),
        Some("host.vars.os=Linux"),
        json!({"env": "prod"}),
    );
    store.sets.push(bound.clone());
    let matcher = VarEqualsMatcher;

    let mut config = setforge_compiler::ConfigOutput::new(Dialect::Modern);
    renderer(&store, &matcher)
        .render_to_config(&bound, &mut config)
        .await
        .unwrap();

    let file = config.file("zones.d/dc1/servicesets").expect("zone file");
    let content = file.content();
    assert_eq!(
        content.matches("/** Service Set 'linux-base' **/").count(),
        1
    );
    assert_eq!(content.matches("apply Service").count(), 2);
    assert_eq!(content.matches("assign where host.vars.os=Linux").count(), 2);
    // Set vars overlay member vars; untouched member keys survive.
    assert!(content.contains("vars.env = \"prod\""));
    assert!(content.contains("vars.tier = \"x\""));
}

#[tokio::test]
async fn host_bound_set_emits_static_objects() {
    let mut store = fixture();
    let bound = set(
        Some(2),
        "linux-base",
        OBJECT_TYPE_OBJECT,
        Some(3),
        None,
        json!({"env": "prod"}),
    );
    store.sets.push(bound.clone());
    let matcher = VarEqualsMatcher;

    let mut config = setforge_compiler::ConfigOutput::new(Dialect::Modern);
    renderer(&store, &matcher)
        .render_to_config(&bound, &mut config)
        .await
        .unwrap();

    let content = config
        .file("zones.d/dc1/servicesets")
        .expect("zone file")
        .content();
    assert_eq!(content.matches("object Service").count(), 2);
    assert_eq!(content.matches("host_name = \"web1\"").count(), 2);
    assert!(!content.contains("assign where"));
    assert!(content.contains("vars.env = \"prod\""));

    // The canonical template member is never mutated by the overlay.
    let canonical = store.services.iter().find(|s| s.id == Some(10)).unwrap();
    assert_eq!(canonical.vars().get("env"), Some(&json!("dev")));
}

#[tokio::test]
async fn legacy_filtered_set_partitions_hosts_by_zone() {
    let mut store = fixture();
    let bound = set(
        Some(2),
        "linux-base",
        OBJECT_TYPE_OBJECT,
        Some(3),
        Some("host.vars.os=Linux"),
        json!({"env": "prod"}),
    );
    store.sets.push(bound.clone());
    let matcher = VarEqualsMatcher;

    let mut config = setforge_compiler::ConfigOutput::new(Dialect::Legacy);
    renderer(&store, &matcher)
        .render_to_config(&bound, &mut config)
        .await
        .unwrap();

    assert_eq!(config.files().len(), 2);

    let dc1 = config
        .file("director/dc1/servicesets.cfg")
        .expect("dc1 file")
        .content();
    let dc2 = config
        .file("director/dc2/servicesets.cfg")
        .expect("dc2 file")
        .content();

    for (content, own, other) in [(dc1, "web1", "web2"), (dc2, "web2", "web1")] {
        assert_eq!(
            content
                .matches("## applied Service Set 'linux-base'")
                .count(),
            1
        );
        assert_eq!(content.matches("define service").count(), 2);
        assert!(content.contains(own));
        assert!(!content.contains(other));
        assert!(!content.contains("win1"));
    }
}

#[tokio::test]
async fn legacy_host_bound_set_binds_its_single_host() {
    let mut store = fixture();
    let bound = set(Some(2), "linux-base", OBJECT_TYPE_OBJECT, Some(3), None, json!({}));
    store.sets.push(bound.clone());
    let matcher = VarEqualsMatcher;

    let mut config = setforge_compiler::ConfigOutput::new(Dialect::Legacy);
    renderer(&store, &matcher)
        .render_to_config(&bound, &mut config)
        .await
        .unwrap();

    let content = config
        .file("director/dc1/servicesets.cfg")
        .expect("dc1 file")
        .content();
    assert_eq!(
        content
            .matches("## Service Set 'linux-base' on this host")
            .count(),
        1
    );
    assert!(content.contains("web1"));
}

#[tokio::test]
async fn preview_renders_dependent_instances_into_the_same_output() {
    let mut store = fixture();
    store.sets.push(set(
        Some(2),
        "linux-base",
        OBJECT_TYPE_OBJECT,
        Some(3),
        None,
        json!({}),
    ));
    let matcher = VarEqualsMatcher;
    let template = store.sets[0].clone();

    let config = renderer(&store, &matcher)
        .render_single(&template, Dialect::Modern)
        .await
        .unwrap();

    // The template itself renders nothing, but its host-bound usage does.
    let content = config
        .file("zones.d/dc1/servicesets")
        .expect("dependent output")
        .content();
    assert_eq!(content.matches("object Service").count(), 2);
}

#[tokio::test]
async fn preview_failure_degrades_to_an_artifact_file() {
    let mut store = fixture();
    // Template renders on its own thanks to the filter.
    let template = set(
        Some(1),
        "linux-base",
        OBJECT_TYPE_TEMPLATE,
        None,
        Some("host.vars.os=Linux"),
        json!({}),
    );
    store.sets[0] = template.clone();
    // Dependent bound to a host that does not exist.
    store.sets.push(set(
        Some(2),
        "linux-base",
        OBJECT_TYPE_OBJECT,
        Some(99),
        None,
        json!({}),
    ));
    let matcher = VarEqualsMatcher;

    let config = renderer(&store, &matcher)
        .render_single(&template, Dialect::Modern)
        .await
        .expect("primary render still succeeds");

    // Primary output is intact, in the default global zone.
    assert!(config
        .file("zones.d/director-global/servicesets")
        .is_some());

    let artifact = config.file("failed-to-render").expect("artifact file");
    assert!(artifact
        .content()
        .starts_with("/** Failed to render this object **/\n"));
    assert!(artifact.content().contains("host 99 not found"));
}
