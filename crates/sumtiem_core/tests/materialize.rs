mod common;

use common::{ex, Facts, LABEL};
use std::collections::HashSet;
use sumtiem_core::{materialize, Fact, Materializer, Namespaces, NoopObserver, PropertyMap};

#[test]
fn materialize_groups_facts_by_identity() {
    let facts = Facts::new()
        .event("birth", "Birth", Some("1900"))
        .event("death", "Death", Some("1950"))
        .extent("life", "Life", "birth", "death")
        .build();

    let graph = materialize(&PropertyMap::default(), &facts);

    assert_eq!(graph.len(), 3);
    let life = graph.get(&ex("life")).expect("extent resource");
    assert!(life.has_type("sum:Extent"));
    assert_eq!(life.first_data("label"), Some("Life"));
    assert_eq!(life.first_object("start"), Some(ex("birth").as_str()));
    assert_eq!(life.first_object("finish"), Some(ex("death").as_str()));

    let birth = graph.get(&ex("birth")).expect("event resource");
    assert!(birth.has_type("sum:Event"));
    assert_eq!(birth.first_data("date"), Some("1900"));
}

#[test]
fn materialize_ignores_unmapped_predicates() {
    let facts = Facts::new()
        .event("birth", "Birth", None)
        .push(Fact::literal(ex("birth"), "http://xmlns.com/foaf/0.1/name", "x"))
        .push(Fact::node(ex("other"), "http://xmlns.com/foaf/0.1/knows", ex("third")))
        .build();

    let graph = materialize(&PropertyMap::default(), &facts);

    assert_eq!(graph.len(), 1);
    assert!(graph.get(&ex("other")).is_none());
    assert!(graph.get(&ex("third")).is_none());
    let birth = graph.get(&ex("birth")).expect("event resource");
    assert_eq!(birth.data_props.len(), 1);
}

#[test]
fn forward_references_resolve_to_one_resource() {
    // The extent mentions its events before any fact about them.
    let facts = Facts::new()
        .extent("life", "Life", "birth", "death")
        .event("birth", "Birth", Some("1900"))
        .event("death", "Death", Some("1950"))
        .build();

    let graph = materialize(&PropertyMap::default(), &facts);

    let ids: Vec<&str> = graph.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec![ex("life"), ex("birth"), ex("death")]);
    assert!(graph
        .get(&ex("birth"))
        .is_some_and(|r| r.has_type("sum:Event")));
}

#[test]
fn unknown_type_iris_are_kept_unabbreviated() {
    let facts = vec![Fact::node(
        ex("x"),
        common::RDF_TYPE,
        "urn:example:Thing",
    )];

    let graph = materialize(&PropertyMap::default(), &facts);

    let x = graph.get(&ex("x")).expect("resource");
    assert!(x.has_type("urn:example:Thing"));
}

#[test]
fn literal_and_object_values_are_kept_apart() {
    let facts = vec![
        Fact::literal(ex("a"), LABEL, "A"),
        Fact::node(ex("a"), LABEL, ex("b")),
    ];

    let graph = materialize(&PropertyMap::default(), &facts);

    let a = graph.get(&ex("a")).expect("resource");
    assert_eq!(a.data_count("label"), 1);
    assert_eq!(a.object_count("label"), 1);
    assert_eq!(graph.len(), 2);
}

#[test]
fn materialize_is_idempotent() {
    let facts = Facts::new()
        .event("a", "A", Some("1900"))
        .event("b", "B", Some("XXXX-01-01"))
        .extent("x", "X", "a", "b")
        .above("a", "b")
        .build();
    let properties = PropertyMap::default();

    let first = materialize(&properties, &facts);
    let second = materialize(&properties, &facts);

    assert_eq!(first, second);
    let resources = first.into_resources();
    let ids: HashSet<&str> = resources.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids.len(), resources.len());
}

#[test]
fn custom_property_map_and_namespaces_are_honoured() {
    let namespaces: Namespaces = [
        ("ex".to_string(), "urn:ex:".to_string()),
        ("sum".to_string(), "urn:sum:".to_string()),
    ]
    .into_iter()
    .collect();
    let properties: PropertyMap = [
        ("type".to_string(), "ex:kind".to_string()),
        ("label".to_string(), "ex:name".to_string()),
    ]
    .into_iter()
    .collect();
    let facts = vec![
        Fact::node("urn:ex:a", "urn:ex:kind", "urn:sum:Event"),
        Fact::literal("urn:ex:a", "urn:ex:name", "Alpha"),
        Fact::literal("urn:ex:a", LABEL, "ignored"),
    ];

    let graph = Materializer::new(&properties, &namespaces).materialize(&facts, &NoopObserver);

    let a = graph.get("urn:ex:a").expect("resource");
    assert!(a.has_type("sum:Event"));
    assert_eq!(a.data("label").collect::<Vec<_>>(), vec!["Alpha"]);
}
