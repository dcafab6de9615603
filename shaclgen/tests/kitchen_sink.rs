//! End-to-end shapes for the kitchen-sink schema.
//!
//! Loads `fixtures/kitchen_sink.json`, compiles it with default options and
//! checks the node shapes, `sh:or` unions and default values against the
//! expected SHACL.

use shaclgen::graph::{ConstraintGraph, Literal, Term, Triple};
use shaclgen::vocab::{
    RDF_FIRST, RDF_TYPE, SH_CLASS, SH_CLOSED, SH_DATATYPE, SH_DEFAULT_VALUE, SH_IGNORED_PROPERTIES,
    SH_IRI, SH_LITERAL, SH_MAX_COUNT, SH_MAX_INCLUSIVE, SH_MIN_COUNT, SH_MIN_INCLUSIVE,
    SH_NODE_KIND, SH_NODE_SHAPE, SH_OR, SH_PATH, SH_PATTERN, SH_PROPERTY, XSD_ANY_URI, XSD_BOOLEAN,
    XSD_DATE, XSD_DATETIME, XSD_DECIMAL, XSD_DOUBLE, XSD_FLOAT, XSD_INTEGER, XSD_STRING,
};
use shaclgen::{compile, GraphIndex, SchemaModel};

const KS: &str = "https://w3id.org/linkml/tests/kitchen_sink/";
const BIZ: &str = "https://example.org/bizcodes/";

fn schema() -> SchemaModel {
    serde_json::from_str(include_str!("fixtures/kitchen_sink.json")).expect("fixture parses")
}

fn graph() -> ConstraintGraph {
    compile(&schema()).expect("kitchen sink compiles")
}

fn ks(local: &str) -> Term {
    Term::iri(format!("{KS}{local}"))
}

fn biz(code: &str) -> Term {
    Term::iri(format!("{BIZ}{code}"))
}

/// The property shape of `class` whose `sh:path` is `slot`.
fn property_shape<'g>(graph: &'g ConstraintGraph, class: &str, slot: &str) -> &'g Term {
    let path = ks(slot);
    let shape = ks(class);
    let found = graph
        .objects(&shape, SH_PROPERTY)
        .find(|p| graph.objects(p, SH_PATH).any(|o| *o == path));
    found.unwrap_or_else(|| panic!("{class} has no property shape for {slot}"))
}

fn or_alternatives<'g>(
    graph: &'g ConstraintGraph,
    class: &str,
    slot: &str,
) -> Vec<(&'g str, &'g Term)> {
    let shape = property_shape(graph, class, slot);
    let heads: Vec<&Term> = graph.objects(shape, SH_OR).collect();
    assert_eq!(heads.len(), 1, "{class}.{slot} should carry exactly one sh:or");
    GraphIndex::new(graph)
        .alternatives(heads[0])
        .expect("well-formed sh:or list")
}

#[test]
fn person_is_a_closed_node_shape() {
    let graph = graph();
    let person = ks("Person");
    assert!(graph.contains(&Triple::new(person.clone(), RDF_TYPE, Term::iri(SH_NODE_SHAPE))));
    assert!(graph.contains(&Triple::new(person.clone(), SH_CLOSED, Literal::boolean(true))));
    let ignored = graph
        .objects(&person, SH_IGNORED_PROPERTIES)
        .next()
        .expect("closed shapes ignore rdf:type");
    assert_eq!(
        GraphIndex::new(&graph).list_items(ignored).unwrap(),
        vec![&Term::iri(RDF_TYPE)]
    );
    assert_eq!(graph.objects(&person, SH_PROPERTY).count(), 3);
}

#[test]
fn organization_is_open() {
    let graph = graph();
    let org = ks("Organization");
    assert!(graph.contains(&Triple::new(org.clone(), SH_CLOSED, Literal::boolean(false))));
    assert_eq!(graph.objects(&org, SH_IGNORED_PROPERTIES).count(), 0);
}

#[test]
fn person_slot_constraints() {
    let graph = graph();
    let id = property_shape(&graph, "Person", "id");
    assert!(graph.contains(&Triple::new(id.clone(), SH_DATATYPE, Term::iri(XSD_STRING))));
    assert!(graph.contains(&Triple::new(id.clone(), SH_MIN_COUNT, Literal::integer(1))));
    assert!(graph.contains(&Triple::new(id.clone(), SH_MAX_COUNT, Literal::integer(1))));

    let age = property_shape(&graph, "Person", "age_in_years");
    assert!(graph.contains(&Triple::new(age.clone(), SH_DATATYPE, Term::iri(XSD_INTEGER))));
    assert!(graph.contains(&Triple::new(
        age.clone(),
        SH_MIN_INCLUSIVE,
        Literal::typed("0", XSD_INTEGER)
    )));
    assert!(graph.contains(&Triple::new(
        age.clone(),
        SH_MAX_INCLUSIVE,
        Literal::typed("999", XSD_INTEGER)
    )));
    assert_eq!(graph.objects(age, SH_MIN_COUNT).count(), 0);

    let phone = property_shape(&graph, "Person", "phone");
    assert!(graph.contains(&Triple::new(phone.clone(), SH_DATATYPE, Term::iri(XSD_STRING))));
    assert!(graph.contains(&Triple::new(
        phone.clone(),
        SH_PATTERN,
        Literal::untyped(r"^[\d\(\)\-]+$")
    )));
}

#[test]
fn any_of_simple_type() {
    let graph = graph();
    assert_eq!(
        or_alternatives(&graph, "AnyOfSimpleType", "attribute1"),
        vec![
            (SH_DATATYPE, &Term::iri(XSD_INTEGER)),
            (SH_DATATYPE, &Term::iri(XSD_STRING)),
        ]
    );
    let shape = property_shape(&graph, "AnyOfSimpleType", "attribute1");
    assert_eq!(graph.objects(shape, SH_DATATYPE).count(), 0);
}

#[test]
fn any_of_classes() {
    let graph = graph();
    assert_eq!(
        or_alternatives(&graph, "AnyOfClasses", "attribute2"),
        vec![(SH_CLASS, &ks("Person")), (SH_CLASS, &ks("Organization"))]
    );
}

#[test]
fn any_of_enums() {
    let graph = graph();
    let todo = Term::Literal(Literal::untyped("TODO"));
    assert_eq!(
        or_alternatives(&graph, "AnyOfEnums", "attribute3"),
        vec![
            (RDF_FIRST, &biz("001")),
            (RDF_FIRST, &biz("002")),
            (RDF_FIRST, &biz("003")),
            (RDF_FIRST, &biz("004")),
            (RDF_FIRST, &todo),
        ]
    );
}

#[test]
fn any_of_mix() {
    let graph = graph();
    assert_eq!(
        or_alternatives(&graph, "AnyOfMix", "attribute4"),
        vec![
            (SH_DATATYPE, &Term::iri(XSD_INTEGER)),
            (SH_CLASS, &ks("Person")),
            (RDF_FIRST, &biz("001")),
            (RDF_FIRST, &biz("002")),
            (RDF_FIRST, &biz("003")),
            (RDF_FIRST, &biz("004")),
        ]
    );
}

#[test]
fn ifabsent_defaults_carry_range_datatypes() {
    let graph = graph();
    let cases = [
        ("ifabsent_string", Literal::typed("This works", XSD_STRING)),
        ("ifabsent_boolean", Literal::typed("true", XSD_BOOLEAN)),
        ("ifabsent_int", Literal::typed("123", XSD_INTEGER)),
        ("ifabsent_decimal", Literal::typed("1.23", XSD_DECIMAL)),
        ("ifabsent_float", Literal::typed("1.23456", XSD_FLOAT)),
        ("ifabsent_double", Literal::typed("1.234567", XSD_DOUBLE)),
        ("ifabsent_date", Literal::typed("2024-02-08", XSD_DATE)),
        (
            "ifabsent_datetime",
            Literal::typed("2024-02-08T09:39:25Z", XSD_DATETIME),
        ),
        (
            "ifabsent_uri",
            Literal::typed(format!("{KS}home"), XSD_ANY_URI),
        ),
        ("ifabsent_untyped", Literal::untyped("heartfelt")),
    ];
    for (slot, expected) in cases {
        let shape = property_shape(&graph, "ClassWithDefaults", slot);
        let defaults: Vec<&Term> = graph.objects(shape, SH_DEFAULT_VALUE).collect();
        assert_eq!(defaults, vec![&Term::Literal(expected)], "default of {slot}");
    }
}

#[test]
fn uri_slot_shape_accepts_literals() {
    let graph = graph();
    let shape = property_shape(&graph, "ClassWithDefaults", "ifabsent_uri");
    assert!(graph.contains(&Triple::new(shape.clone(), SH_DATATYPE, Term::iri(XSD_ANY_URI))));
    let kinds: Vec<&Term> = graph.objects(shape, SH_NODE_KIND).collect();
    assert_eq!(kinds, vec![&Term::iri(SH_LITERAL)]);
    assert!(!kinds.contains(&&Term::iri(SH_IRI)));
}

#[test]
fn every_slot_has_one_property_shape() {
    let schema = schema();
    let graph = compile(&schema).unwrap();
    let shapes: usize = schema
        .classes
        .iter()
        .map(|c| graph.objects(&Term::iri(c.uri.as_str()), SH_PROPERTY).count())
        .sum();
    assert_eq!(shapes, schema.slot_count());
}

#[test]
fn recompiling_yields_an_equal_graph() {
    let schema = schema();
    assert_eq!(compile(&schema).unwrap(), compile(&schema).unwrap());
}
