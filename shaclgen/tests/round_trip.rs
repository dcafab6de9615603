//! Serialized output parses back as RDF.
//!
//! The Turtle and N-Triples renderings of the kitchen-sink shapes are read
//! back with sophia; both must yield as many triples as the compiled graph.

use serde_json::Value;
use shaclgen::serializer::{jsonld, ntriples, turtle};
use shaclgen::{compile, ConstraintGraph, SchemaModel};
use sophia_api::graph::Graph;
use sophia_api::source::TripleSource;
use sophia_inmem::graph::LightGraph;

fn graph() -> ConstraintGraph {
    let schema: SchemaModel =
        serde_json::from_str(include_str!("fixtures/kitchen_sink.json")).expect("fixture parses");
    compile(&schema).expect("kitchen sink compiles")
}

#[test]
fn turtle_parses_with_matching_triple_count() {
    let graph = graph();
    let ttl = turtle::to_turtle(&graph);
    let parsed: LightGraph = sophia_turtle::parser::turtle::parse_str(&ttl)
        .collect_triples()
        .unwrap_or_else(|e| panic!("Turtle output does not parse: {e}\n{ttl}"));
    assert_eq!(parsed.triples().count(), graph.len());
}

#[test]
fn ntriples_parses_with_matching_triple_count() {
    let graph = graph();
    let nt = ntriples::to_ntriples(&graph);
    assert_eq!(nt.lines().count(), graph.len());
    let parsed: LightGraph = sophia_turtle::parser::nt::parse_str(&nt)
        .collect_triples()
        .unwrap_or_else(|e| panic!("N-Triples output does not parse: {e}"));
    assert_eq!(parsed.triples().count(), graph.len());
}

#[test]
fn json_ld_has_one_node_per_subject() {
    let graph = graph();
    let doc = jsonld::to_json_ld(&graph);
    let subjects: std::collections::BTreeSet<_> = graph.iter().map(|t| &t.subject).collect();
    let nodes = doc["@graph"].as_array().map(Vec::len);
    assert_eq!(nodes, Some(subjects.len()));
    assert!(matches!(doc["@context"], Value::Object(_)));
}
