//! JSON-LD 1.1 serializer for compiled shapes graphs.
//!
//! Produces a flattened document: an `@context` with the `sh`, `rdf` and
//! `xsd` prefixes, and an `@graph` array holding one node object per
//! subject. Lists stay as explicit `rdf:first`/`rdf:rest` nodes.

use serde_json::{json, Map, Value};

use crate::graph::{ConstraintGraph, Term, Triple};
use crate::serializer::{compact_iri, PREFIXES};
use crate::vocab::RDF_TYPE;

/// Serializes `graph` to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
///
/// # Errors
///
/// This function is infallible; it always returns a valid JSON-LD `Value`.
#[must_use]
pub fn to_json_ld(graph: &ConstraintGraph) -> Value {
    json!({
        "@context": build_context(),
        "@graph": build_graph(graph)
    })
}

fn build_context() -> Value {
    let mut ctx = Map::new();
    for (prefix, ns) in PREFIXES {
        ctx.insert((*prefix).to_owned(), json!(ns));
    }
    Value::Object(ctx)
}

fn build_graph(graph: &ConstraintGraph) -> Value {
    let triples: Vec<&Triple> = graph.iter().collect();
    let nodes: Vec<Value> = triples
        .chunk_by(|a, b| a.subject == b.subject)
        .map(node_to_json)
        .collect();
    Value::Array(nodes)
}

fn node_to_json(block: &[&Triple]) -> Value {
    let mut node = Map::new();
    if let Some(first) = block.first() {
        node.insert("@id".to_owned(), json!(id(&first.subject)));
    }
    for t in block {
        let (key, value) = if t.predicate == RDF_TYPE {
            ("@type".to_owned(), json!(id(&t.object)))
        } else {
            (short(&t.predicate), object_to_json(&t.object))
        };
        // Repeated predicates are promoted to a JSON-LD array.
        match node.get_mut(&key) {
            Some(Value::Array(values)) => values.push(value),
            Some(existing) => {
                let prev = std::mem::replace(existing, Value::Null);
                *existing = json!([prev, value]);
            }
            None => {
                node.insert(key, value);
            }
        }
    }
    Value::Object(node)
}

fn object_to_json(t: &Term) -> Value {
    match t {
        Term::Literal(lit) => match &lit.datatype {
            Some(datatype) => json!({ "@value": lit.lexical, "@type": short(datatype) }),
            None => json!({ "@value": lit.lexical }),
        },
        other => json!({ "@id": id(other) }),
    }
}

fn id(t: &Term) -> String {
    match t {
        Term::Iri(iri) => short(iri),
        Term::Blank(node) => node.to_string(),
        Term::Literal(lit) => lit.lexical.clone(),
    }
}

fn short(iri: &str) -> String {
    compact_iri(iri).unwrap_or_else(|| iri.to_owned())
}
