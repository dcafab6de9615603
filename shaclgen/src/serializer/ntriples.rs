//! N-Triples serializer for compiled shapes graphs.
//!
//! Produces a valid N-Triples document (one triple per line, absolute IRIs,
//! `_:bN` blank node labels). Lines follow the graph's canonical triple
//! order, so equal graphs serialize identically.

use crate::graph::{ConstraintGraph, Term};
use crate::serializer::escape_string;

/// Serializes `graph` to an N-Triples string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid N-Triples string.
#[must_use]
pub fn to_ntriples(graph: &ConstraintGraph) -> String {
    let mut out = String::with_capacity(graph.len() * 96);
    for t in graph {
        triple(&mut out, &t.subject, &t.predicate, &t.object);
    }
    out
}

fn triple(out: &mut String, subj: &Term, pred: &str, obj: &Term) {
    out.push_str(&term(subj));
    out.push_str(" <");
    out.push_str(pred);
    out.push_str("> ");
    out.push_str(&term(obj));
    out.push_str(" .\n");
}

/// Renders a term in N-Triples syntax.
pub(crate) fn term(t: &Term) -> String {
    match t {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Blank(node) => node.to_string(),
        Term::Literal(lit) => match &lit.datatype {
            Some(datatype) => format!("\"{}\"^^<{}>", escape_string(&lit.lexical), datatype),
            None => format!("\"{}\"", escape_string(&lit.lexical)),
        },
    }
}
