//! Turtle 1.1 serializer for compiled shapes graphs.
//!
//! Produces `@prefix` declarations for `sh:`, `rdf:` and `xsd:`, then one
//! block per subject with its predicates joined by `;`. Blank nodes keep
//! their `_:bN` labels so the output maps one-to-one onto the graph.

use crate::graph::{ConstraintGraph, Term, Triple};
use crate::serializer::{compact_iri, escape_string, PREFIXES};
use crate::vocab::{RDF_TYPE, XSD_BOOLEAN, XSD_INTEGER};

/// Serializes `graph` to a Turtle string.
///
/// # Errors
///
/// This function is infallible; it always returns a valid Turtle string.
#[must_use]
pub fn to_turtle(graph: &ConstraintGraph) -> String {
    let mut out = String::with_capacity(graph.len() * 64 + 256);

    // Prefix declarations
    for (prefix, ns) in PREFIXES {
        out.push_str(&format!("@prefix {prefix}: <{ns}> .\n"));
    }
    out.push('\n');

    let triples: Vec<&Triple> = graph.iter().collect();
    // Triples are ordered by subject first, so each subject's triples are contiguous.
    for block in triples.chunk_by(|a, b| a.subject == b.subject) {
        out.push_str(&node(&block[0].subject));
        for (i, t) in block.iter().enumerate() {
            out.push_str(if i == 0 { "\n  " } else { " ;\n  " });
            out.push_str(&predicate(&t.predicate));
            out.push(' ');
            out.push_str(&object(&t.object));
        }
        out.push_str(" .\n\n");
    }

    out
}

fn predicate(iri: &str) -> String {
    if iri == RDF_TYPE {
        return "a".to_owned();
    }
    compact_iri(iri).unwrap_or_else(|| format!("<{iri}>"))
}

fn node(t: &Term) -> String {
    match t {
        Term::Iri(iri) => compact_iri(iri).unwrap_or_else(|| format!("<{iri}>")),
        Term::Blank(blank) => blank.to_string(),
        Term::Literal(_) => object(t),
    }
}

fn object(t: &Term) -> String {
    match t {
        Term::Literal(lit) => {
            let quoted = format!("\"{}\"", escape_string(&lit.lexical));
            match lit.datatype.as_deref() {
                None => quoted,
                Some(XSD_BOOLEAN) if lit.lexical == "true" || lit.lexical == "false" => {
                    lit.lexical.clone()
                }
                Some(XSD_INTEGER) if is_integer_token(&lit.lexical) => lit.lexical.clone(),
                Some(datatype) => {
                    let dt = compact_iri(datatype).unwrap_or_else(|| format!("<{datatype}>"));
                    format!("{quoted}^^{dt}")
                }
            }
        }
        other => node(other),
    }
}

fn is_integer_token(s: &str) -> bool {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}
