//! Serializers for compiled shapes graphs.
//!
//! Three output formats are supported:
//! - **Turtle** ([`turtle`]): the default output of the `gen-shacl` command
//! - **N-Triples** ([`ntriples`]): one triple per line, for diffing and bulk loading
//! - **JSON-LD** ([`jsonld`]): flattened `@graph` form

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

use crate::vocab::{RDF, SH, XSD};

/// Prefixes written by the Turtle and JSON-LD serializers.
pub(crate) const PREFIXES: &[(&str, &str)] = &[("sh", SH), ("rdf", RDF), ("xsd", XSD)];

/// Returns `prefix:local` when `iri` falls under a known prefix and the
/// local part needs no escaping.
pub(crate) fn compact_iri(iri: &str) -> Option<String> {
    PREFIXES.iter().find_map(|(prefix, ns)| {
        let local = iri.strip_prefix(ns)?;
        let plain = !local.is_empty()
            && local.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
            && !local.starts_with(|c: char| c.is_ascii_digit());
        plain.then(|| format!("{prefix}:{local}"))
    })
}

/// Escapes a literal's lexical form for a double-quoted string.
pub(crate) fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}
