//! Constraint list builder.
//!
//! Encodes ordered collections as RDF lists: a chain of anonymous cells,
//! each with one `rdf:first` edge to its value and one `rdf:rest` edge to
//! the next cell, the last cell pointing at `rdf:nil`.
//!
//! An `sh:or` list holds one anonymous shape per [`Alternative`]; that shape
//! carries a `sh:datatype`, `sh:class` or `sh:in` edge. Enumerations nest a
//! second list of their values under `sh:in`.

use crate::graph::{BlankNodeAllocator, Fragment, Term, Triple};
use crate::vocab::{RDF_FIRST, RDF_NIL, RDF_REST, SH_CLASS, SH_DATATYPE, SH_IN};

/// One alternative of a disjunctive constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alternative {
    /// Values must carry this datatype IRI.
    Datatype(String),
    /// Values must be instances of this class IRI.
    Class(String),
    /// Values must be one of these (coded IRIs or literal fallbacks).
    Enumeration(Vec<Term>),
}

impl Alternative {
    /// The predicate this alternative emits on its shape node.
    #[must_use]
    pub fn predicate(&self) -> &'static str {
        match self {
            Alternative::Datatype(_) => SH_DATATYPE,
            Alternative::Class(_) => SH_CLASS,
            Alternative::Enumeration(_) => SH_IN,
        }
    }
}

/// Builds an RDF list over `items`, preserving their order.
///
/// An empty input yields `rdf:nil` as the head and no triples.
pub fn build_list<I>(items: I, blanks: &mut BlankNodeAllocator) -> Fragment
where
    I: IntoIterator<Item = Term>,
{
    let items: Vec<Term> = items.into_iter().collect();
    let cells: Vec<Term> = items.iter().map(|_| Term::from(blanks.fresh())).collect();
    let head = cells.first().cloned().unwrap_or_else(|| Term::iri(RDF_NIL));

    let mut fragment = Fragment::new(head);
    for (i, (cell, value)) in cells.iter().zip(items).enumerate() {
        let rest = cells.get(i + 1).cloned().unwrap_or_else(|| Term::iri(RDF_NIL));
        fragment
            .triples
            .push(Triple::new(cell.clone(), RDF_FIRST, value));
        fragment.triples.push(Triple::new(cell.clone(), RDF_REST, rest));
    }
    fragment
}

/// Builds the `sh:or` list for `alternatives`, one anonymous shape per
/// alternative, in input order.
///
/// The returned fragment's node is the list head. Every call allocates
/// fresh nodes, so a list is never shared between property shapes.
pub fn build_alternatives(
    alternatives: &[Alternative],
    blanks: &mut BlankNodeAllocator,
) -> Fragment {
    let mut members = Vec::with_capacity(alternatives.len());
    let mut nested = Vec::new();

    for alternative in alternatives {
        let mut shape = Fragment::new(blanks.fresh());
        match alternative {
            Alternative::Datatype(iri) | Alternative::Class(iri) => {
                shape.push(alternative.predicate(), Term::iri(iri.as_str()));
            }
            Alternative::Enumeration(values) => {
                let values = build_list(values.iter().cloned(), blanks);
                shape.attach(SH_IN, values);
            }
        }
        members.push(shape.node.clone());
        nested.extend(shape.triples);
    }

    let mut list = build_list(members, blanks);
    list.triples.extend(nested);
    list
}
