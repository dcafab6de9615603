//! Subject index over a compiled graph, and the list walks built on it.
//!
//! Reading an `sh:or` list back out of a graph goes through this index
//! rather than through any object graph, so the walk is bounded by the
//! number of triples and stops on cycles.

use std::collections::{HashMap, HashSet};

use crate::error::TraversalError;
use crate::graph::{ConstraintGraph, Term};
use crate::vocab::{RDF_FIRST, RDF_NIL, RDF_REST, SH_CLASS, SH_DATATYPE, SH_IN};

/// Upper bound on list cells visited in one walk.
pub const MAX_LIST_LENGTH: usize = 65_536;

/// Maps each subject to its outgoing `(predicate, object)` edges.
#[derive(Debug)]
pub struct GraphIndex<'g> {
    edges: HashMap<&'g Term, Vec<(&'g str, &'g Term)>>,
}

impl<'g> GraphIndex<'g> {
    /// Indexes every triple of `graph` by subject.
    #[must_use]
    pub fn new(graph: &'g ConstraintGraph) -> Self {
        let mut edges: HashMap<&'g Term, Vec<(&'g str, &'g Term)>> = HashMap::new();
        for triple in graph {
            edges
                .entry(&triple.subject)
                .or_default()
                .push((triple.predicate.as_str(), &triple.object));
        }
        Self { edges }
    }

    /// Outgoing edges of `subject`, empty if it has none.
    #[must_use]
    pub fn edges(&self, subject: &Term) -> &[(&'g str, &'g Term)] {
        self.edges.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first object of `(subject, predicate, ?)`.
    #[must_use]
    pub fn object(&self, subject: &Term, predicate: &str) -> Option<&'g Term> {
        self.edges(subject)
            .iter()
            .find(|(p, _)| *p == predicate)
            .map(|(_, o)| *o)
    }

    /// Reads the RDF list starting at `head` in order.
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::MissingEdge`] when a cell lacks `rdf:first`
    /// or `rdf:rest`, and [`TraversalError::MalformedList`] when the walk
    /// revisits a cell or passes [`MAX_LIST_LENGTH`].
    pub fn list_items(&self, head: &Term) -> Result<Vec<&'g Term>, TraversalError> {
        let nil = Term::iri(RDF_NIL);
        let mut items = Vec::new();
        let mut seen: HashSet<&Term> = HashSet::new();
        let mut cell: &Term = head;

        while *cell != nil {
            if items.len() >= MAX_LIST_LENGTH {
                return Err(TraversalError::MalformedList {
                    node: render(cell),
                    reason: format!("longer than {MAX_LIST_LENGTH} cells"),
                });
            }
            if !seen.insert(cell) {
                return Err(TraversalError::MalformedList {
                    node: render(cell),
                    reason: "cycle".to_owned(),
                });
            }
            let first = self
                .object(cell, RDF_FIRST)
                .ok_or_else(|| TraversalError::MissingEdge {
                    node: render(cell),
                    predicate: RDF_FIRST,
                })?;
            let rest = self
                .object(cell, RDF_REST)
                .ok_or_else(|| TraversalError::MissingEdge {
                    node: render(cell),
                    predicate: RDF_REST,
                })?;
            items.push(first);
            cell = rest;
        }
        Ok(items)
    }

    /// Reads an `sh:or` list back as `(predicate, value)` pairs.
    ///
    /// `sh:class` and `sh:datatype` edges are reported as they are. The
    /// values of an `sh:in` enumeration are flattened into one
    /// `(rdf:first, value)` pair each; the nesting is not reported.
    ///
    /// # Errors
    ///
    /// Propagates [`TraversalError`] from the list walks.
    pub fn alternatives(&self, head: &Term) -> Result<Vec<(&'g str, &'g Term)>, TraversalError> {
        let mut pairs = Vec::new();
        for member in self.list_items(head)? {
            for &(predicate, object) in self.edges(member) {
                match predicate {
                    SH_CLASS | SH_DATATYPE => pairs.push((predicate, object)),
                    SH_IN => {
                        for value in self.list_items(object)? {
                            pairs.push((RDF_FIRST, value));
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(pairs)
    }
}

fn render(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Blank(node) => node.to_string(),
        Term::Literal(lit) => format!("{:?}", lit.lexical),
    }
}
