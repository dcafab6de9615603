//! In-memory constraint graph.
//!
//! A [`ConstraintGraph`] is a set of [`Triple`]s. Triples are only ever
//! added; the set semantics collapse duplicates and keep iteration order
//! deterministic, so two compiles of the same model produce equal graphs.

use std::collections::BTreeSet;
use std::fmt;

use crate::vocab::{XSD_BOOLEAN, XSD_INTEGER};

/// An anonymous node, unique within one compiled graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlankNode(u64);

impl BlankNode {
    /// Returns the label used in serialized output (e.g. `b7`).
    #[must_use]
    pub fn label(self) -> String {
        format!("b{}", self.0)
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:b{}", self.0)
    }
}

/// Hands out fresh [`BlankNode`]s for a single compile run.
///
/// Identifiers are never reused within the allocator's lifetime. Separate
/// compile runs use separate allocators, so they may run concurrently.
#[derive(Debug, Default)]
pub struct BlankNodeAllocator {
    next: u64,
}

impl BlankNodeAllocator {
    /// Creates an allocator starting at `_:b0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a node that has not been handed out before.
    pub fn fresh(&mut self) -> BlankNode {
        let node = BlankNode(self.next);
        self.next += 1;
        node
    }

    /// Number of nodes allocated so far.
    #[must_use]
    pub fn allocated(&self) -> u64 {
        self.next
    }
}

/// A literal value with an optional datatype IRI.
///
/// `datatype: None` is the untyped fallback used when a default value's
/// type cannot be resolved; no datatype is guessed in that case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Literal {
    /// Lexical form.
    pub lexical: String,
    /// Full datatype IRI, or `None` for an untyped literal.
    pub datatype: Option<String>,
}

impl Literal {
    /// A literal carrying `datatype`.
    pub fn typed(lexical: impl Into<String>, datatype: &str) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: Some(datatype.to_owned()),
        }
    }

    /// A literal without a datatype edge.
    pub fn untyped(lexical: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: None,
        }
    }

    /// `"true"^^xsd:boolean` or `"false"^^xsd:boolean`.
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::typed(if value { "true" } else { "false" }, XSD_BOOLEAN)
    }

    /// An `xsd:integer` literal.
    #[must_use]
    pub fn integer(value: u64) -> Self {
        Self::typed(value.to_string(), XSD_INTEGER)
    }
}

/// A node or value position in a triple.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// A resource identified by a full IRI.
    Iri(String),
    /// An anonymous node.
    Blank(BlankNode),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Shorthand for [`Term::Iri`].
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Returns true for anonymous nodes.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::Blank(node)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Term::Literal(lit)
    }
}

/// One `(subject, predicate, object)` statement.
///
/// Subjects are always IRIs or blank nodes; builders never place a literal
/// in subject position.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// Subject node.
    pub subject: Term,
    /// Full predicate IRI.
    pub predicate: String,
    /// Object node or literal.
    pub object: Term,
}

impl Triple {
    /// Builds a triple from its three positions.
    pub fn new(subject: impl Into<Term>, predicate: &str, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.to_owned(),
            object: object.into(),
        }
    }
}

/// The output of one builder: the node it produced plus the triples that
/// describe it.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Head or shape node the caller links to.
    pub node: Term,
    /// Triples emitted by the builder.
    pub triples: Vec<Triple>,
}

impl Fragment {
    /// Starts an empty fragment rooted at `node`.
    pub fn new(node: impl Into<Term>) -> Self {
        Self {
            node: node.into(),
            triples: Vec::new(),
        }
    }

    /// Adds a triple whose subject is this fragment's node.
    pub fn push(&mut self, predicate: &str, object: impl Into<Term>) {
        self.triples
            .push(Triple::new(self.node.clone(), predicate, object));
    }

    /// Links `predicate` to another fragment's node and absorbs its triples.
    pub fn attach(&mut self, predicate: &str, child: Fragment) {
        self.push(predicate, child.node);
        self.triples.extend(child.triples);
    }
}

/// A set of triples describing SHACL shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintGraph {
    triples: BTreeSet<Triple>,
}

impl ConstraintGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Absorbs every triple of a builder fragment.
    pub fn absorb(&mut self, fragment: Fragment) {
        self.triples.extend(fragment.triples);
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true when the graph holds no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns true if `triple` is in the graph.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterates triples in their canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// All objects of `(subject, predicate, ?)`.
    ///
    /// The returned terms borrow only the graph, not the lookup keys.
    pub fn objects<'a>(
        &'a self,
        subject: &Term,
        predicate: &str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        let subject = subject.clone();
        let predicate = predicate.to_owned();
        self.triples
            .iter()
            .filter(move |t| t.subject == subject && t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// All subjects of `(?, predicate, object)`.
    ///
    /// The returned terms borrow only the graph, not the lookup keys.
    pub fn subjects<'a>(
        &'a self,
        predicate: &str,
        object: &Term,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        let predicate = predicate.to_owned();
        let object = object.clone();
        self.triples
            .iter()
            .filter(move |t| t.predicate == predicate && t.object == object)
            .map(|t| &t.subject)
    }
}

impl Extend<Triple> for ConstraintGraph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl<'a> IntoIterator for &'a ConstraintGraph {
    type Item = &'a Triple;
    type IntoIter = std::collections::btree_set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}
