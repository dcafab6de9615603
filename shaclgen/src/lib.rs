//! Schema-to-shapes compiler.
//!
//! The `shaclgen` crate turns a resolved schema model (classes with typed,
//! cardinality-constrained slots, enumerations, union ranges and default
//! values) into a SHACL shapes graph, and serializes that graph as Turtle,
//! N-Triples or JSON-LD.
//!
//! # Entry Point
//!
//! ```
//! use shaclgen::model::{Range, SchemaClass, SchemaModel, SchemaSlot};
//!
//! let schema = SchemaModel {
//!     classes: vec![SchemaClass {
//!         name: "Person".into(),
//!         uri: "https://example.org/Person".into(),
//!         slots: vec![SchemaSlot::new("age", "https://example.org/age")
//!             .with_range(Range::Type("integer".into()))],
//!         ..SchemaClass::default()
//!     }],
//!     ..SchemaModel::default()
//! };
//! let graph = shaclgen::compile(&schema).unwrap();
//! assert!(!graph.is_empty());
//! ```
//!
//! # Serialization
//!
//! ```
//! # let graph = shaclgen::ConstraintGraph::new();
//! let turtle = shaclgen::serializer::turtle::to_turtle(&graph);
//! let ntriples = shaclgen::serializer::ntriples::to_ntriples(&graph);
//! let json_ld = shaclgen::serializer::jsonld::to_json_ld(&graph);
//! ```

#![cfg_attr(
    not(test),
    deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)
)]
#![deny(missing_docs, clippy::missing_errors_doc)]

pub mod compiler;
pub mod error;
pub mod graph;
pub mod index;
pub mod list;
pub mod literal;
pub mod model;
pub mod node;
pub mod property;
pub mod serializer;
pub mod vocab;

pub use compiler::{compile, CompileOptions, ShapeCompiler};
pub use error::{CompileError, LiteralError, TraversalError};
pub use graph::{BlankNode, ConstraintGraph, Literal, Term, Triple};
pub use index::GraphIndex;
pub use literal::PrimitiveType;
pub use model::{
    EnumDefinition, PermissibleValue, Range, RangeElement, RawValue, SchemaClass, SchemaModel,
    SchemaSlot, TypeDefinition,
};
