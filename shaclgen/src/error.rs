//! Error types for compilation, literal encoding, and graph traversal.

use thiserror::Error;

use crate::literal::PrimitiveType;

/// A failure to compile the schema model. Compilation is all-or-nothing:
/// when this is returned, no graph is produced.
///
/// Every variant names the offending class and slot. Retrying cannot
/// succeed; the input model has to be corrected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    /// A type name does not resolve to one of the ten supported primitives.
    #[error("class `{class}`, slot `{slot}`: unsupported type `{type_name}`")]
    UnsupportedType {
        /// Owning class name.
        class: String,
        /// Slot name.
        slot: String,
        /// The type name that failed to resolve.
        type_name: String,
    },
    /// A range is empty or references an undeclared class or enumeration.
    #[error("class `{class}`, slot `{slot}`: malformed range: {reason}")]
    MalformedRange {
        /// Owning class name.
        class: String,
        /// Slot name.
        slot: String,
        /// What is wrong with the range.
        reason: String,
    },
    /// A default or bound value cannot be rendered in the slot's type.
    #[error("class `{class}`, slot `{slot}`: invalid value: {reason}")]
    InvalidDefault {
        /// Owning class name.
        class: String,
        /// Slot name.
        slot: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl CompileError {
    pub(crate) fn malformed_range(class: &str, slot: &str, reason: impl Into<String>) -> Self {
        CompileError::MalformedRange {
            class: class.to_owned(),
            slot: slot.to_owned(),
            reason: reason.into(),
        }
    }

    /// Attaches class/slot context to a literal encoding failure.
    pub(crate) fn from_literal(class: &str, slot: &str, err: LiteralError) -> Self {
        match err {
            LiteralError::UnsupportedType(type_name) => CompileError::UnsupportedType {
                class: class.to_owned(),
                slot: slot.to_owned(),
                type_name,
            },
            other @ LiteralError::InvalidValue { .. } => CompileError::InvalidDefault {
                class: class.to_owned(),
                slot: slot.to_owned(),
                reason: other.to_string(),
            },
        }
    }
}

/// A failure inside the literal encoder, before class/slot context is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The type name is outside the fixed mapping.
    #[error("unsupported type `{0}`")]
    UnsupportedType(String),
    /// The raw value has no valid lexical form in the requested type.
    #[error("cannot encode {value} as {datatype}")]
    InvalidValue {
        /// Requested primitive type.
        datatype: PrimitiveType,
        /// Debug rendering of the raw value.
        value: String,
    },
}

/// A failure while walking a list structure in a compiled graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraversalError {
    /// A list cell lacks its `rdf:first` or `rdf:rest` edge.
    #[error("list node {node} has no `{predicate}` edge")]
    MissingEdge {
        /// Rendering of the list node.
        node: String,
        /// The missing predicate IRI.
        predicate: &'static str,
    },
    /// The list revisits a node or exceeds the traversal bound.
    #[error("malformed list at {node}: {reason}")]
    MalformedList {
        /// Rendering of the node where the walk stopped.
        node: String,
        /// Why the walk stopped.
        reason: String,
    },
}
