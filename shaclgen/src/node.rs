//! Node shape builder: one `sh:NodeShape` per schema class.

use tracing::debug;

use crate::compiler::CompileOptions;
use crate::error::CompileError;
use crate::graph::{BlankNodeAllocator, Fragment, Literal, Term};
use crate::list::build_list;
use crate::model::{SchemaClass, SchemaModel};
use crate::property::PropertyShapeBuilder;
use crate::vocab::{
    RDF_TYPE, SH_CLOSED, SH_DESCRIPTION, SH_IGNORED_PROPERTIES, SH_NODE_SHAPE, SH_PROPERTY,
    SH_TARGET_CLASS,
};

/// Builds node shapes against one schema.
#[derive(Debug, Clone, Copy)]
pub struct NodeShapeBuilder<'a> {
    options: &'a CompileOptions,
    properties: PropertyShapeBuilder<'a>,
}

impl<'a> NodeShapeBuilder<'a> {
    /// Creates a builder resolving names against `schema`.
    #[must_use]
    pub fn new(schema: &'a SchemaModel, options: &'a CompileOptions) -> Self {
        Self {
            options,
            properties: PropertyShapeBuilder::new(schema, options),
        }
    }

    /// The node shape IRI for `class`: its URI plus the configured suffix.
    #[must_use]
    pub fn shape_iri(&self, class: &SchemaClass) -> String {
        match &self.options.suffix {
            Some(suffix) => format!("{}{}", class.uri, suffix),
            None => class.uri.clone(),
        }
    }

    /// Whether `class` rejects undeclared properties.
    #[must_use]
    pub fn is_closed(&self, class: &SchemaClass) -> bool {
        class.closed.unwrap_or(self.options.closed)
    }

    /// Builds the node shape for `class` and one property shape per slot.
    ///
    /// `sh:property` edges follow slot order, though consumers must not
    /// depend on triple order.
    ///
    /// # Errors
    ///
    /// Propagates the first [`CompileError`] raised by a property shape.
    pub fn build(
        &self,
        class: &SchemaClass,
        blanks: &mut BlankNodeAllocator,
    ) -> Result<Fragment, CompileError> {
        let closed = self.is_closed(class);
        debug!(class = %class.name, closed, slots = class.slots.len(), "building node shape");

        let mut shape = Fragment::new(Term::iri(self.shape_iri(class)));
        shape.push(RDF_TYPE, Term::iri(SH_NODE_SHAPE));
        shape.push(SH_TARGET_CLASS, Term::iri(class.uri.as_str()));
        shape.push(SH_CLOSED, Literal::boolean(closed));
        if closed {
            let ignored = build_list([Term::iri(RDF_TYPE)], blanks);
            shape.attach(SH_IGNORED_PROPERTIES, ignored);
        }
        if self.options.emit_metadata {
            if let Some(description) = &class.description {
                shape.push(SH_DESCRIPTION, Literal::untyped(description.as_str()));
            }
        }

        for (order, slot) in class.slots.iter().enumerate() {
            let property = self.properties.build(class, slot, order, blanks)?;
            shape.attach(SH_PROPERTY, property);
        }
        Ok(shape)
    }
}
