//! Graph compiler: walks the schema model and assembles one shapes graph.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::CompileError;
use crate::graph::{BlankNodeAllocator, ConstraintGraph};
use crate::model::SchemaModel;
use crate::node::NodeShapeBuilder;

/// Compile-time settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Closed flag for classes without their own override.
    pub closed: bool,
    /// Appended to each class URI to form its node shape IRI.
    pub suffix: Option<String>,
    /// Emit `sh:name`, `sh:description` and `sh:order`.
    pub emit_metadata: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            closed: true,
            suffix: None,
            emit_metadata: true,
        }
    }
}

/// Compiles schema models into SHACL shapes graphs.
///
/// Each call to [`ShapeCompiler::compile`] uses its own blank node
/// allocator, so one compiler can serve concurrent compiles.
#[derive(Debug, Clone, Default)]
pub struct ShapeCompiler {
    options: CompileOptions,
}

impl ShapeCompiler {
    /// Creates a compiler with the given options.
    #[must_use]
    pub fn new(options: CompileOptions) -> Self {
        Self { options }
    }

    /// The options this compiler was built with.
    #[must_use]
    pub fn options(&self) -> &CompileOptions {
        &self.options
    }

    /// Compiles every class of `schema`, in order, into one graph.
    ///
    /// # Errors
    ///
    /// Returns the first [`CompileError`] raised by any class; no partial
    /// graph is returned.
    pub fn compile(&self, schema: &SchemaModel) -> Result<ConstraintGraph, CompileError> {
        let builder = NodeShapeBuilder::new(schema, &self.options);
        let mut blanks = BlankNodeAllocator::new();
        let mut graph = ConstraintGraph::new();

        for class in &schema.classes {
            graph.absorb(builder.build(class, &mut blanks)?);
        }

        info!(
            schema = %schema.name,
            classes = schema.classes.len(),
            slots = schema.slot_count(),
            triples = graph.len(),
            "compiled shapes graph"
        );
        Ok(graph)
    }
}

/// Compiles `schema` with default options.
///
/// # Errors
///
/// See [`ShapeCompiler::compile`].
pub fn compile(schema: &SchemaModel) -> Result<ConstraintGraph, CompileError> {
    ShapeCompiler::default().compile(schema)
}
