//! Property shape builder: one anonymous `sh:property` shape per slot.

use tracing::{debug, warn};

use crate::compiler::CompileOptions;
use crate::error::CompileError;
use crate::graph::{BlankNodeAllocator, Fragment, Literal, Term};
use crate::list::{build_alternatives, build_list, Alternative};
use crate::literal::{encode, encode_natural, encode_untyped, resolve_type, PrimitiveType};
use crate::model::{Range, RangeElement, RawValue, SchemaClass, SchemaModel, SchemaSlot};
use crate::vocab::{
    SH_BLANK_NODE_OR_IRI, SH_CLASS, SH_DATATYPE, SH_DEFAULT_VALUE, SH_DESCRIPTION, SH_IN,
    SH_LITERAL, SH_MAX_COUNT, SH_MAX_INCLUSIVE, SH_MIN_COUNT, SH_MIN_INCLUSIVE, SH_NAME,
    SH_NODE_KIND, SH_OR, SH_ORDER, SH_PATH, SH_PATTERN,
};

/// Builds property shapes against one schema.
#[derive(Debug, Clone, Copy)]
pub struct PropertyShapeBuilder<'a> {
    schema: &'a SchemaModel,
    options: &'a CompileOptions,
}

/// The value constraint a range resolves to. Exactly one is emitted per
/// typed slot.
enum ValueConstraint {
    Datatype(PrimitiveType),
    Class(String),
    In(Vec<Term>),
    Or(Vec<Alternative>),
}

impl<'a> PropertyShapeBuilder<'a> {
    /// Creates a builder resolving names against `schema`.
    #[must_use]
    pub fn new(schema: &'a SchemaModel, options: &'a CompileOptions) -> Self {
        Self { schema, options }
    }

    /// Builds the property shape for `slot`, the `order`-th slot of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if the range is malformed, a type does not
    /// resolve, or the default/bound values cannot be encoded.
    pub fn build(
        &self,
        class: &SchemaClass,
        slot: &SchemaSlot,
        order: usize,
        blanks: &mut BlankNodeAllocator,
    ) -> Result<Fragment, CompileError> {
        debug!(class = %class.name, slot = %slot.name, "building property shape");
        let ctx = SlotContext { class, slot };
        let mut shape = Fragment::new(blanks.fresh());
        shape.push(SH_PATH, Term::iri(slot.path.as_str()));

        if self.options.emit_metadata {
            shape.push(SH_NAME, Literal::untyped(slot.name.as_str()));
            if let Some(description) = &slot.description {
                shape.push(SH_DESCRIPTION, Literal::untyped(description.as_str()));
            }
            shape.push(SH_ORDER, Literal::integer(order as u64));
        }

        if let Some(min) = slot.min_count {
            shape.push(SH_MIN_COUNT, Literal::integer(min));
        }
        if let Some(max) = slot.max_count {
            shape.push(SH_MAX_COUNT, Literal::integer(max));
        }

        let constraint = match &slot.range {
            Some(range) => Some(self.value_constraint(&ctx, range)?),
            None => None,
        };
        let primitive = self.value_primitive(&ctx, constraint.as_ref())?;

        match constraint {
            Some(ValueConstraint::Datatype(p)) => {
                // sh:datatype only matches literals, so URI ranges are literal too.
                shape.push(SH_DATATYPE, Term::iri(p.datatype_iri()));
                shape.push(SH_NODE_KIND, Term::iri(SH_LITERAL));
            }
            Some(ValueConstraint::Class(iri)) => {
                shape.push(SH_CLASS, Term::iri(iri));
                shape.push(SH_NODE_KIND, Term::iri(SH_BLANK_NODE_OR_IRI));
            }
            Some(ValueConstraint::In(values)) => {
                shape.attach(SH_IN, build_list(values, blanks));
            }
            Some(ValueConstraint::Or(alternatives)) => {
                shape.attach(SH_OR, build_alternatives(&alternatives, blanks));
            }
            None => {}
        }

        if let Some(default) = &slot.default {
            let literal = self.default_literal(&ctx, default, primitive)?;
            shape.push(SH_DEFAULT_VALUE, literal);
        }
        if let Some(pattern) = &slot.pattern {
            shape.push(SH_PATTERN, Literal::untyped(pattern.as_str()));
        }
        if let Some(min) = &slot.minimum_value {
            shape.push(SH_MIN_INCLUSIVE, ctx.bound(min, primitive)?);
        }
        if let Some(max) = &slot.maximum_value {
            shape.push(SH_MAX_INCLUSIVE, ctx.bound(max, primitive)?);
        }

        Ok(shape)
    }

    fn value_constraint(
        &self,
        ctx: &SlotContext<'_>,
        range: &Range,
    ) -> Result<ValueConstraint, CompileError> {
        Ok(match range {
            Range::Type(name) => ValueConstraint::Datatype(ctx.resolve(name, self.schema)?),
            Range::Class(name) => ValueConstraint::Class(self.class_iri(ctx, name)?),
            Range::Enum(name) => ValueConstraint::In(self.enum_values(ctx, name)?),
            Range::Union(elements) => {
                if elements.is_empty() {
                    return Err(ctx.malformed("union range has no alternatives"));
                }
                let alternatives = elements
                    .iter()
                    .map(|element| self.alternative(ctx, element))
                    .collect::<Result<Vec<_>, _>>()?;
                ValueConstraint::Or(alternatives)
            }
        })
    }

    fn alternative(
        &self,
        ctx: &SlotContext<'_>,
        element: &RangeElement,
    ) -> Result<Alternative, CompileError> {
        Ok(match element {
            RangeElement::Type(name) => {
                Alternative::Datatype(ctx.resolve(name, self.schema)?.datatype_iri().to_owned())
            }
            RangeElement::Class(name) => Alternative::Class(self.class_iri(ctx, name)?),
            RangeElement::Enum(name) => Alternative::Enumeration(self.enum_values(ctx, name)?),
        })
    }

    fn class_iri(&self, ctx: &SlotContext<'_>, name: &str) -> Result<String, CompileError> {
        self.schema
            .find_class(name)
            .map(|c| c.uri.clone())
            .ok_or_else(|| ctx.malformed(format!("undeclared class `{name}`")))
    }

    /// Coded values become IRIs; values without a code fall back to their
    /// text as an untyped literal.
    fn enum_values(&self, ctx: &SlotContext<'_>, name: &str) -> Result<Vec<Term>, CompileError> {
        let definition = self
            .schema
            .find_enum(name)
            .ok_or_else(|| ctx.malformed(format!("undeclared enumeration `{name}`")))?;
        if definition.permissible_values.is_empty() {
            return Err(ctx.malformed(format!("enumeration `{name}` has no values")));
        }
        Ok(definition
            .permissible_values
            .iter()
            .map(|pv| match &pv.meaning {
                Some(code) => Term::iri(code.as_str()),
                None => Term::Literal(Literal::untyped(pv.text.as_str())),
            })
            .collect())
    }

    /// The primitive used for default and bound values: an explicit
    /// `default_type`, else a single primitive range.
    fn value_primitive(
        &self,
        ctx: &SlotContext<'_>,
        constraint: Option<&ValueConstraint>,
    ) -> Result<Option<PrimitiveType>, CompileError> {
        if let Some(name) = &ctx.slot.default_type {
            return ctx.resolve(name, self.schema).map(Some);
        }
        Ok(match constraint {
            Some(ValueConstraint::Datatype(p)) => Some(*p),
            _ => None,
        })
    }

    fn default_literal(
        &self,
        ctx: &SlotContext<'_>,
        value: &RawValue,
        primitive: Option<PrimitiveType>,
    ) -> Result<Literal, CompileError> {
        match primitive {
            Some(p) if ctx.slot.typed_default => encode(p, value).map_err(|e| ctx.literal(e)),
            _ => {
                warn!(
                    class = %ctx.class.name,
                    slot = %ctx.slot.name,
                    "default value has no resolvable type; emitting untyped literal"
                );
                Ok(encode_untyped(value))
            }
        }
    }
}

/// Class/slot pair used to label errors.
struct SlotContext<'c> {
    class: &'c SchemaClass,
    slot: &'c SchemaSlot,
}

impl SlotContext<'_> {
    fn resolve(&self, name: &str, schema: &SchemaModel) -> Result<PrimitiveType, CompileError> {
        resolve_type(name, schema).map_err(|e| self.literal(e))
    }

    fn bound(
        &self,
        value: &RawValue,
        primitive: Option<PrimitiveType>,
    ) -> Result<Literal, CompileError> {
        let encoded = match primitive {
            Some(p) => encode(p, value),
            None => encode_natural(value),
        };
        encoded.map_err(|e| self.literal(e))
    }

    fn malformed(&self, reason: impl Into<String>) -> CompileError {
        CompileError::malformed_range(&self.class.name, &self.slot.name, reason)
    }

    fn literal(&self, err: crate::error::LiteralError) -> CompileError {
        CompileError::from_literal(&self.class.name, &self.slot.name, err)
    }
}
