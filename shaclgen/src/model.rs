//! Resolved schema model.
//!
//! These types describe a schema after import merging and inheritance
//! flattening: every class lists its induced slots in declaration order.
//! Loading and resolving schema source text happens upstream; this crate
//! only reads the finished model. All types deserialize with `serde` so a
//! loader can hand the model over as JSON.

use serde::{Deserialize, Serialize};

/// A complete, import-merged schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaModel {
    /// Schema name.
    pub name: String,
    /// Schema IRI.
    pub id: String,
    /// Classes in declaration order.
    pub classes: Vec<SchemaClass>,
    /// Enumerations referenced by slot ranges.
    pub enums: Vec<EnumDefinition>,
    /// Custom types derived from builtin primitives.
    pub types: Vec<TypeDefinition>,
}

impl SchemaModel {
    /// Looks up a class by name. Returns `None` if not declared.
    #[must_use]
    pub fn find_class(&self, name: &str) -> Option<&SchemaClass> {
        self.classes.iter().find(|c| c.name == name)
    }

    /// Looks up an enumeration by name. Returns `None` if not declared.
    #[must_use]
    pub fn find_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Looks up a custom type by name. Returns `None` if not declared.
    #[must_use]
    pub fn find_type(&self, name: &str) -> Option<&TypeDefinition> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Total number of induced slots across all classes.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.classes.iter().map(|c| c.slots.len()).sum()
    }
}

/// A schema class with its induced slots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaClass {
    /// Unique class name.
    pub name: String,
    /// Full class IRI; also the node shape IRI unless a suffix is configured.
    pub uri: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Per-class override of the closed flag. `None` defers to
    /// [`CompileOptions::closed`](crate::CompileOptions::closed).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed: Option<bool>,
    /// Induced slots in declaration order.
    #[serde(default)]
    pub slots: Vec<SchemaSlot>,
}

/// One slot of a class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaSlot {
    /// Slot name.
    pub name: String,
    /// Full IRI used as the property shape's `sh:path`.
    pub path: String,
    /// Declared range; `None` leaves the slot untyped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    /// Lower cardinality bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_count: Option<u64>,
    /// Upper cardinality bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u64>,
    /// Value assumed when the slot is absent.
    #[serde(default, alias = "ifabsent", skip_serializing_if = "Option::is_none")]
    pub default: Option<RawValue>,
    /// Type name for the default, overriding the range's primitive type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_type: Option<String>,
    /// When false the default is always written as an untyped literal.
    #[serde(default = "typed_by_default")]
    pub typed_default: bool,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Regular expression the value's lexical form must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Inclusive lower value bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<RawValue>,
    /// Inclusive upper value bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_value: Option<RawValue>,
}

fn typed_by_default() -> bool {
    true
}

impl SchemaSlot {
    /// A slot with only a name and path; every constraint left unset.
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            range: None,
            min_count: None,
            max_count: None,
            default: None,
            default_type: None,
            typed_default: true,
            description: None,
            pattern: None,
            minimum_value: None,
            maximum_value: None,
        }
    }

    /// Sets the range.
    #[must_use]
    pub fn with_range(mut self, range: Range) -> Self {
        self.range = Some(range);
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: RawValue) -> Self {
        self.default = Some(value);
        self
    }

    /// Sets both cardinality bounds.
    #[must_use]
    pub fn with_cardinality(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_count = min;
        self.max_count = max;
        self
    }
}

/// A slot range.
///
/// In JSON: `{"type": "integer"}`, `{"class": "Person"}`, `{"enum": "Codes"}`
/// or `{"union": [{"type": "integer"}, {"class": "Person"}]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Range {
    /// A builtin or custom type name.
    Type(String),
    /// A class name.
    Class(String),
    /// An enumeration name.
    Enum(String),
    /// Any one of several alternatives, in declaration order.
    Union(Vec<RangeElement>),
}

/// One alternative of a union range. Unions do not nest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeElement {
    /// A builtin or custom type name.
    Type(String),
    /// A class name.
    Class(String),
    /// An enumeration name.
    Enum(String),
}

/// A native value as supplied by the loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// `true` / `false`.
    Bool(bool),
    /// Whole number.
    Integer(i64),
    /// Floating-point number.
    Float(f64),
    /// Text; also carries dates, times and URIs.
    Text(String),
}

impl RawValue {
    /// Text rendering used for untyped literals.
    #[must_use]
    pub fn lexical(&self) -> String {
        match self {
            RawValue::Bool(b) => b.to_string(),
            RawValue::Integer(i) => i.to_string(),
            RawValue::Float(f) => f.to_string(),
            RawValue::Text(s) => s.clone(),
        }
    }
}

/// An enumeration and its permissible values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDefinition {
    /// Enumeration name.
    pub name: String,
    /// Permissible values in declaration order.
    #[serde(default)]
    pub permissible_values: Vec<PermissibleValue>,
}

/// One permissible value of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissibleValue {
    /// Value text.
    pub text: String,
    /// Coded IRI for the value. Without one the text is emitted as a literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

impl PermissibleValue {
    /// A value backed by a coded IRI.
    pub fn coded(text: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meaning: Some(meaning.into()),
        }
    }

    /// A value with no code.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            meaning: None,
        }
    }
}

/// A custom type derived from another type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Type name.
    pub name: String,
    /// Parent type name.
    #[serde(default, rename = "typeof", skip_serializing_if = "Option::is_none")]
    pub type_of: Option<String>,
    /// Datatype IRI, consulted when there is no parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ranges_and_defaults() {
        let json = r#"{
            "name": "ks",
            "classes": [{
                "name": "Person",
                "uri": "https://example.org/Person",
                "slots": [
                    {"name": "age", "path": "https://example.org/age",
                     "range": {"type": "integer"}, "ifabsent": 123},
                    {"name": "any", "path": "https://example.org/any",
                     "range": {"union": [{"type": "integer"}, {"class": "Person"}]}},
                    {"name": "score", "path": "https://example.org/score", "default": 1.5,
                     "typed_default": false}
                ]
            }]
        }"#;
        let model: SchemaModel = serde_json::from_str(json).expect("valid model");
        let person = model.find_class("Person").expect("Person declared");
        assert_eq!(person.closed, None);
        assert_eq!(person.slots[0].default, Some(RawValue::Integer(123)));
        assert!(person.slots[0].typed_default);
        assert_eq!(
            person.slots[1].range,
            Some(Range::Union(vec![
                RangeElement::Type("integer".into()),
                RangeElement::Class("Person".into()),
            ]))
        );
        assert_eq!(person.slots[2].default, Some(RawValue::Float(1.5)));
        assert!(!person.slots[2].typed_default);
        assert_eq!(model.slot_count(), 3);
    }

    #[test]
    fn type_definition_uses_typeof_key() {
        let t: TypeDefinition =
            serde_json::from_str(r#"{"name": "phone", "typeof": "string"}"#).expect("valid type");
        assert_eq!(t.type_of.as_deref(), Some("string"));
    }

    #[test]
    fn raw_value_lexical_forms() {
        assert_eq!(RawValue::Bool(true).lexical(), "true");
        assert_eq!(RawValue::Integer(-4).lexical(), "-4");
        assert_eq!(RawValue::Float(1.25).lexical(), "1.25");
        assert_eq!(RawValue::Text("heartfelt".into()).lexical(), "heartfelt");
    }
}
