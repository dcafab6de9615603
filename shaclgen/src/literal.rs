//! Literal encoder: primitive type names to XSD datatypes, native values to
//! typed literals.

use std::fmt;

use crate::error::LiteralError;
use crate::graph::Literal;
use crate::model::{RawValue, SchemaModel};
use crate::vocab::{
    XSD_ANY_URI, XSD_BOOLEAN, XSD_DATE, XSD_DATETIME, XSD_DECIMAL, XSD_DOUBLE, XSD_FLOAT,
    XSD_INTEGER, XSD_STRING, XSD_TIME,
};

/// Longest `typeof` chain followed before giving up.
pub const MAX_TYPE_DEPTH: usize = 32;

/// The ten primitive types with a fixed datatype mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// `xsd:string`.
    String,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:integer`.
    Integer,
    /// `xsd:decimal`.
    Decimal,
    /// `xsd:float`.
    Float,
    /// `xsd:double`.
    Double,
    /// `xsd:date`.
    Date,
    /// `xsd:dateTime`.
    DateTime,
    /// `xsd:time`.
    Time,
    /// `xsd:anyURI`.
    Uri,
}

impl PrimitiveType {
    /// Every supported primitive.
    pub const ALL: [PrimitiveType; 10] = [
        PrimitiveType::String,
        PrimitiveType::Boolean,
        PrimitiveType::Integer,
        PrimitiveType::Decimal,
        PrimitiveType::Float,
        PrimitiveType::Double,
        PrimitiveType::Date,
        PrimitiveType::DateTime,
        PrimitiveType::Time,
        PrimitiveType::Uri,
    ];

    /// Maps a builtin type name to its primitive.
    ///
    /// # Errors
    ///
    /// Returns [`LiteralError::UnsupportedType`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, LiteralError> {
        Ok(match name {
            "string" | "str" => PrimitiveType::String,
            "boolean" | "bool" => PrimitiveType::Boolean,
            "integer" | "int" => PrimitiveType::Integer,
            "decimal" => PrimitiveType::Decimal,
            "float" => PrimitiveType::Float,
            "double" => PrimitiveType::Double,
            "date" => PrimitiveType::Date,
            "datetime" => PrimitiveType::DateTime,
            "time" => PrimitiveType::Time,
            "uri" | "uriorcurie" => PrimitiveType::Uri,
            other => return Err(LiteralError::UnsupportedType(other.to_owned())),
        })
    }

    /// Maps a full XSD datatype IRI back to its primitive.
    #[must_use]
    pub fn from_datatype_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.datatype_iri() == iri)
    }

    /// The canonical datatype IRI.
    #[must_use]
    pub fn datatype_iri(self) -> &'static str {
        match self {
            PrimitiveType::String => XSD_STRING,
            PrimitiveType::Boolean => XSD_BOOLEAN,
            PrimitiveType::Integer => XSD_INTEGER,
            PrimitiveType::Decimal => XSD_DECIMAL,
            PrimitiveType::Float => XSD_FLOAT,
            PrimitiveType::Double => XSD_DOUBLE,
            PrimitiveType::Date => XSD_DATE,
            PrimitiveType::DateTime => XSD_DATETIME,
            PrimitiveType::Time => XSD_TIME,
            PrimitiveType::Uri => XSD_ANY_URI,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimitiveType::String => "string",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Integer => "integer",
            PrimitiveType::Decimal => "decimal",
            PrimitiveType::Float => "float",
            PrimitiveType::Double => "double",
            PrimitiveType::Date => "date",
            PrimitiveType::DateTime => "datetime",
            PrimitiveType::Time => "time",
            PrimitiveType::Uri => "uri",
        };
        f.write_str(name)
    }
}

/// Resolves a builtin or custom type name to its primitive.
///
/// Custom types are followed through `typeof` until a builtin is reached;
/// a custom type without a parent resolves through its datatype `uri`.
///
/// # Errors
///
/// Returns [`LiteralError::UnsupportedType`] naming the original type when
/// the chain ends outside the fixed set, loops, or exceeds [`MAX_TYPE_DEPTH`].
pub fn resolve_type(name: &str, schema: &SchemaModel) -> Result<PrimitiveType, LiteralError> {
    let unsupported = || LiteralError::UnsupportedType(name.to_owned());
    let mut current = name;
    for _ in 0..MAX_TYPE_DEPTH {
        if let Ok(primitive) = PrimitiveType::from_name(current) {
            return Ok(primitive);
        }
        let def = schema.find_type(current).ok_or_else(unsupported)?;
        match (&def.type_of, &def.uri) {
            (Some(parent), _) => current = parent.as_str(),
            (None, Some(uri)) => {
                return PrimitiveType::from_datatype_iri(uri).ok_or_else(unsupported)
            }
            (None, None) => return Err(unsupported()),
        }
    }
    Err(unsupported())
}

/// Renders `value` as a literal of type `primitive`.
///
/// Booleans render as `true`/`false`; numbers render in their canonical
/// text form; text is kept verbatim for string, date, time and URI types.
/// Numeric text is accepted and re-rendered.
///
/// # Errors
///
/// Returns [`LiteralError::InvalidValue`] when the value has no lexical
/// form in `primitive` (e.g. a boolean for an integer slot).
pub fn encode(primitive: PrimitiveType, value: &RawValue) -> Result<Literal, LiteralError> {
    let invalid = || LiteralError::InvalidValue {
        datatype: primitive,
        value: format!("{value:?}"),
    };
    let lexical = match (primitive, value) {
        (PrimitiveType::Boolean, RawValue::Bool(b)) => b.to_string(),
        (PrimitiveType::Boolean, RawValue::Text(s)) => match s.as_str() {
            "true" | "True" => "true".to_owned(),
            "false" | "False" => "false".to_owned(),
            _ => return Err(invalid()),
        },
        (PrimitiveType::Integer, RawValue::Integer(i)) => i.to_string(),
        (PrimitiveType::Integer, RawValue::Float(f)) if is_whole(*f) => format!("{f:.0}"),
        (PrimitiveType::Integer, RawValue::Text(s)) => {
            s.trim().parse::<i64>().map_err(|_| invalid())?.to_string()
        }
        (
            PrimitiveType::Decimal | PrimitiveType::Float | PrimitiveType::Double,
            RawValue::Integer(i),
        ) => i.to_string(),
        (PrimitiveType::Decimal, RawValue::Float(f)) if f.is_finite() => f.to_string(),
        (PrimitiveType::Float | PrimitiveType::Double, RawValue::Float(f)) => render_ieee(*f),
        (
            PrimitiveType::Decimal | PrimitiveType::Float | PrimitiveType::Double,
            RawValue::Text(s),
        ) => {
            let parsed = s.trim().parse::<f64>().map_err(|_| invalid())?;
            return encode(primitive, &RawValue::Float(parsed));
        }
        (
            PrimitiveType::String
            | PrimitiveType::Date
            | PrimitiveType::DateTime
            | PrimitiveType::Time
            | PrimitiveType::Uri,
            RawValue::Text(s),
        ) => s.clone(),
        (PrimitiveType::String, other) => other.lexical(),
        _ => return Err(invalid()),
    };
    Ok(Literal::typed(lexical, primitive.datatype_iri()))
}

/// Renders `value` without a datatype. Used when no primitive type can be
/// resolved for the value; no type is guessed.
#[must_use]
pub fn encode_untyped(value: &RawValue) -> Literal {
    Literal::untyped(value.lexical())
}

/// Renders `value` in the type its native representation implies:
/// booleans as `xsd:boolean`, integers as `xsd:integer`, floats as
/// `xsd:decimal`, text untyped.
///
/// # Errors
///
/// Returns [`LiteralError::InvalidValue`] for non-finite floats.
pub fn encode_natural(value: &RawValue) -> Result<Literal, LiteralError> {
    match value {
        RawValue::Bool(_) => encode(PrimitiveType::Boolean, value),
        RawValue::Integer(_) => encode(PrimitiveType::Integer, value),
        RawValue::Float(_) => encode(PrimitiveType::Decimal, value),
        RawValue::Text(_) => Ok(encode_untyped(value)),
    }
}

fn is_whole(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15
}

fn render_ieee(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_owned()
    } else if f.is_infinite() {
        let sign = if f > 0.0 { "" } else { "-" };
        format!("{sign}INF")
    } else {
        f.to_string()
    }
}
