//! Canonical type descriptor.
//!
//! Every native type the classifier accepts converges to one of four shapes:
//! a scalar reference, an array, a map or an enum. Scalar references never
//! describe the referenced type's structure; consumers resolve them against
//! the model's type table.

use serde::{Deserialize, Serialize};

/// A canonical descriptor plus its nullability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Is {
    #[serde(flatten)]
    pub kind: Kind,
    /// True when the native type was a pointer, slice or map.
    #[serde(default)]
    pub nullable: bool,
}

/// Exactly one canonical shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Kind {
    Scalar(Scalar),
    Array(Box<Array>),
    Map(Box<Map>),
    Enum(Enum),
}

/// Reference to a primitive or a declared type by its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scalar {
    pub of: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Array {
    pub of: Is,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    pub from_key: Is,
    pub to_value: Is,
}

/// Ordered enum members, homogeneous in kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Enum {
    OfStrings(Vec<EnumValue<String>>),
    OfInts(Vec<EnumValue<i64>>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue<T> {
    pub value: T,
    #[serde(rename = "desc", default)]
    pub description: String,
}

/// A constant value accepted as an enum member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumLiteral {
    String(String),
    Int(i64),
}

impl EnumLiteral {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "integer",
        }
    }
}

impl std::fmt::Display for EnumLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl Is {
    pub fn scalar(of: impl Into<String>) -> Self {
        Self {
            kind: Kind::Scalar(Scalar { of: of.into() }),
            nullable: false,
        }
    }

    pub fn array(of: Is) -> Self {
        Self {
            kind: Kind::Array(Box::new(Array { of })),
            nullable: false,
        }
    }

    pub fn map(from_key: Is, to_value: Is) -> Self {
        Self {
            kind: Kind::Map(Box::new(Map { from_key, to_value })),
            nullable: false,
        }
    }

    /// Marks the descriptor as nullable. Applying it twice changes nothing.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn as_enum(&self) -> Option<&Enum> {
        match &self.kind {
            Kind::Enum(values) => Some(values),
            _ => None,
        }
    }
}

impl Enum {
    /// Starts an enum list whose kind is decided by its first member.
    pub fn from_first(value: EnumLiteral, description: String) -> Self {
        match value {
            EnumLiteral::String(value) => Self::OfStrings(vec![EnumValue { value, description }]),
            EnumLiteral::Int(value) => Self::OfInts(vec![EnumValue { value, description }]),
        }
    }

    /// Appends a member of the same kind, handing the value back on a kind mismatch.
    pub fn push(&mut self, value: EnumLiteral, description: String) -> Result<(), EnumLiteral> {
        match (self, value) {
            (Self::OfStrings(values), EnumLiteral::String(value)) => {
                values.push(EnumValue { value, description });
                Ok(())
            }
            (Self::OfInts(values), EnumLiteral::Int(value)) => {
                values.push(EnumValue { value, description });
                Ok(())
            }
            (_, value) => Err(value),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::OfStrings(_) => "string",
            Self::OfInts(_) => "integer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn scalar_serializes_with_single_variant_and_nullable() {
        let is = Is::scalar("string").nullable();
        let value = serde_json::to_value(&is).unwrap();
        assert_eq!(value, json!({"scalar": {"of": "string"}, "nullable": true}));
    }

    #[test]
    fn map_uses_from_key_and_to_value() {
        let is = Is::map(Is::scalar("string"), Is::array(Is::scalar("int")).nullable()).nullable();
        let value = serde_json::to_value(&is).unwrap();
        assert_eq!(
            value,
            json!({
                "map": {
                    "fromKey": {"scalar": {"of": "string"}, "nullable": false},
                    "toValue": {"array": {"of": {"scalar": {"of": "int"}, "nullable": false}}, "nullable": true}
                },
                "nullable": true
            })
        );
        let back: Is = serde_json::from_value(value).unwrap();
        assert_eq!(back, is);
    }

    #[test]
    fn enum_rejects_mixed_kinds() {
        let mut values = Enum::from_first(EnumLiteral::String("A".into()), String::new());
        let rejected = values.push(EnumLiteral::Int(1), String::new());
        assert_eq!(rejected, Err(EnumLiteral::Int(1)));
        assert!(matches!(&values, Enum::OfStrings(v) if v.len() == 1));
        assert_eq!(values.kind_name(), "string");
    }

    #[test]
    fn enum_serializes_as_of_ints() {
        let mut values = Enum::from_first(EnumLiteral::Int(0), "zero".into());
        values.push(EnumLiteral::Int(1), String::new()).unwrap();
        let is = Is {
            kind: Kind::Enum(values),
            nullable: false,
        };
        let value = serde_json::to_value(is).unwrap();
        assert_eq!(
            value,
            json!({
                "enum": {"ofInts": [{"value": 0, "desc": "zero"}, {"value": 1, "desc": ""}]},
                "nullable": false
            })
        );
    }

    #[test]
    fn nullable_is_idempotent() {
        assert_eq!(Is::scalar("int").nullable().nullable(), Is::scalar("int").nullable());
    }
}
