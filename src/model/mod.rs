//! The extracted type model and its mutation surface.
//!
//! A [`Model`] is created empty at the start of an extraction run, mutated by
//! the declaration pass and the syntax pass through a small set of named
//! operations, and handed back to the caller once both passes finish.
//! Operations never fail hard: anything that cannot be applied is recorded as
//! a warning on the model itself.

pub mod is;

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::common::synopsis;

pub use is::{Array, Enum, EnumLiteral, EnumValue, Is, Kind, Map, Scalar};

/// Classification tag attached to a type or field.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trait(pub String);

/// A member of a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// `<TypeID>.<FieldName>`.
    pub id: String,
    pub name: String,
    #[serde(rename = "desc", default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub is: Is,
    /// Illustrative literals for the field's data.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<Trait>,
    /// Raw doc comment, before synopsis.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comments: String,
    /// Raw metadata string attached to the declaration; opaque here.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tags: String,
}

impl Field {
    pub fn new(type_id: &str, name: impl Into<String>, is: Is) -> Self {
        let name = name.into();
        Self {
            id: format!("{type_id}.{name}"),
            name,
            description: String::new(),
            is,
            examples: Vec::new(),
            traits: Vec::new(),
            comments: String::new(),
            tags: String::new(),
        }
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }
}

/// A discovered declaration: a record with fields, or a scalar-backed type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    /// Fully-qualified declaration name, e.g. `github.com/a-h/gidl/model.Type`.
    pub id: String,
    pub name: String,
    #[serde(rename = "desc", default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub traits: Vec<Trait>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comments: String,
    /// Set for non-record types; becomes an enum once constants attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is: Option<Is>,
}

impl Type {
    fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            fields: Vec::new(),
            traits: Vec::new(),
            comments: String::new(),
            is: None,
        }
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn enum_values(&self) -> Option<&Enum> {
        self.is.as_ref().and_then(Is::as_enum)
    }
}

/// Types keyed by ID plus the warnings collected while building them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    #[serde(default)]
    pub types: BTreeMap<String, Type>,
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, type_id: &str) -> Option<&Type> {
        self.types.get(type_id)
    }

    pub fn contains(&self, type_id: &str) -> bool {
        self.types.contains_key(type_id)
    }

    /// Creates a type entry, or refreshes name and comments of an existing one.
    ///
    /// Fields and the `is` descriptor of an existing entry are kept.
    pub fn upsert_type(&mut self, id: &str, name: &str, description: &str, raw_comments: &str) {
        let entry = self
            .types
            .entry(id.to_string())
            .or_insert_with(|| Type::new(id, name));
        entry.name = name.to_string();
        entry.description = description.to_string();
        entry.comments = raw_comments.to_string();
    }

    /// Sets the descriptor of a non-record type.
    pub fn set_type_is(&mut self, type_id: &str, is: Is) {
        match self.types.get_mut(type_id) {
            Some(ty) => ty.is = Some(is),
            None => self.warn(format_args!("{type_id}: cannot set descriptor, type not found")),
        }
    }

    /// Appends a field in traversal order.
    pub fn add_field(&mut self, type_id: &str, field: Field) {
        match self.types.get_mut(type_id) {
            Some(ty) => ty.fields.push(field),
            None => self.warn(format_args!(
                "{}: cannot add field, type {type_id} not found",
                field.id
            )),
        }
    }

    /// Overwrites a type's comment and derives its description.
    pub fn set_type_comment(&mut self, type_id: &str, raw_comment: &str) {
        match self.types.get_mut(type_id) {
            Some(ty) => {
                ty.comments = raw_comment.to_string();
                ty.description = synopsis(raw_comment);
            }
            None => self.warn(format_args!("{type_id}: cannot attach comment, type not found")),
        }
    }

    /// Overwrites a field's comment and derives its description.
    ///
    /// The field is matched by exact name; the first match wins.
    pub fn set_field_comment(&mut self, type_id: &str, field_name: &str, raw_comment: &str) {
        let Some(ty) = self.types.get_mut(type_id) else {
            self.warn(format_args!(
                "{type_id}.{field_name}: cannot attach comment, type not found"
            ));
            return;
        };
        match ty.fields.iter_mut().find(|f| f.name == field_name) {
            Some(field) => {
                field.comments = raw_comment.to_string();
                field.description = synopsis(raw_comment);
            }
            None => self.warn(format_args!(
                "{type_id}.{field_name}: cannot attach comment, field not found"
            )),
        }
    }

    /// Appends an enum member to a type.
    ///
    /// A scalar-backed type turns into an enum on its first member. Unknown
    /// types, record types and members whose kind differs from the existing
    /// list are rejected with a warning.
    pub fn add_enum_value(&mut self, type_id: &str, value: EnumLiteral, description: &str) {
        let Some(ty) = self.types.get_mut(type_id) else {
            self.warn(format_args!(
                "{type_id}: cannot add enum value {value}, type not found"
            ));
            return;
        };

        let description = description.to_string();
        let rejected = match &mut ty.is {
            Some(Is {
                kind: Kind::Enum(values),
                ..
            }) => values
                .push(value, description)
                .err()
                .map(|value| (value, values.kind_name())),
            Some(is @ Is {
                kind: Kind::Scalar(_),
                ..
            }) => {
                is.kind = Kind::Enum(Enum::from_first(value, description));
                None
            }
            _ => {
                self.warn(format_args!(
                    "{type_id}: cannot add enum value {value}, type is not scalar"
                ));
                return;
            }
        };

        if let Some((value, existing)) = rejected {
            self.warn(format_args!(
                "{type_id}: cannot add {} enum value {value} to {existing} enum",
                value.kind_name()
            ));
        }
    }

    /// Records a non-fatal diagnostic.
    pub fn warn(&mut self, warning: impl fmt::Display) {
        let warning = warning.to_string();
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PERSON: &str = "example.com/people.Person";

    fn model_with_person() -> Model {
        let mut model = Model::new();
        model.upsert_type(PERSON, "Person", "", "");
        model.add_field(PERSON, Field::new(PERSON, "Name", Is::scalar("string")));
        model
    }

    #[test]
    fn upsert_keeps_existing_fields() {
        let mut model = model_with_person();
        model.upsert_type(PERSON, "Person", "A person.", "A person.\n");

        let ty = model.get(PERSON).unwrap();
        assert_eq!(ty.fields.len(), 1);
        assert_eq!(ty.description, "A person.");
    }

    #[test]
    fn field_ids_are_qualified_by_type() {
        let model = model_with_person();
        assert_eq!(
            model.get(PERSON).unwrap().fields[0].id,
            "example.com/people.Person.Name"
        );
    }

    #[test]
    fn add_field_to_unknown_type_warns() {
        let mut model = Model::new();
        model.add_field("x.Missing", Field::new("x.Missing", "A", Is::scalar("int")));
        assert!(model.types.is_empty());
        assert_eq!(
            model.warnings,
            vec!["x.Missing.A: cannot add field, type x.Missing not found"]
        );
    }

    #[test]
    fn set_comment_overwrites_and_derives_description() {
        let mut model = model_with_person();
        model.set_field_comment(PERSON, "Name", "Name of the person.\nMore detail.\n");
        model.set_field_comment(PERSON, "Name", "Name of the person.\nMore detail.\n");

        let field = model.get(PERSON).unwrap().field("Name").unwrap();
        assert_eq!(field.description, "Name of the person.");
        assert_eq!(field.comments, "Name of the person.\nMore detail.\n");
        assert!(model.warnings.is_empty());
    }

    #[test]
    fn set_comment_on_unknown_field_warns() {
        let mut model = model_with_person();
        model.set_field_comment(PERSON, "name", "lowercase does not match");
        assert_eq!(model.warnings.len(), 1);
        assert!(model.warnings[0].contains("field not found"));
    }

    #[test]
    fn first_enum_value_turns_scalar_into_enum() {
        let mut model = Model::new();
        model.upsert_type("p.Kind", "Kind", "", "");
        model.set_type_is("p.Kind", Is::scalar("string"));
        model.add_enum_value("p.Kind", EnumLiteral::String("a".into()), "First.");
        model.add_enum_value("p.Kind", EnumLiteral::String("b".into()), "");

        let Some(Enum::OfStrings(values)) = model.get("p.Kind").unwrap().enum_values() else {
            panic!("expected string enum");
        };
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn mixed_enum_kinds_are_rejected() {
        let mut model = Model::new();
        model.upsert_type("p.Kind", "Kind", "", "");
        model.set_type_is("p.Kind", Is::scalar("string"));
        model.add_enum_value("p.Kind", EnumLiteral::String("a".into()), "");
        model.add_enum_value("p.Kind", EnumLiteral::Int(3), "");

        let Some(Enum::OfStrings(values)) = model.get("p.Kind").unwrap().enum_values() else {
            panic!("expected string enum");
        };
        assert_eq!(values.len(), 1);
        assert_eq!(
            model.warnings,
            vec!["p.Kind: cannot add integer enum value 3 to string enum"]
        );
    }

    #[test]
    fn enum_value_on_record_warns() {
        let mut model = model_with_person();
        model.add_enum_value(PERSON, EnumLiteral::Int(1), "");
        assert!(model.get(PERSON).unwrap().is.is_none());
        assert_eq!(model.warnings.len(), 1);
    }

    #[test]
    fn enum_value_on_unknown_type_warns() {
        let mut model = Model::new();
        model.add_enum_value("p.Nope", EnumLiteral::Int(1), "");
        assert_eq!(model.warnings, vec!["p.Nope: cannot add enum value 1, type not found"]);
    }

    #[test]
    fn model_round_trips_through_json() {
        let mut model = model_with_person();
        model.set_type_comment(PERSON, "Person that exists.\n");
        model.warn("something odd");

        let json = serde_json::to_string(&model).unwrap();
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
