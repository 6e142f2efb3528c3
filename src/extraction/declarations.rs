//! Declaration pass: one model type per exported, representable declaration.
//!
//! Declarations are visited sorted by name. Each one is inspected on its own,
//! optionally in parallel, and the results are applied to the model in that
//! sorted order so both modes produce the same model.

use std::collections::BTreeSet;

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use super::classifier::classify;
use crate::common::is_exported;
use crate::frontend::{Declaration, NativeType, Package, StructType};
use crate::model::{Field, Is, Model};

/// What the pass left out on purpose, so the syntax pass stays quiet about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Skipped {
    /// Generic definitions and named function, channel or interface types.
    pub types: BTreeSet<String>,
    /// IDs of fields dropped with a warning because their type is unmappable.
    pub fields: BTreeSet<String>,
}

impl Skipped {
    pub fn contains_type(&self, type_id: &str) -> bool {
        self.types.contains(type_id)
    }

    pub fn contains_field(&self, field_id: &str) -> bool {
        self.fields.contains(field_id)
    }
}

/// What the pass made of one declaration.
#[derive(Debug)]
enum Outcome {
    Record {
        id: String,
        name: String,
        fields: Vec<Field>,
        dropped: Vec<String>,
        warnings: Vec<String>,
    },
    Scalar {
        id: String,
        name: String,
        is: Is,
    },
    Skipped {
        id: String,
    },
    Unexported,
}

/// Name a field declaration takes in the model.
///
/// Unexported names are dropped and the remaining ones joined with `,`.
/// An embedded field takes the local name of its type. `None` when nothing
/// exported is left.
pub(crate) fn field_name(names: &[String], embedded: Option<&str>) -> Option<String> {
    if names.is_empty() {
        return embedded.filter(|name| is_exported(name)).map(str::to_string);
    }
    let exported: Vec<&str> = names
        .iter()
        .map(String::as_str)
        .filter(|name| is_exported(name))
        .collect();
    if exported.is_empty() {
        None
    } else {
        Some(exported.join(","))
    }
}

/// Kept fields, plus the IDs and warnings of the dropped ones.
struct RecordFields {
    fields: Vec<Field>,
    dropped: Vec<String>,
    warnings: Vec<String>,
}

fn record_fields(type_id: &str, record: &StructType, package: &str) -> RecordFields {
    let mut fields = Vec::with_capacity(record.fields.len());
    let mut dropped = Vec::new();
    let mut warnings = Vec::new();

    for member in &record.fields {
        let Some(name) = field_name(&member.names, member.ty.embedded_name()) else {
            continue;
        };
        match classify(&member.ty, package) {
            Ok(is) => fields.push(Field::new(type_id, name, is).with_tags(member.tag.clone())),
            Err(diagnostic) => {
                warnings.push(format!(
                    "{type_id}.{name} — field type {diagnostic} cannot be mapped"
                ));
                dropped.push(format!("{type_id}.{name}"));
            }
        }
    }
    RecordFields {
        fields,
        dropped,
        warnings,
    }
}

fn inspect(decl: &Declaration, package: &Package) -> Outcome {
    if !is_exported(&decl.name) {
        return Outcome::Unexported;
    }
    let id = package.qualify(&decl.name);
    if decl.is_generic() {
        debug!("Skipping generic declaration {}", id);
        return Outcome::Skipped { id };
    }

    match &decl.underlying {
        NativeType::Struct(record) => {
            let RecordFields {
                fields,
                dropped,
                warnings,
            } = record_fields(&id, record, &package.path);
            Outcome::Record {
                id,
                name: decl.name.clone(),
                fields,
                dropped,
                warnings,
            }
        }
        other => match classify(other, &package.path) {
            Ok(is) => Outcome::Scalar {
                id,
                name: decl.name.clone(),
                is,
            },
            Err(reason) => {
                debug!("Skipping declaration {}: {}", id, reason);
                Outcome::Skipped { id }
            }
        },
    }
}

/// Runs the declaration pass, returning the declarations it skipped on purpose.
pub fn walk_declarations(package: &Package, model: &mut Model, parallel: bool) -> Skipped {
    let _span = info_span!("declarations", package = %package.path).entered();

    let mut declarations: Vec<&Declaration> = package.declarations.iter().collect();
    declarations.sort_by(|a, b| a.name.cmp(&b.name));

    let outcomes: Vec<Outcome> = if parallel {
        declarations
            .par_iter()
            .map(|decl| inspect(decl, package))
            .collect()
    } else {
        declarations
            .iter()
            .map(|decl| inspect(decl, package))
            .collect()
    };

    let mut skipped = Skipped::default();
    let mut created = 0usize;
    for outcome in outcomes {
        match outcome {
            Outcome::Record {
                id,
                name,
                fields,
                dropped,
                warnings,
            } => {
                model.upsert_type(&id, &name, "", "");
                for field in fields {
                    model.add_field(&id, field);
                }
                skipped.fields.extend(dropped);
                for warning in warnings {
                    model.warn(warning);
                }
                created += 1;
            }
            Outcome::Scalar { id, name, is } => {
                model.upsert_type(&id, &name, "", "");
                model.set_type_is(&id, is);
                created += 1;
            }
            Outcome::Skipped { id } => {
                skipped.types.insert(id);
            }
            Outcome::Unexported => {}
        }
    }

    info!(
        "Declaration pass created {} types, skipped {} and dropped {} fields",
        created,
        skipped.types.len(),
        skipped.fields.len()
    );
    skipped
}
