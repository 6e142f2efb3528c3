//! Type classification: native type descriptors to canonical descriptors.
//!
//! Classification is a pure recursive match over the closed set of native
//! type shapes. Named types stop the recursion as scalar references, so
//! self-referential declarations terminate without cycle detection.

use thiserror::Error;

use crate::frontend::{NativeType, Shape};
use crate::model::Is;

/// Why a native type has no canonical representation.
///
/// The `Display` form is the diagnostic quoted in model warnings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Unmappable {
    #[error("{ty} (generic type with {params} type parameter(s))")]
    Generic { ty: String, params: usize },
    #[error("{ty} (named function type)")]
    NamedFunction { ty: String },
    #[error("{ty} (named channel type)")]
    NamedChannel { ty: String },
    #[error("{ty} (function)")]
    Function { ty: String },
    #[error("{ty} (channel)")]
    Channel { ty: String },
    #[error("{ty} (interface)")]
    Interface { ty: String },
    #[error("{ty} (type parameter)")]
    TypeParam { ty: String },
    /// Anything else, by its own rendering.
    #[error("{0}")]
    Unknown(String),
}

/// Classifies `ty` as seen from the package `package`.
///
/// Pointers, slices and maps force `nullable`; fixed-size arrays keep their
/// element's nullability. Failures of nested types propagate unchanged.
pub fn classify(ty: &NativeType, package: &str) -> Result<Is, Unmappable> {
    match ty {
        NativeType::Basic { name } => Ok(Is::scalar(name.clone())),
        NativeType::Named(named) => {
            if !named.type_args.is_empty() {
                return Err(Unmappable::Generic {
                    ty: ty.to_string(),
                    params: named.type_args.len(),
                });
            }
            match named.underlying {
                Shape::Signature => Err(Unmappable::NamedFunction { ty: ty.to_string() }),
                Shape::Chan => Err(Unmappable::NamedChannel { ty: ty.to_string() }),
                _ => Ok(Is::scalar(named.qualified_name(package))),
            }
        }
        NativeType::Pointer { elem } => Ok(classify(elem, package)?.nullable()),
        NativeType::Slice { elem } => Ok(Is::array(classify(elem, package)?).nullable()),
        NativeType::Array { elem, .. } => {
            let elem = classify(elem, package)?;
            let nullable = elem.nullable;
            Ok(Is {
                nullable,
                ..Is::array(elem)
            })
        }
        NativeType::Map { key, value } => {
            let key = classify(key, package)?;
            let value = classify(value, package)?;
            Ok(Is::map(key, value).nullable())
        }
        NativeType::Signature { .. } => Err(Unmappable::Function { ty: ty.to_string() }),
        NativeType::Chan { .. } => Err(Unmappable::Channel { ty: ty.to_string() }),
        NativeType::Interface { .. } => Err(Unmappable::Interface { ty: ty.to_string() }),
        NativeType::TypeParam { .. } => Err(Unmappable::TypeParam { ty: ty.to_string() }),
        NativeType::Struct(_) | NativeType::Unknown { .. } => {
            Err(Unmappable::Unknown(ty.to_string()))
        }
    }
}
