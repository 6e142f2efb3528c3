//! Resolved type descriptors as produced by the type-checking frontend.
//!
//! A named type is referenced by identity plus the *shape* of its underlying
//! type, never by embedding the underlying type itself, so recursive
//! declarations stay finite values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One resolved native type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NativeType {
    /// Predeclared primitive, by canonical name (`string`, `int64`, ...).
    Basic { name: String },
    Named(NamedRef),
    Pointer { elem: Box<NativeType> },
    /// Unbounded sequence.
    Slice { elem: Box<NativeType> },
    /// Fixed-size sequence.
    Array { len: u64, elem: Box<NativeType> },
    Map {
        key: Box<NativeType>,
        value: Box<NativeType>,
    },
    Struct(StructType),
    Signature {
        #[serde(default)]
        params: Vec<NativeType>,
        #[serde(default)]
        results: Vec<NativeType>,
    },
    Chan {
        #[serde(default)]
        dir: ChanDir,
        elem: Box<NativeType>,
    },
    Interface {
        #[serde(default)]
        methods: Vec<String>,
    },
    TypeParam { name: String },
    /// Anything the frontend could not express otherwise, by its rendering.
    Unknown { text: String },
}

/// Reference to a named declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    /// Declaring package path; absent for the enclosing package.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,
    pub name: String,
    /// Type arguments of a generic instantiation.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_args: Vec<NativeType>,
    pub underlying: Shape,
}

/// Structural kind of a named type's underlying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Basic,
    Struct,
    Pointer,
    Slice,
    Array,
    Map,
    Signature,
    Chan,
    Interface,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanDir {
    #[default]
    Both,
    Send,
    Recv,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructType {
    #[serde(default)]
    pub fields: Vec<StructField>,
}

/// One field declaration of a struct, possibly naming several members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructField {
    /// Declared names; empty for an embedded field.
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(rename = "type")]
    pub ty: NativeType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

/// A package-level named declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
    pub underlying: NativeType,
}

impl NativeType {
    pub fn basic(name: impl Into<String>) -> Self {
        Self::Basic { name: name.into() }
    }

    /// A non-generic named type declared in `package`.
    pub fn named(package: impl Into<String>, name: impl Into<String>, underlying: Shape) -> Self {
        Self::Named(NamedRef {
            package: Some(package.into()),
            name: name.into(),
            type_args: Vec::new(),
            underlying,
        })
    }

    pub fn pointer(elem: NativeType) -> Self {
        Self::Pointer {
            elem: Box::new(elem),
        }
    }

    pub fn slice(elem: NativeType) -> Self {
        Self::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn array(len: u64, elem: NativeType) -> Self {
        Self::Array {
            len,
            elem: Box::new(elem),
        }
    }

    pub fn map(key: NativeType, value: NativeType) -> Self {
        Self::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(elem: NativeType) -> Self {
        Self::Chan {
            dir: ChanDir::Both,
            elem: Box::new(elem),
        }
    }

    /// Local name a field takes when this type is embedded.
    pub fn embedded_name(&self) -> Option<&str> {
        match self {
            Self::Basic { name } => Some(name.as_str()),
            Self::Named(named) => Some(named.name.as_str()),
            Self::Pointer { elem } => elem.embedded_name(),
            _ => None,
        }
    }
}

impl NamedRef {
    /// `<package>.<name>`, with the enclosing package standing in when absent.
    pub fn qualified_name(&self, enclosing: &str) -> String {
        let package = self.package.as_deref().unwrap_or(enclosing);
        if package.is_empty() {
            self.name.clone()
        } else {
            format!("{package}.{}", self.name)
        }
    }
}

impl Declaration {
    pub fn is_generic(&self) -> bool {
        !self.type_params.is_empty()
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[NativeType]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

impl fmt::Display for NativeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { name } => f.write_str(name),
            Self::Named(named) => {
                f.write_str(&named.qualified_name(""))?;
                if !named.type_args.is_empty() {
                    f.write_str("[")?;
                    write_list(f, &named.type_args)?;
                    f.write_str("]")?;
                }
                Ok(())
            }
            Self::Pointer { elem } => write!(f, "*{elem}"),
            Self::Slice { elem } => write!(f, "[]{elem}"),
            Self::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Self::Map { key, value } => write!(f, "map[{key}]{value}"),
            Self::Struct(st) => {
                f.write_str("struct{")?;
                for (i, field) in st.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    if !field.names.is_empty() {
                        write!(f, "{} ", field.names.join(", "))?;
                    }
                    write!(f, "{}", field.ty)?;
                }
                f.write_str("}")
            }
            Self::Signature { params, results } => {
                f.write_str("func(")?;
                write_list(f, params)?;
                f.write_str(")")?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] => write!(f, " {single}"),
                    many => {
                        f.write_str(" (")?;
                        write_list(f, many)?;
                        f.write_str(")")
                    }
                }
            }
            Self::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {elem}"),
                ChanDir::Send => write!(f, "chan<- {elem}"),
                ChanDir::Recv => write!(f, "<-chan {elem}"),
            },
            Self::Interface { methods } if methods.is_empty() => f.write_str("interface{}"),
            Self::Interface { methods } => write!(f, "interface{{ {} }}", methods.join("; ")),
            Self::TypeParam { name } => f.write_str(name),
            Self::Unknown { text } => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_composites_in_host_syntax() {
        let ty = NativeType::map(
            NativeType::basic("string"),
            NativeType::slice(NativeType::pointer(NativeType::named(
                "example.com/p",
                "Address",
                Shape::Struct,
            ))),
        );
        assert_eq!(ty.to_string(), "map[string][]*example.com/p.Address");
    }

    #[test]
    fn renders_generic_instantiation() {
        let ty = NativeType::Named(NamedRef {
            package: Some("example.com/p".into()),
            name: "DataOfT".into(),
            type_args: vec![NativeType::basic("string")],
            underlying: Shape::Struct,
        });
        assert_eq!(ty.to_string(), "example.com/p.DataOfT[string]");
    }

    #[test]
    fn renders_functions_channels_and_interfaces() {
        let func = NativeType::Signature {
            params: vec![NativeType::basic("string")],
            results: vec![NativeType::basic("int"), NativeType::basic("error")],
        };
        assert_eq!(func.to_string(), "func(string) (int, error)");

        let recv = NativeType::Chan {
            dir: ChanDir::Recv,
            elem: Box::new(NativeType::basic("int")),
        };
        assert_eq!(recv.to_string(), "<-chan int");

        let empty = NativeType::Interface { methods: vec![] };
        assert_eq!(empty.to_string(), "interface{}");
    }

    #[test]
    fn renders_anonymous_struct() {
        let ty = NativeType::Struct(StructType {
            fields: vec![StructField {
                names: vec!["A".into(), "B".into()],
                ty: NativeType::basic("int"),
                tag: String::new(),
            }],
        });
        assert_eq!(ty.to_string(), "struct{A, B int}");
    }

    #[test]
    fn embedded_name_strips_pointer() {
        let ty = NativeType::pointer(NativeType::named("p", "Address", Shape::Struct));
        assert_eq!(ty.embedded_name(), Some("Address"));
    }

    #[test]
    fn deserializes_tagged_json() {
        let json = r#"{"kind":"pointer","elem":{"kind":"named","name":"Person","underlying":"struct"}}"#;
        let ty: NativeType = serde_json::from_str(json).unwrap();
        let NativeType::Pointer { elem } = ty else {
            panic!("expected pointer");
        };
        let NativeType::Named(named) = *elem else {
            panic!("expected named");
        };
        assert_eq!(named.qualified_name("example.com/p"), "example.com/p.Person");
    }
}
