//! Syntax tree of one source unit, reduced to what extraction reads:
//! declarations, their comments, field declarations and resolved constants.

use serde::{Deserialize, Serialize};

use super::types::NativeType;

/// One source unit of a package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFile {
    pub name: String,
    #[serde(default)]
    pub decls: Vec<Decl>,
}

/// Top-level declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decl", rename_all = "snake_case")]
pub enum Decl {
    /// Grouped declaration (import, const, type, var).
    Gen(GenDecl),
    Func(FuncDecl),
}

/// A declaration group sharing one leading comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenDecl {
    pub kind: GenDeclKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub specs: Vec<Spec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenDeclKind {
    Import,
    Const,
    Type,
    Var,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "spec", rename_all = "snake_case")]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
    Type(TypeSpec),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub path: String,
}

/// A const or var spec; each declared name carries the frontend's resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<ValueName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    /// Trailing line comment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueName {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved: Option<ResolvedConst>,
}

/// Resolved type and value of a constant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedConst {
    #[serde(rename = "type")]
    pub ty: NativeType,
    pub value: ConstValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ConstValue {
    String(String),
    Int(IntValue),
    Float(f64),
    Bool(bool),
    /// Complex or otherwise unrepresentable, by rendering.
    Other(String),
}

/// Integer constant; unsigned constants may exceed the signed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IntValue {
    Signed(i64),
    Unsigned(u64),
}

impl IntValue {
    /// The value as `i64`, if it fits.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Self::Signed(v) => Some(v),
            Self::Unsigned(v) => i64::try_from(v).ok(),
        }
    }
}

impl ConstValue {
    pub fn int(value: i64) -> Self {
        Self::Int(IntValue::Signed(value))
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Other(_) => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSpec {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_params: Vec<String>,
    #[serde(default)]
    pub alias: bool,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

/// Type expression as written; only struct bodies are broken down.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "expr", rename_all = "snake_case")]
pub enum TypeExpr {
    Struct {
        #[serde(default)]
        fields: Vec<FieldDecl>,
    },
    Other { text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    /// Declared names; empty for an embedded field.
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
}

/// Function or method; `body` holds the declarations local to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub body: Vec<Decl>,
}

impl TypeExpr {
    /// Local name an embedded field of this type takes: `*pkg.Name` gives `Name`.
    pub fn embedded_name(&self) -> Option<&str> {
        match self {
            Self::Other { text } => {
                let text = text.trim_start_matches('*');
                let text = text.split('[').next().unwrap_or(text);
                text.rsplit('.').next().filter(|name| !name.is_empty())
            }
            Self::Struct { .. } => None,
        }
    }
}
