//! Builders for resolved test packages.
//!
//! Every builder call records both views of a declaration: the typed
//! [`Declaration`] the declaration pass reads and the [`Decl`] syntax node the
//! comment pass reads. Each top-level declaration goes into its own group, with
//! the doc comment on the group, matching how an ungrouped declaration is
//! reported.
//!
//! # Quick Reference
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`RecordBuilder`] | Describe one record declaration and its fields |
//! | [`PackageBuilder::record`] | Add a record |
//! | [`PackageBuilder::named_type`] | Add a non-record declaration |
//! | [`PackageBuilder::constants`] | Add a const group typed as a package type |
//! | [`PackageBuilder::local_record`] | Add a record declared inside a function |

use crate::frontend::{
    ConstValue, Decl, Declaration, FieldDecl, FuncDecl, GenDecl, GenDeclKind, NativeType, Package,
    ResolvedConst, Shape, SourceFile, Spec, StructField, StructType, TypeExpr, TypeSpec, ValueName,
    ValueSpec,
};

const DEFAULT_FILE: &str = "types.go";

fn comment(text: &str) -> String {
    if text.ends_with('\n') {
        text.to_string()
    } else {
        format!("{text}\n")
    }
}

/// Type expression as it would be written for `ty`.
fn written(ty: &NativeType) -> TypeExpr {
    TypeExpr::Other {
        text: ty.to_string(),
    }
}

#[derive(Debug, Clone)]
struct FieldEntry {
    names: Vec<String>,
    ty: NativeType,
    doc: Option<String>,
    tag: String,
}

/// One record declaration.
///
/// ```rust
/// use gidl::frontend::NativeType;
/// use gidl::testkit::RecordBuilder;
///
/// let record = RecordBuilder::new("Person")
///     .doc("Person that exists.")
///     .field_with_doc("Name", NativeType::basic("string"), "Name of the person.")
///     .tagged("Age", NativeType::basic("int"), r#"json:"age""#);
/// ```
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    name: String,
    doc: Option<String>,
    type_params: Vec<String>,
    fields: Vec<FieldEntry>,
}

impl RecordBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            type_params: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Set the leading doc comment.
    pub fn doc(mut self, text: &str) -> Self {
        self.doc = Some(comment(text));
        self
    }

    /// Make the declaration generic over `params`.
    pub fn type_params(mut self, params: &[&str]) -> Self {
        self.type_params = params.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn field(self, name: &str, ty: NativeType) -> Self {
        self.push(vec![name.to_string()], ty, None, "")
    }

    pub fn field_with_doc(self, name: &str, ty: NativeType, doc: &str) -> Self {
        self.push(vec![name.to_string()], ty, Some(comment(doc)), "")
    }

    /// A field declaration naming several members, e.g. `A, B int`.
    pub fn fields(self, names: &[&str], ty: NativeType) -> Self {
        let names = names.iter().map(|n| n.to_string()).collect();
        self.push(names, ty, None, "")
    }

    pub fn tagged(self, name: &str, ty: NativeType, tag: &str) -> Self {
        self.push(vec![name.to_string()], ty, None, tag)
    }

    pub fn embedded(self, ty: NativeType) -> Self {
        self.push(Vec::new(), ty, None, "")
    }

    fn push(mut self, names: Vec<String>, ty: NativeType, doc: Option<String>, tag: &str) -> Self {
        self.fields.push(FieldEntry {
            names,
            ty,
            doc,
            tag: tag.to_string(),
        });
        self
    }

    fn declaration(&self) -> Declaration {
        let fields = self
            .fields
            .iter()
            .map(|f| StructField {
                names: f.names.clone(),
                ty: f.ty.clone(),
                tag: f.tag.clone(),
            })
            .collect();
        Declaration {
            name: self.name.clone(),
            type_params: self.type_params.clone(),
            underlying: NativeType::Struct(StructType { fields }),
        }
    }

    fn spec(&self) -> TypeSpec {
        let fields = self
            .fields
            .iter()
            .map(|f| FieldDecl {
                names: f.names.clone(),
                doc: f.doc.clone(),
                comment: None,
                tag: (!f.tag.is_empty()).then(|| f.tag.clone()),
                ty: written(&f.ty),
            })
            .collect();
        TypeSpec {
            name: self.name.clone(),
            doc: None,
            type_params: self.type_params.clone(),
            alias: false,
            ty: TypeExpr::Struct { fields },
        }
    }

    fn group(&self) -> Decl {
        Decl::Gen(GenDecl {
            kind: GenDeclKind::Type,
            doc: self.doc.clone(),
            specs: vec![Spec::Type(self.spec())],
        })
    }
}

/// Fluent builder for a resolved [`Package`].
#[derive(Debug, Clone)]
pub struct PackageBuilder {
    path: String,
    declarations: Vec<Declaration>,
    files: Vec<SourceFile>,
    current: usize,
}

impl PackageBuilder {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            declarations: Vec::new(),
            files: vec![SourceFile {
                name: DEFAULT_FILE.to_string(),
                decls: Vec::new(),
            }],
            current: 0,
        }
    }

    /// Direct following declarations into source unit `name`.
    pub fn file(mut self, name: &str) -> Self {
        match self.files.iter().position(|f| f.name == name) {
            Some(index) => self.current = index,
            None => {
                self.files.push(SourceFile {
                    name: name.to_string(),
                    decls: Vec::new(),
                });
                self.current = self.files.len() - 1;
            }
        }
        self
    }

    /// Reference to a type declared in this package.
    pub fn type_ref(&self, name: &str, underlying: Shape) -> NativeType {
        NativeType::named(self.path.clone(), name, underlying)
    }

    pub fn record(mut self, record: RecordBuilder) -> Self {
        self.declarations.push(record.declaration());
        self.files[self.current].decls.push(record.group());
        self
    }

    /// A non-record declaration such as `type PhoneType string`.
    pub fn named_type(mut self, name: &str, underlying: NativeType, doc: Option<&str>) -> Self {
        let spec = TypeSpec {
            name: name.to_string(),
            doc: None,
            type_params: Vec::new(),
            alias: false,
            ty: written(&underlying),
        };
        self.declarations.push(Declaration {
            name: name.to_string(),
            type_params: Vec::new(),
            underlying,
        });
        self.files[self.current].decls.push(Decl::Gen(GenDecl {
            kind: GenDeclKind::Type,
            doc: doc.map(comment),
            specs: vec![Spec::Type(spec)],
        }));
        self
    }

    /// A `const ( ... )` group whose members are typed as `type_name`.
    ///
    /// Each member is `(name, value, own doc)`.
    pub fn constants(
        mut self,
        type_name: &str,
        doc: Option<&str>,
        members: Vec<(&str, ConstValue, Option<&str>)>,
    ) -> Self {
        let ty = self.type_ref(type_name, Shape::Basic);
        let specs = members
            .into_iter()
            .map(|(name, value, member_doc)| {
                Spec::Value(ValueSpec {
                    names: vec![ValueName {
                        name: name.to_string(),
                        resolved: Some(ResolvedConst {
                            ty: ty.clone(),
                            value,
                        }),
                    }],
                    doc: member_doc.map(comment),
                    comment: None,
                })
            })
            .collect();
        self.files[self.current].decls.push(Decl::Gen(GenDecl {
            kind: GenDeclKind::Const,
            doc: doc.map(comment),
            specs,
        }));
        self
    }

    /// A record declared inside function `func`; only the syntax tree sees it.
    pub fn local_record(mut self, func: &str, record: RecordBuilder) -> Self {
        self.files[self.current].decls.push(Decl::Func(FuncDecl {
            name: func.to_string(),
            receiver: None,
            doc: None,
            body: vec![record.group()],
        }));
        self
    }

    pub fn build(self) -> Package {
        Package {
            path: self.path,
            declarations: self.declarations,
            files: self.files,
        }
    }
}
