//! Syntax pass: comments and enum members for types the declaration pass found.
//!
//! The walker keeps two pieces of running state while visiting a source unit
//! in declaration order: the enclosing type whose fields are being visited,
//! and the leading comment of the current declaration group. Function bodies
//! are never entered, so local declarations cannot be mistaken for package
//! level ones.
//!
//! Comment attachment overwrites, so re-running the pass over the same model
//! leaves comments unchanged. Enum members are appended and must only be
//! collected once per model.

use tracing::{debug, info, info_span};

use super::declarations::{field_name, Skipped};
use crate::common::{is_exported, synopsis};
use crate::frontend::visit::{walk_gen_decl, Visit};
use crate::frontend::{
    ConstValue, FieldDecl, FuncDecl, GenDecl, GenDeclKind, NativeType, Package, SourceFile,
    TypeSpec, ValueSpec,
};
use crate::model::{EnumLiteral, Model};

pub struct SyntaxWalker<'m> {
    package: &'m str,
    model: &'m mut Model,
    skipped: &'m Skipped,
    /// ID of the type whose fields are being visited.
    current_type: Option<String>,
    /// Leading comment of the current declaration group.
    group_comment: Option<String>,
    group_kind: Option<GenDeclKind>,
    enum_values: usize,
}

impl<'m> SyntaxWalker<'m> {
    pub fn new(package: &'m str, model: &'m mut Model, skipped: &'m Skipped) -> Self {
        Self {
            package,
            model,
            skipped,
            current_type: None,
            group_comment: None,
            group_kind: None,
            enum_values: 0,
        }
    }

    fn qualify(&self, name: &str) -> String {
        format!("{}.{name}", self.package)
    }

    /// Model type ID a constant of type `ty` would belong to.
    fn enum_type_id(&self, ty: &NativeType) -> Option<String> {
        match ty {
            NativeType::Named(named) => Some(named.qualified_name(self.package)),
            _ => None,
        }
    }

    fn add_constant(&mut self, name: &str, ty: &NativeType, value: &ConstValue, comment: &str) {
        let Some(type_id) = self.enum_type_id(ty) else {
            return;
        };
        if !self.model.contains(&type_id) {
            debug!("Constant {} of type {} has no model type, dropped", name, type_id);
            return;
        }

        let literal = match value {
            ConstValue::String(s) => EnumLiteral::String(s.clone()),
            ConstValue::Int(int) => match int.as_i64() {
                Some(i) => EnumLiteral::Int(i),
                None => {
                    self.model.warn(format_args!(
                        "{type_id}: constant {name} has unsupported out-of-range integer value, skipped"
                    ));
                    return;
                }
            },
            other => {
                self.model.warn(format_args!(
                    "{type_id}: constant {name} has unsupported {} value, skipped",
                    other.kind_name()
                ));
                return;
            }
        };
        self.model.add_enum_value(&type_id, literal, &synopsis(comment));
        self.enum_values += 1;
    }
}

fn non_empty(comment: Option<&String>) -> Option<&str> {
    comment.map(String::as_str).filter(|c| !c.trim().is_empty())
}

impl<'ast> Visit<'ast> for SyntaxWalker<'_> {
    fn visit_gen_decl(&mut self, decl: &'ast GenDecl) {
        self.group_comment = decl.doc.clone();
        self.group_kind = Some(decl.kind);
        walk_gen_decl(self, decl);
        self.group_comment = None;
        self.group_kind = None;
    }

    fn visit_func_decl(&mut self, func: &'ast FuncDecl) {
        debug!("Skipping body of {}", func.name);
    }

    fn visit_type_spec(&mut self, spec: &'ast TypeSpec) {
        self.current_type = None;
        if !is_exported(&spec.name) {
            return;
        }

        let type_id = self.qualify(&spec.name);
        if self.skipped.contains_type(&type_id) {
            return;
        }
        let comment = non_empty(spec.doc.as_ref()).or(non_empty(self.group_comment.as_ref()));
        if let Some(comment) = comment {
            let comment = comment.to_string();
            self.model.set_type_comment(&type_id, &comment);
        }

        self.current_type = Some(type_id);
        self.visit_type_expr(&spec.ty);
        self.current_type = None;
    }

    fn visit_field(&mut self, field: &'ast FieldDecl) {
        let Some(type_id) = self.current_type.clone() else {
            return;
        };
        let Some(name) = field_name(&field.names, field.ty.embedded_name()) else {
            return;
        };
        if self.skipped.contains_field(&format!("{type_id}.{name}")) {
            return;
        }
        if let Some(comment) = non_empty(field.doc.as_ref()) {
            self.model.set_field_comment(&type_id, &name, comment);
        }
    }

    fn visit_value_spec(&mut self, spec: &'ast ValueSpec) {
        if self.group_kind != Some(GenDeclKind::Const) {
            return;
        }
        let comment = non_empty(spec.doc.as_ref())
            .or(non_empty(spec.comment.as_ref()))
            .or(non_empty(self.group_comment.as_ref()))
            .unwrap_or_default()
            .to_string();

        for value in &spec.names {
            if value.name == "_" {
                continue;
            }
            let Some(resolved) = &value.resolved else {
                debug!("Constant {} has no resolved value", value.name);
                continue;
            };
            self.add_constant(&value.name, &resolved.ty, &resolved.value, &comment);
        }
    }
}

/// Runs the syntax pass over every source unit, sorted by file name.
pub fn walk_syntax(package: &Package, model: &mut Model, skipped: &Skipped) {
    let _span = info_span!("syntax", package = %package.path).entered();

    let mut files: Vec<&SourceFile> = package.files.iter().collect();
    files.sort_by(|a, b| a.name.cmp(&b.name));

    let mut walker = SyntaxWalker::new(&package.path, model, skipped);
    for file in files {
        debug!("Walking {}", file.name);
        walker.visit_file(file);
    }
    info!("Syntax pass attached {} enum values", walker.enum_values);
}
