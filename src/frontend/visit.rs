//! Syntax tree traversal.
//!
//! Each `visit_*` method defaults to the matching `walk_*` function, which
//! descends into the node's children. Implementors override the methods for
//! the nodes they care about and decide whether to keep descending.

use super::syntax::{
    Decl, FieldDecl, FuncDecl, GenDecl, ImportSpec, SourceFile, Spec, TypeExpr, TypeSpec,
    ValueSpec,
};

pub trait Visit<'ast> {
    fn visit_file(&mut self, file: &'ast SourceFile) {
        walk_file(self, file);
    }

    fn visit_decl(&mut self, decl: &'ast Decl) {
        walk_decl(self, decl);
    }

    fn visit_gen_decl(&mut self, decl: &'ast GenDecl) {
        walk_gen_decl(self, decl);
    }

    fn visit_func_decl(&mut self, func: &'ast FuncDecl) {
        walk_func_decl(self, func);
    }

    fn visit_spec(&mut self, spec: &'ast Spec) {
        walk_spec(self, spec);
    }

    fn visit_import_spec(&mut self, _spec: &'ast ImportSpec) {}

    fn visit_value_spec(&mut self, _spec: &'ast ValueSpec) {}

    fn visit_type_spec(&mut self, spec: &'ast TypeSpec) {
        walk_type_spec(self, spec);
    }

    fn visit_type_expr(&mut self, expr: &'ast TypeExpr) {
        walk_type_expr(self, expr);
    }

    fn visit_field(&mut self, field: &'ast FieldDecl) {
        walk_field(self, field);
    }
}

pub fn walk_file<'ast, V>(v: &mut V, file: &'ast SourceFile)
where
    V: Visit<'ast> + ?Sized,
{
    for decl in &file.decls {
        v.visit_decl(decl);
    }
}

pub fn walk_decl<'ast, V>(v: &mut V, decl: &'ast Decl)
where
    V: Visit<'ast> + ?Sized,
{
    match decl {
        Decl::Gen(group) => v.visit_gen_decl(group),
        Decl::Func(func) => v.visit_func_decl(func),
    }
}

pub fn walk_gen_decl<'ast, V>(v: &mut V, decl: &'ast GenDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for spec in &decl.specs {
        v.visit_spec(spec);
    }
}

pub fn walk_func_decl<'ast, V>(v: &mut V, func: &'ast FuncDecl)
where
    V: Visit<'ast> + ?Sized,
{
    for decl in &func.body {
        v.visit_decl(decl);
    }
}

pub fn walk_spec<'ast, V>(v: &mut V, spec: &'ast Spec)
where
    V: Visit<'ast> + ?Sized,
{
    match spec {
        Spec::Import(import) => v.visit_import_spec(import),
        Spec::Value(value) => v.visit_value_spec(value),
        Spec::Type(ty) => v.visit_type_spec(ty),
    }
}

pub fn walk_type_spec<'ast, V>(v: &mut V, spec: &'ast TypeSpec)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_type_expr(&spec.ty);
}

pub fn walk_type_expr<'ast, V>(v: &mut V, expr: &'ast TypeExpr)
where
    V: Visit<'ast> + ?Sized,
{
    if let TypeExpr::Struct { fields } = expr {
        for field in fields {
            v.visit_field(field);
        }
    }
}

pub fn walk_field<'ast, V>(v: &mut V, field: &'ast FieldDecl)
where
    V: Visit<'ast> + ?Sized,
{
    v.visit_type_expr(&field.ty);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::syntax::GenDeclKind;

    #[derive(Default)]
    struct FieldCounter {
        fields: Vec<String>,
    }

    impl<'ast> Visit<'ast> for FieldCounter {
        fn visit_field(&mut self, field: &'ast FieldDecl) {
            self.fields.extend(field.names.iter().cloned());
            walk_field(self, field);
        }
    }

    fn field(name: &str, ty: TypeExpr) -> FieldDecl {
        FieldDecl {
            names: vec![name.to_string()],
            doc: None,
            comment: None,
            tag: None,
            ty,
        }
    }

    fn struct_decl(name: &str, fields: Vec<FieldDecl>) -> Decl {
        Decl::Gen(GenDecl {
            kind: GenDeclKind::Type,
            doc: None,
            specs: vec![Spec::Type(TypeSpec {
                name: name.to_string(),
                doc: None,
                type_params: vec![],
                alias: false,
                ty: TypeExpr::Struct { fields },
            })],
        })
    }

    #[test]
    fn default_walk_reaches_nested_and_local_fields() {
        let text = |t: &str| TypeExpr::Other { text: t.into() };
        let file = SourceFile {
            name: "a.go".into(),
            decls: vec![
                struct_decl(
                    "Outer",
                    vec![
                        field("A", text("int")),
                        field(
                            "Inner",
                            TypeExpr::Struct {
                                fields: vec![field("B", text("string"))],
                            },
                        ),
                    ],
                ),
                Decl::Func(FuncDecl {
                    name: "f".into(),
                    receiver: None,
                    doc: None,
                    body: vec![struct_decl("local", vec![field("C", text("int"))])],
                }),
            ],
        };

        let mut counter = FieldCounter::default();
        counter.visit_file(&file);
        assert_eq!(counter.fields, vec!["A", "Inner", "B", "C"]);
    }
}
