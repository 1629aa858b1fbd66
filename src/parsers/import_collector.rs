//! Import target extraction using the oxc AST visitor

use oxc_ast::ast::*;
use oxc_ast_visit::{walk, Visit};

/// Visitor that records every statically-known import target in document order
///
/// Covers `import`, `export ... from`, `export * from`, `import()`,
/// `require()` and `import x = require()`. Computed sources are skipped.
#[derive(Debug, Default)]
pub struct ImportCollector {
    targets: Vec<String>,
}

impl ImportCollector {
    /// Walk a program and return its import targets
    pub fn collect(program: &Program<'_>) -> Vec<String> {
        let mut collector = Self::default();
        collector.visit_program(program);
        collector.targets
    }

    fn push(&mut self, target: &str) {
        if !target.is_empty() {
            self.targets.push(target.to_string());
        }
    }
}

/// String value of a literal or substitution-free template
fn static_string<'s>(expr: &'s Expression<'_>) -> Option<&'s str> {
    match expr {
        Expression::StringLiteral(lit) => Some(lit.value.as_str()),
        Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => {
            tpl.quasis.first().and_then(|quasi| quasi.value.cooked.as_ref()).map(|atom| atom.as_str())
        }
        _ => None,
    }
}

impl<'a> Visit<'a> for ImportCollector {
    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        self.push(decl.source.value.as_str());
        walk::walk_import_declaration(self, decl);
    }

    fn visit_export_named_declaration(&mut self, decl: &ExportNamedDeclaration<'a>) {
        if let Some(source) = &decl.source {
            self.push(source.value.as_str());
        }
        walk::walk_export_named_declaration(self, decl);
    }

    fn visit_export_all_declaration(&mut self, decl: &ExportAllDeclaration<'a>) {
        self.push(decl.source.value.as_str());
        walk::walk_export_all_declaration(self, decl);
    }

    fn visit_import_expression(&mut self, expr: &ImportExpression<'a>) {
        if let Some(target) = static_string(&expr.source) {
            self.push(target);
        }
        walk::walk_import_expression(self, expr);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        let is_require = matches!(&call.callee, Expression::Identifier(ident) if ident.name.as_str() == "require");

        if is_require {
            if let Some(target) = call.arguments.first().and_then(Argument::as_expression).and_then(static_string) {
                self.push(target);
            }
        }
        walk::walk_call_expression(self, call);
    }

    fn visit_ts_import_equals_declaration(&mut self, decl: &TSImportEqualsDeclaration<'a>) {
        if let TSModuleReference::ExternalModuleReference(reference) = &decl.module_reference {
            self.push(reference.expression.value.as_str());
        }
        walk::walk_ts_import_equals_declaration(self, decl);
    }
}
