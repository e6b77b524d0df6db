//! Properties assigned onto function declarations.
//!
//! `function f() {}  f.count = 0;` declares `f` as both a function and a
//! namespace; the declaration file merges the two:
//!
//! ```text
//! declare function f(): void;
//! declare namespace f {
//!     var count: number;
//! }
//! ```

use dtsz_ast::node_utils::{
    get_declaration_name, identifier_text, is_identifier_text, is_reserved_word, modifiers_of,
};
use dtsz_ast::{FunctionData, ModifierFlags, NodeData, NodeFlags, NodeIndex, NodeList};
use smallvec::smallvec;
use tracing::debug;

use super::{DeclarationTransformer, StatementReplacement, TypeRequest};
use crate::diagnostics::DiagnosticContext;
use crate::error::EmitError;
use crate::resolver::ExpandoProperty;
use crate::synthesizer::TypeSynthesis;
use crate::tracker::SymbolTracker;

impl DeclarationTransformer<'_> {
    /// Only one declaration of an overloaded function carries the namespace:
    /// the implementation, or the last signature when there is none.
    pub(super) fn should_emit_function_properties(&self, statement: NodeIndex, function: &FunctionData) -> bool {
        if function.body.is_some() {
            return true;
        }
        let Some(name) = identifier_text(self.arena, function.name) else {
            return true;
        };
        let Some(statements) = self.container_statements() else {
            return true;
        };
        let last_signature = statements.iter().rev().find(|&candidate| {
            matches!(
                self.arena.data(candidate),
                Some(NodeData::FunctionDeclaration(f))
                    if f.body.is_none() && identifier_text(self.arena, f.name) == Some(name)
            )
        });
        last_signature.is_none_or(|last| last == statement)
    }

    fn container_statements(&self) -> Option<&NodeList> {
        match self.arena.data(self.container)? {
            NodeData::SourceFile(file) => Some(&file.statements),
            NodeData::ModuleDeclaration(module) => match self.arena.data(module.body)? {
                NodeData::ModuleBlock { statements } => Some(statements),
                _ => None,
            },
            _ => None,
        }
    }

    /// The cleaned function followed by a namespace declaring each assigned
    /// property. A default-exported function is split into a local
    /// declaration, its namespace, and `export default f;`.
    pub(super) fn transform_expando_function(
        &mut self,
        statement: NodeIndex,
        clean: NodeIndex,
    ) -> Result<StatementReplacement, EmitError> {
        let Some(function_name) = identifier_text(self.arena, get_declaration_name(self.arena, statement))
            .map(str::to_owned)
        else {
            return Ok(smallvec![clean]);
        };
        let properties = self
            .resolver
            .get_properties_of_container_function(self.arena, statement);
        debug!(function = %function_name, properties = properties.len(), "expando namespace");

        let mut declarations = Vec::with_capacity(properties.len() + 1);
        let mut export_mappings = Vec::new();
        for property in &properties {
            let type_node = self.expando_property_type(statement, property)?;
            let (local_name, aliased) = self.expando_local_name(&property.name);
            if aliased {
                export_mappings.push(
                    self.arena
                        .create_export_specifier(Some(&local_name), &property.name),
                );
            }
            let id = self.arena.create_identifier(&local_name);
            let declaration = self.arena.create_variable_declaration(id, type_node, NodeIndex::NONE);
            declarations.push((declaration, aliased));
        }

        let has_mappings = !export_mappings.is_empty();
        let mut statements: Vec<NodeIndex> = declarations
            .into_iter()
            .map(|(declaration, aliased)| {
                let modifiers = if has_mappings && !aliased {
                    ModifierFlags::EXPORT
                } else {
                    ModifierFlags::empty()
                };
                self.arena
                    .create_variable_statement(modifiers, NodeFlags::empty(), vec![declaration])
            })
            .collect();
        if has_mappings {
            statements.push(self.arena.create_named_export_declaration(export_mappings));
        }

        let namespace_modifiers = self.ensure_modifiers(statement);
        let block = self.arena.create_module_block(statements);
        let namespace_name = self.arena.create_identifier(&function_name);
        let namespace = self.arena.create_module_declaration(
            namespace_modifiers,
            namespace_name,
            block,
            NodeFlags::NAMESPACE,
        );

        let clean_modifiers = modifiers_of(self.arena, clean);
        if !clean_modifiers.contains(ModifierFlags::DEFAULT) {
            return Ok(smallvec![clean, namespace]);
        }
        let local_modifiers = (clean_modifiers - ModifierFlags::EXPORT_DEFAULT) | ModifierFlags::AMBIENT;
        let function = self.with_modifiers(clean, local_modifiers);
        let namespace = self.with_modifiers(namespace, local_modifiers);
        let default_name = self.arena.create_identifier(&function_name);
        let export_default = self.arena.create_export_assignment(false, default_name);
        if self.container == self.current_file {
            self.result_has_external_module_indicator = true;
        }
        self.result_has_scope_marker = true;
        Ok(smallvec![function, namespace, export_default])
    }

    /// Declared type of one assigned property, seen from inside the function.
    fn expando_property_type(
        &mut self,
        function: NodeIndex,
        property: &ExpandoProperty,
    ) -> Result<NodeIndex, EmitError> {
        let value = property.value_declaration;
        self.with_enclosing(function, |this| {
            this.with_diagnostic_context(DiagnosticContext::Variable(value), value, |this| {
                // Isolated declarations cannot see these assignments at all.
                this.tracker.report_inference_fallback(this.arena, value);
                match this.synthesizer().type_of_declaration(value, false)? {
                    TypeSynthesis::Node(type_node) => Ok(type_node),
                    TypeSynthesis::NeedsInference | TypeSynthesis::Reported => Ok(this.semantic_type(
                        value,
                        TypeRequest::Declaration {
                            preserve_literals: false,
                        },
                    )),
                }
            })
        })
    }

    /// Local binding for a property name. Reserved words and names that are
    /// not identifiers get a generated local exported under the real name.
    fn expando_local_name(&mut self, name: &str) -> (String, bool) {
        if is_reserved_word(name) {
            (self.unique_name(&format!("_{name}")), true)
        } else if !is_identifier_text(name) {
            (self.temp_name(), true)
        } else {
            (name.to_string(), false)
        }
    }
}
