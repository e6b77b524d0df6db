//! Statement lists and the late-painting worklist.

use dtsz_ast::node_utils::{collect_binding_identifiers, has_modifier, modifiers_of};
use dtsz_ast::{ModifierFlags, NodeData, NodeFlags, NodeIndex, NodeList};
use tracing::{debug, trace};

use super::{DeclarationTransformer, StatementOwner};
use crate::diagnostics::DiagnosticContext;
use crate::error::EmitError;
use crate::synthesizer::{InferenceMode, TypeSynthesis};
use crate::tracker::SymbolTracker;

impl DeclarationTransformer<'_> {
    /// Transform the statements of the current container.
    ///
    /// Declarations are transformed immediately and their results recorded;
    /// the list keeps the original statement as a placeholder until the
    /// worklist drains and the recorded results are spliced in.
    pub(super) fn visit_statement_list(
        &mut self,
        statements: &NodeList,
    ) -> Result<Vec<NodeIndex>, EmitError> {
        let mut visited = Vec::with_capacity(statements.len());
        for statement in statements.iter() {
            self.visit_declaration_statement(statement, &mut visited)?;
        }
        self.drain_late_statements()?;
        Ok(self.substitute_late_statements(visited))
    }

    fn visit_declaration_statement(
        &mut self,
        statement: NodeIndex,
        out: &mut Vec<NodeIndex>,
    ) -> Result<(), EmitError> {
        let Some(data) = self.arena.data(statement).cloned() else {
            return Ok(());
        };
        if !is_preserved_declaration_statement(&data) {
            trace!(statement = statement.0, kind = data.kind_name(), "statement dropped");
            return Ok(());
        }
        if self.should_strip_internal(statement) {
            trace!(statement = statement.0, "internal statement stripped");
            return Ok(());
        }

        let at_file_level = self.container == self.current_file;
        match data {
            NodeData::ExportDeclaration(export) => {
                if at_file_level {
                    self.result_has_external_module_indicator = true;
                }
                self.result_has_scope_marker = true;
                let module_specifier = self.rewrite_module_specifier(statement, export.module_specifier);
                let data = NodeData::ExportDeclaration(dtsz_ast::ExportData {
                    module_specifier,
                    ..export
                });
                out.push(self.arena.update_if_changed(statement, data));
            }
            NodeData::ExportAssignment {
                is_export_equals,
                expression,
            } => {
                if at_file_level {
                    self.result_has_external_module_indicator = true;
                }
                self.result_has_scope_marker = true;
                if matches!(self.arena.data(expression), Some(NodeData::Identifier { .. })) {
                    out.push(statement);
                } else {
                    out.extend(self.transform_export_assignment(statement, is_export_equals, expression));
                }
            }
            _ => {
                self.owners.insert(
                    statement,
                    StatementOwner {
                        container: self.container,
                        needs_declare: self.needs_declare,
                    },
                );
                let result = self.transform_top_level_declaration(statement)?;
                self.replacements.insert(statement, result);
                out.push(statement);
            }
        }
        Ok(())
    }

    /// `export default <expr>` becomes `declare const _default: T;` followed
    /// by `export default _default;`.
    fn transform_export_assignment(
        &mut self,
        statement: NodeIndex,
        is_export_equals: bool,
        expression: NodeIndex,
    ) -> [NodeIndex; 2] {
        let name = self.unique_name("_default");
        let type_node = self.with_diagnostic_context(
            DiagnosticContext::DefaultExport(statement),
            statement,
            |this| this.default_export_type(statement, expression),
        );
        let id = self.arena.create_identifier(&name);
        let declaration = self.arena.create_variable_declaration(id, type_node, NodeIndex::NONE);
        let modifiers = if self.needs_declare {
            ModifierFlags::AMBIENT
        } else {
            ModifierFlags::empty()
        };
        let variable = self
            .arena
            .create_variable_statement(modifiers, NodeFlags::CONST, vec![declaration]);
        let export_name = self.arena.create_identifier(&name);
        let export = self.arena.update(
            statement,
            NodeData::ExportAssignment {
                is_export_equals,
                expression: export_name,
            },
        );
        [variable, export]
    }

    fn default_export_type(&mut self, statement: NodeIndex, expression: NodeIndex) -> NodeIndex {
        match self
            .synthesizer()
            .type_of_expression(expression, InferenceMode::PreservePrimitive)
        {
            TypeSynthesis::Node(type_node) => return type_node,
            TypeSynthesis::NeedsInference => {
                self.tracker.report_inference_fallback(self.arena, statement);
            }
            TypeSynthesis::Reported => {}
        }
        self.semantic_type_of_expression(expression)
    }

    /// Re-transform statements painted visible since their first visit.
    #[tracing::instrument(level = "debug", skip(self))]
    fn drain_late_statements(&mut self) -> Result<(), EmitError> {
        while let Some(statement) = self.tracker.pop_late_marked() {
            self.late_iterations += 1;
            if self.late_iterations > self.late_limit {
                return Err(EmitError::LatePaintingLimitExceeded {
                    limit: self.late_limit,
                });
            }
            let Some(data) = self.arena.data(statement) else {
                continue;
            };
            if !is_late_paintable_statement(data) {
                return Err(EmitError::NotLatePaintable {
                    node: statement,
                    kind: data.kind_name(),
                });
            }
            let Some(owner) = self.owners.get(&statement).copied() else {
                // Not reached yet; its first visit sees the painting.
                trace!(statement = statement.0, "painted ahead of first visit");
                continue;
            };
            debug!(statement = statement.0, "late painting pass");
            let result = self.with_container(owner.container, owner.needs_declare, |this| {
                this.transform_top_level_declaration(statement)
            })?;
            self.replacements.insert(statement, result);
        }
        Ok(())
    }

    fn substitute_late_statements(&mut self, statements: Vec<NodeIndex>) -> Vec<NodeIndex> {
        let at_file_level = self.container == self.current_file;
        let mut out = Vec::with_capacity(statements.len());
        for statement in statements {
            let Some(result) = self.replacements.remove(&statement) else {
                out.push(statement);
                continue;
            };
            if result.iter().any(|&node| self.needs_scope_marker(node)) {
                self.needs_scope_fix_marker = true;
            }
            if at_file_level && result.iter().any(|&node| self.is_external_module_indicator(node)) {
                self.result_has_external_module_indicator = true;
            }
            out.extend(result);
        }
        out
    }

    /// Inside a namespace body: with no export statement present, either
    /// append `export {}` (some members are not exported) or drop the
    /// redundant `export` modifiers.
    pub(super) fn fix_namespace_scope(
        &mut self,
        statements: Vec<NodeIndex>,
        is_ambient: bool,
        is_global: bool,
    ) -> Vec<NodeIndex> {
        if is_ambient {
            self.needs_scope_fix_marker = false;
        }
        if is_global
            || self.result_has_scope_marker
            || statements.iter().any(|&s| self.is_scope_marker(s))
        {
            return statements;
        }
        if self.needs_scope_fix_marker {
            let mut statements = statements;
            statements.push(self.arena.create_empty_export());
            return statements;
        }
        statements
            .into_iter()
            .map(|statement| self.strip_export_modifier(statement))
            .collect()
    }

    fn strip_export_modifier(&mut self, statement: NodeIndex) -> NodeIndex {
        if matches!(
            self.arena.data(statement),
            Some(NodeData::ImportEqualsDeclaration { .. })
        ) || has_modifier(self.arena, statement, ModifierFlags::DEFAULT)
        {
            return statement;
        }
        let flags = modifiers_of(self.arena, statement);
        if !flags.contains(ModifierFlags::EXPORT) {
            return statement;
        }
        self.with_modifiers(statement, flags - ModifierFlags::EXPORT)
    }

    fn is_scope_marker(&self, statement: NodeIndex) -> bool {
        matches!(
            self.arena.data(statement),
            Some(NodeData::ExportAssignment { .. } | NodeData::ExportDeclaration(_))
        )
    }

    /// A statement that would be implicitly exported in an ambient module
    /// without an explicit scope marker.
    fn needs_scope_marker(&self, statement: NodeIndex) -> bool {
        !self.is_any_import_or_reexport(statement)
            && !matches!(self.arena.data(statement), Some(NodeData::ExportAssignment { .. }))
            && !has_modifier(self.arena, statement, ModifierFlags::EXPORT)
            && !self.is_ambient_module(statement)
    }

    fn is_external_module_indicator(&self, statement: NodeIndex) -> bool {
        self.is_any_import_or_reexport(statement)
            || matches!(self.arena.data(statement), Some(NodeData::ExportAssignment { .. }))
            || has_modifier(self.arena, statement, ModifierFlags::EXPORT)
    }

    fn is_any_import_or_reexport(&self, statement: NodeIndex) -> bool {
        matches!(
            self.arena.data(statement),
            Some(
                NodeData::ImportDeclaration(_)
                    | NodeData::ImportEqualsDeclaration { .. }
                    | NodeData::ExportDeclaration(_)
            )
        )
    }

    fn is_ambient_module(&self, statement: NodeIndex) -> bool {
        let Some(NodeData::ModuleDeclaration(module)) = self.arena.data(statement) else {
            return false;
        };
        self.arena
            .flags(statement)
            .contains(NodeFlags::GLOBAL_AUGMENTATION)
            || matches!(self.arena.data(module.name), Some(NodeData::StringLiteral { .. }))
    }

    /// Upper bound on painting passes for a file: every declaration that can
    /// be painted queues its statement at most once.
    pub(super) fn count_late_paintable(&self, statements: &NodeList) -> usize {
        statements
            .iter()
            .map(|statement| self.count_paintable_declarations(statement))
            .sum()
    }

    fn count_paintable_declarations(&self, statement: NodeIndex) -> usize {
        match self.arena.data(statement) {
            Some(NodeData::ImportDeclaration(import)) => {
                let Some(NodeData::ImportClause {
                    name,
                    named_bindings,
                    ..
                }) = self.arena.data(import.import_clause)
                else {
                    return 1;
                };
                let bindings = match self.arena.data(*named_bindings) {
                    Some(NodeData::NamedImports { elements }) => elements.len(),
                    Some(_) => 1,
                    None => 0,
                };
                1 + usize::from(name.is_some()) + bindings
            }
            Some(NodeData::VariableStatement {
                declaration_list, ..
            }) => {
                let Some(NodeData::VariableDeclarationList { declarations }) =
                    self.arena.data(*declaration_list)
                else {
                    return 1;
                };
                let mut names = Vec::new();
                for declaration in declarations.iter() {
                    if let Some(NodeData::VariableDeclaration { name, .. }) = self.arena.data(declaration) {
                        collect_binding_identifiers(self.arena, *name, &mut names);
                    }
                }
                // Binding elements are painted individually.
                declarations.len() + names.len()
            }
            Some(NodeData::ModuleDeclaration(module)) => {
                1 + match self.arena.data(module.body) {
                    Some(NodeData::ModuleBlock { statements }) => self.count_late_paintable(statements),
                    Some(NodeData::ModuleDeclaration(_)) => self.count_paintable_declarations(module.body),
                    _ => 0,
                }
            }
            Some(data) if is_late_paintable_statement(data) => 1,
            _ => 0,
        }
    }
}

fn is_preserved_declaration_statement(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::ExportDeclaration(_) | NodeData::ExportAssignment { .. }
    ) || is_late_paintable_statement(data)
}

/// Statements that carry a visibility decision and can be painted later.
pub(crate) fn is_late_paintable_statement(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::ImportDeclaration(_)
            | NodeData::ImportEqualsDeclaration { .. }
            | NodeData::VariableStatement { .. }
            | NodeData::ClassDeclaration(_)
            | NodeData::FunctionDeclaration(_)
            | NodeData::ModuleDeclaration(_)
            | NodeData::TypeAliasDeclaration(_)
            | NodeData::InterfaceDeclaration(_)
            | NodeData::EnumDeclaration(_)
    )
}
