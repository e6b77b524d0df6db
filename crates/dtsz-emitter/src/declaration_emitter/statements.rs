//! Top-level declaration forms: imports, functions, interfaces, type aliases,
//! enums, namespaces and variable statements.

use dtsz_ast::node_utils::is_string_or_numeric_literal;
use dtsz_ast::{
    EnumData, FunctionData, ImportData, InterfaceData, ModifierFlags, ModuleData, NodeData,
    NodeFlags, NodeIndex, NodeList, TypeAliasData,
};
use smallvec::{SmallVec, smallvec};
use tracing::trace;

use super::{DeclarationTransformer, StatementReplacement, TypeRequest};
use crate::diagnostics::DiagnosticContext;
use crate::enum_evaluator::EnumEvaluator;
use crate::error::EmitError;
use crate::resolver::ConstantValue;
use crate::tracker::SymbolTracker;

impl DeclarationTransformer<'_> {
    /// Final form of one declaration statement; empty when elided.
    pub(super) fn transform_top_level_declaration(
        &mut self,
        statement: NodeIndex,
    ) -> Result<StatementReplacement, EmitError> {
        self.tracker.remove_late_marked(statement);
        if self.should_strip_internal(statement) {
            return Ok(SmallVec::new());
        }
        let Some(data) = self.arena.data(statement).cloned() else {
            return Ok(SmallVec::new());
        };

        match data {
            NodeData::ImportEqualsDeclaration {
                modifiers,
                is_type_only,
                name,
                module_reference,
            } => {
                return Ok(self
                    .transform_import_equals(statement, modifiers, is_type_only, name, module_reference)
                    .into_iter()
                    .collect());
            }
            NodeData::ImportDeclaration(import) => {
                return Ok(self
                    .transform_import_declaration(statement, import)
                    .into_iter()
                    .collect());
            }
            NodeData::VariableStatement {
                declaration_list, ..
            } => return self.transform_variable_statement(statement, declaration_list),
            _ => {}
        }

        if !self.is_visible(statement) {
            trace!(statement = statement.0, "declaration not visible, elided");
            return Ok(SmallVec::new());
        }

        match data {
            NodeData::FunctionDeclaration(function) => {
                self.transform_function_declaration(statement, function)
            }
            NodeData::ClassDeclaration(class) => self.transform_class_declaration(statement, class),
            NodeData::InterfaceDeclaration(interface) => {
                Ok(smallvec![self.transform_interface_declaration(statement, interface)?])
            }
            NodeData::TypeAliasDeclaration(alias) => {
                Ok(smallvec![self.transform_type_alias_declaration(statement, alias)])
            }
            NodeData::EnumDeclaration(declaration) => {
                Ok(smallvec![self.transform_enum_declaration(statement, declaration)])
            }
            NodeData::ModuleDeclaration(module) => {
                Ok(smallvec![self.transform_module_declaration(statement, module)?])
            }
            other => Err(EmitError::UnsupportedDeclaration {
                node: statement,
                kind: other.kind_name(),
            }),
        }
    }

    // =========================================================================
    // Imports
    // =========================================================================

    fn transform_import_equals(
        &mut self,
        statement: NodeIndex,
        modifiers: ModifierFlags,
        is_type_only: bool,
        name: NodeIndex,
        module_reference: NodeIndex,
    ) -> Option<NodeIndex> {
        if !self.is_visible(statement) {
            return None;
        }
        if let Some(NodeData::ExternalModuleReference { expression }) =
            self.arena.data(module_reference).cloned()
        {
            let rewritten = self.rewrite_module_specifier(statement, expression);
            if rewritten == expression {
                return Some(statement);
            }
            let reference = self.arena.update(
                module_reference,
                NodeData::ExternalModuleReference {
                    expression: rewritten,
                },
            );
            return Some(self.arena.update(
                statement,
                NodeData::ImportEqualsDeclaration {
                    modifiers,
                    is_type_only,
                    name,
                    module_reference: reference,
                },
            ));
        }
        self.with_diagnostic_context(DiagnosticContext::ImportEquals(statement), statement, |this| {
            this.check_entity_name_visibility(module_reference);
        });
        Some(statement)
    }

    /// Keep the visible parts of an import clause; elide the import when
    /// nothing it binds is visible. Side-effect imports are always kept.
    fn transform_import_declaration(
        &mut self,
        statement: NodeIndex,
        import: ImportData,
    ) -> Option<NodeIndex> {
        let Some(NodeData::ImportClause {
            is_type_only,
            name,
            named_bindings,
        }) = self.arena.data(import.import_clause).cloned()
        else {
            let module_specifier = self.rewrite_module_specifier(statement, import.module_specifier);
            return Some(self.arena.update_if_changed(
                statement,
                NodeData::ImportDeclaration(ImportData {
                    module_specifier,
                    ..import
                }),
            ));
        };

        let default_binding = if name.is_some() && self.is_visible(import.import_clause) {
            name
        } else {
            NodeIndex::NONE
        };
        let bindings = match self.arena.data(named_bindings).cloned() {
            None => NodeIndex::NONE,
            Some(NodeData::NamespaceImport { .. }) => {
                if self.is_visible(named_bindings) {
                    named_bindings
                } else {
                    NodeIndex::NONE
                }
            }
            Some(NodeData::NamedImports { elements }) => {
                let visible: Vec<NodeIndex> = elements.iter().filter(|&e| self.is_visible(e)).collect();
                if visible.is_empty() {
                    NodeIndex::NONE
                } else {
                    self.arena.update_if_changed(
                        named_bindings,
                        NodeData::NamedImports {
                            elements: visible.into(),
                        },
                    )
                }
            }
            Some(_) => named_bindings,
        };
        if default_binding.is_none() && bindings.is_none() {
            trace!(statement = statement.0, "import has no visible bindings, elided");
            return None;
        }

        let import_clause = self.arena.update_if_changed(
            import.import_clause,
            NodeData::ImportClause {
                is_type_only,
                name: default_binding,
                named_bindings: bindings,
            },
        );
        let module_specifier = self.rewrite_module_specifier(statement, import.module_specifier);
        Some(self.arena.update_if_changed(
            statement,
            NodeData::ImportDeclaration(ImportData {
                modifiers: import.modifiers,
                import_clause,
                module_specifier,
            }),
        ))
    }

    // =========================================================================
    // Functions
    // =========================================================================

    fn transform_function_declaration(
        &mut self,
        statement: NodeIndex,
        function: FunctionData,
    ) -> Result<StatementReplacement, EmitError> {
        if self.resolver.is_implementation_of_overload(self.arena, statement) {
            trace!(statement = statement.0, "overload implementation elided");
            return Ok(SmallVec::new());
        }
        let modifiers = self.ensure_modifiers(statement);
        let (type_parameters, parameters, return_type) = self.with_enclosing(statement, |this| {
            let type_parameters =
                this.transform_type_parameters(statement, function.type_parameters.as_ref());
            let parameters = this.transform_parameters(statement, &function.parameters)?;
            let return_type = this.transform_return_type(statement)?;
            Ok::<_, EmitError>((type_parameters, parameters, return_type))
        })?;
        let clean = self.arena.update(
            statement,
            NodeData::FunctionDeclaration(FunctionData {
                modifiers,
                asterisk: false,
                name: function.name,
                question: false,
                type_parameters,
                parameters,
                return_type,
                body: NodeIndex::NONE,
            }),
        );

        if self.resolver.is_expando_function_declaration(self.arena, statement)
            && self.should_emit_function_properties(statement, &function)
        {
            return self.transform_expando_function(statement, clean);
        }
        Ok(smallvec![clean])
    }

    // =========================================================================
    // Interfaces and type aliases
    // =========================================================================

    fn transform_interface_declaration(
        &mut self,
        statement: NodeIndex,
        interface: InterfaceData,
    ) -> Result<NodeIndex, EmitError> {
        let modifiers = self.ensure_modifiers(statement);
        self.with_enclosing(statement, |this| {
            let type_parameters =
                this.transform_type_parameters(statement, interface.type_parameters.as_ref());
            let heritage_clauses =
                this.transform_heritage_clauses(statement, interface.heritage_clauses.as_ref());
            let mut members = Vec::with_capacity(interface.members.len());
            for member in interface.members.iter() {
                if let Some(member) = this.transform_type_element(member)? {
                    members.push(member);
                }
            }
            Ok::<_, EmitError>(this.arena.update(
                statement,
                NodeData::InterfaceDeclaration(InterfaceData {
                    modifiers,
                    name: interface.name,
                    type_parameters,
                    heritage_clauses,
                    members: members.into(),
                }),
            ))
        })
    }

    fn transform_type_alias_declaration(
        &mut self,
        statement: NodeIndex,
        alias: TypeAliasData,
    ) -> NodeIndex {
        let modifiers = self.ensure_modifiers(statement);
        self.with_enclosing(statement, |this| {
            this.with_diagnostic_context(DiagnosticContext::TypeAlias(statement), statement, |this| {
                let type_parameters =
                    this.transform_type_parameters(statement, alias.type_parameters.as_ref());
                let type_node = this.reuse_annotation(alias.type_node);
                this.arena.update(
                    statement,
                    NodeData::TypeAliasDeclaration(TypeAliasData {
                        modifiers,
                        name: alias.name,
                        type_parameters,
                        type_node,
                    }),
                )
            })
        })
    }

    // =========================================================================
    // Enums
    // =========================================================================

    /// Every member initializer is replaced by its evaluated constant.
    fn transform_enum_declaration(&mut self, statement: NodeIndex, declaration: EnumData) -> NodeIndex {
        let modifiers = self.ensure_modifiers(statement);
        let values = EnumEvaluator::new(self.arena, self.resolver, statement)
            .evaluate_members(&declaration.members);

        let mut members = Vec::with_capacity(values.len());
        for (member, result) in values {
            if self.should_strip_internal(member) {
                continue;
            }
            let Some(NodeData::EnumMember { name, initializer }) = self.arena.data(member).cloned() else {
                continue;
            };
            if initializer.is_some()
                && result.has_external_references
                && !matches!(self.arena.data(name), Some(NodeData::ComputedPropertyName { .. }))
            {
                self.tracker.report_inference_fallback(self.arena, member);
            }
            let initializer = match result.value {
                None => NodeIndex::NONE,
                Some(ConstantValue::String(text)) => self.arena.create_string_literal(&text),
                Some(ConstantValue::Number(value)) => self.arena.create_number_value(value),
            };
            members.push(
                self.arena
                    .update_if_changed(member, NodeData::EnumMember { name, initializer }),
            );
        }

        self.arena.update(
            statement,
            NodeData::EnumDeclaration(EnumData {
                modifiers,
                name: declaration.name,
                members: members.into(),
            }),
        )
    }

    // =========================================================================
    // Namespaces
    // =========================================================================

    fn transform_module_declaration(
        &mut self,
        statement: NodeIndex,
        module: ModuleData,
    ) -> Result<NodeIndex, EmitError> {
        let modifiers = self.ensure_modifiers(statement);
        let flags = self.arena.flags(statement);
        let is_string_named = matches!(self.arena.data(module.name), Some(NodeData::StringLiteral { .. }));
        let name = if is_string_named && self.current_file_is_external_module {
            self.rewrite_module_specifier(statement, module.name)
        } else {
            module.name
        };

        let body = match self.arena.data(module.body).cloned() {
            Some(NodeData::ModuleBlock { statements }) => {
                let is_ambient = module.modifiers.contains(ModifierFlags::AMBIENT) || is_string_named;
                let is_global = flags.contains(NodeFlags::GLOBAL_AUGMENTATION);
                self.with_container(statement, false, |this| {
                    this.transform_module_block(module.body, &statements, is_ambient, is_global)
                })?
            }
            Some(NodeData::ModuleDeclaration(inner)) => {
                // Dotted names nest without elision or painting of their own.
                self.with_container(statement, false, |this| {
                    this.transform_module_declaration(module.body, inner)
                })?
            }
            _ => module.body,
        };

        Ok(self.arena.update(
            statement,
            NodeData::ModuleDeclaration(ModuleData {
                modifiers,
                name,
                body,
            }),
        ))
    }

    fn transform_module_block(
        &mut self,
        block: NodeIndex,
        statements: &NodeList,
        is_ambient: bool,
        is_global: bool,
    ) -> Result<NodeIndex, EmitError> {
        let saved_fix = std::mem::replace(&mut self.needs_scope_fix_marker, false);
        let saved_marker = std::mem::replace(&mut self.result_has_scope_marker, false);
        let result = self
            .visit_statement_list(statements)
            .map(|statements| self.fix_namespace_scope(statements, is_ambient, is_global));
        self.needs_scope_fix_marker = saved_fix;
        self.result_has_scope_marker = saved_marker;
        let statements = result?;
        Ok(self.arena.update(
            block,
            NodeData::ModuleBlock {
                statements: statements.into(),
            },
        ))
    }

    // =========================================================================
    // Variables
    // =========================================================================

    fn transform_variable_statement(
        &mut self,
        statement: NodeIndex,
        declaration_list: NodeIndex,
    ) -> Result<StatementReplacement, EmitError> {
        let Some(NodeData::VariableDeclarationList { declarations }) =
            self.arena.data(declaration_list).cloned()
        else {
            return Ok(SmallVec::new());
        };
        let preserve_literals = self.arena.flags(declaration_list).contains(NodeFlags::CONST);

        let mut hoisted = StatementReplacement::new();
        let mut emitted = Vec::with_capacity(declarations.len());
        for declaration in declarations.iter() {
            self.transform_variable_declaration(declaration, preserve_literals, &mut hoisted, &mut emitted)?;
        }
        if emitted.is_empty() {
            trace!(statement = statement.0, "no visible declarations, elided");
            return Ok(hoisted);
        }

        let modifiers = self.ensure_modifiers(statement);
        let list = self.arena.update(
            declaration_list,
            NodeData::VariableDeclarationList {
                declarations: emitted.into(),
            },
        );
        hoisted.push(self.arena.update(
            statement,
            NodeData::VariableStatement {
                modifiers,
                declaration_list: list,
            },
        ));
        Ok(hoisted)
    }

    fn transform_variable_declaration(
        &mut self,
        declaration: NodeIndex,
        preserve_literals: bool,
        hoisted: &mut StatementReplacement,
        out: &mut Vec<NodeIndex>,
    ) -> Result<(), EmitError> {
        let Some(NodeData::VariableDeclaration { name, .. }) = self.arena.data(declaration).cloned() else {
            return Ok(());
        };
        if self.is_binding_pattern(name) {
            return self.recreate_binding_pattern(name, hoisted, out);
        }
        if !self.is_visible(declaration) {
            return Ok(());
        }
        let type_node = self.with_diagnostic_context(DiagnosticContext::Variable(declaration), declaration, |this| {
            this.ensure_type(declaration, TypeRequest::Declaration { preserve_literals })
        })?;
        out.push(self.arena.update(
            declaration,
            NodeData::VariableDeclaration {
                name,
                exclamation: false,
                type_node,
                initializer: NodeIndex::NONE,
            },
        ));
        Ok(())
    }

    /// One declaration per visible leaf of a destructuring pattern.
    fn recreate_binding_pattern(
        &mut self,
        pattern: NodeIndex,
        hoisted: &mut StatementReplacement,
        out: &mut Vec<NodeIndex>,
    ) -> Result<(), EmitError> {
        let elements = match self.arena.data(pattern) {
            Some(
                NodeData::ObjectBindingPattern { elements } | NodeData::ArrayBindingPattern { elements },
            ) => elements.clone(),
            _ => return Ok(()),
        };
        for element in elements.iter() {
            let Some(NodeData::BindingElement {
                property_name, name, ..
            }) = self.arena.data(element).cloned()
            else {
                continue;
            };
            if !self.is_binding_name_visible(element) {
                continue;
            }
            if let Some(NodeData::ComputedPropertyName { expression }) = self.arena.data(property_name)
                && !is_string_or_numeric_literal(self.arena, *expression)
            {
                let expression = *expression;
                hoisted.push(self.hoist_computed_key(expression));
            }
            if self.is_binding_pattern(name) {
                self.recreate_binding_pattern(name, hoisted, out)?;
                continue;
            }
            let type_node = self.with_diagnostic_context(DiagnosticContext::Variable(element), element, |this| {
                this.ensure_type(element, TypeRequest::Declaration { preserve_literals: false })
            })?;
            out.push(self.arena.create_variable_declaration(name, type_node, NodeIndex::NONE));
        }
        Ok(())
    }

    /// `declare const _a: T;` standing in for a computed destructuring key.
    fn hoist_computed_key(&mut self, expression: NodeIndex) -> NodeIndex {
        let name = self.temp_name();
        let type_node = self.semantic_type_of_expression(expression);
        let id = self.arena.create_identifier(&name);
        let declaration = self.arena.create_variable_declaration(id, type_node, NodeIndex::NONE);
        let modifiers = if self.needs_declare && self.container == self.current_file {
            ModifierFlags::AMBIENT
        } else {
            ModifierFlags::empty()
        };
        self.arena
            .create_variable_statement(modifiers, NodeFlags::CONST, vec![declaration])
    }

    fn is_binding_pattern(&self, name: NodeIndex) -> bool {
        matches!(
            self.arena.data(name),
            Some(NodeData::ObjectBindingPattern { .. } | NodeData::ArrayBindingPattern { .. })
        )
    }

    fn is_binding_name_visible(&self, element: NodeIndex) -> bool {
        let Some(NodeData::BindingElement { name, .. }) = self.arena.data(element) else {
            return false;
        };
        match self.arena.data(*name) {
            Some(
                NodeData::ObjectBindingPattern { elements } | NodeData::ArrayBindingPattern { elements },
            ) => elements.iter().any(|e| self.is_binding_name_visible(e)),
            _ => self.is_visible(element),
        }
    }
}
