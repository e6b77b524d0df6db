//! Parameters, type parameters, heritage clauses and type members.

use dtsz_ast::node_utils::{
    get_declaration_name, is_entity_name_expression, is_string_or_numeric_literal,
};
use dtsz_ast::{
    AccessorData, HeritageToken, IndexSignatureData, MethodSignatureData, ModifierFlags, NodeData,
    NodeIndex, NodeList, ParameterData, PropertyData, SignatureData, TypeKeyword, TypeParameterData,
};
use dtsz_common::diagnostics::diagnostic_codes;
use tracing::trace;

use super::{DeclarationTransformer, TypeRequest};
use crate::diagnostics::DiagnosticContext;
use crate::error::EmitError;

impl DeclarationTransformer<'_> {
    // =========================================================================
    // Parameters
    // =========================================================================

    pub(super) fn transform_parameters(
        &mut self,
        signature: NodeIndex,
        parameters: &NodeList,
    ) -> Result<NodeList, EmitError> {
        let nodes = &parameters.nodes;
        let mut out = Vec::with_capacity(nodes.len());
        for (i, &parameter) in nodes.iter().enumerate() {
            out.push(self.transform_parameter(signature, parameter, &nodes[i + 1..], None)?);
        }
        Ok(out.into())
    }

    /// Parameter without modifiers or initializer. An initialized parameter
    /// followed only by optional ones becomes `?`. `type_override` replaces
    /// the computed type (setters borrowing the getter's annotation).
    pub(super) fn transform_parameter(
        &mut self,
        signature: NodeIndex,
        parameter: NodeIndex,
        following: &[NodeIndex],
        type_override: Option<NodeIndex>,
    ) -> Result<NodeIndex, EmitError> {
        let Some(NodeData::Parameter(data)) = self.arena.data(parameter).cloned() else {
            return Ok(parameter);
        };
        let question = data.question
            || (data.initializer.is_some()
                && !data.dot_dot_dot
                && following.iter().all(|&p| self.is_optional_or_rest(p)));
        let name = self.filter_binding_pattern_initializers(data.name);
        let type_node = match type_override {
            Some(type_node) => type_node,
            None => self.with_diagnostic_context(
                DiagnosticContext::Parameter {
                    parameter,
                    signature,
                },
                parameter,
                |this| this.ensure_type(parameter, TypeRequest::Declaration { preserve_literals: false }),
            )?,
        };
        Ok(self.arena.update(
            parameter,
            NodeData::Parameter(ParameterData {
                modifiers: ModifierFlags::empty(),
                dot_dot_dot: data.dot_dot_dot,
                name,
                question,
                type_node,
                initializer: NodeIndex::NONE,
            }),
        ))
    }

    fn is_optional_or_rest(&self, parameter: NodeIndex) -> bool {
        match self.arena.data(parameter) {
            Some(NodeData::Parameter(p)) => p.question || p.dot_dot_dot || p.initializer.is_some(),
            _ => false,
        }
    }

    /// Binding patterns keep their shape; defaults are dropped.
    fn filter_binding_pattern_initializers(&mut self, name: NodeIndex) -> NodeIndex {
        let Some(data) = self.arena.data(name).cloned() else {
            return name;
        };
        let rebuild = |this: &mut Self, elements: &NodeList| -> NodeList {
            elements
                .iter()
                .map(|element| match this.arena.data(element).cloned() {
                    Some(NodeData::BindingElement {
                        dot_dot_dot,
                        property_name,
                        name,
                        ..
                    }) => {
                        let name = this.filter_binding_pattern_initializers(name);
                        this.arena.update_if_changed(
                            element,
                            NodeData::BindingElement {
                                dot_dot_dot,
                                property_name,
                                name,
                                initializer: NodeIndex::NONE,
                            },
                        )
                    }
                    _ => element,
                })
                .collect()
        };
        match data {
            NodeData::ObjectBindingPattern { elements } => {
                let elements = rebuild(self, &elements);
                self.arena
                    .update_if_changed(name, NodeData::ObjectBindingPattern { elements })
            }
            NodeData::ArrayBindingPattern { elements } => {
                let elements = rebuild(self, &elements);
                self.arena
                    .update_if_changed(name, NodeData::ArrayBindingPattern { elements })
            }
            _ => name,
        }
    }

    pub(super) fn transform_return_type(&mut self, signature: NodeIndex) -> Result<NodeIndex, EmitError> {
        self.with_diagnostic_context(DiagnosticContext::ReturnType(signature), signature, |this| {
            this.ensure_type(signature, TypeRequest::ReturnType)
        })
    }

    // =========================================================================
    // Type parameters
    // =========================================================================

    pub(super) fn transform_type_parameters(
        &mut self,
        owner: NodeIndex,
        type_parameters: Option<&NodeList>,
    ) -> Option<NodeList> {
        let list = type_parameters?;
        let mut out = Vec::with_capacity(list.len());
        for type_parameter in list.iter() {
            out.push(self.transform_type_parameter(owner, type_parameter));
        }
        Some(out.into())
    }

    fn transform_type_parameter(&mut self, owner: NodeIndex, type_parameter: NodeIndex) -> NodeIndex {
        let Some(NodeData::TypeParameter(data)) = self.arena.data(type_parameter).cloned() else {
            return type_parameter;
        };
        self.with_diagnostic_context(
            DiagnosticContext::TypeParameter {
                type_parameter,
                owner,
            },
            type_parameter,
            |this| {
                let constraint = this.reuse_annotation(data.constraint);
                let default = this.reuse_annotation(data.default);
                this.arena.update_if_changed(
                    type_parameter,
                    NodeData::TypeParameter(TypeParameterData {
                        constraint,
                        default,
                        ..data
                    }),
                )
            },
        )
    }

    // =========================================================================
    // Heritage clauses
    // =========================================================================

    /// Keep heritage types whose expression is a nameable entity (or `null`
    /// after `extends`); drop clauses left empty.
    pub(super) fn transform_heritage_clauses(
        &mut self,
        owner: NodeIndex,
        clauses: Option<&NodeList>,
    ) -> Option<NodeList> {
        let clauses = clauses?;
        let mut out = Vec::with_capacity(clauses.len());
        for clause in clauses.iter() {
            let Some(NodeData::HeritageClause { token, types }) = self.arena.data(clause).cloned() else {
                continue;
            };
            let mut kept = Vec::with_capacity(types.len());
            for heritage_type in types.iter() {
                let Some(NodeData::ExpressionWithTypeArguments { expression, .. }) =
                    self.arena.data(heritage_type)
                else {
                    continue;
                };
                let expression = *expression;
                let is_null = matches!(self.arena.data(expression), Some(NodeData::NullLiteral));
                if is_entity_name_expression(self.arena, expression) {
                    kept.push(self.transform_heritage_type(owner, token, heritage_type, None));
                } else if is_null && token == HeritageToken::Extends {
                    kept.push(heritage_type);
                } else {
                    trace!(clause = clause.0, "heritage expression is not an entity name, dropped");
                }
            }
            if kept.is_empty() {
                continue;
            }
            out.push(
                self.arena
                    .update_if_changed(clause, NodeData::HeritageClause { token, types: kept.into() }),
            );
        }
        if out.is_empty() { None } else { Some(out.into()) }
    }

    /// Check the heritage expression and reuse its type arguments.
    /// `replacement` swaps the expression (a hoisted base class constant).
    pub(super) fn transform_heritage_type(
        &mut self,
        owner: NodeIndex,
        token: HeritageToken,
        heritage_type: NodeIndex,
        replacement: Option<NodeIndex>,
    ) -> NodeIndex {
        let Some(NodeData::ExpressionWithTypeArguments {
            expression,
            type_arguments,
        }) = self.arena.data(heritage_type).cloned()
        else {
            return heritage_type;
        };
        let context = DiagnosticContext::Heritage {
            owner,
            token,
            expression: heritage_type,
        };
        self.with_diagnostic_context(context, heritage_type, |this| {
            let expression = match replacement {
                Some(replacement) => replacement,
                None => {
                    this.check_entity_name_visibility(expression);
                    expression
                }
            };
            let type_arguments = type_arguments.map(|arguments| {
                arguments
                    .iter()
                    .map(|argument| this.reuse_annotation(argument))
                    .collect::<NodeList>()
            });
            this.arena.update_if_changed(
                heritage_type,
                NodeData::ExpressionWithTypeArguments {
                    expression,
                    type_arguments,
                },
            )
        })
    }

    // =========================================================================
    // Type members
    // =========================================================================

    /// `false` when a member with a computed name cannot be emitted. In
    /// isolated mode a class member is reported; elsewhere the name must be
    /// late bound and an entity name.
    pub(super) fn keep_dynamic_name(&mut self, member: NodeIndex, is_class_member: bool) -> bool {
        let name = get_declaration_name(self.arena, member);
        let Some(NodeData::ComputedPropertyName { expression }) = self.arena.data(name) else {
            return true;
        };
        let expression = *expression;
        if is_string_or_numeric_literal(self.arena, expression) {
            return true;
        }
        let is_entity = is_entity_name_expression(self.arena, expression);
        if self.options.isolated_declarations {
            if is_global_symbol_reference(self.arena, expression) {
                return true;
            }
            if is_class_member {
                self.tracker.report(
                    member,
                    diagnostic_codes::COMPUTED_PROPERTY_NAMES_ON_CLASS_OR_OBJECT_LITERALS_CANNOT_BE_INFERRED,
                    &[],
                );
                return false;
            }
            if !is_entity {
                self.tracker.report(
                    member,
                    diagnostic_codes::COMPUTED_PROPERTIES_MUST_BE_NUMBER_OR_STRING_LITERALS_VARIABLES_OR_DOTTED_EXPRESSIONS,
                    &[],
                );
                return false;
            }
        } else if !is_entity || !self.resolver.is_late_bound(self.arena, member) {
            trace!(member = member.0, "dynamic name is not late bound, dropped");
            return false;
        }
        self.with_diagnostic_context(DiagnosticContext::Property(member), member, |this| {
            this.check_entity_name_visibility(expression);
        });
        true
    }

    /// A member of an interface or type literal; `None` when dropped.
    pub(super) fn transform_type_element(&mut self, member: NodeIndex) -> Result<Option<NodeIndex>, EmitError> {
        if self.should_strip_internal(member) {
            return Ok(None);
        }
        let Some(data) = self.arena.data(member).cloned() else {
            return Ok(None);
        };
        if !self.keep_dynamic_name(member, false) {
            return Ok(None);
        }
        let transformed = match data {
            NodeData::PropertySignature(property) => {
                let type_node = self.with_diagnostic_context(DiagnosticContext::Property(member), member, |this| {
                    this.ensure_type(member, TypeRequest::Declaration { preserve_literals: false })
                })?;
                let modifiers = self.ensure_member_modifiers(member);
                self.arena.update(
                    member,
                    NodeData::PropertySignature(PropertyData {
                        modifiers,
                        type_node,
                        initializer: NodeIndex::NONE,
                        ..property
                    }),
                )
            }
            NodeData::MethodSignature(method) => self.with_enclosing(member, |this| {
                let type_parameters = this.transform_type_parameters(member, method.type_parameters.as_ref());
                let parameters = this.transform_parameters(member, &method.parameters)?;
                let return_type = this.transform_return_type(member)?;
                let modifiers = this.ensure_member_modifiers(member);
                Ok::<_, EmitError>(this.arena.update(
                    member,
                    NodeData::MethodSignature(MethodSignatureData {
                        modifiers,
                        type_parameters,
                        parameters,
                        return_type,
                        ..method
                    }),
                ))
            })?,
            NodeData::CallSignature(signature) => {
                let signature = self.transform_signature(member, signature)?;
                self.arena.update(member, NodeData::CallSignature(signature))
            }
            NodeData::ConstructSignature(signature) => {
                let signature = self.transform_signature(member, signature)?;
                self.arena.update(member, NodeData::ConstructSignature(signature))
            }
            NodeData::IndexSignature(index) => self.transform_index_signature(member, index)?,
            NodeData::GetAccessor(accessor) => {
                let type_node = self.with_diagnostic_context(DiagnosticContext::Accessor(member), member, |this| {
                    this.ensure_type(member, TypeRequest::Declaration { preserve_literals: false })
                })?;
                let modifiers = self.ensure_member_modifiers(member);
                self.arena.update(
                    member,
                    NodeData::GetAccessor(AccessorData {
                        modifiers,
                        parameters: NodeList::new(),
                        return_type: type_node,
                        body: NodeIndex::NONE,
                        ..accessor
                    }),
                )
            }
            NodeData::SetAccessor(accessor) => {
                let parameters = self.transform_parameters(member, &accessor.parameters)?;
                let modifiers = self.ensure_member_modifiers(member);
                self.arena.update(
                    member,
                    NodeData::SetAccessor(AccessorData {
                        modifiers,
                        parameters,
                        return_type: NodeIndex::NONE,
                        body: NodeIndex::NONE,
                        ..accessor
                    }),
                )
            }
            _ => member,
        };
        Ok(Some(transformed))
    }

    fn transform_signature(&mut self, member: NodeIndex, signature: SignatureData) -> Result<SignatureData, EmitError> {
        self.with_enclosing(member, |this| {
            Ok::<_, EmitError>(SignatureData {
                modifiers: ModifierFlags::empty(),
                type_parameters: this.transform_type_parameters(member, signature.type_parameters.as_ref()),
                parameters: this.transform_parameters(member, &signature.parameters)?,
                return_type: this.transform_return_type(member)?,
            })
        })
    }

    /// Index signatures keep their parameters; a missing type becomes `any`.
    pub(super) fn transform_index_signature(
        &mut self,
        member: NodeIndex,
        index: IndexSignatureData,
    ) -> Result<NodeIndex, EmitError> {
        let parameters = self.transform_parameters(member, &index.parameters)?;
        let type_node = if index.type_node.is_some() {
            self.with_diagnostic_context(DiagnosticContext::ReturnType(member), member, |this| {
                this.reuse_annotation(index.type_node)
            })
        } else {
            self.arena.create_keyword_type(TypeKeyword::Any)
        };
        let modifiers = self.ensure_member_modifiers(member);
        Ok(self.arena.update(
            member,
            NodeData::IndexSignature(IndexSignatureData {
                modifiers,
                parameters,
                type_node,
            }),
        ))
    }
}

/// `Symbol.iterator` and friends are always nameable.
fn is_global_symbol_reference(arena: &dtsz_ast::NodeArena, expression: NodeIndex) -> bool {
    match arena.data(expression) {
        Some(NodeData::PropertyAccess { expression, .. }) => {
            matches!(arena.data(*expression), Some(NodeData::Identifier { text }) if text == "Symbol")
        }
        _ => false,
    }
}
