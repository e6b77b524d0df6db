//! Rebuilding written type nodes for the emission site.
//!
//! Every entity name in the annotation is checked from the current enclosing
//! declaration. Scopes that introduce type parameters (function and
//! constructor types, signatures, mapped types, the true branch of a
//! conditional type) become the enclosing declaration while their children
//! are visited. Documentation-comment type forms are rewritten to ordinary
//! type syntax.

use dtsz_ast::factory::format_number;
use dtsz_ast::node_utils::{identifier_text, is_entity_name_expression, is_string_or_numeric_literal, is_type_node};
use dtsz_ast::{
    AccessorData, ModifierFlags, NodeData, NodeIndex, NodeList, SignatureData, TemplateTypeSpan,
    TypeKeyword,
};
use dtsz_common::limits::MAX_TYPE_REUSE_DEPTH;
use tracing::{debug, trace};

use super::TypeSynthesizer;
use crate::resolver::ConstantValue;

impl TypeSynthesizer<'_> {
    pub(super) fn visit_type(&mut self, node: NodeIndex) -> NodeIndex {
        if node.is_none() {
            return node;
        }
        if self.reuse_depth >= MAX_TYPE_REUSE_DEPTH {
            debug!(node = node.0, "type reuse depth exceeded");
            self.boundary.fail(false);
            return node;
        }
        self.reuse_depth += 1;
        let result = self.visit_type_worker(node);
        self.reuse_depth -= 1;
        result
    }

    fn visit_type_worker(&mut self, node: NodeIndex) -> NodeIndex {
        let Some(data) = self.arena.data(node).cloned() else {
            return node;
        };
        let rebuilt = match data {
            NodeData::KeywordType { .. } | NodeData::ThisType | NodeData::LiteralType { .. } => {
                return node;
            }
            NodeData::TypeReference {
                type_name,
                type_arguments,
            } => match self.check_entity_name(type_name) {
                Ok(type_name) => NodeData::TypeReference {
                    type_name,
                    type_arguments: self.visit_type_arguments(type_arguments),
                },
                Err(reported) => return self.substitute_failed_type(node, reported),
            },
            NodeData::TypeQuery {
                expr_name,
                type_arguments,
            } => match self.check_entity_name(expr_name) {
                Ok(expr_name) => NodeData::TypeQuery {
                    expr_name,
                    type_arguments: self.visit_type_arguments(type_arguments),
                },
                Err(reported) => return self.substitute_failed_type(node, reported),
            },
            NodeData::ExpressionWithTypeArguments {
                expression,
                type_arguments,
            } => match self.check_entity_name(expression) {
                Ok(expression) => NodeData::ExpressionWithTypeArguments {
                    expression,
                    type_arguments: self.visit_type_arguments(type_arguments),
                },
                Err(reported) => return self.substitute_failed_type(node, reported),
            },
            NodeData::ArrayType { element_type } => NodeData::ArrayType {
                element_type: self.visit_type(element_type),
            },
            NodeData::TupleType { elements } => NodeData::TupleType {
                elements: self.visit_types(&elements),
            },
            NodeData::NamedTupleMember {
                dot_dot_dot,
                name,
                question,
                type_node,
            } => NodeData::NamedTupleMember {
                dot_dot_dot,
                name,
                question,
                type_node: self.visit_type(type_node),
            },
            NodeData::OptionalType { type_node } => NodeData::OptionalType {
                type_node: self.visit_type(type_node),
            },
            NodeData::RestType { type_node } => NodeData::RestType {
                type_node: self.visit_type(type_node),
            },
            NodeData::UnionType { types } => NodeData::UnionType {
                types: self.visit_types(&types),
            },
            NodeData::IntersectionType { types } => NodeData::IntersectionType {
                types: self.visit_types(&types),
            },
            NodeData::ParenthesizedType { type_node } => NodeData::ParenthesizedType {
                type_node: self.visit_type(type_node),
            },
            NodeData::TypeOperator {
                operator,
                type_node,
            } => NodeData::TypeOperator {
                operator,
                type_node: self.visit_type(type_node),
            },
            NodeData::IndexedAccessType {
                object_type,
                index_type,
            } => NodeData::IndexedAccessType {
                object_type: self.visit_type(object_type),
                index_type: self.visit_type(index_type),
            },
            NodeData::TypeLiteral {
                members,
                multi_line,
            } => {
                let members: NodeList = members
                    .iter()
                    .filter_map(|member| self.visit_member(member))
                    .collect();
                NodeData::TypeLiteral {
                    members,
                    multi_line: multi_line && self.options.preserve_type_literal_layout,
                }
            }
            NodeData::FunctionType(sig) => {
                NodeData::FunctionType(self.with_enclosing(node, |this| this.visit_signature(sig)))
            }
            NodeData::ConstructorType(sig) => {
                NodeData::ConstructorType(self.with_enclosing(node, |this| this.visit_signature(sig)))
            }
            NodeData::ConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            } => {
                let check_type = self.visit_type(check_type);
                let extends_type = self.visit_type(extends_type);
                let true_type = self.with_enclosing(node, |this| this.visit_type(true_type));
                NodeData::ConditionalType {
                    check_type,
                    extends_type,
                    true_type,
                    false_type: self.visit_type(false_type),
                }
            }
            NodeData::InferType { type_parameter } => NodeData::InferType {
                type_parameter: self.visit_type_parameter(type_parameter),
            },
            NodeData::MappedType(mut mapped) => {
                self.with_enclosing(node, |this| {
                    mapped.type_parameter = this.visit_type_parameter(mapped.type_parameter);
                    mapped.name_type = this.visit_type(mapped.name_type);
                    mapped.type_node = this.visit_type(mapped.type_node);
                });
                NodeData::MappedType(mapped)
            }
            NodeData::TemplateLiteralType { head, spans } => NodeData::TemplateLiteralType {
                head,
                spans: spans
                    .into_iter()
                    .map(|span| TemplateTypeSpan {
                        type_node: self.visit_type(span.type_node),
                        literal: span.literal,
                    })
                    .collect(),
            },
            NodeData::TypePredicate {
                asserts,
                parameter_name,
                type_node,
            } => NodeData::TypePredicate {
                asserts,
                parameter_name,
                type_node: self.visit_type(type_node),
            },
            NodeData::ImportType {
                is_type_of,
                argument,
                qualifier,
                type_arguments,
            } => NodeData::ImportType {
                is_type_of,
                argument,
                qualifier,
                type_arguments: self.visit_type_arguments(type_arguments),
            },

            // Documentation-comment forms.
            NodeData::JsDocAllType => return self.arena.create_keyword_type(TypeKeyword::Any),
            NodeData::JsDocUnknownType => {
                return self.arena.create_keyword_type(TypeKeyword::Unknown);
            }
            NodeData::JsDocNullableType { type_node } => {
                let inner = self.visit_type(type_node);
                if !self.options.strict_null_checks {
                    return inner;
                }
                let null = self.arena.create_keyword_type(TypeKeyword::Null);
                return self.arena.create_union_type(vec![inner, null]);
            }
            NodeData::JsDocNonNullableType { type_node } => return self.visit_type(type_node),
            NodeData::JsDocOptionalType { type_node } => {
                let inner = self.visit_type(type_node);
                let undefined = self.arena.create_keyword_type(TypeKeyword::Undefined);
                return self.arena.create_union_type(vec![inner, undefined]);
            }
            NodeData::JsDocVariadicType { type_node } => {
                let element = self.visit_type(type_node);
                return self.arena.create_array_type(element);
            }
            NodeData::JsDocFunctionType(sig) => self.desugar_function_type(node, sig),

            other => {
                trace!(node = node.0, kind = other.kind_name(), "not a reusable type");
                self.boundary.fail(false);
                return node;
            }
        };
        self.arena.update_if_changed(node, rebuilt)
    }

    fn visit_types(&mut self, types: &NodeList) -> NodeList {
        types.iter().map(|t| self.visit_type(t)).collect()
    }

    fn visit_type_arguments(&mut self, arguments: Option<NodeList>) -> Option<NodeList> {
        arguments.map(|list| self.visit_types(&list))
    }

    /// Check an entity name written in a type. Accessible names are tracked
    /// (painting any aliases they need) and possibly re-qualified; for an
    /// inaccessible name the error says whether the tracker reported it.
    fn check_entity_name(&mut self, entity_name: NodeIndex) -> Result<NodeIndex, bool> {
        let result = self
            .resolver
            .is_entity_name_visible(self.arena, entity_name, self.enclosing);
        let reported = self.tracker.track_symbol(self.arena, &result);
        if !result.is_accessible() {
            return Err(reported);
        }
        Ok(self
            .resolver
            .qualify_entity_name(self.arena, entity_name, self.enclosing)
            .unwrap_or(entity_name))
    }

    /// Replace a type node that cannot be reused with the resolver's
    /// serialization of the type it denotes. Without one the enclosing
    /// boundary fails.
    fn substitute_failed_type(&mut self, node: NodeIndex, reported: bool) -> NodeIndex {
        let is_substitutable = self
            .arena
            .data(node)
            .is_some_and(|data| is_type_node(data) && !matches!(data, NodeData::TypePredicate { .. }));
        if is_substitutable
            && let Some(substitute) = self.resolver.create_type_of_type_node(
                self.arena,
                node,
                self.enclosing,
                &mut *self.tracker,
            )
        {
            debug!(node = node.0, substitute = substitute.0, "substituted serialized type");
            return substitute;
        }
        self.boundary.fail(reported);
        node
    }

    /// Member of a type literal, or `None` when its computed name cannot be
    /// written at the emission site.
    fn visit_member(&mut self, member: NodeIndex) -> Option<NodeIndex> {
        let Some(data) = self.arena.data(member).cloned() else {
            return Some(member);
        };
        let rebuilt = match data {
            NodeData::PropertySignature(mut prop) => {
                prop.name = self.reuse_member_name(prop.name)?;
                prop.type_node = self.visit_type(prop.type_node);
                NodeData::PropertySignature(prop)
            }
            NodeData::MethodSignature(mut method) => {
                method.name = self.reuse_member_name(method.name)?;
                self.with_enclosing(member, |this| {
                    method.type_parameters = this.visit_type_parameters(method.type_parameters.take());
                    method.parameters = this.visit_parameters(&method.parameters);
                    method.return_type = this.visit_type(method.return_type);
                });
                NodeData::MethodSignature(method)
            }
            NodeData::CallSignature(sig) => {
                NodeData::CallSignature(self.with_enclosing(member, |this| this.visit_signature(sig)))
            }
            NodeData::ConstructSignature(sig) => NodeData::ConstructSignature(
                self.with_enclosing(member, |this| this.visit_signature(sig)),
            ),
            NodeData::IndexSignature(mut index) => {
                self.with_enclosing(member, |this| {
                    index.parameters = this.visit_parameters(&index.parameters);
                    index.type_node = this.visit_type(index.type_node);
                });
                NodeData::IndexSignature(index)
            }
            NodeData::GetAccessor(accessor) => {
                let accessor = self.visit_accessor(member, accessor)?;
                NodeData::GetAccessor(accessor)
            }
            NodeData::SetAccessor(accessor) => {
                let accessor = self.visit_accessor(member, accessor)?;
                NodeData::SetAccessor(accessor)
            }
            other => {
                trace!(member = member.0, kind = other.kind_name(), "not a reusable member");
                self.boundary.fail(false);
                return Some(member);
            }
        };
        Some(self.arena.update_if_changed(member, rebuilt))
    }

    fn visit_accessor(&mut self, member: NodeIndex, mut accessor: AccessorData) -> Option<AccessorData> {
        accessor.name = self.reuse_member_name(accessor.name)?;
        self.with_enclosing(member, |this| {
            accessor.parameters = this.visit_parameters(&accessor.parameters);
            accessor.return_type = this.visit_type(accessor.return_type);
        });
        accessor.body = NodeIndex::NONE;
        Some(accessor)
    }

    /// Property name for a reused member. Literal computed keys stay;
    /// entity-name keys become literals when they evaluate to a constant and
    /// stay computed when the name is accessible.
    fn reuse_member_name(&mut self, name: NodeIndex) -> Option<NodeIndex> {
        let Some(NodeData::ComputedPropertyName { expression }) = self.arena.data(name) else {
            return Some(name);
        };
        let expression = *expression;
        if is_string_or_numeric_literal(self.arena, expression) {
            return Some(name);
        }
        if !is_entity_name_expression(self.arena, expression) {
            return None;
        }
        let evaluated = self
            .resolver
            .evaluate_entity_name(self.arena, expression, self.enclosing);
        match evaluated.value {
            Some(ConstantValue::String(text)) => return Some(self.arena.create_string_literal(&text)),
            Some(ConstantValue::Number(value)) if value.is_finite() && value >= 0.0 => {
                return Some(self.arena.create_numeric_literal(&format_number(value)));
            }
            _ => {}
        }
        let result = self
            .resolver
            .is_entity_name_visible(self.arena, expression, self.enclosing);
        if !result.is_accessible() {
            trace!(name = name.0, "computed member name elided");
            return None;
        }
        self.tracker.track_symbol(self.arena, &result);
        Some(name)
    }

    pub(super) fn visit_signature(&mut self, mut sig: SignatureData) -> SignatureData {
        sig.type_parameters = self.visit_type_parameters(sig.type_parameters.take());
        sig.parameters = self.visit_parameters(&sig.parameters);
        sig.return_type = self.visit_type(sig.return_type);
        sig
    }

    fn visit_parameters(&mut self, parameters: &NodeList) -> NodeList {
        parameters.iter().map(|p| self.visit_parameter(p)).collect()
    }

    fn visit_parameter(&mut self, parameter: NodeIndex) -> NodeIndex {
        let Some(NodeData::Parameter(mut data)) = self.arena.data(parameter).cloned() else {
            return parameter;
        };
        data.type_node = self.visit_type(data.type_node);
        data.initializer = NodeIndex::NONE;
        self.arena.update_if_changed(parameter, NodeData::Parameter(data))
    }

    pub(super) fn visit_type_parameters(&mut self, type_parameters: Option<NodeList>) -> Option<NodeList> {
        type_parameters.map(|list| list.iter().map(|tp| self.visit_type_parameter(tp)).collect())
    }

    fn visit_type_parameter(&mut self, type_parameter: NodeIndex) -> NodeIndex {
        let Some(NodeData::TypeParameter(mut data)) = self.arena.data(type_parameter).cloned() else {
            return type_parameter;
        };
        data.constraint = self.visit_type(data.constraint);
        data.default = self.visit_type(data.default);
        self.arena
            .update_if_changed(type_parameter, NodeData::TypeParameter(data))
    }

    /// `function(this:T, string, ...number): R` as a function type, and
    /// `function(new:T, ...)` as a constructor type returning `T`. Unnamed
    /// parameters are called `arg0`, `arg1`, ...
    fn desugar_function_type(&mut self, node: NodeIndex, sig: SignatureData) -> NodeData {
        self.with_enclosing(node, |this| {
            let mut constructed = NodeIndex::NONE;
            let mut parameters = Vec::with_capacity(sig.parameters.len());
            for (i, parameter) in sig.parameters.iter().enumerate() {
                let Some(NodeData::Parameter(mut data)) = this.arena.data(parameter).cloned() else {
                    continue;
                };
                let name = identifier_text(this.arena, data.name).map(str::to_string);
                match name.as_deref() {
                    Some("new") if i == 0 => {
                        constructed = this.visit_type(data.type_node);
                        continue;
                    }
                    Some("this") => data.type_node = this.visit_type(data.type_node),
                    _ => {
                        if data.name.is_none() {
                            data.name = this.arena.create_identifier(&format!("arg{i}"));
                        }
                        if let Some(NodeData::JsDocVariadicType { type_node }) =
                            this.arena.data(data.type_node)
                        {
                            let element = *type_node;
                            let element = this.visit_type(element);
                            data.dot_dot_dot = true;
                            data.type_node = this.arena.create_array_type(element);
                        } else {
                            data.type_node = this.visit_type(data.type_node);
                        }
                    }
                }
                data.initializer = NodeIndex::NONE;
                parameters.push(this.arena.update(parameter, NodeData::Parameter(data)));
            }
            let return_type = if constructed.is_some() {
                constructed
            } else if sig.return_type.is_some() {
                this.visit_type(sig.return_type)
            } else {
                this.arena.create_keyword_type(TypeKeyword::Any)
            };
            let signature = SignatureData {
                modifiers: ModifierFlags::empty(),
                type_parameters: this.visit_type_parameters(sig.type_parameters),
                parameters: NodeList::from(parameters),
                return_type,
            };
            if constructed.is_some() {
                NodeData::ConstructorType(signature)
            } else {
                NodeData::FunctionType(signature)
            }
        })
    }
}
