//! Types of unannotated initializers.
//!
//! Only expressions whose type follows from their shape are inferred:
//! primitive literals, object and `as const` array literals, and type
//! assertions. Function expressions only have their signatures checked. A
//! failure inside a composite literal is reported at the innermost node that
//! could not be typed, and the composite returns [`TypeSynthesis::Reported`].

use dtsz_ast::node_utils::{
    is_const_type_reference, is_entity_name_expression, is_string_or_numeric_literal,
    property_name_text,
};
use dtsz_ast::{
    FunctionData, MethodSignatureData, ModifierFlags, NodeData, NodeIndex, NodeList,
    PrefixOperator, TypeKeyword, TypeOperatorKind,
};
use dtsz_common::limits::MAX_EXPRESSION_INFERENCE_DEPTH;
use tracing::debug;

use super::{InferenceMode, TypeSynthesis, TypeSynthesizer};
use crate::resolver::AllAccessorDeclarations;

impl TypeSynthesizer<'_> {
    pub(super) fn infer_expression(&mut self, expression: NodeIndex, mode: InferenceMode) -> TypeSynthesis {
        if self.inference_depth >= MAX_EXPRESSION_INFERENCE_DEPTH {
            debug!(expression = expression.0, "expression inference depth exceeded");
            return TypeSynthesis::NeedsInference;
        }
        self.inference_depth += 1;
        let result = self.infer_expression_worker(expression, mode);
        self.inference_depth -= 1;
        result
    }

    fn infer_expression_worker(&mut self, expression: NodeIndex, mode: InferenceMode) -> TypeSynthesis {
        let Some(data) = self.arena.data(expression).cloned() else {
            return TypeSynthesis::NeedsInference;
        };
        match data {
            NodeData::StringLiteral { .. } => self.literal_type(expression, TypeKeyword::String, mode),
            NodeData::NoSubstitutionTemplateLiteral { text } => {
                let literal = self.arena.create_string_literal(&text);
                self.literal_type(literal, TypeKeyword::String, mode)
            }
            NodeData::NumericLiteral { .. } => self.literal_type(expression, TypeKeyword::Number, mode),
            NodeData::BigIntLiteral { .. } => self.literal_type(expression, TypeKeyword::BigInt, mode),
            NodeData::BooleanLiteral { .. } => {
                self.literal_type(expression, TypeKeyword::Boolean, mode)
            }
            NodeData::PrefixUnary {
                operator: PrefixOperator::Minus,
                operand,
            } => match self.arena.data(operand) {
                Some(NodeData::NumericLiteral { .. }) => {
                    self.literal_type(expression, TypeKeyword::Number, mode)
                }
                Some(NodeData::BigIntLiteral { .. }) => {
                    self.literal_type(expression, TypeKeyword::BigInt, mode)
                }
                _ => TypeSynthesis::NeedsInference,
            },
            NodeData::NullLiteral => self.nullish_type(TypeKeyword::Null),
            NodeData::Identifier { text } if text == "undefined" => {
                self.nullish_type(TypeKeyword::Undefined)
            }
            NodeData::TemplateExpression { .. } => match mode {
                InferenceMode::Widen => {
                    TypeSynthesis::Node(self.arena.create_keyword_type(TypeKeyword::String))
                }
                _ => TypeSynthesis::NeedsInference,
            },
            NodeData::Parenthesized { expression: inner }
            | NodeData::SatisfiesExpression {
                expression: inner, ..
            } => self.infer_expression(inner, mode),
            NodeData::AsExpression {
                expression: inner,
                type_node,
            }
            | NodeData::TypeAssertion {
                expression: inner,
                type_node,
            } => {
                if is_const_type_reference(self.arena, type_node) {
                    self.infer_expression(inner, InferenceMode::Const)
                } else {
                    self.reuse_type_node(type_node)
                }
            }
            NodeData::ObjectLiteral {
                properties,
                multi_line,
            } => self.infer_object_literal(&properties, multi_line, mode),
            NodeData::ArrayLiteral { elements } => self.infer_array_literal(expression, &elements, mode),
            NodeData::ArrowFunction(function) | NodeData::FunctionExpression(function) => {
                self.infer_function_expression(expression, &function)
            }
            NodeData::ClassExpression(_) => {
                self.tracker.report_inference_fallback(self.arena, expression);
                TypeSynthesis::Reported
            }
            _ => TypeSynthesis::NeedsInference,
        }
    }

    /// Literal type of `literal`, or its widened keyword.
    fn literal_type(&mut self, literal: NodeIndex, widened: TypeKeyword, mode: InferenceMode) -> TypeSynthesis {
        let node = match mode {
            InferenceMode::Widen => self.arena.create_keyword_type(widened),
            InferenceMode::PreservePrimitive | InferenceMode::Const => {
                self.arena.create_literal_type(literal)
            }
        };
        TypeSynthesis::Node(node)
    }

    /// `null` and `undefined` widen to `any` without strict null checks.
    fn nullish_type(&mut self, keyword: TypeKeyword) -> TypeSynthesis {
        let keyword = if self.options.strict_null_checks {
            keyword
        } else {
            TypeKeyword::Any
        };
        TypeSynthesis::Node(self.arena.create_keyword_type(keyword))
    }

    /// Report a nested failure that has not been reported yet.
    fn report_nested(&mut self, node: NodeIndex, outcome: TypeSynthesis) {
        if outcome == TypeSynthesis::NeedsInference {
            self.tracker.report_inference_fallback(self.arena, node);
        }
    }

    fn infer_object_literal(&mut self, properties: &NodeList, multi_line: bool, mode: InferenceMode) -> TypeSynthesis {
        let is_const = mode == InferenceMode::Const;
        let value_mode = if is_const {
            InferenceMode::Const
        } else {
            InferenceMode::Widen
        };
        let readonly = if is_const {
            ModifierFlags::READONLY
        } else {
            ModifierFlags::empty()
        };
        let mut members = Vec::with_capacity(properties.len());
        let mut failed = false;
        for property in properties.iter() {
            let Some(data) = self.arena.data(property).cloned() else {
                continue;
            };
            match data {
                NodeData::PropertyAssignment { name, initializer } => {
                    let Some(name) = self.object_member_name(name) else {
                        failed = true;
                        continue;
                    };
                    match self.infer_expression(initializer, value_mode) {
                        TypeSynthesis::Node(type_node) => members.push(
                            self.arena
                                .create_property_signature(readonly, name, false, type_node),
                        ),
                        outcome => {
                            self.report_nested(initializer, outcome);
                            failed = true;
                        }
                    }
                }
                NodeData::MethodDeclaration(method) => {
                    let Some(name) = self.object_member_name(method.name) else {
                        failed = true;
                        continue;
                    };
                    match self.infer_method_signature(property, name, &method) {
                        Some(signature) => members.push(signature),
                        None => failed = true,
                    }
                }
                NodeData::GetAccessor(getter) => {
                    let Some(name) = self.object_member_name(getter.name) else {
                        failed = true;
                        continue;
                    };
                    let setter = self.find_setter(properties, getter.name);
                    let accessors = AllAccessorDeclarations {
                        first_accessor: property,
                        get_accessor: property,
                        set_accessor: setter,
                    };
                    match self.type_of_accessor(&accessors) {
                        TypeSynthesis::Node(type_node) => {
                            let modifiers = if setter.is_none() {
                                ModifierFlags::READONLY
                            } else {
                                readonly
                            };
                            members.push(
                                self.arena
                                    .create_property_signature(modifiers, name, false, type_node),
                            );
                        }
                        outcome => {
                            self.report_nested(property, outcome);
                            failed = true;
                        }
                    }
                }
                NodeData::SetAccessor(setter) => {
                    if self.has_getter(properties, setter.name) {
                        continue;
                    }
                    let Some(name) = self.object_member_name(setter.name) else {
                        failed = true;
                        continue;
                    };
                    let accessors = AllAccessorDeclarations {
                        first_accessor: property,
                        get_accessor: NodeIndex::NONE,
                        set_accessor: property,
                    };
                    match self.type_of_accessor(&accessors) {
                        TypeSynthesis::Node(type_node) => members.push(
                            self.arena
                                .create_property_signature(readonly, name, false, type_node),
                        ),
                        outcome => {
                            self.report_nested(property, outcome);
                            failed = true;
                        }
                    }
                }
                _ => {
                    // Spread and shorthand members need the types of other
                    // declarations.
                    self.tracker.report_inference_fallback(self.arena, property);
                    failed = true;
                }
            }
        }
        if failed {
            return TypeSynthesis::Reported;
        }
        let multi_line = multi_line && self.options.preserve_type_literal_layout;
        TypeSynthesis::Node(self.arena.create_type_literal(members, multi_line))
    }

    /// Name of an object literal member in a type literal. Computed names must
    /// be literals or accessible entity names.
    fn object_member_name(&mut self, name: NodeIndex) -> Option<NodeIndex> {
        let Some(NodeData::ComputedPropertyName { expression }) = self.arena.data(name) else {
            return Some(name);
        };
        let expression = *expression;
        if is_string_or_numeric_literal(self.arena, expression) {
            return Some(name);
        }
        if is_entity_name_expression(self.arena, expression) {
            let result = self
                .resolver
                .is_entity_name_visible(self.arena, expression, self.enclosing);
            if result.is_accessible() {
                self.tracker.track_symbol(self.arena, &result);
                return Some(name);
            }
        }
        self.tracker.report_inference_fallback(self.arena, name);
        None
    }

    fn find_setter(&self, properties: &NodeList, name: NodeIndex) -> NodeIndex {
        let Some(text) = property_name_text(self.arena, name) else {
            return NodeIndex::NONE;
        };
        properties
            .iter()
            .find(|p| match self.arena.data(*p) {
                Some(NodeData::SetAccessor(setter)) => {
                    property_name_text(self.arena, setter.name).as_deref() == Some(text.as_str())
                }
                _ => false,
            })
            .unwrap_or(NodeIndex::NONE)
    }

    fn has_getter(&self, properties: &NodeList, name: NodeIndex) -> bool {
        let Some(text) = property_name_text(self.arena, name) else {
            return false;
        };
        properties.iter().any(|p| match self.arena.data(p) {
            Some(NodeData::GetAccessor(getter)) => {
                property_name_text(self.arena, getter.name).as_deref() == Some(text.as_str())
            }
            _ => false,
        })
    }

    fn infer_method_signature(
        &mut self,
        method_node: NodeIndex,
        name: NodeIndex,
        method: &FunctionData,
    ) -> Option<NodeIndex> {
        let signature = self.with_enclosing(method_node, |this| {
            let parameters = this.synthesize_parameters(&method.parameters);
            let return_type = match this.return_type_of_signature(method_node) {
                TypeSynthesis::Node(return_type) => Some(return_type),
                outcome => {
                    this.report_nested(method_node, outcome);
                    None
                }
            };
            let type_parameters = this.visit_type_parameters(method.type_parameters.clone());
            Some(MethodSignatureData {
                modifiers: ModifierFlags::empty(),
                name,
                question: method.question,
                type_parameters,
                parameters: parameters?,
                return_type: return_type?,
            })
        })?;
        Some(self.arena.add(NodeData::MethodSignature(signature)))
    }

    /// A function or arrow expression never yields a type node of its own.
    /// Its parameters and return annotation are still synthesized so that
    /// failures inside the signature are reported at their own nodes.
    fn infer_function_expression(&mut self, node: NodeIndex, function: &FunctionData) -> TypeSynthesis {
        self.with_enclosing(node, |this| {
            let parameters = this.synthesize_parameters(&function.parameters);
            let return_type = this.return_type_of_signature(node);
            if !return_type.is_node() {
                this.report_nested(node, return_type);
            }
            if parameters.is_some() && return_type.is_node() {
                TypeSynthesis::NeedsInference
            } else {
                TypeSynthesis::Reported
            }
        })
    }

    /// Parameters of a signature nested in an initializer, each typed from its
    /// annotation or initializer. Every failing parameter is reported.
    fn synthesize_parameters(&mut self, parameters: &NodeList) -> Option<NodeList> {
        let last_required = parameters.nodes.iter().rposition(|p| {
            matches!(
                self.arena.data(*p),
                Some(NodeData::Parameter(data))
                    if data.initializer.is_none() && !data.question && !data.dot_dot_dot
            )
        });
        let mut ok = true;
        let mut synthesized = Vec::with_capacity(parameters.len());
        for (i, parameter) in parameters.iter().enumerate() {
            let Some(NodeData::Parameter(mut data)) = self.arena.data(parameter).cloned() else {
                continue;
            };
            let outcome = match self.type_of_declaration(parameter, false) {
                Ok(outcome) => outcome,
                Err(_) => TypeSynthesis::NeedsInference,
            };
            match outcome {
                TypeSynthesis::Node(type_node) => data.type_node = type_node,
                outcome => {
                    self.report_nested(parameter, outcome);
                    ok = false;
                }
            }
            if data.initializer.is_some() && last_required.is_none_or(|last| i > last) {
                data.question = true;
            }
            data.modifiers = ModifierFlags::empty();
            data.initializer = NodeIndex::NONE;
            synthesized.push(self.arena.update(parameter, NodeData::Parameter(data)));
        }
        ok.then(|| NodeList::from(synthesized))
    }

    fn infer_array_literal(&mut self, node: NodeIndex, elements: &NodeList, mode: InferenceMode) -> TypeSynthesis {
        if mode != InferenceMode::Const {
            self.tracker.report_inference_fallback(self.arena, node);
            return TypeSynthesis::Reported;
        }
        let mut failed = false;
        let mut element_types = Vec::with_capacity(elements.len());
        for element in elements.iter() {
            match self.arena.data(element) {
                Some(NodeData::SpreadElement { .. }) => {
                    self.tracker.report_inference_fallback(self.arena, element);
                    failed = true;
                    continue;
                }
                Some(NodeData::OmittedExpression) => {
                    element_types.push(self.arena.create_keyword_type(TypeKeyword::Undefined));
                    continue;
                }
                _ => {}
            }
            match self.infer_expression(element, InferenceMode::Const) {
                TypeSynthesis::Node(type_node) => element_types.push(type_node),
                outcome => {
                    self.report_nested(element, outcome);
                    failed = true;
                }
            }
        }
        if failed {
            return TypeSynthesis::Reported;
        }
        let tuple = self.arena.create_tuple_type(element_types);
        TypeSynthesis::Node(
            self.arena
                .create_type_operator(TypeOperatorKind::Readonly, tuple),
        )
    }
}

