//! Class declarations.
//!
//! Member order in the output: the `#private` brand (when the class has
//! ECMAScript private names), late-bound index signatures, constructor
//! parameter properties, then the remaining members in source order.

use dtsz_ast::node_utils::{
    get_declaration_name, has_modifier, identifier_text, is_entity_name_expression, parameters_of,
    property_name_text, return_type_of,
};
use dtsz_ast::{
    AccessorData, ClassData, FunctionData, HeritageToken, ModifierFlags, NodeData, NodeFlags,
    NodeIndex, NodeList, PropertyData,
};
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::smallvec;
use tracing::trace;

use super::{DeclarationTransformer, StatementReplacement, TypeRequest};
use crate::diagnostics::DiagnosticContext;
use crate::error::EmitError;
use crate::resolver::AllAccessorDeclarations;
use crate::tracker::SymbolTracker;

const PARAMETER_PROPERTY_MODIFIERS: ModifierFlags = ModifierFlags::PUBLIC
    .union(ModifierFlags::PRIVATE)
    .union(ModifierFlags::PROTECTED)
    .union(ModifierFlags::READONLY)
    .union(ModifierFlags::OVERRIDE);

/// Per-class state while members are visited.
#[derive(Default)]
struct ClassScope {
    accessors: FxHashMap<(String, bool), AllAccessorDeclarations>,
    private_methods: FxHashSet<(String, bool)>,
}

impl DeclarationTransformer<'_> {
    pub(super) fn transform_class_declaration(
        &mut self,
        statement: NodeIndex,
        class: ClassData,
    ) -> Result<StatementReplacement, EmitError> {
        let modifiers = self.ensure_modifiers(statement);
        self.with_enclosing(statement, |this| {
            this.with_diagnostic_context(DiagnosticContext::None, statement, |this| {
                this.transform_class_body(statement, class, modifiers)
            })
        })
    }

    fn transform_class_body(
        &mut self,
        statement: NodeIndex,
        class: ClassData,
        modifiers: ModifierFlags,
    ) -> Result<StatementReplacement, EmitError> {
        let type_parameters = self.transform_type_parameters(statement, class.type_parameters.as_ref());

        let mut members = Vec::with_capacity(class.members.len() + 1);
        if class.members.iter().any(|m| self.has_private_identifier_name(m)) {
            let brand = self.arena.create_private_identifier("#private");
            members.push(self.arena.create_property_declaration(
                ModifierFlags::empty(),
                brand,
                false,
                NodeIndex::NONE,
                NodeIndex::NONE,
            ));
        }
        let enclosing = self.enclosing;
        members.extend(self.resolver.create_late_bound_index_signatures(
            self.arena,
            statement,
            enclosing,
            &mut self.tracker,
        ));
        if let Some(constructor) = self.first_constructor_with_body(&class.members) {
            members.extend(self.transform_parameter_properties(constructor)?);
        }

        let mut scope = ClassScope {
            accessors: self.collect_accessor_pairs(&class.members),
            ..ClassScope::default()
        };
        for member in class.members.iter() {
            if let Some(member) = self.transform_class_member(member, &mut scope)? {
                members.push(member);
            }
        }

        let (heritage_clauses, base_statement) = self.transform_class_heritage(statement, &class)?;
        let class_declaration = self.arena.update(
            statement,
            NodeData::ClassDeclaration(ClassData {
                modifiers,
                name: class.name,
                type_parameters,
                heritage_clauses,
                members: members.into(),
            }),
        );
        Ok(match base_statement {
            Some(base) => smallvec![base, class_declaration],
            None => smallvec![class_declaration],
        })
    }

    fn has_private_identifier_name(&self, member: NodeIndex) -> bool {
        let name = get_declaration_name(self.arena, member);
        matches!(self.arena.data(name), Some(NodeData::PrivateIdentifier { .. }))
    }

    fn first_constructor_with_body(&self, members: &NodeList) -> Option<NodeIndex> {
        members.iter().find(|&member| {
            matches!(self.arena.data(member), Some(NodeData::Constructor(f)) if f.body.is_some())
        })
    }

    /// Key for pairing accessors: name text and whether the member is static.
    fn accessor_key(&self, member: NodeIndex) -> Option<(String, bool)> {
        let name = get_declaration_name(self.arena, member);
        let text = property_name_text(self.arena, name)?;
        let is_static = has_modifier(self.arena, member, ModifierFlags::STATIC);
        Some((text, is_static))
    }

    fn collect_accessor_pairs(&self, members: &NodeList) -> FxHashMap<(String, bool), AllAccessorDeclarations> {
        let mut pairs: FxHashMap<(String, bool), AllAccessorDeclarations> = FxHashMap::default();
        for member in members.iter() {
            let is_getter = match self.arena.data(member) {
                Some(NodeData::GetAccessor(_)) => true,
                Some(NodeData::SetAccessor(_)) => false,
                _ => continue,
            };
            let Some(key) = self.accessor_key(member) else {
                continue;
            };
            let pair = pairs.entry(key).or_default();
            if pair.first_accessor.is_none() {
                pair.first_accessor = member;
            }
            if is_getter && pair.get_accessor.is_none() {
                pair.get_accessor = member;
            } else if !is_getter && pair.set_accessor.is_none() {
                pair.set_accessor = member;
            }
        }
        pairs
    }

    fn accessors_of(&self, member: NodeIndex, scope: &ClassScope) -> AllAccessorDeclarations {
        if let Some(pair) = self.resolver.get_all_accessor_declarations(self.arena, member) {
            return pair;
        }
        self.accessor_key(member)
            .and_then(|key| scope.accessors.get(&key).copied())
            .unwrap_or_else(|| {
                let is_getter = matches!(self.arena.data(member), Some(NodeData::GetAccessor(_)));
                AllAccessorDeclarations {
                    first_accessor: member,
                    get_accessor: if is_getter { member } else { NodeIndex::NONE },
                    set_accessor: if is_getter { NodeIndex::NONE } else { member },
                }
            })
    }

    // =========================================================================
    // Members
    // =========================================================================

    fn transform_class_member(
        &mut self,
        member: NodeIndex,
        scope: &mut ClassScope,
    ) -> Result<Option<NodeIndex>, EmitError> {
        if self.should_strip_internal(member) {
            return Ok(None);
        }
        let Some(data) = self.arena.data(member).cloned() else {
            return Ok(None);
        };
        if self.has_private_identifier_name(member) {
            return Ok(None);
        }
        if !self.keep_dynamic_name(member, true) {
            return Ok(None);
        }
        let is_private = has_modifier(self.arena, member, ModifierFlags::PRIVATE);

        let transformed = match data {
            NodeData::Constructor(constructor) => {
                if self.resolver.is_implementation_of_overload(self.arena, member) {
                    return Ok(None);
                }
                let modifiers = self.ensure_member_modifiers(member);
                let parameters = if is_private {
                    NodeList::new()
                } else {
                    self.with_enclosing(member, |this| this.transform_parameters(member, &constructor.parameters))?
                };
                self.arena.update(
                    member,
                    NodeData::Constructor(FunctionData {
                        modifiers,
                        asterisk: false,
                        question: false,
                        type_parameters: None,
                        parameters,
                        return_type: NodeIndex::NONE,
                        body: NodeIndex::NONE,
                        ..constructor
                    }),
                )
            }
            NodeData::MethodDeclaration(method) => {
                if self.resolver.is_implementation_of_overload(self.arena, member) {
                    return Ok(None);
                }
                let modifiers = self.ensure_member_modifiers(member);
                if is_private {
                    // Every overload collapses into one untyped `private m;`.
                    if let Some(key) = self.accessor_key(member)
                        && !scope.private_methods.insert(key)
                    {
                        return Ok(None);
                    }
                    return Ok(Some(self.arena.create_property_declaration(
                        modifiers,
                        method.name,
                        method.question,
                        NodeIndex::NONE,
                        NodeIndex::NONE,
                    )));
                }
                let (type_parameters, parameters, return_type) = self.with_enclosing(member, |this| {
                    let type_parameters = this.transform_type_parameters(member, method.type_parameters.as_ref());
                    let parameters = this.transform_parameters(member, &method.parameters)?;
                    let return_type = this.transform_return_type(member)?;
                    Ok::<_, EmitError>((type_parameters, parameters, return_type))
                })?;
                self.arena.update(
                    member,
                    NodeData::MethodDeclaration(FunctionData {
                        modifiers,
                        asterisk: false,
                        name: method.name,
                        question: method.question,
                        type_parameters,
                        parameters,
                        return_type,
                        body: NodeIndex::NONE,
                    }),
                )
            }
            NodeData::PropertyDeclaration(property) => {
                let modifiers = self.ensure_member_modifiers(member);
                let type_node = if is_private {
                    NodeIndex::NONE
                } else {
                    let preserve_literals = property.modifiers.contains(ModifierFlags::READONLY) && !property.question;
                    self.with_diagnostic_context(DiagnosticContext::Property(member), member, |this| {
                        this.ensure_type(member, TypeRequest::Declaration { preserve_literals })
                    })?
                };
                self.arena.update(
                    member,
                    NodeData::PropertyDeclaration(PropertyData {
                        modifiers,
                        exclamation: false,
                        type_node,
                        initializer: NodeIndex::NONE,
                        ..property
                    }),
                )
            }
            NodeData::GetAccessor(_) | NodeData::SetAccessor(_) => {
                return self.transform_accessor(member, is_private, scope);
            }
            NodeData::IndexSignature(index) => self.transform_index_signature(member, index)?,
            NodeData::ClassStaticBlock { .. } | NodeData::SemicolonClassElement => return Ok(None),
            _ => member,
        };
        Ok(Some(transformed))
    }

    /// A getter/setter pair with at most one annotated side merges into one
    /// property at the first accessor's position. Lone accessors and pairs
    /// annotated on both sides stay accessors.
    fn transform_accessor(
        &mut self,
        member: NodeIndex,
        is_private: bool,
        scope: &ClassScope,
    ) -> Result<Option<NodeIndex>, EmitError> {
        let accessors = self.accessors_of(member, scope);
        let getter_annotated = return_type_of(self.arena, accessors.get_accessor).is_some();
        let setter_annotated = self.setter_value_parameter(accessors.set_accessor).is_some_and(|p| {
            matches!(self.arena.data(p), Some(NodeData::Parameter(param)) if param.type_node.is_some())
        });

        if accessors.is_paired() && !(getter_annotated && setter_annotated) {
            if member != accessors.first_accessor {
                return Ok(None);
            }
            return self.merge_accessor_pair(member, is_private, accessors).map(Some);
        }

        let Some(data) = self.arena.data(member).cloned() else {
            return Ok(None);
        };
        let modifiers = self.ensure_member_modifiers(member);
        let transformed = match data {
            NodeData::GetAccessor(getter) => {
                let return_type = if is_private {
                    NodeIndex::NONE
                } else {
                    let request = if getter_annotated {
                        TypeRequest::Declaration { preserve_literals: false }
                    } else {
                        TypeRequest::Accessor(accessors)
                    };
                    self.with_diagnostic_context(DiagnosticContext::Accessor(member), member, |this| {
                        this.ensure_type(member, request)
                    })?
                };
                self.arena.update(
                    member,
                    NodeData::GetAccessor(AccessorData {
                        modifiers,
                        parameters: NodeList::new(),
                        return_type,
                        body: NodeIndex::NONE,
                        ..getter
                    }),
                )
            }
            NodeData::SetAccessor(setter) => {
                let value = self.transform_setter_value(member, is_private, setter_annotated, accessors)?;
                self.arena.update(
                    member,
                    NodeData::SetAccessor(AccessorData {
                        modifiers,
                        parameters: NodeList::from(vec![value]),
                        return_type: NodeIndex::NONE,
                        body: NodeIndex::NONE,
                        ..setter
                    }),
                )
            }
            _ => member,
        };
        Ok(Some(transformed))
    }

    fn merge_accessor_pair(
        &mut self,
        member: NodeIndex,
        is_private: bool,
        accessors: AllAccessorDeclarations,
    ) -> Result<NodeIndex, EmitError> {
        let name = get_declaration_name(self.arena, member);
        let modifiers = self.ensure_member_modifiers(member);
        let type_node = if is_private {
            NodeIndex::NONE
        } else {
            let error_node = if accessors.get_accessor.is_some() {
                accessors.get_accessor
            } else {
                member
            };
            self.with_diagnostic_context(DiagnosticContext::Accessor(error_node), error_node, |this| {
                this.ensure_type(error_node, TypeRequest::Accessor(accessors))
            })?
        };
        trace!(member = member.0, "accessor pair merged into a property");
        Ok(self
            .arena
            .create_property_declaration(modifiers, name, false, type_node, NodeIndex::NONE))
    }

    /// The setter's value parameter: its own annotation, else the getter's,
    /// else whatever the pair resolves to. Private setters keep an untyped
    /// `value`.
    fn transform_setter_value(
        &mut self,
        setter: NodeIndex,
        is_private: bool,
        setter_annotated: bool,
        accessors: AllAccessorDeclarations,
    ) -> Result<NodeIndex, EmitError> {
        let parameter = match self.setter_value_parameter(setter) {
            Some(parameter) if !is_private => parameter,
            _ => return Ok(self.arena.create_simple_parameter("value", NodeIndex::NONE)),
        };
        self.with_diagnostic_context(DiagnosticContext::Accessor(setter), setter, |this| {
            let type_override = if setter_annotated {
                None
            } else {
                Some(this.ensure_type(setter, TypeRequest::Accessor(accessors))?)
            };
            this.with_enclosing(setter, |this| this.transform_parameter(setter, parameter, &[], type_override))
        })
    }

    fn setter_value_parameter(&self, setter: NodeIndex) -> Option<NodeIndex> {
        parameters_of(self.arena, setter)
            .and_then(|parameters| parameters.nodes.first().copied())
    }

    // =========================================================================
    // Parameter properties
    // =========================================================================

    /// `constructor(private readonly x: T)` declares `private readonly x;`
    /// on the class. Destructured parameter properties declare each leaf.
    fn transform_parameter_properties(&mut self, constructor: NodeIndex) -> Result<Vec<NodeIndex>, EmitError> {
        let parameters = match self.arena.data(constructor) {
            Some(NodeData::Constructor(f)) => f.parameters.clone(),
            _ => return Ok(Vec::new()),
        };
        let mut properties = Vec::new();
        for parameter in parameters.iter() {
            let Some(NodeData::Parameter(data)) = self.arena.data(parameter).cloned() else {
                continue;
            };
            if !data.modifiers.intersects(PARAMETER_PROPERTY_MODIFIERS) || self.should_strip_internal(parameter) {
                continue;
            }
            let modifiers = self.ensure_member_modifiers(parameter);
            let is_private = data.modifiers.contains(ModifierFlags::PRIVATE);
            if matches!(self.arena.data(data.name), Some(NodeData::Identifier { .. })) {
                let type_node = if is_private {
                    NodeIndex::NONE
                } else {
                    self.with_diagnostic_context(DiagnosticContext::Property(parameter), parameter, |this| {
                        this.ensure_type(parameter, TypeRequest::Declaration { preserve_literals: false })
                    })?
                };
                properties.push(self.arena.create_property_declaration(
                    modifiers,
                    data.name,
                    data.question,
                    type_node,
                    NodeIndex::NONE,
                ));
            } else {
                self.collect_binding_properties(parameter, data.name, modifiers, &mut properties)?;
            }
        }
        Ok(properties)
    }

    fn collect_binding_properties(
        &mut self,
        parameter: NodeIndex,
        pattern: NodeIndex,
        modifiers: ModifierFlags,
        out: &mut Vec<NodeIndex>,
    ) -> Result<(), EmitError> {
        let elements = match self.arena.data(pattern) {
            Some(
                NodeData::ObjectBindingPattern { elements } | NodeData::ArrayBindingPattern { elements },
            ) => elements.clone(),
            _ => return Ok(()),
        };
        for element in elements.iter() {
            let Some(NodeData::BindingElement { name, .. }) = self.arena.data(element).cloned() else {
                continue;
            };
            if matches!(
                self.arena.data(name),
                Some(NodeData::ObjectBindingPattern { .. } | NodeData::ArrayBindingPattern { .. })
            ) {
                self.collect_binding_properties(parameter, name, modifiers, out)?;
                continue;
            }
            let type_node = self.with_diagnostic_context(DiagnosticContext::Property(parameter), element, |this| {
                this.ensure_type(element, TypeRequest::Declaration { preserve_literals: false })
            })?;
            out.push(
                self.arena
                    .create_property_declaration(modifiers, name, false, type_node, NodeIndex::NONE),
            );
        }
        Ok(())
    }

    // =========================================================================
    // Heritage
    // =========================================================================

    /// Heritage clauses of a class. An `extends` expression that is not an
    /// entity name is hoisted into `declare const <Name>_base: T;` and the
    /// class extends that constant instead.
    fn transform_class_heritage(
        &mut self,
        statement: NodeIndex,
        class: &ClassData,
    ) -> Result<(Option<NodeList>, Option<NodeIndex>), EmitError> {
        let Some(clauses) = class.heritage_clauses.as_ref() else {
            return Ok((None, None));
        };
        let Some((extends_clause, base_type)) = self.extends_type(clauses) else {
            return Ok((self.transform_heritage_clauses(statement, Some(clauses)), None));
        };
        let Some(NodeData::ExpressionWithTypeArguments { expression, .. }) = self.arena.data(base_type) else {
            return Ok((self.transform_heritage_clauses(statement, Some(clauses)), None));
        };
        let expression = *expression;
        if is_entity_name_expression(self.arena, expression)
            || matches!(self.arena.data(expression), Some(NodeData::NullLiteral))
        {
            return Ok((self.transform_heritage_clauses(statement, Some(clauses)), None));
        }

        let base_name = format!(
            "{}_base",
            identifier_text(self.arena, class.name).unwrap_or("default")
        );
        let base_name = self.unique_name(&base_name);
        let context = DiagnosticContext::Heritage {
            owner: statement,
            token: HeritageToken::Extends,
            expression: base_type,
        };
        let type_node = self.with_diagnostic_context(context, base_type, |this| {
            this.tracker.report_inference_fallback(this.arena, base_type);
            this.semantic_type_of_expression(expression)
        });
        let id = self.arena.create_identifier(&base_name);
        let declaration = self.arena.create_variable_declaration(id, type_node, NodeIndex::NONE);
        let modifiers = if self.needs_declare && self.container == self.current_file {
            ModifierFlags::AMBIENT
        } else {
            ModifierFlags::empty()
        };
        let base_statement = self
            .arena
            .create_variable_statement(modifiers, NodeFlags::CONST, vec![declaration]);

        let mut out = Vec::with_capacity(clauses.len());
        for clause in clauses.iter() {
            if clause != extends_clause {
                if let Some(kept) = self.transform_heritage_clauses(statement, Some(&NodeList::from(vec![clause]))) {
                    out.extend(kept.iter());
                }
                continue;
            }
            let base_reference = self.arena.create_identifier(&base_name);
            let heritage_type =
                self.transform_heritage_type(statement, HeritageToken::Extends, base_type, Some(base_reference));
            out.push(self.arena.update(
                clause,
                NodeData::HeritageClause {
                    token: HeritageToken::Extends,
                    types: NodeList::from(vec![heritage_type]),
                },
            ));
        }
        Ok((Some(out.into()), Some(base_statement)))
    }

    fn extends_type(&self, clauses: &NodeList) -> Option<(NodeIndex, NodeIndex)> {
        clauses.iter().find_map(|clause| match self.arena.data(clause) {
            Some(NodeData::HeritageClause {
                token: HeritageToken::Extends,
                types,
            }) => types.nodes.first().map(|&first| (clause, first)),
            _ => None,
        })
    }
}
