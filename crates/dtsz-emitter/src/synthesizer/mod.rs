//! Syntactic type synthesis.
//!
//! Produces type nodes for declarations from what is written in the source:
//! annotations are reused (with every referenced name checked for
//! accessibility at the emission site), and unannotated initializers are
//! inferred from their expression shape. When syntax is not enough the result
//! says so and the caller asks the resolver for a serialized type.
//!
//! - `boundary` - recovery boundaries for partial reuse failures
//! - `reuse` - rebuilding written type nodes
//! - `infer` - types of literal-shaped expressions

mod boundary;
mod infer;
mod reuse;

use dtsz_ast::node_utils::{parameters_of, return_type_of};
use dtsz_ast::{NodeArena, NodeData, NodeIndex, TypeKeyword};
use dtsz_common::DeclarationEmitOptions;
use tracing::trace;

use crate::error::EmitError;
use crate::resolver::{AllAccessorDeclarations, EmitResolver};
use crate::tracker::SymbolTracker;
use boundary::RecoveryBoundary;

/// Outcome of a synthesis request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeSynthesis {
    /// A type node valid at the emission site.
    Node(NodeIndex),
    /// Syntax alone does not determine the type and nothing was reported.
    /// The caller reports an inference fallback and serializes semantically.
    NeedsInference,
    /// Synthesis failed and the failure has already been reported. The caller
    /// serializes semantically without reporting again.
    Reported,
}

impl TypeSynthesis {
    #[must_use]
    pub fn node(self) -> Option<NodeIndex> {
        match self {
            TypeSynthesis::Node(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_node(self) -> bool {
        matches!(self, TypeSynthesis::Node(_))
    }
}

/// How literal expressions are typed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InferenceMode {
    /// `let x = 1` gives `number`.
    Widen,
    /// `const x = 1` gives `1`; nested literals still widen.
    PreservePrimitive,
    /// `as const`: literal types everywhere, readonly tuples and properties.
    Const,
}

/// Builds type nodes for one emission site.
pub struct TypeSynthesizer<'s> {
    arena: &'s mut NodeArena,
    resolver: &'s dyn EmitResolver,
    tracker: &'s mut dyn SymbolTracker,
    options: &'s DeclarationEmitOptions,
    enclosing: NodeIndex,
    boundary: RecoveryBoundary,
    reuse_depth: u32,
    inference_depth: u32,
}

impl<'s> TypeSynthesizer<'s> {
    pub fn new(
        arena: &'s mut NodeArena,
        resolver: &'s dyn EmitResolver,
        tracker: &'s mut dyn SymbolTracker,
        options: &'s DeclarationEmitOptions,
        enclosing: NodeIndex,
    ) -> Self {
        Self {
            arena,
            resolver,
            tracker,
            options,
            enclosing,
            boundary: RecoveryBoundary::default(),
            reuse_depth: 0,
            inference_depth: 0,
        }
    }

    /// Type of a variable-like declaration.
    ///
    /// `preserve_literals` keeps a primitive literal initializer as a literal
    /// type (`const` variables, readonly properties).
    pub fn type_of_declaration(
        &mut self,
        declaration: NodeIndex,
        preserve_literals: bool,
    ) -> Result<TypeSynthesis, EmitError> {
        let Some(data) = self.arena.data(declaration).cloned() else {
            return Err(EmitError::UnsupportedDeclaration {
                node: declaration,
                kind: "missing node",
            });
        };
        let mode = if preserve_literals {
            InferenceMode::PreservePrimitive
        } else {
            InferenceMode::Widen
        };
        let result = match data {
            NodeData::Parameter(param) => {
                let result = if param.type_node.is_some() {
                    self.reuse_type_node(param.type_node)
                } else if param.initializer.is_some() {
                    self.type_of_expression(param.initializer, InferenceMode::Widen)
                } else {
                    TypeSynthesis::NeedsInference
                };
                self.add_implicit_undefined(declaration, result)
            }
            NodeData::VariableDeclaration {
                type_node,
                initializer,
                ..
            } => self.type_of_annotated(type_node, initializer, mode),
            NodeData::PropertyDeclaration(prop) => {
                let result = self.type_of_annotated(prop.type_node, prop.initializer, mode);
                if prop.question {
                    self.add_implicit_undefined(declaration, result)
                } else {
                    result
                }
            }
            NodeData::PropertySignature(prop) => {
                self.type_of_annotated(prop.type_node, NodeIndex::NONE, mode)
            }
            NodeData::BindingElement { .. }
            | NodeData::ShorthandPropertyAssignment { .. }
            | NodeData::EnumMember { .. } => TypeSynthesis::NeedsInference,
            NodeData::Binary { right, .. } => self.type_of_expression(right, InferenceMode::Widen),
            NodeData::PropertyAssignment { initializer, .. } => {
                self.type_of_expression(initializer, InferenceMode::Widen)
            }
            NodeData::ExportAssignment { expression, .. } => {
                self.type_of_expression(expression, InferenceMode::PreservePrimitive)
            }
            NodeData::GetAccessor(_) => self.type_of_accessor(&AllAccessorDeclarations {
                first_accessor: declaration,
                get_accessor: declaration,
                set_accessor: NodeIndex::NONE,
            }),
            NodeData::SetAccessor(_) => self.type_of_accessor(&AllAccessorDeclarations {
                first_accessor: declaration,
                get_accessor: NodeIndex::NONE,
                set_accessor: declaration,
            }),
            other => {
                return Err(EmitError::UnsupportedDeclaration {
                    node: declaration,
                    kind: other.kind_name(),
                });
            }
        };
        trace!(declaration = declaration.0, ?result, "type of declaration");
        Ok(result)
    }

    fn type_of_annotated(
        &mut self,
        type_node: NodeIndex,
        initializer: NodeIndex,
        mode: InferenceMode,
    ) -> TypeSynthesis {
        if type_node.is_some() {
            self.reuse_type_node(type_node)
        } else if initializer.is_some() {
            self.type_of_expression(initializer, mode)
        } else {
            TypeSynthesis::NeedsInference
        }
    }

    /// Return type of a function-like declaration. Only a written annotation
    /// is reused; bodies are never inspected.
    pub fn return_type_of_signature(&mut self, signature: NodeIndex) -> TypeSynthesis {
        let return_type = return_type_of(self.arena, signature);
        if return_type.is_none() {
            return TypeSynthesis::NeedsInference;
        }
        self.with_enclosing(signature, |this| this.reuse_type_node(return_type))
    }

    /// Type of an accessor pair: the getter's return annotation, else the
    /// setter parameter's annotation.
    pub fn type_of_accessor(&mut self, accessors: &AllAccessorDeclarations) -> TypeSynthesis {
        let getter_type = return_type_of(self.arena, accessors.get_accessor);
        if getter_type.is_some() {
            return self.reuse_type_node(getter_type);
        }
        let setter_type = self.setter_parameter_type(accessors.set_accessor);
        if setter_type.is_some() {
            return self.reuse_type_node(setter_type);
        }
        TypeSynthesis::NeedsInference
    }

    fn setter_parameter_type(&self, setter: NodeIndex) -> NodeIndex {
        let Some(first) = parameters_of(self.arena, setter).and_then(|params| params.nodes.first())
        else {
            return NodeIndex::NONE;
        };
        match self.arena.data(*first) {
            Some(NodeData::Parameter(param)) => param.type_node,
            _ => NodeIndex::NONE,
        }
    }

    /// Rebuild a written type node for the emission site.
    pub fn reuse_type_node(&mut self, type_node: NodeIndex) -> TypeSynthesis {
        let mark = self.boundary.mark();
        let result = self.visit_type(type_node);
        match self.boundary.outcome_since(mark) {
            Some(outcome) => outcome,
            None => TypeSynthesis::Node(result),
        }
    }

    /// Type of an expression.
    pub fn type_of_expression(&mut self, expression: NodeIndex, mode: InferenceMode) -> TypeSynthesis {
        self.infer_expression(expression, mode)
    }

    /// Append `| undefined` to a parameter type when the resolver says an
    /// initializer or `?` makes it implicitly optional.
    ///
    /// Only types whose every member can take a direct `| undefined` are
    /// rewritten; anything else reports and falls back to the checker.
    fn add_implicit_undefined(&mut self, declaration: NodeIndex, result: TypeSynthesis) -> TypeSynthesis {
        let TypeSynthesis::Node(type_node) = result else {
            return result;
        };
        if !self.options.strict_null_checks
            || !self
                .resolver
                .requires_adding_implicit_undefined(self.arena, declaration, self.enclosing)
        {
            return result;
        }
        if self.includes_undefined(type_node) {
            return result;
        }
        if !self.can_add_undefined(type_node) {
            self.tracker
                .report_implicit_undefined_required(self.arena, declaration);
            return TypeSynthesis::Reported;
        }
        let mut types = match self.arena.data(type_node) {
            Some(NodeData::UnionType { types }) => types.nodes.clone(),
            _ => vec![type_node],
        };
        types.push(self.arena.create_keyword_type(TypeKeyword::Undefined));
        TypeSynthesis::Node(self.arena.create_union_type(types))
    }

    /// `undefined`, `any` and `unknown` already admit `undefined`, directly or
    /// as a union member.
    fn includes_undefined(&self, type_node: NodeIndex) -> bool {
        match self.arena.data(type_node) {
            Some(NodeData::KeywordType { keyword }) => matches!(
                keyword,
                TypeKeyword::Undefined | TypeKeyword::Any | TypeKeyword::Unknown
            ),
            Some(NodeData::UnionType { types }) => types.iter().any(|t| self.includes_undefined(t)),
            Some(NodeData::ParenthesizedType { type_node }) => self.includes_undefined(*type_node),
            _ => false,
        }
    }

    fn can_add_undefined(&self, type_node: NodeIndex) -> bool {
        match self.arena.data(type_node) {
            Some(
                NodeData::KeywordType { .. }
                | NodeData::LiteralType { .. }
                | NodeData::ArrayType { .. }
                | NodeData::TupleType { .. }
                | NodeData::TypeLiteral { .. }
                | NodeData::FunctionType(_)
                | NodeData::ConstructorType(_)
                | NodeData::TemplateLiteralType { .. },
            ) => true,
            Some(NodeData::UnionType { types } | NodeData::IntersectionType { types }) => {
                types.iter().all(|t| self.can_add_undefined(t))
            }
            Some(NodeData::ParenthesizedType { type_node }) => self.can_add_undefined(*type_node),
            _ => false,
        }
    }

    /// Run `f` with `node` as the enclosing declaration.
    fn with_enclosing<T>(&mut self, node: NodeIndex, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.enclosing, node);
        let result = f(self);
        self.enclosing = saved;
        result
    }
}
