//! Declaration emit diagnostics and accessibility-message selection.
//!
//! When a serialized type references a name that cannot be written at the
//! emission site, the message depends on what is being emitted: a variable,
//! a static method's parameter, an interface's call signature, and so on.
//! The transformer installs a [`DiagnosticContext`] before each type
//! position; the tracker asks it to pick a message for the failing result.

use dtsz_ast::node_utils::{declaration_name_text, get_declaration_name, has_modifier};
use dtsz_ast::{HeritageToken, ModifierFlags, NodeArena, NodeData, NodeIndex};
use dtsz_common::diagnostics::{diagnostic_codes, format_message, get_diagnostic_message};
use dtsz_common::{Diagnostic, DiagnosticCategory};

use crate::resolver::{SymbolAccessibility, SymbolAccessibilityResult};

/// A diagnostic produced by declaration emit, anchored to an arena node.
#[derive(Clone, Debug, PartialEq)]
pub struct DeclarationDiagnostic {
    pub file_name: String,
    pub node: NodeIndex,
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message_text: String,
    pub related: Vec<DeclarationDiagnostic>,
}

impl DeclarationDiagnostic {
    /// Build a diagnostic from the message table, filling `{n}` placeholders.
    #[must_use]
    pub fn new(file_name: String, node: NodeIndex, code: u32, args: &[&str]) -> Self {
        let (category, message_text) = match get_diagnostic_message(code) {
            Some(message) => (message.category, format_message(message.message, args)),
            None => (DiagnosticCategory::Error, format!("declaration emit error {code}")),
        };
        Self {
            file_name,
            node,
            code,
            category,
            message_text,
            related: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_related(mut self, related: DeclarationDiagnostic) -> Self {
        self.related.push(related);
        self
    }

    /// Resolve node positions into a presentation diagnostic.
    #[must_use]
    pub fn to_diagnostic(&self, arena: &NodeArena) -> Diagnostic {
        let (start, length) = span_of(arena, self.node);
        let mut diagnostic = Diagnostic::error(
            self.file_name.clone(),
            start,
            length,
            self.message_text.clone(),
            self.code,
        );
        diagnostic.category = self.category;
        for related in &self.related {
            let (start, length) = span_of(arena, related.node);
            diagnostic = diagnostic.with_related(
                related.file_name.clone(),
                start,
                length,
                related.message_text.clone(),
            );
        }
        diagnostic
    }
}

fn span_of(arena: &NodeArena, node: NodeIndex) -> (u32, u32) {
    arena
        .get(node)
        .map_or((0, 0), |n| (n.pos, n.end.saturating_sub(n.pos)))
}

/// What the transformer is emitting when a type is serialized.
///
/// Nodes carry no parent links, so variants that need the owner's kind to
/// pick a message store the owner alongside the node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiagnosticContext {
    None,
    /// Variable declaration, binding element, or expando assignment.
    Variable(NodeIndex),
    /// Property declaration or signature, or a constructor parameter property.
    Property(NodeIndex),
    Accessor(NodeIndex),
    ReturnType(NodeIndex),
    Parameter { parameter: NodeIndex, signature: NodeIndex },
    TypeParameter { type_parameter: NodeIndex, owner: NodeIndex },
    Heritage { owner: NodeIndex, token: HeritageToken, expression: NodeIndex },
    TypeAlias(NodeIndex),
    DefaultExport(NodeIndex),
    ImportEquals(NodeIndex),
}

/// Message chosen for an inaccessible result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedDiagnostic {
    pub code: u32,
    /// Name of the declaration being emitted, when the message leads with it.
    pub type_name: Option<String>,
    pub error_node: NodeIndex,
}

/// `cannot be named` / `private module` / `private name` by result shape.
fn pick(result: &SymbolAccessibilityResult, cannot_be_named: u32, module: u32, name: u32) -> u32 {
    if result.error_module_name.is_some() {
        if result.accessibility == SymbolAccessibility::CannotBeNamed {
            cannot_be_named
        } else {
            module
        }
    } else {
        name
    }
}

/// Messages without a "cannot be named" variant.
fn pick_module(result: &SymbolAccessibilityResult, module: u32, name: u32) -> u32 {
    if result.error_module_name.is_some() {
        module
    } else {
        name
    }
}

fn is_static(arena: &NodeArena, node: NodeIndex) -> bool {
    has_modifier(arena, node, ModifierFlags::STATIC)
}

fn name_or_self(arena: &NodeArena, node: NodeIndex) -> NodeIndex {
    let name = get_declaration_name(arena, node);
    if name.is_some() { name } else { node }
}

impl DiagnosticContext {
    /// Pick the message for `result` in this context.
    #[must_use]
    pub fn select(
        &self,
        arena: &NodeArena,
        result: &SymbolAccessibilityResult,
    ) -> SelectedDiagnostic {
        use diagnostic_codes as c;

        let named = |code: u32, node: NodeIndex, error_node: NodeIndex| SelectedDiagnostic {
            code,
            type_name: Some(declaration_name_text(arena, node)),
            error_node,
        };

        match *self {
            DiagnosticContext::None => SelectedDiagnostic {
                code: pick_module(
                    result,
                    c::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME_FROM_MODULE,
                    c::DECLARATION_EMIT_FOR_THIS_FILE_REQUIRES_USING_PRIVATE_NAME,
                ),
                type_name: None,
                error_node: result.error_node,
            },
            DiagnosticContext::Variable(node) => named(
                pick(
                    result,
                    c::EXPORTED_VARIABLE_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                    c::EXPORTED_VARIABLE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                    c::EXPORTED_VARIABLE_HAS_OR_IS_USING_PRIVATE_NAME,
                ),
                node,
                node,
            ),
            DiagnosticContext::Property(node) => {
                let code = if is_static(arena, node) {
                    pick(
                        result,
                        c::PUBLIC_STATIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::PUBLIC_STATIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PUBLIC_STATIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    )
                } else if matches!(
                    arena.data(node),
                    Some(NodeData::PropertyDeclaration(_) | NodeData::Parameter(_))
                ) {
                    pick(
                        result,
                        c::PUBLIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::PUBLIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PUBLIC_PROPERTY_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    )
                } else {
                    pick_module(
                        result,
                        c::PROPERTY_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PROPERTY_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    )
                };
                named(code, node, node)
            }
            DiagnosticContext::Accessor(node) => {
                let statik = is_static(arena, node);
                let code = match arena.data(node) {
                    Some(NodeData::SetAccessor(_)) if statik => pick_module(
                        result,
                        c::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_TYPE_OF_PUBLIC_STATIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::SetAccessor(_)) => pick_module(
                        result,
                        c::PARAMETER_TYPE_OF_PUBLIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_TYPE_OF_PUBLIC_SETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    _ if statik => pick(
                        result,
                        c::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_PUBLIC_STATIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    _ => pick(
                        result,
                        c::RETURN_TYPE_OF_PUBLIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::RETURN_TYPE_OF_PUBLIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_PUBLIC_GETTER_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                };
                named(code, node, name_or_self(arena, node))
            }
            DiagnosticContext::ReturnType(signature) => {
                let code = match arena.data(signature) {
                    Some(NodeData::ConstructSignature(_) | NodeData::ConstructorType(_)) => pick_module(
                        result,
                        c::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::CallSignature(_)) => pick_module(
                        result,
                        c::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::IndexSignature(_)) => pick_module(
                        result,
                        c::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::MethodDeclaration(_)) if is_static(arena, signature) => pick(
                        result,
                        c::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::MethodDeclaration(_)) => pick(
                        result,
                        c::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::MethodSignature(_)) => pick_module(
                        result,
                        c::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    _ => pick(
                        result,
                        c::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::RETURN_TYPE_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                };
                SelectedDiagnostic {
                    code,
                    type_name: None,
                    error_node: name_or_self(arena, signature),
                }
            }
            DiagnosticContext::Parameter {
                parameter,
                signature,
            } => {
                let code = match arena.data(signature) {
                    Some(NodeData::Constructor(_)) => pick(
                        result,
                        c::PARAMETER_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::PARAMETER_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_CONSTRUCTOR_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::ConstructSignature(_) | NodeData::ConstructorType(_)) => pick_module(
                        result,
                        c::PARAMETER_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::CallSignature(_)) => pick_module(
                        result,
                        c::PARAMETER_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::IndexSignature(_)) => pick_module(
                        result,
                        c::PARAMETER_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_INDEX_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::MethodDeclaration(_)) if is_static(arena, signature) => pick(
                        result,
                        c::PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::MethodDeclaration(_)) => pick(
                        result,
                        c::PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::MethodSignature(_)) => pick_module(
                        result,
                        c::PARAMETER_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    Some(NodeData::GetAccessor(_) | NodeData::SetAccessor(_)) => pick(
                        result,
                        c::PARAMETER_OF_ACCESSOR_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::PARAMETER_OF_ACCESSOR_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_ACCESSOR_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    _ => pick(
                        result,
                        c::PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_EXTERNAL_MODULE_BUT_CANNOT_BE_NAMED,
                        c::PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_NAME_FROM_PRIVATE_MODULE,
                        c::PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                };
                named(code, parameter, parameter)
            }
            DiagnosticContext::TypeParameter {
                type_parameter,
                owner,
            } => {
                let code = match arena.data(owner) {
                    Some(NodeData::ClassDeclaration(_) | NodeData::ClassExpression(_)) => {
                        c::TYPE_PARAMETER_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::InterfaceDeclaration(_)) => {
                        c::TYPE_PARAMETER_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::MappedType(_)) => {
                        c::TYPE_PARAMETER_FOR_THE_EXPORTED_MAPPED_OBJECT_TYPE_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::ConstructSignature(_) | NodeData::ConstructorType(_)) => {
                        c::TYPE_PARAMETER_OF_CONSTRUCTOR_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::CallSignature(_)) => {
                        c::TYPE_PARAMETER_OF_CALL_SIGNATURE_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::MethodDeclaration(_)) if is_static(arena, owner) => {
                        c::TYPE_PARAMETER_OF_PUBLIC_STATIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::MethodDeclaration(_)) => {
                        c::TYPE_PARAMETER_OF_PUBLIC_METHOD_FROM_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::MethodSignature(_)) => {
                        c::TYPE_PARAMETER_OF_METHOD_FROM_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    Some(NodeData::TypeAliasDeclaration(_)) => {
                        c::TYPE_PARAMETER_OF_EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    _ => c::TYPE_PARAMETER_OF_EXPORTED_FUNCTION_HAS_OR_IS_USING_PRIVATE_NAME,
                };
                named(code, type_parameter, type_parameter)
            }
            DiagnosticContext::Heritage {
                owner,
                token,
                expression,
            } => {
                let code = match (arena.data(owner), token) {
                    (Some(NodeData::InterfaceDeclaration(_)), _) => {
                        c::EXTENDS_CLAUSE_OF_EXPORTED_INTERFACE_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    (_, HeritageToken::Implements) => {
                        c::IMPLEMENTS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                    (_, HeritageToken::Extends) => {
                        c::EXTENDS_CLAUSE_OF_EXPORTED_CLASS_HAS_OR_IS_USING_PRIVATE_NAME
                    }
                };
                named(code, owner, expression)
            }
            DiagnosticContext::TypeAlias(alias) => {
                let error_node = match arena.data(alias) {
                    Some(NodeData::TypeAliasDeclaration(data)) => data.type_node,
                    _ => alias,
                };
                named(
                    pick_module(
                        result,
                        c::EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME_FROM_MODULE,
                        c::EXPORTED_TYPE_ALIAS_HAS_OR_IS_USING_PRIVATE_NAME,
                    ),
                    alias,
                    error_node,
                )
            }
            DiagnosticContext::DefaultExport(node) => SelectedDiagnostic {
                code: c::DEFAULT_EXPORT_OF_THE_MODULE_HAS_OR_IS_USING_PRIVATE_NAME,
                type_name: None,
                error_node: node,
            },
            DiagnosticContext::ImportEquals(node) => named(
                c::IMPORT_DECLARATION_IS_USING_PRIVATE_NAME,
                node,
                node,
            ),
        }
    }
}

#[cfg(test)]
#[path = "../tests/diagnostics.rs"]
mod tests;
