//! Read-only queries over arena nodes.

use crate::arena::NodeArena;
use crate::base::{NodeIndex, NodeList};
use crate::flags::ModifierFlags;
use crate::node::{NodeData, PrefixOperator};

/// Reserved words that cannot be used as a binding name.
const RESERVED_WORDS: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "implements", "interface", "let", "package",
    "private", "protected", "public", "static", "yield", "await",
];

#[must_use]
pub fn is_reserved_word(text: &str) -> bool {
    RESERVED_WORDS.contains(&text)
}

/// Text is a syntactically valid identifier (reserved words included).
#[must_use]
pub fn is_identifier_text(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first == '_' || first == '$' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c == '$' || c.is_alphanumeric())
}

/// Text can be used as a variable name in a declaration.
#[must_use]
pub fn is_binding_identifier_text(text: &str) -> bool {
    is_identifier_text(text) && !is_reserved_word(text)
}

/// Text of an identifier, private identifier, or string/numeric literal.
#[must_use]
pub fn node_text(arena: &NodeArena, idx: NodeIndex) -> Option<&str> {
    match arena.data(idx)? {
        NodeData::Identifier { text }
        | NodeData::PrivateIdentifier { text }
        | NodeData::StringLiteral { text }
        | NodeData::NumericLiteral { text }
        | NodeData::NoSubstitutionTemplateLiteral { text } => Some(text),
        _ => None,
    }
}

#[must_use]
pub fn identifier_text(arena: &NodeArena, idx: NodeIndex) -> Option<&str> {
    match arena.data(idx)? {
        NodeData::Identifier { text } => Some(text),
        _ => None,
    }
}

/// Name node of a declaration, or `NONE`.
#[must_use]
pub fn get_declaration_name(arena: &NodeArena, idx: NodeIndex) -> NodeIndex {
    let Some(data) = arena.data(idx) else {
        return NodeIndex::NONE;
    };
    match data {
        NodeData::FunctionDeclaration(f)
        | NodeData::FunctionExpression(f)
        | NodeData::MethodDeclaration(f) => f.name,
        NodeData::ClassDeclaration(c) | NodeData::ClassExpression(c) => c.name,
        NodeData::InterfaceDeclaration(i) => i.name,
        NodeData::TypeAliasDeclaration(t) => t.name,
        NodeData::EnumDeclaration(e) => e.name,
        NodeData::ModuleDeclaration(m) => m.name,
        NodeData::Parameter(p) => p.name,
        NodeData::TypeParameter(t) => t.name,
        NodeData::PropertySignature(p) | NodeData::PropertyDeclaration(p) => p.name,
        NodeData::MethodSignature(m) => m.name,
        NodeData::GetAccessor(a) | NodeData::SetAccessor(a) => a.name,
        NodeData::VariableDeclaration { name, .. }
        | NodeData::BindingElement { name, .. }
        | NodeData::EnumMember { name, .. }
        | NodeData::PropertyAssignment { name, .. }
        | NodeData::ShorthandPropertyAssignment { name }
        | NodeData::ImportEqualsDeclaration { name, .. }
        | NodeData::NamespaceImport { name }
        | NodeData::ImportSpecifier { name, .. }
        | NodeData::ExportSpecifier { name, .. }
        | NodeData::NamespaceExport { name } => *name,
        NodeData::ImportClause { name, .. } => *name,
        NodeData::Binary { left, .. } => match arena.data(*left) {
            Some(NodeData::PropertyAccess { name, .. }) => *name,
            _ => NodeIndex::NONE,
        },
        _ => NodeIndex::NONE,
    }
}

/// Printable name of a declaration for diagnostics (`"(Missing)"` when absent).
#[must_use]
pub fn declaration_name_text(arena: &NodeArena, idx: NodeIndex) -> String {
    let name = get_declaration_name(arena, idx);
    if name.is_none() {
        return match arena.data(idx) {
            Some(NodeData::ExportAssignment { .. }) => "default".to_string(),
            _ => "(Missing)".to_string(),
        };
    }
    property_name_text(arena, name)
        .or_else(|| entity_name_text(arena, name))
        .unwrap_or_else(|| "(Missing)".to_string())
}

/// Static text of a property name (identifier, literal, or literal computed key).
#[must_use]
pub fn property_name_text(arena: &NodeArena, name: NodeIndex) -> Option<String> {
    match arena.data(name)? {
        NodeData::Identifier { text }
        | NodeData::PrivateIdentifier { text }
        | NodeData::StringLiteral { text }
        | NodeData::NumericLiteral { text }
        | NodeData::NoSubstitutionTemplateLiteral { text } => Some(text.clone()),
        NodeData::ComputedPropertyName { expression } => match arena.data(*expression)? {
            NodeData::StringLiteral { text }
            | NodeData::NumericLiteral { text }
            | NodeData::NoSubstitutionTemplateLiteral { text } => Some(text.clone()),
            _ => None,
        },
        _ => None,
    }
}

/// Dotted text of an entity name or entity name expression.
#[must_use]
pub fn entity_name_text(arena: &NodeArena, idx: NodeIndex) -> Option<String> {
    match arena.data(idx)? {
        NodeData::Identifier { text } => Some(text.clone()),
        NodeData::ThisExpression => Some("this".to_string()),
        NodeData::QualifiedName { left, right } => Some(format!(
            "{}.{}",
            entity_name_text(arena, *left)?,
            entity_name_text(arena, *right)?
        )),
        NodeData::PropertyAccess { expression, name } => Some(format!(
            "{}.{}",
            entity_name_text(arena, *expression)?,
            entity_name_text(arena, *name)?
        )),
        NodeData::ExpressionWithTypeArguments { expression, .. } => {
            entity_name_text(arena, *expression)
        }
        _ => None,
    }
}

/// Leftmost identifier of an entity name.
#[must_use]
pub fn first_identifier(arena: &NodeArena, idx: NodeIndex) -> NodeIndex {
    match arena.data(idx) {
        Some(NodeData::Identifier { .. }) => idx,
        Some(NodeData::QualifiedName { left, .. }) => first_identifier(arena, *left),
        Some(NodeData::PropertyAccess { expression, .. }) => first_identifier(arena, *expression),
        Some(NodeData::ExpressionWithTypeArguments { expression, .. }) => {
            first_identifier(arena, *expression)
        }
        _ => NodeIndex::NONE,
    }
}

/// `a`, `a.b.c` as a property access chain of identifiers.
#[must_use]
pub fn is_entity_name_expression(arena: &NodeArena, idx: NodeIndex) -> bool {
    match arena.data(idx) {
        Some(NodeData::Identifier { .. }) => true,
        Some(NodeData::PropertyAccess { expression, name }) => {
            matches!(arena.data(*name), Some(NodeData::Identifier { .. }))
                && is_entity_name_expression(arena, *expression)
        }
        _ => false,
    }
}

/// Primitive literal expression, including negative numeric literals.
#[must_use]
pub fn is_primitive_literal_expression(arena: &NodeArena, idx: NodeIndex) -> bool {
    match arena.data(idx) {
        Some(
            NodeData::StringLiteral { .. }
            | NodeData::NumericLiteral { .. }
            | NodeData::BigIntLiteral { .. }
            | NodeData::NoSubstitutionTemplateLiteral { .. }
            | NodeData::BooleanLiteral { .. },
        ) => true,
        Some(NodeData::PrefixUnary {
            operator: PrefixOperator::Minus | PrefixOperator::Plus,
            operand,
        }) => matches!(
            arena.data(*operand),
            Some(NodeData::NumericLiteral { .. } | NodeData::BigIntLiteral { .. })
        ),
        _ => false,
    }
}

/// String or numeric literal (the forms valid as a literal property key).
#[must_use]
pub fn is_string_or_numeric_literal(arena: &NodeArena, idx: NodeIndex) -> bool {
    matches!(
        arena.data(idx),
        Some(
            NodeData::StringLiteral { .. }
                | NodeData::NumericLiteral { .. }
                | NodeData::NoSubstitutionTemplateLiteral { .. }
        )
    )
}

/// Type-node kinds (used to decide whether a failed subtree can be replaced
/// by a resolver-serialized type).
#[must_use]
pub fn is_type_node(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::KeywordType { .. }
            | NodeData::TypeReference { .. }
            | NodeData::ArrayType { .. }
            | NodeData::TupleType { .. }
            | NodeData::NamedTupleMember { .. }
            | NodeData::OptionalType { .. }
            | NodeData::RestType { .. }
            | NodeData::UnionType { .. }
            | NodeData::IntersectionType { .. }
            | NodeData::TypeLiteral { .. }
            | NodeData::FunctionType(_)
            | NodeData::ConstructorType(_)
            | NodeData::TypeQuery { .. }
            | NodeData::TypeOperator { .. }
            | NodeData::IndexedAccessType { .. }
            | NodeData::MappedType(_)
            | NodeData::ConditionalType { .. }
            | NodeData::InferType { .. }
            | NodeData::LiteralType { .. }
            | NodeData::TemplateLiteralType { .. }
            | NodeData::ParenthesizedType { .. }
            | NodeData::ThisType
            | NodeData::TypePredicate { .. }
            | NodeData::ImportType { .. }
            | NodeData::ExpressionWithTypeArguments { .. }
            | NodeData::JsDocAllType
            | NodeData::JsDocUnknownType
            | NodeData::JsDocNullableType { .. }
            | NodeData::JsDocNonNullableType { .. }
            | NodeData::JsDocOptionalType { .. }
            | NodeData::JsDocVariadicType { .. }
            | NodeData::JsDocFunctionType(_)
    )
}

/// Functions, methods, constructors, accessors and signatures.
#[must_use]
pub fn is_function_like(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::FunctionDeclaration(_)
            | NodeData::FunctionExpression(_)
            | NodeData::ArrowFunction(_)
            | NodeData::MethodDeclaration(_)
            | NodeData::Constructor(_)
            | NodeData::GetAccessor(_)
            | NodeData::SetAccessor(_)
            | NodeData::MethodSignature(_)
            | NodeData::CallSignature(_)
            | NodeData::ConstructSignature(_)
            | NodeData::FunctionType(_)
            | NodeData::ConstructorType(_)
            | NodeData::JsDocFunctionType(_)
    )
}

/// Nodes that open a new enclosing scope for name resolution.
#[must_use]
pub fn is_enclosing_declaration(data: &NodeData) -> bool {
    matches!(
        data,
        NodeData::SourceFile(_)
            | NodeData::TypeAliasDeclaration(_)
            | NodeData::ModuleDeclaration(_)
            | NodeData::ClassDeclaration(_)
            | NodeData::InterfaceDeclaration(_)
            | NodeData::IndexSignature(_)
            | NodeData::MappedType(_)
    ) || is_function_like(data)
}

/// Modifier flags written on a node.
#[must_use]
pub fn modifiers_of(arena: &NodeArena, idx: NodeIndex) -> ModifierFlags {
    let Some(data) = arena.data(idx) else {
        return ModifierFlags::empty();
    };
    match data {
        NodeData::FunctionDeclaration(f)
        | NodeData::FunctionExpression(f)
        | NodeData::ArrowFunction(f)
        | NodeData::MethodDeclaration(f)
        | NodeData::Constructor(f) => f.modifiers,
        NodeData::ClassDeclaration(c) | NodeData::ClassExpression(c) => c.modifiers,
        NodeData::InterfaceDeclaration(i) => i.modifiers,
        NodeData::TypeAliasDeclaration(t) => t.modifiers,
        NodeData::EnumDeclaration(e) => e.modifiers,
        NodeData::ModuleDeclaration(m) => m.modifiers,
        NodeData::Parameter(p) => p.modifiers,
        NodeData::TypeParameter(t) => t.modifiers,
        NodeData::PropertySignature(p) | NodeData::PropertyDeclaration(p) => p.modifiers,
        NodeData::MethodSignature(m) => m.modifiers,
        NodeData::GetAccessor(a) | NodeData::SetAccessor(a) => a.modifiers,
        NodeData::IndexSignature(i) => i.modifiers,
        NodeData::ImportDeclaration(i) => i.modifiers,
        NodeData::ExportDeclaration(e) => e.modifiers,
        NodeData::VariableStatement { modifiers, .. }
        | NodeData::ImportEqualsDeclaration { modifiers, .. } => *modifiers,
        NodeData::FunctionType(s) | NodeData::ConstructorType(s) => s.modifiers,
        _ => ModifierFlags::empty(),
    }
}

#[inline]
#[must_use]
pub fn has_modifier(arena: &NodeArena, idx: NodeIndex, flag: ModifierFlags) -> bool {
    modifiers_of(arena, idx).intersects(flag)
}

/// Parameters of a function-like node.
#[must_use]
pub fn parameters_of(arena: &NodeArena, idx: NodeIndex) -> Option<&NodeList> {
    match arena.data(idx)? {
        NodeData::FunctionDeclaration(f)
        | NodeData::FunctionExpression(f)
        | NodeData::ArrowFunction(f)
        | NodeData::MethodDeclaration(f)
        | NodeData::Constructor(f) => Some(&f.parameters),
        NodeData::GetAccessor(a) | NodeData::SetAccessor(a) => Some(&a.parameters),
        NodeData::MethodSignature(m) => Some(&m.parameters),
        NodeData::CallSignature(s)
        | NodeData::ConstructSignature(s)
        | NodeData::FunctionType(s)
        | NodeData::ConstructorType(s)
        | NodeData::JsDocFunctionType(s) => Some(&s.parameters),
        NodeData::IndexSignature(i) => Some(&i.parameters),
        _ => None,
    }
}

/// Return type annotation of a function-like node, or `NONE`.
#[must_use]
pub fn return_type_of(arena: &NodeArena, idx: NodeIndex) -> NodeIndex {
    match arena.data(idx) {
        Some(
            NodeData::FunctionDeclaration(f)
            | NodeData::FunctionExpression(f)
            | NodeData::ArrowFunction(f)
            | NodeData::MethodDeclaration(f),
        ) => f.return_type,
        Some(NodeData::GetAccessor(a)) => a.return_type,
        Some(NodeData::MethodSignature(m)) => m.return_type,
        Some(
            NodeData::CallSignature(s)
            | NodeData::ConstructSignature(s)
            | NodeData::FunctionType(s)
            | NodeData::ConstructorType(s)
            | NodeData::JsDocFunctionType(s),
        ) => s.return_type,
        Some(NodeData::IndexSignature(i)) => i.type_node,
        _ => NodeIndex::NONE,
    }
}

/// Type annotation of a variable-like declaration, or `NONE`.
#[must_use]
pub fn type_annotation_of(arena: &NodeArena, idx: NodeIndex) -> NodeIndex {
    match arena.data(idx) {
        Some(NodeData::Parameter(p)) => p.type_node,
        Some(NodeData::PropertySignature(p) | NodeData::PropertyDeclaration(p)) => p.type_node,
        Some(NodeData::VariableDeclaration { type_node, .. }) => *type_node,
        _ => NodeIndex::NONE,
    }
}

/// Initializer of a variable-like declaration, or `NONE`.
#[must_use]
pub fn initializer_of(arena: &NodeArena, idx: NodeIndex) -> NodeIndex {
    match arena.data(idx) {
        Some(NodeData::Parameter(p)) => p.initializer,
        Some(NodeData::PropertyDeclaration(p)) => p.initializer,
        Some(
            NodeData::VariableDeclaration { initializer, .. }
            | NodeData::BindingElement { initializer, .. }
            | NodeData::PropertyAssignment { initializer, .. }
            | NodeData::EnumMember { initializer, .. },
        ) => *initializer,
        Some(NodeData::ShorthandPropertyAssignment { name }) => *name,
        Some(NodeData::ExportAssignment { expression, .. }) => *expression,
        Some(NodeData::Binary { right, .. }) => *right,
        _ => NodeIndex::NONE,
    }
}

/// Strip parentheses around an expression.
#[must_use]
pub fn skip_parentheses(arena: &NodeArena, mut idx: NodeIndex) -> NodeIndex {
    while let Some(NodeData::Parenthesized { expression }) = arena.data(idx) {
        idx = *expression;
    }
    idx
}

/// `T` is the type reference `const` (as in `x as const`).
#[must_use]
pub fn is_const_type_reference(arena: &NodeArena, idx: NodeIndex) -> bool {
    match arena.data(idx) {
        Some(NodeData::TypeReference {
            type_name,
            type_arguments: None,
        }) => identifier_text(arena, *type_name) == Some("const"),
        _ => false,
    }
}

/// Identifiers bound by a name or binding pattern, depth first.
pub fn collect_binding_identifiers(arena: &NodeArena, name: NodeIndex, out: &mut Vec<NodeIndex>) {
    match arena.data(name) {
        Some(NodeData::Identifier { .. }) => out.push(name),
        Some(
            NodeData::ObjectBindingPattern { elements } | NodeData::ArrayBindingPattern { elements },
        ) => {
            for element in elements.iter() {
                if let Some(NodeData::BindingElement { name, .. }) = arena.data(element) {
                    collect_binding_identifiers(arena, *name, out);
                }
            }
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "../tests/node_utils.rs"]
mod tests;
