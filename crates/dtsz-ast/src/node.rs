//! Node definitions.
//!
//! `NodeData` is a closed enum: every consumer matches it exhaustively, so a
//! new syntax form cannot be silently ignored by the emitter or the printer.
//! Larger forms keep their fields in a payload struct so transforms can clone
//! the payload, replace a few fields and append the result as a new node.

use crate::base::{NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags};

/// A node stored in the arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub data: NodeData,
    pub pos: u32,
    pub end: u32,
    pub flags: NodeFlags,
    /// Input node this one was synthesized from, or `NONE` for parsed nodes.
    pub original: NodeIndex,
}

impl Node {
    #[must_use]
    pub fn new(data: NodeData) -> Node {
        Node {
            data,
            pos: 0,
            end: 0,
            flags: NodeFlags::empty(),
            original: NodeIndex::NONE,
        }
    }
}

/// Keyword types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeKeyword {
    Any,
    Unknown,
    Number,
    BigInt,
    String,
    Boolean,
    Symbol,
    Object,
    Void,
    Undefined,
    Null,
    Never,
    Intrinsic,
}

impl TypeKeyword {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TypeKeyword::Any => "any",
            TypeKeyword::Unknown => "unknown",
            TypeKeyword::Number => "number",
            TypeKeyword::BigInt => "bigint",
            TypeKeyword::String => "string",
            TypeKeyword::Boolean => "boolean",
            TypeKeyword::Symbol => "symbol",
            TypeKeyword::Object => "object",
            TypeKeyword::Void => "void",
            TypeKeyword::Undefined => "undefined",
            TypeKeyword::Null => "null",
            TypeKeyword::Never => "never",
            TypeKeyword::Intrinsic => "intrinsic",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    Plus,
    Minus,
    Tilde,
    Exclamation,
    PlusPlus,
    MinusMinus,
    TypeOf,
    Void,
    Delete,
    Await,
}

impl PrefixOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::Tilde => "~",
            PrefixOperator::Exclamation => "!",
            PrefixOperator::PlusPlus => "++",
            PrefixOperator::MinusMinus => "--",
            PrefixOperator::TypeOf => "typeof ",
            PrefixOperator::Void => "void ",
            PrefixOperator::Delete => "delete ",
            PrefixOperator::Await => "await ",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    AsteriskAsterisk,
    LessThanLessThan,
    GreaterThanGreaterThan,
    GreaterThanGreaterThanGreaterThan,
    Ampersand,
    Bar,
    Caret,
    AmpersandAmpersand,
    BarBar,
    QuestionQuestion,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    LessThan,
    GreaterThan,
    Equals,
    Comma,
}

impl BinaryOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Asterisk => "*",
            BinaryOperator::Slash => "/",
            BinaryOperator::Percent => "%",
            BinaryOperator::AsteriskAsterisk => "**",
            BinaryOperator::LessThanLessThan => "<<",
            BinaryOperator::GreaterThanGreaterThan => ">>",
            BinaryOperator::GreaterThanGreaterThanGreaterThan => ">>>",
            BinaryOperator::Ampersand => "&",
            BinaryOperator::Bar => "|",
            BinaryOperator::Caret => "^",
            BinaryOperator::AmpersandAmpersand => "&&",
            BinaryOperator::BarBar => "||",
            BinaryOperator::QuestionQuestion => "??",
            BinaryOperator::EqualsEqualsEquals => "===",
            BinaryOperator::ExclamationEqualsEquals => "!==",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::Equals => "=",
            BinaryOperator::Comma => ",",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeOperatorKind {
    KeyOf,
    Unique,
    Readonly,
}

/// `+`/`-` prefix on a mapped type's `readonly` or `?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MappedModifier {
    Present,
    Plus,
    Minus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HeritageToken {
    Extends,
    Implements,
}

/// A `/// <reference ... />` directive.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FileReference {
    pub file_name: String,
    pub resolution_mode: Option<String>,
    pub preserve: bool,
}

impl FileReference {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> FileReference {
        FileReference {
            file_name: file_name.into(),
            resolution_mode: None,
            preserve: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SourceFileData {
    pub file_name: String,
    pub statements: NodeList,
    pub is_declaration_file: bool,
    /// Has a top-level import or export.
    pub is_external_module: bool,
    pub referenced_files: Vec<FileReference>,
    pub type_reference_directives: Vec<FileReference>,
    pub lib_reference_directives: Vec<FileReference>,
    pub has_no_default_lib: bool,
}

impl SourceFileData {
    #[must_use]
    pub fn new(file_name: impl Into<String>, statements: NodeList) -> SourceFileData {
        SourceFileData {
            file_name: file_name.into(),
            statements,
            is_declaration_file: false,
            is_external_module: false,
            referenced_files: Vec::new(),
            type_reference_directives: Vec::new(),
            lib_reference_directives: Vec::new(),
            has_no_default_lib: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParameterData {
    pub modifiers: ModifierFlags,
    pub dot_dot_dot: bool,
    pub name: NodeIndex,
    pub question: bool,
    pub type_node: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeParameterData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub constraint: NodeIndex,
    pub default: NodeIndex,
}

/// Shared shape of function declarations, expressions, arrows and methods.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionData {
    pub modifiers: ModifierFlags,
    pub asterisk: bool,
    pub name: NodeIndex,
    pub question: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub return_type: NodeIndex,
    pub body: NodeIndex,
}

/// Call, construct, function-type and constructor-type signatures.
#[derive(Clone, Debug, PartialEq)]
pub struct SignatureData {
    pub modifiers: ModifierFlags,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub return_type: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MethodSignatureData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub question: bool,
    pub type_parameters: Option<NodeList>,
    pub parameters: NodeList,
    pub return_type: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub question: bool,
    pub exclamation: bool,
    pub type_node: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AccessorData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub return_type: NodeIndex,
    pub body: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IndexSignatureData {
    pub modifiers: ModifierFlags,
    pub parameters: NodeList,
    pub type_node: NodeIndex,
}

/// Class declarations and class expressions.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub heritage_clauses: Option<NodeList>,
    pub members: NodeList,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeAliasData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub type_parameters: Option<NodeList>,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleData {
    pub modifiers: ModifierFlags,
    pub name: NodeIndex,
    /// `ModuleBlock`, a nested `ModuleDeclaration` for `a.b.c`, or `NONE`.
    pub body: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MappedTypeData {
    pub readonly_token: Option<MappedModifier>,
    pub type_parameter: NodeIndex,
    pub name_type: NodeIndex,
    pub question_token: Option<MappedModifier>,
    pub type_node: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImportData {
    pub modifiers: ModifierFlags,
    pub import_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ExportData {
    pub modifiers: ModifierFlags,
    pub is_type_only: bool,
    /// `NamedExports`, `NamespaceExport`, or `NONE` for `export * from`.
    pub export_clause: NodeIndex,
    pub module_specifier: NodeIndex,
}

/// One `${expr}tail` part of a template expression.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateSpan {
    pub expression: NodeIndex,
    pub literal: String,
}

/// One `${Type}tail` part of a template literal type.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateTypeSpan {
    pub type_node: NodeIndex,
    pub literal: String,
}

/// Payload of every node kind.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeData {
    // ----- names -----
    Identifier { text: String },
    PrivateIdentifier { text: String },
    QualifiedName { left: NodeIndex, right: NodeIndex },
    ComputedPropertyName { expression: NodeIndex },

    // ----- literals and expressions -----
    StringLiteral { text: String },
    NumericLiteral { text: String },
    BigIntLiteral { text: String },
    NoSubstitutionTemplateLiteral { text: String },
    BooleanLiteral { value: bool },
    NullLiteral,
    ThisExpression,
    SuperExpression,
    ObjectLiteral { properties: NodeList, multi_line: bool },
    PropertyAssignment { name: NodeIndex, initializer: NodeIndex },
    ShorthandPropertyAssignment { name: NodeIndex },
    SpreadAssignment { expression: NodeIndex },
    ArrayLiteral { elements: NodeList },
    SpreadElement { expression: NodeIndex },
    OmittedExpression,
    ArrowFunction(FunctionData),
    FunctionExpression(FunctionData),
    ClassExpression(ClassData),
    Parenthesized { expression: NodeIndex },
    AsExpression { expression: NodeIndex, type_node: NodeIndex },
    SatisfiesExpression { expression: NodeIndex, type_node: NodeIndex },
    TypeAssertion { type_node: NodeIndex, expression: NodeIndex },
    NonNullExpression { expression: NodeIndex },
    PrefixUnary { operator: PrefixOperator, operand: NodeIndex },
    Binary { left: NodeIndex, operator: BinaryOperator, right: NodeIndex },
    Conditional { condition: NodeIndex, when_true: NodeIndex, when_false: NodeIndex },
    Call { expression: NodeIndex, type_arguments: Option<NodeList>, arguments: NodeList },
    New { expression: NodeIndex, type_arguments: Option<NodeList>, arguments: NodeList },
    PropertyAccess { expression: NodeIndex, name: NodeIndex },
    ElementAccess { expression: NodeIndex, argument: NodeIndex },
    TemplateExpression { head: String, spans: Vec<TemplateSpan> },
    ExpressionWithTypeArguments { expression: NodeIndex, type_arguments: Option<NodeList> },

    // ----- type nodes -----
    KeywordType { keyword: TypeKeyword },
    TypeReference { type_name: NodeIndex, type_arguments: Option<NodeList> },
    ArrayType { element_type: NodeIndex },
    TupleType { elements: NodeList },
    NamedTupleMember { dot_dot_dot: bool, name: NodeIndex, question: bool, type_node: NodeIndex },
    OptionalType { type_node: NodeIndex },
    RestType { type_node: NodeIndex },
    UnionType { types: NodeList },
    IntersectionType { types: NodeList },
    TypeLiteral { members: NodeList, multi_line: bool },
    FunctionType(SignatureData),
    ConstructorType(SignatureData),
    TypeQuery { expr_name: NodeIndex, type_arguments: Option<NodeList> },
    TypeOperator { operator: TypeOperatorKind, type_node: NodeIndex },
    IndexedAccessType { object_type: NodeIndex, index_type: NodeIndex },
    MappedType(MappedTypeData),
    ConditionalType { check_type: NodeIndex, extends_type: NodeIndex, true_type: NodeIndex, false_type: NodeIndex },
    InferType { type_parameter: NodeIndex },
    LiteralType { literal: NodeIndex },
    TemplateLiteralType { head: String, spans: Vec<TemplateTypeSpan> },
    ParenthesizedType { type_node: NodeIndex },
    ThisType,
    TypePredicate { asserts: bool, parameter_name: NodeIndex, type_node: NodeIndex },
    ImportType { is_type_of: bool, argument: NodeIndex, qualifier: NodeIndex, type_arguments: Option<NodeList> },

    // ----- documentation-comment type forms -----
    JsDocAllType,
    JsDocUnknownType,
    JsDocNullableType { type_node: NodeIndex },
    JsDocNonNullableType { type_node: NodeIndex },
    JsDocOptionalType { type_node: NodeIndex },
    JsDocVariadicType { type_node: NodeIndex },
    JsDocFunctionType(SignatureData),

    // ----- signatures, members and parts -----
    Parameter(ParameterData),
    TypeParameter(TypeParameterData),
    PropertySignature(PropertyData),
    MethodSignature(MethodSignatureData),
    CallSignature(SignatureData),
    ConstructSignature(SignatureData),
    IndexSignature(IndexSignatureData),
    PropertyDeclaration(PropertyData),
    MethodDeclaration(FunctionData),
    Constructor(FunctionData),
    GetAccessor(AccessorData),
    SetAccessor(AccessorData),
    ClassStaticBlock { body: NodeIndex },
    SemicolonClassElement,
    HeritageClause { token: HeritageToken, types: NodeList },
    ObjectBindingPattern { elements: NodeList },
    ArrayBindingPattern { elements: NodeList },
    BindingElement { dot_dot_dot: bool, property_name: NodeIndex, name: NodeIndex, initializer: NodeIndex },
    EnumMember { name: NodeIndex, initializer: NodeIndex },

    // ----- statements and declarations -----
    SourceFile(SourceFileData),
    Block { statements: NodeList },
    VariableStatement { modifiers: ModifierFlags, declaration_list: NodeIndex },
    VariableDeclarationList { declarations: NodeList },
    VariableDeclaration { name: NodeIndex, exclamation: bool, type_node: NodeIndex, initializer: NodeIndex },
    FunctionDeclaration(FunctionData),
    ClassDeclaration(ClassData),
    InterfaceDeclaration(InterfaceData),
    TypeAliasDeclaration(TypeAliasData),
    EnumDeclaration(EnumData),
    ModuleDeclaration(ModuleData),
    ModuleBlock { statements: NodeList },
    ImportDeclaration(ImportData),
    ImportClause { is_type_only: bool, name: NodeIndex, named_bindings: NodeIndex },
    NamespaceImport { name: NodeIndex },
    NamedImports { elements: NodeList },
    ImportSpecifier { is_type_only: bool, property_name: NodeIndex, name: NodeIndex },
    ImportEqualsDeclaration { modifiers: ModifierFlags, is_type_only: bool, name: NodeIndex, module_reference: NodeIndex },
    ExternalModuleReference { expression: NodeIndex },
    ExportDeclaration(ExportData),
    NamedExports { elements: NodeList },
    NamespaceExport { name: NodeIndex },
    ExportSpecifier { is_type_only: bool, property_name: NodeIndex, name: NodeIndex },
    ExportAssignment { is_export_equals: bool, expression: NodeIndex },
    ExpressionStatement { expression: NodeIndex },
    ReturnStatement { expression: NodeIndex },
    EmptyStatement,
    /// Control-flow statement with no declaration surface (`if`, `for`, ...).
    OtherStatement,
}

impl NodeData {
    /// Short kind name for logging.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            NodeData::Identifier { .. } => "Identifier",
            NodeData::PrivateIdentifier { .. } => "PrivateIdentifier",
            NodeData::QualifiedName { .. } => "QualifiedName",
            NodeData::ComputedPropertyName { .. } => "ComputedPropertyName",
            NodeData::StringLiteral { .. } => "StringLiteral",
            NodeData::NumericLiteral { .. } => "NumericLiteral",
            NodeData::BigIntLiteral { .. } => "BigIntLiteral",
            NodeData::NoSubstitutionTemplateLiteral { .. } => "NoSubstitutionTemplateLiteral",
            NodeData::BooleanLiteral { .. } => "BooleanLiteral",
            NodeData::NullLiteral => "NullLiteral",
            NodeData::ThisExpression => "ThisExpression",
            NodeData::SuperExpression => "SuperExpression",
            NodeData::ObjectLiteral { .. } => "ObjectLiteral",
            NodeData::PropertyAssignment { .. } => "PropertyAssignment",
            NodeData::ShorthandPropertyAssignment { .. } => "ShorthandPropertyAssignment",
            NodeData::SpreadAssignment { .. } => "SpreadAssignment",
            NodeData::ArrayLiteral { .. } => "ArrayLiteral",
            NodeData::SpreadElement { .. } => "SpreadElement",
            NodeData::OmittedExpression => "OmittedExpression",
            NodeData::ArrowFunction(_) => "ArrowFunction",
            NodeData::FunctionExpression(_) => "FunctionExpression",
            NodeData::ClassExpression(_) => "ClassExpression",
            NodeData::Parenthesized { .. } => "Parenthesized",
            NodeData::AsExpression { .. } => "AsExpression",
            NodeData::SatisfiesExpression { .. } => "SatisfiesExpression",
            NodeData::TypeAssertion { .. } => "TypeAssertion",
            NodeData::NonNullExpression { .. } => "NonNullExpression",
            NodeData::PrefixUnary { .. } => "PrefixUnary",
            NodeData::Binary { .. } => "Binary",
            NodeData::Conditional { .. } => "Conditional",
            NodeData::Call { .. } => "Call",
            NodeData::New { .. } => "New",
            NodeData::PropertyAccess { .. } => "PropertyAccess",
            NodeData::ElementAccess { .. } => "ElementAccess",
            NodeData::TemplateExpression { .. } => "TemplateExpression",
            NodeData::ExpressionWithTypeArguments { .. } => "ExpressionWithTypeArguments",
            NodeData::KeywordType { .. } => "KeywordType",
            NodeData::TypeReference { .. } => "TypeReference",
            NodeData::ArrayType { .. } => "ArrayType",
            NodeData::TupleType { .. } => "TupleType",
            NodeData::NamedTupleMember { .. } => "NamedTupleMember",
            NodeData::OptionalType { .. } => "OptionalType",
            NodeData::RestType { .. } => "RestType",
            NodeData::UnionType { .. } => "UnionType",
            NodeData::IntersectionType { .. } => "IntersectionType",
            NodeData::TypeLiteral { .. } => "TypeLiteral",
            NodeData::FunctionType(_) => "FunctionType",
            NodeData::ConstructorType(_) => "ConstructorType",
            NodeData::TypeQuery { .. } => "TypeQuery",
            NodeData::TypeOperator { .. } => "TypeOperator",
            NodeData::IndexedAccessType { .. } => "IndexedAccessType",
            NodeData::MappedType(_) => "MappedType",
            NodeData::ConditionalType { .. } => "ConditionalType",
            NodeData::InferType { .. } => "InferType",
            NodeData::LiteralType { .. } => "LiteralType",
            NodeData::TemplateLiteralType { .. } => "TemplateLiteralType",
            NodeData::ParenthesizedType { .. } => "ParenthesizedType",
            NodeData::ThisType => "ThisType",
            NodeData::TypePredicate { .. } => "TypePredicate",
            NodeData::ImportType { .. } => "ImportType",
            NodeData::JsDocAllType => "JsDocAllType",
            NodeData::JsDocUnknownType => "JsDocUnknownType",
            NodeData::JsDocNullableType { .. } => "JsDocNullableType",
            NodeData::JsDocNonNullableType { .. } => "JsDocNonNullableType",
            NodeData::JsDocOptionalType { .. } => "JsDocOptionalType",
            NodeData::JsDocVariadicType { .. } => "JsDocVariadicType",
            NodeData::JsDocFunctionType(_) => "JsDocFunctionType",
            NodeData::Parameter(_) => "Parameter",
            NodeData::TypeParameter(_) => "TypeParameter",
            NodeData::PropertySignature(_) => "PropertySignature",
            NodeData::MethodSignature(_) => "MethodSignature",
            NodeData::CallSignature(_) => "CallSignature",
            NodeData::ConstructSignature(_) => "ConstructSignature",
            NodeData::IndexSignature(_) => "IndexSignature",
            NodeData::PropertyDeclaration(_) => "PropertyDeclaration",
            NodeData::MethodDeclaration(_) => "MethodDeclaration",
            NodeData::Constructor(_) => "Constructor",
            NodeData::GetAccessor(_) => "GetAccessor",
            NodeData::SetAccessor(_) => "SetAccessor",
            NodeData::ClassStaticBlock { .. } => "ClassStaticBlock",
            NodeData::SemicolonClassElement => "SemicolonClassElement",
            NodeData::HeritageClause { .. } => "HeritageClause",
            NodeData::ObjectBindingPattern { .. } => "ObjectBindingPattern",
            NodeData::ArrayBindingPattern { .. } => "ArrayBindingPattern",
            NodeData::BindingElement { .. } => "BindingElement",
            NodeData::EnumMember { .. } => "EnumMember",
            NodeData::SourceFile(_) => "SourceFile",
            NodeData::Block { .. } => "Block",
            NodeData::VariableStatement { .. } => "VariableStatement",
            NodeData::VariableDeclarationList { .. } => "VariableDeclarationList",
            NodeData::VariableDeclaration { .. } => "VariableDeclaration",
            NodeData::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeData::ClassDeclaration(_) => "ClassDeclaration",
            NodeData::InterfaceDeclaration(_) => "InterfaceDeclaration",
            NodeData::TypeAliasDeclaration(_) => "TypeAliasDeclaration",
            NodeData::EnumDeclaration(_) => "EnumDeclaration",
            NodeData::ModuleDeclaration(_) => "ModuleDeclaration",
            NodeData::ModuleBlock { .. } => "ModuleBlock",
            NodeData::ImportDeclaration(_) => "ImportDeclaration",
            NodeData::ImportClause { .. } => "ImportClause",
            NodeData::NamespaceImport { .. } => "NamespaceImport",
            NodeData::NamedImports { .. } => "NamedImports",
            NodeData::ImportSpecifier { .. } => "ImportSpecifier",
            NodeData::ImportEqualsDeclaration { .. } => "ImportEqualsDeclaration",
            NodeData::ExternalModuleReference { .. } => "ExternalModuleReference",
            NodeData::ExportDeclaration(_) => "ExportDeclaration",
            NodeData::NamedExports { .. } => "NamedExports",
            NodeData::NamespaceExport { .. } => "NamespaceExport",
            NodeData::ExportSpecifier { .. } => "ExportSpecifier",
            NodeData::ExportAssignment { .. } => "ExportAssignment",
            NodeData::ExpressionStatement { .. } => "ExpressionStatement",
            NodeData::ReturnStatement { .. } => "ReturnStatement",
            NodeData::EmptyStatement => "EmptyStatement",
            NodeData::OtherStatement => "OtherStatement",
        }
    }
}
