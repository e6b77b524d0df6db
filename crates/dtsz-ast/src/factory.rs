//! Node construction helpers (`create_*` methods on [`NodeArena`]).
//!
//! Used by the declaration transformer to synthesize nodes and by tests to
//! build input trees without a parser.

use crate::arena::NodeArena;
use crate::base::{NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags};
use crate::node::*;

impl NodeArena {
    // =========================================================================
    // Names and literals
    // =========================================================================

    pub fn create_identifier(&mut self, text: &str) -> NodeIndex {
        self.add(NodeData::Identifier {
            text: text.to_string(),
        })
    }

    pub fn create_private_identifier(&mut self, text: &str) -> NodeIndex {
        self.add(NodeData::PrivateIdentifier {
            text: text.to_string(),
        })
    }

    /// `a.b.c` as nested qualified names.
    pub fn create_entity_name(&mut self, dotted: &str) -> NodeIndex {
        let mut parts = dotted.split('.');
        let first = parts.next().unwrap_or_default();
        let mut result = self.create_identifier(first);
        for part in parts {
            let right = self.create_identifier(part);
            result = self.add(NodeData::QualifiedName {
                left: result,
                right,
            });
        }
        result
    }

    /// `a.b.c` as nested property access expressions.
    pub fn create_entity_expression(&mut self, dotted: &str) -> NodeIndex {
        let mut parts = dotted.split('.');
        let first = parts.next().unwrap_or_default();
        let mut result = self.create_identifier(first);
        for part in parts {
            let name = self.create_identifier(part);
            result = self.add(NodeData::PropertyAccess {
                expression: result,
                name,
            });
        }
        result
    }

    pub fn create_computed_property_name(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(NodeData::ComputedPropertyName { expression })
    }

    pub fn create_string_literal(&mut self, text: &str) -> NodeIndex {
        self.add(NodeData::StringLiteral {
            text: text.to_string(),
        })
    }

    pub fn create_numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.add(NodeData::NumericLiteral {
            text: text.to_string(),
        })
    }

    pub fn create_bigint_literal(&mut self, text: &str) -> NodeIndex {
        self.add(NodeData::BigIntLiteral {
            text: text.to_string(),
        })
    }

    pub fn create_boolean_literal(&mut self, value: bool) -> NodeIndex {
        self.add(NodeData::BooleanLiteral { value })
    }

    pub fn create_null_literal(&mut self) -> NodeIndex {
        self.add(NodeData::NullLiteral)
    }

    /// Numeric literal, or `-n` as a prefix unary for negative values.
    pub fn create_number_value(&mut self, value: f64) -> NodeIndex {
        let text = format_number(value.abs());
        let literal = self.create_numeric_literal(&text);
        if value < 0.0 || (value == 0.0 && value.is_sign_negative()) {
            self.add(NodeData::PrefixUnary {
                operator: PrefixOperator::Minus,
                operand: literal,
            })
        } else {
            literal
        }
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    pub fn create_property_access(&mut self, expression: NodeIndex, name: &str) -> NodeIndex {
        let name = self.create_identifier(name);
        self.add(NodeData::PropertyAccess { expression, name })
    }

    pub fn create_binary(
        &mut self,
        left: NodeIndex,
        operator: BinaryOperator,
        right: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::Binary {
            left,
            operator,
            right,
        })
    }

    pub fn create_prefix_unary(&mut self, operator: PrefixOperator, operand: NodeIndex) -> NodeIndex {
        self.add(NodeData::PrefixUnary { operator, operand })
    }

    pub fn create_as_expression(&mut self, expression: NodeIndex, type_node: NodeIndex) -> NodeIndex {
        self.add(NodeData::AsExpression {
            expression,
            type_node,
        })
    }

    /// `expr as const`.
    pub fn create_as_const(&mut self, expression: NodeIndex) -> NodeIndex {
        let name = self.create_identifier("const");
        let const_ref = self.add(NodeData::TypeReference {
            type_name: name,
            type_arguments: None,
        });
        self.create_as_expression(expression, const_ref)
    }

    pub fn create_parenthesized(&mut self, expression: NodeIndex) -> NodeIndex {
        self.add(NodeData::Parenthesized { expression })
    }

    pub fn create_call(&mut self, expression: NodeIndex, arguments: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::Call {
            expression,
            type_arguments: None,
            arguments: NodeList::from(arguments),
        })
    }

    pub fn create_array_literal(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::ArrayLiteral {
            elements: NodeList::from(elements),
        })
    }

    pub fn create_object_literal(&mut self, properties: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::ObjectLiteral {
            properties: NodeList::from(properties),
            multi_line: false,
        })
    }

    pub fn create_property_assignment(&mut self, name: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        self.add(NodeData::PropertyAssignment { name, initializer })
    }

    pub fn create_expression_with_type_arguments(
        &mut self,
        expression: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        self.add(NodeData::ExpressionWithTypeArguments {
            expression,
            type_arguments,
        })
    }

    // =========================================================================
    // Type nodes
    // =========================================================================

    pub fn create_keyword_type(&mut self, keyword: TypeKeyword) -> NodeIndex {
        self.add(NodeData::KeywordType { keyword })
    }

    pub fn create_type_reference(
        &mut self,
        type_name: NodeIndex,
        type_arguments: Option<NodeList>,
    ) -> NodeIndex {
        self.add(NodeData::TypeReference {
            type_name,
            type_arguments,
        })
    }

    /// Reference to a (possibly dotted) type name.
    pub fn create_type_reference_named(&mut self, dotted: &str) -> NodeIndex {
        let type_name = self.create_entity_name(dotted);
        self.create_type_reference(type_name, None)
    }

    pub fn create_array_type(&mut self, element_type: NodeIndex) -> NodeIndex {
        self.add(NodeData::ArrayType { element_type })
    }

    pub fn create_tuple_type(&mut self, elements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::TupleType {
            elements: NodeList::from(elements),
        })
    }

    pub fn create_union_type(&mut self, types: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::UnionType {
            types: NodeList::from(types),
        })
    }

    pub fn create_intersection_type(&mut self, types: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::IntersectionType {
            types: NodeList::from(types),
        })
    }

    pub fn create_type_literal(&mut self, members: Vec<NodeIndex>, multi_line: bool) -> NodeIndex {
        self.add(NodeData::TypeLiteral {
            members: NodeList::from(members),
            multi_line,
        })
    }

    pub fn create_literal_type(&mut self, literal: NodeIndex) -> NodeIndex {
        self.add(NodeData::LiteralType { literal })
    }

    pub fn create_type_operator(&mut self, operator: TypeOperatorKind, type_node: NodeIndex) -> NodeIndex {
        self.add(NodeData::TypeOperator {
            operator,
            type_node,
        })
    }

    pub fn create_type_query(&mut self, expr_name: NodeIndex) -> NodeIndex {
        self.add(NodeData::TypeQuery {
            expr_name,
            type_arguments: None,
        })
    }

    pub fn create_parenthesized_type(&mut self, type_node: NodeIndex) -> NodeIndex {
        self.add(NodeData::ParenthesizedType { type_node })
    }

    pub fn create_function_type(
        &mut self,
        type_parameters: Option<NodeList>,
        parameters: Vec<NodeIndex>,
        return_type: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::FunctionType(SignatureData {
            modifiers: ModifierFlags::empty(),
            type_parameters,
            parameters: NodeList::from(parameters),
            return_type,
        }))
    }

    pub fn create_constructor_type(
        &mut self,
        type_parameters: Option<NodeList>,
        parameters: Vec<NodeIndex>,
        return_type: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::ConstructorType(SignatureData {
            modifiers: ModifierFlags::empty(),
            type_parameters,
            parameters: NodeList::from(parameters),
            return_type,
        }))
    }

    // =========================================================================
    // Signatures and members
    // =========================================================================

    pub fn create_parameter(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        question: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::Parameter(ParameterData {
            modifiers,
            dot_dot_dot: false,
            name,
            question,
            type_node,
            initializer,
        }))
    }

    /// Simple `name: type` parameter.
    pub fn create_simple_parameter(&mut self, name: &str, type_node: NodeIndex) -> NodeIndex {
        let name = self.create_identifier(name);
        self.create_parameter(ModifierFlags::empty(), name, false, type_node, NodeIndex::NONE)
    }

    pub fn create_type_parameter(
        &mut self,
        name: &str,
        constraint: NodeIndex,
        default: NodeIndex,
    ) -> NodeIndex {
        let name = self.create_identifier(name);
        self.add(NodeData::TypeParameter(TypeParameterData {
            modifiers: ModifierFlags::empty(),
            name,
            constraint,
            default,
        }))
    }

    pub fn create_property_signature(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        question: bool,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::PropertySignature(PropertyData {
            modifiers,
            name,
            question,
            exclamation: false,
            type_node,
            initializer: NodeIndex::NONE,
        }))
    }

    pub fn create_property_declaration(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        question: bool,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::PropertyDeclaration(PropertyData {
            modifiers,
            name,
            question,
            exclamation: false,
            type_node,
            initializer,
        }))
    }

    pub fn create_index_signature(
        &mut self,
        modifiers: ModifierFlags,
        parameters: Vec<NodeIndex>,
        type_node: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::IndexSignature(IndexSignatureData {
            modifiers,
            parameters: NodeList::from(parameters),
            type_node,
        }))
    }

    pub fn create_heritage_clause(&mut self, token: HeritageToken, types: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::HeritageClause {
            token,
            types: NodeList::from(types),
        })
    }

    // =========================================================================
    // Statements
    // =========================================================================

    pub fn create_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::Block {
            statements: NodeList::from(statements),
        })
    }

    /// `<modifiers> const|let|var <name>: <type> [= <initializer>];`
    pub fn create_variable_statement(
        &mut self,
        modifiers: ModifierFlags,
        list_flags: NodeFlags,
        declarations: Vec<NodeIndex>,
    ) -> NodeIndex {
        let declaration_list = self.add_with_flags(
            NodeData::VariableDeclarationList {
                declarations: NodeList::from(declarations),
            },
            list_flags,
        );
        self.add(NodeData::VariableStatement {
            modifiers,
            declaration_list,
        })
    }

    pub fn create_variable_declaration(
        &mut self,
        name: NodeIndex,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> NodeIndex {
        self.add(NodeData::VariableDeclaration {
            name,
            exclamation: false,
            type_node,
            initializer,
        })
    }

    pub fn create_module_block(&mut self, statements: Vec<NodeIndex>) -> NodeIndex {
        self.add(NodeData::ModuleBlock {
            statements: NodeList::from(statements),
        })
    }

    pub fn create_module_declaration(
        &mut self,
        modifiers: ModifierFlags,
        name: NodeIndex,
        body: NodeIndex,
        flags: NodeFlags,
    ) -> NodeIndex {
        self.add_with_flags(
            NodeData::ModuleDeclaration(ModuleData {
                modifiers,
                name,
                body,
            }),
            flags,
        )
    }

    pub fn create_export_specifier(&mut self, property_name: Option<&str>, name: &str) -> NodeIndex {
        let property_name = match property_name {
            Some(text) => self.create_identifier(text),
            None => NodeIndex::NONE,
        };
        let name = if crate::node_utils::is_identifier_text(name) {
            self.create_identifier(name)
        } else {
            self.create_string_literal(name)
        };
        self.add(NodeData::ExportSpecifier {
            is_type_only: false,
            property_name,
            name,
        })
    }

    /// `export { a, b as c };`
    pub fn create_named_export_declaration(&mut self, specifiers: Vec<NodeIndex>) -> NodeIndex {
        let export_clause = self.add(NodeData::NamedExports {
            elements: NodeList::from(specifiers),
        });
        self.add(NodeData::ExportDeclaration(ExportData {
            modifiers: ModifierFlags::empty(),
            is_type_only: false,
            export_clause,
            module_specifier: NodeIndex::NONE,
        }))
    }

    /// `export {};`
    pub fn create_empty_export(&mut self) -> NodeIndex {
        self.create_named_export_declaration(Vec::new())
    }

    pub fn create_export_assignment(&mut self, is_export_equals: bool, expression: NodeIndex) -> NodeIndex {
        self.add(NodeData::ExportAssignment {
            is_export_equals,
            expression,
        })
    }
}

/// Format a number the way JavaScript's `Number.prototype.toString` does:
/// plain decimals for exponents in `-7..21`, `1.5e+21` style otherwise.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let sign = if value < 0.0 { "-" } else { "" };
    // Shortest round-trip digits and the decimal exponent of the first one.
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{int}.{frac}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exponent_sign = if n > 0 { '+' } else { '-' };
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() { String::new() } else { format!(".{rest}") };
        format!("{first}{fraction}e{exponent_sign}{}", (n - 1).abs())
    };
    format!("{sign}{body}")
}
