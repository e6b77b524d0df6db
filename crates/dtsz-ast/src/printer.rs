//! Declaration printer.
//!
//! Renders a declaration tree as `.d.ts` text: four-space indentation, one
//! statement per line, single-line type literals unless the node carries the
//! multi-line hint. Executable bodies are printed as `{ }` placeholders since
//! declaration trees never carry them.

use crate::arena::NodeArena;
use crate::base::{NodeIndex, NodeList};
use crate::flags::{ModifierFlags, NodeFlags};
use crate::node::*;

/// Print a node (source file, statement, type, or expression) to text.
#[must_use]
pub fn print_node(arena: &NodeArena, idx: NodeIndex) -> String {
    let mut printer = DeclarationPrinter::new(arena);
    printer.emit(idx);
    printer.finish()
}

pub struct DeclarationPrinter<'a> {
    arena: &'a NodeArena,
    out: String,
    indent: usize,
}

impl<'a> DeclarationPrinter<'a> {
    #[must_use]
    pub fn new(arena: &'a NodeArena) -> Self {
        DeclarationPrinter {
            arena,
            out: String::with_capacity(1024),
            indent: 0,
        }
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.out
    }

    // =========================================================================
    // Output helpers
    // =========================================================================

    fn write(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
    }

    fn new_line(&mut self) {
        self.out.push('\n');
    }

    fn write_modifiers(&mut self, flags: ModifierFlags) {
        const ORDER: &[(ModifierFlags, &str)] = &[
            (ModifierFlags::EXPORT, "export "),
            (ModifierFlags::DEFAULT, "default "),
            (ModifierFlags::AMBIENT, "declare "),
            (ModifierFlags::PUBLIC, "public "),
            (ModifierFlags::PRIVATE, "private "),
            (ModifierFlags::PROTECTED, "protected "),
            (ModifierFlags::STATIC, "static "),
            (ModifierFlags::ABSTRACT, "abstract "),
            (ModifierFlags::OVERRIDE, "override "),
            (ModifierFlags::READONLY, "readonly "),
            (ModifierFlags::ACCESSOR, "accessor "),
            (ModifierFlags::ASYNC, "async "),
            (ModifierFlags::CONST, "const "),
            (ModifierFlags::IN, "in "),
            (ModifierFlags::OUT, "out "),
        ];
        for (flag, text) in ORDER {
            if flags.contains(*flag) {
                self.write(text);
            }
        }
    }

    fn write_list(&mut self, list: &NodeList, separator: &str) {
        for (i, idx) in list.iter().enumerate() {
            if i > 0 {
                self.write(separator);
            }
            self.emit(idx);
        }
    }

    fn write_type_parameters(&mut self, type_parameters: Option<&NodeList>) {
        if let Some(list) = type_parameters {
            if !list.is_empty() {
                self.write("<");
                self.write_list(list, ", ");
                self.write(">");
            }
        }
    }

    fn write_type_arguments(&mut self, type_arguments: Option<&NodeList>) {
        self.write_type_parameters(type_arguments);
    }

    fn write_parameters(&mut self, parameters: &NodeList) {
        self.write("(");
        self.write_list(parameters, ", ");
        self.write(")");
    }

    fn write_type_annotation(&mut self, type_node: NodeIndex) {
        if type_node.is_some() {
            self.write(": ");
            self.emit(type_node);
        }
    }

    fn write_initializer(&mut self, initializer: NodeIndex) {
        if initializer.is_some() {
            self.write(" = ");
            self.emit(initializer);
        }
    }

    fn write_body_or_semicolon(&mut self, body: NodeIndex) {
        if body.is_some() {
            self.write(" ");
            self.emit(body);
        } else {
            self.write(";");
        }
    }

    fn write_string_literal(&mut self, text: &str) {
        self.out.push('"');
        for ch in text.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                _ => self.out.push(ch),
            }
        }
        self.out.push('"');
    }

    fn write_block_members(&mut self, members: &NodeList) {
        self.write("{");
        self.new_line();
        self.indent += 1;
        for member in members.iter() {
            if matches!(
                self.arena.data(member),
                Some(NodeData::SemicolonClassElement | NodeData::OtherStatement)
            ) {
                continue;
            }
            self.write_indent();
            self.emit(member);
            self.new_line();
        }
        self.indent -= 1;
        self.write_indent();
        self.write("}");
    }

    fn write_statements(&mut self, statements: &NodeList) {
        for statement in statements.iter() {
            if matches!(self.arena.data(statement), Some(NodeData::OtherStatement)) {
                continue;
            }
            self.write_indent();
            self.emit(statement);
            self.new_line();
        }
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Write any node at the current position.
    pub fn emit(&mut self, idx: NodeIndex) {
        let arena = self.arena;
        let Some(node) = arena.get(idx) else {
            return;
        };
        match &node.data {
            NodeData::SourceFile(file) => self.emit_source_file(file),
            data if crate::node_utils::is_type_node(data) => self.emit_type(idx, data),
            data => self.emit_other(idx, data, node.flags),
        }
    }

    fn emit_source_file(&mut self, file: &SourceFileData) {
        if file.has_no_default_lib {
            self.write("/// <reference no-default-lib=\"true\"/>");
            self.new_line();
        }
        for reference in &file.referenced_files {
            self.write_reference("path", reference);
        }
        for reference in &file.type_reference_directives {
            self.write_reference("types", reference);
        }
        for reference in &file.lib_reference_directives {
            self.write_reference("lib", reference);
        }
        self.write_statements(&file.statements);
    }

    fn write_reference(&mut self, kind: &str, reference: &FileReference) {
        self.write("/// <reference ");
        self.write(kind);
        self.write("=\"");
        self.write(&reference.file_name);
        self.write("\"");
        if let Some(mode) = &reference.resolution_mode {
            self.write(" resolution-mode=\"");
            self.write(mode);
            self.write("\"");
        }
        if reference.preserve {
            self.write(" preserve=\"true\"");
        }
        self.write(" />");
        self.new_line();
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn needs_parens_in_postfix(&self, idx: NodeIndex) -> bool {
        matches!(
            self.arena.data(idx),
            Some(
                NodeData::UnionType { .. }
                    | NodeData::IntersectionType { .. }
                    | NodeData::FunctionType(_)
                    | NodeData::ConstructorType(_)
                    | NodeData::ConditionalType { .. }
                    | NodeData::TypeOperator { .. }
                    | NodeData::InferType { .. }
                    | NodeData::JsDocFunctionType(_)
            )
        )
    }

    fn needs_parens_in_union(&self, idx: NodeIndex, in_intersection: bool) -> bool {
        match self.arena.data(idx) {
            Some(
                NodeData::FunctionType(_)
                | NodeData::ConstructorType(_)
                | NodeData::ConditionalType { .. }
                | NodeData::JsDocFunctionType(_),
            ) => true,
            Some(NodeData::UnionType { .. }) => in_intersection,
            _ => false,
        }
    }

    fn emit_wrapped(&mut self, idx: NodeIndex, parens: bool) {
        if parens {
            self.write("(");
            self.emit(idx);
            self.write(")");
        } else {
            self.emit(idx);
        }
    }

    fn emit_type(&mut self, idx: NodeIndex, data: &NodeData) {
        match data {
            NodeData::KeywordType { keyword } => self.write(keyword.as_str()),
            NodeData::TypeReference {
                type_name,
                type_arguments,
            } => {
                self.emit(*type_name);
                self.write_type_arguments(type_arguments.as_ref());
            }
            NodeData::ExpressionWithTypeArguments {
                expression,
                type_arguments,
            } => {
                self.emit(*expression);
                self.write_type_arguments(type_arguments.as_ref());
            }
            NodeData::ArrayType { element_type } => {
                let parens = self.needs_parens_in_postfix(*element_type);
                self.emit_wrapped(*element_type, parens);
                self.write("[]");
            }
            NodeData::TupleType { elements } => {
                self.write("[");
                self.write_list(elements, ", ");
                self.write("]");
            }
            NodeData::NamedTupleMember {
                dot_dot_dot,
                name,
                question,
                type_node,
            } => {
                if *dot_dot_dot {
                    self.write("...");
                }
                self.emit(*name);
                if *question {
                    self.write("?");
                }
                self.write(": ");
                self.emit(*type_node);
            }
            NodeData::OptionalType { type_node } => {
                let parens = self.needs_parens_in_postfix(*type_node);
                self.emit_wrapped(*type_node, parens);
                self.write("?");
            }
            NodeData::RestType { type_node } => {
                self.write("...");
                self.emit(*type_node);
            }
            NodeData::UnionType { types } => {
                for (i, member) in types.iter().enumerate() {
                    if i > 0 {
                        self.write(" | ");
                    }
                    let parens = self.needs_parens_in_union(member, false);
                    self.emit_wrapped(member, parens);
                }
            }
            NodeData::IntersectionType { types } => {
                for (i, member) in types.iter().enumerate() {
                    if i > 0 {
                        self.write(" & ");
                    }
                    let parens = self.needs_parens_in_union(member, true);
                    self.emit_wrapped(member, parens);
                }
            }
            NodeData::TypeLiteral {
                members,
                multi_line,
            } => self.emit_type_literal(members, *multi_line),
            NodeData::FunctionType(sig) => {
                self.write_type_parameters(sig.type_parameters.as_ref());
                self.write_parameters(&sig.parameters);
                self.write(" => ");
                self.emit(sig.return_type);
            }
            NodeData::ConstructorType(sig) => {
                if sig.modifiers.contains(ModifierFlags::ABSTRACT) {
                    self.write("abstract ");
                }
                self.write("new ");
                self.write_type_parameters(sig.type_parameters.as_ref());
                self.write_parameters(&sig.parameters);
                self.write(" => ");
                self.emit(sig.return_type);
            }
            NodeData::JsDocFunctionType(sig) => {
                self.write("function");
                self.write_parameters(&sig.parameters);
                self.write_type_annotation(sig.return_type);
            }
            NodeData::TypeQuery {
                expr_name,
                type_arguments,
            } => {
                self.write("typeof ");
                self.emit(*expr_name);
                self.write_type_arguments(type_arguments.as_ref());
            }
            NodeData::TypeOperator {
                operator,
                type_node,
            } => {
                self.write(match operator {
                    TypeOperatorKind::KeyOf => "keyof ",
                    TypeOperatorKind::Unique => "unique ",
                    TypeOperatorKind::Readonly => "readonly ",
                });
                let parens = matches!(
                    self.arena.data(*type_node),
                    Some(
                        NodeData::UnionType { .. }
                            | NodeData::IntersectionType { .. }
                            | NodeData::FunctionType(_)
                            | NodeData::ConstructorType(_)
                            | NodeData::ConditionalType { .. }
                    )
                );
                self.emit_wrapped(*type_node, parens);
            }
            NodeData::IndexedAccessType {
                object_type,
                index_type,
            } => {
                let parens = self.needs_parens_in_postfix(*object_type);
                self.emit_wrapped(*object_type, parens);
                self.write("[");
                self.emit(*index_type);
                self.write("]");
            }
            NodeData::MappedType(mapped) => self.emit_mapped_type(mapped),
            NodeData::ConditionalType {
                check_type,
                extends_type,
                true_type,
                false_type,
            } => {
                let parens = matches!(
                    self.arena.data(*check_type),
                    Some(
                        NodeData::FunctionType(_)
                            | NodeData::ConstructorType(_)
                            | NodeData::ConditionalType { .. }
                    )
                );
                self.emit_wrapped(*check_type, parens);
                self.write(" extends ");
                let parens = matches!(
                    self.arena.data(*extends_type),
                    Some(NodeData::ConditionalType { .. })
                );
                self.emit_wrapped(*extends_type, parens);
                self.write(" ? ");
                self.emit(*true_type);
                self.write(" : ");
                self.emit(*false_type);
            }
            NodeData::InferType { type_parameter } => {
                self.write("infer ");
                self.emit(*type_parameter);
            }
            NodeData::LiteralType { literal } => self.emit(*literal),
            NodeData::TemplateLiteralType { head, spans } => {
                self.write("`");
                self.write(head);
                for span in spans {
                    self.write("${");
                    self.emit(span.type_node);
                    self.write("}");
                    self.write(&span.literal);
                }
                self.write("`");
            }
            NodeData::ParenthesizedType { type_node } => {
                self.write("(");
                self.emit(*type_node);
                self.write(")");
            }
            NodeData::ThisType => self.write("this"),
            NodeData::TypePredicate {
                asserts,
                parameter_name,
                type_node,
            } => {
                if *asserts {
                    self.write("asserts ");
                }
                self.emit(*parameter_name);
                if type_node.is_some() {
                    self.write(" is ");
                    self.emit(*type_node);
                }
            }
            NodeData::ImportType {
                is_type_of,
                argument,
                qualifier,
                type_arguments,
            } => {
                if *is_type_of {
                    self.write("typeof ");
                }
                self.write("import(");
                self.emit(*argument);
                self.write(")");
                if qualifier.is_some() {
                    self.write(".");
                    self.emit(*qualifier);
                }
                self.write_type_arguments(type_arguments.as_ref());
            }
            NodeData::JsDocAllType => self.write("*"),
            NodeData::JsDocUnknownType => self.write("?"),
            NodeData::JsDocNullableType { type_node } => {
                self.write("?");
                self.emit(*type_node);
            }
            NodeData::JsDocNonNullableType { type_node } => {
                self.write("!");
                self.emit(*type_node);
            }
            NodeData::JsDocOptionalType { type_node } => {
                self.emit(*type_node);
                self.write("=");
            }
            NodeData::JsDocVariadicType { type_node } => {
                self.write("...");
                self.emit(*type_node);
            }
            other => {
                tracing::trace!(idx = idx.0, kind = other.kind_name(), "not a type node");
            }
        }
    }

    fn emit_type_literal(&mut self, members: &NodeList, multi_line: bool) {
        if members.is_empty() {
            self.write("{}");
            return;
        }
        if multi_line {
            self.write_block_members(members);
            return;
        }
        self.write("{ ");
        for member in members.iter() {
            self.emit(member);
            self.write(" ");
        }
        self.write("}");
    }

    fn emit_mapped_type(&mut self, mapped: &MappedTypeData) {
        self.write("{ ");
        match mapped.readonly_token {
            Some(MappedModifier::Present) => self.write("readonly "),
            Some(MappedModifier::Plus) => self.write("+readonly "),
            Some(MappedModifier::Minus) => self.write("-readonly "),
            None => {}
        }
        self.write("[");
        if let Some(NodeData::TypeParameter(tp)) = self.arena.data(mapped.type_parameter) {
            self.emit(tp.name);
            self.write(" in ");
            self.emit(tp.constraint);
        }
        if mapped.name_type.is_some() {
            self.write(" as ");
            self.emit(mapped.name_type);
        }
        self.write("]");
        match mapped.question_token {
            Some(MappedModifier::Present) => self.write("?"),
            Some(MappedModifier::Plus) => self.write("+?"),
            Some(MappedModifier::Minus) => self.write("-?"),
            None => {}
        }
        self.write_type_annotation(mapped.type_node);
        self.write("; }");
    }

    // =========================================================================
    // Statements, members, expressions
    // =========================================================================

    fn emit_other(&mut self, idx: NodeIndex, data: &NodeData, flags: NodeFlags) {
        match data {
            // ----- names -----
            NodeData::Identifier { text } | NodeData::PrivateIdentifier { text } => {
                self.write(text);
            }
            NodeData::QualifiedName { left, right } => {
                self.emit(*left);
                self.write(".");
                self.emit(*right);
            }
            NodeData::ComputedPropertyName { expression } => {
                self.write("[");
                self.emit(*expression);
                self.write("]");
            }

            // ----- literals -----
            NodeData::StringLiteral { text } => self.write_string_literal(text),
            NodeData::NumericLiteral { text } | NodeData::BigIntLiteral { text } => {
                self.write(text);
            }
            NodeData::NoSubstitutionTemplateLiteral { text } => {
                self.write("`");
                self.write(text);
                self.write("`");
            }
            NodeData::BooleanLiteral { value } => self.write(if *value { "true" } else { "false" }),
            NodeData::NullLiteral => self.write("null"),
            NodeData::ThisExpression => self.write("this"),
            NodeData::SuperExpression => self.write("super"),

            // ----- expressions -----
            NodeData::ObjectLiteral { properties, .. } => {
                if properties.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.write_list(properties, ", ");
                    self.write(" }");
                }
            }
            NodeData::PropertyAssignment { name, initializer } => {
                self.emit(*name);
                self.write(": ");
                self.emit(*initializer);
            }
            NodeData::ShorthandPropertyAssignment { name } => self.emit(*name),
            NodeData::SpreadAssignment { expression } | NodeData::SpreadElement { expression } => {
                self.write("...");
                self.emit(*expression);
            }
            NodeData::ArrayLiteral { elements } => {
                self.write("[");
                self.write_list(elements, ", ");
                self.write("]");
            }
            NodeData::OmittedExpression => {}
            NodeData::ArrowFunction(f) => {
                self.write_modifiers(f.modifiers);
                self.write_type_parameters(f.type_parameters.as_ref());
                self.write_parameters(&f.parameters);
                self.write_type_annotation(f.return_type);
                self.write(" => ");
                self.emit(f.body);
            }
            NodeData::FunctionExpression(f) => {
                self.write_modifiers(f.modifiers);
                self.write("function");
                if f.asterisk {
                    self.write("*");
                }
                if f.name.is_some() {
                    self.write(" ");
                    self.emit(f.name);
                }
                self.write_type_parameters(f.type_parameters.as_ref());
                self.write_parameters(&f.parameters);
                self.write_type_annotation(f.return_type);
                self.write_body_or_semicolon(f.body);
            }
            NodeData::ClassExpression(c) => {
                self.write("class");
                if c.name.is_some() {
                    self.write(" ");
                    self.emit(c.name);
                }
                self.write_class_like_tail(c.type_parameters.as_ref(), c.heritage_clauses.as_ref());
                self.write(" ");
                self.write_block_members(&c.members);
            }
            NodeData::Parenthesized { expression } => {
                self.write("(");
                self.emit(*expression);
                self.write(")");
            }
            NodeData::AsExpression {
                expression,
                type_node,
            } => {
                self.emit(*expression);
                self.write(" as ");
                self.emit(*type_node);
            }
            NodeData::SatisfiesExpression {
                expression,
                type_node,
            } => {
                self.emit(*expression);
                self.write(" satisfies ");
                self.emit(*type_node);
            }
            NodeData::TypeAssertion {
                type_node,
                expression,
            } => {
                self.write("<");
                self.emit(*type_node);
                self.write(">");
                self.emit(*expression);
            }
            NodeData::NonNullExpression { expression } => {
                self.emit(*expression);
                self.write("!");
            }
            NodeData::PrefixUnary { operator, operand } => {
                self.write(operator.as_str());
                self.emit(*operand);
            }
            NodeData::Binary {
                left,
                operator,
                right,
            } => {
                self.emit(*left);
                if *operator == BinaryOperator::Comma {
                    self.write(", ");
                } else {
                    self.write(" ");
                    self.write(operator.as_str());
                    self.write(" ");
                }
                self.emit(*right);
            }
            NodeData::Conditional {
                condition,
                when_true,
                when_false,
            } => {
                self.emit(*condition);
                self.write(" ? ");
                self.emit(*when_true);
                self.write(" : ");
                self.emit(*when_false);
            }
            NodeData::Call {
                expression,
                type_arguments,
                arguments,
            } => {
                self.emit(*expression);
                self.write_type_arguments(type_arguments.as_ref());
                self.write("(");
                self.write_list(arguments, ", ");
                self.write(")");
            }
            NodeData::New {
                expression,
                type_arguments,
                arguments,
            } => {
                self.write("new ");
                self.emit(*expression);
                self.write_type_arguments(type_arguments.as_ref());
                self.write("(");
                self.write_list(arguments, ", ");
                self.write(")");
            }
            NodeData::PropertyAccess { expression, name } => {
                self.emit(*expression);
                self.write(".");
                self.emit(*name);
            }
            NodeData::ElementAccess {
                expression,
                argument,
            } => {
                self.emit(*expression);
                self.write("[");
                self.emit(*argument);
                self.write("]");
            }
            NodeData::TemplateExpression { head, spans } => {
                self.write("`");
                self.write(head);
                for span in spans {
                    self.write("${");
                    self.emit(span.expression);
                    self.write("}");
                    self.write(&span.literal);
                }
                self.write("`");
            }

            // ----- signatures and members -----
            NodeData::Parameter(p) => {
                self.write_modifiers(p.modifiers);
                if p.dot_dot_dot {
                    self.write("...");
                }
                self.emit(p.name);
                if p.question {
                    self.write("?");
                }
                self.write_type_annotation(p.type_node);
                self.write_initializer(p.initializer);
            }
            NodeData::TypeParameter(tp) => {
                self.write_modifiers(tp.modifiers);
                self.emit(tp.name);
                if tp.constraint.is_some() {
                    self.write(" extends ");
                    self.emit(tp.constraint);
                }
                if tp.default.is_some() {
                    self.write(" = ");
                    self.emit(tp.default);
                }
            }
            NodeData::PropertySignature(p) | NodeData::PropertyDeclaration(p) => {
                self.write_modifiers(p.modifiers);
                self.emit(p.name);
                if p.question {
                    self.write("?");
                }
                if p.exclamation {
                    self.write("!");
                }
                self.write_type_annotation(p.type_node);
                self.write_initializer(p.initializer);
                self.write(";");
            }
            NodeData::MethodSignature(m) => {
                self.write_modifiers(m.modifiers);
                self.emit(m.name);
                if m.question {
                    self.write("?");
                }
                self.write_type_parameters(m.type_parameters.as_ref());
                self.write_parameters(&m.parameters);
                self.write_type_annotation(m.return_type);
                self.write(";");
            }
            NodeData::MethodDeclaration(f) => {
                self.write_modifiers(f.modifiers);
                if f.asterisk {
                    self.write("*");
                }
                self.emit(f.name);
                if f.question {
                    self.write("?");
                }
                self.write_type_parameters(f.type_parameters.as_ref());
                self.write_parameters(&f.parameters);
                self.write_type_annotation(f.return_type);
                self.write_body_or_semicolon(f.body);
            }
            NodeData::Constructor(f) => {
                self.write_modifiers(f.modifiers);
                self.write("constructor");
                self.write_parameters(&f.parameters);
                self.write_body_or_semicolon(f.body);
            }
            NodeData::GetAccessor(a) => {
                self.write_modifiers(a.modifiers);
                self.write("get ");
                self.emit(a.name);
                self.write_parameters(&a.parameters);
                self.write_type_annotation(a.return_type);
                self.write_body_or_semicolon(a.body);
            }
            NodeData::SetAccessor(a) => {
                self.write_modifiers(a.modifiers);
                self.write("set ");
                self.emit(a.name);
                self.write_parameters(&a.parameters);
                self.write_body_or_semicolon(a.body);
            }
            NodeData::CallSignature(sig) => {
                self.write_type_parameters(sig.type_parameters.as_ref());
                self.write_parameters(&sig.parameters);
                self.write_type_annotation(sig.return_type);
                self.write(";");
            }
            NodeData::ConstructSignature(sig) => {
                self.write("new ");
                self.write_type_parameters(sig.type_parameters.as_ref());
                self.write_parameters(&sig.parameters);
                self.write_type_annotation(sig.return_type);
                self.write(";");
            }
            NodeData::IndexSignature(sig) => {
                self.write_modifiers(sig.modifiers);
                self.write("[");
                self.write_list(&sig.parameters, ", ");
                self.write("]");
                self.write_type_annotation(sig.type_node);
                self.write(";");
            }
            NodeData::ClassStaticBlock { body } => {
                self.write("static ");
                self.emit(*body);
            }
            NodeData::SemicolonClassElement => self.write(";"),
            NodeData::HeritageClause { token, types } => {
                self.write(match token {
                    HeritageToken::Extends => "extends ",
                    HeritageToken::Implements => "implements ",
                });
                self.write_list(types, ", ");
            }
            NodeData::ObjectBindingPattern { elements } => {
                if elements.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.write_list(elements, ", ");
                    self.write(" }");
                }
            }
            NodeData::ArrayBindingPattern { elements } => {
                self.write("[");
                self.write_list(elements, ", ");
                self.write("]");
            }
            NodeData::BindingElement {
                dot_dot_dot,
                property_name,
                name,
                initializer,
            } => {
                if *dot_dot_dot {
                    self.write("...");
                }
                if property_name.is_some() {
                    self.emit(*property_name);
                    self.write(": ");
                }
                self.emit(*name);
                self.write_initializer(*initializer);
            }
            NodeData::EnumMember { name, initializer } => {
                self.emit(*name);
                self.write_initializer(*initializer);
            }

            // ----- statements -----
            NodeData::Block { statements } => {
                if statements.is_empty() {
                    self.write("{ }");
                } else {
                    self.write("{");
                    self.new_line();
                    self.indent += 1;
                    self.write_statements(statements);
                    self.indent -= 1;
                    self.write_indent();
                    self.write("}");
                }
            }
            NodeData::VariableStatement {
                modifiers,
                declaration_list,
            } => {
                self.write_modifiers(*modifiers);
                self.emit(*declaration_list);
                self.write(";");
            }
            NodeData::VariableDeclarationList { declarations } => {
                if flags.contains(NodeFlags::CONST) {
                    self.write("const ");
                } else if flags.contains(NodeFlags::LET) {
                    self.write("let ");
                } else {
                    self.write("var ");
                }
                self.write_list(declarations, ", ");
            }
            NodeData::VariableDeclaration {
                name,
                exclamation,
                type_node,
                initializer,
            } => {
                self.emit(*name);
                if *exclamation {
                    self.write("!");
                }
                self.write_type_annotation(*type_node);
                self.write_initializer(*initializer);
            }
            NodeData::FunctionDeclaration(f) => {
                self.write_modifiers(f.modifiers);
                self.write("function");
                if f.asterisk {
                    self.write("*");
                }
                if f.name.is_some() {
                    self.write(" ");
                    self.emit(f.name);
                }
                self.write_type_parameters(f.type_parameters.as_ref());
                self.write_parameters(&f.parameters);
                self.write_type_annotation(f.return_type);
                self.write_body_or_semicolon(f.body);
            }
            NodeData::ClassDeclaration(c) => {
                self.write_modifiers(c.modifiers);
                self.write("class");
                if c.name.is_some() {
                    self.write(" ");
                    self.emit(c.name);
                }
                self.write_class_like_tail(c.type_parameters.as_ref(), c.heritage_clauses.as_ref());
                self.write(" ");
                self.write_block_members(&c.members);
            }
            NodeData::InterfaceDeclaration(i) => {
                self.write_modifiers(i.modifiers);
                self.write("interface ");
                self.emit(i.name);
                self.write_class_like_tail(i.type_parameters.as_ref(), i.heritage_clauses.as_ref());
                self.write(" ");
                self.write_block_members(&i.members);
            }
            NodeData::TypeAliasDeclaration(t) => {
                self.write_modifiers(t.modifiers);
                self.write("type ");
                self.emit(t.name);
                self.write_type_parameters(t.type_parameters.as_ref());
                self.write(" = ");
                self.emit(t.type_node);
                self.write(";");
            }
            NodeData::EnumDeclaration(e) => {
                self.write_modifiers(e.modifiers);
                self.write("enum ");
                self.emit(e.name);
                self.write(" {");
                if e.members.is_empty() {
                    self.write("\n");
                    self.write_indent();
                    self.write("}");
                    return;
                }
                self.new_line();
                self.indent += 1;
                let count = e.members.len();
                for (i, member) in e.members.iter().enumerate() {
                    self.write_indent();
                    self.emit(member);
                    if i + 1 < count {
                        self.write(",");
                    }
                    self.new_line();
                }
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            NodeData::ModuleDeclaration(m) => self.emit_module_declaration(m, flags),
            NodeData::ModuleBlock { statements } => {
                self.write("{");
                self.new_line();
                self.indent += 1;
                self.write_statements(statements);
                self.indent -= 1;
                self.write_indent();
                self.write("}");
            }
            NodeData::ImportDeclaration(import) => {
                self.write_modifiers(import.modifiers);
                self.write("import ");
                if import.import_clause.is_some() {
                    self.emit(import.import_clause);
                    self.write(" from ");
                }
                self.emit(import.module_specifier);
                self.write(";");
            }
            NodeData::ImportClause {
                is_type_only,
                name,
                named_bindings,
            } => {
                if *is_type_only {
                    self.write("type ");
                }
                if name.is_some() {
                    self.emit(*name);
                    if named_bindings.is_some() {
                        self.write(", ");
                    }
                }
                self.emit(*named_bindings);
            }
            NodeData::NamespaceImport { name } => {
                self.write("* as ");
                self.emit(*name);
            }
            NodeData::NamedImports { elements } | NodeData::NamedExports { elements } => {
                if elements.is_empty() {
                    self.write("{}");
                } else {
                    self.write("{ ");
                    self.write_list(elements, ", ");
                    self.write(" }");
                }
            }
            NodeData::ImportSpecifier {
                is_type_only,
                property_name,
                name,
            }
            | NodeData::ExportSpecifier {
                is_type_only,
                property_name,
                name,
            } => {
                if *is_type_only {
                    self.write("type ");
                }
                if property_name.is_some() {
                    self.emit(*property_name);
                    self.write(" as ");
                }
                self.emit(*name);
            }
            NodeData::ImportEqualsDeclaration {
                modifiers,
                is_type_only,
                name,
                module_reference,
            } => {
                self.write_modifiers(*modifiers);
                self.write("import ");
                if *is_type_only {
                    self.write("type ");
                }
                self.emit(*name);
                self.write(" = ");
                self.emit(*module_reference);
                self.write(";");
            }
            NodeData::ExternalModuleReference { expression } => {
                self.write("require(");
                self.emit(*expression);
                self.write(")");
            }
            NodeData::ExportDeclaration(export) => {
                self.write_modifiers(export.modifiers);
                self.write("export ");
                if export.is_type_only {
                    self.write("type ");
                }
                if export.export_clause.is_some() {
                    self.emit(export.export_clause);
                } else {
                    self.write("*");
                }
                if export.module_specifier.is_some() {
                    self.write(" from ");
                    self.emit(export.module_specifier);
                }
                self.write(";");
            }
            NodeData::NamespaceExport { name } => {
                self.write("* as ");
                self.emit(*name);
            }
            NodeData::ExportAssignment {
                is_export_equals,
                expression,
            } => {
                self.write(if *is_export_equals {
                    "export = "
                } else {
                    "export default "
                });
                self.emit(*expression);
                self.write(";");
            }
            NodeData::ExpressionStatement { expression } => {
                self.emit(*expression);
                self.write(";");
            }
            NodeData::ReturnStatement { expression } => {
                self.write("return");
                if expression.is_some() {
                    self.write(" ");
                    self.emit(*expression);
                }
                self.write(";");
            }
            NodeData::EmptyStatement => self.write(";"),
            NodeData::OtherStatement => {}
            NodeData::SourceFile(_) => {}
            other => {
                tracing::trace!(idx = idx.0, kind = other.kind_name(), "unprinted node");
            }
        }
    }

    fn write_class_like_tail(
        &mut self,
        type_parameters: Option<&NodeList>,
        heritage_clauses: Option<&NodeList>,
    ) {
        self.write_type_parameters(type_parameters);
        if let Some(clauses) = heritage_clauses {
            for clause in clauses.iter() {
                self.write(" ");
                self.emit(clause);
            }
        }
    }

    fn emit_module_declaration(&mut self, module: &ModuleData, flags: NodeFlags) {
        self.write_modifiers(module.modifiers);
        if flags.contains(NodeFlags::GLOBAL_AUGMENTATION) {
            self.write("global");
        } else {
            let is_string_name =
                matches!(self.arena.data(module.name), Some(NodeData::StringLiteral { .. }));
            self.write(if is_string_name || !flags.contains(NodeFlags::NAMESPACE) {
                "module "
            } else {
                "namespace "
            });
            self.emit(module.name);
        }

        // `namespace a.b.c { }` is stored as nested declarations.
        let mut body = module.body;
        while let Some(NodeData::ModuleDeclaration(inner)) = self.arena.data(body) {
            self.write(".");
            self.emit(inner.name);
            body = inner.body;
        }
        if body.is_none() {
            self.write(";");
            return;
        }
        self.write(" ");
        self.emit(body);
    }
}
