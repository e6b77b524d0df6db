//! Diagnostics reported when declarations must be emitted from syntax alone.

mod support;

use dtsz_ast::{BinaryOperator, HeritageToken, ModifierFlags, NodeData, NodeFlags, NodeIndex, NodeList, TypeKeyword};
use dtsz_common::diagnostics::diagnostic_codes;
use dtsz_emitter::ConstantValue;
use support::Fixture;

#[test]
fn annotated_declarations_are_silent() {
    let mut f = Fixture::module().isolated();
    let number = f.keyword(TypeKeyword::Number);
    let one = f.number("1");
    f.export_const("a", number, one);
    let string = f.keyword(TypeKeyword::String);
    let s = f.param("s", string, NodeIndex::NONE);
    let void = f.keyword(TypeKeyword::Void);
    f.function(ModifierFlags::EXPORT, "g", vec![s], void, true);
    let flag = f.arena.create_boolean_literal(true);
    f.export_const("b", NodeIndex::NONE, flag);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare const a: number;\n\
         export declare function g(s: string): void;\n\
         export declare const b: true;\n"
    );
    assert!(emitted.diagnostics.is_empty(), "{:?}", emitted.codes());
}

#[test]
fn variable_with_an_inferred_initializer_is_reported_with_a_fix() {
    let mut f = Fixture::module().isolated();
    let callee = f.ident("compute");
    let call = f.arena.create_call(callee, Vec::new());
    f.export_const("v", NodeIndex::NONE, call);

    let emitted = f.emit();
    assert_eq!(emitted.text, "export declare const v: unknown;\n");
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::VARIABLE_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS]
    );
    let related: Vec<u32> = emitted.diagnostics[0].related.iter().map(|d| d.code).collect();
    assert_eq!(related, [diagnostic_codes::ADD_A_TYPE_ANNOTATION_TO_THE_VARIABLE]);
    assert!(emitted.diagnostics[0].related[0].message_text.contains('v'));
}

#[test]
fn function_without_return_type_is_reported() {
    let mut f = Fixture::module().isolated();
    f.function(ModifierFlags::EXPORT, "g", Vec::new(), NodeIndex::NONE, true);

    let emitted = f.emit();
    assert_eq!(emitted.text, "export declare function g(): unknown;\n");
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::FUNCTION_MUST_HAVE_AN_EXPLICIT_RETURN_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS]
    );
    assert_eq!(emitted.diagnostics[0].related.len(), 1);
}

#[test]
fn unannotated_parameter_is_reported() {
    let mut f = Fixture::module().isolated();
    let a = f.param("a", NodeIndex::NONE, NodeIndex::NONE);
    let void = f.keyword(TypeKeyword::Void);
    f.function(ModifierFlags::EXPORT, "g", vec![a], void, true);

    let emitted = f.emit();
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::PARAMETER_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS]
    );
}

#[test]
fn default_export_of_an_expression_is_reported() {
    let mut f = Fixture::module().isolated();
    let callee = f.ident("make");
    let call = f.arena.create_call(callee, Vec::new());
    let assignment = f.arena.create_export_assignment(false, call);
    f.push(assignment);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "declare const _default: unknown;\nexport default _default;\n"
    );
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::DEFAULT_EXPORTS_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS]
    );
}

#[test]
fn computed_class_member_is_reported_and_dropped() {
    let mut f = Fixture::module().isolated();
    let key = f.ident("key");
    let name = f.arena.create_computed_property_name(key);
    let number = f.keyword(TypeKeyword::Number);
    let dynamic = f
        .arena
        .create_property_declaration(ModifierFlags::empty(), name, false, number, NodeIndex::NONE);

    let symbol = f.arena.create_entity_expression("Symbol.iterator");
    let name = f.arena.create_computed_property_name(symbol);
    let number = f.keyword(TypeKeyword::Number);
    let well_known = f
        .arena
        .create_property_declaration(ModifierFlags::empty(), name, false, number, NodeIndex::NONE);

    f.class(ModifierFlags::EXPORT, "Keys", None, vec![dynamic, well_known]);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare class Keys {\n    [Symbol.iterator]: number;\n}\n"
    );
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::COMPUTED_PROPERTY_NAMES_ON_CLASS_OR_OBJECT_LITERALS_CANNOT_BE_INFERRED]
    );
}

#[test]
fn expression_in_extends_clause_is_reported() {
    let mut f = Fixture::module().isolated();
    let mixin = f.ident("mixin");
    let call = f.arena.create_call(mixin, Vec::new());
    let heritage_type = f.arena.create_expression_with_type_arguments(call, None);
    let clause = f
        .arena
        .create_heritage_clause(HeritageToken::Extends, vec![heritage_type]);
    f.class(ModifierFlags::EXPORT, "Mixed", Some(vec![clause]), Vec::new());

    let emitted = f.emit();
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::EXTENDS_CLAUSE_CANT_CONTAIN_AN_EXPRESSION_WITH_ISOLATED_DECLARATIONS]
    );
    assert!(emitted.text.starts_with("declare const Mixed_base: unknown;\n"));
}

#[test]
fn enum_member_referring_to_another_declaration_is_reported() {
    let mut f = Fixture::module().isolated();
    f.resolver.set_constant("Other.X", ConstantValue::Number(1.0));
    let reference = f.arena.create_entity_expression("Other.X");
    let a_name = f.ident("A");
    let a = f.arena.add(NodeData::EnumMember {
        name: a_name,
        initializer: reference,
    });
    let two = f.number("2");
    let b_name = f.ident("B");
    let b = f.arena.add(NodeData::EnumMember {
        name: b_name,
        initializer: two,
    });
    let name = f.ident("E");
    let declaration = f.arena.add(NodeData::EnumDeclaration(dtsz_ast::EnumData {
        modifiers: ModifierFlags::EXPORT,
        name,
        members: NodeList::from(vec![a, b]),
    }));
    f.push(declaration);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare enum E {\n    A = 1,\n    B = 2\n}\n"
    );
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::ENUM_MEMBER_INITIALIZERS_MUST_BE_COMPUTABLE_WITHOUT_REFERENCES_TO_EXTERNAL_SYMBOLS]
    );
    assert_eq!(emitted.diagnostics[0].node, a);
}

#[test]
fn properties_assigned_onto_functions_are_reported() {
    let mut f = Fixture::module().isolated();
    let void = f.keyword(TypeKeyword::Void);
    let function = f.function(ModifierFlags::EXPORT, "f", Vec::new(), void, true);
    let target = f.ident("f");
    let access = f.arena.create_property_access(target, "count");
    let zero = f.number("0");
    let assignment = f.arena.create_binary(access, BinaryOperator::Equals, zero);
    f.resolver.add_expando(function, "count", assignment);

    let emitted = f.emit();
    assert_eq!(
        emitted.codes(),
        [diagnostic_codes::ASSIGNING_PROPERTIES_TO_FUNCTIONS_WITHOUT_DECLARING_THEM_IS_NOT_SUPPORTED]
    );
    assert!(emitted.text.contains("var count: number;"));
}

#[test]
fn the_same_file_without_isolated_declarations_is_silent() {
    let mut f = Fixture::module();
    let callee = f.ident("compute");
    let call = f.arena.create_call(callee, Vec::new());
    let declaration = f.export_const("v", NodeIndex::NONE, call);
    f.resolver.set_type(declaration, "number");
    let (_, local) = f.variable(
        ModifierFlags::empty(),
        NodeFlags::LET,
        "hidden",
        NodeIndex::NONE,
        NodeIndex::NONE,
    );
    f.resolver.set_type(local, "string");

    let emitted = f.emit();
    assert_eq!(emitted.text, "export declare const v: number;\n");
    assert!(emitted.diagnostics.is_empty());
}
