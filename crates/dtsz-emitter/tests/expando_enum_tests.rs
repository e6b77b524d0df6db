//! Function property namespaces and folded enum members.

mod support;

use dtsz_ast::{BinaryOperator, EnumData, ModifierFlags, NodeData, NodeIndex, NodeList, TypeKeyword};
use dtsz_emitter::ConstantValue;
use support::Fixture;

/// `function f(): void {}` with `f.<name> = <value>` for each property.
fn expando_function(f: &mut Fixture, modifiers: ModifierFlags, properties: &[(&str, NodeIndex)]) -> NodeIndex {
    let void = f.keyword(TypeKeyword::Void);
    let function = f.function(modifiers, "f", Vec::new(), void, true);
    for &(name, value) in properties {
        let target = f.ident("f");
        let access = f.arena.create_property_access(target, name);
        let assignment = f.arena.create_binary(access, BinaryOperator::Equals, value);
        f.resolver.add_expando(function, name, assignment);
    }
    function
}

#[test]
fn assigned_properties_become_a_namespace() {
    let mut f = Fixture::module();
    let zero = f.number("0");
    expando_function(&mut f, ModifierFlags::EXPORT, &[("count", zero)]);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare function f(): void;\n\
         export declare namespace f {\n\
         \x20   var count: number;\n\
         }\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

#[test]
fn reserved_and_non_identifier_names_are_exported_through_locals() {
    let mut f = Fixture::module();
    let one = f.number("1");
    let x = f.string("x");
    let two = f.number("2");
    expando_function(
        &mut f,
        ModifierFlags::EXPORT,
        &[("default", one), ("my-prop", x), ("size", two)],
    );

    assert_eq!(
        f.emit().text,
        "export declare function f(): void;\n\
         export declare namespace f {\n\
         \x20   var _default: number;\n\
         \x20   var _a: string;\n\
         \x20   export var size: number;\n\
         \x20   export { _default as default, _a as \"my-prop\" };\n\
         }\n"
    );
}

#[test]
fn default_exported_function_is_split_from_its_export() {
    let mut f = Fixture::module();
    let zero = f.number("0");
    expando_function(&mut f, ModifierFlags::EXPORT_DEFAULT, &[("count", zero)]);

    assert_eq!(
        f.emit().text,
        "declare function f(): void;\n\
         declare namespace f {\n\
         \x20   var count: number;\n\
         }\n\
         export default f;\n"
    );
}

#[test]
fn only_the_last_overload_signature_carries_the_namespace() {
    let mut f = Fixture::script();
    let void = f.keyword(TypeKeyword::Void);
    let first = f.function(ModifierFlags::empty(), "f", Vec::new(), void, false);
    let string = f.keyword(TypeKeyword::String);
    let a = f.param("a", string, NodeIndex::NONE);
    let void = f.keyword(TypeKeyword::Void);
    let second = f.function(ModifierFlags::empty(), "f", vec![a], void, false);
    for signature in [first, second] {
        let target = f.ident("f");
        let access = f.arena.create_property_access(target, "tag");
        let value = f.string("t");
        let assignment = f.arena.create_binary(access, BinaryOperator::Equals, value);
        f.resolver.add_expando(signature, "tag", assignment);
    }

    assert_eq!(
        f.emit().text,
        "declare function f(): void;\n\
         declare function f(a: string): void;\n\
         declare namespace f {\n\
         \x20   var tag: string;\n\
         }\n"
    );
}

// =============================================================================
// Enums
// =============================================================================

fn enum_declaration(f: &mut Fixture, modifiers: ModifierFlags, name: &str, members: &[(&str, NodeIndex)]) -> NodeIndex {
    let members: Vec<NodeIndex> = members
        .iter()
        .map(|&(member, initializer)| {
            let name = f.ident(member);
            f.arena.add(NodeData::EnumMember { name, initializer })
        })
        .collect();
    let name = f.ident(name);
    let declaration = f.arena.add(NodeData::EnumDeclaration(EnumData {
        modifiers,
        name,
        members: NodeList::from(members),
    }));
    f.push(declaration)
}

#[test]
fn external_enum_references_are_folded_by_the_resolver() {
    let mut f = Fixture::module();
    f.resolver.set_constant("Other.X", ConstantValue::Number(10.0));
    let reference = f.arena.create_entity_expression("Other.X");
    enum_declaration(
        &mut f,
        ModifierFlags::EXPORT,
        "E",
        &[("A", reference), ("B", NodeIndex::NONE)],
    );

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare enum E {\n    A = 10,\n    B = 11\n}\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

#[test]
fn string_members_and_const_enums() {
    let mut f = Fixture::module();
    let a = f.string("a");
    let own = f.ident("A");
    let b = f.string("b");
    let concatenation = f.arena.create_binary(own, BinaryOperator::Plus, b);
    enum_declaration(
        &mut f,
        ModifierFlags::EXPORT | ModifierFlags::CONST,
        "S",
        &[("A", a), ("B", concatenation)],
    );

    assert_eq!(
        f.emit().text,
        "export declare const enum S {\n    A = \"a\",\n    B = \"ab\"\n}\n"
    );
}

#[test]
fn members_that_cannot_be_folded_keep_only_their_name() {
    let mut f = Fixture::module();
    let callee = f.ident("compute");
    let call = f.arena.create_call(callee, Vec::new());
    let three = f.number("3");
    enum_declaration(
        &mut f,
        ModifierFlags::EXPORT,
        "D",
        &[("A", call), ("B", three), ("C", NodeIndex::NONE)],
    );

    assert_eq!(
        f.emit().text,
        "export declare enum D {\n    A,\n    B = 3,\n    C = 4\n}\n"
    );
}
