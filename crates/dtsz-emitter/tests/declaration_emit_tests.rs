//! Statement-level declaration emit: variables, functions, interfaces, type
//! aliases, enums, namespaces, imports and exports.

mod support;

use dtsz_ast::{
    ImportData, ModifierFlags, NodeData, NodeFlags, NodeIndex, NodeList, TypeAliasData,
    TypeKeyword,
};
use dtsz_common::diagnostics::diagnostic_codes;
use dtsz_emitter::SymbolAccessibilityResult;
use support::Fixture;

// =============================================================================
// Variables
// =============================================================================

#[test]
fn const_keeps_literal_type_and_let_widens() {
    let mut f = Fixture::module();
    let one = f.number("1");
    f.export_const("x", NodeIndex::NONE, one);
    let text = f.string("s");
    f.variable(ModifierFlags::EXPORT, NodeFlags::LET, "y", NodeIndex::NONE, text);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare const x: 1;\nexport declare let y: string;\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

#[test]
fn invisible_variables_are_elided() {
    let mut f = Fixture::module();
    let one = f.number("1");
    f.variable(ModifierFlags::empty(), NodeFlags::CONST, "hidden", NodeIndex::NONE, one);
    let number = f.keyword(TypeKeyword::Number);
    let hidden = f.ident("hidden");
    f.export_const("z", number, hidden);

    assert_eq!(f.emit().text, "export declare const z: number;\n");
}

#[test]
fn inaccessible_annotation_is_reported_and_typed_unknown() {
    let mut f = Fixture::module();
    f.resolver
        .set_inaccessible("Hidden", SymbolAccessibilityResult::not_accessible("Hidden"));
    let hidden = f.type_ref("Hidden");
    f.export_const("v", hidden, NodeIndex::NONE);

    let emitted = f.emit();
    assert_eq!(emitted.text, "export declare const v: unknown;\n");
    assert_eq!(
        emitted.codes(),
        vec![diagnostic_codes::EXPORTED_VARIABLE_HAS_OR_IS_USING_PRIVATE_NAME]
    );
    assert_eq!(
        emitted.diagnostics[0].message_text,
        "Exported variable 'v' has or is using private name 'Hidden'."
    );
}

#[test]
fn resolver_serializes_unannotated_declarations() {
    let mut f = Fixture::module();
    let callee = f.ident("compute");
    let call = f.arena.create_call(callee, Vec::new());
    let declaration = f.export_const("result", NodeIndex::NONE, call);
    f.resolver.set_type(declaration, "string | undefined");

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare const result: string | undefined;\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

fn binding_element(f: &mut Fixture, property_name: NodeIndex, name: NodeIndex) -> NodeIndex {
    let element = f.arena.add(NodeData::BindingElement {
        dot_dot_dot: false,
        property_name,
        name,
        initializer: NodeIndex::NONE,
    });
    f.resolver.mark_visible(element);
    element
}

#[test]
fn exported_destructuring_declares_each_binding() {
    let mut f = Fixture::module();
    let a_name = f.ident("a");
    let a = binding_element(&mut f, NodeIndex::NONE, a_name);

    let key = f.ident("key");
    let computed = f.arena.create_computed_property_name(key);
    let b_name = f.ident("b");
    let b = binding_element(&mut f, computed, b_name);

    let d_name = f.ident("d");
    let d = binding_element(&mut f, NodeIndex::NONE, d_name);
    let inner = f.arena.add(NodeData::ArrayBindingPattern {
        elements: NodeList::from(vec![d]),
    });
    let c_name = f.ident("c");
    let c = binding_element(&mut f, c_name, inner);

    let pattern = f.arena.add(NodeData::ObjectBindingPattern {
        elements: NodeList::from(vec![a, b, c]),
    });
    let value = f.ident("value");
    let declaration = f
        .arena
        .create_variable_declaration(pattern, NodeIndex::NONE, value);
    let statement = f
        .arena
        .create_variable_statement(ModifierFlags::EXPORT, NodeFlags::CONST, vec![declaration]);
    f.push(statement);
    f.resolver.set_type(a, "number");
    f.resolver.set_type(b, "string");
    f.resolver.set_type(d, "boolean");
    f.resolver.set_type(key, "symbol");

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "declare const _a: symbol;\n\
         export declare const a: number, b: string, d: boolean;\n\
         export {};\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

// =============================================================================
// Functions
// =============================================================================

#[test]
fn script_function_gets_declare_and_optional_initialized_parameter() {
    let mut f = Fixture::script();
    let string = f.keyword(TypeKeyword::String);
    let name = f.param("name", string, NodeIndex::NONE);
    let hi = f.string("hi");
    let greeting = f.param("greeting", NodeIndex::NONE, hi);
    let function = f.function(ModifierFlags::empty(), "greet", vec![name, greeting], NodeIndex::NONE, true);
    f.resolver.set_type(function, "void");

    assert_eq!(
        f.emit().text,
        "declare function greet(name: string, greeting?: string): void;\n"
    );
}

#[test]
fn initialized_parameter_before_required_one_stays_required() {
    let mut f = Fixture::module();
    let zero = f.number("0");
    let start = f.param("start", NodeIndex::NONE, zero);
    let number = f.keyword(TypeKeyword::Number);
    let end = f.param("end", number, NodeIndex::NONE);
    let void = f.keyword(TypeKeyword::Void);
    f.function(ModifierFlags::EXPORT, "range", vec![start, end], void, true);

    assert_eq!(
        f.emit().text,
        "export declare function range(start: number, end: number): void;\n"
    );
}

#[test]
fn overload_implementation_is_elided() {
    let mut f = Fixture::module();
    let overload = |f: &mut Fixture, keyword: TypeKeyword, has_body: bool| {
        let parameter_type = f.keyword(keyword);
        let a = f.param("a", parameter_type, NodeIndex::NONE);
        let return_type = f.keyword(keyword);
        f.function(ModifierFlags::EXPORT, "over", vec![a], return_type, has_body)
    };
    overload(&mut f, TypeKeyword::String, false);
    overload(&mut f, TypeKeyword::Number, false);
    let implementation = overload(&mut f, TypeKeyword::Any, true);
    f.resolver.mark_overload_implementation(implementation);

    assert_eq!(
        f.emit().text,
        "export declare function over(a: string): string;\n\
         export declare function over(a: number): number;\n"
    );
}

#[test]
fn missing_return_type_falls_back_to_unknown() {
    let mut f = Fixture::module();
    f.function(ModifierFlags::EXPORT, "make", Vec::new(), NodeIndex::NONE, true);

    let emitted = f.emit();
    assert_eq!(emitted.text, "export declare function make(): unknown;\n");
    assert!(emitted.diagnostics.is_empty());
}

// =============================================================================
// Interfaces, type aliases and enums
// =============================================================================

#[test]
fn interface_members_are_kept_without_declare() {
    let mut f = Fixture::module();
    let number = f.keyword(TypeKeyword::Number);
    let x = f.property_signature("x", number);
    let string = f.keyword(TypeKeyword::String);
    let y_name = f.ident("y");
    let y = f
        .arena
        .create_property_signature(ModifierFlags::empty(), y_name, true, string);
    f.interface(ModifierFlags::EXPORT, "Point", vec![x, y]);

    assert_eq!(
        f.emit().text,
        "export interface Point {\n    x: number;\n    y?: string;\n}\n"
    );
}

#[test]
fn type_alias_is_reused() {
    let mut f = Fixture::module();
    let string = f.keyword(TypeKeyword::String);
    let number = f.keyword(TypeKeyword::Number);
    let union = f.arena.create_union_type(vec![string, number]);
    let name = f.ident("Id");
    let alias = f.arena.add(NodeData::TypeAliasDeclaration(TypeAliasData {
        modifiers: ModifierFlags::EXPORT,
        name,
        type_parameters: None,
        type_node: union,
    }));
    f.push(alias);

    assert_eq!(f.emit().text, "export type Id = string | number;\n");
}

#[test]
fn enum_members_get_evaluated_initializers() {
    let mut f = Fixture::module();
    let member = |f: &mut Fixture, name: &str, initializer: NodeIndex| {
        let name = f.ident(name);
        f.arena.add(NodeData::EnumMember { name, initializer })
    };
    let red = member(&mut f, "Red", NodeIndex::NONE);
    let five = f.number("5");
    let green = member(&mut f, "Green", five);
    let blue = member(&mut f, "Blue", NodeIndex::NONE);
    let name = f.ident("Color");
    let declaration = f.arena.add(NodeData::EnumDeclaration(dtsz_ast::EnumData {
        modifiers: ModifierFlags::EXPORT,
        name,
        members: NodeList::from(vec![red, green, blue]),
    }));
    f.push(declaration);

    assert_eq!(
        f.emit().text,
        "export declare enum Color {\n    Red = 0,\n    Green = 5,\n    Blue = 6\n}\n"
    );
}

// =============================================================================
// Namespaces
// =============================================================================

/// `export namespace NS { export const a = 1; const b = 2; }`, with `b`
/// optionally visible.
fn namespace_fixture(b_visible: bool) -> Fixture {
    let mut f = Fixture::module();
    let one = f.number("1");
    let a_name = f.ident("a");
    let a = f.arena.create_variable_declaration(a_name, NodeIndex::NONE, one);
    let a_statement = f
        .arena
        .create_variable_statement(ModifierFlags::EXPORT, NodeFlags::CONST, vec![a]);
    let two = f.number("2");
    let b_name = f.ident("b");
    let b = f.arena.create_variable_declaration(b_name, NodeIndex::NONE, two);
    let b_statement = f
        .arena
        .create_variable_statement(ModifierFlags::empty(), NodeFlags::CONST, vec![b]);
    f.resolver.mark_visible(a);
    if b_visible {
        f.resolver.mark_visible(b);
    }
    let block = f.arena.create_module_block(vec![a_statement, b_statement]);
    let name = f.ident("NS");
    let namespace = f
        .arena
        .create_module_declaration(ModifierFlags::EXPORT, name, block, NodeFlags::NAMESPACE);
    f.push(namespace);
    f
}

#[test]
fn namespace_members_drop_redundant_export() {
    let mut f = namespace_fixture(false);
    assert_eq!(
        f.emit().text,
        "export declare namespace NS {\n    const a: 1;\n}\n"
    );
}

#[test]
fn namespace_with_local_member_gets_scope_marker() {
    let mut f = namespace_fixture(true);
    assert_eq!(
        f.emit().text,
        "export declare namespace NS {\n    export const a: 1;\n    const b: 2;\n    export {};\n}\n"
    );
}

#[test]
fn ambient_module_is_always_visible_and_members_drop_export() {
    let mut f = Fixture::module();
    let number = f.keyword(TypeKeyword::Number);
    let member = f.property_signature("extra", number);
    let interface_name = f.ident("Options");
    let interface = f.arena.add(NodeData::InterfaceDeclaration(dtsz_ast::InterfaceData {
        modifiers: ModifierFlags::EXPORT,
        name: interface_name,
        type_parameters: None,
        heritage_clauses: None,
        members: NodeList::from(vec![member]),
    }));
    let block = f.arena.create_module_block(vec![interface]);
    let name = f.string("lib");
    let module = f
        .arena
        .create_module_declaration(ModifierFlags::AMBIENT, name, block, NodeFlags::empty());
    f.push(module);
    let void = f.keyword(TypeKeyword::Void);
    f.function(ModifierFlags::EXPORT, "setup", Vec::new(), void, true);

    assert_eq!(
        f.emit().text,
        "declare module \"lib\" {\n    interface Options {\n        extra: number;\n    }\n}\n\
         export declare function setup(): void;\n"
    );
}

// =============================================================================
// Imports and exports
// =============================================================================

#[test]
fn imports_keep_only_visible_bindings() {
    let mut f = Fixture::module();
    let default_name = f.ident("D");
    let a_name = f.ident("a");
    let a = f.arena.add(NodeData::ImportSpecifier {
        is_type_only: false,
        property_name: NodeIndex::NONE,
        name: a_name,
    });
    let b_property = f.ident("b");
    let c_name = f.ident("c");
    let c = f.arena.add(NodeData::ImportSpecifier {
        is_type_only: false,
        property_name: b_property,
        name: c_name,
    });
    let named = f.arena.add(NodeData::NamedImports {
        elements: NodeList::from(vec![a, c]),
    });
    let clause = f.arena.add(NodeData::ImportClause {
        is_type_only: false,
        name: default_name,
        named_bindings: named,
    });
    let specifier = f.string("./m");
    let import = f.arena.add(NodeData::ImportDeclaration(ImportData {
        modifiers: ModifierFlags::empty(),
        import_clause: clause,
        module_specifier: specifier,
    }));
    f.push(import);
    f.resolver.mark_visible(clause);
    f.resolver.mark_visible(a);

    assert_eq!(f.emit().text, "import D, { a } from \"./m\";\n");
}

#[test]
fn fully_elided_import_leaves_a_scope_marker() {
    let mut f = Fixture::module();
    let x_name = f.ident("x");
    let x = f.arena.add(NodeData::ImportSpecifier {
        is_type_only: false,
        property_name: NodeIndex::NONE,
        name: x_name,
    });
    let named = f.arena.add(NodeData::NamedImports {
        elements: NodeList::from(vec![x]),
    });
    let clause = f.arena.add(NodeData::ImportClause {
        is_type_only: false,
        name: NodeIndex::NONE,
        named_bindings: named,
    });
    let specifier = f.string("./n");
    let import = f.arena.add(NodeData::ImportDeclaration(ImportData {
        modifiers: ModifierFlags::empty(),
        import_clause: clause,
        module_specifier: specifier,
    }));
    f.push(import);

    assert_eq!(f.emit().text, "export {};\n");
}

#[test]
fn local_declaration_in_module_gets_scope_marker() {
    let mut f = Fixture::module();
    let interface = f.interface(ModifierFlags::empty(), "Local", Vec::new());
    f.resolver.mark_visible(interface);

    assert_eq!(f.emit().text, "interface Local {\n}\nexport {};\n");
}

#[test]
fn export_assignment_of_identifier_is_kept() {
    let mut f = Fixture::module();
    let target = f.ident("api");
    let assignment = f.arena.create_export_assignment(true, target);
    f.push(assignment);

    assert_eq!(f.emit().text, "export = api;\n");
}

#[test]
fn default_export_expression_is_hoisted_into_a_constant() {
    let mut f = Fixture::module();
    let a = f.ident("a");
    let one = f.number("1");
    let property = f.arena.create_property_assignment(a, one);
    let object = f.arena.create_object_literal(vec![property]);
    let assignment = f.arena.create_export_assignment(false, object);
    f.push(assignment);

    assert_eq!(
        f.emit().text,
        "declare const _default: { a: number; };\nexport default _default;\n"
    );
}

#[test]
fn default_export_name_avoids_collisions() {
    let mut f = Fixture::module();
    let number = f.keyword(TypeKeyword::Number);
    f.export_const("_default", number, NodeIndex::NONE);
    let seven = f.number("7");
    let assignment = f.arena.create_export_assignment(false, seven);
    f.push(assignment);

    assert_eq!(
        f.emit().text,
        "export declare const _default: number;\n\
         declare const _default_1: 7;\n\
         export default _default_1;\n"
    );
}

// =============================================================================
// File-level options
// =============================================================================

#[test]
fn internal_declarations_are_stripped() {
    let mut f = Fixture::module();
    f.options.strip_internal = true;
    let name = f.ident("Secret");
    let internal = f.arena.add_with_flags(
        NodeData::InterfaceDeclaration(dtsz_ast::InterfaceData {
            modifiers: ModifierFlags::EXPORT,
            name,
            type_parameters: None,
            heritage_clauses: None,
            members: NodeList::new(),
        }),
        NodeFlags::INTERNAL,
    );
    f.push(internal);
    let number = f.keyword(TypeKeyword::Number);
    f.export_const("visible", number, NodeIndex::NONE);

    assert_eq!(f.emit().text, "export declare const visible: number;\n");
}

#[test]
fn reference_directives_follow_no_resolve() {
    let mut f = Fixture::script();
    f.referenced_files.push("./globals.d.ts".to_string());
    let number = f.keyword(TypeKeyword::Number);
    f.variable(ModifierFlags::empty(), NodeFlags::empty(), "counter", number, NodeIndex::NONE);
    assert_eq!(
        f.emit().text,
        "/// <reference path=\"./globals.d.ts\" />\ndeclare var counter: number;\n"
    );

    let mut f = Fixture::script();
    f.options.no_resolve = true;
    f.referenced_files.push("./globals.d.ts".to_string());
    let number = f.keyword(TypeKeyword::Number);
    f.variable(ModifierFlags::empty(), NodeFlags::empty(), "counter", number, NodeIndex::NONE);
    assert_eq!(f.emit().text, "declare var counter: number;\n");
}

#[test]
fn non_source_file_is_rejected() {
    let mut f = Fixture::module();
    let not_a_file = f.ident("x");
    let mut transformer =
        dtsz_emitter::DeclarationTransformer::new(&mut f.arena, &f.resolver, &f.options);
    let error = transformer
        .transform_source_file(not_a_file)
        .expect_err("an identifier is not a source file");
    assert!(matches!(error, dtsz_emitter::EmitError::NotASourceFile { .. }));
}
