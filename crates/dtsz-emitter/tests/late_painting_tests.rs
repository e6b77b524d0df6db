//! Declarations that become visible because an emitted type refers to them.

mod support;

use dtsz_ast::{ImportData, ModifierFlags, NodeData, NodeFlags, NodeIndex, NodeList, TypeKeyword};
use dtsz_ast::print_node;
use dtsz_emitter::{DeclarationTransformer, EmitError};
use support::Fixture;

/// `interface <name> { a: number; }` without `export`.
fn local_interface(f: &mut Fixture, name: &str) -> NodeIndex {
    let number = f.keyword(TypeKeyword::Number);
    let a = f.property_signature("a", number);
    f.interface(ModifierFlags::empty(), name, vec![a])
}

#[test]
fn declaration_before_its_reference_is_painted_at_the_end_of_the_list() {
    let mut f = Fixture::module();
    let hidden = local_interface(&mut f, "Hidden");
    f.resolver.add_alias("Hidden", hidden, hidden);
    let reference = f.type_ref("Hidden");
    f.export_const("x", reference, NodeIndex::NONE);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "interface Hidden {\n    a: number;\n}\nexport declare const x: Hidden;\nexport {};\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

#[test]
fn reused_transformer_paints_each_file_from_scratch() {
    let mut f = Fixture::module();
    let hidden = local_interface(&mut f, "Hidden");
    f.resolver.add_alias("Hidden", hidden, hidden);
    let reference = f.type_ref("Hidden");
    f.export_const("x", reference, NodeIndex::NONE);
    let file = f.finish_file("a.ts", true);

    let mut transformer = DeclarationTransformer::new(&mut f.arena, &f.resolver, &f.options);
    let first = transformer.transform_source_file(file).expect("first emit");
    let first_text = print_node(transformer.arena(), first.source_file);
    let second = transformer.transform_source_file(file).expect("second emit");
    let second_text = print_node(transformer.arena(), second.source_file);

    assert_eq!(
        first_text,
        "interface Hidden {\n    a: number;\n}\nexport declare const x: Hidden;\nexport {};\n"
    );
    assert_eq!(second_text, first_text);
}

#[test]
fn declaration_after_its_reference_is_emitted_on_first_visit() {
    let mut f = Fixture::module();
    let reference = f.type_ref("Hidden");
    f.export_const("x", reference, NodeIndex::NONE);
    let hidden = local_interface(&mut f, "Hidden");
    f.resolver.add_alias("Hidden", hidden, hidden);

    assert_eq!(
        f.emit().text,
        "export declare const x: Hidden;\ninterface Hidden {\n    a: number;\n}\nexport {};\n"
    );
}

#[test]
fn painted_variable_is_declared() {
    let mut f = Fixture::module();
    let one = f.number("1");
    let (statement, declaration) =
        f.variable(ModifierFlags::empty(), NodeFlags::CONST, "helper", NodeIndex::NONE, one);
    f.resolver.add_alias("helper", declaration, statement);
    let helper = f.ident("helper");
    let query = f.arena.create_type_query(helper);
    f.export_const("x", query, NodeIndex::NONE);

    assert_eq!(
        f.emit().text,
        "declare const helper: 1;\nexport declare const x: typeof helper;\nexport {};\n"
    );
}

#[test]
fn painted_import_specifier_is_restored() {
    let mut f = Fixture::module();
    let foo_name = f.ident("Foo");
    let specifier = f.arena.add(NodeData::ImportSpecifier {
        is_type_only: false,
        property_name: NodeIndex::NONE,
        name: foo_name,
    });
    let bar_name = f.ident("Bar");
    let unused = f.arena.add(NodeData::ImportSpecifier {
        is_type_only: false,
        property_name: NodeIndex::NONE,
        name: bar_name,
    });
    let named = f.arena.add(NodeData::NamedImports {
        elements: NodeList::from(vec![specifier, unused]),
    });
    let clause = f.arena.add(NodeData::ImportClause {
        is_type_only: false,
        name: NodeIndex::NONE,
        named_bindings: named,
    });
    let module_specifier = f.string("./foo");
    let import = f.arena.add(NodeData::ImportDeclaration(ImportData {
        modifiers: ModifierFlags::empty(),
        import_clause: clause,
        module_specifier,
    }));
    f.push(import);
    f.resolver.add_alias("Foo", specifier, import);
    let reference = f.type_ref("Foo");
    f.export_const("y", reference, NodeIndex::NONE);

    assert_eq!(
        f.emit().text,
        "import { Foo } from \"./foo\";\nexport declare const y: Foo;\n"
    );
}

#[test]
fn painting_inside_a_namespace_keeps_the_namespace_scope() {
    let mut f = Fixture::module();
    let inner_name = f.ident("Inner");
    let inner = f.arena.add(NodeData::InterfaceDeclaration(dtsz_ast::InterfaceData {
        modifiers: ModifierFlags::empty(),
        name: inner_name,
        type_parameters: None,
        heritage_clauses: None,
        members: NodeList::new(),
    }));
    f.resolver.add_alias("Inner", inner, inner);

    let reference = f.type_ref("Inner");
    let v_name = f.ident("v");
    let v = f.arena.create_variable_declaration(v_name, reference, NodeIndex::NONE);
    let v_statement = f
        .arena
        .create_variable_statement(ModifierFlags::EXPORT, NodeFlags::CONST, vec![v]);
    f.resolver.mark_visible(v);

    let block = f.arena.create_module_block(vec![inner, v_statement]);
    let name = f.ident("NS");
    let namespace = f
        .arena
        .create_module_declaration(ModifierFlags::EXPORT, name, block, NodeFlags::NAMESPACE);
    f.push(namespace);

    assert_eq!(
        f.emit().text,
        "export declare namespace NS {\n    interface Inner {\n    }\n    export const v: Inner;\n    export {};\n}\n"
    );
}

#[test]
fn painting_a_statement_that_carries_no_declaration_fails() {
    let mut f = Fixture::module();
    let callee = f.ident("sideEffect");
    let call = f.arena.create_call(callee, Vec::new());
    let statement = f.arena.add(NodeData::ExpressionStatement { expression: call });
    f.push(statement);
    f.resolver.add_alias("Odd", statement, statement);
    let reference = f.type_ref("Odd");
    f.export_const("z", reference, NodeIndex::NONE);

    let error = f.try_emit().expect_err("expression statements cannot be painted");
    assert!(
        matches!(error, EmitError::NotLatePaintable { node, .. } if node == statement),
        "unexpected error: {error}"
    );
}
