//! Class declarations: members, accessors, parameter properties and heritage.

mod support;

use dtsz_ast::{
    AccessorData, FunctionData, HeritageToken, ModifierFlags, NodeData, NodeIndex, NodeList,
    TypeKeyword,
};
use support::Fixture;

fn method(
    f: &mut Fixture,
    modifiers: ModifierFlags,
    name: &str,
    parameters: Vec<NodeIndex>,
    return_type: NodeIndex,
    has_body: bool,
) -> NodeIndex {
    let name = f.ident(name);
    let body = if has_body { f.empty_body() } else { NodeIndex::NONE };
    f.arena.add(NodeData::MethodDeclaration(FunctionData {
        modifiers,
        asterisk: false,
        name,
        question: false,
        type_parameters: None,
        parameters: NodeList::from(parameters),
        return_type,
        body,
    }))
}

fn property(f: &mut Fixture, modifiers: ModifierFlags, name: NodeIndex, type_node: NodeIndex, initializer: NodeIndex) -> NodeIndex {
    f.arena
        .create_property_declaration(modifiers, name, false, type_node, initializer)
}

fn getter(f: &mut Fixture, name: &str, return_type: NodeIndex) -> NodeIndex {
    let name = f.ident(name);
    let body = f.empty_body();
    f.arena.add(NodeData::GetAccessor(AccessorData {
        modifiers: ModifierFlags::empty(),
        name,
        parameters: NodeList::new(),
        return_type,
        body,
    }))
}

fn setter(f: &mut Fixture, name: &str, value_type: NodeIndex) -> NodeIndex {
    let name = f.ident(name);
    let value = f.param("v", value_type, NodeIndex::NONE);
    let body = f.empty_body();
    f.arena.add(NodeData::SetAccessor(AccessorData {
        modifiers: ModifierFlags::empty(),
        name,
        parameters: NodeList::from(vec![value]),
        return_type: NodeIndex::NONE,
        body,
    }))
}

fn constructor(f: &mut Fixture, parameters: Vec<NodeIndex>) -> NodeIndex {
    let body = f.empty_body();
    f.arena.add(NodeData::Constructor(FunctionData {
        modifiers: ModifierFlags::empty(),
        asterisk: false,
        name: NodeIndex::NONE,
        question: false,
        type_parameters: None,
        parameters: NodeList::from(parameters),
        return_type: NodeIndex::NONE,
        body,
    }))
}

fn extends(f: &mut Fixture, expression: NodeIndex) -> NodeIndex {
    let heritage_type = f.arena.create_expression_with_type_arguments(expression, None);
    f.arena
        .create_heritage_clause(HeritageToken::Extends, vec![heritage_type])
}

#[test]
fn class_members_are_rewritten_in_declaration_order() {
    let mut f = Fixture::module();

    let secret_name = f.arena.create_private_identifier("#secret");
    let one = f.number("1");
    let secret = property(&mut f, ModifierFlags::empty(), secret_name, NodeIndex::NONE, one);

    let id_name = f.ident("id");
    let number = f.keyword(TypeKeyword::Number);
    let id = f.arena.create_parameter(
        ModifierFlags::PRIVATE | ModifierFlags::READONLY,
        id_name,
        false,
        number,
        NodeIndex::NONE,
    );
    let label_name = f.ident("label");
    let string = f.keyword(TypeKeyword::String);
    let label = f
        .arena
        .create_parameter(ModifierFlags::PUBLIC, label_name, false, string, NodeIndex::NONE);
    let ctor = constructor(&mut f, vec![id, label]);

    let helper = method(&mut f, ModifierFlags::PRIVATE, "helper", Vec::new(), NodeIndex::NONE, true);

    let name_name = f.ident("name");
    let string = f.keyword(TypeKeyword::String);
    let w = f.string("w");
    let name = property(&mut f, ModifierFlags::PUBLIC, name_name, string, w);

    let count_name = f.ident("count");
    let zero = f.number("0");
    let count = property(&mut f, ModifierFlags::STATIC, count_name, NodeIndex::NONE, zero);

    let kind_name = f.ident("kind");
    let w = f.string("w");
    let kind = property(
        &mut f,
        ModifierFlags::PROTECTED | ModifierFlags::READONLY,
        kind_name,
        NodeIndex::NONE,
        w,
    );

    let number = f.keyword(TypeKeyword::Number);
    let size_get = getter(&mut f, "size", number);
    let size_set = setter(&mut f, "size", NodeIndex::NONE);

    let void = f.keyword(TypeKeyword::Void);
    let run = method(
        &mut f,
        ModifierFlags::ASYNC | ModifierFlags::OVERRIDE,
        "run",
        Vec::new(),
        void,
        true,
    );

    f.class(
        ModifierFlags::EXPORT,
        "Widget",
        None,
        vec![secret, ctor, helper, name, count, kind, size_get, size_set, run],
    );

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare class Widget {\n\
         \x20   #private;\n\
         \x20   private readonly id;\n\
         \x20   label: string;\n\
         \x20   constructor(id: number, label: string);\n\
         \x20   private helper;\n\
         \x20   name: string;\n\
         \x20   static count: number;\n\
         \x20   protected readonly kind: \"w\";\n\
         \x20   size: number;\n\
         \x20   run(): void;\n\
         }\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

#[test]
fn destructured_parameter_property_declares_each_binding() {
    let mut f = Fixture::module();
    let mut elements = Vec::new();
    for (name, type_text) in [("x", "number"), ("y", "string")] {
        let name = f.ident(name);
        let element = f.arena.add(NodeData::BindingElement {
            dot_dot_dot: false,
            property_name: NodeIndex::NONE,
            name,
            initializer: NodeIndex::NONE,
        });
        f.resolver.set_type(element, type_text);
        elements.push(element);
    }
    let pattern = f.arena.add(NodeData::ObjectBindingPattern {
        elements: NodeList::from(elements),
    });
    let point = f.type_ref("Point");
    let parameter = f
        .arena
        .create_parameter(ModifierFlags::READONLY, pattern, false, point, NodeIndex::NONE);
    let ctor = constructor(&mut f, vec![parameter]);
    f.class(ModifierFlags::EXPORT, "Origin", None, vec![ctor]);

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "export declare class Origin {\n\
         \x20   readonly x: number;\n\
         \x20   readonly y: string;\n\
         \x20   constructor({ x, y }: Point);\n\
         }\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

#[test]
fn accessors_annotated_on_both_sides_stay_accessors() {
    let mut f = Fixture::module();
    let string = f.keyword(TypeKeyword::String);
    let get = getter(&mut f, "value", string);
    let string = f.keyword(TypeKeyword::String);
    let set = setter(&mut f, "value", string);
    f.class(ModifierFlags::EXPORT, "Box", None, vec![get, set]);

    assert_eq!(
        f.emit().text,
        "export declare class Box {\n    get value(): string;\n    set value(v: string);\n}\n"
    );
}

#[test]
fn lone_setter_takes_the_serialized_type() {
    let mut f = Fixture::module();
    let set = setter(&mut f, "only", NodeIndex::NONE);
    f.resolver.set_type(set, "string");
    f.class(ModifierFlags::EXPORT, "Sink", None, vec![set]);

    assert_eq!(
        f.emit().text,
        "export declare class Sink {\n    set only(v: string);\n}\n"
    );
}

#[test]
fn private_method_overloads_collapse_to_one_property() {
    let mut f = Fixture::module();
    let mut members = Vec::new();
    for keyword in [TypeKeyword::String, TypeKeyword::Number] {
        let parameter_type = f.keyword(keyword);
        let a = f.param("a", parameter_type, NodeIndex::NONE);
        let void = f.keyword(TypeKeyword::Void);
        members.push(method(&mut f, ModifierFlags::PRIVATE, "m", vec![a], void, false));
    }
    let any = f.keyword(TypeKeyword::Any);
    let a = f.param("a", any, NodeIndex::NONE);
    let implementation = method(&mut f, ModifierFlags::PRIVATE, "m", vec![a], NodeIndex::NONE, true);
    f.resolver.mark_overload_implementation(implementation);
    members.push(implementation);
    f.class(ModifierFlags::EXPORT, "Overloaded", None, members);

    assert_eq!(
        f.emit().text,
        "export declare class Overloaded {\n    private m;\n}\n"
    );
}

#[test]
fn late_bound_members_and_index_signatures() {
    let mut f = Fixture::module();
    let key = f.ident("key");
    let bound_name = f.arena.create_computed_property_name(key);
    let number = f.keyword(TypeKeyword::Number);
    let bound = property(&mut f, ModifierFlags::empty(), bound_name, number, NodeIndex::NONE);
    f.resolver.mark_late_bound(bound);

    let other = f.ident("other");
    let dropped_name = f.arena.create_computed_property_name(other);
    let number = f.keyword(TypeKeyword::Number);
    let dropped = property(&mut f, ModifierFlags::empty(), dropped_name, number, NodeIndex::NONE);

    let class = f.class(ModifierFlags::EXPORT, "Table", None, vec![bound, dropped]);
    f.resolver.set_late_bound_index_signature(class, "boolean");

    assert_eq!(
        f.emit().text,
        "export declare class Table {\n    [x: string]: boolean;\n    [key]: number;\n}\n"
    );
}

#[test]
fn expression_base_class_is_hoisted() {
    let mut f = Fixture::module();
    let mixin = f.ident("mixin");
    let base = f.ident("Base");
    let call = f.arena.create_call(mixin, vec![base]);
    f.resolver.set_type(call, "BaseConstructor");
    let clause = extends(&mut f, call);
    f.class(ModifierFlags::EXPORT, "Derived", Some(vec![clause]), Vec::new());

    let emitted = f.emit();
    assert_eq!(
        emitted.text,
        "declare const Derived_base: BaseConstructor;\n\
         export declare class Derived extends Derived_base {\n\
         }\n\
         export {};\n"
    );
    assert!(emitted.diagnostics.is_empty());
}

#[test]
fn extends_null_and_entity_bases_are_kept() {
    let mut f = Fixture::script();
    let null = f.arena.create_null_literal();
    let clause = extends(&mut f, null);
    f.class(ModifierFlags::empty(), "Bare", Some(vec![clause]), Vec::new());

    let base = f.arena.create_entity_expression("ns.Base");
    let clause = extends(&mut f, base);
    let contract = f.ident("Contract");
    let implemented = f.arena.create_expression_with_type_arguments(contract, None);
    let call_target = f.ident("make");
    let call = f.arena.create_call(call_target, Vec::new());
    let not_an_entity = f.arena.create_expression_with_type_arguments(call, None);
    let implements = f.arena.create_heritage_clause(
        HeritageToken::Implements,
        vec![implemented, not_an_entity],
    );
    f.class(ModifierFlags::empty(), "Impl", Some(vec![clause, implements]), Vec::new());

    assert_eq!(
        f.emit().text,
        "declare class Bare extends null {\n}\n\
         declare class Impl extends ns.Base implements Contract {\n}\n"
    );
}

#[test]
fn abstract_class_keeps_abstract_members() {
    let mut f = Fixture::module();
    let string = f.keyword(TypeKeyword::String);
    let describe = method(
        &mut f,
        ModifierFlags::ABSTRACT | ModifierFlags::PUBLIC,
        "describe",
        Vec::new(),
        string,
        false,
    );
    f.class(
        ModifierFlags::EXPORT | ModifierFlags::ABSTRACT,
        "Shape",
        None,
        vec![describe],
    );

    assert_eq!(
        f.emit().text,
        "export declare abstract class Shape {\n    abstract describe(): string;\n}\n"
    );
}
