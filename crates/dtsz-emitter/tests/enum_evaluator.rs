use super::*;
use crate::resolver::SymbolAccessibilityResult;
use crate::tracker::SymbolTracker;
use dtsz_ast::{EnumData, ModifierFlags};

/// Resolves `Other.X` to 10 and nothing else.
struct ConstantResolver;

impl EmitResolver for ConstantResolver {
    fn is_declaration_visible(&self, _arena: &NodeArena, _declaration: NodeIndex) -> bool {
        true
    }

    fn is_entity_name_visible(
        &self,
        _arena: &NodeArena,
        _entity_name: NodeIndex,
        _enclosing: NodeIndex,
    ) -> SymbolAccessibilityResult {
        SymbolAccessibilityResult::accessible()
    }

    fn create_type_of_declaration(
        &self,
        _arena: &mut NodeArena,
        _declaration: NodeIndex,
        _enclosing: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        None
    }

    fn create_type_of_expression(
        &self,
        _arena: &mut NodeArena,
        _expression: NodeIndex,
        _enclosing: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        None
    }

    fn create_return_type_of_signature(
        &self,
        _arena: &mut NodeArena,
        _signature: NodeIndex,
        _enclosing: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        None
    }

    fn evaluate_entity_name(
        &self,
        arena: &NodeArena,
        expression: NodeIndex,
        _location: NodeIndex,
    ) -> EvaluatorResult {
        match arena.data(expression) {
            Some(NodeData::PropertyAccess { expression, name })
                if identifier_text(arena, *expression) == Some("Other")
                    && identifier_text(arena, *name) == Some("X") =>
            {
                EvaluatorResult::constant(ConstantValue::Number(10.0))
            }
            _ => EvaluatorResult::unknown(),
        }
    }
}

fn member(arena: &mut NodeArena, name: &str, initializer: NodeIndex) -> NodeIndex {
    let name = arena.create_identifier(name);
    arena.add(NodeData::EnumMember { name, initializer })
}

fn enum_declaration(arena: &mut NodeArena, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
    let name = arena.create_identifier(name);
    arena.add(NodeData::EnumDeclaration(EnumData {
        modifiers: ModifierFlags::empty(),
        name,
        members: NodeList::from(members),
    }))
}

fn fold(arena: &NodeArena, declaration: NodeIndex) -> Vec<EvaluatorResult> {
    let Some(NodeData::EnumDeclaration(data)) = arena.data(declaration) else {
        panic!("not an enum");
    };
    let members = data.members.clone();
    let resolver = ConstantResolver;
    let mut evaluator = EnumEvaluator::new(arena, &resolver, declaration);
    evaluator
        .evaluate_members(&members)
        .into_iter()
        .map(|(_, result)| result)
        .collect()
}

fn number(value: f64) -> Option<ConstantValue> {
    Some(ConstantValue::Number(value))
}

#[test]
fn members_without_initializers_count_up() {
    let mut arena = NodeArena::new();
    let a = member(&mut arena, "A", NodeIndex::NONE);
    let five = arena.create_numeric_literal("5");
    let b = member(&mut arena, "B", five);
    let c = member(&mut arena, "C", NodeIndex::NONE);
    let declaration = enum_declaration(&mut arena, "E", vec![a, b, c]);

    let values: Vec<_> = fold(&arena, declaration).into_iter().map(|r| r.value).collect();
    assert_eq!(values, vec![number(0.0), number(5.0), number(6.0)]);
}

#[test]
fn member_after_string_member_is_unknown() {
    let mut arena = NodeArena::new();
    let text = arena.create_string_literal("a");
    let a = member(&mut arena, "A", text);
    let b = member(&mut arena, "B", NodeIndex::NONE);
    let declaration = enum_declaration(&mut arena, "E", vec![a, b]);

    let results = fold(&arena, declaration);
    assert_eq!(results[0].value, Some(ConstantValue::String("a".to_string())));
    assert_eq!(results[1].value, None);
}

#[test]
fn arithmetic_and_own_member_references_fold() {
    let mut arena = NodeArena::new();
    let one = arena.create_numeric_literal("1");
    let four = arena.create_numeric_literal("4");
    let shift = arena.create_binary(one, BinaryOperator::LessThanLessThan, four);
    let a = member(&mut arena, "A", shift);

    let a_ref = arena.create_identifier("A");
    let two = arena.create_numeric_literal("2");
    let times = arena.create_binary(a_ref, BinaryOperator::Asterisk, two);
    let b = member(&mut arena, "B", times);

    let enum_ref = arena.create_identifier("E");
    let qualified = arena.create_property_access(enum_ref, "B");
    let negated = arena.create_prefix_unary(PrefixOperator::Minus, qualified);
    let c = member(&mut arena, "C", negated);

    let enum_ref = arena.create_identifier("E");
    let key = arena.create_string_literal("A");
    let element = arena.add(NodeData::ElementAccess {
        expression: enum_ref,
        argument: key,
    });
    let bits = arena.create_prefix_unary(PrefixOperator::Tilde, element);
    let d = member(&mut arena, "D", bits);

    let declaration = enum_declaration(&mut arena, "E", vec![a, b, c, d]);
    let results = fold(&arena, declaration);
    let values: Vec<_> = results.iter().map(|r| r.value.clone()).collect();
    assert_eq!(values, vec![number(16.0), number(32.0), number(-32.0), number(-17.0)]);
    assert!(results.iter().all(|r| !r.has_external_references));
}

#[test]
fn string_concatenation_and_templates_fold() {
    let mut arena = NodeArena::new();
    let left = arena.create_string_literal("v");
    let right = arena.create_numeric_literal("2");
    let concat = arena.create_binary(left, BinaryOperator::Plus, right);
    let a = member(&mut arena, "A", concat);

    let a_ref = arena.create_identifier("A");
    let template = arena.add(NodeData::TemplateExpression {
        head: "<".to_string(),
        spans: vec![dtsz_ast::TemplateSpan {
            expression: a_ref,
            literal: ">".to_string(),
        }],
    });
    let b = member(&mut arena, "B", template);

    let declaration = enum_declaration(&mut arena, "E", vec![a, b]);
    let values: Vec<_> = fold(&arena, declaration).into_iter().map(|r| r.value).collect();
    assert_eq!(
        values,
        vec![
            Some(ConstantValue::String("v2".to_string())),
            Some(ConstantValue::String("<v2>".to_string())),
        ]
    );
}

#[test]
fn outside_names_go_through_the_resolver() {
    let mut arena = NodeArena::new();
    let other = arena.create_identifier("Other");
    let access = arena.create_property_access(other, "X");
    let one = arena.create_numeric_literal("1");
    let sum = arena.create_binary(access, BinaryOperator::Plus, one);
    let a = member(&mut arena, "A", sum);
    let b = member(&mut arena, "B", NodeIndex::NONE);
    let missing = arena.create_identifier("missing");
    let c = member(&mut arena, "C", missing);

    let declaration = enum_declaration(&mut arena, "E", vec![a, b, c]);
    let results = fold(&arena, declaration);
    assert_eq!(results[0].value, number(11.0));
    assert!(results[0].has_external_references);
    assert_eq!(results[1].value, number(12.0));
    assert!(!results[1].has_external_references);
    assert_eq!(results[2].value, None);
    assert!(results[2].has_external_references);
}

#[test]
fn numeric_literal_forms() {
    assert_eq!(parse_numeric_literal("0x1F"), Some(31.0));
    assert_eq!(parse_numeric_literal("0o17"), Some(15.0));
    assert_eq!(parse_numeric_literal("0b101"), Some(5.0));
    assert_eq!(parse_numeric_literal("1_000"), Some(1000.0));
    assert_eq!(parse_numeric_literal("1e3"), Some(1000.0));
    assert_eq!(parse_numeric_literal(".5"), Some(0.5));
    assert_eq!(parse_numeric_literal("0xZZ"), None);
}
