use super::*;
use crate::resolver::AliasToMakeVisible;
use dtsz_ast::{NodeFlags, TypeKeyword};

fn variable(arena: &mut NodeArena, name: &str) -> (NodeIndex, NodeIndex) {
    let id = arena.create_identifier(name);
    let declaration = arena.create_variable_declaration(id, NodeIndex::NONE, NodeIndex::NONE);
    let statement =
        arena.create_variable_statement(dtsz_ast::ModifierFlags::EXPORT, NodeFlags::CONST, vec![declaration]);
    (declaration, statement)
}

fn isolated() -> DeclarationEmitOptions {
    DeclarationEmitOptions {
        isolated_declarations: true,
        ..DeclarationEmitOptions::default()
    }
}

#[test]
fn accessible_aliases_are_painted_and_queued_once() {
    let mut arena = NodeArena::new();
    let (first, first_statement) = variable(&mut arena, "a");
    let (second, second_statement) = variable(&mut arena, "b");
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");

    let result = SymbolAccessibilityResult::with_aliases(vec![
        AliasToMakeVisible {
            declaration: first,
            statement: first_statement,
        },
        AliasToMakeVisible {
            declaration: second,
            statement: second_statement,
        },
    ]);
    assert!(!tracker.track_symbol(&arena, &result));
    assert!(!tracker.track_symbol(&arena, &result));

    assert!(tracker.is_painted(first));
    assert!(tracker.is_painted(second));
    assert_eq!(tracker.painted_count(), 2);
    assert_eq!(tracker.pop_late_marked(), Some(first_statement));
    assert_eq!(tracker.pop_late_marked(), Some(second_statement));
    assert_eq!(tracker.pop_late_marked(), None);
    assert!(tracker.diagnostics().is_empty());
}

#[test]
fn remove_late_marked_drops_a_queued_statement() {
    let mut arena = NodeArena::new();
    let (declaration, statement) = variable(&mut arena, "a");
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");
    tracker.track_symbol(
        &arena,
        &SymbolAccessibilityResult::with_aliases(vec![AliasToMakeVisible {
            declaration,
            statement,
        }]),
    );
    assert!(tracker.has_late_marked());
    tracker.remove_late_marked(statement);
    assert!(!tracker.has_late_marked());
    assert!(tracker.is_painted(declaration));
}

#[test]
fn reset_forgets_painted_declarations() {
    let mut arena = NodeArena::new();
    let (declaration, statement) = variable(&mut arena, "a");
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");
    let result = SymbolAccessibilityResult::with_aliases(vec![AliasToMakeVisible {
        declaration,
        statement,
    }]);
    tracker.track_symbol(&arena, &result);
    tracker.reset_late_painting();
    assert!(!tracker.is_painted(declaration));
    assert!(!tracker.has_late_marked());

    tracker.track_symbol(&arena, &result);
    assert_eq!(tracker.pop_late_marked(), Some(statement));
}

#[test]
fn inaccessible_name_reports_in_variable_context() {
    let mut arena = NodeArena::new();
    let (declaration, _) = variable(&mut arena, "value");
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");
    tracker.replace_context(DiagnosticContext::Variable(declaration));

    let reported = tracker.track_symbol(&arena, &SymbolAccessibilityResult::not_accessible("Hidden"));
    assert!(reported);

    let diagnostics = tracker.take_diagnostics();
    assert_eq!(diagnostics.len(), 1, "diagnostics: {diagnostics:?}");
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::EXPORTED_VARIABLE_HAS_OR_IS_USING_PRIVATE_NAME
    );
    assert_eq!(
        diagnostics[0].message_text,
        "Exported variable 'value' has or is using private name 'Hidden'."
    );
    assert_eq!(diagnostics[0].file_name, "a.ts");
    assert!(tracker.diagnostics().is_empty());
}

#[test]
fn context_and_error_nodes_are_restored_by_callers() {
    let mut arena = NodeArena::new();
    let (declaration, _) = variable(&mut arena, "value");
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");

    let previous = tracker.replace_context(DiagnosticContext::Property(declaration));
    assert_eq!(previous, DiagnosticContext::None);
    assert_eq!(tracker.context(), DiagnosticContext::Property(declaration));

    let name = get_declaration_name(&arena, declaration);
    let (old_name, old_fallback) = tracker.replace_error_nodes(name, declaration);
    assert!(old_name.is_none() && old_fallback.is_none());
    assert_eq!(tracker.replace_error_nodes(old_name, old_fallback), (name, declaration));
}

#[test]
fn inaccessible_this_names_the_declaration() {
    let mut arena = NodeArena::new();
    let (declaration, _) = variable(&mut arena, "self_ref");
    let name = get_declaration_name(&arena, declaration);
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");
    tracker.replace_error_nodes(name, declaration);

    tracker.report_inaccessible_this_error(&arena);
    let diagnostics = tracker.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node, name);
    assert_eq!(
        diagnostics[0].message_text,
        "The inferred type of 'self_ref' references an inaccessible 'this' type. A type annotation is necessary."
    );
}

#[test]
fn error_site_falls_back_to_default_for_export_assignment() {
    let mut arena = NodeArena::new();
    let expression = arena.create_identifier("x");
    let export = arena.create_export_assignment(false, expression);
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");
    tracker.replace_error_nodes(NodeIndex::NONE, export);

    tracker.report_cyclic_structure_error(&arena);
    let diagnostics = tracker.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].node, export);
    assert!(
        diagnostics[0].message_text.starts_with("The inferred type of 'default'"),
        "message: {}",
        diagnostics[0].message_text
    );
}

#[test]
fn inference_fallback_is_silent_without_isolated_declarations() {
    let mut arena = NodeArena::new();
    let (declaration, _) = variable(&mut arena, "x");
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");
    tracker.report_inference_fallback(&arena, declaration);
    tracker.report_implicit_undefined_required(&arena, declaration);
    assert!(tracker.diagnostics().is_empty());
}

#[test]
fn inference_fallback_picks_code_by_node_kind() {
    let mut arena = NodeArena::new();
    let (declaration, _) = variable(&mut arena, "x");
    let number = arena.create_keyword_type(TypeKeyword::Number);
    let array = arena.create_array_literal(vec![]);
    let mut tracker = EmitTracker::new(&isolated(), "a.ts");

    tracker.report_inference_fallback(&arena, declaration);
    tracker.report_inference_fallback(&arena, array);
    tracker.report_inference_fallback(&arena, number);

    let diagnostics = tracker.take_diagnostics();
    let codes: Vec<u32> = diagnostics.iter().map(|d| d.code).collect();
    assert_eq!(
        codes,
        vec![
            diagnostic_codes::VARIABLE_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
            diagnostic_codes::ONLY_CONST_ARRAYS_CAN_BE_INFERRED_WITH_ISOLATED_DECLARATIONS,
            diagnostic_codes::EXPRESSION_TYPE_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS,
        ]
    );
    assert_eq!(diagnostics[0].related.len(), 1);
    assert_eq!(
        diagnostics[0].related[0].code,
        diagnostic_codes::ADD_A_TYPE_ANNOTATION_TO_THE_VARIABLE
    );
    assert!(diagnostics[1].related.is_empty());
}

#[test]
fn nonlocal_augmentation_carries_the_augmented_declaration() {
    let arena = NodeArena::new();
    let mut tracker = EmitTracker::new(&DeclarationEmitOptions::default(), "a.ts");
    let primary = NodeLocation {
        file_name: "a.ts".to_string(),
        node: NodeIndex(1),
    };
    let augmentation = NodeLocation {
        file_name: "b.ts".to_string(),
        node: NodeIndex(2),
    };
    tracker.report_nonlocal_augmentation(&arena, &primary, &[augmentation]);

    let diagnostics = tracker.take_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].file_name, "b.ts");
    assert_eq!(
        diagnostics[0].code,
        diagnostic_codes::DECLARATION_AUGMENTS_DECLARATION_IN_ANOTHER_FILE_THIS_CANNOT_BE_SERIALIZED
    );
    assert_eq!(diagnostics[0].related[0].file_name, "a.ts");
}
