//! Symbol tracking during type serialization.
//!
//! Whoever serializes a type (the synthesizer or the resolver) reports each
//! referenced symbol and each serialization problem to a [`SymbolTracker`].
//! [`EmitTracker`] is the tracker the declaration transformer uses: it turns
//! inaccessible names into diagnostics for the current diagnostic context and
//! paints the aliases that accessible names depend on.

use std::collections::VecDeque;

use dtsz_ast::node_utils::{declaration_name_text, get_declaration_name, node_text};
use dtsz_ast::{NodeArena, NodeData, NodeIndex};
use dtsz_common::DeclarationEmitOptions;
use dtsz_common::diagnostics::diagnostic_codes;
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use crate::diagnostics::{DeclarationDiagnostic, DiagnosticContext};
use crate::resolver::SymbolAccessibilityResult;

/// A node in a specific file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeLocation {
    pub file_name: String,
    pub node: NodeIndex,
}

/// Receives symbols and serialization problems while a type is serialized.
///
/// Every method but [`SymbolTracker::track_symbol`] has an empty default, so a
/// tracker that only collects accessibility results stays small.
pub trait SymbolTracker {
    /// Record a referenced symbol. Returns `true` when a diagnostic was reported.
    fn track_symbol(&mut self, arena: &NodeArena, result: &SymbolAccessibilityResult) -> bool;

    fn report_inaccessible_this_error(&mut self, _arena: &NodeArena) {}

    fn report_inaccessible_unique_symbol_error(&mut self, _arena: &NodeArena) {}

    fn report_private_in_base_of_class_expression(&mut self, _arena: &NodeArena, _property: &str) {}

    fn report_cyclic_structure_error(&mut self, _arena: &NodeArena) {}

    fn report_likely_unsafe_import_required_error(&mut self, _arena: &NodeArena, _specifier: &str) {}

    fn report_truncation_error(&mut self, _arena: &NodeArena) {}

    /// A declaration merges with one in another file, so its type cannot be
    /// written from this file alone.
    fn report_nonlocal_augmentation(
        &mut self,
        _arena: &NodeArena,
        _primary: &NodeLocation,
        _augmentations: &[NodeLocation],
    ) {
    }

    fn report_non_serializable_property(&mut self, _arena: &NodeArena, _property: &str) {}

    /// The type at `node` could not be built from syntax alone.
    fn report_inference_fallback(&mut self, _arena: &NodeArena, _node: NodeIndex) {}

    /// An optional parameter's type needs `| undefined` and its annotation
    /// cannot take it.
    fn report_implicit_undefined_required(&mut self, _arena: &NodeArena, _declaration: NodeIndex) {
    }
}

/// The tracker owned by a declaration transform.
pub struct EmitTracker {
    isolated_declarations: bool,
    file_name: String,
    context: DiagnosticContext,
    error_name_node: NodeIndex,
    error_fallback_node: NodeIndex,
    diagnostics: Vec<DeclarationDiagnostic>,
    painted: FxHashSet<NodeIndex>,
    late_marked: VecDeque<NodeIndex>,
}

impl EmitTracker {
    #[must_use]
    pub fn new(options: &DeclarationEmitOptions, file_name: impl Into<String>) -> Self {
        Self {
            isolated_declarations: options.isolated_declarations,
            file_name: file_name.into(),
            context: DiagnosticContext::None,
            error_name_node: NodeIndex::NONE,
            error_fallback_node: NodeIndex::NONE,
            diagnostics: Vec::new(),
            painted: FxHashSet::default(),
            late_marked: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn set_file_name(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
    }

    #[must_use]
    pub fn context(&self) -> DiagnosticContext {
        self.context
    }

    /// Install a diagnostic context, returning the previous one.
    pub fn replace_context(&mut self, context: DiagnosticContext) -> DiagnosticContext {
        std::mem::replace(&mut self.context, context)
    }

    /// Install the nodes named by "inferred type of ..." diagnostics,
    /// returning the previous pair.
    pub fn replace_error_nodes(
        &mut self,
        name: NodeIndex,
        fallback: NodeIndex,
    ) -> (NodeIndex, NodeIndex) {
        let previous = (self.error_name_node, self.error_fallback_node);
        self.error_name_node = name;
        self.error_fallback_node = fallback;
        previous
    }

    #[must_use]
    pub fn is_painted(&self, declaration: NodeIndex) -> bool {
        self.painted.contains(&declaration)
    }

    #[must_use]
    pub fn painted_count(&self) -> usize {
        self.painted.len()
    }

    /// Forget painted declarations and queued statements before the next file.
    pub fn reset_late_painting(&mut self) {
        self.painted.clear();
        self.late_marked.clear();
    }

    /// Next statement waiting for a late-painting pass.
    pub fn pop_late_marked(&mut self) -> Option<NodeIndex> {
        self.late_marked.pop_front()
    }

    /// Drop `statement` from the worklist because it is being transformed now.
    pub fn remove_late_marked(&mut self, statement: NodeIndex) {
        self.late_marked.retain(|queued| *queued != statement);
    }

    #[must_use]
    pub fn has_late_marked(&self) -> bool {
        !self.late_marked.is_empty()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &[DeclarationDiagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<DeclarationDiagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    pub fn push_diagnostic(&mut self, diagnostic: DeclarationDiagnostic) {
        debug!(code = diagnostic.code, message = %diagnostic.message_text, "declaration diagnostic");
        self.diagnostics.push(diagnostic);
    }

    /// Report `code` at `node` in the current file.
    pub fn report(&mut self, node: NodeIndex, code: u32, args: &[&str]) {
        let diagnostic = DeclarationDiagnostic::new(self.file_name.clone(), node, code, args);
        self.push_diagnostic(diagnostic);
    }

    /// Paint the aliases of an accessible result, or report an inaccessible one
    /// in the current diagnostic context. Returns `true` when a diagnostic was
    /// reported.
    pub fn handle_symbol_accessibility_error(
        &mut self,
        arena: &NodeArena,
        result: &SymbolAccessibilityResult,
    ) -> bool {
        if result.is_accessible() {
            for alias in &result.aliases_to_make_visible {
                if self.painted.insert(alias.declaration) && !self.late_marked.contains(&alias.statement)
                {
                    trace!(
                        declaration = alias.declaration.0,
                        statement = alias.statement.0,
                        "late painted"
                    );
                    self.late_marked.push_back(alias.statement);
                }
            }
            return false;
        }

        let selected = self.context.select(arena, result);
        let mut args: Vec<String> = Vec::with_capacity(3);
        if let Some(type_name) = selected.type_name {
            args.push(type_name);
        }
        if let Some(symbol) = &result.error_symbol_name {
            args.push(symbol.clone());
        }
        if let Some(module) = &result.error_module_name {
            args.push(module.clone());
        }
        let args: Vec<&str> = args.iter().map(String::as_str).collect();
        self.report(selected.error_node, selected.code, &args);
        true
    }

    /// Node and name used by the "inferred type of '{0}'" family.
    fn error_site(&self, arena: &NodeArena) -> Option<(NodeIndex, String)> {
        if self.error_name_node.is_some() {
            let text = node_text(arena, self.error_name_node)
                .map_or_else(|| "(Missing)".to_string(), str::to_string);
            return Some((self.error_name_node, text));
        }
        if self.error_fallback_node.is_none() {
            return None;
        }
        let name = get_declaration_name(arena, self.error_fallback_node);
        let text = match arena.data(self.error_fallback_node) {
            Some(NodeData::ExportAssignment { .. }) => "default".to_string(),
            Some(NodeData::ExpressionWithTypeArguments { .. }) => "extends clause".to_string(),
            _ if name.is_some() => declaration_name_text(arena, self.error_fallback_node),
            _ => "(Missing)".to_string(),
        };
        Some((self.error_fallback_node, text))
    }

    fn report_at_error_site(&mut self, arena: &NodeArena, code: u32, extra: Option<&str>) {
        let Some((node, name)) = self.error_site(arena) else {
            return;
        };
        match extra {
            Some(extra) => self.report(node, code, &[name.as_str(), extra]),
            None => self.report(node, code, &[name.as_str()]),
        }
    }

    fn isolated_fallback_diagnostic(&self, arena: &NodeArena, node: NodeIndex) -> DeclarationDiagnostic {
        let file = self.file_name.clone();
        let name = || declaration_name_text(arena, node);
        let with_related = |code: u32, related_code: u32, related_args: &[&str]| {
            DeclarationDiagnostic::new(file.clone(), node, code, &[]).with_related(
                DeclarationDiagnostic::new(file.clone(), node, related_code, related_args),
            )
        };
        let plain = |code: u32| DeclarationDiagnostic::new(file.clone(), node, code, &[]);
        match arena.data(node) {
            Some(NodeData::VariableDeclaration { .. }) => with_related(
                diagnostic_codes::VARIABLE_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
                diagnostic_codes::ADD_A_TYPE_ANNOTATION_TO_THE_VARIABLE,
                &[name().as_str()],
            ),
            Some(NodeData::Parameter(_)) => with_related(
                diagnostic_codes::PARAMETER_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
                diagnostic_codes::ADD_A_TYPE_ANNOTATION_TO_THE_PARAMETER,
                &[name().as_str()],
            ),
            Some(
                NodeData::PropertyDeclaration(_)
                | NodeData::PropertySignature(_)
                | NodeData::PropertyAssignment { .. },
            ) => with_related(
                diagnostic_codes::PROPERTY_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
                diagnostic_codes::ADD_A_TYPE_ANNOTATION_TO_THE_PROPERTY,
                &[name().as_str()],
            ),
            Some(NodeData::FunctionDeclaration(_)) => with_related(
                diagnostic_codes::FUNCTION_MUST_HAVE_AN_EXPLICIT_RETURN_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
                diagnostic_codes::ADD_A_RETURN_TYPE_TO_THE_FUNCTION_DECLARATION,
                &[],
            ),
            Some(NodeData::FunctionExpression(_) | NodeData::ArrowFunction(_)) => plain(
                diagnostic_codes::FUNCTION_MUST_HAVE_AN_EXPLICIT_RETURN_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
            ),
            Some(NodeData::MethodDeclaration(_) | NodeData::MethodSignature(_)) => with_related(
                diagnostic_codes::METHOD_MUST_HAVE_AN_EXPLICIT_RETURN_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
                diagnostic_codes::ADD_A_RETURN_TYPE_TO_THE_METHOD,
                &[],
            ),
            Some(NodeData::GetAccessor(_) | NodeData::SetAccessor(_)) => plain(
                diagnostic_codes::AT_LEAST_ONE_ACCESSOR_MUST_HAVE_AN_EXPLICIT_TYPE_ANNOTATION_WITH_ISOLATED_DECLARATIONS,
            ),
            Some(NodeData::ExportAssignment { .. }) => {
                plain(diagnostic_codes::DEFAULT_EXPORTS_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS)
            }
            Some(NodeData::SpreadAssignment { .. }) => plain(
                diagnostic_codes::OBJECTS_THAT_CONTAIN_SPREAD_ASSIGNMENTS_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS,
            ),
            Some(NodeData::ShorthandPropertyAssignment { .. }) => plain(
                diagnostic_codes::OBJECTS_THAT_CONTAIN_SHORTHAND_PROPERTIES_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS,
            ),
            Some(NodeData::ComputedPropertyName { .. }) => plain(
                diagnostic_codes::COMPUTED_PROPERTIES_MUST_BE_NUMBER_OR_STRING_LITERALS_VARIABLES_OR_DOTTED_EXPRESSIONS,
            ),
            Some(NodeData::ArrayLiteral { .. }) => {
                plain(diagnostic_codes::ONLY_CONST_ARRAYS_CAN_BE_INFERRED_WITH_ISOLATED_DECLARATIONS)
            }
            Some(NodeData::SpreadElement { .. }) => {
                plain(diagnostic_codes::ARRAYS_WITH_SPREAD_ELEMENTS_CANT_INFERRED_WITH_ISOLATED_DECLARATIONS)
            }
            Some(NodeData::ClassExpression(_)) => plain(
                diagnostic_codes::INFERENCE_FROM_CLASS_EXPRESSIONS_IS_NOT_SUPPORTED_WITH_ISOLATED_DECLARATIONS,
            ),
            Some(NodeData::BindingElement { .. }) => plain(
                diagnostic_codes::BINDING_ELEMENTS_CANT_BE_EXPORTED_DIRECTLY_WITH_ISOLATED_DECLARATIONS,
            ),
            Some(NodeData::ExpressionWithTypeArguments { .. }) => plain(
                diagnostic_codes::EXTENDS_CLAUSE_CANT_CONTAIN_AN_EXPRESSION_WITH_ISOLATED_DECLARATIONS,
            ),
            Some(NodeData::EnumMember { .. }) => plain(
                diagnostic_codes::ENUM_MEMBER_INITIALIZERS_MUST_BE_COMPUTABLE_WITHOUT_REFERENCES_TO_EXTERNAL_SYMBOLS,
            ),
            Some(NodeData::Binary { .. }) => plain(
                diagnostic_codes::ASSIGNING_PROPERTIES_TO_FUNCTIONS_WITHOUT_DECLARING_THEM_IS_NOT_SUPPORTED,
            ),
            _ => plain(diagnostic_codes::EXPRESSION_TYPE_CANT_BE_INFERRED_WITH_ISOLATED_DECLARATIONS),
        }
    }
}

impl SymbolTracker for EmitTracker {
    fn track_symbol(&mut self, arena: &NodeArena, result: &SymbolAccessibilityResult) -> bool {
        self.handle_symbol_accessibility_error(arena, result)
    }

    fn report_inaccessible_this_error(&mut self, arena: &NodeArena) {
        self.report_at_error_site(
            arena,
            diagnostic_codes::THE_INFERRED_TYPE_OF_REFERENCES_AN_INACCESSIBLE_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY,
            Some("this"),
        );
    }

    fn report_inaccessible_unique_symbol_error(&mut self, arena: &NodeArena) {
        self.report_at_error_site(
            arena,
            diagnostic_codes::THE_INFERRED_TYPE_OF_REFERENCES_AN_INACCESSIBLE_TYPE_A_TYPE_ANNOTATION_IS_NECESSARY,
            Some("unique symbol"),
        );
    }

    fn report_private_in_base_of_class_expression(&mut self, arena: &NodeArena, property: &str) {
        let Some((node, _)) = self.error_site(arena) else {
            return;
        };
        self.report(
            node,
            diagnostic_codes::PROPERTY_OF_EXPORTED_ANONYMOUS_CLASS_TYPE_MAY_NOT_BE_PRIVATE_OR_PROTECTED,
            &[property],
        );
    }

    fn report_cyclic_structure_error(&mut self, arena: &NodeArena) {
        self.report_at_error_site(
            arena,
            diagnostic_codes::THE_INFERRED_TYPE_OF_REFERENCES_A_TYPE_WITH_A_CYCLIC_STRUCTURE,
            None,
        );
    }

    fn report_likely_unsafe_import_required_error(&mut self, arena: &NodeArena, specifier: &str) {
        self.report_at_error_site(
            arena,
            diagnostic_codes::THE_INFERRED_TYPE_OF_CANNOT_BE_NAMED_WITHOUT_A_REFERENCE_TO_THIS_IS_LIKELY_NOT_PORTABLE,
            Some(specifier),
        );
    }

    fn report_truncation_error(&mut self, arena: &NodeArena) {
        let Some((node, _)) = self.error_site(arena) else {
            return;
        };
        self.report(
            node,
            diagnostic_codes::THE_INFERRED_TYPE_OF_THIS_NODE_EXCEEDS_THE_MAXIMUM_LENGTH,
            &[],
        );
    }

    fn report_nonlocal_augmentation(
        &mut self,
        _arena: &NodeArena,
        primary: &NodeLocation,
        augmentations: &[NodeLocation],
    ) {
        for augmentation in augmentations {
            let diagnostic = DeclarationDiagnostic::new(
                augmentation.file_name.clone(),
                augmentation.node,
                diagnostic_codes::DECLARATION_AUGMENTS_DECLARATION_IN_ANOTHER_FILE_THIS_CANNOT_BE_SERIALIZED,
                &[],
            )
            .with_related(DeclarationDiagnostic::new(
                primary.file_name.clone(),
                primary.node,
                diagnostic_codes::THIS_IS_THE_DECLARATION_BEING_AUGMENTED,
                &[],
            ));
            self.push_diagnostic(diagnostic);
        }
    }

    fn report_non_serializable_property(&mut self, arena: &NodeArena, property: &str) {
        let Some((node, _)) = self.error_site(arena) else {
            return;
        };
        self.report(
            node,
            diagnostic_codes::THE_TYPE_OF_THIS_NODE_CANNOT_BE_SERIALIZED_BECAUSE_ITS_PROPERTY_CANNOT_BE_SERIALIZED,
            &[property],
        );
    }

    fn report_inference_fallback(&mut self, arena: &NodeArena, node: NodeIndex) {
        if !self.isolated_declarations {
            return;
        }
        let diagnostic = self.isolated_fallback_diagnostic(arena, node);
        self.push_diagnostic(diagnostic);
    }

    fn report_implicit_undefined_required(&mut self, _arena: &NodeArena, declaration: NodeIndex) {
        if !self.isolated_declarations {
            return;
        }
        self.report(
            declaration,
            diagnostic_codes::DECLARATION_EMIT_FOR_THIS_PARAMETER_REQUIRES_IMPLICITLY_ADDING_UNDEFINED,
            &[],
        );
    }
}

#[cfg(test)]
#[path = "../tests/tracker.rs"]
mod tests;
