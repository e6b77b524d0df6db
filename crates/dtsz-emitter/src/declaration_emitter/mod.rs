//! Declaration transformer.
//!
//! Rewrites a checked source file into its declaration-only form. Statements
//! are visited once in source order. A statement whose declaration is not yet
//! known to be visible is recorded as elided; if a type written later
//! references one of its aliases, the tracker paints that alias visible and
//! queues the statement for another pass. Once the queue drains, every
//! recorded statement is replaced by its final form.
//!
//! - `late_statements` - statement lists, the late-painting worklist, scope markers
//! - `statements` - top-level declaration forms
//! - `signatures` - parameters, type parameters, heritage clauses, type members
//! - `classes` - class bodies
//! - `expando` - namespaces for properties assigned onto functions
//! - `bundle` - single-file bundles of external modules

pub mod bundle;
mod classes;
mod expando;
mod late_statements;
mod signatures;
mod statements;

use dtsz_ast::node_utils::{get_declaration_name, modifiers_of, node_text};
use dtsz_ast::{
    ModifierFlags, NodeArena, NodeData, NodeFlags, NodeIndex, SourceFileData, TypeKeyword,
};
use dtsz_common::DeclarationEmitOptions;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::diagnostics::{DeclarationDiagnostic, DiagnosticContext};
use crate::error::EmitError;
use crate::resolver::{AllAccessorDeclarations, EmitResolver};
use crate::synthesizer::{TypeSynthesis, TypeSynthesizer};
use crate::tracker::{EmitTracker, SymbolTracker};
use bundle::BundleContext;

/// Result of transforming one source file.
#[derive(Clone, Debug)]
pub struct DeclarationOutput {
    /// The declaration-only source file.
    pub source_file: NodeIndex,
    pub diagnostics: Vec<DeclarationDiagnostic>,
}

/// Result of transforming a bundle.
#[derive(Clone, Debug)]
pub struct BundleOutput {
    /// A synthesized declaration file holding every file of the bundle.
    pub bundle: NodeIndex,
    pub diagnostics: Vec<DeclarationDiagnostic>,
}

/// Which type a declaration position asks for.
#[derive(Clone, Copy, Debug)]
pub(crate) enum TypeRequest {
    /// Type of a variable, parameter or property.
    Declaration { preserve_literals: bool },
    /// Return type of a function-like declaration.
    ReturnType,
    /// Shared type of a getter/setter pair.
    Accessor(AllAccessorDeclarations),
}

/// Final form of a late-painted statement: elided, one statement, or an
/// expansion.
pub(crate) type StatementReplacement = SmallVec<[NodeIndex; 2]>;

/// Where a statement was first visited, so a later pass restores the same scope.
#[derive(Clone, Copy, Debug)]
struct StatementOwner {
    container: NodeIndex,
    needs_declare: bool,
}

/// Transforms source files (or a bundle of them) into declaration files.
///
/// One transformer can process any number of files in sequence; all
/// per-file state is reset when a file begins.
pub struct DeclarationTransformer<'a> {
    arena: &'a mut NodeArena,
    resolver: &'a dyn EmitResolver,
    options: &'a DeclarationEmitOptions,
    tracker: EmitTracker,

    current_file: NodeIndex,
    current_file_is_external_module: bool,
    /// Source file or module declaration whose statements are being visited.
    container: NodeIndex,
    enclosing: NodeIndex,
    /// Top-level value declarations of this container get `declare`.
    needs_declare: bool,
    is_bundled_emit: bool,
    bundle: Option<BundleContext>,

    replacements: FxHashMap<NodeIndex, StatementReplacement>,
    owners: FxHashMap<NodeIndex, StatementOwner>,
    late_limit: usize,
    late_iterations: usize,

    needs_scope_fix_marker: bool,
    result_has_scope_marker: bool,
    result_has_external_module_indicator: bool,

    used_names: Option<FxHashSet<String>>,
    temp_count: u32,
}

impl<'a> DeclarationTransformer<'a> {
    pub fn new(
        arena: &'a mut NodeArena,
        resolver: &'a dyn EmitResolver,
        options: &'a DeclarationEmitOptions,
    ) -> Self {
        Self {
            arena,
            resolver,
            options,
            tracker: EmitTracker::new(options, String::new()),
            current_file: NodeIndex::NONE,
            current_file_is_external_module: false,
            container: NodeIndex::NONE,
            enclosing: NodeIndex::NONE,
            needs_declare: true,
            is_bundled_emit: false,
            bundle: None,
            replacements: FxHashMap::default(),
            owners: FxHashMap::default(),
            late_limit: 0,
            late_iterations: 0,
            needs_scope_fix_marker: false,
            result_has_scope_marker: false,
            result_has_external_module_indicator: false,
            used_names: None,
            temp_count: 0,
        }
    }

    /// Arena the transformer appends to.
    #[must_use]
    pub fn arena(&self) -> &NodeArena {
        self.arena
    }

    /// Transform one source file.
    ///
    /// Declaration files pass through unchanged.
    #[tracing::instrument(level = "debug", skip(self), fields(file = file.0))]
    pub fn transform_source_file(&mut self, file: NodeIndex) -> Result<DeclarationOutput, EmitError> {
        let Some(NodeData::SourceFile(data)) = self.arena.data(file).cloned() else {
            return Err(EmitError::NotASourceFile { node: file });
        };
        self.tracker.set_file_name(data.file_name.clone());
        if data.is_declaration_file {
            debug!(file = %data.file_name, "declaration file passes through");
            return Ok(DeclarationOutput {
                source_file: file,
                diagnostics: self.tracker.take_diagnostics(),
            });
        }

        self.begin_file(file, &data);
        self.is_bundled_emit = false;
        self.needs_declare = true;
        let mut statements = self.visit_statement_list(&data.statements)?;

        if data.is_external_module
            && (!self.result_has_external_module_indicator
                || (self.needs_scope_fix_marker && !self.result_has_scope_marker))
        {
            trace!("appending export {{}} scope marker");
            statements.push(self.arena.create_empty_export());
        }

        let referenced_files = if self.options.no_resolve {
            Vec::new()
        } else {
            data.referenced_files.clone()
        };
        let source_file = self.arena.update(
            file,
            NodeData::SourceFile(SourceFileData {
                statements: statements.into(),
                is_declaration_file: true,
                referenced_files,
                ..data
            }),
        );
        let diagnostics = self.tracker.take_diagnostics();
        debug!(diagnostics = diagnostics.len(), "file transformed");
        Ok(DeclarationOutput {
            source_file,
            diagnostics,
        })
    }

    /// Reset per-file state.
    fn begin_file(&mut self, file: NodeIndex, data: &SourceFileData) {
        self.current_file = file;
        self.current_file_is_external_module = data.is_external_module;
        self.container = file;
        self.enclosing = file;
        self.replacements.clear();
        self.owners.clear();
        self.tracker.reset_late_painting();
        self.late_iterations = 0;
        self.late_limit = self.count_late_paintable(&data.statements)
            + dtsz_common::limits::LATE_STATEMENT_ITERATION_SLACK;
        self.needs_scope_fix_marker = false;
        self.result_has_scope_marker = false;
        self.result_has_external_module_indicator = false;
        self.used_names = None;
        self.temp_count = 0;
    }

    // =========================================================================
    // Scoped state
    // =========================================================================

    /// Run `f` with `node` as the enclosing declaration.
    fn with_enclosing<T>(&mut self, node: NodeIndex, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.enclosing, node);
        let result = f(self);
        self.enclosing = saved;
        result
    }

    /// Run `f` while visiting the statements of `container`.
    fn with_container<T>(
        &mut self,
        container: NodeIndex,
        needs_declare: bool,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved_container = std::mem::replace(&mut self.container, container);
        let saved_enclosing = std::mem::replace(&mut self.enclosing, container);
        let saved_declare = std::mem::replace(&mut self.needs_declare, needs_declare);
        let result = f(self);
        self.container = saved_container;
        self.enclosing = saved_enclosing;
        self.needs_declare = saved_declare;
        result
    }

    /// Run `f` with a diagnostic context installed. `error_node` is the node
    /// "inferred type of" diagnostics point at.
    fn with_diagnostic_context<T>(
        &mut self,
        context: DiagnosticContext,
        error_node: NodeIndex,
        f: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let name = get_declaration_name(self.arena, error_node);
        let name = if node_text(self.arena, name).is_some() {
            name
        } else {
            NodeIndex::NONE
        };
        let saved_context = self.tracker.replace_context(context);
        let (saved_name, saved_fallback) = self.tracker.replace_error_nodes(name, error_node);
        let result = f(self);
        self.tracker.replace_context(saved_context);
        self.tracker.replace_error_nodes(saved_name, saved_fallback);
        result
    }

    // =========================================================================
    // Types
    // =========================================================================

    fn synthesizer(&mut self) -> TypeSynthesizer<'_> {
        TypeSynthesizer::new(
            &mut *self.arena,
            self.resolver,
            &mut self.tracker,
            self.options,
            self.enclosing,
        )
    }

    /// A type for a declaration position: rebuilt from syntax when possible,
    /// otherwise serialized by the resolver, otherwise `unknown`.
    fn ensure_type(&mut self, node: NodeIndex, request: TypeRequest) -> Result<NodeIndex, EmitError> {
        let synthesized = match request {
            TypeRequest::Declaration { preserve_literals } => {
                self.synthesizer().type_of_declaration(node, preserve_literals)?
            }
            TypeRequest::ReturnType => self.synthesizer().return_type_of_signature(node),
            TypeRequest::Accessor(accessors) => self.synthesizer().type_of_accessor(&accessors),
        };
        match synthesized {
            TypeSynthesis::Node(type_node) => return Ok(type_node),
            TypeSynthesis::NeedsInference => self.tracker.report_inference_fallback(self.arena, node),
            TypeSynthesis::Reported => {}
        }
        Ok(self.semantic_type(node, request))
    }

    fn semantic_type(&mut self, node: NodeIndex, request: TypeRequest) -> NodeIndex {
        let enclosing = self.enclosing;
        let serialized = match request {
            TypeRequest::Declaration { .. } => self.resolver.create_type_of_declaration(
                self.arena,
                node,
                enclosing,
                &mut self.tracker,
            ),
            TypeRequest::ReturnType => self.resolver.create_return_type_of_signature(
                self.arena,
                node,
                enclosing,
                &mut self.tracker,
            ),
            TypeRequest::Accessor(accessors) => {
                let accessor = if accessors.get_accessor.is_some() {
                    accessors.get_accessor
                } else {
                    accessors.set_accessor
                };
                self.resolver.create_type_of_declaration(
                    self.arena,
                    accessor,
                    enclosing,
                    &mut self.tracker,
                )
            }
        };
        self.or_unknown(node, serialized)
    }

    /// Semantic type of an expression, `unknown` when it cannot be serialized.
    fn semantic_type_of_expression(&mut self, expression: NodeIndex) -> NodeIndex {
        let enclosing = self.enclosing;
        let serialized = self.resolver.create_type_of_expression(
            self.arena,
            expression,
            enclosing,
            &mut self.tracker,
        );
        self.or_unknown(expression, serialized)
    }

    fn or_unknown(&mut self, node: NodeIndex, serialized: Option<NodeIndex>) -> NodeIndex {
        match serialized {
            Some(type_node) => type_node,
            None => {
                trace!(node = node.0, "no serialized type, using unknown");
                self.arena.create_keyword_type(TypeKeyword::Unknown)
            }
        }
    }

    /// Reuse a written type node for the emission site. A node that cannot be
    /// reused is re-serialized, or kept as written when the resolver cannot.
    fn reuse_annotation(&mut self, type_node: NodeIndex) -> NodeIndex {
        if type_node.is_none() {
            return type_node;
        }
        if let TypeSynthesis::Node(reused) = self.synthesizer().reuse_type_node(type_node) {
            return reused;
        }
        let enclosing = self.enclosing;
        self.resolver
            .create_type_of_type_node(self.arena, type_node, enclosing, &mut self.tracker)
            .unwrap_or(type_node)
    }

    // =========================================================================
    // Visibility
    // =========================================================================

    /// Visible through the resolver, or painted by an earlier reference.
    fn is_visible(&self, declaration: NodeIndex) -> bool {
        if self.tracker.is_painted(declaration) {
            return true;
        }
        if let Some(NodeData::ModuleDeclaration(module)) = self.arena.data(declaration)
            && (self.arena.flags(declaration).contains(NodeFlags::GLOBAL_AUGMENTATION)
                || matches!(self.arena.data(module.name), Some(NodeData::StringLiteral { .. })))
        {
            return true;
        }
        self.resolver.is_declaration_visible(self.arena, declaration)
    }

    /// Report an entity name that cannot be written at the emission site, or
    /// paint the aliases it needs.
    fn check_entity_name_visibility(&mut self, entity_name: NodeIndex) {
        let result = self
            .resolver
            .is_entity_name_visible(self.arena, entity_name, self.enclosing);
        self.tracker.handle_symbol_accessibility_error(self.arena, &result);
    }

    fn should_strip_internal(&self, node: NodeIndex) -> bool {
        self.options.strip_internal && self.arena.flags(node).contains(NodeFlags::INTERNAL)
    }

    // =========================================================================
    // Modifiers
    // =========================================================================

    /// Modifiers of a statement in declaration output.
    fn ensure_modifiers(&self, node: NodeIndex) -> ModifierFlags {
        let mut mask = ModifierFlags::all()
            - (ModifierFlags::PUBLIC | ModifierFlags::ASYNC | ModifierFlags::OVERRIDE);
        let mut additions = if self.needs_declare && !is_always_type(self.arena.data(node)) {
            ModifierFlags::AMBIENT
        } else {
            ModifierFlags::empty()
        };
        let parent_is_file = self.container == self.current_file;
        if !parent_is_file || (self.is_bundled_emit && self.current_file_is_external_module) {
            mask.remove(ModifierFlags::AMBIENT);
            additions = ModifierFlags::empty();
        }
        mask_modifier_flags(modifiers_of(self.arena, node), mask, additions)
    }

    /// Modifiers of a class member or parameter property.
    fn ensure_member_modifiers(&self, node: NodeIndex) -> ModifierFlags {
        let mask = ModifierFlags::all()
            - (ModifierFlags::PUBLIC
                | ModifierFlags::ASYNC
                | ModifierFlags::OVERRIDE
                | ModifierFlags::AMBIENT);
        mask_modifier_flags(modifiers_of(self.arena, node), mask, ModifierFlags::empty())
    }

    /// Copy of `statement` with its modifiers replaced.
    fn with_modifiers(&mut self, statement: NodeIndex, flags: ModifierFlags) -> NodeIndex {
        let Some(mut data) = self.arena.data(statement).cloned() else {
            return statement;
        };
        if !set_modifiers(&mut data, flags) {
            return statement;
        }
        self.arena.update_if_changed(statement, data)
    }

    // =========================================================================
    // Generated names
    // =========================================================================

    fn used_names(&mut self) -> &mut FxHashSet<String> {
        let arena = &*self.arena;
        self.used_names.get_or_insert_with(|| {
            let mut names = FxHashSet::default();
            for i in 0..arena.len() {
                if let Some(NodeData::Identifier { text }) = arena.data(NodeIndex(i as u32)) {
                    names.insert(text.clone());
                }
            }
            names
        })
    }

    /// `base`, or `base_1`, `base_2`, ... when the name is taken.
    fn unique_name(&mut self, base: &str) -> String {
        let used = self.used_names();
        let mut candidate = base.to_string();
        let mut suffix = 1;
        while used.contains(&candidate) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        used.insert(candidate.clone());
        candidate
    }

    /// Next free temporary name: `_a` through `_z` (skipping `_i` and `_n`),
    /// then `_0`, `_1`, ...
    fn temp_name(&mut self) -> String {
        const LETTERS: &[u8] = b"abcdefghjklmopqrstuvwxyz";
        loop {
            let count = self.temp_count as usize;
            self.temp_count += 1;
            let candidate = match LETTERS.get(count) {
                Some(letter) => format!("_{}", char::from(*letter)),
                None => format!("_{}", count - LETTERS.len()),
            };
            let used = self.used_names();
            if used.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}

/// Interfaces and type aliases never take `declare`.
fn is_always_type(data: Option<&NodeData>) -> bool {
    matches!(
        data,
        Some(NodeData::InterfaceDeclaration(_) | NodeData::TypeAliasDeclaration(_))
    )
}

fn mask_modifier_flags(
    flags: ModifierFlags,
    mask: ModifierFlags,
    additions: ModifierFlags,
) -> ModifierFlags {
    let mut flags = (flags & mask) | additions;
    if flags.contains(ModifierFlags::DEFAULT) && !flags.contains(ModifierFlags::EXPORT) {
        flags |= ModifierFlags::EXPORT;
    }
    if flags.contains(ModifierFlags::DEFAULT) && flags.contains(ModifierFlags::AMBIENT) {
        flags.remove(ModifierFlags::AMBIENT);
    }
    flags
}

/// Replace the modifiers of a statement payload. `false` for forms without
/// modifiers.
fn set_modifiers(data: &mut NodeData, flags: ModifierFlags) -> bool {
    match data {
        NodeData::FunctionDeclaration(f) => f.modifiers = flags,
        NodeData::ClassDeclaration(c) => c.modifiers = flags,
        NodeData::InterfaceDeclaration(i) => i.modifiers = flags,
        NodeData::TypeAliasDeclaration(t) => t.modifiers = flags,
        NodeData::EnumDeclaration(e) => e.modifiers = flags,
        NodeData::ModuleDeclaration(m) => m.modifiers = flags,
        NodeData::VariableStatement { modifiers, .. } => *modifiers = flags,
        _ => return false,
    }
    true
}
