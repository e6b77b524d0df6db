//! Shared fixtures for the declaration emit tests.
//!
//! `TestResolver` answers every checker query from tables filled in by the
//! test. `Fixture` builds a source file node by node and runs the transformer
//! over it.

#![allow(dead_code)]

use dtsz_ast::node_utils::{entity_name_text, modifiers_of};
use dtsz_ast::{
    ClassData, FileReference, FunctionData, InterfaceData, ModifierFlags, NodeArena, NodeData, NodeFlags,
    NodeIndex, NodeList, SourceFileData, TypeKeyword, print_node,
};
use dtsz_common::DeclarationEmitOptions;
use dtsz_emitter::{
    AliasToMakeVisible, ConstantValue, DeclarationDiagnostic, DeclarationTransformer, EmitError,
    EmitResolver, EvaluatorResult, ExpandoProperty, ModuleSpecifierHost, SymbolAccessibilityResult,
    SymbolTracker,
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Resolver whose answers are configured per test.
///
/// A declaration is visible when it carries `export`, was marked visible, or
/// `all_visible` is set (script files). Names are accessible unless listed as
/// inaccessible. Serialized types are written as text (`"number"`,
/// `"Foo | undefined"`) and built on demand; every name they mention is
/// tracked like the checker would.
#[derive(Default)]
pub struct TestResolver {
    pub all_visible: bool,
    visible: FxHashSet<NodeIndex>,
    inaccessible: FxHashMap<String, SymbolAccessibilityResult>,
    scoped: FxHashMap<String, NodeIndex>,
    aliases: FxHashMap<String, Vec<AliasToMakeVisible>>,
    types: FxHashMap<NodeIndex, String>,
    type_node_substitutes: FxHashMap<NodeIndex, String>,
    late_bound_index_signatures: FxHashMap<NodeIndex, String>,
    expando: FxHashMap<NodeIndex, Vec<ExpandoProperty>>,
    overload_implementations: FxHashSet<NodeIndex>,
    late_bound: FxHashSet<NodeIndex>,
    implicit_undefined: FxHashSet<NodeIndex>,
    constants: FxHashMap<String, ConstantValue>,
    module_files: FxHashMap<NodeIndex, String>,
    specifier_overrides: FxHashMap<String, String>,
}

impl TestResolver {
    pub fn mark_visible(&mut self, node: NodeIndex) {
        self.visible.insert(node);
    }

    pub fn set_inaccessible(&mut self, name: &str, result: SymbolAccessibilityResult) {
        self.inaccessible.insert(name.to_string(), result);
    }

    /// `name` only resolves while `scope` is the enclosing declaration, like a
    /// type parameter introduced by `infer`.
    pub fn scope_name(&mut self, name: &str, scope: NodeIndex) {
        self.scoped.insert(name.to_string(), scope);
    }

    /// References to `name` need `declaration` (inside `statement`) emitted.
    pub fn add_alias(&mut self, name: &str, declaration: NodeIndex, statement: NodeIndex) {
        self.aliases
            .entry(name.to_string())
            .or_default()
            .push(AliasToMakeVisible {
                declaration,
                statement,
            });
    }

    /// Checked type of a declaration, expression or signature return.
    pub fn set_type(&mut self, node: NodeIndex, text: &str) {
        self.types.insert(node, text.to_string());
    }

    pub fn set_type_node_substitute(&mut self, type_node: NodeIndex, text: &str) {
        self.type_node_substitutes.insert(type_node, text.to_string());
    }

    /// `[x: string]: <text>` for a class with late-bound members.
    pub fn set_late_bound_index_signature(&mut self, class: NodeIndex, text: &str) {
        self.late_bound_index_signatures.insert(class, text.to_string());
    }

    pub fn add_expando(&mut self, function: NodeIndex, name: &str, value_declaration: NodeIndex) {
        self.expando.entry(function).or_default().push(ExpandoProperty {
            name: name.to_string(),
            value_declaration,
        });
    }

    pub fn mark_overload_implementation(&mut self, function: NodeIndex) {
        self.overload_implementations.insert(function);
    }

    pub fn mark_late_bound(&mut self, member: NodeIndex) {
        self.late_bound.insert(member);
    }

    pub fn require_implicit_undefined(&mut self, parameter: NodeIndex) {
        self.implicit_undefined.insert(parameter);
    }

    pub fn set_constant(&mut self, name: &str, value: ConstantValue) {
        self.constants.insert(name.to_string(), value);
    }

    pub fn set_module_file(&mut self, declaration: NodeIndex, file_name: &str) {
        self.module_files.insert(declaration, file_name.to_string());
    }

    pub fn override_specifier(&mut self, file_name: &str, module_name: &str) {
        self.specifier_overrides
            .insert(file_name.to_string(), module_name.to_string());
    }

    fn accessibility_of(&self, name: &str) -> SymbolAccessibilityResult {
        if let Some(result) = self.inaccessible.get(name) {
            return result.clone();
        }
        match self.aliases.get(name) {
            Some(aliases) => SymbolAccessibilityResult::with_aliases(aliases.clone()),
            None => SymbolAccessibilityResult::accessible(),
        }
    }

    /// Build the type written as `text`, tracking each name it references.
    fn serialize(&self, arena: &mut NodeArena, text: &str, tracker: &mut dyn SymbolTracker) -> NodeIndex {
        let mut types = Vec::new();
        for part in text.split(" | ") {
            match keyword(part) {
                Some(keyword) => types.push(arena.create_keyword_type(keyword)),
                None => {
                    let root = part.split('.').next().unwrap_or(part);
                    tracker.track_symbol(arena, &self.accessibility_of(root));
                    types.push(arena.create_type_reference_named(part));
                }
            }
        }
        if types.len() == 1 {
            types[0]
        } else {
            arena.create_union_type(types)
        }
    }

    fn serialize_node(
        &self,
        arena: &mut NodeArena,
        node: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        let text = self.types.get(&node)?.clone();
        Some(self.serialize(arena, &text, tracker))
    }
}

fn keyword(text: &str) -> Option<TypeKeyword> {
    Some(match text {
        "any" => TypeKeyword::Any,
        "unknown" => TypeKeyword::Unknown,
        "number" => TypeKeyword::Number,
        "bigint" => TypeKeyword::BigInt,
        "string" => TypeKeyword::String,
        "boolean" => TypeKeyword::Boolean,
        "symbol" => TypeKeyword::Symbol,
        "object" => TypeKeyword::Object,
        "void" => TypeKeyword::Void,
        "undefined" => TypeKeyword::Undefined,
        "null" => TypeKeyword::Null,
        "never" => TypeKeyword::Never,
        _ => return None,
    })
}

impl EmitResolver for TestResolver {
    fn is_declaration_visible(&self, arena: &NodeArena, declaration: NodeIndex) -> bool {
        self.all_visible
            || self.visible.contains(&declaration)
            || modifiers_of(arena, declaration).contains(ModifierFlags::EXPORT)
    }

    fn is_entity_name_visible(
        &self,
        arena: &NodeArena,
        entity_name: NodeIndex,
        enclosing: NodeIndex,
    ) -> SymbolAccessibilityResult {
        let Some(text) = entity_name_text(arena, entity_name) else {
            return SymbolAccessibilityResult::accessible();
        };
        let root = text.split('.').next().unwrap_or(&text);
        match self.scoped.get(root) {
            Some(&scope) if scope != enclosing => SymbolAccessibilityResult::not_accessible(root),
            _ => self.accessibility_of(root),
        }
    }

    fn create_type_of_declaration(
        &self,
        arena: &mut NodeArena,
        declaration: NodeIndex,
        _enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        self.serialize_node(arena, declaration, tracker)
    }

    fn create_type_of_expression(
        &self,
        arena: &mut NodeArena,
        expression: NodeIndex,
        _enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        self.serialize_node(arena, expression, tracker)
    }

    fn create_return_type_of_signature(
        &self,
        arena: &mut NodeArena,
        signature: NodeIndex,
        _enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        self.serialize_node(arena, signature, tracker)
    }

    fn create_type_of_type_node(
        &self,
        arena: &mut NodeArena,
        type_node: NodeIndex,
        _enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        let text = self.type_node_substitutes.get(&type_node)?.clone();
        Some(self.serialize(arena, &text, tracker))
    }

    fn create_late_bound_index_signatures(
        &self,
        arena: &mut NodeArena,
        class: NodeIndex,
        _enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Vec<NodeIndex> {
        let Some(text) = self.late_bound_index_signatures.get(&class).cloned() else {
            return Vec::new();
        };
        let key_type = arena.create_keyword_type(TypeKeyword::String);
        let key = arena.create_simple_parameter("x", key_type);
        let value = self.serialize(arena, &text, tracker);
        vec![arena.create_index_signature(ModifierFlags::empty(), vec![key], value)]
    }

    fn get_properties_of_container_function(
        &self,
        _arena: &NodeArena,
        function: NodeIndex,
    ) -> Vec<ExpandoProperty> {
        self.expando.get(&function).cloned().unwrap_or_default()
    }

    fn is_expando_function_declaration(&self, _arena: &NodeArena, function: NodeIndex) -> bool {
        self.expando.contains_key(&function)
    }

    fn is_implementation_of_overload(&self, _arena: &NodeArena, function: NodeIndex) -> bool {
        self.overload_implementations.contains(&function)
    }

    fn is_late_bound(&self, _arena: &NodeArena, member: NodeIndex) -> bool {
        self.late_bound.contains(&member)
    }

    fn evaluate_entity_name(
        &self,
        arena: &NodeArena,
        expression: NodeIndex,
        _location: NodeIndex,
    ) -> EvaluatorResult {
        entity_name_text(arena, expression)
            .and_then(|text| self.constants.get(&text).cloned())
            .map(|value| EvaluatorResult {
                value: Some(value),
                has_external_references: true,
            })
            .unwrap_or_default()
    }

    fn requires_adding_implicit_undefined(
        &self,
        _arena: &NodeArena,
        declaration: NodeIndex,
        _enclosing: NodeIndex,
    ) -> bool {
        self.implicit_undefined.contains(&declaration)
    }

    fn get_external_module_file_from_declaration(
        &self,
        _arena: &NodeArena,
        declaration: NodeIndex,
    ) -> Option<String> {
        self.module_files.get(&declaration).cloned()
    }

    fn get_module_specifier_override(&self, file_name: &str) -> Option<String> {
        self.specifier_overrides.get(file_name).cloned()
    }
}

/// Printed declaration file and the diagnostics reported while building it.
#[derive(Debug)]
pub struct Emitted {
    pub text: String,
    pub diagnostics: Vec<DeclarationDiagnostic>,
}

impl Emitted {
    pub fn codes(&self) -> Vec<u32> {
        self.diagnostics.iter().map(|d| d.code).collect()
    }
}

/// One source file under construction.
pub struct Fixture {
    pub arena: NodeArena,
    pub resolver: TestResolver,
    pub options: DeclarationEmitOptions,
    pub file_name: String,
    pub is_external_module: bool,
    /// `/// <reference path="..." />` directives of the file.
    pub referenced_files: Vec<String>,
    statements: Vec<NodeIndex>,
}

impl Fixture {
    /// An external module `a.ts`.
    pub fn module() -> Self {
        Self {
            arena: NodeArena::new(),
            resolver: TestResolver::default(),
            options: DeclarationEmitOptions::default(),
            file_name: "a.ts".to_string(),
            is_external_module: true,
            referenced_files: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// A global script `a.ts`; every top-level declaration is visible.
    pub fn script() -> Self {
        let mut fixture = Self::module();
        fixture.is_external_module = false;
        fixture.resolver.all_visible = true;
        fixture
    }

    pub fn isolated(mut self) -> Self {
        self.options.isolated_declarations = true;
        self
    }

    pub fn push(&mut self, statement: NodeIndex) -> NodeIndex {
        self.statements.push(statement);
        statement
    }

    // =========================================================================
    // Node helpers
    // =========================================================================

    pub fn keyword(&mut self, keyword: TypeKeyword) -> NodeIndex {
        self.arena.create_keyword_type(keyword)
    }

    pub fn type_ref(&mut self, name: &str) -> NodeIndex {
        self.arena.create_type_reference_named(name)
    }

    pub fn ident(&mut self, text: &str) -> NodeIndex {
        self.arena.create_identifier(text)
    }

    pub fn number(&mut self, text: &str) -> NodeIndex {
        self.arena.create_numeric_literal(text)
    }

    pub fn string(&mut self, text: &str) -> NodeIndex {
        self.arena.create_string_literal(text)
    }

    pub fn param(&mut self, name: &str, type_node: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        let name = self.arena.create_identifier(name);
        self.arena
            .create_parameter(ModifierFlags::empty(), name, false, type_node, initializer)
    }

    pub fn empty_body(&mut self) -> NodeIndex {
        self.arena.create_block(Vec::new())
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Variable statement with one declaration; returns `(statement, declaration)`.
    /// Exported declarations are visible.
    pub fn variable(
        &mut self,
        modifiers: ModifierFlags,
        list_flags: NodeFlags,
        name: &str,
        type_node: NodeIndex,
        initializer: NodeIndex,
    ) -> (NodeIndex, NodeIndex) {
        let id = self.arena.create_identifier(name);
        let declaration = self.arena.create_variable_declaration(id, type_node, initializer);
        let statement = self
            .arena
            .create_variable_statement(modifiers, list_flags, vec![declaration]);
        if modifiers.contains(ModifierFlags::EXPORT) {
            self.resolver.mark_visible(declaration);
        }
        self.push(statement);
        (statement, declaration)
    }

    pub fn export_const(&mut self, name: &str, type_node: NodeIndex, initializer: NodeIndex) -> NodeIndex {
        self.variable(ModifierFlags::EXPORT, NodeFlags::CONST, name, type_node, initializer)
            .1
    }

    /// A function declaration; `has_body` decides between an implementation
    /// and an overload signature.
    pub fn function(
        &mut self,
        modifiers: ModifierFlags,
        name: &str,
        parameters: Vec<NodeIndex>,
        return_type: NodeIndex,
        has_body: bool,
    ) -> NodeIndex {
        let name = self.arena.create_identifier(name);
        let body = if has_body { self.empty_body() } else { NodeIndex::NONE };
        let function = self.arena.add(NodeData::FunctionDeclaration(FunctionData {
            modifiers,
            asterisk: false,
            name,
            question: false,
            type_parameters: None,
            parameters: NodeList::from(parameters),
            return_type,
            body,
        }));
        self.push(function)
    }

    pub fn interface(&mut self, modifiers: ModifierFlags, name: &str, members: Vec<NodeIndex>) -> NodeIndex {
        let name = self.arena.create_identifier(name);
        let interface = self.arena.add(NodeData::InterfaceDeclaration(InterfaceData {
            modifiers,
            name,
            type_parameters: None,
            heritage_clauses: None,
            members: NodeList::from(members),
        }));
        self.push(interface)
    }

    pub fn class(
        &mut self,
        modifiers: ModifierFlags,
        name: &str,
        heritage_clauses: Option<Vec<NodeIndex>>,
        members: Vec<NodeIndex>,
    ) -> NodeIndex {
        let name = self.arena.create_identifier(name);
        let class = self.arena.add(NodeData::ClassDeclaration(ClassData {
            modifiers,
            name,
            type_parameters: None,
            heritage_clauses: heritage_clauses.map(NodeList::from),
            members: NodeList::from(members),
        }));
        self.push(class)
    }

    /// `name: type;` property signature.
    pub fn property_signature(&mut self, name: &str, type_node: NodeIndex) -> NodeIndex {
        let name = self.arena.create_identifier(name);
        self.arena
            .create_property_signature(ModifierFlags::empty(), name, false, type_node)
    }

    // =========================================================================
    // Emit
    // =========================================================================

    fn source_file(&mut self) -> NodeIndex {
        let mut data = SourceFileData::new(self.file_name.clone(), NodeList::from(self.statements.clone()));
        data.is_external_module = self.is_external_module;
        data.referenced_files = self.referenced_files.iter().map(FileReference::new).collect();
        self.arena.add(NodeData::SourceFile(data))
    }

    /// Close the statements pushed so far into a file of the bundle under
    /// construction and start the next one.
    pub fn finish_file(&mut self, file_name: &str, is_external_module: bool) -> NodeIndex {
        self.file_name = file_name.to_string();
        self.is_external_module = is_external_module;
        let file = self.source_file();
        self.statements.clear();
        self.referenced_files.clear();
        file
    }

    pub fn emit_bundle(&mut self, files: &[NodeIndex], host: &dyn ModuleSpecifierHost) -> Emitted {
        let output = {
            let mut transformer = DeclarationTransformer::new(&mut self.arena, &self.resolver, &self.options);
            match transformer.transform_bundle(files, host) {
                Ok(output) => output,
                Err(error) => panic!("bundle emit failed: {error}"),
            }
        };
        Emitted {
            text: print_node(&self.arena, output.bundle),
            diagnostics: output.diagnostics,
        }
    }

    pub fn try_emit(&mut self) -> Result<Emitted, EmitError> {
        let file = self.source_file();
        let output = {
            let mut transformer = DeclarationTransformer::new(&mut self.arena, &self.resolver, &self.options);
            transformer.transform_source_file(file)?
        };
        Ok(Emitted {
            text: print_node(&self.arena, output.source_file),
            diagnostics: output.diagnostics,
        })
    }

    pub fn emit(&mut self) -> Emitted {
        match self.try_emit() {
            Ok(emitted) => emitted,
            Err(error) => panic!("declaration emit failed: {error}"),
        }
    }
}
