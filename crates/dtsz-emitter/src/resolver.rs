//! The emit resolver: everything declaration emit needs from the checker.
//!
//! The transformer never looks at symbols or types directly. It asks the
//! resolver whether declarations are visible, whether names are accessible
//! from a location, and, when syntax alone is not enough, for a serialized
//! type node. Serializing methods take the arena mutably because they append
//! the nodes they build, and a [`SymbolTracker`] that receives every symbol
//! the serialized type references.

use dtsz_ast::{NodeArena, NodeIndex};

use crate::tracker::SymbolTracker;

/// How a name resolves from an emission site.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SymbolAccessibility {
    Accessible,
    NotAccessible,
    /// Reachable only through a module specifier that cannot be written.
    CannotBeNamed,
    NotResolved,
}

/// A declaration that must be emitted for a reference to stay valid, and the
/// statement that contains it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AliasToMakeVisible {
    pub declaration: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolAccessibilityResult {
    pub accessibility: SymbolAccessibility,
    /// Name of the first inaccessible symbol.
    pub error_symbol_name: Option<String>,
    /// Module the inaccessible symbol lives in, when it is not a local name.
    pub error_module_name: Option<String>,
    /// Where the inaccessible symbol is declared.
    pub error_node: NodeIndex,
    pub aliases_to_make_visible: Vec<AliasToMakeVisible>,
}

impl SymbolAccessibilityResult {
    #[must_use]
    pub fn accessible() -> Self {
        Self {
            accessibility: SymbolAccessibility::Accessible,
            error_symbol_name: None,
            error_module_name: None,
            error_node: NodeIndex::NONE,
            aliases_to_make_visible: Vec::new(),
        }
    }

    /// Accessible once the given alias declarations are emitted.
    #[must_use]
    pub fn with_aliases(aliases: Vec<AliasToMakeVisible>) -> Self {
        Self {
            aliases_to_make_visible: aliases,
            ..Self::accessible()
        }
    }

    #[must_use]
    pub fn not_accessible(symbol_name: impl Into<String>) -> Self {
        Self {
            accessibility: SymbolAccessibility::NotAccessible,
            error_symbol_name: Some(symbol_name.into()),
            ..Self::accessible()
        }
    }

    /// Inaccessible symbol declared in `module_name`.
    #[must_use]
    pub fn from_private_module(
        symbol_name: impl Into<String>,
        module_name: impl Into<String>,
    ) -> Self {
        Self {
            error_module_name: Some(module_name.into()),
            ..Self::not_accessible(symbol_name)
        }
    }

    #[must_use]
    pub fn cannot_be_named(symbol_name: impl Into<String>, module_name: impl Into<String>) -> Self {
        Self {
            accessibility: SymbolAccessibility::CannotBeNamed,
            ..Self::from_private_module(symbol_name, module_name)
        }
    }

    #[must_use]
    pub fn is_accessible(&self) -> bool {
        self.accessibility == SymbolAccessibility::Accessible
    }
}

/// The getter and setter that share one accessor name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllAccessorDeclarations {
    /// Whichever accessor appears first in source order.
    pub first_accessor: NodeIndex,
    pub get_accessor: NodeIndex,
    pub set_accessor: NodeIndex,
}

impl AllAccessorDeclarations {
    #[must_use]
    pub fn is_paired(&self) -> bool {
        self.get_accessor.is_some() && self.set_accessor.is_some()
    }
}

/// A property assigned onto a function after its declaration (`f.x = 1`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpandoProperty {
    pub name: String,
    /// The assignment expression that declares the property.
    pub value_declaration: NodeIndex,
}

/// A folded constant.
#[derive(Clone, Debug, PartialEq)]
pub enum ConstantValue {
    Number(f64),
    String(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvaluatorResult {
    pub value: Option<ConstantValue>,
    /// The value depends on a declaration outside the current file.
    pub has_external_references: bool,
}

impl EvaluatorResult {
    #[must_use]
    pub fn constant(value: ConstantValue) -> Self {
        Self {
            value: Some(value),
            has_external_references: false,
        }
    }

    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }
}

/// Checker queries used by declaration emit.
///
/// Methods with a default implementation describe capabilities a simple
/// resolver may not have; the defaults are the conservative answer.
pub trait EmitResolver {
    /// The declaration is reachable from outside its file (exported, or
    /// referenced by something that is).
    fn is_declaration_visible(&self, arena: &NodeArena, declaration: NodeIndex) -> bool;

    /// Accessibility of an entity name written at `entity_name`, seen from
    /// `enclosing`.
    fn is_entity_name_visible(
        &self,
        arena: &NodeArena,
        entity_name: NodeIndex,
        enclosing: NodeIndex,
    ) -> SymbolAccessibilityResult;

    /// Re-qualify an accessible entity name for the emission site (for
    /// example `Inner` becomes `Outer.Inner`). `None` keeps the name as written.
    fn qualify_entity_name(
        &self,
        _arena: &mut NodeArena,
        _entity_name: NodeIndex,
        _enclosing: NodeIndex,
    ) -> Option<NodeIndex> {
        None
    }

    /// Serialize the checked type of a declaration.
    fn create_type_of_declaration(
        &self,
        arena: &mut NodeArena,
        declaration: NodeIndex,
        enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex>;

    /// Serialize the checked type of an expression.
    fn create_type_of_expression(
        &self,
        arena: &mut NodeArena,
        expression: NodeIndex,
        enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex>;

    /// Serialize the checked return type of a signature.
    fn create_return_type_of_signature(
        &self,
        arena: &mut NodeArena,
        signature: NodeIndex,
        enclosing: NodeIndex,
        tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex>;

    /// Serialize the type a written type node denotes, in a form valid at
    /// `enclosing`.
    fn create_type_of_type_node(
        &self,
        _arena: &mut NodeArena,
        _type_node: NodeIndex,
        _enclosing: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Option<NodeIndex> {
        None
    }

    /// Index signatures standing in for late-bound members that cannot be
    /// written by name.
    fn create_late_bound_index_signatures(
        &self,
        _arena: &mut NodeArena,
        _class: NodeIndex,
        _enclosing: NodeIndex,
        _tracker: &mut dyn SymbolTracker,
    ) -> Vec<NodeIndex> {
        Vec::new()
    }

    /// Getter and setter pair of an accessor. `None` lets the transformer pair
    /// accessors by name within the member list.
    fn get_all_accessor_declarations(
        &self,
        _arena: &NodeArena,
        _accessor: NodeIndex,
    ) -> Option<AllAccessorDeclarations> {
        None
    }

    /// Properties assigned onto a function declaration.
    fn get_properties_of_container_function(
        &self,
        _arena: &NodeArena,
        _function: NodeIndex,
    ) -> Vec<ExpandoProperty> {
        Vec::new()
    }

    fn is_expando_function_declaration(&self, _arena: &NodeArena, _function: NodeIndex) -> bool {
        false
    }

    /// The function has a body and overload signatures.
    fn is_implementation_of_overload(&self, _arena: &NodeArena, _function: NodeIndex) -> bool {
        false
    }

    /// A computed member name whose symbol can be named in a declaration
    /// (a `unique symbol` reached through an entity name).
    fn is_late_bound(&self, _arena: &NodeArena, _member: NodeIndex) -> bool {
        false
    }

    /// Constant value of an entity name expression used in an enum
    /// initializer or a computed key.
    fn evaluate_entity_name(
        &self,
        _arena: &NodeArena,
        _expression: NodeIndex,
        _location: NodeIndex,
    ) -> EvaluatorResult {
        EvaluatorResult::unknown()
    }

    /// An optional parameter whose declared type needs `| undefined` added.
    fn requires_adding_implicit_undefined(
        &self,
        _arena: &NodeArena,
        _declaration: NodeIndex,
        _enclosing: NodeIndex,
    ) -> bool {
        false
    }

    /// File name of the module an import or export declaration refers to,
    /// when that module is part of the program.
    fn get_external_module_file_from_declaration(
        &self,
        _arena: &NodeArena,
        _declaration: NodeIndex,
    ) -> Option<String> {
        None
    }

    /// Module name to use for a file inside a bundle, overriding the name
    /// derived from its path.
    fn get_module_specifier_override(&self, _file_name: &str) -> Option<String> {
        None
    }
}
