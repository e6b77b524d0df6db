//! Declaration emit for dtsz.
//!
//! Turns a checked source file into a declaration-only tree: bodies removed,
//! every signature annotated, invisible declarations elided.
//!
//! - [`synthesizer`] builds type nodes from existing annotations or simple
//!   initializers, falling back to the resolver when syntax is not enough.
//! - [`declaration_emitter`] walks statements, decides visibility, drives the
//!   late-painting fixpoint for aliases and bundles modules.
//! - [`resolver`] and [`tracker`] are the seams to the type checker.

pub mod diagnostics;
pub use diagnostics::{DeclarationDiagnostic, DiagnosticContext};

pub mod enum_evaluator;
pub use enum_evaluator::EnumEvaluator;

mod error;
pub use error::EmitError;

pub mod resolver;
pub use resolver::{
    AliasToMakeVisible, AllAccessorDeclarations, ConstantValue, EmitResolver, EvaluatorResult,
    ExpandoProperty, SymbolAccessibility, SymbolAccessibilityResult,
};

pub mod tracker;
pub use tracker::{EmitTracker, NodeLocation, SymbolTracker};

pub mod synthesizer;
pub use synthesizer::{InferenceMode, TypeSynthesis, TypeSynthesizer};

pub mod declaration_emitter;
pub use declaration_emitter::bundle::{
    DefaultModuleSpecifierHost, ModuleSpecifierHost, declaration_file_name,
};
pub use declaration_emitter::{BundleOutput, DeclarationOutput, DeclarationTransformer};
