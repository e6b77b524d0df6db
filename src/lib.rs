//! dtsz: declaration-only tree synthesis for TypeScript compilation units.
//!
//! The work happens in the member crates:
//!
//! - [`ast`]: node arena, factory, queries and the declaration printer
//! - [`common`]: emit options, the diagnostic message table, path helpers
//! - [`emitter`]: the type synthesizer and the declaration transformer
//!
//! This crate adds the multi-file [`driver`] and the [`tracing_config`]
//! used by binaries and tests.

pub use dtsz_ast as ast;
pub use dtsz_common as common;
pub use dtsz_emitter as emitter;

pub mod driver;
pub use driver::{
    DeclarationFile, SourceUnit, diagnostics_report, emit_bundle, emit_declarations,
    emit_declarations_parallel, emit_file, load_options, write_declarations,
};

pub mod tracing_config;
