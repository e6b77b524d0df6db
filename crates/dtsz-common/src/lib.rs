//! Common types and utilities for the dtsz declaration emitter.
//!
//! This crate provides foundational types used across all dtsz crates:
//! - Declaration diagnostics (`Diagnostic`, message table, formatting)
//! - Emit options loaded from tsconfig-style JSON
//! - Emitter limits and thresholds
//! - Path helpers used when rewriting module specifiers and references

// Diagnostic types and the declaration message table
pub mod diagnostics;
pub use diagnostics::{
    Diagnostic, DiagnosticCategory, DiagnosticMessage, DiagnosticRelatedInformation,
    format_message,
};

// Emit options (strict null checks, isolated declarations, ...)
pub mod options;
pub use options::DeclarationEmitOptions;

// Centralized limits and thresholds
pub mod limits;

// Slash-normalized path helpers
pub mod paths;
