//! Fatal transform errors.
//!
//! Everything a user can fix is a diagnostic. An `EmitError` means the
//! transform met input it has no rule for and cannot produce a sound tree.

use dtsz_ast::NodeIndex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// A declaration category reached a dispatch that does not handle it.
    UnsupportedDeclaration { node: NodeIndex, kind: &'static str },
    /// The root passed to the transformer is not a source file.
    NotASourceFile { node: NodeIndex },
    /// A late-painted entry is not a statement that can be late painted.
    NotLatePaintable { node: NodeIndex, kind: &'static str },
    /// The late-painting worklist did not drain within its bound.
    LatePaintingLimitExceeded { limit: usize },
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::UnsupportedDeclaration { node, kind } => {
                write!(f, "unhandled declaration kind {kind} at node {}", node.0)
            }
            EmitError::NotASourceFile { node } => {
                write!(f, "node {} is not a source file", node.0)
            }
            EmitError::NotLatePaintable { node, kind } => {
                write!(f, "{kind} at node {} cannot be late painted", node.0)
            }
            EmitError::LatePaintingLimitExceeded { limit } => {
                write!(f, "late painting did not settle after {limit} statements")
            }
        }
    }
}

impl std::error::Error for EmitError {}
