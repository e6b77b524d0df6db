//! Syntax tree for dtsz.
//!
//! Nodes live in a [`NodeArena`] and are addressed by [`NodeIndex`]. The arena
//! is append-only: transformations build new nodes and share unchanged
//! subtrees by index, so an input tree is never mutated.
//!
//! - `base` - `NodeIndex`, `NodeList`, `TextRange`
//! - `flags` - modifier and node flag sets
//! - `node` - the closed `NodeData` enum and its payload structs
//! - `factory` - node construction helpers
//! - `node_utils` - read-only queries over nodes
//! - `printer` - text rendering of declaration trees

pub mod base;
pub use base::{NodeIndex, NodeList, TextRange};

pub mod flags;
pub use flags::{ModifierFlags, NodeFlags};

pub mod node;
pub use node::*;

mod arena;
pub use arena::NodeArena;

pub mod factory;

pub mod node_utils;

pub mod printer;
pub use printer::{DeclarationPrinter, print_node};
