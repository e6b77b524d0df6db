//! Append-only node storage.

use crate::base::NodeIndex;
use crate::flags::NodeFlags;
use crate::node::{Node, NodeData};

/// Owns every node of one or more syntax trees.
///
/// Nodes are only ever appended. A transform that needs a changed node adds a
/// new one (usually through [`NodeArena::update`]) and leaves the input intact.
#[derive(Clone, Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow on huge inputs.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    #[must_use]
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity.min(Self::MAX_NODE_PREALLOC)),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, idx: NodeIndex) -> Option<&Node> {
        if idx.is_none() {
            return None;
        }
        self.nodes.get(idx.0 as usize)
    }

    #[inline]
    #[must_use]
    pub fn data(&self, idx: NodeIndex) -> Option<&NodeData> {
        self.get(idx).map(|node| &node.data)
    }

    #[inline]
    #[must_use]
    pub fn flags(&self, idx: NodeIndex) -> NodeFlags {
        self.get(idx).map_or(NodeFlags::empty(), |node| node.flags)
    }

    /// Append a fully built node.
    pub fn add_node(&mut self, node: Node) -> NodeIndex {
        let idx = NodeIndex(self.nodes.len() as u32);
        self.nodes.push(node);
        idx
    }

    /// Append a node without a source position.
    pub fn add(&mut self, data: NodeData) -> NodeIndex {
        self.add_node(Node::new(data))
    }

    /// Append a node spanning `pos..end`.
    pub fn add_at(&mut self, data: NodeData, pos: u32, end: u32) -> NodeIndex {
        self.add_node(Node {
            pos,
            end,
            ..Node::new(data)
        })
    }

    /// Append a node with explicit flags.
    pub fn add_with_flags(&mut self, data: NodeData, flags: NodeFlags) -> NodeIndex {
        self.add_node(Node {
            flags,
            ..Node::new(data)
        })
    }

    /// Append a replacement for `original`.
    ///
    /// The new node inherits the position and flags of `original` and records
    /// it as its origin (following `original` links back to the parsed node).
    pub fn update(&mut self, original: NodeIndex, data: NodeData) -> NodeIndex {
        let (pos, end, flags, origin) = match self.get(original) {
            Some(node) => (
                node.pos,
                node.end,
                node.flags,
                if node.original.is_some() { node.original } else { original },
            ),
            None => (0, 0, NodeFlags::empty(), NodeIndex::NONE),
        };
        self.add_node(Node {
            data,
            pos,
            end,
            flags: flags | NodeFlags::SYNTHESIZED,
            original: origin,
        })
    }

    /// Parsed node this one was derived from (itself for parsed nodes).
    #[must_use]
    pub fn original_node(&self, idx: NodeIndex) -> NodeIndex {
        match self.get(idx) {
            Some(node) if node.original.is_some() => node.original,
            _ => idx,
        }
    }

    /// Append `data` unless it equals the existing node at `idx`.
    ///
    /// Keeps unchanged subtrees shared by index.
    pub fn update_if_changed(&mut self, idx: NodeIndex, data: NodeData) -> NodeIndex {
        if self.data(idx) == Some(&data) {
            return idx;
        }
        self.update(idx, data)
    }
}
