//! Document tree consumed by layout.
//!
//! Markup parsing happens elsewhere; a parser (or a test) builds a [`DocumentTree`], or
//! exposes its own tree through the [`Document`] trait.

#![forbid(unsafe_code)]

use std::collections::HashMap;

/// Opaque handle to a node of a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// The document node every tree starts with.
    pub const ROOT: Self = Self(0);

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> u64 {
        self.0
    }
}

/// Data stored for each node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    Document,
    Element { tag_name: String },
    Text(String),
}

/// Borrowed view of a node's kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'doc> {
    Document,
    Element(&'doc str),
    Text(&'doc str),
}

/// Read-only queries layout needs from a document.
pub trait Document {
    fn kind(&self, node: NodeId) -> Option<NodeKind<'_>>;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    fn children(&self, node: NodeId) -> &[NodeId];

    /// Zero-based position of an element among its parent's element children.
    fn element_index(&self, node: NodeId) -> Option<usize> {
        let parent = self.parent(node)?;
        self.children(parent)
            .iter()
            .filter(|&&sibling| matches!(self.kind(sibling), Some(NodeKind::Element(_))))
            .position(|&sibling| sibling == node)
    }

    fn tag_name(&self, node: NodeId) -> Option<&str> {
        match self.kind(node)? {
            NodeKind::Element(tag) => Some(tag),
            NodeKind::Document | NodeKind::Text(_) => None,
        }
    }
}

/// In-memory document: node data plus parent/child relationships.
#[derive(Debug, Clone)]
pub struct DocumentTree {
    next_id: u64,
    node_data: HashMap<NodeId, NodeData>,
    parents: HashMap<NodeId, NodeId>,
    children: HashMap<NodeId, Vec<NodeId>>,
}

impl DocumentTree {
    /// Create a tree holding only the document node.
    pub fn new() -> Self {
        let mut node_data = HashMap::new();
        node_data.insert(NodeId::ROOT, NodeData::Document);
        Self {
            next_id: 1,
            node_data,
            parents: HashMap::new(),
            children: HashMap::new(),
        }
    }

    #[inline]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    fn create_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId::from_raw(self.next_id);
        self.next_id += 1;
        self.node_data.insert(id, data);
        id
    }

    /// Create an element and append it under `parent`.
    pub fn append_element(&mut self, parent: NodeId, tag_name: &str) -> NodeId {
        let node = self.create_node(NodeData::Element {
            tag_name: tag_name.to_ascii_lowercase(),
        });
        self.append_child(parent, node);
        node
    }

    /// Create a text node and append it under `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        let node = self.create_node(NodeData::Text(text.to_owned()));
        self.append_child(parent, node);
        node
    }

    /// Establish parent-child relationship.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.parents.insert(child, parent);
        self.children.entry(parent).or_default().push(child);
    }

    #[inline]
    pub fn node_data(&self, node: NodeId) -> Option<&NodeData> {
        self.node_data.get(&node)
    }

    pub fn len(&self) -> usize {
        self.node_data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_data.is_empty()
    }
}

impl Default for DocumentTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for DocumentTree {
    fn kind(&self, node: NodeId) -> Option<NodeKind<'_>> {
        Some(match self.node_data.get(&node)? {
            NodeData::Document => NodeKind::Document,
            NodeData::Element { tag_name } => NodeKind::Element(tag_name),
            NodeData::Text(text) => NodeKind::Text(text),
        })
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(&node).copied()
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.children.get(&node).map(Vec::as_slice).unwrap_or_default()
    }
}
