//! The attribute tree produced by the element decoder.
//!
//! Nodes are kept in an arena owned by the [`AttributeTree`]
//! and refer to each other through [`NodeId`]s,
//! so that parent links do not require shared ownership.
use crate::number::lenient_f64;
use dcmstack_core::{Tag, Value, VR};
use std::borrow::Cow;
use std::ops::{Index, Range};

/// The identifier of a node in an [`AttributeTree`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The index of the node in the tree's arena,
    /// which follows the order of decoding.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A decoded data element.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeNode {
    tag: Tag,
    vr: Option<VR>,
    key: String,
    value: Value,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    value_start: u64,
    end: u64,
    length: u32,
}

impl AttributeNode {
    pub(crate) fn new(tag: Tag, vr: Option<VR>, key: String, value_start: u64, length: u32) -> Self {
        AttributeNode {
            tag,
            vr,
            key,
            value: Value::Empty,
            parent: None,
            children: Vec::new(),
            value_start,
            end: value_start,
            length,
        }
    }

    /// The attribute tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// The resolved value representation,
    /// `None` if it could not be determined.
    pub fn vr(&self) -> Option<VR> {
        self.vr
    }

    /// The attribute's dictionary alias,
    /// or the tag in `(GGGG,EEEE)` form if the attribute is not known.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The decoded value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The parent sequence, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The elements nested in this sequence, in stream order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// The position of the first byte of the value.
    pub fn value_start(&self) -> u64 {
        self.value_start
    }

    /// The position right after the last byte of the element.
    pub fn end(&self) -> u64 {
        self.end
    }

    /// The byte range covered by the value.
    pub fn byte_range(&self) -> Range<u64> {
        self.value_start..self.end
    }

    /// The value length, after any adjustments made while decoding.
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn is_sequence(&self) -> bool {
        self.value.is_sequence()
    }

    /// The value as trimmed text.
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        self.value.to_str()
    }

    /// The value as a number.
    ///
    /// Text which does not parse as a plain decimal number
    /// goes through [`lenient_f64`].
    pub fn to_number(&self) -> Option<f64> {
        self.value.to_number_with(lenient_f64)
    }

    /// All numbers in the value.
    pub fn to_numbers(&self) -> Vec<f64> {
        self.value.to_numbers_with(lenient_f64)
    }

    pub(crate) fn set_value(&mut self, value: Value) {
        self.value = value;
    }

    pub(crate) fn set_end(&mut self, end: u64) {
        self.end = end;
    }
}

/// A forest of decoded data elements.
///
/// The top-level elements are the roots,
/// and the elements nested in sequences are their descendants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeTree {
    nodes: Vec<AttributeNode>,
    roots: Vec<NodeId>,
}

impl AttributeTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// The total number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Retrieve a node by its identifier.
    pub fn node(&self, id: NodeId) -> Option<&AttributeNode> {
        self.nodes.get(id.0)
    }

    /// The top-level elements, in stream order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Iterate over all nodes in decoding order,
    /// which is a depth-first pre-order of the tree.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &AttributeNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Find a top-level element by tag.
    pub fn get(&self, tag: Tag) -> Option<&AttributeNode> {
        self.root_id(tag).map(|id| &self[id])
    }

    /// Find the identifier of a top-level element by tag.
    pub fn root_id(&self, tag: Tag) -> Option<NodeId> {
        self.roots.iter().copied().find(|id| self[*id].tag == tag)
    }

    /// Find the first direct child of the given node with the given tag.
    pub fn lookup_child(&self, id: NodeId, tag: Tag) -> Option<NodeId> {
        self.node(id)?
            .children
            .iter()
            .copied()
            .find(|c| self[*c].tag == tag)
    }

    /// Find the first element with the given tag at any depth,
    /// in decoding order.
    pub fn find_first(&self, tag: Tag) -> Option<NodeId> {
        self.nodes.iter().position(|n| n.tag == tag).map(NodeId)
    }

    /// Iterate over all descendants of the given node,
    /// depth first and in stream order.
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = self
            .node(id)
            .map(|n| n.children.iter().rev().copied().collect())
            .unwrap_or_default();
        Descendants { tree: self, stack }
    }

    /// Iterate over the direct children of the given node.
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = &AttributeNode> {
        self.node(id)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
            .iter()
            .map(move |c| &self[*c])
    }

    /// The parent node of the given node.
    pub fn parent(&self, id: NodeId) -> Option<&AttributeNode> {
        self.node(id)?.parent.map(|p| &self[p])
    }

    /// Insert a node under the given parent,
    /// or as a root.
    pub(crate) fn push(&mut self, mut node: AttributeNode, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        node.parent = parent;
        self.nodes.push(node);
        match parent {
            Some(p) => self.nodes[p.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut AttributeNode {
        &mut self.nodes[id.0]
    }
}

impl Index<NodeId> for AttributeTree {
    type Output = AttributeNode;

    fn index(&self, id: NodeId) -> &AttributeNode {
        &self.nodes[id.0]
    }
}

/// Depth-first iterator over the descendants of a node.
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a AttributeTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree[id].children.iter().rev().copied());
        Some(id)
    }
}
