// Copyright 2025 the Codecity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! District tree built from dotted package labels.

use std::collections::HashMap;

use kurbo::Rect;

use crate::descriptor::DistrictSpec;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Identifier for a node in a [`DistrictTree`].
///
/// Nodes are never removed, so an id stays valid for the lifetime of the tree
/// that issued it. Children always have larger ids than their parent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The root of every tree.
    pub const ROOT: Self = Self(0);

    #[allow(
        clippy::cast_possible_truncation,
        reason = "NodeId uses 32-bit indices; a city never has 2^32 districts."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    /// Slot index of this node.
    pub const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// A district in the tree, with the results of each layout stage.
#[derive(Clone, Debug)]
pub struct DistrictNode {
    segment: String,
    path: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    level: usize,
    declared: bool,
    author_footprint: Option<(f64, f64)>,
    pub(crate) own_area: f64,
    pub(crate) reserve_weight: f64,
    pub(crate) required_area: f64,
    pub(crate) footprint: (f64, f64),
    pub(crate) rect: Rect,
    pub(crate) reserve: Option<Rect>,
}

impl DistrictNode {
    fn new(segment: &str, path: String, parent: Option<NodeId>, level: usize) -> Self {
        Self {
            segment: segment.to_owned(),
            path,
            parent,
            children: Vec::new(),
            level,
            declared: false,
            author_footprint: None,
            own_area: 0.0,
            reserve_weight: 0.0,
            required_area: 0.0,
            footprint: (0.0, 0.0),
            rect: Rect::ZERO,
            reserve: None,
        }
    }

    /// Last path segment (`"nodes"` for `"org.jsoup.nodes"`). Empty for the root.
    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// Full dotted label. Empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parent node; `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Child districts in first-seen order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Depth in the tree; the root is level 0.
    pub fn level(&self) -> usize {
        self.level
    }

    /// True if a [`DistrictSpec`] ends at this node.
    ///
    /// Only declared districts own buildings. Other nodes group their children.
    pub fn is_declared(&self) -> bool {
        self.declared
    }

    /// Footprint supplied by the author, if any.
    pub fn author_footprint(&self) -> Option<(f64, f64)> {
        self.author_footprint
    }

    /// Total footprint area of the buildings owned directly by this district.
    pub fn own_area(&self) -> f64 {
        self.own_area
    }

    /// Area this district has to hold: its buildings plus its children's footprints.
    pub fn required_area(&self) -> f64 {
        self.required_area
    }

    /// Estimated `(x, z)` footprint.
    pub fn footprint(&self) -> (f64, f64) {
        self.footprint
    }

    /// Treemap rectangle; kurbo's `y` axis is world `z`.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Slot kept free of child districts for this district's own buildings.
    pub fn reserve(&self) -> Option<Rect> {
        self.reserve
    }

    /// True if this node has no child districts.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena tree of districts rooted at an unnamed root node.
#[derive(Clone, Debug)]
pub struct DistrictTree {
    nodes: Vec<DistrictNode>,
    by_path: HashMap<String, NodeId>,
}

impl Default for DistrictTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DistrictTree {
    /// A tree holding only the root.
    pub fn new() -> Self {
        Self {
            nodes: vec![DistrictNode::new("", String::new(), None, 0)],
            by_path: HashMap::new(),
        }
    }

    /// Build the tree for `districts`, in input order.
    ///
    /// Each label is split on `.` and one node is created per new path segment;
    /// existing nodes are reused. The node a label ends at becomes a declared
    /// district and takes the descriptor's fields, whether or not it already
    /// existed as a grouping node.
    ///
    /// Labels that are empty or contain an empty segment are skipped with
    /// [`Diagnostic::EmptyDistrictLabel`]. A repeated label overwrites the
    /// earlier fields and records [`Diagnostic::DuplicateDistrict`].
    pub fn build(districts: &[DistrictSpec], diagnostics: &mut Diagnostics) -> Self {
        let mut tree = Self::new();
        for spec in districts {
            if spec.label.split('.').any(str::is_empty) {
                diagnostics.push(Diagnostic::EmptyDistrictLabel {
                    label: spec.label.clone(),
                });
                continue;
            }
            let id = spec
                .label
                .split('.')
                .fold(NodeId::ROOT, |parent, segment| tree.child_or_insert(parent, segment));
            let node = &mut tree.nodes[id.idx()];
            if node.declared {
                diagnostics.push(Diagnostic::DuplicateDistrict {
                    label: spec.label.clone(),
                });
            }
            node.declared = true;
            node.author_footprint = spec.footprint;
        }
        tracing::debug!(nodes = tree.len(), "district tree built");
        tree
    }

    /// The root node id.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Access a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was issued by another tree and is out of range.
    pub fn node(&self, id: NodeId) -> &DistrictNode {
        &self.nodes[id.idx()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut DistrictNode {
        &mut self.nodes[id.idx()]
    }

    /// Look up a node by its full dotted label.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        if path.is_empty() {
            return Some(NodeId::ROOT);
        }
        self.by_path.get(path).copied()
    }

    /// Look up a declared district by its full dotted label.
    pub fn find_declared(&self, path: &str) -> Option<NodeId> {
        self.find(path).filter(|id| self.node(*id).declared)
    }

    /// Iterate all nodes in creation order, which is a valid pre-order for
    /// parent-before-child processing.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &DistrictNode)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i), n))
    }

    /// Node ids in depth-first pre-order, children in first-seen order.
    pub fn pre_order(&self) -> Vec<NodeId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![NodeId::ROOT];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    fn child_or_insert(&mut self, parent: NodeId, segment: &str) -> NodeId {
        let parent_node = self.node(parent);
        let path = if parent_node.path.is_empty() {
            segment.to_owned()
        } else {
            format!("{}.{segment}", parent_node.path)
        };
        if let Some(&id) = self.by_path.get(&path) {
            return id;
        }
        let level = parent_node.level + 1;
        let id = NodeId::new(self.nodes.len());
        self.nodes
            .push(DistrictNode::new(segment, path.clone(), Some(parent), level));
        self.nodes[parent.idx()].children.push(id);
        self.by_path.insert(path, id);
        id
    }
}
