use std::fmt;

use serde::Serialize;

use crate::grid::Coord;

/// Index of a node inside its [`SearchTree`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root is always the first node created.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One discovered cell and its place in the search tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchNode {
    pub coord: Coord,
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

/// Arena of search nodes, in creation order, rooted at the start coordinate.
///
/// Nodes refer to each other by [`NodeId`]. A run creates a node for a
/// coordinate at most once, so the parent links form a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new(root: Coord) -> Self {
        Self {
            nodes: vec![SearchNode {
                coord: root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Build a tree from raw nodes without checking the links.
    ///
    /// Used to feed hand-made (possibly broken) trees to the path
    /// reconstructor.
    pub fn from_nodes(nodes: Vec<SearchNode>) -> Self {
        Self { nodes }
    }

    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    /// Create a child of `parent` and register it in the parent's child list.
    pub(crate) fn add_child(&mut self, parent: NodeId, coord: Coord) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            coord,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    pub(crate) fn coord(&self, id: NodeId) -> Coord {
        self.nodes[id.0].coord
    }
}
