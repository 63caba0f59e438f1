//! Search nodes, their ordering key, and the per-search node arena.

use std::ops::Index;

use tileswap_kernel::board::Board;

/// Index of a node in its [`NodeArena`].
///
/// Ids are assigned in creation order, so they double as the deterministic
/// tie-breaker for equal f-values (older node first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// The ordering key `(g + h, h)`.
///
/// Lower is better; ties on `g + h` go to the smaller `h` (the node believed
/// closer to the goal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FValue {
    /// `g + h`.
    pub total: u32,
    /// Heuristic estimate.
    pub h: u32,
}

impl FValue {
    #[must_use]
    pub const fn new(g: u32, h: u32) -> Self {
        Self {
            total: g.saturating_add(h),
            h,
        }
    }

    /// `g`, recovered from the key.
    #[must_use]
    pub const fn g(self) -> u32 {
        self.total - self.h
    }
}

/// A board together with its path metadata.
///
/// Identity for deduplication is the board alone; depth, parent and f-value
/// vary between nodes holding equal boards.
#[derive(Debug, Clone)]
pub struct SearchNode {
    pub board: Board,
    /// Swaps from the root (root = 0).
    pub depth: u32,
    /// Generating node (`None` for root). Only followed upwards.
    pub parent: Option<NodeId>,
    /// Cached `(g + h, h)`. Uninformed strategies use `h = 0`.
    pub f: FValue,
}

impl SearchNode {
    #[must_use]
    pub fn root(board: Board, h: u32) -> Self {
        Self {
            board,
            depth: 0,
            parent: None,
            f: FValue::new(0, h),
        }
    }

    #[must_use]
    pub fn child(board: Board, parent: NodeId, depth: u32, h: u32) -> Self {
        Self {
            board,
            depth,
            parent: Some(parent),
            f: FValue::new(depth, h),
        }
    }
}

/// Append-only storage for every node created by one search call.
///
/// Parents are referenced by [`NodeId`], so following a path upwards never
/// needs shared ownership.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node and return its id.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SearchNode> {
        self.nodes.get(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ids from the root down to `id`, inclusive.
    #[must_use]
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = Some(id);

        while let Some(node_id) = current {
            path.push(node_id);
            current = self[node_id].parent;
        }

        path.reverse();
        path
    }
}

impl Index<NodeId> for NodeArena {
    type Output = SearchNode;

    fn index(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }
}
