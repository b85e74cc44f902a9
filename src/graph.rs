use log::trace;

use crate::group::{GroupRegion, DEFAULT_FIT_PADDING};
use crate::hit_test::RectHitTestable;
use crate::node::{GraphNode, SimpleGraphNode};

/// Contract for the graph collaborator that owns the node list.
///
/// Group operations only ever *read* the node list (membership
/// recomputation, auto-fit) or translate individual nodes (member drag);
/// they never add or remove nodes.
pub trait GraphContainer {
    type Node: GraphNode;

    /// All nodes currently in the graph, in insertion order.
    fn nodes(&self) -> &[Self::Node];

    fn nodes_mut(&mut self) -> &mut [Self::Node];

    /// Find a node by id (linear scan; node counts here are small).
    fn node(&self, id: i32) -> Option<&Self::Node> {
        self.nodes().iter().find(|n| n.id() == id)
    }

    fn node_mut(&mut self, id: i32) -> Option<&mut Self::Node> {
        self.nodes_mut().iter_mut().find(|n| n.id() == id)
    }
}

/// Basic graph container owning nodes and group regions.
///
/// Use this directly for simple hosts, or implement [`GraphContainer`] on
/// your own graph type and manage groups yourself. The wrappers here exist
/// mostly to split the borrow between a group and the node list it drags.
#[derive(Clone, Debug, Default)]
pub struct SimpleGraph {
    pub nodes: Vec<SimpleGraphNode>,
    pub groups: Vec<GroupRegion>,
}

impl SimpleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: SimpleGraphNode) {
        self.nodes.push(node);
    }

    /// Remove a node by id. Stale group member snapshots may keep the id
    /// until their next recomputation; dangling ids are skipped by group
    /// operations.
    pub fn remove_node(&mut self, id: i32) {
        self.nodes.retain(|n| n.id() != id);
    }

    /// Add a group and return its index in the group list.
    pub fn add_group(&mut self, group: GroupRegion) -> usize {
        self.groups.push(group);
        self.groups.len() - 1
    }

    pub fn remove_group(&mut self, index: usize) -> Option<GroupRegion> {
        if index < self.groups.len() {
            Some(self.groups.remove(index))
        } else {
            None
        }
    }

    /// Topmost group whose box contains the point, if any.
    ///
    /// Later groups draw above earlier ones, so the scan runs back to
    /// front.
    pub fn group_on_point(&self, x: f32, y: f32) -> Option<usize> {
        self.groups
            .iter()
            .rposition(|group| group.is_point_inside(x, y))
    }

    /// Topmost group whose title bar contains the point, if any. This is
    /// the hit test for starting a group drag.
    pub fn group_titlebar_on_point(&self, x: f32, y: f32) -> Option<usize> {
        self.groups
            .iter()
            .rposition(|group| group.is_point_in_titlebar(x, y))
    }

    /// Recompute the member snapshot of one group.
    pub fn recompute_group_members(&mut self, index: usize) {
        let Self { nodes, groups } = self;
        if let Some(group) = groups.get_mut(index) {
            group.recompute_members(nodes);
        }
    }

    /// Recompute the member snapshots of every group. Typically called
    /// after a batch edit, before any group drag.
    pub fn recompute_all_group_members(&mut self) {
        let Self { nodes, groups } = self;
        for group in groups.iter_mut() {
            group.recompute_members(nodes);
        }
        trace!("recomputed members for {} groups", groups.len());
    }

    /// Translate a group, dragging its current member snapshot unless
    /// `skip_members` is set. No-op on a pinned group or a bad index.
    pub fn move_group(&mut self, index: usize, dx: f32, dy: f32, skip_members: bool) {
        let Self { nodes, groups } = self;
        if let Some(group) = groups.get_mut(index) {
            group.move_by(dx, dy, skip_members, nodes);
        }
    }

    /// Grow a group to enclose its members plus the given nodes, with the
    /// default padding.
    pub fn fit_group_around(&mut self, index: usize, extra: &[i32]) {
        let Self { nodes, groups } = self;
        if let Some(group) = groups.get_mut(index) {
            group.fit_around(nodes, extra, DEFAULT_FIT_PADDING);
        }
    }
}

impl GraphContainer for SimpleGraph {
    type Node = SimpleGraphNode;

    fn nodes(&self) -> &[SimpleGraphNode] {
        &self.nodes
    }

    fn nodes_mut(&mut self) -> &mut [SimpleGraphNode] {
        &mut self.nodes
    }
}
