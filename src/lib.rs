//! # Graph Groups
//!
//! A generic library for spatial group regions in visual graph editors.
//! Group regions are colored, titled rectangles that visually gather the
//! nodes placed on top of them and drag those nodes along when moved.
//! Supports data flow diagrams, state machines, shader graphs, and any
//! visual node-based interface.
//!
//! ## Features
//!
//! - **Generic Design** - Works with any node data structure via the
//!   `GraphNode` trait
//! - **Snapshot Membership** - Groups capture member nodes by spatial
//!   overlap at explicit recomputation points, never continuously
//! - **Auto-Fit** - Grow a group to enclose its members plus any extra
//!   nodes, with padding and title-bar awareness
//! - **Pinning** - Lock a group in place through its open flags bag
//! - **Stable Persistence** - Serialize groups to a compact JSON record
//!   and load them back, tolerating legacy records
//!
//! ## Quick Start
//!
//! ```
//! use graph_groups::{GroupRegion, SimpleGraph, SimpleGraphNode};
//!
//! let mut graph = SimpleGraph::new();
//! graph.add_node(SimpleGraphNode::new(1, 60.0, 60.0, 120.0, 50.0));
//!
//! let mut group = GroupRegion::new("Preprocess");
//! group.set_position(&[0.0, 0.0]);
//! group.set_size(&[300.0, 200.0]);
//! let idx = graph.add_group(group);
//!
//! graph.recompute_group_members(idx);
//! graph.move_group(idx, 25.0, 0.0, false); // members ride along
//! assert_eq!(graph.nodes[0].x, 85.0);
//! ```
//!
//! ## Core Components
//!
//! - [`GroupRegion`] - The group rectangle: geometry, title, color,
//!   member snapshot, flags
//! - [`SimpleGraph`] - Basic container owning nodes and groups, with
//!   hit-test and drag wrappers
//! - [`GroupRecord`] - Stable persisted form with JSON round-tripping
//!
//! ## Traits
//!
//! - [`GraphNode`] - Contract a host's node type satisfies to take part
//!   in group operations
//! - [`GraphContainer`] - Contract for the collaborator owning the node
//!   list
//! - [`RectHitTestable`] - Shared point-in-bounds capability
//! - [`RedrawNotifiable`] - Dirty-surface notification capability

pub mod graph;
pub mod group;
pub mod hit_test;
pub mod node;
pub mod palette;
pub mod record;

// Re-export traits and types
pub use graph::{GraphContainer, SimpleGraph};
pub use group::{
    GroupRegion, DEFAULT_FIT_PADDING, DEFAULT_GROUP_FONT_SIZE, GROUP_MIN_HEIGHT, GROUP_MIN_WIDTH,
};
pub use hit_test::{point_in_rect, rects_overlap, RectHitTestable};
pub use node::{
    GraphNode, RedrawNotifiable, SimpleGraphNode, NODE_COLLAPSED_WIDTH, NODE_TITLE_HEIGHT,
};
pub use palette::{default_group_color, PaletteEntry, FALLBACK_GROUP_COLOR, PALETTE};
pub use record::{GroupRecord, RecordError};
