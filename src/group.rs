use log::{debug, trace};
use serde_json::{Map, Value};

use crate::hit_test::{point_in_rect, rects_overlap, RectHitTestable};
use crate::node::{GraphNode, RedrawNotifiable, NODE_TITLE_HEIGHT};
use crate::palette;

/// Minimum group width enforced by the clamped size setter.
pub const GROUP_MIN_WIDTH: f32 = 140.0;
/// Minimum group height enforced by the clamped size setter.
pub const GROUP_MIN_HEIGHT: f32 = 80.0;
/// Label font size used when a group does not carry its own.
pub const DEFAULT_GROUP_FONT_SIZE: f32 = 24.0;
/// Default padding for [`GroupRegion::fit_around`].
pub const DEFAULT_FIT_PADDING: f32 = 10.0;

/// Title-bar height is derived from the label font size, never stored.
const TITLEBAR_FONT_FACTOR: f32 = 1.4;

/// A rectangular, labeled region in graph space that visually clusters a
/// set of nodes.
///
/// The geometry lives in a single 4-slot backing buffer (slot 0 = x,
/// 1 = y, 2 = width, 3 = height); position and size accessors are views
/// over that buffer. Membership is a cached snapshot: it reflects the last
/// [`recompute_members`] call, not current node positions, and
/// [`move_by`] drags exactly that snapshot. This is deliberate - rescanning
/// on every move would change interactive drag behavior.
///
/// [`recompute_members`]: GroupRegion::recompute_members
/// [`move_by`]: GroupRegion::move_by
#[derive(Clone, Debug)]
pub struct GroupRegion {
    /// Backing buffer: `[x, y, width, height]` in graph-space units.
    bounding: [f32; 4],
    /// Display label.
    pub title: String,
    /// Fill/stroke color, `#rrggbb` or `#rgb`.
    pub color: String,
    /// Stored label font size; zero means "unset", see [`font_size`].
    ///
    /// [`font_size`]: GroupRegion::font_size
    font_size: f32,
    /// Node ids considered inside the group as of the last recomputation.
    members: Vec<i32>,
    /// Open attribute bag; the `"pinned"` key gates move/resize.
    flags: Map<String, Value>,
    /// Transient UI-highlight flag, no invariants.
    pub selected: bool,
    dirty_foreground: bool,
    dirty_background: bool,
}

impl Default for GroupRegion {
    fn default() -> Self {
        Self::new("Group")
    }
}

impl GroupRegion {
    /// Create a group with the default 140x80 box at (10, 10).
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            bounding: [10.0, 10.0, GROUP_MIN_WIDTH, GROUP_MIN_HEIGHT],
            title: title.into(),
            color: palette::default_group_color().to_string(),
            font_size: DEFAULT_GROUP_FONT_SIZE,
            members: Vec::new(),
            flags: Map::new(),
            selected: false,
            dirty_foreground: false,
            dirty_background: false,
        }
    }

    // ------------------------------------------------------------------
    // Geometry accessors
    // ------------------------------------------------------------------

    /// The raw 4-slot geometry buffer `[x, y, width, height]`.
    ///
    /// Drawing code reads this directly; treat it as a live view and copy
    /// before retaining across a mutation.
    pub fn bounding(&self) -> &[f32; 4] {
        &self.bounding
    }

    /// Top-left corner in graph space.
    pub fn position(&self) -> (f32, f32) {
        (self.bounding[0], self.bounding[1])
    }

    /// Overwrite the position slots. Input shorter than two components is
    /// silently ignored. No clamping.
    pub fn set_position(&mut self, pos: &[f32]) {
        if pos.len() < 2 {
            return;
        }
        self.bounding[0] = pos[0];
        self.bounding[1] = pos[1];
        self.mark_dirty(true, true);
    }

    /// Width and height.
    pub fn size(&self) -> (f32, f32) {
        (self.bounding[2], self.bounding[3])
    }

    /// Overwrite the size slots, clamping to the 140x80 minimum. Input
    /// shorter than two components is silently ignored.
    ///
    /// This is the only enforcement point for the minimum-size invariant;
    /// internal fast paths that write the slots directly ([`resize`],
    /// [`move_by`]) are responsible for sane values themselves.
    ///
    /// [`resize`]: GroupRegion::resize
    /// [`move_by`]: GroupRegion::move_by
    pub fn set_size(&mut self, size: &[f32]) {
        if size.len() < 2 {
            return;
        }
        self.bounding[2] = size[0].max(GROUP_MIN_WIDTH);
        self.bounding[3] = size[1].max(GROUP_MIN_HEIGHT);
        self.mark_dirty(true, true);
    }

    /// Effective label font size: the stored value, or the default
    /// constant when the stored value is zero/unset.
    pub fn font_size(&self) -> f32 {
        if self.font_size > 0.0 {
            self.font_size
        } else {
            DEFAULT_GROUP_FONT_SIZE
        }
    }

    pub fn set_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
        self.mark_dirty(true, true);
    }

    /// Height of the title bar at the top of the group box, derived from
    /// the label font size.
    pub fn titlebar_height(&self) -> f32 {
        self.font_size() * TITLEBAR_FONT_FACTOR
    }

    /// Node ids inside the group as of the last [`recompute_members`] call.
    ///
    /// [`recompute_members`]: GroupRegion::recompute_members
    pub fn members(&self) -> &[i32] {
        &self.members
    }

    /// The open attribute bag. Unknown keys survive save/load untouched.
    pub fn flags(&self) -> &Map<String, Value> {
        &self.flags
    }

    pub fn flags_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.flags
    }

    pub(crate) fn replace_flags(&mut self, flags: Map<String, Value>) {
        self.flags = flags;
    }

    pub(crate) fn set_raw_font_size(&mut self, font_size: f32) {
        self.font_size = font_size;
    }

    pub(crate) fn raw_font_size(&self) -> f32 {
        self.font_size
    }

    pub(crate) fn set_bounding(&mut self, bounding: [f32; 4]) {
        self.bounding = bounding;
    }

    // ------------------------------------------------------------------
    // Containment & membership
    // ------------------------------------------------------------------

    /// True iff the point lies within the title-bar strip at the top of
    /// the group box (inclusive boundaries).
    pub fn is_point_in_titlebar(&self, px: f32, py: f32) -> bool {
        point_in_rect(
            px,
            py,
            self.bounding[0],
            self.bounding[1],
            self.bounding[2],
            self.titlebar_height(),
        )
    }

    /// Recompute the member snapshot from scratch.
    ///
    /// A node is a member iff its bounding box has a positive-area
    /// intersection with the group's box. Previous membership is
    /// discarded, nothing is merged, and no node is mutated. O(n) over the
    /// supplied node list.
    pub fn recompute_members<N: GraphNode>(&mut self, nodes: &[N]) {
        let rect = self.rect();
        self.members.clear();
        for node in nodes {
            if rects_overlap(node.node_bounding_rect(), rect) {
                self.members.push(node.id());
            }
        }
        trace!(
            "group '{}': recomputed members, {} of {} nodes inside",
            self.title,
            self.members.len(),
            nodes.len()
        );
    }

    // ------------------------------------------------------------------
    // Auto-fit
    // ------------------------------------------------------------------

    /// Grow the group to exactly enclose its current members plus the
    /// nodes named in `extra`, with `padding` graph units on every side
    /// and the title bar sitting above the topmost node's visible area.
    ///
    /// Does nothing when there are no members and `extra` is empty. Ids
    /// that resolve to no node in `nodes` are skipped. Membership itself
    /// is not updated; call [`recompute_members`] afterwards if the
    /// snapshot matters.
    ///
    /// [`recompute_members`]: GroupRegion::recompute_members
    pub fn fit_around<N: GraphNode>(&mut self, nodes: &[N], extra: &[i32], padding: f32) {
        if self.members.is_empty() && extra.is_empty() {
            return;
        }

        let mut left = f32::MAX;
        let mut top = f32::MAX;
        let mut right = f32::MIN;
        let mut bottom = f32::MIN;
        let mut any = false;

        for &id in self.members.iter().chain(extra) {
            let Some(node) = nodes.iter().find(|n| n.id() == id) else {
                continue;
            };
            let (x, y) = node.position();
            let (w, h) = node.size();

            // Reroute-style nodes have no title bar above their body.
            let node_top = if node.has_title_bar() { y - NODE_TITLE_HEIGHT } else { y };
            // Collapsed nodes occupy only their title-bar height, and
            // their collapsed width when they report one.
            let node_bottom = if node.is_collapsed() {
                node_top + NODE_TITLE_HEIGHT
            } else {
                y + h
            };
            let node_right = match node.collapsed_width() {
                Some(cw) if node.is_collapsed() => x + cw.round(),
                _ => x + w,
            };

            left = left.min(x);
            top = top.min(node_top);
            right = right.max(node_right);
            bottom = bottom.max(node_bottom);
            any = true;
        }

        if !any {
            return;
        }

        let titlebar = self.titlebar_height();
        self.set_position(&[left - padding, top - padding - titlebar]);
        self.set_size(&[
            right - left + padding * 2.0,
            bottom - top + padding * 2.0 + titlebar,
        ]);
        debug!(
            "group '{}': fitted to [{}, {}, {}, {}]",
            self.title, self.bounding[0], self.bounding[1], self.bounding[2], self.bounding[3]
        );
    }

    // ------------------------------------------------------------------
    // Pin-gated mutation
    // ------------------------------------------------------------------

    /// Freeze the group's position and size against [`move_by`] and
    /// [`resize`]. Title, color and font-size edits stay allowed.
    ///
    /// [`move_by`]: GroupRegion::move_by
    /// [`resize`]: GroupRegion::resize
    pub fn pin(&mut self) {
        self.flags.insert("pinned".to_string(), Value::Bool(true));
    }

    pub fn unpin(&mut self) {
        self.flags.remove("pinned");
    }

    /// Pin state, derived from a truthy `"pinned"` entry in the flag bag.
    pub fn is_pinned(&self) -> bool {
        self.flags.get("pinned").map(value_is_truthy).unwrap_or(false)
    }

    /// Set the size slots directly. Silent no-op while pinned.
    ///
    /// This path intentionally bypasses the minimum-size clamp of
    /// [`set_size`]: interactive drag-resize already enforces minimums at
    /// the UI layer and may pass smaller interim values.
    ///
    /// [`set_size`]: GroupRegion::set_size
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.is_pinned() {
            return;
        }
        self.bounding[2] = width;
        self.bounding[3] = height;
        self.mark_dirty(true, true);
    }

    /// Translate the group, dragging the current member snapshot along
    /// unless `skip_members` is set. Silent no-op while pinned.
    ///
    /// Only nodes that were members as of the last
    /// [`recompute_members`] call are dragged; nodes that entered the
    /// region afterwards without a recomputation stay put.
    ///
    /// [`recompute_members`]: GroupRegion::recompute_members
    pub fn move_by<N: GraphNode>(
        &mut self,
        dx: f32,
        dy: f32,
        skip_members: bool,
        nodes: &mut [N],
    ) {
        if self.is_pinned() {
            return;
        }
        self.bounding[0] += dx;
        self.bounding[1] += dy;
        self.mark_dirty(true, true);
        if skip_members {
            return;
        }
        for &id in &self.members {
            if let Some(node) = nodes.iter_mut().find(|n| n.id() == id) {
                let (x, y) = node.position();
                node.set_position(x + dx, y + dy);
            }
        }
    }

    // ------------------------------------------------------------------
    // Redraw bookkeeping
    // ------------------------------------------------------------------

    /// Pending redraw request as `(foreground, background)`.
    pub fn dirty(&self) -> (bool, bool) {
        (self.dirty_foreground, self.dirty_background)
    }

    /// Read and clear the pending redraw request.
    pub fn take_dirty(&mut self) -> (bool, bool) {
        let d = self.dirty();
        self.dirty_foreground = false;
        self.dirty_background = false;
        d
    }

    fn rect(&self) -> (f32, f32, f32, f32) {
        (
            self.bounding[0],
            self.bounding[1],
            self.bounding[2],
            self.bounding[3],
        )
    }
}

impl RectHitTestable for GroupRegion {
    fn bounding_rect(&self) -> (f32, f32, f32, f32) {
        self.rect()
    }
}

impl RedrawNotifiable for GroupRegion {
    fn mark_dirty(&mut self, foreground: bool, background: bool) {
        self.dirty_foreground |= foreground;
        self.dirty_background |= background;
    }
}

/// JS-style truthiness for flag values: `false`, `0`, `""` and `null` do
/// not count as set.
pub(crate) fn value_is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
