use crate::hit_test::RectHitTestable;

/// Height of a node's title bar in graph-space units.
pub const NODE_TITLE_HEIGHT: f32 = 30.0;

/// Width used for a collapsed node's bounding box when the node reports no
/// explicit collapsed-width hint.
pub const NODE_COLLAPSED_WIDTH: f32 = 80.0;

/// Contract a host's node type must satisfy for group operations.
///
/// Implement this for your node data type to use it with [`GroupRegion`]
/// and [`GraphContainer`].
///
/// # Example
///
/// ```ignore
/// struct MyNode {
///     id: i32,
///     pos: (f32, f32),
///     size: (f32, f32),
///     collapsed: bool,
/// }
///
/// impl GraphNode for MyNode {
///     fn id(&self) -> i32 { self.id }
///     fn position(&self) -> (f32, f32) { self.pos }
///     fn set_position(&mut self, x: f32, y: f32) { self.pos = (x, y); }
///     fn size(&self) -> (f32, f32) { self.size }
///     fn is_collapsed(&self) -> bool { self.collapsed }
/// }
/// ```
///
/// [`GroupRegion`]: crate::GroupRegion
/// [`GraphContainer`]: crate::GraphContainer
pub trait GraphNode {
    /// Unique identifier for the node
    fn id(&self) -> i32;
    /// Top-left corner of the node body in graph space
    fn position(&self) -> (f32, f32);
    /// Move the node body to a new top-left corner
    fn set_position(&mut self, x: f32, y: f32);
    /// Nominal body size (width, height), excluding the title bar
    fn size(&self) -> (f32, f32);

    /// Whether the node renders a title bar above its body.
    ///
    /// Pass-through/reroute node kinds have no visible title bar; their
    /// bounding box starts at the body's own y.
    fn has_title_bar(&self) -> bool {
        true
    }

    /// Whether the node is collapsed to title-bar height
    fn is_collapsed(&self) -> bool {
        false
    }

    /// Explicit width of the collapsed rendering, when the node knows it.
    ///
    /// `None` means the collapsed bounding box falls back to
    /// [`NODE_COLLAPSED_WIDTH`].
    fn collapsed_width(&self) -> Option<f32> {
        None
    }

    /// Axis-aligned bounding box `(x, y, width, height)` covering the
    /// node's visible extent: the title bar sits above `position()`, and a
    /// collapsed node occupies only its title-bar height.
    fn node_bounding_rect(&self) -> (f32, f32, f32, f32) {
        let (x, y) = self.position();
        let (w, h) = self.size();
        let title = if self.has_title_bar() { NODE_TITLE_HEIGHT } else { 0.0 };
        if self.is_collapsed() {
            let cw = self.collapsed_width().unwrap_or(NODE_COLLAPSED_WIDTH);
            (x, y - title, cw, title.max(NODE_TITLE_HEIGHT))
        } else {
            (x, y - title, w, h + title)
        }
    }
}

/// Capability for notifying the rendering layer that state changed and the
/// corresponding surface needs a redraw.
///
/// `foreground` covers the interactive surface (nodes, selection),
/// `background` the static surface (groups, grid). Implementations just
/// record the request; the rendering layer polls and clears it.
pub trait RedrawNotifiable {
    fn mark_dirty(&mut self, foreground: bool, background: bool);
}

/// Simple node data structure implementing [`GraphNode`].
///
/// Use this for basic node storage or tests, or implement [`GraphNode`] on
/// your own type if you need additional fields.
#[derive(Clone, Debug)]
pub struct SimpleGraphNode {
    pub id: i32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub title_bar: bool,
    pub collapsed: bool,
    pub collapsed_width: Option<f32>,
    pub dirty_foreground: bool,
    pub dirty_background: bool,
}

impl SimpleGraphNode {
    /// Create a new node with a title bar, expanded.
    pub fn new(id: i32, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id,
            x,
            y,
            width,
            height,
            title_bar: true,
            collapsed: false,
            collapsed_width: None,
            dirty_foreground: false,
            dirty_background: false,
        }
    }

    /// Mark the node as a pass-through/reroute kind with no title bar.
    pub fn without_title_bar(mut self) -> Self {
        self.title_bar = false;
        self
    }

    /// Collapse the node, optionally with an explicit collapsed width.
    pub fn collapsed(mut self, width: Option<f32>) -> Self {
        self.collapsed = true;
        self.collapsed_width = width;
        self
    }
}

impl GraphNode for SimpleGraphNode {
    fn id(&self) -> i32 {
        self.id
    }
    fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }
    fn set_position(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
    fn has_title_bar(&self) -> bool {
        self.title_bar
    }
    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
    fn collapsed_width(&self) -> Option<f32> {
        self.collapsed_width
    }
}

impl RectHitTestable for SimpleGraphNode {
    fn bounding_rect(&self) -> (f32, f32, f32, f32) {
        self.node_bounding_rect()
    }
}

impl RedrawNotifiable for SimpleGraphNode {
    fn mark_dirty(&mut self, foreground: bool, background: bool) {
        self.dirty_foreground |= foreground;
        self.dirty_background |= background;
    }
}
