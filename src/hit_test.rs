/// Inclusive axis-aligned rectangle test.
///
/// Boundary points count as inside, which is what title-bar hit testing
/// wants: clicking exactly on the edge of the bar still starts a drag.
pub fn point_in_rect(px: f32, py: f32, x: f32, y: f32, width: f32, height: f32) -> bool {
    px >= x && px <= x + width && py >= y && py <= y + height
}

/// Positive-area intersection test for two axis-aligned rectangles.
///
/// Rectangles that merely touch along an edge do not overlap, and a
/// rectangle with zero width or height never overlaps anything.
pub fn rects_overlap(a: (f32, f32, f32, f32), b: (f32, f32, f32, f32)) -> bool {
    let (ax, ay, aw, ah) = a;
    let (bx, by, bw, bh) = b;
    ax < bx + bw && ax + aw > bx && ay < by + bh && ay + ah > by
}

/// Capability for anything with an axis-aligned bounding rectangle that can
/// be hit-tested against a point.
///
/// Nodes and group regions implement this independently; both share the
/// same [`point_in_rect`] predicate through the provided method rather than
/// one borrowing the other's implementation.
pub trait RectHitTestable {
    /// Bounding rectangle as `(x, y, width, height)` in graph space.
    fn bounding_rect(&self) -> (f32, f32, f32, f32);

    /// True iff the point lies within the bounding rectangle (inclusive).
    fn is_point_inside(&self, px: f32, py: f32) -> bool {
        let (x, y, w, h) = self.bounding_rect();
        point_in_rect(px, py, x, y, w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Box4(f32, f32, f32, f32);

    impl RectHitTestable for Box4 {
        fn bounding_rect(&self) -> (f32, f32, f32, f32) {
            (self.0, self.1, self.2, self.3)
        }
    }

    // ========================================================================
    // point_in_rect() - Inclusive Point Test
    // ========================================================================

    #[test]
    fn test_point_in_rect_interior() {
        assert!(point_in_rect(50.0, 50.0, 0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn test_point_in_rect_all_corners_inclusive() {
        assert!(point_in_rect(0.0, 0.0, 0.0, 0.0, 100.0, 80.0));
        assert!(point_in_rect(100.0, 0.0, 0.0, 0.0, 100.0, 80.0));
        assert!(point_in_rect(0.0, 80.0, 0.0, 0.0, 100.0, 80.0));
        assert!(point_in_rect(100.0, 80.0, 0.0, 0.0, 100.0, 80.0));
    }

    #[test]
    fn test_point_in_rect_just_outside() {
        assert!(!point_in_rect(-1.0, 0.0, 0.0, 0.0, 100.0, 80.0));
        assert!(!point_in_rect(101.0, 0.0, 0.0, 0.0, 100.0, 80.0));
        assert!(!point_in_rect(0.0, -1.0, 0.0, 0.0, 100.0, 80.0));
        assert!(!point_in_rect(0.0, 81.0, 0.0, 0.0, 100.0, 80.0));
    }

    #[test]
    fn test_point_in_rect_negative_origin() {
        assert!(point_in_rect(-50.0, -50.0, -100.0, -100.0, 100.0, 100.0));
        assert!(!point_in_rect(50.0, 50.0, -100.0, -100.0, 100.0, 100.0));
    }

    // ========================================================================
    // rects_overlap() - Positive-Area Intersection
    // ========================================================================

    #[test]
    fn test_rects_overlap_partial() {
        assert!(rects_overlap(
            (0.0, 0.0, 100.0, 100.0),
            (50.0, 50.0, 100.0, 100.0)
        ));
    }

    #[test]
    fn test_rects_overlap_containment() {
        assert!(rects_overlap(
            (0.0, 0.0, 100.0, 100.0),
            (25.0, 25.0, 10.0, 10.0)
        ));
    }

    #[test]
    fn test_rects_overlap_touching_edge_is_not_overlap() {
        // Shared vertical edge at x = 100 - zero intersection area
        assert!(!rects_overlap(
            (0.0, 0.0, 100.0, 100.0),
            (100.0, 0.0, 100.0, 100.0)
        ));
        // Shared horizontal edge at y = 100
        assert!(!rects_overlap(
            (0.0, 0.0, 100.0, 100.0),
            (0.0, 100.0, 100.0, 100.0)
        ));
    }

    #[test]
    fn test_rects_overlap_disjoint() {
        assert!(!rects_overlap(
            (0.0, 0.0, 10.0, 10.0),
            (500.0, 500.0, 10.0, 10.0)
        ));
    }

    #[test]
    fn test_rects_overlap_zero_area_never_overlaps() {
        assert!(!rects_overlap(
            (50.0, 50.0, 0.0, 100.0),
            (0.0, 0.0, 100.0, 100.0)
        ));
        assert!(!rects_overlap(
            (50.0, 50.0, 100.0, 0.0),
            (0.0, 0.0, 100.0, 100.0)
        ));
    }

    #[test]
    fn test_rects_overlap_is_symmetric() {
        let a = (0.0, 0.0, 60.0, 60.0);
        let b = (40.0, 40.0, 60.0, 60.0);
        assert_eq!(rects_overlap(a, b), rects_overlap(b, a));
    }

    // ========================================================================
    // RectHitTestable - Provided is_point_inside()
    // ========================================================================

    #[test]
    fn test_is_point_inside_uses_bounding_rect() {
        let item = Box4(10.0, 20.0, 100.0, 50.0);
        assert!(item.is_point_inside(10.0, 20.0));
        assert!(item.is_point_inside(110.0, 70.0));
        assert!(!item.is_point_inside(111.0, 70.0));
        assert!(!item.is_point_inside(10.0, 19.0));
    }
}
