// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pointer to node resolution

use crate::layout::NodeIndex;
use crate::surface::Point;

/// Find the node under `pointer`.
///
/// Returns the first node, in index order, whose squared distance to the
/// pointer is strictly below `hit_radius` squared. When hit circles overlap
/// the lower index wins even if a later node is closer.
pub fn node_at(nodes: &[Point], pointer: Point, hit_radius: f32) -> Option<NodeIndex> {
    let threshold = hit_radius * hit_radius;
    nodes
        .iter()
        .position(|node| pointer.distance_squared(*node) < threshold)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_position_hits() {
        let nodes = [Point::new(10.0, 10.0), Point::new(100.0, 10.0)];
        assert_eq!(node_at(&nodes, Point::new(100.0, 10.0), 5.0), Some(1));
    }

    #[test]
    fn test_boundary_is_a_miss() {
        let nodes = [Point::new(0.0, 0.0)];
        assert_eq!(node_at(&nodes, Point::new(5.0, 0.0), 5.0), None);
        assert_eq!(node_at(&nodes, Point::new(4.9, 0.0), 5.0), Some(0));
    }

    #[test]
    fn test_first_match_wins_over_closest() {
        let nodes = [Point::new(0.0, 0.0), Point::new(6.0, 0.0)];
        // Closer to node 1 but inside both circles
        assert_eq!(node_at(&nodes, Point::new(5.0, 0.0), 10.0), Some(0));
    }

    #[test]
    fn test_empty_board() {
        assert_eq!(node_at(&[], Point::new(0.0, 0.0), 10.0), None);
    }
}
