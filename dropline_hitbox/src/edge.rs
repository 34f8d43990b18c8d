// Copyright 2025 the Dropline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closest-edge resolution for rectangular drop targets.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Rect};

/// One of the four sides of an axis-aligned rectangle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    /// The top side (`y0`).
    Top,
    /// The right side (`x1`).
    Right,
    /// The bottom side (`y1`).
    Bottom,
    /// The left side (`x0`).
    Left,
}

impl Edge {
    /// All four edges, for the common "any edge is allowed" query.
    pub const ALL: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];
}

/// Returns the edge of `rect` nearest to `point`, considering only the edges
/// listed in `allowed`.
///
/// Distance to an edge is measured along the single axis perpendicular to it
/// (top/bottom use the vertical coordinate, left/right the horizontal one),
/// not as Euclidean distance to the edge segment. Distances are absolute, so
/// points far outside the rectangle still resolve to the logically nearest
/// edge.
///
/// Ties keep the edge listed **first** in `allowed`; repeated calls with the
/// same inputs always return the same edge. An empty `allowed` slice returns
/// `None`.
///
/// ```rust
/// use dropline_hitbox::{Edge, closest_edge};
/// use kurbo::{Point, Rect};
///
/// let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
/// let edge = closest_edge(rect, Point::new(50.0, 95.0), &Edge::ALL);
/// assert_eq!(edge, Some(Edge::Bottom));
/// ```
#[must_use]
pub fn closest_edge(rect: Rect, point: Point, allowed: &[Edge]) -> Option<Edge> {
    let mut best: Option<(Edge, f64)> = None;
    for &edge in allowed {
        let distance = match edge {
            Edge::Top => (point.y - rect.y0).abs(),
            Edge::Bottom => (point.y - rect.y1).abs(),
            Edge::Left => (point.x - rect.x0).abs(),
            Edge::Right => (point.x - rect.x1).abs(),
        };
        // Strict comparison keeps the earlier edge on ties.
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((edge, distance)),
        }
    }
    best.map(|(edge, _)| edge)
}
