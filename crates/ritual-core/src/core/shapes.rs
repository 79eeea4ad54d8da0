//! The fixed target shapes: four corner triangles and the bonus inner
//! diamond, plus the trace-completion scans over a player's line set.

use crate::core::grid::GridPoint;
use crate::core::lines::{LineSet, Segment};

/// An ordered closed polygon over grid points. Consecutive points,
/// including the wraparound from last back to first, define its edges.
#[derive(Debug, Clone, Copy)]
pub struct Shape {
    points: &'static [GridPoint],
}

impl Shape {
    pub const fn new(points: &'static [GridPoint]) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GridPoint] {
        self.points
    }

    /// The required edges, wraparound included.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        (0..self.points.len()).map(|i| {
            Segment::new(self.points[i], self.points[(i + 1) % self.points.len()])
        })
    }

    /// Whether every edge of the shape is present in `lines`, checked in
    /// both orientations. Full rescan each call.
    pub fn is_traced(&self, lines: &LineSet) -> bool {
        self.edges().all(|edge| lines.contains_edge(&edge))
    }

    /// Whether the shape has at least one vertex in common with `segment`.
    pub fn shares_vertex(&self, segment: &Segment) -> bool {
        self.points.iter().any(|&p| segment.touches(p))
    }
}

/// The four corner triangles the player must trace.
pub const CORNER_TRIANGLES: [Shape; 4] = [
    Shape::new(&[
        GridPoint::new(1, 1),
        GridPoint::new(0, 1),
        GridPoint::new(1, 0),
    ]),
    Shape::new(&[
        GridPoint::new(3, 0),
        GridPoint::new(3, 1),
        GridPoint::new(4, 1),
    ]),
    Shape::new(&[
        GridPoint::new(0, 3),
        GridPoint::new(1, 3),
        GridPoint::new(1, 4),
    ]),
    Shape::new(&[
        GridPoint::new(3, 3),
        GridPoint::new(4, 3),
        GridPoint::new(3, 4),
    ]),
];

/// The bonus shape revealed once all four triangles are traced. The
/// wraparound edge (3,2)→(2,1) closes the diamond.
pub const INNER_DIAMOND: Shape = Shape::new(&[
    GridPoint::new(2, 1),
    GridPoint::new(1, 2),
    GridPoint::new(2, 3),
    GridPoint::new(3, 2),
]);

/// The grid center, marked once the diamond is revealed.
pub const CENTER_DOT: GridPoint = GridPoint::new(2, 2);
