//! # grid_distance_field
//!
//! Shortest-path distance fields on a 4-connected grid of blocked and open cells.
//! A [DistanceField] is built once per target with a
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) from the
//! target, after which [reconstruct_path] recovers a shortest path from any source by
//! greedily descending the field. Both operations are pure functions of their inputs;
//! the [Navigator] bundles them for callers that edit a grid interactively.
//!
//! Pre-computed [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! are available through [Components] to answer reachability queries without building a
//! field.
pub mod components;
pub mod distance_field;
pub mod error;
pub mod generate;
pub mod grid;
pub mod navigator;
pub mod path;

use grid_util::point::Point;
use smallvec::SmallVec;

pub use crate::components::Components;
pub use crate::distance_field::{build_distance_field, DistanceField};
pub use crate::error::{FieldError, Result};
pub use crate::grid::Grid;
pub use crate::navigator::Navigator;
pub use crate::path::{reconstruct_path, Path, PathOutcome};

/// A grid coordinate. `x` indexes columns and `y` indexes rows, both starting at 0.
pub type Cell = Point;

/// Offsets of the 4-neighbourhood in the order +x, -x, +y, -y. Both the field expansion
/// and the tie-break during path descent examine neighbours in this order.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four axis-aligned neighbours of `cell` in [NEIGHBOUR_OFFSETS] order. Bounds are not
/// checked here.
pub fn neumann_neighbours(cell: &Cell) -> SmallVec<[Cell; 4]> {
    NEIGHBOUR_OFFSETS
        .iter()
        .map(|&(dx, dy)| Point::new(cell.x + dx, cell.y + dy))
        .collect()
}

/// Whether two cells share an edge.
pub fn adjacent(a: &Cell, b: &Cell) -> bool {
    (a.x - b.x).abs() + (a.y - b.y).abs() == 1
}
