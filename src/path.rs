use itertools::Itertools;
use log::{error, info};

use crate::distance_field::DistanceField;
use crate::error::{FieldError, Result};
use crate::grid::Grid;
use crate::{adjacent, Cell};

/// A shortest path: starts at the source, ends at the target, and every step moves to a
/// 4-adjacent open cell one hop closer to the target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Path {
    cells: Vec<Cell>,
}

impl Path {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<Cell> {
        self.cells
    }

    /// Number of cells, source and target included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of moves, one less than [len](Self::len).
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<Cell> {
        self.cells.first().copied()
    }

    pub fn target(&self) -> Option<Cell> {
        self.cells.last().copied()
    }

    /// Checks that the path is non-empty, stays on open cells of `grid` and only makes
    /// 4-adjacent moves.
    pub fn is_valid_on(&self, grid: &Grid) -> bool {
        !self.cells.is_empty()
            && self.cells.iter().all(|c| grid.can_move_to(c))
            && self.cells.iter().tuple_windows().all(|(a, b)| adjacent(a, b))
    }
}

impl IntoIterator for Path {
    type Item = Cell;
    type IntoIter = std::vec::IntoIter<Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

/// Result of a path query. A source that cannot reach the target is an ordinary outcome,
/// not an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOutcome {
    Found(Path),
    Unreachable,
}

impl PathOutcome {
    pub fn is_reachable(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }
}

fn inconsistent(cell: Cell) -> FieldError {
    error!("Distance field does not descend at {}, was the grid changed?", cell);
    if cfg!(debug_assertions) {
        panic!("distance field is inconsistent with the grid at {}", cell);
    }
    FieldError::Inconsistent { cell }
}

/// Follows `field` downhill from `source` to `target`. At every cell the open neighbour
/// with the smallest distance is taken, the first in +x, -x, +y, -y order winning ties,
/// so the returned path has exactly `field[source]` steps.
///
/// Source and target must be open cells of `grid`. If `source` is not in the field,
/// [PathOutcome::Unreachable] is returned. A field that was built for another target or
/// that does not descend by one at every step (for instance because the grid changed
/// since it was built) is reported as [FieldError::Inconsistent]; debug builds panic
/// instead.
pub fn reconstruct_path(
    grid: &Grid,
    field: &DistanceField,
    source: Cell,
    target: Cell,
) -> Result<PathOutcome> {
    grid.check_bounds(&source)?;
    grid.check_bounds(&target)?;
    grid.check_open(&source)?;
    grid.check_open(&target)?;
    if field.target() != target || field.get(&target) != Some(0) {
        return Err(inconsistent(target));
    }
    let Some(mut distance) = field.get(&source) else {
        info!("{} is not reachable from {}", target, source);
        return Ok(PathOutcome::Unreachable);
    };

    let mut cells = Vec::with_capacity(distance as usize + 1);
    let mut current = source;
    cells.push(current);
    while current != target {
        let next = grid
            .open_neighbours(&current)
            .into_iter()
            .filter_map(|n| field.get(&n).map(|d| (n, d)))
            // First minimum wins ties.
            .min_by_key(|&(_, d)| d);
        match next {
            Some((n, d)) if d + 1 == distance => {
                current = n;
                distance = d;
                cells.push(current);
            }
            _ => return Err(inconsistent(current)),
        }
    }
    Ok(PathOutcome::Found(Path { cells }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_distance_field;
    use grid_util::point::Point;

    fn points(coords: &[(i32, i32)]) -> Vec<Cell> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn open_three_by_three_prefers_plus_x() {
        let grid = Grid::new(3, 3).unwrap();
        let target = Point::new(2, 2);
        let field = build_distance_field(&grid, target).unwrap();
        let path = reconstruct_path(&grid, &field, Point::new(0, 0), target)
            .unwrap()
            .into_path()
            .unwrap();
        assert_eq!(path.cells(), points(&[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2)]));
        assert_eq!(path.steps(), 4);
        assert!(path.is_valid_on(&grid));
    }

    #[test]
    fn single_cell_grid() {
        let grid = Grid::new(1, 1).unwrap();
        let p = Point::new(0, 0);
        let field = build_distance_field(&grid, p).unwrap();
        assert_eq!(field.len(), 1);
        let path = reconstruct_path(&grid, &field, p, p).unwrap().into_path().unwrap();
        assert_eq!(path.cells(), &[p]);
        assert_eq!(path.steps(), 0);
    }

    #[test]
    fn path_around_wall() {
        // |S#T|
        // |.#.|
        // |...|
        let grid: Grid = ".#.\n.#.\n...".parse().unwrap();
        let target = Point::new(2, 0);
        let field = build_distance_field(&grid, target).unwrap();
        let outcome = reconstruct_path(&grid, &field, Point::new(0, 0), target).unwrap();
        let path = outcome.path().unwrap();
        assert_eq!(
            path.cells(),
            points(&[(0, 0), (0, 1), (0, 2), (1, 2), (2, 2), (2, 1), (2, 0)])
        );
        assert_eq!(path.source(), Some(Point::new(0, 0)));
        assert_eq!(path.target(), Some(target));
    }

    #[test]
    fn enclosed_target_is_unreachable() {
        let grid: Grid = "...\n.#.\n#.#\n.#.".parse().unwrap();
        let target = Point::new(1, 2);
        let field = build_distance_field(&grid, target).unwrap();
        let outcome = reconstruct_path(&grid, &field, Point::new(0, 0), target).unwrap();
        assert_eq!(outcome, PathOutcome::Unreachable);
        assert!(!outcome.is_reachable());
    }

    #[test]
    fn rejects_bad_endpoints() {
        let grid: Grid = ".#\n..".parse().unwrap();
        let target = Point::new(0, 0);
        let field = build_distance_field(&grid, target).unwrap();
        assert!(matches!(
            reconstruct_path(&grid, &field, Point::new(-1, 0), target),
            Err(FieldError::OutOfBounds { .. })
        ));
        assert_eq!(
            reconstruct_path(&grid, &field, Point::new(1, 0), target),
            Err(FieldError::Blocked {
                cell: Point::new(1, 0)
            })
        );
        assert!(matches!(
            reconstruct_path(&grid, &field, Point::new(1, 1), Point::new(0, 5)),
            Err(FieldError::OutOfBounds { .. })
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "inconsistent")]
    fn stale_field_panics_in_debug() {
        let mut grid = Grid::new(3, 1).unwrap();
        let target = Point::new(2, 0);
        let field = build_distance_field(&grid, target).unwrap();
        grid.set_blocked(&Point::new(1, 0), true).unwrap();
        let _ = reconstruct_path(&grid, &field, Point::new(0, 0), target);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn stale_field_is_reported() {
        let mut grid = Grid::new(3, 1).unwrap();
        let target = Point::new(2, 0);
        let field = build_distance_field(&grid, target).unwrap();
        grid.set_blocked(&Point::new(1, 0), true).unwrap();
        assert_eq!(
            reconstruct_path(&grid, &field, Point::new(0, 0), target),
            Err(FieldError::Inconsistent {
                cell: Point::new(0, 0)
            })
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "inconsistent")]
    fn field_for_other_target_panics_in_debug() {
        let grid = Grid::new(3, 3).unwrap();
        let field = build_distance_field(&grid, Point::new(0, 0)).unwrap();
        let _ = reconstruct_path(&grid, &field, Point::new(1, 1), Point::new(2, 2));
    }
}
