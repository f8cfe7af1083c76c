use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::grid::Grid;
use crate::Cell;

/// Connected components of the open cells of a grid under 4-connectivity, kept in a
/// [UnionFind] over row-major cell indices. Answers reachability without building a
/// [DistanceField](crate::DistanceField). Built from a snapshot; rebuild after the grid
/// changes.
#[derive(Clone, Debug)]
pub struct Components {
    width: usize,
    height: usize,
    open: Vec<bool>,
    components: UnionFind<usize>,
}

impl Components {
    /// Links every open cell to its open right and lower neighbours.
    pub fn new(grid: &Grid) -> Components {
        info!(
            "Generating connected components for {}x{} grid",
            grid.width(),
            grid.height()
        );
        let mut components = UnionFind::new(grid.width() * grid.height());
        let mut open = vec![false; grid.width() * grid.height()];
        for cell in grid.cells() {
            if !grid.can_move_to(&cell) {
                continue;
            }
            let parent_ix = grid.get_ix(&cell);
            open[parent_ix] = true;
            [Point::new(cell.x + 1, cell.y), Point::new(cell.x, cell.y + 1)]
                .iter()
                .filter(|p| grid.can_move_to(p))
                .for_each(|p| {
                    components.union(parent_ix, grid.get_ix(p));
                });
        }
        Components {
            width: grid.width(),
            height: grid.height(),
            open,
            components,
        }
    }

    fn open_ix(&self, cell: &Cell) -> Option<usize> {
        if cell.x < 0 || cell.y < 0 {
            return None;
        }
        let (x, y) = (cell.x as usize, cell.y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }
        let ix = y * self.width + x;
        self.open[ix].then_some(ix)
    }

    /// Representative of the component `cell` belongs to, or [None] for blocked and
    /// out-of-bounds cells.
    pub fn component(&self, cell: &Cell) -> Option<usize> {
        self.open_ix(cell).map(|ix| self.components.find(ix))
    }

    /// Checks if `start` and `goal` are open cells on the same component.
    pub fn reachable(&self, start: &Cell, goal: &Cell) -> bool {
        match (self.open_ix(start), self.open_ix(goal)) {
            (Some(a), Some(b)) => self.components.equiv(a, b),
            _ => false,
        }
    }

    /// Checks if `start` and `goal` are not on the same component.
    pub fn unreachable(&self, start: &Cell, goal: &Cell) -> bool {
        !self.reachable(start, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // Corresponds to the following 3x2 grid:
        //  ___
        // |.#.|
        // |.#.|
        //  ___
        let grid: Grid = ".#.\n.#.".parse().unwrap();
        let components = Components::new(&grid);
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert_eq!(components.component(&p2), None);
        assert!(components.reachable(&p1, &p3));
        assert!(components.unreachable(&p1, &p4));
        assert!(components.unreachable(&p1, &p2));
        assert_ne!(components.component(&p1), components.component(&p4));
    }

    /// Diagonal contact does not connect cells on a 4-grid.
    #[test]
    fn diagonals_do_not_connect() {
        //  __
        // |.#|
        // |#.|
        //  __
        let grid: Grid = ".#\n#.".parse().unwrap();
        let components = Components::new(&grid);
        assert!(components.unreachable(&Point::new(0, 0), &Point::new(1, 1)));
    }

    #[test]
    fn out_of_bounds_is_unreachable() {
        let grid = Grid::new(2, 2).unwrap();
        let components = Components::new(&grid);
        assert!(components.reachable(&Point::new(0, 0), &Point::new(1, 1)));
        assert!(components.unreachable(&Point::new(0, 0), &Point::new(2, 1)));
        assert_eq!(components.component(&Point::new(-1, 0)), None);
    }
}
