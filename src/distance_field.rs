use core::fmt;
use std::collections::VecDeque;

use fxhash::FxBuildHasher;
use indexmap::map::Entry::Vacant;
use indexmap::IndexMap;
use log::{debug, warn};

use crate::error::Result;
use crate::grid::Grid;
use crate::{neumann_neighbours, Cell};

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Hop counts from every cell that can reach `target` to `target` itself. Cells that are
/// blocked or cut off from the target are absent. Entries iterate in the order the
/// breadth-first search reached them, so distances are non-decreasing along [iter](Self::iter).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField {
    target: Cell,
    distances: FxIndexMap<Cell, u32>,
}

impl DistanceField {
    fn empty(target: Cell) -> DistanceField {
        DistanceField {
            target,
            distances: FxIndexMap::default(),
        }
    }

    /// The cell this field measures distances to.
    pub fn target(&self) -> Cell {
        self.target
    }

    pub fn get(&self, cell: &Cell) -> Option<u32> {
        self.distances.get(cell).copied()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.distances.contains_key(cell)
    }

    /// Number of reachable cells, the target included.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Only true when the target was blocked.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.distances.iter().map(|(c, d)| (*c, *d))
    }

    /// Distance of the farthest reachable cell.
    pub fn max_distance(&self) -> Option<u32> {
        // Insertion order is BFS order, so the last entry is the farthest.
        self.distances.last().map(|(_, d)| *d)
    }

    /// Per-cell distance labels laid out like `grid`: blocked cells render as `#`,
    /// unreachable open cells as `.`, all columns padded to the widest label.
    pub fn render<'a>(&'a self, grid: &'a Grid) -> FieldOverlay<'a> {
        FieldOverlay { field: self, grid }
    }
}

/// Display adapter returned by [DistanceField::render].
pub struct FieldOverlay<'a> {
    field: &'a DistanceField,
    grid: &'a Grid,
}

impl fmt::Display for FieldOverlay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pad = self
            .field
            .max_distance()
            .map_or(1, |d| d.to_string().len());
        for y in 0..self.grid.height() as i32 {
            let labels = (0..self.grid.width() as i32)
                .map(|x| {
                    let cell = Cell::new(x, y);
                    match self.field.get(&cell) {
                        Some(d) => format!("{:>pad$}", d),
                        None if !self.grid.can_move_to(&cell) => format!("{:>pad$}", '#'),
                        None => format!("{:>pad$}", '.'),
                    }
                })
                .collect::<Vec<String>>();
            writeln!(f, "{}", labels.join(" "))?;
        }
        Ok(())
    }
}

/// Computes the shortest 4-connected hop count from every open cell to `target` by a
/// breadth-first search outward from `target`. Neighbours are expanded in the fixed
/// +x, -x, +y, -y order and the first visit to a cell is final.
///
/// A blocked `target` yields an empty field. An out-of-bounds `target` is rejected with
/// [FieldError::OutOfBounds](crate::FieldError::OutOfBounds).
pub fn build_distance_field(grid: &Grid, target: Cell) -> Result<DistanceField> {
    grid.check_bounds(&target)?;
    let mut field = DistanceField::empty(target);
    if !grid.can_move_to(&target) {
        warn!("Target {} is blocked, distance field is empty", target);
        return Ok(field);
    }

    field.distances.insert(target, 0);
    let mut queue = VecDeque::from([target]);
    while let Some(current) = queue.pop_front() {
        let next = field.distances[&current] + 1;
        for neighbour in neumann_neighbours(&current) {
            if !grid.can_move_to(&neighbour) {
                continue;
            }
            if let Vacant(e) = field.distances.entry(neighbour) {
                e.insert(next);
                queue.push_back(neighbour);
            }
        }
    }
    debug!(
        "Distance field for {} reaches {} of {} open cells",
        target,
        field.len(),
        grid.open_count()
    );
    Ok(field)
}
