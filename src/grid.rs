use core::fmt;
use std::str::FromStr;

use grid_util::point::Point;
use smallvec::SmallVec;

use crate::error::{FieldError, Result};
use crate::{neumann_neighbours, Cell};

/// A rectangular grid of cells that are either blocked ([true]) or open ([false]).
/// Dimensions are fixed at construction and are at least 1x1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell open.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        Grid::filled(width, height, false)
    }

    /// Creates a grid with every cell set to `blocked`.
    pub fn filled(width: usize, height: usize, blocked: bool) -> Result<Grid> {
        if width == 0 || height == 0 {
            return Err(FieldError::EmptyGrid);
        }
        Ok(Grid {
            width,
            height,
            blocked: vec![blocked; width * height],
        })
    }

    /// Builds a grid from rows of blocked flags, where `rows[y][x]` is cell `(x, y)`.
    /// All rows must have the same, non-zero length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Grid> {
        let width = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if width == 0 {
            return Err(FieldError::EmptyGrid);
        }
        let mut blocked = Vec::with_capacity(width * rows.len());
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != width {
                return Err(FieldError::RaggedRows {
                    row,
                    expected: width,
                    found: values.len(),
                });
            }
            blocked.extend_from_slice(values);
        }
        Ok(Grid {
            width,
            height: rows.len(),
            blocked,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, cell: &Cell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.width
            && (cell.y as usize) < self.height
    }

    /// Returns [FieldError::OutOfBounds] unless `cell` lies on the grid.
    pub fn check_bounds(&self, cell: &Cell) -> Result<()> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(FieldError::OutOfBounds {
                cell: *cell,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Returns [FieldError::OutOfBounds] or [FieldError::Blocked] unless `cell` is an open
    /// cell of the grid.
    pub fn check_open(&self, cell: &Cell) -> Result<()> {
        self.check_bounds(cell)?;
        if self.blocked[self.get_ix(cell)] {
            Err(FieldError::Blocked { cell: *cell })
        } else {
            Ok(())
        }
    }

    pub fn is_blocked(&self, cell: &Cell) -> Result<bool> {
        self.check_bounds(cell)?;
        Ok(self.blocked[self.get_ix(cell)])
    }

    pub fn set_blocked(&mut self, cell: &Cell, blocked: bool) -> Result<()> {
        self.check_bounds(cell)?;
        let ix = self.get_ix(cell);
        self.blocked[ix] = blocked;
        Ok(())
    }

    /// In bounds and not blocked.
    pub fn can_move_to(&self, cell: &Cell) -> bool {
        self.in_bounds(cell) && !self.blocked[self.get_ix(cell)]
    }

    /// The open 4-neighbours of `cell`, in +x, -x, +y, -y order.
    pub fn open_neighbours(&self, cell: &Cell) -> SmallVec<[Cell; 4]> {
        neumann_neighbours(cell)
            .into_iter()
            .filter(|n| self.can_move_to(n))
            .collect()
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width as i32;
        (0..self.height as i32).flat_map(move |y| (0..width).map(move |x| Point::new(x, y)))
    }

    pub fn open_count(&self) -> usize {
        self.blocked.iter().filter(|b| !**b).count()
    }

    /// Row-major index of an in-bounds cell.
    pub(crate) fn get_ix(&self, cell: &Cell) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.y as usize * self.width + cell.x as usize
    }
}

/// Renders the grid as rows of `#` (blocked) and `.` (open), top row first.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.blocked.chunks(self.width) {
            let line: String = row.iter().map(|&b| if b { '#' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the form produced by [Display](fmt::Display). Blank lines and surrounding
/// whitespace on each line are ignored.
impl FromStr for Grid {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Grid> {
        let mut rows: Vec<Vec<bool>> = Vec::new();
        for (line_no, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .enumerate()
                .map(|(column, c)| match c {
                    '#' => Ok(true),
                    '.' => Ok(false),
                    found => Err(FieldError::ParseGrid {
                        line: line_no + 1,
                        column: column + 1,
                        found,
                    }),
                })
                .collect::<Result<Vec<bool>>>()?;
            rows.push(row);
        }
        Grid::from_rows(&rows)
    }
}
