use log::{debug, info};

use crate::distance_field::{build_distance_field, DistanceField};
use crate::error::{FieldError, Result};
use crate::grid::Grid;
use crate::path::{reconstruct_path, PathOutcome};
use crate::Cell;

/// An editable grid together with its current source, target and distance field.
///
/// The field is rebuilt whenever the target or the grid changes, so [path](Self::path)
/// never descends a stale field. Setting a source never rebuilds anything. The navigator
/// is an ordinary value owned by the caller; nothing is shared between instances.
#[derive(Clone, Debug)]
pub struct Navigator {
    grid: Grid,
    source: Option<Cell>,
    target: Option<Cell>,
    field: Option<DistanceField>,
}

impl Navigator {
    pub fn new(grid: Grid) -> Navigator {
        Navigator {
            grid,
            source: None,
            target: None,
            field: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source(&self) -> Option<Cell> {
        self.source
    }

    pub fn target(&self) -> Option<Cell> {
        self.target
    }

    /// The field for the current target, if one is set.
    pub fn field(&self) -> Option<&DistanceField> {
        self.field.as_ref()
    }

    /// Swaps in a new grid, for instance after a resize, dropping source, target and field.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.clear_points();
    }

    pub fn clear_points(&mut self) {
        self.source = None;
        self.target = None;
        self.field = None;
    }

    /// Sets the target and rebuilds the field. Blocked and out-of-bounds cells are
    /// rejected and leave the previous target in place.
    pub fn set_target(&mut self, cell: Cell) -> Result<()> {
        self.grid.check_open(&cell)?;
        self.target = Some(cell);
        self.rebuild()
    }

    /// Sets the source. Blocked and out-of-bounds cells are rejected.
    pub fn set_source(&mut self, cell: Cell) -> Result<()> {
        self.grid.check_open(&cell)?;
        self.source = Some(cell);
        Ok(())
    }

    /// Blocks or opens a cell. Blocking the source or target unsets it.
    pub fn set_blocked(&mut self, cell: Cell, blocked: bool) -> Result<()> {
        if self.grid.is_blocked(&cell)? == blocked {
            return Ok(());
        }
        self.grid.set_blocked(&cell, blocked)?;
        if blocked {
            if self.source == Some(cell) {
                debug!("Source {} was blocked and is cleared", cell);
                self.source = None;
            }
            if self.target == Some(cell) {
                debug!("Target {} was blocked and is cleared", cell);
                self.target = None;
            }
        }
        self.rebuild()
    }

    /// Flips a cell between blocked and open and returns its new state.
    pub fn toggle(&mut self, cell: Cell) -> Result<bool> {
        let blocked = !self.grid.is_blocked(&cell)?;
        self.set_blocked(cell, blocked)?;
        Ok(blocked)
    }

    /// Shortest path from the current source to the current target.
    pub fn path(&self) -> Result<PathOutcome> {
        let source = self.source.ok_or(FieldError::MissingPoint { which: "source" })?;
        let target = self.target.ok_or(FieldError::MissingPoint { which: "target" })?;
        let field = self
            .field
            .as_ref()
            .ok_or(FieldError::MissingPoint { which: "target" })?;
        reconstruct_path(&self.grid, field, source, target)
    }

    fn rebuild(&mut self) -> Result<()> {
        self.field = match self.target {
            Some(target) => {
                let field = build_distance_field(&self.grid, target)?;
                info!("Distance field for {} covers {} cells", target, field.len());
                Some(field)
            }
            None => None,
        };
        Ok(())
    }
}
