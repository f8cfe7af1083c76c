//! Randomized obstacle placement for test fixtures and interactive hosts.
use log::debug;
use rand::Rng;

use crate::error::{FieldError, Result};
use crate::grid::Grid;

/// Creates a `width` x `height` grid where each cell is blocked independently with
/// probability `density`.
pub fn random_grid<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    density: f64,
    rng: &mut R,
) -> Result<Grid> {
    if !(0.0..=1.0).contains(&density) {
        return Err(FieldError::InvalidDensity(density));
    }
    let rows = (0..height)
        .map(|_| (0..width).map(|_| rng.gen_bool(density)).collect::<Vec<bool>>())
        .collect::<Vec<_>>();
    let grid = Grid::from_rows(&rows)?;
    debug!(
        "Generated {}x{} grid with {} open cells",
        width,
        height,
        grid.open_count()
    );
    Ok(grid)
}
