// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Estimate the energy of every pixel in a grid.
//!
//! The energy of a pixel is the sum of absolute intensity differences
//! against each of its in-bounds 4-neighbors; border pixels simply
//! have fewer neighbors.  Low energy marks a pixel whose removal is
//! cheap.  Each output cell depends only on the input grid, so rows
//! are dispatched to the executor as independent spans.

use crate::cq;
use crate::error::CarveError;
use crate::execute::Executor;
use crate::grid::{EnergyGrid, PixelGrid};

/// The type signature of our pair-energy function: the cost one
/// neighboring pair contributes to a pixel's total.
pub type PairEnergy = fn(i32, i32) -> u64;

/// The default pair energy, the absolute intensity difference.
#[inline]
pub fn absolute_difference(a: i32, b: i32) -> u64 {
    (i64::from(a) - i64::from(b)).abs() as u64
}

/// Compute the energy of every pixel under the default pair function.
pub fn estimate_energy<E: Executor>(
    grid: &PixelGrid,
    executor: &E,
) -> Result<EnergyGrid, CarveError> {
    estimate_energy_with(grid, absolute_difference, executor)
}

/// Compute the energy of every pixel under a caller-supplied pair
/// function.
pub fn estimate_energy_with<E: Executor>(
    grid: &PixelGrid,
    pair: PairEnergy,
    executor: &E,
) -> Result<EnergyGrid, CarveError> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimension(width, height));
    }

    let (mw, mh) = (width - 1, height - 1);
    let mut energy = EnergyGrid::new(width, height);
    executor.run(energy.rows_mut(), |y, row| {
        for x in 0..width {
            let pixel = grid[(x, y)];
            // A missing neighbor is stood in for by the pixel itself,
            // which contributes exactly nothing to the sum.
            let (left, right, up, down) = (
                cq!(x == 0, pixel, grid[(x - 1, y)]),
                cq!(x >= mw, pixel, grid[(x + 1, y)]),
                cq!(y == 0, pixel, grid[(x, y - 1)]),
                cq!(y >= mh, pixel, grid[(x, y + 1)]),
            );
            row[x as usize] =
                pair(pixel, left) + pair(pixel, right) + pair(pixel, up) + pair(pixel, down);
        }
    });
    Ok(energy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execute::SerialExecutor;
    use crate::grid::PixelGrid;

    const RAMP_DATA: [i32; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    const RAMP_ENERGY: [u64; 9] = [4, 5, 4, 7, 8, 7, 4, 5, 4];

    #[test]
    fn neighbor_differences_sum_per_pixel() {
        let grid = PixelGrid::from_raw(3, 3, RAMP_DATA.to_vec()).unwrap();
        let energy = estimate_energy(&grid, &SerialExecutor).unwrap();
        assert_eq!(energy.as_raw(), &RAMP_ENERGY);
    }

    #[test]
    fn uniform_grid_has_zero_energy() {
        let grid = PixelGrid::from_raw(4, 3, vec![7; 12]).unwrap();
        let energy = estimate_energy(&grid, &SerialExecutor).unwrap();
        assert!(energy.as_raw().iter().all(|&e| e == 0));
    }

    #[test]
    fn single_pixel_has_no_neighbors() {
        let grid = PixelGrid::from_raw(1, 1, vec![42]).unwrap();
        let energy = estimate_energy(&grid, &SerialExecutor).unwrap();
        assert_eq!(energy.as_raw(), &[0]);
    }

    #[test]
    fn single_row_uses_partial_neighbor_sets() {
        let grid = PixelGrid::from_raw(3, 1, vec![5, 9, 2]).unwrap();
        let energy = estimate_energy(&grid, &SerialExecutor).unwrap();
        assert_eq!(energy.as_raw(), &[4, 11, 7]);
    }

    #[test]
    fn bright_spot_raises_its_row() {
        let grid = PixelGrid::from_raw(3, 2, vec![10, 10, 10, 10, 50, 10]).unwrap();
        let energy = estimate_energy(&grid, &SerialExecutor).unwrap();
        assert_eq!(energy.as_raw(), &[0, 40, 0, 40, 120, 40]);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let grid = PixelGrid::new(0, 5);
        assert_eq!(
            estimate_energy(&grid, &SerialExecutor),
            Err(CarveError::InvalidDimension(0, 5))
        );
    }

    #[test]
    fn pair_function_is_pluggable() {
        let squared: PairEnergy = |a, b| {
            let d = i64::from(a) - i64::from(b);
            (d * d) as u64
        };
        let grid = PixelGrid::from_raw(2, 1, vec![3, 7]).unwrap();
        let energy = estimate_energy_with(&grid, squared, &SerialExecutor).unwrap();
        assert_eq!(energy.as_raw(), &[16, 16]);
    }
}
