// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seam excision and the carving driver.
//!
//! The driver runs the full pass (energy, cumulative energy, trace,
//! remove) until the grid reaches the target width, or until the
//! cheapest remaining seam costs more than the configured threshold.

use crate::cumulate::accumulate;
use crate::energy::estimate_energy;
use crate::error::CarveError;
use crate::execute::{Executor, SerialExecutor};
use crate::grid::PixelGrid;
use crate::seam::trace_seam;

/// What a finished carve hands back.
#[derive(Debug)]
pub struct CarveResult {
    /// The narrowed grid.
    pub grid: PixelGrid,
    /// Width actually reached.  Equals the requested target unless the
    /// energy threshold stopped the loop first.
    pub final_width: u32,
    /// True when the threshold halted carving above the target width.
    pub halted_early: bool,
}

/// Cut one seam out of a grid, producing a grid one column narrower.
///
/// Every row drops its seam pixel and closes the gap leftward.  Rows
/// are independent, so each output row is a span for the executor; the
/// call returns only when the whole removal is done.  The same seam
/// serves every row; recomputing per row would forfeit the vertical
/// connectivity the tracer guaranteed.
pub fn remove_seam<E: Executor>(
    grid: &PixelGrid,
    seam: &[u32],
    executor: &E,
) -> Result<PixelGrid, CarveError> {
    let (width, height) = (grid.width(), grid.height());
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimension(width, height));
    }
    if seam.len() != height as usize {
        return Err(CarveError::InvalidSeam(format!(
            "seam has {} rows but the grid has {}",
            seam.len(),
            height
        )));
    }
    if let Some(y) = (0..height).find(|&y| seam[y as usize] >= width) {
        return Err(CarveError::InvalidSeam(format!(
            "column {} at row {} is outside a grid {} columns wide",
            seam[y as usize], y, width
        )));
    }

    let mut narrowed = PixelGrid::new(width - 1, height);
    executor.run(narrowed.rows_mut(), |y, row| {
        let source = grid.row(y);
        let cut = seam[y as usize] as usize;
        row[..cut].copy_from_slice(&source[..cut]);
        row[cut..].copy_from_slice(&source[cut + 1..]);
    });
    Ok(narrowed)
}

/// The carving driver: an execution context plus the carving policy.
pub struct Carver<'a, E: Executor> {
    executor: &'a E,
    energy_threshold: Option<u64>,
}

impl<'a, E: Executor> Carver<'a, E> {
    /// A driver over the given execution context, with no threshold.
    pub fn new(executor: &'a E) -> Self {
        Carver {
            executor,
            energy_threshold: None,
        }
    }

    /// Stop carving once even the cheapest seam costs more than this.
    /// Bounds visible distortion at the price of possibly finishing
    /// wider than the target.
    pub fn energy_threshold(mut self, threshold: u64) -> Self {
        self.energy_threshold = Some(threshold);
        self
    }

    /// Repeatedly carve seams out of `grid` until it is `target_width`
    /// columns wide.
    ///
    /// Every pass recomputes the energy and cumulative maps from
    /// scratch: removing a seam shifts neighbor relationships in every
    /// row it crossed, so nothing from the previous pass is reusable.
    pub fn carve(&self, grid: PixelGrid, target_width: u32) -> Result<CarveResult, CarveError> {
        let (width, height) = (grid.width(), grid.height());
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidDimension(width, height));
        }
        if target_width == 0 || target_width > width {
            return Err(CarveError::InvalidTargetWidth(target_width, width));
        }

        let mut current = grid;
        let mut halted_early = false;
        while current.width() > target_width {
            let energy = estimate_energy(&current, self.executor)?;
            let cumulative = accumulate(&energy, self.executor)?;

            let bottom = cumulative.height() - 1;
            let cheapest = (0..cumulative.width())
                .map(|x| cumulative[(x, bottom)])
                .min()
                .unwrap();
            if let Some(threshold) = self.energy_threshold {
                if cheapest > threshold {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        width = current.width(),
                        cheapest,
                        threshold,
                        "cheapest seam over threshold, halting"
                    );
                    halted_early = true;
                    break;
                }
            }

            let seam = trace_seam(&cumulative)?;
            current = remove_seam(&current, &seam, self.executor)?;
            #[cfg(feature = "tracing")]
            tracing::debug!(width = current.width(), cost = cheapest, "removed seam");
        }

        Ok(CarveResult {
            final_width: current.width(),
            grid: current,
            halted_early,
        })
    }
}

/// One-call convenience over the serial executor.
pub fn carve(
    grid: PixelGrid,
    target_width: u32,
    energy_threshold: Option<u64>,
) -> Result<CarveResult, CarveError> {
    let executor = SerialExecutor;
    let mut carver = Carver::new(&executor);
    if let Some(threshold) = energy_threshold {
        carver = carver.energy_threshold(threshold);
    }
    carver.carve(grid, target_width)
}
