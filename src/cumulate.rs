// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The cumulative-energy dynamic program.
//!
//! Cell (x, y) of the output holds the minimum total energy of any
//! connected path from row 0 ending at that cell.  Rows must be
//! computed in order, each from the finished row above it; within a
//! row every cell is independent.  One executor call per row keeps
//! both facts honest: the spans run in any order, and the call's
//! return is the barrier before the next row starts.

use crate::cq;
use crate::error::CarveError;
use crate::execute::Executor;
use crate::grid::{CumulativeGrid, EnergyGrid};

/// Fold an energy grid down into its cumulative form.
///
/// Only the minimal values are stored.  Which upper neighbor produced
/// a minimum, ties included, is the tracer's business, not ours.
pub fn accumulate<E: Executor>(
    energy: &EnergyGrid,
    executor: &E,
) -> Result<CumulativeGrid, CarveError> {
    let (width, height) = (energy.width(), energy.height());
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimension(width, height));
    }

    let mut cumulative = CumulativeGrid::new(width, height);

    // Row 0 is the base case: each cell costs exactly its own energy.
    cumulative.row_mut(0).copy_from_slice(energy.row(0));

    let maxwidth = width - 1;
    let span = span_size(width as usize, executor.workers());
    for y in 1..height {
        let (done, rest) = cumulative.split_at_row_mut(y);
        let above = &done[done.len() - width as usize..];
        let current = &mut rest[..width as usize];

        let spans: Vec<(u32, &mut [u64])> = current
            .chunks_mut(span)
            .enumerate()
            .map(|(i, chunk)| ((i * span) as u32, chunk))
            .collect();
        executor.run(spans, |x0, chunk| {
            for (i, cell) in chunk.iter_mut().enumerate() {
                let x = x0 + i as u32;
                let range = cq!(x == 0, 0, x - 1)..=cq!(x >= maxwidth, maxwidth, x + 1);
                let least = range.map(|nx| above[nx as usize]).min().unwrap();
                *cell = energy[(x, y)] + least;
            }
        });
    }
    Ok(cumulative)
}

// Column spans sized so every worker gets one per row.
fn span_size(width: usize, workers: usize) -> usize {
    let workers = workers.max(1);
    ((width + workers - 1) / workers).max(1)
}
