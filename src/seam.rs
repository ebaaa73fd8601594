// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Walk a cumulative grid back up into a seam.

use crate::cq;
use crate::error::CarveError;
use crate::grid::CumulativeGrid;

/// One column index per row, top to bottom.  Consecutive entries
/// differ by at most one.
pub type Seam = Vec<u32>;

/// Trace the minimum-energy vertical seam.
///
/// The seed is the leftmost minimum of the bottom row.  Each step
/// upward re-derives the forward DP's choice: the leftmost minimum of
/// the up-to-three cells above the current one.  Both directions take
/// the same minimum, so the traced seam's total energy equals the
/// seed value; this is a true optimum, not a greedy walk.
pub fn trace_seam(cumulative: &CumulativeGrid) -> Result<Seam, CarveError> {
    let (width, height) = (cumulative.width(), cumulative.height());
    if width == 0 {
        return Err(CarveError::InvalidGrid);
    }
    if height == 0 {
        return Err(CarveError::InvalidDimension(width, height));
    }

    let maxwidth = width - 1;
    // min_by_key keeps the first of equals, which is exactly the
    // leftmost tie-break.
    let mut seam_col = (0..width)
        .min_by_key(|&x| cumulative[(x, height - 1)])
        .unwrap();

    // Working upward, generate the column for each row, then reverse
    // into top-to-bottom order.
    let seam = (0..height)
        .rev()
        .fold(Vec::with_capacity(height as usize), |mut acc, y| {
            acc.push(seam_col);
            if y > 0 {
                let range =
                    cq!(seam_col == 0, 0, seam_col - 1)..=cq!(seam_col >= maxwidth, maxwidth, seam_col + 1);
                seam_col = range.min_by_key(|&x| cumulative[(x, y - 1)]).unwrap();
            }
            acc
        });
    Ok(seam.into_iter().rev().collect())
}
