// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The edge where real images become grids and come back.
//!
//! The carving core knows nothing about color spaces or codecs; these
//! helpers feed it the luma channel of anything the `image` crate can
//! decode, and wrap the results back up for encoding.

use crate::cq;
use crate::grid::{EnergyGrid, PixelGrid};
use image::{GenericImageView, GrayImage, Pixel, Primitive};
use itertools::iproduct;
use num_traits::{clamp, NumCast};

#[inline]
fn luma_channel<P, S>(pixel: &P) -> i32
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let channels = pixel.to_luma().channels().to_owned();
    NumCast::from(channels[0]).unwrap()
}

/// Flatten any image view into an intensity grid via its luma channel.
pub fn grid_from_image<I, P, S>(image: &I) -> PixelGrid
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    let (width, height) = image.dimensions();
    let mut grid = PixelGrid::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        grid[(x, y)] = luma_channel(&image.get_pixel(x, y));
    }
    grid
}

/// Wrap a carved grid back up as an 8-bit grayscale image.
pub fn image_from_grid(grid: &PixelGrid) -> GrayImage {
    let data = grid
        .as_raw()
        .iter()
        .map(|&value| clamp(value, 0, 255) as u8)
        .collect();
    GrayImage::from_raw(grid.width(), grid.height(), data).unwrap()
}

/// Visualize an energy map: scale every cell against the hottest one
/// and write an 8-bit graymap.  A uniform map comes out all black.
pub fn energy_image(energy: &EnergyGrid) -> GrayImage {
    let top = energy.as_raw().iter().cloned().max().unwrap_or(0);
    let data = energy
        .as_raw()
        .iter()
        .map(|&value| {
            let scaled = cq!(top == 0, 0, value * 255 / top);
            scaled as u8
        })
        .collect();
    GrayImage::from_raw(energy.width(), energy.height(), data).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_grid_matches_gray_pixels() {
        let image = GrayImage::from_raw(2, 2, vec![0, 64, 128, 255]).unwrap();
        let grid = grid_from_image(&image);
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.as_raw(), &[0, 64, 128, 255]);
    }

    #[test]
    fn grids_round_trip_through_images() {
        let grid = PixelGrid::from_raw(3, 1, vec![12, 200, 99]).unwrap();
        let image = image_from_grid(&grid);
        assert_eq!(grid_from_image(&image), grid);
    }

    #[test]
    fn out_of_range_intensities_are_clamped() {
        let grid = PixelGrid::from_raw(2, 1, vec![-5, 300]).unwrap();
        let image = image_from_grid(&grid);
        assert_eq!(image.into_raw(), vec![0, 255]);
    }

    #[test]
    fn energy_rendering_scales_to_the_hottest_cell() {
        let energy = EnergyGrid::from_raw(2, 1, vec![5, 10]).unwrap();
        let image = energy_image(&energy);
        assert_eq!(image.into_raw(), vec![127, 255]);
    }

    #[test]
    fn uniform_energy_renders_black() {
        let energy = EnergyGrid::from_raw(2, 2, vec![0; 4]).unwrap();
        let image = energy_image(&energy);
        assert_eq!(image.into_raw(), vec![0; 4]);
    }
}
