//! Content-aware image width reduction, better known as seam carving.
//!
//! A carving pass finds the connected top-to-bottom path of pixels
//! carrying the least visual information and cuts it out, narrowing
//! the image by one column while leaving salient content alone.  The
//! pipeline per pass: [`estimate_energy`] scores every pixel,
//! [`accumulate`] folds the scores into a path-cost dynamic program,
//! [`trace_seam`] walks the cheapest path back out, and [`remove_seam`]
//! excises it.  [`carve`] (or a configured [`Carver`]) loops the whole
//! thing until the target width is reached.
//!
//! The core works on raw intensity grids and knows nothing about image
//! formats; the [`raster`] module and the `gridseam` binary are the
//! bridge to real images.
//!
//! ```
//! use gridseam::{carve, PixelGrid};
//!
//! let grid = PixelGrid::from_raw(3, 2, vec![10, 10, 10, 10, 50, 10]).unwrap();
//! let result = carve(grid, 2, None).unwrap();
//! assert_eq!(result.final_width, 2);
//! assert_eq!(result.grid.as_raw(), &[10, 10, 50, 10]);
//! ```

mod ternary;

pub mod carver;
pub mod cumulate;
pub mod energy;
pub mod error;
pub mod execute;
pub mod grid;
pub mod raster;
pub mod seam;

pub use carver::{carve, remove_seam, CarveResult, Carver};
pub use cumulate::accumulate;
pub use energy::{absolute_difference, estimate_energy, estimate_energy_with, PairEnergy};
pub use error::CarveError;
#[cfg(feature = "threaded")]
pub use execute::ThreadedExecutor;
pub use execute::{Executor, SerialExecutor};
pub use grid::{CumulativeGrid, EnergyGrid, Grid, PixelGrid};
pub use seam::{trace_seam, Seam};
