//! Failure kinds for the carving pipeline.
//!
//! Every stage checks its structural preconditions up front and fails
//! fast. None of these conditions is transient, so retrying a failed
//! stage is never the right response. A threshold-driven early halt is
//! not an error; it comes back as a normal result with
//! `halted_early` set.

use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// A stage input had a zero dimension.
    #[fail(display = "grid dimensions {}x{} are not carvable", _0, _1)]
    InvalidDimension(u32, u32),

    /// Seam tracing was asked to walk a zero-width cumulative grid.
    #[fail(display = "cannot trace a seam through a zero-width grid")]
    InvalidGrid,

    /// A seam did not fit the grid it was to be cut from.
    #[fail(display = "seam does not fit grid: {}", _0)]
    InvalidSeam(String),

    /// Carving only narrows; the target must be in 1..=current width.
    #[fail(
        display = "target width {} is invalid for an image {} columns wide",
        _0, _1
    )]
    InvalidTargetWidth(u32, u32),
}
