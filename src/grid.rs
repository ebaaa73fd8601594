//! Row-major two-dimensional storage shared by every stage of the
//! carving pipeline.
//!
//! The pixel grid, the energy map, and the cumulative-energy map are
//! all the same structure with different cell types; a cell only needs
//! to be `Default + Copy`.

use std::ops::{Index, IndexMut};

/// A rectangular, row-major field of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

/// Raw intensity values, one per pixel.
pub type PixelGrid = Grid<i32>;

/// Per-pixel energy scores. `u64` because a cell sums up to four
/// absolute `i32` differences, and cumulative sums of those over a tall
/// image must not wrap.
pub type EnergyGrid = Grid<u64>;

/// Minimum total energy of any connected path from row 0 down to each
/// cell.
pub type CumulativeGrid = Grid<u64>;

impl<P: Default + Copy> Grid<P> {
    /// A grid of the given dimensions with every cell defaulted.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Adopt an existing row-major buffer, in the manner of
    /// `ImageBuffer::from_raw`: `None` when the buffer length does not
    /// match the dimensions.
    pub fn from_raw(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() == width as usize * height as usize {
            Some(Grid {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// One row as a slice.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// One row, mutable.
    pub fn row_mut(&mut self, y: u32) -> &mut [P] {
        let start = self.get_index(0, y);
        let width = self.width as usize;
        &mut self.cells[start..start + width]
    }

    /// Every row as a disjoint mutable span tagged with its row index.
    /// This is the shape the executor consumes.
    pub fn rows_mut(&mut self) -> Vec<(u32, &mut [P])> {
        let width = self.width as usize;
        if width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks_mut(width)
            .enumerate()
            .map(|(y, row)| (y as u32, row))
            .collect()
    }

    /// Split the backing store at the start of row `y`: every row above
    /// as a shared slice, row `y` onward mutable. This is what lets the
    /// cumulative solver read row `y - 1` while filling row `y` without
    /// copying either.
    pub fn split_at_row_mut(&mut self, y: u32) -> (&[P], &mut [P]) {
        let split = self.get_index(0, y);
        let (above, below) = self.cells.split_at_mut(split);
        (&*above, below)
    }

    /// The whole backing store, row-major.
    pub fn as_raw(&self) -> &[P] {
        &self.cells
    }

    /// Surrender the backing store.
    pub fn into_raw(self) -> Vec<P> {
        self.cells
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for Grid<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for Grid<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
