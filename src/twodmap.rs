// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A flat, row-major two-dimensional grid.
//!
//! Every grid in the carver (the pixels, the energy field, the
//! dynamic-programming cost table) is one of these.  The grid can
//! also shrink in place: given a seam, it drops one cell from every
//! row (or every column) and closes the gap.

use crate::error::{Result, SeamError};
use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of `Copy` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// A grid of the given size with every cell at its default.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, P::default())
    }

    /// A grid of the given size with every cell set to `value`.
    pub fn filled(width: u32, height: u32, value: P) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![value; width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Both dimensions must be at
    /// least one and the vector must hold exactly `width * height`
    /// cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SeamError::InvalidInput(format!(
                "a {}x{} grid has no pixels",
                width, height
            )));
        }
        if cells.len() != width as usize * height as usize {
            return Err(SeamError::InvalidInput(format!(
                "a {}x{} grid needs {} cells, got {}",
                width,
                height,
                width as usize * height as usize,
                cells.len()
            )));
        }
        Ok(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Keep the index math in exactly one place.  Row-major, the same
    // layout the image crate uses.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// True if (x, y) addresses a cell of the current grid.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn check(&self, x: u32, y: u32) -> Result<()> {
        if self.contains(x, y) {
            Ok(())
        } else {
            Err(SeamError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Bounds-checked read.
    pub fn get(&self, x: u32, y: u32) -> Result<P> {
        self.check(x, y)?;
        Ok(self.cells[self.get_index(x, y)])
    }

    /// Bounds-checked write.
    pub fn set(&mut self, x: u32, y: u32, value: P) -> Result<()> {
        self.check(x, y)?;
        let index = self.get_index(x, y);
        self.cells[index] = value;
        Ok(())
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[P] {
        &self.cells
    }

    #[cfg(feature = "threaded")]
    pub(crate) fn cells_mut(&mut self) -> &mut [P] {
        &mut self.cells
    }

    #[cfg(not(feature = "threaded"))]
    pub(crate) fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, P> {
        let width = self.width as usize;
        self.cells.chunks_mut(width)
    }

    /// Drop the cell at `seam[y]` from every row `y`, shifting the rest
    /// of the row left.  The seam must already have been validated:
    /// one in-range entry per row, and a width greater than one.
    pub fn remove_column(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.height as usize);
        debug_assert!(self.width > 1);
        let width = self.width as usize;
        let mut write = 0;
        // Writes never overtake reads, so the compaction can happen in
        // place.
        for (y, &cut) in seam.iter().enumerate() {
            let row = y * width;
            for x in (0..width).filter(|&x| x != cut as usize) {
                self.cells[write] = self.cells[row + x];
                write += 1;
            }
        }
        self.cells.truncate(write);
        self.width -= 1;
    }

    /// Drop the cell at `seam[x]` from every column `x`, shifting the
    /// rest of the column up.  Same preconditions as `remove_column`,
    /// transposed.
    pub fn remove_row(&mut self, seam: &[u32]) {
        debug_assert_eq!(seam.len(), self.width as usize);
        debug_assert!(self.height > 1);
        let (width, height) = (self.width as usize, self.height as usize);
        for y in 0..height - 1 {
            for (x, &cut) in seam.iter().enumerate() {
                let source = if y >= cut as usize { y + 1 } else { y };
                self.cells[y * width + x] = self.cells[source * width + x];
            }
        }
        self.cells.truncate(width * (height - 1));
        self.height -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}
