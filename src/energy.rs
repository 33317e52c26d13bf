// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! The energy of a pixel is the dual-gradient magnitude of its
//! neighbourhood:
//!
//! ```text
//!        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²    between (x-1,y) and (x+1,y)
//!        |Δy|² = (Δry)²+(Δgy)²+(Δby)²    between (x,y-1) and (x,y+1)
//!       e(x,y) = √(|Δx|²+|Δy|²)
//! ```
//!
//! The gradient is undefined on the outer edge of the image, so every
//! border pixel gets `BORDER_ENERGY` instead, which also keeps seams
//! away from the frame.
//!
//! The field is built once from the whole image.  After that, every
//! seam removal compacts the cached values along with the pixels and
//! recomputes only the handful of pixels whose neighbours changed.

use crate::error::Result;
use crate::flipper::Lattice;
use crate::pixelpairs::squared_difference;
use crate::pixelstore::PixelStore;
use crate::seam::{validate_seam, Carve};
use crate::twodmap::TwoDimensionalMap;
use tracing::trace;

/// The energy of every pixel on the edge of the image.
pub const BORDER_ENERGY: f64 = 1000.0;

/// The energy of a single pixel of the current image.  (x, y) must be
/// inside the image.
pub(crate) fn pixel_energy(pixels: &PixelStore, x: u32, y: u32) -> f64 {
    let (width, height) = pixels.dimensions();
    if x == 0 || y == 0 || x == width - 1 || y == height - 1 {
        return BORDER_ENERGY;
    }
    let horizontal = squared_difference(&pixels.color(x - 1, y), &pixels.color(x + 1, y));
    let vertical = squared_difference(&pixels.color(x, y - 1), &pixels.color(x, y + 1));
    (horizontal + vertical).sqrt()
}

/// A cached energy value for every pixel of a `PixelStore`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyField {
    energy: TwoDimensionalMap<f64>,
}

impl EnergyField {
    /// Compute the energy of every pixel in `pixels`.
    pub fn new(pixels: &PixelStore) -> Self {
        let (width, height) = pixels.dimensions();
        let mut field = EnergyField {
            energy: TwoDimensionalMap::new(width, height),
        };
        field.rebuild_all(pixels);
        field
    }

    pub fn width(&self) -> u32 {
        self.energy.width()
    }

    pub fn height(&self) -> u32 {
        self.energy.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.energy.dimensions()
    }

    /// The cached energy at (x, y).
    pub fn energy_at(&self, x: u32, y: u32) -> Result<f64> {
        self.energy.get(x, y)
    }

    /// The whole grid, row-major.
    pub fn grid(&self) -> &TwoDimensionalMap<f64> {
        &self.energy
    }

    /// Throw away every cached value and recompute the field from
    /// `pixels`.
    pub fn rebuild_all(&mut self, pixels: &PixelStore) {
        if self.energy.dimensions() != pixels.dimensions() {
            let (width, height) = pixels.dimensions();
            self.energy = TwoDimensionalMap::new(width, height);
        }
        self.rebuild_rows(pixels);
    }

    #[cfg(not(feature = "threaded"))]
    fn rebuild_rows(&mut self, pixels: &PixelStore) {
        for (y, row) in self.energy.rows_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = pixel_energy(pixels, x as u32, y as u32);
            }
        }
    }

    // Every pixel's energy depends only on the (read-only) pixels, so
    // the field is cut into horizontal bands of whole rows, one band
    // per CPU, each filled by its own scoped thread.
    #[cfg(feature = "threaded")]
    fn rebuild_rows(&mut self, pixels: &PixelStore) {
        let width = self.energy.width() as usize;
        let height = self.energy.height() as usize;
        let bands = num_cpus::get().max(1);
        let rows_per_band = (height + bands - 1) / bands;

        let outcome = crossbeam::scope(|scope| {
            for (band, cells) in self
                .energy
                .cells_mut()
                .chunks_mut(rows_per_band * width)
                .enumerate()
            {
                scope.spawn(move |_| {
                    let top = band * rows_per_band;
                    for (offset, cell) in cells.iter_mut().enumerate() {
                        let (x, y) = (offset % width, top + offset / width);
                        *cell = pixel_energy(pixels, x as u32, y as u32);
                    }
                });
            }
        });

        if let Err(panic) = outcome {
            std::panic::resume_unwind(panic);
        }
    }

    /// Drop the cached values under `seam`, exactly the way the pixel
    /// store drops its pixels, so every surviving value stays with its
    /// pixel.
    pub fn remove_seam(&mut self, seam: &[u32], carve: Carve) -> Result<()> {
        let (width, height) = self.energy.dimensions();
        validate_seam(seam, carve, width, height)?;
        match carve {
            Carve::Width => self.energy.remove_column(seam),
            Carve::Height => self.energy.remove_row(seam),
        }
        Ok(())
    }

    /// After `seam` has been cut out of both `pixels` and this field,
    /// recompute the pixels whose neighbours changed: for every step of
    /// the seam, the pixel that now sits at the seam's coordinate and
    /// the ones on either side of it, across the cut.
    pub fn rebuild_along(&mut self, pixels: &PixelStore, seam: &[u32], carve: Carve) {
        debug_assert_eq!(self.energy.dimensions(), pixels.dimensions());
        let mut refreshed = 0;
        for (line, &cut) in seam.iter().enumerate() {
            let line = line as u32;
            let neighbours = [cut.checked_sub(1), Some(cut), cut.checked_add(1)];
            for across in neighbours.iter().filter_map(|&c| c) {
                let (x, y) = match carve {
                    Carve::Width => (across, line),
                    Carve::Height => (line, across),
                };
                if self.energy.contains(x, y) {
                    self.energy[(x, y)] = pixel_energy(pixels, x, y);
                    refreshed += 1;
                }
            }
        }
        trace!(refreshed, seam = seam.len(), "energy refreshed along seam");
    }
}

impl Lattice for EnergyField {
    fn dimensions(&self) -> (u32, u32) {
        self.energy.dimensions()
    }

    fn energy(&self, x: u32, y: u32) -> f64 {
        self.energy[(x, y)]
    }
}
