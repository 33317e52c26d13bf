// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy field as a grayscale image, mostly for looking at
//! what the carver thinks is important.

use crate::energy::EnergyField;
use image::{GrayImage, Luma};

/// Scale every energy into 0..=255 relative to the largest energy in
/// the field.  A field with no energy at all comes out black.
pub fn energy_to_image(field: &EnergyField) -> GrayImage {
    let grid = field.grid();
    let factor = grid.cells().iter().cloned().fold(0.0, f64::max);
    let (width, height) = grid.dimensions();
    GrayImage::from_fn(width, height, |x, y| {
        if factor <= 0.0 {
            return Luma([0]);
        }
        let level = (grid[(x, y)] / factor * 255.0).round();
        Luma([level.max(0.0).min(255.0) as u8])
    })
}
