// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The difference between a pair of pixels
//!
//! Given two pixels, the gradient between them is the squared
//! distance between the colors that make them up:
//!
//! ```text
//!        |Δ|² = (Δr)² + (Δg)² + (Δb)²
//! ```

use crate::pixelstore::Color;

/// (Pixel, Pixel) -> squared color distance
///
/// Channels are treated as plain real numbers; no luma weighting.
#[inline]
pub fn squared_difference(p1: &Color, p2: &Color) -> f64 {
    p1.iter()
        .zip(p2.iter())
        .map(|(c1, c2)| {
            let delta = f64::from(*c1) - f64::from(*c2);
            delta * delta
        })
        .sum()
}
