// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixels being carved.
//!
//! A mutable grid of plain RGB triples.  It knows how to shrink itself
//! along a seam and nothing about energy; the image crate only shows up
//! at the edges, when pixels come in and when they go back out.

use crate::error::Result;
use crate::seam::{validate_seam, Carve};
use crate::twodmap::TwoDimensionalMap;
use image::{GenericImageView, Pixel, Rgb, RgbImage};
use itertools::iproduct;

/// An (R, G, B) sample.
pub type Color = [u8; 3];

/// The current state of the image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelStore {
    pixels: TwoDimensionalMap<Color>,
}

impl PixelStore {
    /// Build a store from row-major samples.
    pub fn from_vec(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self> {
        Ok(PixelStore {
            pixels: TwoDimensionalMap::from_vec(width, height, pixels)?,
        })
    }

    /// Copy the pixels of any 8-bit image, dropping alpha and
    /// expanding grayscale.
    pub fn from_image<I, P>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        let (width, height) = image.dimensions();
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| image.get_pixel(x, y).to_rgb().0)
            .collect();
        Self::from_vec(width, height, pixels)
    }

    /// Render the current pixels as an image buffer.
    pub fn to_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width(), self.height(), |x, y| {
            Rgb(self.pixels[(x, y)])
        })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        self.pixels.get(x, y)
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.pixels.set(x, y, color)
    }

    // Unchecked; the energy calculation only ever asks for neighbours
    // of interior pixels.
    #[inline]
    pub(crate) fn color(&self, x: u32, y: u32) -> Color {
        self.pixels[(x, y)]
    }

    /// Remove one pixel from every row, at `seam[y]`.  The width
    /// shrinks by one.
    pub fn remove_column(&mut self, seam: &[u32]) -> Result<()> {
        let (width, height) = self.dimensions();
        validate_seam(seam, Carve::Width, width, height)?;
        self.pixels.remove_column(seam);
        Ok(())
    }

    /// Remove one pixel from every column, at `seam[x]`.  The height
    /// shrinks by one.
    pub fn remove_row(&mut self, seam: &[u32]) -> Result<()> {
        let (width, height) = self.dimensions();
        validate_seam(seam, Carve::Height, width, height)?;
        self.pixels.remove_row(seam);
        Ok(())
    }
}
