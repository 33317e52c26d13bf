// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - the engine
//!
//! `SeamCarver` owns the pixels and their energy field and keeps the
//! two in step: every removal finds a seam, validates it, cuts it out
//! of both grids, and refreshes the energy along the cut.  Nothing is
//! touched until the seam has been validated.

use crate::energy::EnergyField;
use crate::error::{Result, SeamError};
use crate::pixelstore::PixelStore;
use crate::seam::{validate_seam, Carve};
use crate::seamfinder::SeamFinder;
use image::{GenericImageView, Pixel, RgbImage};
use tracing::{debug, info};

/// A struct for holding the image being carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    pixels: PixelStore,
    energy: EnergyField,
}

impl SeamCarver {
    /// Creates a new SeamCarver from a copy of `image`.  Fails if the
    /// image has no pixels.
    pub fn new<I, P>(image: &I) -> Result<Self>
    where
        I: GenericImageView<Pixel = P>,
        P: Pixel<Subpixel = u8> + 'static,
    {
        Ok(Self::from_pixels(PixelStore::from_image(image)?))
    }

    /// Creates a new SeamCarver that takes over `pixels`.
    pub fn from_pixels(pixels: PixelStore) -> Self {
        let energy = EnergyField::new(&pixels);
        SeamCarver { pixels, energy }
    }

    /// A snapshot of the image as it stands.
    pub fn current_image(&self) -> RgbImage {
        self.pixels.to_image()
    }

    /// Consume the carver, returning the carved image.
    pub fn into_image(self) -> RgbImage {
        self.pixels.to_image()
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &PixelStore {
        &self.pixels
    }

    pub fn energy(&self) -> &EnergyField {
        &self.energy
    }

    pub fn energy_at(&self, x: u32, y: u32) -> Result<f64> {
        self.energy.energy_at(x, y)
    }

    /// The next seam `remove_seam_across_width` would take.
    pub fn find_seam_across_width(&self) -> Vec<u32> {
        self.energy.find_seam_across_width()
    }

    /// The next seam `remove_seam_across_height` would take.
    pub fn find_seam_across_height(&self) -> Vec<u32> {
        self.energy.find_seam_across_height()
    }

    /// Remove the cheapest top-to-bottom seam; the width shrinks by one.
    pub fn remove_seam_across_width(&mut self) -> Result<()> {
        let seam = self.find_seam_across_width();
        self.remove_seam(Carve::Width, &seam)
    }

    /// Remove the cheapest left-to-right seam; the height shrinks by one.
    pub fn remove_seam_across_height(&mut self) -> Result<()> {
        let seam = self.find_seam_across_height();
        self.remove_seam(Carve::Height, &seam)
    }

    /// Cut an arbitrary seam out of the image.  The seam is checked
    /// against the current dimensions first, and an invalid seam
    /// leaves the image exactly as it was.
    pub fn remove_seam(&mut self, carve: Carve, seam: &[u32]) -> Result<()> {
        let (width, height) = self.pixels.dimensions();
        validate_seam(seam, carve, width, height)?;

        match carve {
            Carve::Width => self.pixels.remove_column(seam)?,
            Carve::Height => self.pixels.remove_row(seam)?,
        }
        self.energy.remove_seam(seam, carve)?;
        self.energy.rebuild_along(&self.pixels, seam, carve);

        debug!(
            %carve,
            width = self.width(),
            height = self.height(),
            "removed seam"
        );
        Ok(())
    }

    /// Given a desired new width and height, repeatedly carve seams
    /// out of the image.  While both dimensions need to shrink the
    /// removals alternate between them, starting with the width.
    pub fn carve(&mut self, new_width: u32, new_height: u32) -> Result<()> {
        let (width, height) = self.pixels.dimensions();
        if new_width > width || new_height > height {
            return Err(SeamError::InvalidInput(format!(
                "cannot upscale a {}x{} image to {}x{}",
                width, height, new_width, new_height
            )));
        }
        if new_width == 0 || new_height == 0 {
            return Err(SeamError::InvalidInput(format!(
                "cannot carve down to an empty {}x{} image",
                new_width, new_height
            )));
        }

        let mut direction = Carve::Width;
        while self.width() > new_width && self.height() > new_height {
            self.remove_one(direction)?;
            direction = direction.turn();
        }
        while self.width() > new_width {
            self.remove_one(Carve::Width)?;
        }
        while self.height() > new_height {
            self.remove_one(Carve::Height)?;
        }

        info!(
            from_width = width,
            from_height = height,
            width = self.width(),
            height = self.height(),
            "carved"
        );
        Ok(())
    }

    fn remove_one(&mut self, carve: Carve) -> Result<()> {
        match carve {
            Carve::Width => self.remove_seam_across_width(),
            Carve::Height => self.remove_seam_across_height(),
        }
    }
}

/// Carve a copy of `image` down to `new_width` x `new_height`.
pub fn seamcarve<I, P>(image: &I, new_width: u32, new_height: u32) -> Result<RgbImage>
where
    I: GenericImageView<Pixel = P>,
    P: Pixel<Subpixel = u8> + 'static,
{
    let mut carver = SeamCarver::new(image)?;
    carver.carve(new_width, new_height)?;
    Ok(carver.into_image())
}
