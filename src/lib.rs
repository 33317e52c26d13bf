// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Content-aware image resizing by seam carving.
//!
//! A `SeamCarver` takes a copy of an image, computes the energy of
//! every pixel, and then removes one seam at a time: the connected
//! top-to-bottom (or left-to-right) path of pixels with the least total
//! energy.  The energy field is maintained incrementally, so each
//! removal only recomputes the pixels next to the cut.
//!
//! ```no_run
//! use seamcarver::SeamCarver;
//!
//! let image = image::open("ocean.png").unwrap();
//! let mut carver = SeamCarver::new(&image).unwrap();
//! for _ in 0..50 {
//!     carver.remove_seam_across_width().unwrap();
//! }
//! carver.current_image().save("narrower.png").unwrap();
//! ```

pub mod dump;
pub mod energy;
pub mod error;
pub mod flipper;
pub mod pixelpairs;
pub mod pixelstore;
pub mod seam;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use dump::energy_to_image;
pub use energy::{EnergyField, BORDER_ENERGY};
pub use error::{Result, SeamError};
pub use flipper::{Flipper, Lattice};
pub use pixelstore::{Color, PixelStore};
pub use seam::{validate_seam, Carve};
pub use seamcarver::{seamcarve, SeamCarver};
pub use seamfinder::SeamFinder;
pub use twodmap::TwoDimensionalMap;
