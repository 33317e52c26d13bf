// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Energy lattices, and a dimensional flipper for them.
//!
//! The seam search only needs to know how big a lattice is and what
//! each cell costs.  `Flipper` maps the width to the height and every
//! x to y, and vice versa, so a search written for top-to-bottom seams
//! finds left-to-right seams when handed a flipped lattice.

use crate::twodmap::TwoDimensionalMap;

/// Anything the seam search can walk: a rectangle of non-negative
/// energies.
pub trait Lattice {
    /// (width, height)
    fn dimensions(&self) -> (u32, u32);

    /// The energy of the cell at (x, y).  Callers stay in bounds.
    fn energy(&self, x: u32, y: u32) -> f64;
}

impl Lattice for TwoDimensionalMap<f64> {
    fn dimensions(&self) -> (u32, u32) {
        TwoDimensionalMap::dimensions(self)
    }

    fn energy(&self, x: u32, y: u32) -> f64 {
        self[(x, y)]
    }
}

/// A lattice seen through a 90° flip about the main diagonal.
pub struct Flipper<'a, L: Lattice> {
    pub lattice: &'a L,
}

impl<'a, L: Lattice> Lattice for Flipper<'a, L> {
    fn dimensions(&self) -> (u32, u32) {
        let (width, height) = self.lattice.dimensions();
        (height, width)
    }

    fn energy(&self, x: u32, y: u32) -> f64 {
        self.lattice.energy(y, x)
    }
}
