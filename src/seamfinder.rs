// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy lattice.
//!
//! The classic dynamic program: sweep the lattice one row at a time,
//! and for every cell record the cheapest way to reach it from the
//! three cells above it (up-left, straight up, up-right), along with
//! which of the three that was.  The cheapest cell of the last row is
//! the end of the seam; the recorded steps lead back to the top.
//!
//! Only the top-to-bottom search is written out.  Left-to-right seams
//! come from running the same search over a `Flipper`.

use crate::energy::BORDER_ENERGY;
use crate::flipper::{Flipper, Lattice};
use crate::twodmap::TwoDimensionalMap;

/// This trait defines how we will return seams from an energy lattice.
pub trait SeamFinder {
    /// The cheapest seam whose removal shrinks the width: one
    /// x-coordinate per row, top to bottom.
    fn find_seam_across_width(&self) -> Vec<u32>;

    /// The cheapest seam whose removal shrinks the height: one
    /// y-coordinate per column, left to right.
    fn find_seam_across_height(&self) -> Vec<u32>;
}

impl<L: Lattice> SeamFinder for L {
    fn find_seam_across_width(&self) -> Vec<u32> {
        lowest_vertical_seam(self)
    }

    fn find_seam_across_height(&self) -> Vec<u32> {
        lowest_vertical_seam(&Flipper { lattice: self })
    }
}

/// Where a cell's cheapest predecessor sits in the row above,
/// relative to the cell itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Step {
    Before,
    Straight,
    After,
}

impl Default for Step {
    fn default() -> Self {
        Step::Straight
    }
}

impl Step {
    // Scan order matters: on a tie the first candidate wins, which is
    // always the one with the lowest index.
    const CANDIDATES: [Step; 3] = [Step::Before, Step::Straight, Step::After];

    /// The predecessor's index, if it lies inside `0..extent`.
    fn parent(self, index: u32, extent: u32) -> Option<u32> {
        match self {
            Step::Before => index.checked_sub(1),
            Step::Straight => Some(index),
            Step::After => Some(index + 1).filter(|&p| p < extent),
        }
    }
}

#[derive(Debug, Default, Copy, Clone)]
struct CostAndStep {
    cost: f64,
    step: Step,
}

/// The top-to-bottom seam with the least total energy, as one
/// x-coordinate per row.
fn lowest_vertical_seam<L: Lattice>(lattice: &L) -> Vec<u32> {
    let (width, height) = lattice.dimensions();
    let mut target: TwoDimensionalMap<CostAndStep> = TwoDimensionalMap::filled(
        width,
        height,
        CostAndStep {
            cost: f64::INFINITY,
            step: Step::Straight,
        },
    );

    // The top row is all border, and every seam starts there.
    for x in 0..width {
        target[(x, 0)].cost = BORDER_ENERGY;
    }

    for y in 1..height {
        for x in 0..width {
            let mut best = CostAndStep {
                cost: f64::INFINITY,
                step: Step::Straight,
            };
            for &step in Step::CANDIDATES.iter() {
                if let Some(parent_x) = step.parent(x, width) {
                    let cost = target[(parent_x, y - 1)].cost;
                    if cost < best.cost {
                        best = CostAndStep { cost, step };
                    }
                }
            }
            target[(x, y)] = CostAndStep {
                cost: lattice.energy(x, y) + best.cost,
                step: best.step,
            };
        }
    }

    // The first x of the bottom row with the least total.
    let bottom = height - 1;
    let mut seam_col = (1..width).fold(0, |best, x| {
        if target[(x, bottom)].cost < target[(best, bottom)].cost {
            x
        } else {
            best
        }
    });

    // Working backwards, collect the x coordinates, then reverse.
    let mut seam: Vec<u32> = (0..height)
        .rev()
        .map(|y| {
            let here = seam_col;
            if let Some(parent_x) = target[(here, y)].step.parent(here, width) {
                seam_col = parent_x;
            }
            here
        })
        .collect();
    seam.reverse();
    seam
}
