// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seams, and the rules a seam has to follow before anything will
//! cut along it.

use crate::error::{Result, SeamError};
use itertools::Itertools;
use std::fmt;

/// Which dimension a seam shrinks.
///
/// A `Width` seam holds one x-coordinate per row and runs top to
/// bottom; a `Height` seam holds one y-coordinate per column and runs
/// left to right.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl Carve {
    /// The other one.  Used to alternate removals when both
    /// dimensions are shrinking.
    pub fn turn(self) -> Self {
        match self {
            Carve::Width => Carve::Height,
            Carve::Height => Carve::Width,
        }
    }

    // (the dimension being cut, the dimension the seam spans)
    fn spans(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Carve::Width => (width, height),
            Carve::Height => (height, width),
        }
    }
}

impl fmt::Display for Carve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Carve::Width => write!(f, "width"),
            Carve::Height => write!(f, "height"),
        }
    }
}

/// Check that `seam` can be removed from a `width` x `height` grid
/// along `carve`.
///
/// The seam must have one entry per line, every entry must be inside
/// the dimension being cut, neighbouring entries may differ by at most
/// one, and the dimension being cut must be larger than one.
pub fn validate_seam(seam: &[u32], carve: Carve, width: u32, height: u32) -> Result<()> {
    let (extent, length) = carve.spans(width, height);

    if extent <= 1 {
        return Err(SeamError::InvalidSeam(format!(
            "cannot reduce a {} of {} any further",
            carve, extent
        )));
    }

    if seam.len() != length as usize {
        return Err(SeamError::InvalidSeam(format!(
            "a {} seam must have {} entries, got {}",
            carve,
            length,
            seam.len()
        )));
    }

    if let Some((line, index)) = seam.iter().enumerate().find(|&(_, &i)| i >= extent) {
        return Err(SeamError::InvalidSeam(format!(
            "entry {} is {}, outside a {} of {}",
            line, index, carve, extent
        )));
    }

    if let Some((line, (a, b))) = seam
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|&(_, (&a, &b))| a.max(b) - a.min(b) > 1)
    {
        return Err(SeamError::InvalidSeam(format!(
            "entries {} and {} jump from {} to {}",
            line,
            line + 1,
            a,
            b
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_alternates() {
        assert_eq!(Carve::Width.turn(), Carve::Height);
        assert_eq!(Carve::Width.turn().turn(), Carve::Width);
    }

    #[test]
    fn accepts_connected_in_range_seams() {
        assert!(validate_seam(&[0, 1, 2, 2, 1], Carve::Width, 3, 5).is_ok());
        assert!(validate_seam(&[4, 3, 4], Carve::Height, 3, 5).is_ok());
    }

    #[test]
    fn rejects_wrong_length() {
        let err = validate_seam(&[0, 1], Carve::Width, 3, 5).unwrap_err();
        assert!(matches!(err, SeamError::InvalidSeam(_)));
    }

    #[test]
    fn rejects_out_of_range_entries() {
        assert!(validate_seam(&[1, 2, 3], Carve::Width, 3, 3).is_err());
        assert!(validate_seam(&[0, 0, 3], Carve::Height, 3, 3).is_err());
    }

    #[test]
    fn rejects_disconnected_steps() {
        let err = validate_seam(&[0, 2, 2], Carve::Width, 4, 3).unwrap_err();
        assert_eq!(
            err,
            SeamError::InvalidSeam("entries 0 and 1 jump from 0 to 2".to_string())
        );
    }

    #[test]
    fn rejects_cutting_a_single_pixel_dimension() {
        assert!(validate_seam(&[0, 0, 0], Carve::Width, 1, 3).is_err());
        assert!(validate_seam(&[0, 0, 0], Carve::Height, 3, 1).is_err());
    }
}
