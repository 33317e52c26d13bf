// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carving engine.
//!
//! Every failure is a caller error.  Operations that mutate the image
//! validate first, so an `Err` always means nothing was changed.

use failure::Fail;

/// The ways a carving request can go wrong.
#[derive(Debug, Fail, Clone, PartialEq)]
pub enum SeamError {
    /// The image handed to the engine is empty or malformed, or a
    /// resize request asked for something carving can't do.
    #[fail(display = "invalid input: {}", _0)]
    InvalidInput(String),

    /// A coordinate fell outside the current image.
    #[fail(
        display = "coordinate ({}, {}) is outside the {}x{} image",
        x, y, width, height
    )]
    OutOfRange {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// A seam is the wrong length, leaves the image, is not connected,
    /// or targets a dimension that is already one pixel wide.
    #[fail(display = "invalid seam: {}", _0)]
    InvalidSeam(String),
}

/// Result alias for carving operations.
pub type Result<T> = std::result::Result<T, SeamError>;
