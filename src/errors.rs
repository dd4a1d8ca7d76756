// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Everything that can go wrong while carving.
//!
//! Only `InvalidReduction` and `Cancelled` are things a caller can
//! provoke on purpose.  The rest mean the grid indexing or the seam
//! machinery has a bug, and they are reported rather than papered
//! over so that no truncated image ever escapes.

use crate::seamcarver::Carve;
use failure::Fail;

#[derive(Debug, Clone, Fail, PartialEq)]
pub enum CarveError {
    #[fail(
        display = "cannot remove {} seams along the {}: the image is only {} pixels",
        requested, axis, available
    )]
    InvalidReduction {
        axis: Carve,
        requested: u32,
        available: u32,
    },

    #[fail(display = "pixel ({}, {}) lies outside a {}x{} grid", x, y, width, height)]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    #[fail(
        display = "could not trace a seam across a {}x{} energy field",
        width, height
    )]
    UnreachableSeam { width: u32, height: u32 },

    #[fail(
        display = "seam has {} entries but the grid has {} rows",
        found, expected
    )]
    MalformedSeam { expected: usize, found: usize },

    #[fail(
        display = "a {}x{} field needs {} values but {} were computed",
        width, height, expected, found
    )]
    FieldSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        found: usize,
    },

    #[fail(display = "carving cancelled after {} seams", removed)]
    Cancelled { removed: u32 },
}
