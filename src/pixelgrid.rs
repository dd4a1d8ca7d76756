// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel grid
//!
//! The carver never cares where pixels come from.  It asks for a
//! width, a height, and the color at an address, and it builds new
//! grids by allocating one and filling it in.  Unlike ImageRS's own
//! `get_pixel`, every access here is checked and reported as an
//! error rather than a panic.

use crate::errors::CarveError;
use image::{Rgb, RgbImage};

/// A rectangular field of RGB colors, addressed by (column, row).
pub trait PixelGrid: Sized + Sync {
    /// Allocate a grid of the given size.  Every pixel will be
    /// written before the grid is handed to anyone else.
    fn new_grid(width: u32, height: u32) -> Self;

    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn get_color(&self, x: u32, y: u32) -> Result<Rgb<u8>, CarveError>;

    fn set_color(&mut self, x: u32, y: u32, color: Rgb<u8>) -> Result<(), CarveError>;

    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Fails with `OutOfBounds` if (x, y) is not an address in this grid.
    fn check_bounds(&self, x: u32, y: u32) -> Result<(), CarveError> {
        let (width, height) = self.dimensions();
        if x < width && y < height {
            Ok(())
        } else {
            Err(CarveError::OutOfBounds {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// A pixel-for-pixel copy, used as the carver's scratch space.
    fn duplicate(&self) -> Result<Self, CarveError> {
        let (width, height) = self.dimensions();
        let mut scratch = Self::new_grid(width, height);
        for y in 0..height {
            for x in 0..width {
                scratch.set_color(x, y, self.get_color(x, y)?)?;
            }
        }
        Ok(scratch)
    }
}

impl PixelGrid for RgbImage {
    fn new_grid(width: u32, height: u32) -> Self {
        RgbImage::new(width, height)
    }

    fn width(&self) -> u32 {
        RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        RgbImage::height(self)
    }

    fn get_color(&self, x: u32, y: u32) -> Result<Rgb<u8>, CarveError> {
        self.check_bounds(x, y)?;
        Ok(*self.get_pixel(x, y))
    }

    fn set_color(&mut self, x: u32, y: u32, color: Rgb<u8>) -> Result<(), CarveError> {
        self.check_bounds(x, y)?;
        self.put_pixel(x, y, color);
        Ok(())
    }
}
