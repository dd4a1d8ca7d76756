// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Image dimensional flipper
//!
//! Maps the width to the original height, and vice versa, as well as
//! every x to y and vice versa.  Flipping, carving a vertical seam,
//! and flipping back is carving a horizontal seam, so the energy
//! field and the seam finders only ever have to think in columns.

use crate::errors::CarveError;
use crate::pixelgrid::PixelGrid;
use itertools::iproduct;

/// A new grid where every (x, y) holds the source's (y, x).
pub fn transpose<G: PixelGrid>(grid: &G) -> Result<G, CarveError> {
    let (width, height) = grid.dimensions();
    let mut flipped = G::new_grid(height, width);
    for (y, x) in iproduct!(0..height, 0..width) {
        flipped.set_color(y, x, grid.get_color(x, y)?)?;
    }
    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn swaps_dimensions_and_addresses() {
        let grid = RgbImage::from_fn(3, 2, |x, y| Rgb([x as u8, y as u8, 0]));
        let flipped = transpose(&grid).unwrap();
        assert_eq!(PixelGrid::dimensions(&flipped), (2, 3));
        for (y, x) in iproduct!(0..2, 0..3) {
            assert_eq!(flipped.get_color(y, x), grid.get_color(x, y));
        }
    }

    #[test]
    fn flipping_twice_changes_nothing() {
        let grid = RgbImage::from_fn(4, 7, |x, y| Rgb([x as u8 * 3, y as u8 * 5, 9]));
        assert_eq!(transpose(&transpose(&grid).unwrap()).unwrap(), grid);
    }

    #[test]
    fn single_row_becomes_a_single_column() {
        let grid = RgbImage::from_fn(5, 1, |x, _| Rgb([x as u8, 0, 0]));
        let flipped = transpose(&grid).unwrap();
        assert_eq!(PixelGrid::dimensions(&flipped), (1, 5));
        assert_eq!(flipped.get_color(0, 4), Ok(Rgb([4, 0, 0])));
    }
}
