// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Every pixel gets a scalar "importance": the magnitude of its color
//! gradient, sqrt(|Δx|² + |Δy|²), where each squared difference is
//! taken between the pixels on either side of it.  At the borders the
//! sampling window slides inward rather than falling off the edge, so
//! the pixel in column 0 is measured with columns 0 and 2.
//!
//! The field is recomputed from scratch for every seam; removing a
//! seam changes the gradients of everything that used to touch it.

use crate::cq;
use crate::errors::CarveError;
use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::TwoDimensionalMap;
#[cfg(not(feature = "threaded"))]
use itertools::iproduct;

/// One non-negative energy value per pixel.
pub type EnergyField = TwoDimensionalMap<f64>;

// The pair of addresses whose difference is the gradient at `at`.
// Grids of three or more slide the window inward at the borders;
// anything narrower just clamps it, which for a single pixel means
// comparing the pixel with itself.
pub(crate) fn sample_window(at: u32, extent: u32) -> (u32, u32) {
    let last = extent.saturating_sub(1);
    let centre = cq!(at == 0, 1, at).min(last.saturating_sub(1));
    (centre.saturating_sub(1), (centre + 1).min(last))
}

/// The energy of the single pixel at (x, y).
pub fn energy_at<G: PixelGrid>(grid: &G, x: u32, y: u32) -> Result<f64, CarveError> {
    grid.check_bounds(x, y)?;
    let (left, right) = sample_window(x, grid.width());
    let (up, down) = sample_window(y, grid.height());
    let dx = energy_of_pair(&grid.get_color(left, y)?, &grid.get_color(right, y)?);
    let dy = energy_of_pair(&grid.get_color(x, up)?, &grid.get_color(x, down)?);
    Ok((dx + dy).sqrt())
}

/// Compute the energy of every pixel in the grid.
#[cfg(not(feature = "threaded"))]
pub fn calculate_energy<G: PixelGrid>(grid: &G) -> Result<EnergyField, CarveError> {
    let (width, height) = grid.dimensions();
    let cells = iproduct!(0..height, 0..width)
        .map(|(y, x)| energy_at(grid, x, y))
        .collect::<Result<Vec<f64>, CarveError>>()?;
    TwoDimensionalMap::try_from_vec(width, height, cells)
}

/// Compute the energy of every pixel in the grid, one band of rows
/// per CPU.  Each pixel is independent, so the bands never need to
/// talk to each other; they just each own a disjoint `chunks_mut` of
/// the target.
#[cfg(feature = "threaded")]
pub fn calculate_energy<G: PixelGrid>(grid: &G) -> Result<EnergyField, CarveError> {
    use std::panic::resume_unwind;

    let (width, height) = grid.dimensions();
    let row_len = width as usize;
    let mut cells = vec![0.0f64; row_len * height as usize];

    if !cells.is_empty() {
        let bands = num_cpus::get().max(1);
        let rows_per_band = ((height as usize) + bands - 1) / bands;

        crossbeam::scope(|scope| {
            let workers: Vec<_> = cells
                .chunks_mut(rows_per_band * row_len)
                .enumerate()
                .map(|(band, chunk)| {
                    scope.spawn(move |_| -> Result<(), CarveError> {
                        let first_row = band * rows_per_band;
                        for (offset, cell) in chunk.iter_mut().enumerate() {
                            let x = (offset % row_len) as u32;
                            let y = (first_row + offset / row_len) as u32;
                            *cell = energy_at(grid, x, y)?;
                        }
                        Ok(())
                    })
                })
                .collect();

            workers
                .into_iter()
                .map(|worker| worker.join().unwrap_or_else(|panic| resume_unwind(panic)))
                .collect::<Result<(), CarveError>>()
        })
        .unwrap_or_else(|panic| resume_unwind(panic))?;
    }

    TwoDimensionalMap::try_from_vec(width, height, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    // A 5x4 black and white checkerboard with a solid red center
    // column.  Columns either side of any pixel share a color, except
    // where the red column is one of them.
    fn checkerboard_with_red_column() -> RgbImage {
        RgbImage::from_fn(5, 4, |x, y| {
            if x == 2 {
                RED
            } else if (x + y) % 2 == 0 {
                BLACK
            } else {
                WHITE
            }
        })
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn sampling_window_slides_inward_at_the_borders() {
        assert_eq!(sample_window(0, 5), (0, 2));
        assert_eq!(sample_window(1, 5), (0, 2));
        assert_eq!(sample_window(2, 5), (1, 3));
        assert_eq!(sample_window(4, 5), (2, 4));
        assert_eq!(sample_window(0, 3), (0, 2));
        assert_eq!(sample_window(2, 3), (0, 2));
    }

    #[test]
    fn sampling_window_stays_inside_tiny_grids() {
        assert_eq!(sample_window(0, 2), (0, 1));
        assert_eq!(sample_window(1, 2), (0, 1));
        assert_eq!(sample_window(0, 1), (0, 0));
    }

    #[test]
    fn energy_generator_works() {
        let energy = calculate_energy(&checkerboard_with_red_column()).unwrap();
        assert_eq!(energy.dimensions(), (5, 4));

        // Black rows compare red with black; white rows compare red
        // with white, which differs in two channels.
        let black_row = 255.0;
        let white_row = (2.0f64 * 255.0 * 255.0).sqrt();
        let expected = [
            [black_row, black_row, 0.0, black_row, black_row],
            [white_row, white_row, 0.0, white_row, white_row],
            [black_row, black_row, 0.0, black_row, black_row],
            [white_row, white_row, 0.0, white_row, white_row],
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, value) in row.iter().enumerate() {
                assert_close(energy[(x as u32, y as u32)], *value);
            }
        }
    }

    #[test]
    fn uniform_grid_has_no_energy() {
        let grid = RgbImage::from_pixel(6, 3, Rgb([12, 34, 56]));
        let energy = calculate_energy(&grid).unwrap();
        assert!(energy.row(0).iter().chain(energy.row(2)).all(|e| *e == 0.0));
        assert!(energy.row(1).iter().all(|e| *e == 0.0));
    }

    #[test]
    fn single_pixel_grid_has_zero_energy() {
        let grid = RgbImage::from_pixel(1, 1, WHITE);
        let energy = calculate_energy(&grid).unwrap();
        assert_eq!(energy[(0, 0)], 0.0);
    }

    #[test]
    fn two_column_grid_compares_both_columns() {
        let grid = RgbImage::from_fn(2, 1, |x, _| if x == 0 { BLACK } else { RED });
        let energy = calculate_energy(&grid).unwrap();
        assert_close(energy[(0, 0)], 255.0);
        assert_close(energy[(1, 0)], 255.0);
    }

    #[test]
    fn energy_at_rejects_addresses_off_the_grid() {
        let grid = checkerboard_with_red_column();
        assert!(energy_at(&grid, 5, 0).is_err());
        assert!(energy_at(&grid, 0, 4).is_err());
    }
}
