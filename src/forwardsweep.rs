// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam with a single forward sweep.
//!
//! The seam graph only ever points downward, one row at a time, so
//! the cheapest way to reach any pixel is its own energy plus the
//! cheapest of the (up to) three pixels above it.  Sweeping the rows
//! top to bottom fills in the whole table in O(width·height) with no
//! priority queue at all, and the cheapest entry in the last row is
//! the bottom of the cheapest seam.  This returns exactly what the
//! Dijkstra search over the sentinel graph returns, up to ties.

use crate::cq;
use crate::energy::EnergyField;
use crate::errors::CarveError;
use crate::seamfinder::{Seam, SeamFinder};
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};

#[derive(Debug, Copy, Clone, Default)]
pub struct ForwardSweep;

impl SeamFinder for ForwardSweep {
    fn find_seam(&self, energy: &EnergyField) -> Result<Seam, CarveError> {
        let (width, height) = energy.dimensions();
        let unreachable = CarveError::UnreachableSeam { width, height };
        if width == 0 || height == 0 {
            return Err(unreachable);
        }

        let row_len = width as usize;
        let maxwidth = width - 1;
        let mut cells: Vec<EnergyAndBackPointer<f64>> =
            Vec::with_capacity(row_len * height as usize);

        // Populate the first row with their native energies.
        cells.extend(energy.row(0).iter().zip(0..).map(|(e, x)| EnergyAndBackPointer {
            energy: *e,
            parent: x,
        }));

        // For every subsequent row, populate the target cell with the sum
        // of the *lowest adjacent upper energy* and the *x coordinate of
        // that energy*
        for y in 1..height {
            let above = (y as usize - 1) * row_len;
            for x in 0..width {
                let range = cq!(x == 0, 0, x - 1)..=cq!(x == maxwidth, maxwidth, x + 1);
                let parent_x = range
                    .min_by(|a, b| {
                        let (ea, eb) = (
                            cells[above + *a as usize].energy,
                            cells[above + *b as usize].energy,
                        );
                        ea.total_cmp(&eb)
                    })
                    .ok_or_else(|| unreachable.clone())?;
                let parent = cells[above + parent_x as usize];
                cells.push(EnergyAndBackPointer {
                    energy: energy[(x, y)] + parent.energy,
                    parent: parent_x,
                });
            }
        }

        let target = TwoDimensionalMap::try_from_vec(width, height, cells)?;

        // Find the x coordinate of the bottommost seam with the least energy.
        let mut seam_col = (0..width)
            .min_by(|a, b| {
                target[(*a, height - 1)]
                    .energy
                    .total_cmp(&target[(*b, height - 1)].energy)
            })
            .ok_or_else(|| unreachable.clone())?;

        tracing::trace!(
            total = target[(seam_col, height - 1)].energy,
            "forward sweep finished"
        );

        // Working backwards, generate a vec of x coordinates that map to
        // the seam, reverse and return.
        let columns: Vec<u32> = (0..height)
            .rev()
            .fold(Vec::<u32>::with_capacity(height as usize), |mut acc, y| {
                acc.push(seam_col);
                seam_col = target[(seam_col, y)].parent;
                acc
            })
            .into_iter()
            .rev()
            .collect();
        Ok(Seam::from(columns))
    }
}
