// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main function
//!
//! The main seamcarver routine: remove every vertical seam asked for,
//! flip the image, remove the horizontal seams as vertical ones, and
//! flip it back.

use crate::cq;
use crate::energy::calculate_energy;
use crate::errors::CarveError;
use crate::flipper::transpose;
use crate::pixelgrid::PixelGrid;
use crate::seamfinder::{Finder, Seam, SeamFinder};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// Build a new grid one column narrower, with the seam's pixel taken
/// out of every row and everything to its right shifted left.
pub fn remove_vertical_seam<G: PixelGrid>(image: &G, seam: &Seam) -> Result<G, CarveError> {
    let (width, height) = image.dimensions();
    if seam.len() != height as usize {
        return Err(CarveError::MalformedSeam {
            expected: height as usize,
            found: seam.len(),
        });
    }

    let mut imgbuf = G::new_grid(width.saturating_sub(1), height);
    for (y, &cut) in (0..height).zip(seam.columns()) {
        image.check_bounds(cut, y)?;
        for x in 0..width - 1 {
            let pixel = image.get_color(cq!(x < cut, x, x + 1), y)?;
            imgbuf.set_color(x, y, pixel)?;
        }
    }
    Ok(imgbuf)
}

/// Which dimension a pass of seams is shrinking.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl fmt::Display for Carve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Carve::Width => write!(f, "width"),
            Carve::Height => write!(f, "height"),
        }
    }
}

fn carveonce<G: PixelGrid>(image: &G, finder: Finder) -> Result<G, CarveError> {
    let energy = calculate_energy(image)?;
    let seam = finder.find_seam(&energy)?;
    trace!(
        seam = ?seam.columns(),
        energy = seam.total_energy(&energy),
        "found seam"
    );
    remove_vertical_seam(image, &seam)
}

/// How often, in seams, progress is logged unless told otherwise.
pub const DEFAULT_PROGRESS_INTERVAL: u32 = 10;

/// A struct for holding the image to be carved, and how to carve it.
pub struct SeamCarver<'a, G: PixelGrid> {
    image: &'a G,
    finder: Finder,
    progress_interval: u32,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a, G: PixelGrid> SeamCarver<'a, G> {
    /// Creates a new SeamCarver with an image to be carved.
    pub fn new(image: &'a G) -> Self {
        SeamCarver {
            image,
            finder: Finder::default(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            cancel: None,
        }
    }

    /// Use a particular seam finder.
    pub fn with_finder(mut self, finder: Finder) -> Self {
        self.finder = finder;
        self
    }

    /// Log progress every `seams` seams in each direction; zero turns
    /// progress reports off.
    pub fn with_progress_interval(mut self, seams: u32) -> Self {
        self.progress_interval = seams;
        self
    }

    /// Check `flag` before every seam, and give up with `Cancelled`
    /// as soon as it is raised.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Remove `width_reduction` columns and `height_reduction` rows from
    /// the image, one lowest-energy seam at a time.  Nothing is done
    /// unless the image has more columns and rows than are asked for.
    pub fn carve(&self, width_reduction: u32, height_reduction: u32) -> Result<G, CarveError> {
        let (width, height) = self.image.dimensions();
        for &(axis, requested, available) in &[
            (Carve::Width, width_reduction, width),
            (Carve::Height, height_reduction, height),
        ] {
            if requested >= available {
                return Err(CarveError::InvalidReduction {
                    axis,
                    requested,
                    available,
                });
            }
        }
        debug!(
            width,
            height,
            width_reduction,
            height_reduction,
            finder = %self.finder,
            "carving"
        );

        let mut scratch = self.image.duplicate()?;
        scratch = self.carve_pass(scratch, Carve::Width, width_reduction, 0)?;
        if height_reduction > 0 {
            let mut flipped = transpose(&scratch)?;
            flipped =
                self.carve_pass(flipped, Carve::Height, height_reduction, width_reduction)?;
            scratch = transpose(&flipped)?;
        }
        Ok(scratch)
    }

    // Each seam is found on a freshly computed energy field; the old
    // one is no good once its neighbors have moved.
    fn carve_pass(
        &self,
        mut scratch: G,
        direction: Carve,
        seams: u32,
        already_removed: u32,
    ) -> Result<G, CarveError> {
        for removed in 1..=seams {
            self.check_cancelled(already_removed + removed - 1)?;
            scratch = carveonce(&scratch, self.finder)?;
            if self.progress_interval > 0 && removed % self.progress_interval == 0 {
                info!(%direction, removed, remaining = seams - removed, "seams processed");
            }
        }
        if seams > 0 {
            debug!(%direction, seams, "pass complete");
        }
        Ok(scratch)
    }

    fn check_cancelled(&self, removed: u32) -> Result<(), CarveError> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => {
                info!(removed, "carving cancelled");
                Err(CarveError::Cancelled { removed })
            }
            _ => Ok(()),
        }
    }
}

/// Given an image and the number of columns and rows to take away,
/// carve it with the default seam finder.
pub fn carve<G: PixelGrid>(
    image: &G,
    width_reduction: u32,
    height_reduction: u32,
) -> Result<G, CarveError> {
    SeamCarver::new(image).carve(width_reduction, height_reduction)
}
