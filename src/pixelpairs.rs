// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared
//! distance between the colors that make them up, the classic
//! d(R)² + d(G)² + d(B)².

use image::{Pixel, Primitive};
use num_traits::NumCast;

// Takes the channels (R,G,B) from two pixels and maps the difference
// between each channel, squares it, and then sums them all up.  This
// is the rusty expression of:
//
//        |Δx|² = (Δrx)²+(Δgx)²+(Δbx)²
//
/// (Pixel, Pixel) -> Energy
#[inline]
pub fn energy_of_pair<P, S>(p1: &P, p2: &P) -> f64
where
    P: Pixel<Subpixel = S> + 'static,
    S: Primitive + 'static,
{
    p1.channels()
        .iter()
        .zip(p2.channels())
        .map(|(c1, c2)| {
            let c1s: f64 = NumCast::from(*c1).unwrap_or(0.0);
            let c2s: f64 = NumCast::from(*c2).unwrap_or(0.0);
            (c1s - c2s) * (c1s - c2s)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    #[test]
    fn black_against_white() {
        let pair = energy_of_pair(&Rgb([0u8, 0, 0]), &Rgb([255u8, 255, 255]));
        assert_eq!(pair, 3.0 * 255.0 * 255.0);
    }

    #[test]
    fn order_does_not_matter() {
        let (a, b) = (Rgb([10u8, 200, 30]), Rgb([40u8, 100, 31]));
        assert_eq!(energy_of_pair(&a, &b), energy_of_pair(&b, &a));
        assert_eq!(energy_of_pair(&a, &b), 900.0 + 10000.0 + 1.0);
    }

    #[test]
    fn works_on_any_pixel_type() {
        assert_eq!(energy_of_pair(&Luma([9u16]), &Luma([1u16])), 64.0);
    }
}
