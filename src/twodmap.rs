use crate::errors::CarveError;
use itertools::iproduct;
use std::ops::{Index, IndexMut};

/// Defines the basic two-dimensional map: An addressable field
/// containing an object that represents one of several possible
/// objects during processing: an f64 for the energy field, an energy
/// plus parent column for the forward sweep, or a whole graph node
/// for the shortest-path search.
///
/// Maps are only ever built complete, in one pass, so there is no
/// placeholder value for anyone to trip over.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P> TwoDimensionalMap<P> {
    /// Build a map by asking for the value at every (x, y), row by
    /// row.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let cells = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        TwoDimensionalMap {
            width,
            height,
            cells,
        }
    }

    /// Wrap an already-computed, row-major vector of values.  Returns
    /// None if the vector is the wrong size for the map.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() == width as usize * height as usize {
            Some(TwoDimensionalMap {
                width,
                height,
                cells,
            })
        } else {
            None
        }
    }

    /// As `from_vec`, but a wrongly sized vector is reported as a
    /// `FieldSizeMismatch`.
    pub fn try_from_vec(width: u32, height: u32, cells: Vec<P>) -> Result<Self, CarveError> {
        let (expected, found) = (width as usize * height as usize, cells.len());
        TwoDimensionalMap::from_vec(width, height, cells).ok_or(CarveError::FieldSizeMismatch {
            width,
            height,
            expected,
            found,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Checked access; None for any address outside the map.
    pub fn get(&self, x: u32, y: u32) -> Option<&P> {
        if x < self.width && y < self.height {
            self.cells.get(self.get_index(x, y))
        } else {
            None
        }
    }

    /// The values of a single row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

/// A cumulative cost and the column in the row above it came from.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EnergyAndBackPointer<P: Copy> {
    pub energy: P,
    pub parent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let map = TwoDimensionalMap::from_fn(3, 2, |x, y| x + 10 * y);
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(2, 0)], 2);
        assert_eq!(map[(1, 1)], 11);
        assert_eq!(map.row(1), &[10, 11, 12]);
    }

    #[test]
    fn from_vec_checks_the_size() {
        assert!(TwoDimensionalMap::from_vec(2, 2, vec![1, 2, 3]).is_none());
        let map = TwoDimensionalMap::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(map[(1, 1)], 4);
    }

    #[test]
    fn try_from_vec_names_the_mismatch() {
        assert_eq!(
            TwoDimensionalMap::try_from_vec(3, 2, vec![0.0; 5]).err(),
            Some(CarveError::FieldSizeMismatch {
                width: 3,
                height: 2,
                expected: 6,
                found: 5
            })
        );
        assert!(TwoDimensionalMap::try_from_vec(3, 2, vec![0.0; 6]).is_ok());
    }

    #[test]
    fn checked_access_rejects_outside_addresses() {
        let mut map = TwoDimensionalMap::from_fn(2, 3, |_, _| 0u8);
        map[(1, 2)] = 9;
        assert_eq!(map.get(1, 2), Some(&9));
        assert_eq!(map.get(2, 0), None);
        assert_eq!(map.get(0, 3), None);
    }
}
