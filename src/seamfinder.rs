use crate::energy::EnergyField;
use crate::errors::CarveError;
use crate::forwardsweep::ForwardSweep;
use crate::shortestpath::ShortestPath;
use std::fmt;
use std::str::FromStr;

/// A top-to-bottom seam: the column to remove from each row, in row
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn columns(&self) -> &[u32] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if no two consecutive rows are more than one column apart.
    pub fn is_connected(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }

    /// The sum of the energies of every pixel on the seam.
    pub fn total_energy(&self, energy: &EnergyField) -> f64 {
        self.0
            .iter()
            .zip(0..)
            .filter_map(|(x, y)| energy.get(*x, y))
            .sum()
    }
}

impl From<Vec<u32>> for Seam {
    fn from(columns: Vec<u32>) -> Self {
        Seam(columns)
    }
}

/// This trait defines how we will return seams from an energy field.
/// It's a primitive interface, just enough to make room for multiple
/// seam finders.
pub trait SeamFinder {
    /// The cheapest top-to-bottom seam through the field.
    fn find_seam(&self, energy: &EnergyField) -> Result<Seam, CarveError>;
}

/// The seam finders on offer, for choosing one at run time.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Finder {
    /// Row-by-row dynamic programming.
    Sweep,
    /// Dijkstra over the sentinel-framed seam graph.
    Dijkstra,
}

impl Default for Finder {
    fn default() -> Self {
        Finder::Sweep
    }
}

impl SeamFinder for Finder {
    fn find_seam(&self, energy: &EnergyField) -> Result<Seam, CarveError> {
        match self {
            Finder::Sweep => ForwardSweep.find_seam(energy),
            Finder::Dijkstra => ShortestPath.find_seam(energy),
        }
    }
}

impl fmt::Display for Finder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Finder::Sweep => write!(f, "sweep"),
            Finder::Dijkstra => write!(f, "dijkstra"),
        }
    }
}

impl FromStr for Finder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sweep" => Ok(Finder::Sweep),
            "dijkstra" => Ok(Finder::Dijkstra),
            other => Err(format!("unknown seam finder '{}'", other)),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    // The classic 5x4 test field.  The cheapest seam runs 2, 3, 4, 3
    // for a total of 8; nothing else comes close.
    pub(crate) const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    pub(crate) fn energy_grid() -> EnergyField {
        EnergyField::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    // Every connected top-to-bottom path through the field, by brute
    // force.
    pub(crate) fn all_seams(width: u32, height: u32) -> Vec<Vec<u32>> {
        let mut seams: Vec<Vec<u32>> = (0..width).map(|x| vec![x]).collect();
        for _ in 1..height {
            seams = seams
                .into_iter()
                .flat_map(|seam| {
                    let last = *seam.last().unwrap_or(&0);
                    let lo = last.saturating_sub(1);
                    let hi = (last + 1).min(width - 1);
                    (lo..=hi).map(move |x| {
                        let mut next = seam.clone();
                        next.push(x);
                        next
                    })
                })
                .collect();
        }
        seams
    }

    pub(crate) fn cheapest_total(energy: &EnergyField) -> f64 {
        let (width, height) = energy.dimensions();
        all_seams(width, height)
            .into_iter()
            .map(|columns| Seam::from(columns).total_energy(energy))
            .fold(std::f64::INFINITY, f64::min)
    }

    #[test]
    fn seam_reports_connectivity() {
        assert!(Seam::from(vec![2, 3, 3, 2]).is_connected());
        assert!(!Seam::from(vec![0, 2]).is_connected());
        assert!(Seam::from(vec![]).is_connected());
    }

    #[test]
    fn seam_totals_its_pixels() {
        assert_eq!(Seam::from(vec![2, 3, 4, 3]).total_energy(&energy_grid()), 8.0);
    }

    #[test]
    fn brute_force_enumerates_every_path() {
        // Three starts, and from each a fan of two or three choices.
        assert_eq!(all_seams(3, 1).len(), 3);
        assert_eq!(all_seams(3, 2).len(), 7);
        assert_eq!(all_seams(3, 3).len(), 17);
    }

    #[test]
    fn finder_names_round_trip_through_strings() {
        assert_eq!("dijkstra".parse::<Finder>(), Ok(Finder::Dijkstra));
        assert_eq!(Finder::Sweep.to_string(), "sweep");
        assert!("astar".parse::<Finder>().is_err());
        assert_eq!(Finder::default(), Finder::Sweep);
    }

    #[test]
    fn both_finders_agree_on_the_classic_field() {
        let energy = energy_grid();
        for finder in &[Finder::Sweep, Finder::Dijkstra] {
            let seam = finder.find_seam(&energy).unwrap();
            assert_eq!(seam.columns(), &[2, 3, 4, 3], "{} disagrees", finder);
        }
    }
}
