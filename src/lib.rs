// #![deny(missing_docs)]

//! Content-aware image shrinking.  Repeatedly find the connected
//! top-to-bottom path of pixels with the least energy and take it
//! out; do the same on the flipped image to lose rows.

mod ternary;

pub mod energy;
pub mod errors;
pub mod flipper;
pub mod forwardsweep;
pub mod logging;
pub mod pixelgrid;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamgraph;
pub mod shortestpath;
pub mod twodmap;

pub use energy::{calculate_energy, EnergyField};
pub use errors::CarveError;
pub use flipper::transpose;
pub use forwardsweep::ForwardSweep;
pub use pixelgrid::PixelGrid;
pub use seamcarver::{carve, remove_vertical_seam, Carve, SeamCarver};
pub use seamfinder::{Finder, Seam, SeamFinder};
pub use seamgraph::SeamGraph;
pub use shortestpath::ShortestPath;
