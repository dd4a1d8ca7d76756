// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam graph
//!
//! A layered digraph laid over the pixel grid, never materialized:
//! the graph is just its dimensions, and a node is just an address.
//! Row 0 and row height+1 are sentinel rows with no pixels under
//! them.  Every node points at the (up to) three nodes diagonally and
//! directly below it, and each sentinel row is also a chain running
//! left to right.  Because walking along a sentinel chain is free,
//! (0, 0) behaves like a single source sitting above every column,
//! and (width-1, height+1) like a single sink under every column,
//! and one shortest-path search finds the cheapest seam starting and
//! ending anywhere.

use crate::cq;
use crate::energy::EnergyField;
use crate::errors::CarveError;

/// A node address: (column, graph row).  Graph row y holds pixel row
/// y-1.
pub type Node = (u32, u32);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SeamGraph {
    width: u32,
    height: u32,
}

impl SeamGraph {
    /// A graph over a grid of `width` x `height` pixels.
    pub fn new(width: u32, height: u32) -> Self {
        SeamGraph { width, height }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of graph rows: every pixel row plus the two sentinels.
    pub fn rows(&self) -> u32 {
        self.height + 2
    }

    pub fn source(&self) -> Node {
        (0, 0)
    }

    pub fn sink(&self) -> Node {
        (self.width.saturating_sub(1), self.height + 1)
    }

    pub fn is_sentinel(&self, (_, y): Node) -> bool {
        y == 0 || y == self.height + 1
    }

    /// The pixel a node stands for, or None for sentinels.
    pub fn pixel_of(&self, node: Node) -> Option<(u32, u32)> {
        cq!(self.is_sentinel(node), None, Some((node.0, node.1 - 1)))
    }

    /// The cost of entering a node: its pixel's energy, or nothing
    /// at all for a sentinel.  A pixel the field does not cover is an
    /// error, never a free step.
    pub fn cost(&self, node: Node, energy: &EnergyField) -> Result<f64, CarveError> {
        match self.pixel_of(node) {
            None => Ok(0.0),
            Some((x, y)) => energy.get(x, y).copied().ok_or(CarveError::OutOfBounds {
                x,
                y,
                width: energy.width(),
                height: energy.height(),
            }),
        }
    }

    /// Every node reachable from `node` in one step.  Addresses that
    /// would fall off the side or the bottom of the graph are simply
    /// not produced.
    pub fn neighbors(&self, (x, y): Node) -> impl Iterator<Item = Node> {
        let width = self.width;
        let below = cq!(y <= self.height && x < width, Some(y + 1), None);
        let along = cq!(
            self.is_sentinel((x, y)) && x + 1 < width,
            Some((x + 1, y)),
            None
        );
        let (left, right) = (x.saturating_sub(1), (x + 1).min(width.saturating_sub(1)));

        below
            .into_iter()
            .flat_map(move |ny| (left..=right).map(move |nx| (nx, ny)))
            .chain(along)
    }
}
