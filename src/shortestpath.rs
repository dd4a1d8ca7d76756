// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam by Dijkstra's algorithm.
//!
//! The textbook search: single-source shortest path from
//! the top sentinel to the bottom sentinel of the seam graph, where
//! the cost of an edge is the energy of the node it enters.  The
//! nodes live in a flat arena addressed by (x, y), and the
//! predecessor links are addresses into that arena, not references.
//!
//! `BinaryHeap` has no decrease-key, so a node whose distance
//! improves is simply pushed again; stale entries are recognised on
//! the way out because their node is already finalized.

use crate::energy::EnergyField;
use crate::errors::CarveError;
use crate::seamfinder::{Seam, SeamFinder};
use crate::seamgraph::{Node, SeamGraph};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

#[derive(Debug, Copy, Clone)]
struct NodeState {
    cost: f64,
    distance: f64,
    previous: Option<Node>,
    finalized: bool,
}

// A frontier entry.  The ordering is reversed so that the standard
// max-heap pops the smallest distance first.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Frontier {
    distance: f64,
    node: Node,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Copy, Clone, Default)]
pub struct ShortestPath;

impl SeamFinder for ShortestPath {
    fn find_seam(&self, energy: &EnergyField) -> Result<Seam, CarveError> {
        let (width, height) = energy.dimensions();
        let unreachable = CarveError::UnreachableSeam { width, height };
        if width == 0 || height == 0 {
            return Err(unreachable);
        }

        let graph = SeamGraph::new(width, height);
        let (source, sink) = (graph.source(), graph.sink());

        let states = iproduct!(0..graph.rows(), 0..width)
            .map(|(y, x)| {
                graph.cost((x, y), energy).map(|cost| NodeState {
                    cost,
                    distance: if (x, y) == source {
                        0.0
                    } else {
                        std::f64::INFINITY
                    },
                    previous: None,
                    finalized: false,
                })
            })
            .collect::<Result<Vec<NodeState>, CarveError>>()?;
        let mut nodes = TwoDimensionalMap::try_from_vec(width, graph.rows(), states)?;

        let mut frontier = BinaryHeap::new();
        frontier.push(Frontier {
            distance: 0.0,
            node: source,
        });

        while !nodes[sink].finalized {
            let current = frontier.pop().ok_or_else(|| unreachable.clone())?;
            if nodes[current.node].finalized {
                continue;
            }
            nodes[current.node].finalized = true;
            let reached = nodes[current.node].distance;

            for neighbor in graph.neighbors(current.node) {
                let candidate = &mut nodes[neighbor];
                if candidate.finalized {
                    continue;
                }
                let through = reached + candidate.cost;
                if through < candidate.distance {
                    candidate.distance = through;
                    candidate.previous = Some(current.node);
                    frontier.push(Frontier {
                        distance: through,
                        node: neighbor,
                    });
                }
            }
        }

        tracing::trace!(total = nodes[sink].distance, "shortest path finished");

        // Follow the predecessors back up to the source, keeping only
        // the nodes that stand for pixels.
        let mut columns = Vec::with_capacity(height as usize);
        let mut node = sink;
        while node != source {
            node = nodes[node].previous.ok_or_else(|| unreachable.clone())?;
            if let Some((x, _)) = graph.pixel_of(node) {
                columns.push(x);
            }
        }
        columns.reverse();

        if columns.len() != height as usize {
            return Err(unreachable);
        }
        Ok(Seam::from(columns))
    }
}
