// Copyright  (C) 2020, Kisio Digital and/or its affiliates. All rights reserved.
//
// This file is part of Navitia,
// the software to build cool stuff with public transport.
//
// Hope you'll enjoy and contribute to this project,
// powered by Kisio Digital (www.kisio.com).
// Help us simplify mobility and open public transport:
// a non ending quest to the responsive locomotion way of traveling!
//
// This contribution is a part of the research and development work of the
// IVA Project which aims to enhance traveler information and is carried out
// under the leadership of the Technological Research Institute SystemX,
// with the partnership and support of the transport organization authority
// Ile-De-France Mobilités (IDFM), SNCF, and public funds
// under the scope of the French Program "Investissements d’Avenir".
//
// LICENCE: This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <http://www.gnu.org/licenses/>.
//
// Stay tuned using
// twitter @navitia
// channel `#navitia` on riot https://riot.im/app/#/room/#navitia:matrix.org
// https://groups.google.com/d/forum/navitia
// www.navitia.io

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Add;

use crate::graph::{DirectedWeightedGraph, EdgeId, VertexId};

/// A minimum-weight path: the total weight and the edge ids traversed,
/// in order. A path from a vertex to itself has weight zero and no edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<W> {
    pub weight: W,
    pub edges: Vec<EdgeId>,
}

#[derive(Debug, Clone, Copy)]
struct ReachData<W> {
    weight: W,
    prev_edge: Option<EdgeId>,
}

/// Shortest-path engine over a [`DirectedWeightedGraph`] with non-negative
/// weights.
///
/// Construction runs Dijkstra from every vertex and records, per
/// (source, target) pair, the best weight and the last edge of the best
/// path. `build_route` is then a lookup plus a backward walk over
/// predecessor edges, proportional to the length of the recovered path.
///
/// Ties between paths of equal weight resolve by relaxation order: edges
/// are relaxed in insertion order and a path is replaced only by a
/// strictly better one.
#[derive(Debug)]
pub struct Router<W> {
    graph: DirectedWeightedGraph<W>,
    reach: Vec<Vec<Option<ReachData<W>>>>,
}

impl<W> Router<W>
where
    W: Copy + Default + PartialOrd + Add<Output = W>,
{
    pub fn new(graph: DirectedWeightedGraph<W>) -> Self {
        let reach = (0..graph.vertex_count())
            .map(|source| dijkstra(&graph, source))
            .collect();
        Self { graph, reach }
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<W> {
        &self.graph
    }

    /// The minimum-total-weight path from `from` to `to`, or `None` when
    /// `to` is unreachable.
    pub fn build_route(&self, from: VertexId, to: VertexId) -> Option<Path<W>> {
        let target = self.reach[from][to]?;
        let mut edges = Vec::new();
        let mut vertex = to;
        while let Some(edge_id) = self.reach[from][vertex].and_then(|data| data.prev_edge) {
            edges.push(edge_id);
            vertex = self.graph.edge(edge_id).from;
        }
        edges.reverse();
        Some(Path {
            weight: target.weight,
            edges,
        })
    }
}

// Entries compare reversed on distance so that the std max-heap pops the
// closest vertex first. Weights are finite, incomparable pairs never occur.
struct QueueEntry<W> {
    distance: W,
    vertex: VertexId,
}

impl<W: PartialOrd> PartialEq for QueueEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: PartialOrd> Eq for QueueEntry<W> {}

impl<W: PartialOrd> PartialOrd for QueueEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd> Ord for QueueEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

fn dijkstra<W>(graph: &DirectedWeightedGraph<W>, source: VertexId) -> Vec<Option<ReachData<W>>>
where
    W: Copy + Default + PartialOrd + Add<Output = W>,
{
    let mut best: Vec<Option<ReachData<W>>> = vec![None; graph.vertex_count()];
    let mut settled = vec![false; graph.vertex_count()];
    let mut queue = BinaryHeap::new();

    best[source] = Some(ReachData {
        weight: W::default(),
        prev_edge: None,
    });
    queue.push(QueueEntry {
        distance: W::default(),
        vertex: source,
    });

    while let Some(QueueEntry { vertex, .. }) = queue.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;
        let from_weight = match best[vertex] {
            Some(data) => data.weight,
            None => continue,
        };
        for edge_id in graph.incident_edges(vertex) {
            let edge = graph.edge(edge_id);
            if settled[edge.to] {
                continue;
            }
            let candidate = from_weight + edge.weight;
            let improves = match best[edge.to] {
                None => true,
                Some(current) => candidate < current.weight,
            };
            if improves {
                best[edge.to] = Some(ReachData {
                    weight: candidate,
                    prev_edge: Some(edge_id),
                });
                queue.push(QueueEntry {
                    distance: candidate,
                    vertex: edge.to,
                });
            }
        }
    }

    best
}
