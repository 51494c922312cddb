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

pub type VertexId = usize;
pub type EdgeId = usize;

#[derive(Debug, Clone, Copy)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

/// A directed weighted multigraph with a fixed vertex count.
///
/// Edges are kept in one table, in insertion order, so that an `EdgeId`
/// stays valid for the lifetime of the graph. Each vertex keeps the list
/// of its outgoing edge ids, also in insertion order.
#[derive(Debug)]
pub struct DirectedWeightedGraph<W> {
    edges: Vec<Edge<W>>,
    incidence_lists: Vec<Vec<EdgeId>>,
}

impl<W: Copy> DirectedWeightedGraph<W> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            incidence_lists: vec![Vec::new(); vertex_count],
        }
    }

    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: W) -> EdgeId {
        debug_assert!(from < self.vertex_count() && to < self.vertex_count());
        let edge_id = self.edges.len();
        self.edges.push(Edge { from, to, weight });
        self.incidence_lists[from].push(edge_id);
        edge_id
    }

    pub fn edge(&self, edge_id: EdgeId) -> &Edge<W> {
        &self.edges[edge_id]
    }

    pub fn vertex_count(&self) -> usize {
        self.incidence_lists.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Outgoing edges of `vertex`, in insertion order.
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incidence_lists[vertex].iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::DirectedWeightedGraph;

    #[test]
    fn edge_ids_are_dense_and_stable() {
        let mut graph = DirectedWeightedGraph::new(3);
        let first = graph.add_edge(0, 1, 10.0);
        let second = graph.add_edge(1, 2, 20.0);
        let third = graph.add_edge(0, 2, 30.0);
        assert_eq!((first, second, third), (0, 1, 2));
        assert_eq!(graph.edge(second).from, 1);
        assert_eq!(graph.edge(second).to, 2);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn incident_edges_keep_insertion_order() {
        let mut graph = DirectedWeightedGraph::new(2);
        graph.add_edge(0, 1, 1.0);
        graph.add_edge(0, 0, 2.0);
        graph.add_edge(0, 1, 3.0);
        let outgoing: Vec<_> = graph.incident_edges(0).collect();
        assert_eq!(outgoing, vec![0, 1, 2]);
        assert_eq!(graph.incident_edges(1).count(), 0);
    }
}
