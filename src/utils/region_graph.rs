use crate::config::RegionDistance;
use crate::models::Kilometres;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Region network: one vertex per region token, one undirected edge per
/// known distance
#[derive(Debug, Clone, Default)]
pub struct RegionGraph {
    graph: UnGraph<String, Kilometres>,
    index: HashMap<String, NodeIndex>,
}

impl RegionGraph {
    /// Build the graph from distance table entries. A pair listed twice keeps
    /// the last distance.
    pub fn new(distances: &[RegionDistance]) -> Self {
        let mut region_graph = RegionGraph::default();

        for entry in distances {
            let from = region_graph.vertex(&entry.from);
            let to = region_graph.vertex(&entry.to);

            match region_graph.graph.find_edge(from, to) {
                Some(edge) => region_graph.graph[edge] = entry.km,
                None => {
                    region_graph.graph.add_edge(from, to, entry.km);
                }
            }
        }

        region_graph
    }

    /// Get or insert the vertex for a region
    fn vertex(&mut self, region: &str) -> NodeIndex {
        if let Some(&node) = self.index.get(region) {
            return node;
        }
        let node = self.graph.add_node(region.to_string());
        self.index.insert(region.to_string(), node);
        node
    }

    /// Distance between two regions if the table lists the pair in either order
    pub fn distance_between(&self, from: &str, to: &str) -> Option<Kilometres> {
        let from = *self.index.get(from)?;
        let to = *self.index.get(to)?;
        self.graph
            .find_edge(from, to)
            .map(|edge| self.graph[edge])
    }

    /// Number of known regions
    pub fn region_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of known region pairs
    pub fn pair_count(&self) -> usize {
        self.graph.edge_count()
    }
}
