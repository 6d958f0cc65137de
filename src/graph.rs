use crate::errors::RoutingError;

use num_traits::Zero;


/// Directed edge, owned by the outgoing list of its source vertex
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<C> {
    pub to: usize, // target vertex id
    pub weight: C, // non-negative traversal cost
}

/// Append-only directed graph over dense integer vertex ids
/// Ids index straight into the adjacency array, so growing to id n
/// materializes empty placeholders for the ids below it
#[derive(Debug, Clone)]
pub struct Graph<C> {
    edges: Vec<Vec<Edge<C>>>, // outgoing edges per vertex id
}

impl<C> Graph<C>
where
    C: Zero + Ord + Copy,
{

    pub fn new() -> Self {
        Self { edges: Vec::new() }
    }

    /// Number of vertex ids currently in the graph
    pub fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    /// True if `id` is a valid vertex id
    pub fn contains(&self, id: usize) -> bool {
        id < self.edges.len()
    }

    /// Ensure a vertex record exists for `id` - no-op if already present
    pub fn add_vertex(&mut self, id: usize) {
        if id >= self.edges.len() {
            self.edges.resize_with(id + 1, Vec::new);
        }
    }

    /// Append a directed edge, creating both endpoints if absent
    /// Weights below zero are rejected before any vertex is created
    pub fn add_edge(&mut self, from: usize, to: usize, weight: C) -> Result<(), RoutingError> {
        if weight < C::zero() {
            return Err(RoutingError::NegativeWeight);
        }

        self.add_vertex(from);
        self.add_vertex(to);
        self.edges[from].push(Edge { to, weight });

        Ok(())
    }

    /// Outgoing edges of `id` - empty for ids outside the graph
    pub fn edges(&self, id: usize) -> &[Edge<C>] {
        self.edges.get(id).map_or(&[], |edges| edges.as_slice())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_creates_endpoints() {
        let mut graph: Graph<u32> = Graph::new();
        graph.add_edge(0, 5, 2).unwrap();

        assert_eq!(graph.vertex_count(), 6);
        assert!(graph.contains(3)); // intermediate ids exist as placeholders
        assert_eq!(graph.edges(0), vec![Edge { to: 5, weight: 2 }]);
        assert!(graph.edges(3).is_empty());
    }

    #[test]
    fn test_add_vertex_is_idempotent() {
        let mut graph: Graph<u32> = Graph::new();
        graph.add_vertex(2);
        graph.add_vertex(2);
        assert_eq!(graph.vertex_count(), 3);

        // already covered ids never shrink the graph
        graph.add_vertex(1);
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        let mut graph: Graph<i32> = Graph::new();
        let result = graph.add_edge(0, 1, -1);

        assert!(matches!(result, Err(RoutingError::NegativeWeight)));
        assert_eq!(graph.vertex_count(), 0); // nothing was created
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let mut graph: Graph<u32> = Graph::new();
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(0, 1, 2).unwrap();

        assert_eq!(graph.edges(0).len(), 2);
    }

    #[test]
    fn test_edges_out_of_range() {
        let graph: Graph<u32> = Graph::new();
        assert!(graph.edges(7).is_empty());
        assert!(!graph.contains(0));
    }
}
