//! Shortest path routing over weighted directed graphs
//!
//! Build a [`Graph`] by adding edges, then query it with the Dijkstra-based
//! engine in [`graph_algos`] - routes come back as ordered vertex id
//! sequences with their total cost

mod collections;
pub mod errors;
pub mod graph;
pub mod graph_algos;

pub use errors::RoutingError;
pub use graph::{Edge, Graph};
pub use graph_algos::Route;
pub use graph_algos::dijkstra::{RunState, dijkstra_full, dijkstra_partial, shortest_path};
