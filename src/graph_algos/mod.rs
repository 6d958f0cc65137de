
pub mod dijkstra;
mod shortest_path;

/// Ordered route between two vertices on a graph
/// nodes runs source -> target inclusive, cost is the summed edge weight
#[derive(Debug, Clone, PartialEq)]
pub struct Route<C> {
    pub nodes: Vec<usize>,
    pub cost: C,
}
