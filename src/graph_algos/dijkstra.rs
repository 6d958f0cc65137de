use crate::collections::IndexedMinHeap;
use crate::errors::RoutingError;
use crate::graph::Graph;
use super::Route;
use super::shortest_path::trace_route;

use std::fmt::Debug;
use num_traits::Zero;




/// Parent sentinel for the source vertex - it precedes nothing
pub(crate) const NO_PREDECESSOR: usize = usize::MAX;


/// Per-vertex state of a single run, allocated fresh for every query
/// Queries never mutate the graph itself, so one &Graph can serve
/// any number of runs
#[derive(Debug)]
pub struct RunState<C> {
    pub(crate) dist: Vec<Option<C>>, // tentative cost from the source, None = unreached
    pub(crate) prev: Vec<usize>, // parent vertex on the best known path
    pub(crate) visited: Vec<bool>, // settled vertices - cost is final
}

impl<C> RunState<C>
where
    C: Copy,
{
    fn new(vertex_count: usize) -> Self {
        Self {
            dist: vec![None; vertex_count],
            prev: vec![NO_PREDECESSOR; vertex_count],
            visited: vec![false; vertex_count],
        }
    }

    /// Cost of the best known path from the source, None if unreached
    pub fn distance(&self, id: usize) -> Option<C> {
        self.dist.get(id).copied().flatten()
    }

    /// Vertex preceding `id` on its best known path
    pub fn predecessor(&self, id: usize) -> Option<usize> {
        match self.prev.get(id) {
            Some(&parent) if parent != NO_PREDECESSOR => Some(parent),
            _ => None,
        }
    }

    /// True once the cost of `id` is final for the run
    pub fn is_settled(&self, id: usize) -> bool {
        self.visited.get(id).copied().unwrap_or(false)
    }
}


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Returns the route from source to target, or None when the target is
/// unreachable - only invalid vertex ids are an error
pub fn shortest_path<C>(graph: &Graph<C>, source: usize, target: usize) -> Result<Option<Route<C>>, RoutingError>
where
    C: Zero + Ord + Copy + Debug,
{
    let state = run(graph, source, Some(target))?;

    Ok(trace_route(&state, target))
}


/// Run the engine with early exit at `target` and return the per-vertex state
/// Vertices with lower cost than the target will be settled
pub fn dijkstra_partial<C>(graph: &Graph<C>, source: usize, target: usize) -> Result<RunState<C>, RoutingError>
where
    C: Zero + Ord + Copy + Debug,
{
    run(graph, source, Some(target))
}

/// Run to queue exhaustion, settling every vertex reachable from the source
pub fn dijkstra_full<C>(graph: &Graph<C>, source: usize) -> Result<RunState<C>, RoutingError>
where
    C: Zero + Ord + Copy + Debug,
{
    run(graph, source, None)
}


/// Dijkstra's relaxation loop over the graph store
/// The frontier yields vertices in non-decreasing cost order, and a popped
/// vertex already carries its final cost - popping the target ends the run
fn run<C>(graph: &Graph<C>, source: usize, target: Option<usize>) -> Result<RunState<C>, RoutingError>
where
    C: Zero + Ord + Copy + Debug,
{
    if !graph.contains(source) {
        return Err(RoutingError::InvalidVertex(source));
    }
    if let Some(t) = target {
        if !graph.contains(t) {
            return Err(RoutingError::InvalidVertex(t));
        }
    }

    let mut state = RunState::new(graph.vertex_count());
    let mut frontier = IndexedMinHeap::new();

    // The source starts the frontier at cost zero
    state.dist[source] = Some(C::zero());
    frontier.push_or_decrease(source, C::zero());

    while let Some((vertex, cost)) = frontier.pop_min() {

        // The popped cost is final, so the target needs no further settling
        if target == Some(vertex) {
            break;
        }

        state.visited[vertex] = true;

        // loop over neighbors
        for edge in graph.edges(vertex) {

            // Settled neighbors already hold their final cost
            if state.visited[edge.to] {
                continue;
            }

            // new cost to reach this neighbor = node cost + edge cost
            let next_cost = cost + edge.weight;

            // Relax on <= so an exact tie rewrites the predecessor,
            // matching the frontier's tie rule
            let improves = match state.dist[edge.to] {
                None => true,
                Some(best) => next_cost <= best,
            };

            if improves {
                state.dist[edge.to] = Some(next_cost);
                state.prev[edge.to] = vertex;
                frontier.push_or_decrease(edge.to, next_cost);
            }
        }
    }

    Ok(state)
}
