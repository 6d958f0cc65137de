use super::Route;
use super::dijkstra::{NO_PREDECESSOR, RunState};

/// Construct the route from the source to `target` after a completed run
/// Returns None when the run never reached the target - a normal outcome
/// state: RunState<C> - per-vertex cost and predecessor state of the run
/// target: usize - vertex id the route should end at
pub(crate) fn trace_route<C>(state: &RunState<C>, target: usize) -> Option<Route<C>>
where
    C: Copy,
{
    let cost = state.distance(target)?;

    let mut nodes = Vec::new();
    let mut current = target;

    // Trace back from target to source
    // Predecessor links form a tree rooted at the source, so the walk is
    // bounded by the vertex count
    while current != NO_PREDECESSOR {
        nodes.push(current);
        current = state.prev[current];
    }

    // The path is in reverse order, so reverse it
    nodes.reverse();

    Some(Route { nodes, cost })
}
