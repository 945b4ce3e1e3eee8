use crate::bail_invalid;
use crate::error::{GraphError, Result};
use crate::graph::container::Graph;
use crate::graph::node::Node;
use crate::graph::state::SearchState;
use crate::graph::types::{Cost, NodeHandle};

/// Resolve a traversal endpoint, rejecting out-of-range and empty handles
pub fn require_node<N, W: Cost>(graph: &Graph<N, W>, handle: NodeHandle) -> Result<&Node<N, W>> {
    graph.check_handle(handle)?;
    graph
        .node(handle)
        .ok_or(GraphError::MissingEndpoint { handle })
}

/// Check that a caller-supplied state can index every slot of the graph
pub fn check_state<N, W: Cost>(graph: &Graph<N, W>, state: &SearchState<W>) -> Result<()> {
    if state.capacity() < graph.capacity() {
        bail_invalid!(
            "search state capacity",
            format!("{} (graph capacity is {})", state.capacity(), graph.capacity())
        );
    }
    Ok(())
}
