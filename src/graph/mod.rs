//! Core graph data structures

mod edge;
#[allow(clippy::module_inception)]
mod graph;
mod node;
mod vector;

pub use edge::{Edge, EdgeKind};
pub use graph::SemanticGraph;
pub use node::{AvoidedMarker, Axes, Node, NodeId, NodeStatus, Provenance, Tag};
pub use vector::{AttentionVector, VectorId};
