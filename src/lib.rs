//! Single-source shortest paths over a weighted undirected graph, with
//! predecessor chains for rebuilding every path.

pub mod cities;
pub mod dijkstra;
pub mod error;
pub mod graph;
pub mod heap;

pub use dijkstra::{QueueKind, ShortestPathTree};
pub use error::{GraphError, Result};
pub use graph::{Distance, Edge, Graph, Node, NodeId, Weight, INFINITY};
pub use heap::{HeapEntry, MinHeap};
