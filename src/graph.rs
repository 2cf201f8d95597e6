use std::fmt;

use fnv::FnvHashMap;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};

pub type NodeId = usize;
pub type Weight = i64;
pub type Distance = i64;

/// Distance of a node the last run never reached.
pub const INFINITY: Distance = Distance::MAX;

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    name: String,
    pub distance: Distance,
    pub predecessor: Option<NodeId>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            distance: INFINITY,
            predecessor: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_reachable(&self) -> bool {
        self.distance != INFINITY
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub to: NodeId,
    pub weight: Weight,
}

/// Undirected weighted graph. Nodes are addressed by their insertion index,
/// which also fixes the reporting order.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    adj: Vec<Vec<Edge>>,
    index: FnvHashMap<String, NodeId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(n: usize) -> Self {
        let mut index = FnvHashMap::default();
        index.reserve(n);
        Self {
            nodes: Vec::with_capacity(n),
            adj: Vec::with_capacity(n),
            index,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of logical (undirected) edges.
    pub fn edge_count(&self) -> usize {
        self.adj.iter().map(|edges| edges.len()).sum::<usize>() / 2
    }

    pub fn create_node(&mut self, name: impl Into<String>) -> Result<NodeId> {
        let name = name.into();
        if self.index.contains_key(&name) {
            warn!(node = %name, "rejecting duplicate node");
            return Err(GraphError::DuplicateNode(name));
        }
        let id = self.nodes.len();
        self.index.insert(name.clone(), id);
        self.nodes.push(Node::new(name));
        self.adj.push(Vec::new());
        Ok(id)
    }

    pub fn add_nodes<I, S>(&mut self, names: I) -> Result<Vec<NodeId>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let ids = names
            .into_iter()
            .map(|name| self.create_node(name))
            .collect::<Result<Vec<_>>>()?;
        debug!(added = ids.len(), total = self.len(), "added nodes");
        Ok(ids)
    }

    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Inserts `a <-> b`. Self loops and parallel edges are kept as given.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: Weight) -> Result<()> {
        for id in [a, b] {
            if id >= self.nodes.len() {
                return Err(GraphError::UnknownNode(id));
            }
        }
        if weight < 0 {
            warn!(from = a, to = b, weight, "rejecting negative edge weight");
            return Err(GraphError::NegativeWeight {
                from: a,
                to: b,
                weight,
            });
        }
        self.adj[a].push(Edge { to: b, weight });
        self.adj[b].push(Edge { to: a, weight });
        Ok(())
    }

    pub fn connect(&mut self, a: &str, b: &str, weight: Weight) -> Result<()> {
        let a = self.lookup(a)?;
        let b = self.lookup(b)?;
        self.add_edge(a, b, weight)
    }

    pub fn neighbors(&self, id: NodeId) -> &[Edge] {
        self.adj.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub(crate) fn lookup(&self, name: &str) -> Result<NodeId> {
        self.find_node(name)
            .ok_or_else(|| GraphError::NodeNotFound(name.to_string()))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Walks the recorded predecessors from `id` back to the source of the
    /// last run. Returned source-first; empty if `id` was not reached.
    pub fn path_to(&self, id: NodeId) -> Vec<NodeId> {
        match self.nodes.get(id) {
            Some(node) if node.is_reachable() => {}
            _ => return Vec::new(),
        }
        let mut path = vec![id];
        let mut cur = id;
        while let Some(prev) = self.nodes[cur].predecessor {
            // A chain longer than the node count means stale state.
            if path.len() > self.nodes.len() {
                return Vec::new();
            }
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        path
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, edges) in self.nodes.iter().zip(&self.adj) {
            write!(f, "{} ->", node)?;
            for edge in edges {
                write!(f, " {} ({})", self.nodes[edge.to], edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        let mut graph = Graph::new();
        graph.add_nodes(["a", "b", "c"]).unwrap();
        graph.connect("a", "b", 1).unwrap();
        graph.connect("b", "c", 2).unwrap();
        graph.connect("a", "c", 5).unwrap();
        graph
    }

    #[test]
    fn new_nodes_start_unreached() {
        let mut graph = Graph::new();
        let id = graph.create_node("a").unwrap();
        let node = graph.node(id).unwrap();
        assert_eq!(node.name(), "a");
        assert_eq!(node.distance, INFINITY);
        assert_eq!(node.predecessor, None);
        assert!(!node.is_reachable());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let mut graph = Graph::new();
        graph.create_node("a").unwrap();
        assert_eq!(
            graph.create_node("a"),
            Err(GraphError::DuplicateNode("a".to_string()))
        );
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn find_node_by_name() {
        let graph = triangle();
        assert_eq!(graph.find_node("b"), Some(1));
        assert_eq!(graph.find_node("z"), None);
    }

    #[test]
    fn edges_are_symmetric() {
        let graph = triangle();
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.neighbors(0),
            &[Edge { to: 1, weight: 1 }, Edge { to: 2, weight: 5 }]
        );
        assert_eq!(
            graph.neighbors(2),
            &[Edge { to: 1, weight: 2 }, Edge { to: 0, weight: 5 }]
        );
    }

    #[test]
    fn neighbors_of_isolated_or_unknown_node_are_empty() {
        let mut graph = triangle();
        let lone = graph.create_node("d").unwrap();
        assert!(graph.neighbors(lone).is_empty());
        assert!(graph.neighbors(42).is_empty());
    }

    #[test]
    fn self_loops_and_parallel_edges_are_accepted() {
        let mut graph = triangle();
        graph.add_edge(0, 0, 3).unwrap();
        graph.add_edge(0, 1, 7).unwrap();
        assert_eq!(graph.neighbors(0).len(), 5);
        assert_eq!(graph.edge_count(), 5);
    }

    #[test]
    fn bad_edges_are_rejected() {
        let mut graph = triangle();
        assert_eq!(graph.add_edge(0, 9, 1), Err(GraphError::UnknownNode(9)));
        assert_eq!(
            graph.add_edge(0, 1, -4),
            Err(GraphError::NegativeWeight {
                from: 0,
                to: 1,
                weight: -4
            })
        );
        assert_eq!(
            graph.connect("a", "nowhere", 1),
            Err(GraphError::NodeNotFound("nowhere".to_string()))
        );
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn display_lists_adjacency() {
        let graph = triangle();
        assert_eq!(
            graph.to_string(),
            "a -> b (1) c (5)\nb -> a (1) c (2)\nc -> b (2) a (5)\n"
        );
    }

    #[test]
    fn path_to_unreached_node_is_empty() {
        let graph = triangle();
        assert!(graph.path_to(2).is_empty());
        assert!(graph.path_to(99).is_empty());
    }
}
