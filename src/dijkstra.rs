use clap::ValueEnum;
use hashbrown::HashSet;
use orx_priority_queue::{BinaryHeapWithMap, PriorityQueue, PriorityQueueDecKey};
use tracing::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{Distance, Graph, NodeId, INFINITY};
use crate::heap::MinHeap;

/// Which priority queue drives the relaxation loop.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum QueueKind {
    /// `MinHeap`, re-pushing improved nodes and skipping stale entries.
    #[default]
    Lazy,
    /// Indexed binary heap with decrease-key.
    Indexed,
}

trait Frontier {
    fn enqueue(&mut self, node: NodeId, key: Distance);
    fn dequeue(&mut self) -> Option<(NodeId, Distance)>;
}

impl Frontier for MinHeap {
    fn enqueue(&mut self, node: NodeId, key: Distance) {
        self.push(node, key);
    }

    fn dequeue(&mut self) -> Option<(NodeId, Distance)> {
        self.pop().map(|entry| (entry.node, entry.key))
    }
}

impl Frontier for BinaryHeapWithMap<NodeId, Distance> {
    fn enqueue(&mut self, node: NodeId, key: Distance) {
        self.decrease_key_or_push(&node, key);
    }

    fn dequeue(&mut self) -> Option<(NodeId, Distance)> {
        self.pop()
    }
}

/// Distances and predecessors of one run, indexed by `NodeId`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPathTree {
    source: NodeId,
    distances: Vec<Distance>,
    predecessors: Vec<Option<NodeId>>,
}

impl ShortestPathTree {
    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// `None` when `id` is unreachable or out of range.
    pub fn distance(&self, id: NodeId) -> Option<Distance> {
        self.distances.get(id).copied().filter(|&d| d != INFINITY)
    }

    pub fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        self.predecessors.get(id).copied().flatten()
    }

    pub fn is_reachable(&self, id: NodeId) -> bool {
        self.distance(id).is_some()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|&&d| d != INFINITY).count()
    }

    pub fn distances(&self) -> &[Distance] {
        &self.distances
    }

    /// Source-first path to `id`, `None` if `id` was not reached.
    pub fn path_to(&self, id: NodeId) -> Option<Vec<NodeId>> {
        self.distance(id)?;
        let mut path = vec![id];
        let mut cur = id;
        while let Some(prev) = self.predecessor(cur) {
            path.push(prev);
            cur = prev;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra from `source` to every node of `graph`.
///
/// Only reads the topology, so concurrent runs over a shared graph are fine.
/// Unreached nodes keep `INFINITY` and no predecessor.
pub fn run(graph: &Graph, source: NodeId, kind: QueueKind) -> Result<ShortestPathTree> {
    if source >= graph.len() {
        return Err(GraphError::UnknownNode(source));
    }
    match kind {
        QueueKind::Lazy => Ok(relax_all(graph, source, MinHeap::with_capacity(graph.len()))),
        QueueKind::Indexed => {
            let queue: BinaryHeapWithMap<NodeId, Distance> = BinaryHeapWithMap::new();
            Ok(relax_all(graph, source, queue))
        }
    }
}

fn relax_all<F: Frontier>(graph: &Graph, source: NodeId, mut queue: F) -> ShortestPathTree {
    let n = graph.len();
    let mut distances = vec![INFINITY; n];
    let mut predecessors = vec![None; n];
    let mut visited = HashSet::with_capacity(n);
    let (mut pops, mut stale) = (0_usize, 0_usize);

    distances[source] = 0;
    queue.enqueue(source, 0);

    while let Some((current, key)) = queue.dequeue() {
        pops += 1;
        if key > distances[current] || !visited.insert(current) {
            stale += 1;
            continue;
        }
        for edge in graph.neighbors(current) {
            if visited.contains(&edge.to) {
                continue;
            }
            let candidate = key.saturating_add(edge.weight);
            if candidate < distances[edge.to] {
                trace!(node = edge.to, via = current, candidate, "relaxed");
                distances[edge.to] = candidate;
                predecessors[edge.to] = Some(current);
                queue.enqueue(edge.to, candidate);
            }
        }
    }

    debug!(source, pops, stale, reachable = visited.len(), "dijkstra finished");
    ShortestPathTree {
        source,
        distances,
        predecessors,
    }
}

impl Graph {
    /// Runs Dijkstra from the node called `source` and stores the result in
    /// every node's `distance` and `predecessor`, replacing any earlier run.
    pub fn shortest_paths(&mut self, source: &str, kind: QueueKind) -> Result<ShortestPathTree> {
        let source = self.lookup(source)?;
        let tree = run(self, source, kind)?;
        for id in 0..tree.len() {
            let node = self.node_mut(id);
            node.distance = tree.distances[id];
            node.predecessor = tree.predecessors[id];
        }
        Ok(tree)
    }
}
