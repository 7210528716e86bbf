//! Integer max-flow network.
//!
//! Residual-graph representation with paired forward/reverse edges and
//! a Dinic-style phase algorithm: BFS builds a level graph, DFS pushes
//! a blocking flow along it. All capacities and flows are integers, so
//! augmentation never produces fractional values.
//!
//! The randomized variant shuffles every node's adjacency order before
//! each phase. When a problem admits multiple maximum flows, different
//! augmenting orders often land on different saturating flows — the
//! hook the option diversifier relies on.
//!
//! # Reference
//! Dinic (1970); Cormen et al. (2009), "Introduction to Algorithms", Ch. 26

use rand::seq::SliceRandom;
use rand::Rng;

/// Node handle within a [`FlowNetwork`].
pub type NodeId = usize;

/// Edge handle within a [`FlowNetwork`].
///
/// Returned by [`FlowNetwork::add_edge`]; identifies the forward edge.
pub type EdgeId = usize;

#[derive(Debug, Clone)]
struct Edge {
    to: NodeId,
    cap: i64,
    flow: i64,
}

impl Edge {
    fn residual(&self) -> i64 {
        self.cap - self.flow
    }
}

/// A directed capacitated graph supporting integer max-flow queries.
#[derive(Debug, Clone, Default)]
pub struct FlowNetwork {
    edges: Vec<Edge>,
    /// Per-node outgoing edge IDs (forward and reverse alike).
    adj: Vec<Vec<EdgeId>>,
}

impl FlowNetwork {
    /// Creates an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node and returns its handle.
    pub fn add_node(&mut self) -> NodeId {
        self.adj.push(Vec::new());
        self.adj.len() - 1
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// Number of forward edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len() / 2
    }

    /// Adds a directed edge with the given capacity.
    ///
    /// The paired zero-capacity reverse edge is created internally.
    /// Capacities must be non-negative; node handles must come from
    /// [`FlowNetwork::add_node`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cap: i64) -> EdgeId {
        debug_assert!(cap >= 0);
        debug_assert!(from < self.adj.len() && to < self.adj.len());
        let id = self.edges.len();
        self.edges.push(Edge { to, cap, flow: 0 });
        self.edges.push(Edge {
            to: from,
            cap: 0,
            flow: 0,
        });
        self.adj[from].push(id);
        self.adj[to].push(id + 1);
        id
    }

    /// Flow currently routed through a forward edge.
    pub fn flow(&self, edge: EdgeId) -> i64 {
        self.edges[edge].flow.max(0)
    }

    /// Computes the maximum flow from `source` to `sink`.
    ///
    /// Deterministic: identical construction order yields an identical
    /// flow decomposition.
    pub fn max_flow(&mut self, source: NodeId, sink: NodeId) -> i64 {
        self.run_phases(source, sink, |_| {})
    }

    /// Computes a maximum flow with randomized augmenting order.
    ///
    /// The flow *value* equals [`FlowNetwork::max_flow`]; the per-edge
    /// decomposition may differ between runs.
    pub fn max_flow_randomized<R: Rng>(
        &mut self,
        source: NodeId,
        sink: NodeId,
        rng: &mut R,
    ) -> i64 {
        self.run_phases(source, sink, |adj| adj.shuffle(rng))
    }

    fn run_phases(
        &mut self,
        source: NodeId,
        sink: NodeId,
        mut reorder: impl FnMut(&mut Vec<EdgeId>),
    ) -> i64 {
        let mut total = 0;
        while let Some(levels) = self.bfs_levels(source, sink) {
            for adj in &mut self.adj {
                reorder(adj);
            }
            let mut next_edge = vec![0usize; self.adj.len()];
            loop {
                let pushed = self.push_dfs(source, sink, i64::MAX, &levels, &mut next_edge);
                if pushed == 0 {
                    break;
                }
                total += pushed;
            }
        }
        total
    }

    /// BFS over residual edges; `None` once the sink is unreachable.
    fn bfs_levels(&self, source: NodeId, sink: NodeId) -> Option<Vec<i32>> {
        let mut levels = vec![-1i32; self.adj.len()];
        levels[source] = 0;
        let mut queue = std::collections::VecDeque::from([source]);
        while let Some(v) = queue.pop_front() {
            for &e in &self.adj[v] {
                let edge = &self.edges[e];
                if edge.residual() > 0 && levels[edge.to] < 0 {
                    levels[edge.to] = levels[v] + 1;
                    queue.push_back(edge.to);
                }
            }
        }
        (levels[sink] >= 0).then_some(levels)
    }

    /// DFS along the level graph, advancing per-node edge cursors so
    /// exhausted edges are never revisited within a phase.
    fn push_dfs(
        &mut self,
        v: NodeId,
        sink: NodeId,
        limit: i64,
        levels: &[i32],
        next_edge: &mut [usize],
    ) -> i64 {
        if v == sink {
            return limit;
        }
        while next_edge[v] < self.adj[v].len() {
            let e = self.adj[v][next_edge[v]];
            let (to, residual) = {
                let edge = &self.edges[e];
                (edge.to, edge.residual())
            };
            if residual > 0 && levels[to] == levels[v] + 1 {
                let pushed = self.push_dfs(to, sink, limit.min(residual), levels, next_edge);
                if pushed > 0 {
                    self.edges[e].flow += pushed;
                    self.edges[e ^ 1].flow -= pushed;
                    return pushed;
                }
            }
            next_edge[v] += 1;
        }
        0
    }
}
