//! Directed graph container used by `selkie`.
//!
//! Nodes and edges are stored in insertion order so every traversal made by
//! the layout pipeline is deterministic.

use rustc_hash::FxBuildHasher;
use std::cell::{RefCell, RefMut};
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub v: String,
    pub w: String,
}

impl EdgeKey {
    pub fn new(v: impl Into<String>, w: impl Into<String>) -> Self {
        Self {
            v: v.into(),
            w: w.into(),
        }
    }
}

// Borrowed key for allocation-free lookups in the edge index. Must hash the
// same fields in the same order as `EdgeKey`.
#[derive(Clone, Copy, Hash)]
struct EdgeRef<'a> {
    v: &'a str,
    w: &'a str,
}

impl hashbrown::Equivalent<EdgeKey> for EdgeRef<'_> {
    fn equivalent(&self, key: &EdgeKey) -> bool {
        key.v == self.v && key.w == self.w
    }
}

#[derive(Debug, Clone)]
struct NodeEntry<N> {
    id: String,
    label: N,
}

#[derive(Debug, Clone)]
struct EdgeEntry<E> {
    key: EdgeKey,
    label: E,
}

#[derive(Debug)]
struct AdjIndex {
    generation: u64,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
}

pub struct Graph<N, E, G> {
    graph_label: G,

    nodes: Vec<NodeEntry<N>>,
    node_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<EdgeKey, usize>,

    // Layout algorithms call `predecessors` / `successors` / `in_edges` /
    // `out_edges` repeatedly. Scanning `self.edges` each time is O(E) per
    // query and dominates runtime for large graphs, so adjacency queries are
    // answered from a lazily rebuilt per-node index. The index lives behind a
    // `RefCell` to keep the query APIs on `&self`; any structural mutation
    // invalidates it.
    adj_generation: u64,
    adj_index: RefCell<Option<AdjIndex>>,
}

impl<N, E, G: Default> Graph<N, E, G> {
    pub fn new() -> Self {
        Self {
            graph_label: G::default(),
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            adj_generation: 0,
            adj_index: RefCell::new(None),
        }
    }
}

impl<N, E, G: Default> Default for Graph<N, E, G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N, E, G> Graph<N, E, G> {
    fn invalidate_adj(&mut self) {
        self.adj_generation = self.adj_generation.wrapping_add(1);
        *self.adj_index.get_mut() = None;
    }

    fn ensure_adj(&self) -> RefMut<'_, AdjIndex> {
        let generation = self.adj_generation;
        let mut slot = self.adj_index.borrow_mut();
        let stale = slot
            .as_ref()
            .map_or(true, |idx| idx.generation != generation);
        if stale {
            let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
            let mut incoming: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
            for (edge_idx, e) in self.edges.iter().enumerate() {
                let Some(&v) = self.node_index.get(e.key.v.as_str()) else {
                    continue;
                };
                let Some(&w) = self.node_index.get(e.key.w.as_str()) else {
                    continue;
                };
                outgoing[v].push(edge_idx);
                incoming[w].push(edge_idx);
            }
            *slot = Some(AdjIndex {
                generation,
                outgoing,
                incoming,
            });
        }
        RefMut::map(slot, |idx| {
            idx.as_mut().expect("adjacency index rebuilt above")
        })
    }

    fn edge_slot(&self, v: &str, w: &str) -> Option<usize> {
        self.edge_index.get(&EdgeRef { v, w }).copied()
    }

    pub fn set_graph(&mut self, label: G) -> &mut Self {
        self.graph_label = label;
        self
    }

    pub fn graph(&self) -> &G {
        &self.graph_label
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph_label
    }

    pub fn has_node(&self, id: &str) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: impl Into<String>, label: N) -> &mut Self {
        let id = id.into();
        if let Some(&slot) = self.node_index.get(id.as_str()) {
            self.nodes[slot].label = label;
            return self;
        }
        self.invalidate_adj();
        let slot = self.nodes.len();
        self.nodes.push(NodeEntry {
            id: id.clone(),
            label,
        });
        self.node_index.insert(id, slot);
        self
    }

    pub fn node(&self, id: &str) -> Option<&N> {
        self.node_index.get(id).map(|&slot| &self.nodes[slot].label)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut N> {
        self.node_index
            .get(id)
            .copied()
            .map(move |slot| &mut self.nodes[slot].label)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(|n| n.id.as_str())
    }

    pub fn node_ids(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }

    pub fn has_edge(&self, v: &str, w: &str) -> bool {
        self.edge_slot(v, w).is_some()
    }

    pub fn edge(&self, v: &str, w: &str) -> Option<&E> {
        self.edge_slot(v, w).map(|slot| &self.edges[slot].label)
    }

    pub fn edge_mut(&mut self, v: &str, w: &str) -> Option<&mut E> {
        self.edge_slot(v, w)
            .map(move |slot| &mut self.edges[slot].label)
    }

    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&E> {
        self.edge(&key.v, &key.w)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeKey> {
        self.edges.iter().map(|e| &e.key)
    }

    pub fn remove_edge(&mut self, v: &str, w: &str) -> bool {
        let Some(slot) = self.edge_slot(v, w) else {
            return false;
        };
        self.invalidate_adj();
        let removed = self.edges.remove(slot);
        self.edge_index.remove(&removed.key);
        for i in slot..self.edges.len() {
            if let Some(entry) = self.edge_index.get_mut(&self.edges[i].key) {
                *entry = i;
            }
        }
        true
    }

    pub fn remove_node(&mut self, id: &str) -> bool {
        let Some(slot) = self.node_index.remove(id) else {
            return false;
        };
        self.invalidate_adj();
        self.nodes.remove(slot);
        for i in slot..self.nodes.len() {
            let node_id = self.nodes[i].id.as_str();
            if let Some(entry) = self.node_index.get_mut(node_id) {
                *entry = i;
            }
        }

        if self.edges.iter().any(|e| e.key.v == id || e.key.w == id) {
            self.edges.retain(|e| e.key.v != id && e.key.w != id);
            self.edge_index = self
                .edges
                .iter()
                .enumerate()
                .map(|(i, e)| (e.key.clone(), i))
                .collect();
        }
        true
    }

    pub fn successors(&self, v: &str) -> Vec<&str> {
        let Some(&slot) = self.node_index.get(v) else {
            return Vec::new();
        };
        let adj = self.ensure_adj();
        adj.outgoing[slot]
            .iter()
            .map(|&i| self.edges[i].key.w.as_str())
            .collect()
    }

    pub fn predecessors(&self, v: &str) -> Vec<&str> {
        let Some(&slot) = self.node_index.get(v) else {
            return Vec::new();
        };
        let adj = self.ensure_adj();
        adj.incoming[slot]
            .iter()
            .map(|&i| self.edges[i].key.v.as_str())
            .collect()
    }

    pub fn out_edges(&self, v: &str) -> Vec<EdgeKey> {
        let Some(&slot) = self.node_index.get(v) else {
            return Vec::new();
        };
        let adj = self.ensure_adj();
        adj.outgoing[slot]
            .iter()
            .map(|&i| self.edges[i].key.clone())
            .collect()
    }

    pub fn in_edges(&self, v: &str) -> Vec<EdgeKey> {
        let Some(&slot) = self.node_index.get(v) else {
            return Vec::new();
        };
        let adj = self.ensure_adj();
        adj.incoming[slot]
            .iter()
            .map(|&i| self.edges[i].key.clone())
            .collect()
    }
}

impl<N: Default, E, G> Graph<N, E, G> {
    pub fn ensure_node(&mut self, id: impl Into<String>) -> &mut Self {
        let id = id.into();
        if self.node_index.contains_key(id.as_str()) {
            return self;
        }
        self.set_node(id, N::default())
    }
}

impl<N: Default, E: Default, G> Graph<N, E, G> {
    pub fn set_edge(&mut self, v: impl Into<String>, w: impl Into<String>) -> &mut Self {
        self.insert_edge(v.into(), w.into(), None)
    }

    pub fn set_edge_with_label(
        &mut self,
        v: impl Into<String>,
        w: impl Into<String>,
        label: E,
    ) -> &mut Self {
        self.insert_edge(v.into(), w.into(), Some(label))
    }

    // An existing edge keeps its label unless a replacement is given.
    fn insert_edge(&mut self, v: String, w: String, label: Option<E>) -> &mut Self {
        self.ensure_node(v.clone());
        self.ensure_node(w.clone());

        if let Some(&slot) = self.edge_index.get(&EdgeRef {
            v: v.as_str(),
            w: w.as_str(),
        }) {
            if let Some(label) = label {
                self.edges[slot].label = label;
            }
            return self;
        }

        self.invalidate_adj();
        let key = EdgeKey { v, w };
        let slot = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            label: label.unwrap_or_default(),
        });
        self.edge_index.insert(key, slot);
        self
    }

    pub fn set_path(&mut self, ids: &[&str]) -> &mut Self {
        for pair in ids.windows(2) {
            self.set_edge(pair[0], pair[1]);
        }
        self
    }
}
