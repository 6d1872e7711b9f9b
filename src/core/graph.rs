//! Graph analysis utilities.
//!
//! The automaton graph is small (tens of states), so connectivity is checked
//! with a plain union-find over the edges rather than a graph traversal.

use std::collections::HashMap;
use std::hash::Hash;

/// The weakly-connected components found in a graph.
///
/// Components are reported in the order their first node was seen while
/// walking the edges, and nodes inside a component keep that order too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Components<N> {
    representatives: Vec<N>,
    groups: Vec<Vec<N>>,
}

impl<N> Components<N> {
    /// Number of weakly-connected components.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the graph had no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True iff there is exactly one component.
    ///
    /// An empty graph is not connected: it has zero components, not one.
    pub fn is_connected(&self) -> bool {
        self.groups.len() == 1
    }

    /// One canonical node (the union-find root) per component.
    pub fn representatives(&self) -> &[N] {
        &self.representatives
    }

    /// The node membership of every component.
    pub fn groups(&self) -> &[Vec<N>] {
        &self.groups
    }
}

/// Disjoint-set forest with path compression and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return;
        }
        match self.rank[a].cmp(&self.rank[b]) {
            std::cmp::Ordering::Less => self.parent[a] = b,
            std::cmp::Ordering::Greater => self.parent[b] = a,
            std::cmp::Ordering::Equal => {
                self.parent[b] = a;
                self.rank[a] += 1;
            }
        }
    }
}

fn intern<N: Clone + Eq + Hash>(index: &mut HashMap<N, usize>, nodes: &mut Vec<N>, node: N) -> usize {
    if let Some(&id) = index.get(&node) {
        return id;
    }
    let id = nodes.len();
    index.insert(node.clone(), id);
    nodes.push(node);
    id
}

/// Finds the weakly-connected components of a graph.
///
/// Every edge is a `(sources, dest)` pair and connects each of `sources` to
/// `dest`; edge direction is ignored. The node set is the union of every
/// source and destination seen.
///
/// # Example
///
/// ```rust
/// use automaton::core::connected_components;
///
/// let components = connected_components(vec![
///     (vec!["a"], "b"),
///     (vec!["c"], "d"),
/// ]);
/// assert_eq!(components.len(), 2);
///
/// let components = connected_components(vec![(vec!["a", "b", "c"], "center")]);
/// assert!(components.is_connected());
/// ```
pub fn connected_components<N, I, E>(edges: I) -> Components<N>
where
    N: Clone + Eq + Hash,
    I: IntoIterator<Item = (E, N)>,
    E: IntoIterator<Item = N>,
{
    let mut index = HashMap::new();
    let mut nodes = Vec::new();
    let mut links = Vec::new();

    for (sources, dest) in edges {
        let sources: Vec<usize> = sources
            .into_iter()
            .map(|s| intern(&mut index, &mut nodes, s))
            .collect();
        let dest = intern(&mut index, &mut nodes, dest);
        links.extend(sources.into_iter().map(|s| (s, dest)));
    }

    let mut set = DisjointSet::new(nodes.len());
    for (source, dest) in links {
        set.union(source, dest);
    }

    let mut slots: HashMap<usize, usize> = HashMap::new();
    let mut representatives = Vec::new();
    let mut groups: Vec<Vec<N>> = Vec::new();
    for (id, node) in nodes.iter().enumerate() {
        let root = set.find(id);
        let slot = *slots.entry(root).or_insert_with(|| {
            representatives.push(nodes[root].clone());
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(node.clone());
    }

    Components {
        representatives,
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_edges_means_no_components() {
        let components = connected_components(Vec::<(Vec<&str>, &str)>::new());
        assert!(components.is_empty());
        assert!(!components.is_connected());
        assert_eq!(components.len(), 0);
    }

    #[test]
    fn cycle_is_one_component() {
        let components = connected_components(vec![
            (vec!["red"], "green"),
            (vec!["green"], "yellow"),
            (vec!["yellow"], "red"),
        ]);
        assert!(components.is_connected());
        assert_eq!(components.groups()[0], vec!["red", "green", "yellow"]);
    }

    #[test]
    fn direction_is_ignored() {
        // a -> b <- c: no directed path from a to c, still weakly connected
        let components = connected_components(vec![(vec!["a"], "b"), (vec!["c"], "b")]);
        assert!(components.is_connected());
    }

    #[test]
    fn self_loop_is_one_component() {
        let components = connected_components(vec![(vec!["a"], "a")]);
        assert_eq!(components.len(), 1);
        assert_eq!(components.representatives(), &["a"]);
    }

    #[test]
    fn disjoint_clusters_are_reported_separately() {
        let components = connected_components(vec![
            (vec!["a"], "b"),
            (vec!["b"], "c"),
            (vec!["e"], "f"),
            (vec!["1"], "2"),
            (vec!["2"], "3"),
        ]);
        assert_eq!(components.len(), 3);
        assert_eq!(components.groups()[0], vec!["a", "b", "c"]);
        assert_eq!(components.groups()[1], vec!["e", "f"]);
        assert_eq!(components.groups()[2], vec!["1", "2", "3"]);
    }

    #[test]
    fn bridging_edge_joins_clusters() {
        let components = connected_components(vec![
            (vec!["a"], "b"),
            (vec!["c"], "d"),
            (vec!["b"], "c"),
        ]);
        assert!(components.is_connected());
    }

    #[test]
    fn multi_source_edge_connects_all_sources() {
        let components = connected_components(vec![(vec!["a", "b", "c", "d", "e"], "center")]);
        assert!(components.is_connected());
        assert_eq!(components.groups()[0].len(), 6);
    }

    #[test]
    fn representatives_belong_to_their_groups() {
        let components = connected_components(vec![(vec![1, 2], 3), (vec![4], 5)]);
        for (root, group) in components.representatives().iter().zip(components.groups()) {
            assert!(group.contains(root));
        }
    }
}
