//! Hopcroft-Karp maximum bipartite matching.
//!
//! Runs in O(E sqrt(V)): each round does one BFS layering over the whole
//! graph followed by a batch of shortest-length augmentations, and the
//! shortest augmenting-path length strictly grows between rounds.

use std::collections::VecDeque;

// BFS level of a left vertex not reached in the current round.
const UNVISITED: u32 = !0;

/// A bipartite graph over left vertices `0..n1` and right vertices `0..n2`,
/// together with the matching state that [`max_matching`](Self::max_matching)
/// computes in place.
pub struct BipartiteMatcher {
    neighbors: Vec<Vec<u32>>,
    n2: usize,

    match_u: Vec<Option<u32>>,
    match_v: Vec<Option<u32>>,

    // Layering over left vertices, rebuilt every round. A finite value is
    // the vertex's distance along shortest alternating paths from the set
    // of unmatched left vertices.
    level: Vec<u32>,
}

impl BipartiteMatcher {
    pub fn new(n1: usize, n2: usize) -> Self {
        Self {
            neighbors: vec![vec![]; n1],
            n2,
            match_u: vec![None; n1],
            match_v: vec![None; n2],
            level: vec![UNVISITED; n1],
        }
    }

    pub fn from_edges(n1: usize, n2: usize, edges: impl IntoIterator<Item = [u32; 2]>) -> Self {
        let mut this = Self::new(n1, n2);
        for [u, v] in edges {
            this.add_edge(u as usize, v as usize);
        }
        this
    }

    /// Adds the edge `(u, v)`. An endpoint outside `0..n1` x `0..n2` makes
    /// the call a no-op; parallel edges are kept as harmless duplicates.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        if u < self.neighbors.len() && v < self.n2 {
            self.neighbors[u].push(v as u32);
        }
    }

    /// Right vertex matched with left vertex `u`, after `max_matching`.
    pub fn pair_of_left(&self, u: usize) -> Option<u32> {
        self.match_u[u]
    }

    /// Left vertex matched with right vertex `v`, after `max_matching`.
    pub fn pair_of_right(&self, v: usize) -> Option<u32> {
        self.match_v[v]
    }

    // Rebuilds the level labels from the unmatched left vertices. Returns
    // false iff no alternating path reaches an unmatched right vertex, i.e.
    // the current matching is maximum.
    fn layer(&mut self) -> bool {
        self.level.fill(UNVISITED);
        let mut queue = VecDeque::new();
        for u in 0..self.neighbors.len() {
            if self.match_u[u].is_none() {
                self.level[u] = 0;
                queue.push_back(u as u32);
            }
        }

        let mut reached_free = false;
        while let Some(u) = queue.pop_front() {
            let d = self.level[u as usize];
            for &v in &self.neighbors[u as usize] {
                match self.match_v[v as usize] {
                    None => reached_free = true,
                    Some(w) if self.level[w as usize] == UNVISITED => {
                        self.level[w as usize] = d + 1;
                        queue.push_back(w);
                    }
                    _ => {}
                }
            }
        }
        reached_free
    }

    /// Computes a maximum matching and returns it as `(u, v)` pairs in
    /// increasing `u` order. The match state queried by
    /// [`pair_of_left`](Self::pair_of_left) / [`pair_of_right`](Self::pair_of_right)
    /// reflects the same result. Calling this again without modifying the
    /// graph returns the same matching.
    pub fn max_matching(&mut self) -> Vec<(u32, u32)> {
        while self.layer() {
            for u in 0..self.neighbors.len() {
                if self.match_u[u].is_none() {
                    augment(
                        u as u32,
                        &self.neighbors,
                        &mut self.match_u,
                        &mut self.match_v,
                        &mut self.level,
                    );
                }
            }
        }

        self.match_u
            .iter()
            .enumerate()
            .filter_map(|(u, v)| v.map(|v| (u as u32, v)))
            .collect()
    }
}

// Augmenting DFS restricted to the current layering: from u, an edge (u, v)
// may be used if v is unmatched, or if v's partner sits exactly one level
// deeper and recursively augments. A left vertex that exhausts its
// neighbors has its level reset so no other path retries it this round.
fn augment(
    u: u32,
    neighbors: &[Vec<u32>],
    match_u: &mut [Option<u32>],
    match_v: &mut [Option<u32>],
    level: &mut [u32],
) -> bool {
    for &v in &neighbors[u as usize] {
        let reachable = match match_v[v as usize] {
            None => true,
            Some(w) => {
                level[w as usize] == level[u as usize] + 1
                    && augment(w, neighbors, match_u, match_v, level)
            }
        };
        if reachable {
            match_u[u as usize] = Some(v);
            match_v[v as usize] = Some(u);
            return true;
        }
    }
    level[u as usize] = UNVISITED;
    false
}
