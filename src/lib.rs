//! Maximum-cardinality matching in bipartite graphs (Hopcroft-Karp), and
//! minimum path cover of a DAG via the reduction to bipartite matching.

pub mod bipartite_match;
pub mod path_cover;

pub use bipartite_match::BipartiteMatcher;
pub use path_cover::dag_min_path_cover;
