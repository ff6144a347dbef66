//! HTTP clients for the indexing services behind the viewer.
//!
//! - [`subgraph`] - GraphQL client for the DAO factory and ENS subgraphs

pub mod subgraph;

// ============================================================================
// Re-exports
// ============================================================================

pub use subgraph::DaoClient;
