//! Search module for the computer opponent
//!
//! Contains the exhaustive minimax search that drives move selection.

pub mod minimax;

pub use minimax::{CandidateMove, SearchResult, Searcher};
