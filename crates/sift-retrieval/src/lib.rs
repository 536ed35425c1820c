//! # sift-retrieval
//!
//! Question → embedding → cosine ranking over the corpus snapshot →
//! grounded context → model selection → generation, with provenance.
//!
//! The scorer, ranker, assembler and resolver are pure functions; only
//! [`RetrievalEngine`] talks to collaborators.

pub mod context;
pub mod engine;
pub mod mode;
pub mod provenance;
pub mod ranking;
pub mod similarity;

pub use context::assemble;
pub use engine::RetrievalEngine;
pub use mode::resolve_model;
pub use ranking::rank;
pub use similarity::cosine_similarity;
