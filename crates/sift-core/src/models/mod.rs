mod answer;
mod document;
mod query_mode;

pub use answer::{DocumentRef, GroundedAnswer};
pub use document::{Document, NewDocument, ScoredDocument};
pub use query_mode::QueryMode;
