//! Retrieval post-processing
//!
//! [`rank_by_importance`] reorders vector store matches,
//! [`filter_for_summary`] trims them for the language model and
//! [`SummaryPrompt`] renders the prompt.

mod ranker;
mod summary;

pub use ranker::{IMPORTANT_PATH_MARKERS, filter_for_summary, is_important, rank_by_importance};
pub use summary::{SummaryOptions, SummaryPrompt};
