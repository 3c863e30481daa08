//! Debug guard: wrap logging calls in source files with an environment check.
//!
//! Walks a source tree, picks files by suffix, and prefixes every line that
//! starts with a recognized logging call with the guard condition, rewriting
//! the file only when something changed.

mod matcher;
pub mod report;
mod rewrite;
mod walk;

pub use matcher::{CallMatcher, GuardMode, WrappedContent};
pub use rewrite::{
    process, process_file, process_with, FileChange, FileFailure, FileOutcome, RewriteOptions,
    WrapEvent, WrapResult,
};
pub use walk::{relative_path, walk_candidates, Candidate, CandidateFilter};
