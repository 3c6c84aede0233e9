//! Use case orchestration for lostfound.
//!
//! This crate provides the application layer: use cases that coordinate the
//! domain, repo and render layers. It stays thin and delegates to them.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod context;
mod error;
mod explain;
mod listings;
mod present;
mod reports;

#[cfg(test)]
mod test_support;

pub use context::{AppContext, load_policy};
pub use error::AppError;
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use listings::{MatchNotice, browse, match_notices, my_reports, recent};
pub use present::{
    detail_markdown, heading_for, listing_markdown, match_notices_markdown, my_reports_markdown,
    notice_text,
};
pub use reports::{ClaimOutcome, claim, mark_recovered, submit_report, view_report};
