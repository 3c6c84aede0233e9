//! Pure disclosure policy evaluation (no IO).
//!
//! Input: a viewer and reports fetched elsewhere, plus an injected match predicate.
//! Output: disclosure decisions, redacted views, match candidates and status transitions.

#![forbid(unsafe_code)]

pub mod matching;
pub mod model;
pub mod policy;
pub mod search;
pub mod status;
pub mod submission;
pub mod view;

mod engine;
mod fingerprint;

pub use engine::{MatchPredicate, PolicyError, evaluate, matching_lost_reports};
pub use fingerprint::fingerprint_for_match;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
