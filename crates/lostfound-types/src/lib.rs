//! Stable DTOs and IDs used across the lostfound workspace.
//!
//! This crate is intentionally boring:
//! - item reports, match records and disclosure decisions as they are stored and exchanged
//! - stable string codes for errors and notices
//! - opaque identifier newtypes
//! - explain registry for error codes

#![forbid(unsafe_code)]

pub mod explain;
pub mod identity;
pub mod ids;
pub mod item;

pub use explain::{Explanation, all_codes, lookup_explanation};
pub use identity::{ImageRef, ReportId, UserId};
pub use item::{
    DisclosureDecision, ItemReport, ItemStatus, ItemType, MatchRecord, MatchStatus, NewItemReport,
    SCHEMA_STORE_V1, format_calendar_date, parse_calendar_date,
};
