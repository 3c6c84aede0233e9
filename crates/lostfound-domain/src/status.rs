//! Report status state machine.
//!
//! `Active -> Found` when the owner marks a lost item recovered,
//! `Active -> Claimed` after a successful claim. `Found` and `Claimed` are final.

use lostfound_types::{ItemReport, ItemStatus, ItemType, ids};

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid status transition: {} -> {}", .from.as_str(), .to.as_str())]
pub struct TransitionError {
    pub from: ItemStatus,
    pub to: ItemStatus,
}

impl TransitionError {
    pub fn code(&self) -> &'static str {
        ids::CODE_INVALID_TRANSITION
    }
}

/// Statuses reachable from `from` in one step.
pub fn allowed_targets(from: ItemStatus) -> &'static [ItemStatus] {
    match from {
        ItemStatus::Active => &[ItemStatus::Found, ItemStatus::Claimed],
        ItemStatus::Found | ItemStatus::Claimed => &[],
    }
}

pub fn transition(from: ItemStatus, to: ItemStatus) -> Result<ItemStatus, TransitionError> {
    if allowed_targets(from).contains(&to) {
        Ok(to)
    } else {
        Err(TransitionError { from, to })
    }
}

/// Label shown on report cards. Found-type reports read "Active" until claimed.
pub fn status_label(report: &ItemReport) -> &'static str {
    match (report.item_type, report.status) {
        (_, ItemStatus::Claimed) => "Claimed",
        (ItemType::Lost, ItemStatus::Found) => "Found",
        (ItemType::Found, ItemStatus::Found) => "Returned",
        (_, ItemStatus::Active) => "Active",
    }
}
