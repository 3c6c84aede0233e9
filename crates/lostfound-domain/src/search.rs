//! Listing queries over already-fetched reports.

use lostfound_types::{ItemReport, ItemType};
use std::cmp::Ordering;

/// Case-insensitive substring match against title, category, location and
/// description. A blank term matches everything.
pub fn matches_term(report: &ItemReport, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [
        report.title.as_str(),
        report.category.as_str(),
        report.location.as_str(),
        report.description.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&needle))
}

/// Newest `created_at` first; ties broken by id so the order is total.
pub fn compare_newest_first(a: &ItemReport, b: &ItemReport) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| a.id.cmp(&b.id))
}

pub fn sort_newest_first(reports: &mut [ItemReport]) {
    reports.sort_by(compare_newest_first);
}

/// Filter for the "my reports" page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFilter {
    #[default]
    All,
    Lost,
    Found,
}

impl ReportFilter {
    pub fn accepts(self, report: &ItemReport) -> bool {
        match self {
            ReportFilter::All => true,
            ReportFilter::Lost => report.item_type == ItemType::Lost,
            ReportFilter::Found => report.item_type == ItemType::Found,
        }
    }
}
