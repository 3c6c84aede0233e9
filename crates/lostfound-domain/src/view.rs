//! What a page renderer is allowed to show for a report.
//!
//! Views are the only thing handed to renderers. A redacted view is built
//! without reading the redacted fields, so nothing of them can leak through
//! alt text, tooltips or attributes.

use crate::status::status_label;
use lostfound_types::{
    DisclosureDecision, ImageRef, ItemReport, ItemType, ReportId, format_calendar_date, ids,
};
use serde::Serialize;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const LONG_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[month repr:long] [day padding:none], [year]");

/// "March 14, 2025".
pub fn display_date(date: Date) -> String {
    date.format(LONG_DATE)
        .unwrap_or_else(|_| format_calendar_date(date))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageView {
    None,
    Original { image_ref: ImageRef, alt: String },
    Obscured,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ContactView {
    Visible(String),
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimControl {
    Enabled,
    Hidden,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    SecurityRedacted,
    Match,
}

impl Notice {
    pub fn code(self) -> &'static str {
        match self {
            Notice::SecurityRedacted => ids::NOTICE_SECURITY_REDACTED,
            Notice::Match => ids::NOTICE_MATCH,
        }
    }
}

fn image_view(report: &ItemReport, reveal: bool) -> ImageView {
    match (&report.image_ref, reveal) {
        (None, _) => ImageView::None,
        (Some(_), false) => ImageView::Obscured,
        (Some(image_ref), true) => ImageView::Original {
            image_ref: image_ref.clone(),
            alt: report.title.clone(),
        },
    }
}

/// Detail view of one report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReportView {
    pub id: ReportId,
    pub item_type: ItemType,
    pub status: &'static str,
    pub redacted: bool,
    pub title: String,
    pub category: String,
    pub location: String,
    pub date: String,
    pub description: String,
    pub contact: ContactView,
    pub image: ImageView,
    pub claim: ClaimControl,
    pub notices: Vec<Notice>,
}

impl ReportView {
    pub fn build(report: &ItemReport, decision: DisclosureDecision, marker: &str) -> Self {
        let reveal = decision.reveal_details;
        let text = |value: &str| {
            if reveal {
                value.to_string()
            } else {
                marker.to_string()
            }
        };

        let contact = if decision.reveal_contact {
            ContactView::Visible(report.contact_info.clone())
        } else {
            ContactView::Hidden
        };

        let mut notices = Vec::new();
        if !reveal {
            notices.push(Notice::SecurityRedacted);
        }
        if report.is_found() && decision.allow_claim {
            notices.push(Notice::Match);
        }

        Self {
            id: report.id.clone(),
            item_type: report.item_type,
            status: status_label(report),
            redacted: !reveal,
            title: text(&report.title),
            category: text(&report.category),
            location: text(&report.location),
            date: if reveal {
                display_date(report.date)
            } else {
                marker.to_string()
            },
            description: text(&report.description),
            contact,
            image: image_view(report, reveal),
            claim: if decision.allow_claim {
                ClaimControl::Enabled
            } else {
                ClaimControl::Hidden
            },
            notices,
        }
    }
}

/// One row of a listing table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub id: ReportId,
    pub item_type: ItemType,
    pub redacted: bool,
    pub title: String,
    pub category: String,
    pub location: String,
    pub image: ImageView,
}

impl ListingRow {
    pub fn build(report: &ItemReport, decision: DisclosureDecision, marker: &str) -> Self {
        let reveal = decision.reveal_details;
        let text = |value: &str| {
            if reveal {
                value.to_string()
            } else {
                marker.to_string()
            }
        };
        Self {
            id: report.id.clone(),
            item_type: report.item_type,
            redacted: !reveal,
            title: text(&report.title),
            category: text(&report.category),
            location: text(&report.location),
            image: image_view(report, reveal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{found, lost};

    const MARKER: &str = "[hidden]";

    #[test]
    fn redacted_view_leaks_no_field() {
        let mut report = found("f1", "u2", "Blue Backpack", "Bags");
        report.description = "Contains a red notebook".to_string();
        report.image_ref = Some(ImageRef::new("img/backpack.jpg"));

        let view = ReportView::build(&report, DisclosureDecision::REDACTED, MARKER);
        let json = serde_json::to_string(&view).expect("serialize");

        for secret in [
            "Blue Backpack",
            "Bags",
            "Library",
            "red notebook",
            "finder@example.com",
            "img/backpack.jpg",
            "2025",
        ] {
            assert!(!json.contains(secret), "leaked {secret}: {json}");
        }
        assert_eq!(view.title, MARKER);
        assert_eq!(view.date, MARKER);
        assert_eq!(view.image, ImageView::Obscured);
        assert_eq!(view.contact, ContactView::Hidden);
        assert_eq!(view.claim, ClaimControl::Hidden);
        assert_eq!(view.notices, vec![Notice::SecurityRedacted]);
    }

    #[test]
    fn matched_view_shows_everything_and_enables_claim() {
        let mut report = found("f1", "u2", "Blue Backpack", "Bags");
        report.image_ref = Some(ImageRef::new("img/backpack.jpg"));

        let view = ReportView::build(&report, DisclosureDecision::MATCHED, MARKER);
        assert_eq!(view.title, "Blue Backpack");
        assert_eq!(view.date, "March 12, 2025");
        assert_eq!(
            view.contact,
            ContactView::Visible("finder@example.com".to_string())
        );
        assert_eq!(
            view.image,
            ImageView::Original {
                image_ref: ImageRef::new("img/backpack.jpg"),
                alt: "Blue Backpack".to_string()
            }
        );
        assert_eq!(view.claim, ClaimControl::Enabled);
        assert_eq!(view.notices, vec![Notice::Match]);
    }

    #[test]
    fn lost_view_is_open_without_claim() {
        let report = lost("l1", "u1", "Keys", "Keys");
        let view = ReportView::build(&report, DisclosureDecision::OPEN, MARKER);
        assert!(!view.redacted);
        assert_eq!(view.claim, ClaimControl::Hidden);
        assert!(view.notices.is_empty());
        assert_eq!(view.image, ImageView::None);
    }

    #[test]
    fn redacted_row_hides_text_and_image() {
        let mut report = found("f1", "u2", "Blue Backpack", "Bags");
        report.image_ref = Some(ImageRef::new("img/backpack.jpg"));
        let row = ListingRow::build(&report, DisclosureDecision::REDACTED, MARKER);
        assert!(row.redacted);
        assert_eq!(row.title, MARKER);
        assert_eq!(row.category, MARKER);
        assert_eq!(row.location, MARKER);
        assert_eq!(row.image, ImageView::Obscured);
    }

    #[test]
    fn notice_codes_are_stable() {
        assert_eq!(Notice::Match.code(), "notice.match");
        assert_eq!(Notice::SecurityRedacted.code(), "notice.security_redacted");
    }
}
