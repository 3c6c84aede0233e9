//! Fuzz target for submission validation and disclosure.
//!
//! Goal: validating arbitrary form input and evaluating the resulting report
//! should **never panic**, and a redacted view must never carry hidden text.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_submission
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lostfound_domain::matching::AttributeMatcher;
use lostfound_domain::model::Viewer;
use lostfound_domain::submission::validate;
use lostfound_domain::view::{ContactView, ReportView};
use lostfound_types::{ImageRef, ItemType, NewItemReport, ReportId, UserId};
use time::OffsetDateTime;

const MARKER: &str = "[hidden]";

#[derive(Debug, Arbitrary)]
struct Input {
    found: Option<bool>,
    title: String,
    category: String,
    location: String,
    date: String,
    description: String,
    contact_info: String,
    image_ref: Option<String>,
    viewer: Option<String>,
}

fuzz_target!(|input: Input| {
    let form = NewItemReport {
        item_type: input
            .found
            .map(|found| if found { ItemType::Found } else { ItemType::Lost }),
        title: input.title,
        category: input.category,
        location: input.location,
        date: input.date,
        description: input.description,
        contact_info: input.contact_info,
        image_ref: input.image_ref.map(ImageRef::new),
    };
    let Ok(valid) = validate(&form) else {
        return;
    };
    let report = valid.into_report(
        ReportId::new("r1"),
        UserId::new("owner"),
        OffsetDateTime::UNIX_EPOCH,
    );

    let viewer = match input.viewer {
        Some(user) => Viewer::signed_in(UserId::new(user), Vec::new()),
        None => Viewer::anonymous(),
    };
    let Ok(decision) = lostfound_domain::evaluate(&viewer, &report, &AttributeMatcher::default())
    else {
        return;
    };
    let view = ReportView::build(&report, decision, MARKER);
    if view.redacted {
        assert_eq!(view.title, MARKER);
        assert_eq!(view.description, MARKER);
        assert_eq!(view.contact, ContactView::Hidden);
    }
});
