//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Disclosure decisions for lost and found reports
//! - Redaction of views
//! - Status transitions and title similarity

use crate::engine::evaluate;
use crate::matching::{AttributeMatcher, title_similarity};
use crate::model::Viewer;
use crate::status::transition;
use crate::view::{ContactView, ImageView, ReportView};
use lostfound_types::{
    DisclosureDecision, ImageRef, ItemReport, ItemStatus, ItemType, ReportId, UserId,
};
use proptest::prelude::*;
use time::Duration;
use time::macros::{date, datetime};

// ============================================================================
// Strategies for generating arbitrary values
// ============================================================================

/// Strategy for free-form titles of one to four words.
fn arb_title() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z]{3,8}", 1..=4).prop_map(|words| words.join(" "))
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Bags".to_string()),
        Just("Keys".to_string()),
        Just("Electronics".to_string()),
        Just("Clothing".to_string()),
    ]
}

fn arb_status() -> impl Strategy<Value = ItemStatus> {
    prop_oneof![
        Just(ItemStatus::Active),
        Just(ItemStatus::Found),
        Just(ItemStatus::Claimed),
    ]
}

fn arb_user() -> impl Strategy<Value = UserId> {
    "u[0-9]{1,3}".prop_map(UserId::new)
}

fn arb_report(item_type: ItemType) -> impl Strategy<Value = ItemReport> {
    (
        "[a-z0-9]{4,12}",
        arb_user(),
        arb_title(),
        arb_category(),
        0i64..60,
        proptest::option::of("img/[a-z]{4,8}\\.jpg"),
        arb_status(),
    )
        .prop_map(move |(id, owner, title, category, day_offset, image, status)| {
            ItemReport {
                id: ReportId::new(id),
                item_type,
                title,
                category,
                location: "Student Centre".to_string(),
                date: date!(2025 - 01 - 01) + Duration::days(day_offset),
                description: "zz-description".to_string(),
                contact_info: "zz-contact@example.com".to_string(),
                image_ref: image.map(ImageRef::new),
                owner_id: owner,
                status,
                created_at: datetime!(2025-01-01 00:00 UTC),
                updated_at: None,
            }
        })
}

fn arb_any_report() -> impl Strategy<Value = ItemReport> {
    prop_oneof![arb_report(ItemType::Lost), arb_report(ItemType::Found)]
}

/// Viewer owning zero or more lost reports (ownership is rewritten to match).
fn arb_viewer() -> impl Strategy<Value = Viewer> {
    prop_oneof![
        Just(Viewer::anonymous()),
        (arb_user(), prop::collection::vec(arb_report(ItemType::Lost), 0..4)).prop_map(
            |(user, reports)| {
                let owned: Vec<ItemReport> = reports
                    .into_iter()
                    .map(|mut r| {
                        r.owner_id = user.clone();
                        r
                    })
                    .collect();
                Viewer::signed_in(user, owned)
            }
        ),
    ]
}

fn always(_: &ItemReport, _: &ItemReport) -> bool {
    true
}

// ============================================================================
// Disclosure properties
// ============================================================================

proptest! {
    #[test]
    fn viewer_without_lost_reports_never_sees_found_contact(
        user in proptest::option::of(arb_user()),
        report in arb_report(ItemType::Found),
    ) {
        let viewer = match user {
            Some(u) => Viewer::signed_in(u, Vec::new()),
            None => Viewer::anonymous(),
        };
        // Even a predicate that accepts everything has nothing to compare.
        let decision = evaluate(&viewer, &report, &always).expect("evaluate");
        prop_assert!(!decision.reveal_contact);
        prop_assert!(!decision.allow_claim);
    }

    #[test]
    fn signed_in_viewer_keeps_its_rewritten_lost_reports(viewer in arb_viewer()) {
        match viewer.user_id() {
            None => prop_assert_eq!(viewer.lost_reports().count(), 0),
            Some(user) => {
                for report in viewer.lost_reports() {
                    prop_assert_eq!(&report.owner_id, user);
                    prop_assert_eq!(report.item_type, ItemType::Lost);
                }
            }
        }
    }

    #[test]
    fn lost_reports_are_always_open(
        viewer in arb_viewer(),
        report in arb_report(ItemType::Lost),
    ) {
        let decision = evaluate(&viewer, &report, &AttributeMatcher::default()).expect("evaluate");
        prop_assert_eq!(decision, DisclosureDecision::OPEN);
    }

    #[test]
    fn any_matching_owned_report_opens_found_item(
        user in arb_user(),
        owned in prop::collection::vec(arb_report(ItemType::Lost), 1..4),
        report in arb_report(ItemType::Found),
        pick in any::<prop::sample::Index>(),
    ) {
        let owned: Vec<ItemReport> = owned
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                r.owner_id = user.clone();
                r.id = ReportId::new(format!("lost-{i}"));
                r
            })
            .collect();
        let chosen = owned[pick.index(owned.len())].id.clone();
        let viewer = Viewer::signed_in(user, owned);
        let predicate = |lost: &ItemReport, _: &ItemReport| lost.id == chosen;

        let decision = evaluate(&viewer, &report, &predicate).expect("evaluate");
        prop_assert!(decision.reveal_details);
        prop_assert!(decision.allow_claim);
    }

    #[test]
    fn evaluate_is_idempotent(
        viewer in arb_viewer(),
        report in arb_any_report(),
    ) {
        let matcher = AttributeMatcher::default();
        let before = viewer.clone();
        let first = evaluate(&viewer, &report, &matcher).expect("evaluate");
        let second = evaluate(&viewer, &report, &matcher).expect("evaluate");
        prop_assert_eq!(first, second);
        prop_assert_eq!(viewer, before);
    }

    #[test]
    fn redacted_views_never_contain_report_text(
        mut report in arb_report(ItemType::Found),
        title in "Q[A-Z]{6,10}",
    ) {
        // Uppercase titles cannot collide with JSON keys, ids or enum tags.
        report.title = title;
        let view = ReportView::build(&report, DisclosureDecision::REDACTED, "###");
        let json = serde_json::to_string(&view).expect("serialize");
        prop_assert!(!json.contains(&report.title));
        prop_assert!(!json.contains("zz-description"));
        prop_assert!(!json.contains("zz-contact"));
        prop_assert!(!json.contains("Student Centre"));
        if let Some(image) = &report.image_ref {
            prop_assert!(!json.contains(image.as_str()));
            prop_assert_eq!(&view.image, &ImageView::Obscured);
        }
        prop_assert_eq!(&view.contact, &ContactView::Hidden);
    }
}

// ============================================================================
// Status and similarity properties
// ============================================================================

proptest! {
    #[test]
    fn at_most_one_transition_succeeds(requests in prop::collection::vec(arb_status(), 0..8)) {
        let mut current = ItemStatus::Active;
        let mut changes = 0;
        for to in requests {
            if let Ok(next) = transition(current, to) {
                current = next;
                changes += 1;
            }
        }
        prop_assert!(changes <= 1);
        if changes == 1 {
            prop_assert!(current.is_terminal());
        }
    }

    #[test]
    fn title_similarity_is_bounded_and_symmetric(a in arb_title(), b in arb_title()) {
        let ab = title_similarity(&a, &b);
        let ba = title_similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert_eq!(ab, ba);
        prop_assert_eq!(title_similarity(&a, &a), 1.0);
    }
}
