//! Single-report use cases: submit, view, claim and mark recovered.

use lostfound_domain::model::Viewer;
use lostfound_domain::view::ReportView;
use lostfound_domain::{evaluate, matching_lost_reports};
use lostfound_types::{
    ItemReport, ItemStatus, ItemType, MatchRecord, MatchStatus, NewItemReport, ReportId,
};
use serde::Serialize;
use time::OffsetDateTime;

use crate::{AppContext, AppError};

/// Store a new report for the signed-in user.
pub fn submit_report(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    input: &NewItemReport,
    now: OffsetDateTime,
) -> Result<ItemReport, AppError> {
    let owner = viewer
        .user_id()
        .ok_or(AppError::NotSignedIn("submit a report"))?;
    Ok(ctx.repo.create(owner, input, now)?)
}

/// The detail page for one report, redacted for `viewer`.
pub fn view_report(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    id: &ReportId,
) -> Result<ReportView, AppError> {
    let report = ctx.repo.get_report(id)?;
    let decision = evaluate(viewer, &report, ctx.predicate())?;
    Ok(ReportView::build(&report, decision, ctx.marker()))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ClaimOutcome {
    pub report: ItemReport,
    pub record: MatchRecord,
}

/// Claim a found item on behalf of the owner of a matching lost report.
pub fn claim(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    found_id: &ReportId,
    now: OffsetDateTime,
) -> Result<ClaimOutcome, AppError> {
    let claimant = viewer
        .user_id()
        .ok_or(AppError::NotSignedIn("claim an item"))?;
    let report = ctx.repo.get_report(found_id)?;
    if report.item_type != ItemType::Found {
        return Err(AppError::PermissionDenied(format!(
            "report {found_id} is not a found item"
        )));
    }

    let decision = evaluate(viewer, &report, ctx.predicate())?;
    let lost_id = matching_lost_reports(viewer, &report, ctx.predicate())
        .first()
        .map(|lost| lost.id.clone());
    let lost_id = match lost_id {
        Some(id) if decision.allow_claim => id,
        _ => {
            return Err(AppError::PermissionDenied(format!(
                "none of your lost reports match {found_id}"
            )));
        }
    };

    let record = MatchRecord {
        id: ReportId::generate(),
        lost_id,
        found_id: found_id.clone(),
        matched_by: claimant.clone(),
        status: MatchStatus::Pending,
        created_at: now,
    };
    let updated = ctx
        .repo
        .claim_with_match(record.clone(), report.status, now)?;
    tracing::info!(found = %found_id, lost = %record.lost_id, "item claimed");

    Ok(ClaimOutcome {
        report: updated,
        record,
    })
}

/// The owner of a lost report marks it as found again.
pub fn mark_recovered(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    lost_id: &ReportId,
    now: OffsetDateTime,
) -> Result<ItemReport, AppError> {
    let user = viewer
        .user_id()
        .ok_or(AppError::NotSignedIn("update a report"))?;
    let report = ctx.repo.get_report(lost_id)?;
    if !report.is_lost() || !report.is_owned_by(user) {
        return Err(AppError::PermissionDenied(format!(
            "only the owner of lost report {lost_id} can mark it recovered"
        )));
    }
    Ok(ctx
        .repo
        .update_status(lost_id, ItemStatus::Found, report.status, now)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{T0, found_input, lost_input};
    use lostfound_domain::policy::EffectivePolicy;
    use lostfound_domain::view::{ClaimControl, ContactView};
    use lostfound_repo::{
        FileRepository, ItemRepository, LocalSession, MemoryRepository, RepoError, SessionProvider,
    };
    use lostfound_types::UserId;

    /// Memory store whose standalone `record_match` always fails.
    struct NoStandaloneMatches(MemoryRepository);

    impl ItemRepository for NoStandaloneMatches {
        fn create(
            &self,
            owner: &UserId,
            input: &NewItemReport,
            now: OffsetDateTime,
        ) -> Result<ItemReport, RepoError> {
            self.0.create(owner, input, now)
        }

        fn get_report(&self, id: &ReportId) -> Result<ItemReport, RepoError> {
            self.0.get_report(id)
        }

        fn list_reports_by_owner(&self, owner: &UserId) -> Result<Vec<ItemReport>, RepoError> {
            self.0.list_reports_by_owner(owner)
        }

        fn list_active(&self, item_type: Option<ItemType>) -> Result<Vec<ItemReport>, RepoError> {
            self.0.list_active(item_type)
        }

        fn update_status(
            &self,
            id: &ReportId,
            new_status: ItemStatus,
            expected_prior: ItemStatus,
            now: OffsetDateTime,
        ) -> Result<ItemReport, RepoError> {
            self.0.update_status(id, new_status, expected_prior, now)
        }

        fn record_match(&self, _record: MatchRecord) -> Result<(), RepoError> {
            Err(RepoError::Io {
                path: "store.json".into(),
                source: std::io::Error::other("disk full"),
            })
        }

        fn claim_with_match(
            &self,
            record: MatchRecord,
            expected_prior: ItemStatus,
            now: OffsetDateTime,
        ) -> Result<ItemReport, RepoError> {
            self.0.claim_with_match(record, expected_prior, now)
        }

        fn matches_for(&self, id: &ReportId) -> Result<Vec<MatchRecord>, RepoError> {
            self.0.matches_for(id)
        }
    }

    struct World {
        repo: MemoryRepository,
        session: LocalSession,
    }

    impl World {
        fn new() -> Self {
            Self {
                repo: MemoryRepository::new(),
                session: LocalSession::new(),
            }
        }

        fn ctx(&self) -> AppContext<'_> {
            AppContext::new(&self.repo, &self.session, EffectivePolicy::default())
        }

        fn as_user(&self, user: &str) -> Viewer {
            self.session.sign_in(UserId::new(user));
            self.ctx().viewer().expect("viewer")
        }

        fn submit(&self, user: &str, input: &NewItemReport) -> ItemReport {
            let viewer = self.as_user(user);
            submit_report(&self.ctx(), &viewer, input, T0).expect("submit")
        }
    }

    #[test]
    fn anonymous_viewer_cannot_submit() {
        let world = World::new();
        let err = submit_report(&world.ctx(), &Viewer::anonymous(), &lost_input(), T0)
            .expect_err("anonymous");
        assert!(matches!(err, AppError::NotSignedIn(_)));
    }

    #[test]
    fn found_item_is_redacted_without_matching_lost_report() {
        let world = World::new();
        let found = world.submit("finder", &found_input());

        let viewer = world.as_user("stranger");
        let view = view_report(&world.ctx(), &viewer, &found.id).expect("view");
        assert!(view.redacted);
        assert_eq!(view.title, "[hidden]");
        assert_eq!(view.contact, ContactView::Hidden);
        assert_eq!(view.claim, ClaimControl::Hidden);
    }

    #[test]
    fn matching_lost_report_unlocks_and_claims() {
        let world = World::new();
        let found = world.submit("finder", &found_input());
        let lost = world.submit("owner", &lost_input());

        let viewer = world.as_user("owner");
        let view = view_report(&world.ctx(), &viewer, &found.id).expect("view");
        assert_eq!(view.title, "Blue Backpack");
        assert_eq!(view.claim, ClaimControl::Enabled);

        let outcome = claim(&world.ctx(), &viewer, &found.id, T0).expect("claim");
        assert_eq!(outcome.report.status, ItemStatus::Claimed);
        assert_eq!(outcome.record.lost_id, lost.id);
        assert_eq!(outcome.record.matched_by, UserId::new("owner"));
        assert_eq!(
            world.repo.matches_for(&found.id).expect("matches"),
            vec![outcome.record]
        );

        let again = claim(&world.ctx(), &viewer, &found.id, T0).expect_err("already claimed");
        assert!(again.is_retryable());
    }

    #[test]
    fn claim_never_leaves_a_claimed_item_without_its_record() {
        let repo = NoStandaloneMatches(MemoryRepository::new());
        let found = repo
            .create(&UserId::new("finder"), &found_input(), T0)
            .expect("found");
        repo.create(&UserId::new("owner"), &lost_input(), T0)
            .expect("lost");

        let session = LocalSession::signed_in_as(UserId::new("owner"));
        let ctx = AppContext::new(&repo, &session, EffectivePolicy::default());
        let viewer = ctx.viewer().expect("viewer");
        let outcome = claim(&ctx, &viewer, &found.id, T0).expect("claim");

        assert_eq!(outcome.report.status, ItemStatus::Claimed);
        assert_eq!(
            repo.matches_for(&found.id).expect("matches"),
            vec![outcome.record]
        );
    }

    #[test]
    fn claim_without_match_is_denied() {
        let world = World::new();
        let found = world.submit("finder", &found_input());
        let viewer = world.as_user("stranger");

        let err = claim(&world.ctx(), &viewer, &found.id, T0).expect_err("no match");
        assert!(matches!(err, AppError::PermissionDenied(_)));
        assert_eq!(
            world.repo.get_report(&found.id).expect("get").status,
            ItemStatus::Active
        );
    }

    #[test]
    fn claiming_a_lost_report_is_denied() {
        let world = World::new();
        let lost = world.submit("owner", &lost_input());
        let viewer = world.as_user("owner");
        let err = claim(&world.ctx(), &viewer, &lost.id, T0).expect_err("lost");
        assert!(matches!(err, AppError::PermissionDenied(_)));
    }

    #[test]
    fn injected_predicate_replaces_attribute_matching() {
        let world = World::new();
        let found = world.submit("finder", &found_input());
        let mut other = lost_input();
        other.title = "Umbrella".to_string();
        world.submit("owner", &other);

        let viewer = world.as_user("owner");
        let strict = world.ctx();
        assert!(view_report(&strict, &viewer, &found.id).expect("view").redacted);

        let always = world
            .ctx()
            .with_predicate(|_: &ItemReport, _: &ItemReport| true);
        assert!(!view_report(&always, &viewer, &found.id).expect("view").redacted);
    }

    #[test]
    fn only_the_owner_marks_recovered_once() {
        let world = World::new();
        let lost = world.submit("owner", &lost_input());

        let stranger = world.as_user("stranger");
        let err = mark_recovered(&world.ctx(), &stranger, &lost.id, T0).expect_err("stranger");
        assert!(matches!(err, AppError::PermissionDenied(_)));

        let owner = world.as_user("owner");
        let updated = mark_recovered(&world.ctx(), &owner, &lost.id, T0).expect("recover");
        assert_eq!(updated.status, ItemStatus::Found);

        let err = mark_recovered(&world.ctx(), &owner, &lost.id, T0).expect_err("twice");
        assert!(err.is_retryable());
        assert_eq!(world.session.current_user(), Some(UserId::new("owner")));
    }

    #[test]
    fn racing_claims_through_file_store_record_one_match() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("store.json"))
            .expect("utf8 path");

        let setup = FileRepository::open(path.clone());
        let owner = UserId::new("owner");
        let found = setup
            .create(&UserId::new("finder"), &found_input(), T0)
            .expect("found");
        setup.create(&owner, &lost_input(), T0).expect("lost");

        let results: Vec<Result<ClaimOutcome, AppError>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let (path, found_id, owner) = (path.clone(), found.id.clone(), owner.clone());
                    s.spawn(move || {
                        let repo = FileRepository::open(path);
                        let session = LocalSession::signed_in_as(owner);
                        let ctx = AppContext::new(&repo, &session, EffectivePolicy::default());
                        let viewer = ctx.viewer()?;
                        claim(&ctx, &viewer, &found_id, T0)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread"))
                .collect()
        });

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(AppError::is_retryable));
        assert_eq!(setup.matches_for(&found.id).expect("matches").len(), 1);
        assert_eq!(
            setup.get_report(&found.id).expect("get").status,
            ItemStatus::Claimed
        );
    }
}
