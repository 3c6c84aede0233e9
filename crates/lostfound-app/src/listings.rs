//! Listing use cases: browse, recent, my reports and match notices.

use lostfound_domain::evaluate;
use lostfound_domain::matching::{MatchCandidate, match_candidates};
use lostfound_domain::model::Viewer;
use lostfound_domain::search::{ReportFilter, matches_term};
use lostfound_domain::view::ListingRow;
use lostfound_types::{ItemReport, ItemType};
use serde::Serialize;

use crate::{AppContext, AppError};

fn rows(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    reports: &[ItemReport],
) -> Result<Vec<ListingRow>, AppError> {
    reports
        .iter()
        .map(|report| {
            let decision = evaluate(viewer, report, ctx.predicate())?;
            Ok(ListingRow::build(report, decision, ctx.marker()))
        })
        .collect()
}

/// Active reports of one tab (or both), filtered by a search term.
///
/// Redacted reports are only listed for a blank term; matching a term
/// against hidden fields would disclose them.
pub fn browse(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    tab: Option<ItemType>,
    term: &str,
) -> Result<Vec<ListingRow>, AppError> {
    let searching = !term.trim().is_empty();
    let mut out = Vec::new();
    for report in ctx.repo.list_active(tab)? {
        let decision = evaluate(viewer, &report, ctx.predicate())?;
        if searching && !(decision.reveal_details && matches_term(&report, term)) {
            continue;
        }
        out.push(ListingRow::build(&report, decision, ctx.marker()));
    }
    Ok(out)
}

/// The newest active reports, redacted for `viewer`.
pub fn recent(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    limit: usize,
) -> Result<Vec<ListingRow>, AppError> {
    let reports = ctx.repo.recent(limit)?;
    rows(ctx, viewer, &reports)
}

/// Every report the signed-in user filed, in any status. Owners see their
/// own reports unredacted.
pub fn my_reports(
    ctx: &AppContext<'_>,
    viewer: &Viewer,
    filter: ReportFilter,
) -> Result<Vec<ItemReport>, AppError> {
    let user = viewer
        .user_id()
        .ok_or(AppError::NotSignedIn("list your reports"))?;
    Ok(ctx
        .repo
        .list_reports_by_owner(user)?
        .into_iter()
        .filter(|r| filter.accepts(r))
        .collect())
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchNotice {
    #[serde(flatten)]
    pub candidate: MatchCandidate,
    pub lost_title: String,
    pub found_title: String,
}

/// Active found reports that match one of the viewer's lost reports.
pub fn match_notices(ctx: &AppContext<'_>, viewer: &Viewer) -> Result<Vec<MatchNotice>, AppError> {
    if viewer.is_anonymous() {
        return Ok(Vec::new());
    }
    let found = ctx.repo.list_active(Some(ItemType::Found))?;
    let notices = match_candidates(viewer, &found, ctx.predicate())
        .into_iter()
        .filter_map(|candidate| {
            let lost = viewer.lost_reports().find(|r| r.id == candidate.lost_id)?;
            let found_report = found.iter().find(|r| r.id == candidate.found_id)?;
            Some(MatchNotice {
                lost_title: lost.title.clone(),
                found_title: found_report.title.clone(),
                candidate,
            })
        })
        .collect();
    Ok(notices)
}
