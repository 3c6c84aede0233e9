use crate::model::Viewer;
use lostfound_types::{DisclosureDecision, ItemReport, ItemType, ids};

/// Decides whether a lost report and a found report describe the same item.
///
/// Implementations must be pure. Any `Fn(&ItemReport, &ItemReport) -> bool`
/// qualifies, which keeps tests free to inject closures.
pub trait MatchPredicate {
    fn matches(&self, lost: &ItemReport, found: &ItemReport) -> bool;
}

impl<F> MatchPredicate for F
where
    F: Fn(&ItemReport, &ItemReport) -> bool,
{
    fn matches(&self, lost: &ItemReport, found: &ItemReport) -> bool {
        self(lost, found)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl PolicyError {
    pub fn code(&self) -> &'static str {
        match self {
            PolicyError::InvalidArgument(_) => ids::CODE_INVALID_ARGUMENT,
        }
    }
}

/// Compute what `viewer` may see of `report`.
///
/// Lost reports are always open. A found report is open (and claimable) only
/// when the viewer is signed in and owns a lost report the predicate matches
/// against it; otherwise it is fully redacted.
pub fn evaluate<P>(
    viewer: &Viewer,
    report: &ItemReport,
    predicate: &P,
) -> Result<DisclosureDecision, PolicyError>
where
    P: MatchPredicate + ?Sized,
{
    check_arguments(viewer, report)?;

    let decision = match report.item_type {
        ItemType::Lost => DisclosureDecision::OPEN,
        ItemType::Found => {
            let matched = viewer.user_id().is_some()
                && viewer.lost_reports().any(|lost| predicate.matches(lost, report));
            if matched {
                DisclosureDecision::MATCHED
            } else {
                DisclosureDecision::REDACTED
            }
        }
    };

    tracing::debug!(
        report = %report.id,
        item_type = report.item_type.as_str(),
        reveal_details = decision.reveal_details,
        reveal_contact = decision.reveal_contact,
        allow_claim = decision.allow_claim,
        "disclosure decided"
    );

    Ok(decision)
}

/// The viewer's lost reports that match `found`, in id order.
///
/// Empty for anonymous viewers and for reports that are not of type found.
pub fn matching_lost_reports<'v, P>(
    viewer: &'v Viewer,
    found: &ItemReport,
    predicate: &P,
) -> Vec<&'v ItemReport>
where
    P: MatchPredicate + ?Sized,
{
    if viewer.is_anonymous() || !found.is_found() {
        return Vec::new();
    }
    viewer
        .lost_reports()
        .filter(|lost| predicate.matches(lost, found))
        .collect()
}

fn check_arguments(viewer: &Viewer, report: &ItemReport) -> Result<(), PolicyError> {
    if report.id.is_blank() {
        return Err(PolicyError::InvalidArgument(
            "report id must not be blank".to_string(),
        ));
    }
    if report.owner_id.is_blank() {
        return Err(PolicyError::InvalidArgument(format!(
            "report {} has a blank owner",
            report.id
        )));
    }
    if viewer.user_id().is_some_and(|u| u.is_blank()) {
        return Err(PolicyError::InvalidArgument(
            "viewer user id must not be blank".to_string(),
        ));
    }
    Ok(())
}
