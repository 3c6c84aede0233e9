//! Default match predicate and match-candidate derivation.

use crate::engine::{MatchPredicate, matching_lost_reports};
use crate::fingerprint::fingerprint_for_match;
use crate::model::Viewer;
use crate::policy::MatchingPolicy;
use crate::submission::strip_location_prefix;
use lostfound_types::{ItemReport, ReportId};
use serde::Serialize;
use std::collections::BTreeSet;

/// Matches on normalized category, title word overlap, optional location
/// overlap and date order.
#[derive(Clone, Debug, Default)]
pub struct AttributeMatcher {
    policy: MatchingPolicy,
}

impl AttributeMatcher {
    pub fn new(policy: MatchingPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &MatchingPolicy {
        &self.policy
    }
}

impl MatchPredicate for AttributeMatcher {
    fn matches(&self, lost: &ItemReport, found: &ItemReport) -> bool {
        if !lost.is_lost() || !found.is_found() {
            return false;
        }
        // Nobody claims their own find.
        if lost.owner_id == found.owner_id {
            return false;
        }
        if self.policy.require_same_category
            && normalize_phrase(&lost.category) != normalize_phrase(&found.category)
        {
            return false;
        }
        if self.policy.respect_dates && found.date < lost.date {
            return false;
        }
        if self.policy.require_location_overlap {
            let a = tokens(strip_location_prefix(&lost.location));
            let b = tokens(strip_location_prefix(&found.location));
            if a.is_disjoint(&b) {
                return false;
            }
        }
        title_similarity(&lost.title, &found.title) >= self.policy.min_title_similarity
    }
}

/// Lowercased alphanumeric words.
pub fn tokens(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(|w| w.to_lowercase())
        .collect()
}

/// Lowercase with runs of whitespace collapsed to one space.
pub fn normalize_phrase(text: &str) -> String {
    text.split_whitespace()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Jaccard index of the two titles' word sets. Two empty titles score 0.
pub fn title_similarity(a: &str, b: &str) -> f64 {
    let a = tokens(a);
    let b = tokens(b);
    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let shared = a.intersection(&b).count();
    shared as f64 / union as f64
}

/// A lost/found pair that the predicate accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    pub lost_id: ReportId,
    pub found_id: ReportId,
    pub fingerprint: String,
}

impl MatchCandidate {
    pub fn new(lost_id: ReportId, found_id: ReportId) -> Self {
        let fingerprint = fingerprint_for_match(lost_id.as_str(), found_id.as_str());
        Self {
            lost_id,
            found_id,
            fingerprint,
        }
    }
}

/// Every (owned lost, found) pair the predicate accepts, ordered by
/// `(found_id, lost_id)`.
pub fn match_candidates<'a, P>(
    viewer: &Viewer,
    found_reports: impl IntoIterator<Item = &'a ItemReport>,
    predicate: &P,
) -> Vec<MatchCandidate>
where
    P: MatchPredicate + ?Sized,
{
    let mut out: Vec<MatchCandidate> = found_reports
        .into_iter()
        .flat_map(|found| {
            matching_lost_reports(viewer, found, predicate)
                .into_iter()
                .map(|lost| MatchCandidate::new(lost.id.clone(), found.id.clone()))
        })
        .collect();
    out.sort_by(|a, b| a.found_id.cmp(&b.found_id).then(a.lost_id.cmp(&b.lost_id)));
    out.dedup_by(|a, b| a.fingerprint == b.fingerprint);
    out
}
