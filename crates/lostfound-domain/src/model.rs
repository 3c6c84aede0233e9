use lostfound_types::{ItemReport, ReportId, UserId};
use std::collections::{BTreeMap, BTreeSet};

/// The person looking at a report, scoped to one request.
///
/// Only lost reports owned by the viewer are kept; anything else handed to
/// [`Viewer::signed_in`] is dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Viewer {
    user_id: Option<UserId>,
    lost_reports: BTreeMap<ReportId, ItemReport>,
}

impl Viewer {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user_id: UserId, reports: impl IntoIterator<Item = ItemReport>) -> Self {
        let lost_reports = reports
            .into_iter()
            .filter(|r| r.is_lost() && r.is_owned_by(&user_id))
            .map(|r| (r.id.clone(), r))
            .collect();
        Self {
            user_id: Some(user_id),
            lost_reports,
        }
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.user_id.is_none()
    }

    pub fn owned_lost_report_ids(&self) -> BTreeSet<ReportId> {
        self.lost_reports.keys().cloned().collect()
    }

    /// Owned lost reports in id order.
    pub fn lost_reports(&self) -> impl Iterator<Item = &ItemReport> {
        self.lost_reports.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{found, lost};

    #[test]
    fn signed_in_keeps_only_owned_lost_reports() {
        let viewer = Viewer::signed_in(
            UserId::new("u1"),
            vec![
                lost("l1", "u1", "Blue Backpack", "Bags"),
                lost("l2", "u2", "Red Umbrella", "Umbrellas"),
                found("f1", "u1", "Keys", "Keys"),
            ],
        );

        let ids: Vec<_> = viewer
            .owned_lost_report_ids()
            .into_iter()
            .map(|id| id.as_str().to_string())
            .collect();
        assert_eq!(ids, vec!["l1".to_string()]);
    }

    #[test]
    fn anonymous_viewer_owns_nothing() {
        let viewer = Viewer::anonymous();
        assert!(viewer.is_anonymous());
        assert!(viewer.owned_lost_report_ids().is_empty());
        assert_eq!(viewer.lost_reports().count(), 0);
    }
}
