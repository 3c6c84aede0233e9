//! The store document shared by the in-memory and file-backed repositories.
//!
//! Both adapters hold one `StoreDocument` and apply every mutation through the
//! methods here, so compare-and-set semantics are identical across them.

use crate::RepoError;
use lostfound_domain::search::sort_newest_first;
use lostfound_domain::status::transition;
use lostfound_domain::submission::validate;
use lostfound_types::{
    ItemReport, ItemStatus, ItemType, MatchRecord, NewItemReport, ReportId, SCHEMA_STORE_V1, UserId,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StoreDocument {
    pub schema: String,
    #[serde(default)]
    pub items: BTreeMap<ReportId, ItemReport>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

impl Default for StoreDocument {
    fn default() -> Self {
        Self {
            schema: SCHEMA_STORE_V1.to_string(),
            items: BTreeMap::new(),
            matches: Vec::new(),
        }
    }
}

impl StoreDocument {
    /// Check the schema tag and that every entry is keyed by its own id.
    pub fn check(&self) -> Result<(), String> {
        if self.schema != SCHEMA_STORE_V1 {
            return Err(format!(
                "unsupported store schema: {} (expected {SCHEMA_STORE_V1})",
                self.schema
            ));
        }
        if let Some((key, report)) = self.items.iter().find(|(k, r)| **k != r.id) {
            return Err(format!("entry {key} holds report {}", report.id));
        }
        Ok(())
    }

    pub(crate) fn create(
        &mut self,
        id: ReportId,
        owner: &UserId,
        input: &NewItemReport,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        let report = validate(input)?.into_report(id, owner.clone(), now);
        self.items.insert(report.id.clone(), report.clone());
        tracing::info!(
            id = %report.id,
            item_type = report.item_type.as_str(),
            owner = %report.owner_id,
            "report created"
        );
        Ok(report)
    }

    pub(crate) fn get(&self, id: &ReportId) -> Result<ItemReport, RepoError> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.clone()))
    }

    pub(crate) fn by_owner(&self, owner: &UserId) -> Vec<ItemReport> {
        self.collect(|r| r.is_owned_by(owner))
    }

    pub(crate) fn active(&self, item_type: Option<ItemType>) -> Vec<ItemReport> {
        self.collect(|r| {
            r.status == ItemStatus::Active && item_type.is_none_or(|t| r.item_type == t)
        })
    }

    fn collect(&self, keep: impl Fn(&ItemReport) -> bool) -> Vec<ItemReport> {
        let mut out: Vec<ItemReport> = self.items.values().filter(|r| keep(r)).cloned().collect();
        sort_newest_first(&mut out);
        out
    }

    pub(crate) fn update_status(
        &mut self,
        id: &ReportId,
        new_status: ItemStatus,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        transition(expected_prior, new_status)?;

        let report = self
            .items
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(id.clone()))?;
        if report.status != expected_prior {
            tracing::warn!(
                %id,
                expected = expected_prior.as_str(),
                actual = report.status.as_str(),
                "status update lost a race"
            );
            return Err(RepoError::ConcurrentModification {
                id: id.clone(),
                expected: expected_prior,
                actual: report.status,
            });
        }

        report.status = new_status;
        report.updated_at = Some(now);
        tracing::info!(
            %id,
            from = expected_prior.as_str(),
            to = new_status.as_str(),
            "status changed"
        );
        Ok(report.clone())
    }

    pub(crate) fn record_match(&mut self, record: MatchRecord) -> Result<(), RepoError> {
        for side in [&record.lost_id, &record.found_id] {
            if !self.items.contains_key(side) {
                return Err(RepoError::NotFound(side.clone()));
            }
        }
        tracing::info!(
            lost = %record.lost_id,
            found = %record.found_id,
            by = %record.matched_by,
            "match recorded"
        );
        self.matches.push(record);
        Ok(())
    }

    /// Move `record.found_id` to `Claimed` and append `record` as one change.
    ///
    /// Every check runs before anything is modified, so a failure leaves the
    /// document as it was.
    pub(crate) fn claim_with_match(
        &mut self,
        record: MatchRecord,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        if !self.items.contains_key(&record.lost_id) {
            return Err(RepoError::NotFound(record.lost_id.clone()));
        }
        let claimed =
            self.update_status(&record.found_id, ItemStatus::Claimed, expected_prior, now)?;
        self.record_match(record)?;
        Ok(claimed)
    }

    pub(crate) fn matches_for(&self, id: &ReportId) -> Vec<MatchRecord> {
        self.matches
            .iter()
            .filter(|m| m.involves(id))
            .cloned()
            .collect()
    }
}
