use crate::store::StoreDocument;
use crate::{ItemRepository, RepoError};
use lostfound_types::{
    ItemReport, ItemStatus, ItemType, MatchRecord, NewItemReport, ReportId, UserId,
};
use std::sync::{Mutex, MutexGuard, PoisonError};
use time::OffsetDateTime;

/// Process-local repository. Every operation runs under one lock, which makes
/// `update_status` an atomic compare-and-set.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    doc: Mutex<StoreDocument>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> StoreDocument {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, StoreDocument> {
        // A panic mid-operation leaves the document untouched: every mutation
        // validates before writing.
        self.doc.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemRepository for MemoryRepository {
    fn create(
        &self,
        owner: &UserId,
        input: &NewItemReport,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        self.lock().create(ReportId::generate(), owner, input, now)
    }

    fn get_report(&self, id: &ReportId) -> Result<ItemReport, RepoError> {
        self.lock().get(id)
    }

    fn list_reports_by_owner(&self, owner: &UserId) -> Result<Vec<ItemReport>, RepoError> {
        Ok(self.lock().by_owner(owner))
    }

    fn list_active(&self, item_type: Option<ItemType>) -> Result<Vec<ItemReport>, RepoError> {
        Ok(self.lock().active(item_type))
    }

    fn update_status(
        &self,
        id: &ReportId,
        new_status: ItemStatus,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        self.lock().update_status(id, new_status, expected_prior, now)
    }

    fn record_match(&self, record: MatchRecord) -> Result<(), RepoError> {
        self.lock().record_match(record)
    }

    fn claim_with_match(
        &self,
        record: MatchRecord,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        self.lock().claim_with_match(record, expected_prior, now)
    }

    fn matches_for(&self, id: &ReportId) -> Result<Vec<MatchRecord>, RepoError> {
        Ok(self.lock().matches_for(id))
    }
}
