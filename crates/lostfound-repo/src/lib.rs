//! Repository adapters: item storage and session state.
//!
//! The domain crate never touches storage; everything it evaluates is fetched
//! through [`ItemRepository`] and [`SessionProvider`] first.

#![forbid(unsafe_code)]

mod file;
mod memory;
mod session;
mod store;

use camino::Utf8PathBuf;
use lostfound_domain::model::Viewer;
use lostfound_domain::status::TransitionError;
use lostfound_domain::submission::ValidationError;
use lostfound_types::{
    ItemReport, ItemStatus, ItemType, MatchRecord, NewItemReport, ReportId, UserId, ids,
};
use time::OffsetDateTime;

pub use file::FileRepository;
pub use memory::MemoryRepository;
pub use session::{LocalSession, SessionCallback, SessionProvider, Subscription};
pub use store::StoreDocument;

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("report {0} not found")]
    NotFound(ReportId),

    #[error(transparent)]
    InvalidTransition(#[from] TransitionError),

    #[error(
        "report {id} was modified concurrently: expected status {}, found {}",
        .expected.as_str(),
        .actual.as_str()
    )]
    ConcurrentModification {
        id: ReportId,
        expected: ItemStatus,
        actual: ItemStatus,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("store io error at {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("store at {path} is corrupt: {reason}")]
    Corrupt { path: Utf8PathBuf, reason: String },
}

impl RepoError {
    pub fn code(&self) -> &'static str {
        match self {
            RepoError::NotFound(_) => ids::CODE_NOT_FOUND,
            RepoError::InvalidTransition(_) => ids::CODE_INVALID_TRANSITION,
            RepoError::ConcurrentModification { .. } => ids::CODE_CONCURRENT_MODIFICATION,
            RepoError::Validation(_) => ids::CODE_VALIDATION_FAILED,
            RepoError::Io { .. } => ids::CODE_STORE_IO,
            RepoError::Corrupt { .. } => ids::CODE_STORE_CORRUPT,
        }
    }

    /// The caller should refresh and retry rather than give up.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            RepoError::InvalidTransition(_) | RepoError::ConcurrentModification { .. }
        )
    }
}

/// Storage collaborator for item reports and match records.
///
/// Listing methods return reports newest first.
pub trait ItemRepository: Send + Sync {
    /// Validate and store a new report owned by `owner`, in status `Active`.
    fn create(
        &self,
        owner: &UserId,
        input: &NewItemReport,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError>;

    fn get_report(&self, id: &ReportId) -> Result<ItemReport, RepoError>;

    fn list_reports_by_owner(&self, owner: &UserId) -> Result<Vec<ItemReport>, RepoError>;

    /// Active reports, optionally restricted to one type.
    fn list_active(&self, item_type: Option<ItemType>) -> Result<Vec<ItemReport>, RepoError>;

    fn recent(&self, limit: usize) -> Result<Vec<ItemReport>, RepoError> {
        let mut reports = self.list_active(None)?;
        reports.truncate(limit);
        Ok(reports)
    }

    /// Compare-and-set status update.
    ///
    /// Fails with `InvalidTransition` when `expected_prior -> new_status` is not
    /// an edge of the state machine, and with `ConcurrentModification` when the
    /// stored status is no longer `expected_prior`. Nothing is written on failure.
    fn update_status(
        &self,
        id: &ReportId,
        new_status: ItemStatus,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError>;

    fn record_match(&self, record: MatchRecord) -> Result<(), RepoError>;

    /// Claim `record.found_id` and store `record` atomically.
    ///
    /// Same compare-and-set rules as `update_status` towards `Claimed`. Either
    /// both the status change and the record are stored, or neither is.
    fn claim_with_match(
        &self,
        record: MatchRecord,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError>;

    /// Match records where `id` is either the lost or the found side.
    fn matches_for(&self, id: &ReportId) -> Result<Vec<MatchRecord>, RepoError>;
}

/// Build the request-scoped viewer for whoever the session says is signed in.
pub fn viewer_for(
    session: &dyn SessionProvider,
    repo: &dyn ItemRepository,
) -> Result<Viewer, RepoError> {
    match session.current_user() {
        None => Ok(Viewer::anonymous()),
        Some(user) => {
            let reports = repo.list_reports_by_owner(&user)?;
            Ok(Viewer::signed_in(user, reports))
        }
    }
}
