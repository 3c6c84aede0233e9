use crate::store::StoreDocument;
use crate::{ItemRepository, RepoError};
use camino::{Utf8Path, Utf8PathBuf};
use lostfound_types::{
    ItemReport, ItemStatus, ItemType, MatchRecord, NewItemReport, ReportId, UserId,
};
use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::sync::{Mutex, PoisonError};
use time::OffsetDateTime;

/// Repository persisted as one JSON document.
///
/// Mutations hold an exclusive lock on a `<store>.lock` sidecar, re-read the
/// document, apply the change and replace the file through a rename. Readers
/// never lock; they always see either the old or the new document.
#[derive(Debug)]
pub struct FileRepository {
    path: Utf8PathBuf,
    local: Mutex<()>,
}

fn io_error(path: &Utf8Path) -> impl FnOnce(std::io::Error) -> RepoError + '_ {
    move |source| RepoError::Io {
        path: path.to_owned(),
        source,
    }
}

fn sibling(path: &Utf8Path, suffix: &str) -> Utf8PathBuf {
    let mut name = path.file_name().unwrap_or("store.json").to_string();
    name.push_str(suffix);
    path.with_file_name(name)
}

impl FileRepository {
    /// The file need not exist yet; a missing store reads as empty.
    pub fn open(path: impl Into<Utf8PathBuf>) -> Self {
        Self {
            path: path.into(),
            local: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    pub fn load(&self) -> Result<StoreDocument, RepoError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(StoreDocument::default()),
            Err(e) => return Err(io_error(&self.path)(e)),
        };
        let doc: StoreDocument =
            serde_json::from_str(&text).map_err(|e| RepoError::Corrupt {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        doc.check().map_err(|reason| RepoError::Corrupt {
            path: self.path.clone(),
            reason,
        })?;
        Ok(doc)
    }

    fn store(&self, doc: &StoreDocument) -> Result<(), RepoError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let mut text = serde_json::to_string_pretty(doc).map_err(|e| RepoError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        text.push('\n');

        // The rename only replaces the store once the new bytes are on disk.
        let tmp = sibling(&self.path, ".tmp");
        let mut file = File::create(&tmp).map_err(io_error(&tmp))?;
        file.write_all(text.as_bytes()).map_err(io_error(&tmp))?;
        file.sync_all().map_err(io_error(&tmp))?;
        drop(file);
        std::fs::rename(&tmp, &self.path).map_err(io_error(&self.path))
    }

    fn lock_file(&self) -> Result<File, RepoError> {
        let lock_path = sibling(&self.path, ".lock");
        if let Some(parent) = lock_path.parent()
            && !parent.as_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)
            .map_err(io_error(&lock_path))?;
        file.lock().map_err(io_error(&lock_path))?;
        Ok(file)
    }

    /// Run `apply` against the freshest document and persist it if it succeeds.
    fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut StoreDocument) -> Result<T, RepoError>,
    ) -> Result<T, RepoError> {
        let _local = self.local.lock().unwrap_or_else(PoisonError::into_inner);
        // Released when dropped.
        let _lock = self.lock_file()?;

        let mut doc = self.load()?;
        let out = apply(&mut doc)?;
        self.store(&doc)?;
        Ok(out)
    }
}

impl ItemRepository for FileRepository {
    fn create(
        &self,
        owner: &UserId,
        input: &NewItemReport,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        self.mutate(|doc| doc.create(ReportId::generate(), owner, input, now))
    }

    fn get_report(&self, id: &ReportId) -> Result<ItemReport, RepoError> {
        self.load()?.get(id)
    }

    fn list_reports_by_owner(&self, owner: &UserId) -> Result<Vec<ItemReport>, RepoError> {
        Ok(self.load()?.by_owner(owner))
    }

    fn list_active(&self, item_type: Option<ItemType>) -> Result<Vec<ItemReport>, RepoError> {
        Ok(self.load()?.active(item_type))
    }

    fn update_status(
        &self,
        id: &ReportId,
        new_status: ItemStatus,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        self.mutate(|doc| doc.update_status(id, new_status, expected_prior, now))
    }

    fn record_match(&self, record: MatchRecord) -> Result<(), RepoError> {
        self.mutate(|doc| doc.record_match(record))
    }

    fn claim_with_match(
        &self,
        record: MatchRecord,
        expected_prior: ItemStatus,
        now: OffsetDateTime,
    ) -> Result<ItemReport, RepoError> {
        self.mutate(|doc| doc.claim_with_match(record, expected_prior, now))
    }

    fn matches_for(&self, id: &ReportId) -> Result<Vec<MatchRecord>, RepoError> {
        Ok(self.load()?.matches_for(id))
    }
}
