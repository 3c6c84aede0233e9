use lostfound_domain::PolicyError;
use lostfound_repo::RepoError;
use lostfound_types::ids;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("you must be signed in to {0}")]
    NotSignedIn(&'static str),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Policy(e) => e.code(),
            AppError::Repo(e) => e.code(),
            AppError::PermissionDenied(_) => ids::CODE_PERMISSION_DENIED,
            AppError::NotSignedIn(_) => ids::CODE_NOT_SIGNED_IN,
        }
    }

    /// The item changed under the caller; refreshing and retrying may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, AppError::Repo(e) if e.is_retryable())
    }
}
