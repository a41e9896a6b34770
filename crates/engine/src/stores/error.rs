//! Store operation errors.

use warband_domain::DomainError;

use crate::infrastructure::ports::RepoError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Repo(#[from] RepoError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    /// Whether the request was rejected by a game rule rather than storage.
    pub fn is_rule_violation(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}
