use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::UserId;
use crate::domain::user::models::UserPreview;
use crate::domain::user::models::UserRecord;
use crate::user::errors::DirectoryError;
use crate::user::ports::UserDirectory;

/// In-memory implementation of UserDirectory.
///
/// The backing vector is the authoritative record set for the process
/// lifetime; nothing is persisted. Vector order is insertion order, which
/// is the canonical order paging slices are cut from.
pub struct InMemoryUserDirectory {
    records: RwLock<Vec<UserRecord>>,
}

impl InMemoryUserDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn insert(&self, record: UserRecord) -> Result<UserRecord, DirectoryError> {
        // One write guard spans the uniqueness check and the append, so two
        // concurrent inserts of the same email cannot both pass the check.
        let mut records = self.records.write().await;

        if records
            .iter()
            .any(|r| r.email.as_str() == record.email.as_str())
        {
            return Err(DirectoryError::DuplicateEmail(
                record.email.as_str().to_string(),
            ));
        }

        records.push(record.clone());

        Ok(record)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserRecord>, DirectoryError> {
        let records = self.records.read().await;

        Ok(records.iter().find(|r| r.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, DirectoryError> {
        let records = self.records.read().await;

        Ok(records.iter().find(|r| r.email.as_str() == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UserPreview>, DirectoryError> {
        let records = self.records.read().await;

        let mut previews: Vec<UserPreview> = records.iter().map(UserPreview::from).collect();
        previews.sort_by(|a, b| a.email.as_str().cmp(b.email.as_str()));

        Ok(previews)
    }

    async fn slice(&self, offset: usize, count: usize) -> Result<Vec<UserPreview>, DirectoryError> {
        let records = self.records.read().await;

        Ok(records
            .iter()
            .skip(offset)
            .take(count)
            .map(UserPreview::from)
            .collect())
    }

    async fn count(&self) -> Result<usize, DirectoryError> {
        let records = self.records.read().await;

        Ok(records.len())
    }
}
