use crate::config::store_conf::StoreConfig;
use crate::model::user::{RawUser, User};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// The record store: translates between the on-disk sequence of loosely-typed
/// objects and the validated in-memory list. Every read returns a freshly
/// loaded copy; every save overwrites the whole file.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn load(&self) -> RepositoryResult<Vec<User>>;
    async fn save(&self, users: &[User]) -> RepositoryResult<()>;
}

pub struct FileUserRepository {
    path: PathBuf,
}

impl FileUserRepository {
    pub fn new(config: &StoreConfig) -> Self {
        FileUserRepository {
            path: config.data_file.clone(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        FileUserRepository {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl UserRepository for FileUserRepository {
    async fn load(&self) -> RepositoryResult<Vec<User>> {
        let data = tokio::fs::read(&self.path).await.map_err(|e| {
            error!("Error reading {}: {}", self.path.display(), e);
            RepositoryError::read(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        let raw: Vec<RawUser> = serde_json::from_slice(&data)?;
        let users: Vec<User> = raw.into_iter().map(User::from_raw).collect();
        debug!("Loaded {} users from {}", users.len(), self.path.display());
        Ok(users)
    }

    async fn save(&self, users: &[User]) -> RepositoryResult<()> {
        let data = serde_json::to_vec(users)?;
        tokio::fs::write(&self.path, data).await.map_err(|e| {
            error!("Error writing {}: {}", self.path.display(), e);
            RepositoryError::write(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!("Saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }
}
