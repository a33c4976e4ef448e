use crate::model::user::User;
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument};

/// Projection returned by the usernames listing.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UsernameEntry {
    pub id: i64,
    pub username: String,
}

/// Projection returned by the lookup-by-username route.
#[derive(Debug, Clone, serde::Serialize)]
pub struct UserContact {
    pub id: i64,
    pub email: String,
}

/// Candidate fields for an add or update. All optional; the service applies
/// the defaulting and merge rules.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub id: Option<Value>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
}

/// Directory operations. Every operation reloads the store before acting and
/// serves from (or mutates and persists) that freshly loaded copy. There is
/// no locking around the read-modify-write cycle: two concurrent mutations
/// can both load the same state and the later save wins.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
    async fn list_usernames(&self) -> Result<Vec<UsernameEntry>, ServiceError>;
    async fn find_by_username(&self, name: &str) -> Result<UserContact, ServiceError>;
    async fn find_by_id(&self, id: i64) -> Result<User, ServiceError>;
    async fn search_by_email_domain(&self, domain: &str) -> Result<Vec<User>, ServiceError>;
    async fn add_user(&self, draft: UserDraft) -> Result<User, ServiceError>;
    async fn update_user(&self, id: i64, draft: UserDraft) -> Result<User, ServiceError>;
    async fn delete_user(&self, id: i64) -> Result<User, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.user_repo.load().await?;
        Ok(users)
    }

    async fn list_usernames(&self) -> Result<Vec<UsernameEntry>, ServiceError> {
        let users = self.user_repo.load().await?;
        Ok(users
            .into_iter()
            .map(|user| UsernameEntry {
                id: user.id,
                username: user.username,
            })
            .collect())
    }

    async fn find_by_username(&self, name: &str) -> Result<UserContact, ServiceError> {
        let users = self.user_repo.load().await?;
        // Exact, case-sensitive match
        users
            .into_iter()
            .find(|user| user.username == name)
            .map(|user| UserContact {
                id: user.id,
                email: user.email,
            })
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
    }

    async fn find_by_id(&self, id: i64) -> Result<User, ServiceError> {
        let users = self.user_repo.load().await?;
        users
            .into_iter()
            .find(|user| user.id == id)
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
    }

    async fn search_by_email_domain(&self, domain: &str) -> Result<Vec<User>, ServiceError> {
        let users = self.user_repo.load().await?;
        let suffix = format!("@{}", domain.to_lowercase());
        Ok(users
            .into_iter()
            .filter(|user| user.email.to_lowercase().ends_with(&suffix))
            .collect())
    }

    #[instrument(skip(self, draft), fields(username = ?draft.username))]
    async fn add_user(&self, draft: UserDraft) -> Result<User, ServiceError> {
        let username = draft.username.unwrap_or_default();
        if username.is_empty() {
            return Err(ServiceError::InvalidInput("Username is required".to_string()));
        }
        let mut users = self.user_repo.load().await?;
        if users.iter().any(|user| user.username == username) {
            return Err(ServiceError::Conflict("Username already exists".to_string()));
        }
        let user = User {
            id: coerce_draft_id(draft.id.as_ref()),
            first_name: draft.first_name.unwrap_or_default(),
            last_name: draft.last_name.unwrap_or_default(),
            username,
            email: draft.email.unwrap_or_default(),
        };
        users.push(user.clone());
        self.user_repo.save(&users).await?;
        info!("User saved");
        Ok(user)
    }

    #[instrument(skip(self, draft))]
    async fn update_user(&self, id: i64, draft: UserDraft) -> Result<User, ServiceError> {
        let mut users = self.user_repo.load().await?;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;

        // Duplicate check only when a non-empty username actually changes
        if let Some(username) = draft.username.as_deref().filter(|name| !name.is_empty()) {
            if username != users[index].username
                && users.iter().any(|user| user.username == username)
            {
                return Err(ServiceError::Conflict("Username already exists".to_string()));
            }
        }

        let current = &users[index];
        // Falsy-default merge: empty or missing fields keep the old value,
        // so a field can never be cleared through an update.
        let updated = User {
            id: current.id,
            first_name: merge_field(draft.first_name, &current.first_name),
            last_name: merge_field(draft.last_name, &current.last_name),
            username: merge_field(draft.username, &current.username),
            email: merge_field(draft.email, &current.email),
        };
        users[index] = updated.clone();
        self.user_repo.save(&users).await?;
        info!("User updated");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: i64) -> Result<User, ServiceError> {
        let mut users = self.user_repo.load().await?;
        let index = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))?;
        let deleted = users.remove(index);
        self.user_repo.save(&users).await?;
        info!("User deleted");
        Ok(deleted)
    }
}

/// Candidate ids: strings are parsed, numbers are taken as-is, anything else
/// gets a random id in [0, 100000).
fn coerce_draft_id(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::String(s)) => s.trim().parse().unwrap_or_else(|_| random_id()),
        Some(Value::Number(n)) => n.as_i64().unwrap_or_else(random_id),
        _ => random_id(),
    }
}

fn random_id() -> i64 {
    rand::thread_rng().gen_range(0..100_000)
}

fn merge_field(candidate: Option<String>, current: &str) -> String {
    match candidate {
        Some(value) if !value.is_empty() => value,
        _ => current.to_string(),
    }
}
