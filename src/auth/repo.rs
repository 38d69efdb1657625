use crate::auth::repo_types::User;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Storage seam for user records.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by exact email.
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>>;

    /// Insert `user` unless its email is taken. Returns `false` on conflict.
    /// The check and the insert happen under one lock.
    async fn insert_if_absent(&self, user: User) -> anyhow::Result<bool>;

    async fn count(&self) -> anyhow::Result<usize>;
}

/// Append-only list scanned linearly; gone when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn insert_if_absent(&self, user: User) -> anyhow::Result<bool> {
        let mut users = self.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user);
        Ok(true)
    }

    async fn count(&self) -> anyhow::Result<usize> {
        Ok(self.users.read().await.len())
    }
}
