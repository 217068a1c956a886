//! Single-hop user operations forwarded to the Users service.

use wearcast_clients::{ClientError, ConnectionPool, UsersClient};
use wearcast_core::User;

#[derive(Debug, Clone)]
pub struct GetUserById {
    pool: ConnectionPool,
    users_addr: String,
}

impl GetUserById {
    pub fn new(pool: ConnectionPool, users_addr: impl Into<String>) -> Self {
        Self {
            pool,
            users_addr: users_addr.into(),
        }
    }

    pub async fn run(&self, user_id: i64) -> Result<User, ClientError> {
        tracing::info!(user_id, "GetUserById");
        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        users.get_user_by_id(user_id).await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUser {
    pool: ConnectionPool,
    users_addr: String,
}

impl CreateUser {
    pub fn new(pool: ConnectionPool, users_addr: impl Into<String>) -> Self {
        Self {
            pool,
            users_addr: users_addr.into(),
        }
    }

    /// The password hash is produced by the authentication collaborator;
    /// it only passes through here.
    pub async fn run(&self, username: &str, password_hash: &str) -> Result<User, ClientError> {
        tracing::info!(username, "CreateUser");
        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        users.create_user(username, password_hash).await
    }
}

#[derive(Debug, Clone)]
pub struct GetOrCreateUserByTelegramId {
    pool: ConnectionPool,
    users_addr: String,
}

impl GetOrCreateUserByTelegramId {
    pub fn new(pool: ConnectionPool, users_addr: impl Into<String>) -> Self {
        Self {
            pool,
            users_addr: users_addr.into(),
        }
    }

    pub async fn run(
        &self,
        telegram_id: &str,
        username: &str,
        locale: &str,
    ) -> Result<User, ClientError> {
        tracing::info!(telegram_id, locale, "GetOrCreateUserByTelegramId");
        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        users
            .get_or_create_user_by_telegram_id(telegram_id, username, locale)
            .await
    }
}
