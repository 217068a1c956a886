//! Single-hop city operations forwarded to the Users service.

use wearcast_clients::{ClientError, ConnectionPool, UsersClient};
use wearcast_core::{City, DomainError};

#[derive(Debug, Clone)]
pub struct ListUserCities {
    pool: ConnectionPool,
    users_addr: String,
}

impl ListUserCities {
    pub fn new(pool: ConnectionPool, users_addr: impl Into<String>) -> Self {
        Self {
            pool,
            users_addr: users_addr.into(),
        }
    }

    pub async fn run(&self, user_id: i64) -> Result<Vec<City>, ClientError> {
        tracing::info!(user_id, "ListUserCities");
        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        users.list_cities(user_id).await
    }
}

#[derive(Debug, Clone)]
pub struct AddCity {
    pool: ConnectionPool,
    users_addr: String,
}

impl AddCity {
    pub fn new(pool: ConnectionPool, users_addr: impl Into<String>) -> Self {
        Self {
            pool,
            users_addr: users_addr.into(),
        }
    }

    pub async fn run(
        &self,
        user_id: i64,
        name: &str,
        lat: f64,
        lon: f64,
    ) -> Result<City, ClientError> {
        tracing::info!(user_id, name, lat, lon, "AddCity");
        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        users.add_city(user_id, name, lat, lon).await
    }
}

/// City lookup where absence is the caller's error, not a branch: the
/// `Option` from the client becomes `CITY_NOT_FOUND` here.
#[derive(Debug, Clone)]
pub struct GetCity {
    pool: ConnectionPool,
    users_addr: String,
}

impl GetCity {
    pub fn new(pool: ConnectionPool, users_addr: impl Into<String>) -> Self {
        Self {
            pool,
            users_addr: users_addr.into(),
        }
    }

    pub async fn run(&self, user_id: i64, city_name: &str) -> Result<City, ClientError> {
        tracing::info!(user_id, city_name, "GetCity");
        let users = UsersClient::new(self.pool.get(&self.users_addr)?);
        users
            .get_city(user_id, city_name)
            .await?
            .ok_or_else(|| DomainError::city_not_found().into())
    }
}
