//! Connection pool: one reusable handle per downstream address.
//!
//! A pool is owned by the composition root of a process and injected into
//! every use case and job, so the pool itself is the execution context of
//! its handles; handles must not be moved across runtimes. Within a pool,
//! concurrent first use of an address converges to a single handle.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::Client;
use url::Url;

use crate::error::ClientError;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// A live logical link to one downstream address.
///
/// Cloning is cheap and yields the same underlying connection; the actual
/// TCP/TLS establishment is lazy and happens on the first real call, so an
/// unreachable peer does not fail handle construction.
#[derive(Debug, Clone)]
pub struct ClientHandle(Arc<HandleInner>);

#[derive(Debug)]
struct HandleInner {
    http: Client,
    base_url: Url,
    addr: String,
}

impl ClientHandle {
    fn connect(addr: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(addr).map_err(|e| ClientError::InvalidAddress {
            addr: addr.to_string(),
            reason: e.to_string(),
        })?;
        let http = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::InvalidAddress {
                addr: addr.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self(Arc::new(HandleInner {
            http,
            base_url,
            addr: addr.to_string(),
        })))
    }

    pub fn addr(&self) -> &str {
        &self.0.addr
    }

    /// Whether two handles share the same underlying connection.
    pub fn same_connection(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    pub(crate) fn http(&self) -> &Client {
        &self.0.http
    }

    pub(crate) fn url(&self, path: &str) -> Result<Url, ClientError> {
        self.0
            .base_url
            .join(path)
            .map_err(|e| ClientError::InvalidAddress {
                addr: self.0.addr.clone(),
                reason: e.to_string(),
            })
    }
}

/// Caches one [`ClientHandle`] per address for the life of the process.
///
/// Lookups of an existing handle take only a read lock; a miss upgrades to
/// a write lock and re-checks before constructing, so racing first callers
/// cannot create duplicate handles. Handles are never explicitly closed;
/// they live until the owning process shuts down.
#[derive(Debug, Clone, Default)]
pub struct ConnectionPool {
    handles: Arc<RwLock<HashMap<String, ClientHandle>>>,
}

impl ConnectionPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the handle for `addr`, constructing it on first use.
    ///
    /// Fails only on local handle construction (malformed address); an
    /// unreachable peer surfaces from the first call made on the handle.
    pub fn get(&self, addr: &str) -> Result<ClientHandle, ClientError> {
        if let Some(handle) = self.handles.read().get(addr) {
            return Ok(handle.clone());
        }

        let mut handles = self.handles.write();
        // Another task may have created the handle between the locks.
        if let Some(handle) = handles.get(addr) {
            return Ok(handle.clone());
        }

        let handle = ClientHandle::connect(addr)?;
        tracing::debug!(addr, "connection handle created");
        handles.insert(addr.to_string(), handle.clone());
        Ok(handle)
    }

    /// Number of live handles, for diagnostics.
    pub fn len(&self) -> usize {
        self.handles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.read().is_empty()
    }
}
