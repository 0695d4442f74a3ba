use crate::{ConnectionLimits, Result as WsErrorResult, SessionHandle, Transport, WsError};

use std::collections::HashMap;
use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{info, warn};
use tokio::sync::Mutex;

/// Prefix of generated names for sessions without a resolved identity.
pub const ANONYMOUS_NAME_PREFIX: &str = "Client ";

/// A live session as held by the registry.
#[derive(Clone)]
pub struct SessionEntry {
    pub handle: SessionHandle,
    pub display_name: String,
    pub transport: Arc<dyn Transport>,
    pub connected_at: DateTime<Utc>,
}

impl fmt::Debug for SessionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionEntry")
            .field("handle", &self.handle)
            .field("display_name", &self.display_name)
            .field("connected_at", &self.connected_at)
            .finish_non_exhaustive()
    }
}

/// Result of a successful admission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admission {
    pub handle: SessionHandle,
    pub display_name: String,
}

/// Set of live sessions for this process.
///
/// Every mutation and every snapshot goes through one lock, which is held
/// only for the map operation itself. Delivery happens on snapshot copies.
pub struct ConnectionRegistry {
    inner: Arc<Mutex<RegistryInner>>,
    limits: ConnectionLimits,
}

struct RegistryInner {
    sessions: HashMap<SessionHandle, SessionEntry>,
    next_handle: u64,
    /// Last number handed out to an anonymous session
    anonymous_issued: u64,
}

impl ConnectionRegistry {
    pub fn new(limits: ConnectionLimits) -> Self {
        Self {
            inner: Arc::new(Mutex::new(RegistryInner {
                sessions: HashMap::new(),
                next_handle: 1,
                anonymous_issued: 0,
            })),
            limits,
        }
    }

    /// Admit a session under `identity_name`, or under the next `Client N`
    /// name when no identity was resolved.
    pub async fn admit(
        &self,
        identity_name: Option<String>,
        transport: Arc<dyn Transport>,
    ) -> WsErrorResult<Admission> {
        let mut inner = self.inner.lock().await;

        if inner.sessions.len() >= self.limits.max_total {
            warn!(
                "Total connection limit reached: {}/{}",
                inner.sessions.len(),
                self.limits.max_total
            );
            return Err(WsError::ConnectionLimitExceeded {
                current: inner.sessions.len(),
                max: self.limits.max_total,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let handle = SessionHandle(inner.next_handle);
        inner.next_handle += 1;

        let display_name = match identity_name {
            Some(name) => name,
            None => {
                inner.anonymous_issued += 1;
                format!("{ANONYMOUS_NAME_PREFIX}{}", inner.anonymous_issued)
            }
        };

        inner.sessions.insert(
            handle,
            SessionEntry {
                handle,
                display_name: display_name.clone(),
                transport,
                connected_at: Utc::now(),
            },
        );
        info!(
            "Admitted {handle} as '{display_name}' ({} total)",
            inner.sessions.len()
        );

        Ok(Admission {
            handle,
            display_name,
        })
    }

    /// Absent handles are ignored.
    pub async fn remove(&self, handle: SessionHandle) -> Option<SessionEntry> {
        let mut inner = self.inner.lock().await;

        let removed = inner.sessions.remove(&handle);
        if removed.is_some() {
            info!(
                "Removed {handle} ({} total remaining)",
                inner.sessions.len()
            );
        }
        removed
    }

    /// Copy of the current sessions, in no particular order.
    pub async fn snapshot(&self) -> Vec<SessionEntry> {
        let inner = self.inner.lock().await;
        inner.sessions.values().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.sessions.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for ConnectionRegistry {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            limits: self.limits.clone(),
        }
    }
}
