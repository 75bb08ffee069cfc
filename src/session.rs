use axum::http::{header, HeaderMap};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::constants::{DEFAULT_MAX_SESSIONS, SESSION_COOKIE};
use crate::error::{AppError, Result};
use crate::models::{Page, SignupRecord, TeamRecord};
use crate::store::{DatasetStore, Signups, Teams};

pub type SessionId = Uuid;

/// Per-browser state: selected page plus in-memory copies of both datasets
#[derive(Debug, Clone)]
pub struct Session {
    pub page: Page,
    pub signups: Vec<SignupRecord>,
    pub teams: Vec<TeamRecord>,
}

impl Session {
    /// Start a session on the Home page with freshly loaded datasets
    pub fn start(store: &DatasetStore) -> Result<Self> {
        Ok(Self {
            page: Page::Home,
            signups: store.load::<Signups>()?,
            teams: store.load::<Teams>()?,
        })
    }
}

pub type SharedSession = Arc<Mutex<Session>>;

struct SessionEntry {
    session: SharedSession,
    last_seen: u64,
}

#[derive(Default)]
struct Sessions {
    entries: HashMap<SessionId, SessionEntry>,
    /// Monotonic access counter used for recency
    clock: u64,
}

impl Sessions {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    /// Drop least recently seen sessions until there is room for one more
    fn make_room(&mut self, capacity: usize) {
        while self.entries.len() >= capacity {
            let oldest = self
                .entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    self.entries.remove(&id);
                    tracing::debug!("Evicted session {}", id);
                }
                None => break,
            }
        }
    }
}

/// In-memory registry of live sessions
///
/// Holds at most `capacity` sessions; starting one more evicts the least
/// recently seen.
#[derive(Clone)]
pub struct SessionRegistry {
    sessions: Arc<Mutex<Sessions>>,
    capacity: usize,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Sessions::default())),
            capacity: capacity.max(1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Find the requested session or start a new one
    ///
    /// Returns the session id, the session and whether it was just created.
    /// Blocks on file I/O when a session is created.
    pub fn resolve(
        &self,
        requested: Option<SessionId>,
        store: &DatasetStore,
    ) -> Result<(SessionId, SharedSession, bool)> {
        if let Some(id) = requested {
            let mut sessions = self.sessions.lock().map_err(|_| AppError::LockPoisoned)?;
            let now = sessions.tick();
            if let Some(entry) = sessions.entries.get_mut(&id) {
                entry.last_seen = now;
                return Ok((id, entry.session.clone(), false));
            }
            tracing::debug!("Unknown session {}, starting a new one", id);
        }

        let session = Arc::new(Mutex::new(Session::start(store)?));
        let id = Uuid::new_v4();
        {
            let mut sessions = self.sessions.lock().map_err(|_| AppError::LockPoisoned)?;
            sessions.make_room(self.capacity);
            let last_seen = sessions.tick();
            sessions.entries.insert(
                id,
                SessionEntry {
                    session: session.clone(),
                    last_seen,
                },
            );
        }

        tracing::info!("Started session {}", id);
        Ok((id, session, true))
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read the session id from the request's cookies
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// `Set-Cookie` value for a session
pub fn session_cookie(id: SessionId) -> String {
    format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax")
}
