pub mod health;
pub mod pages;
pub mod signup;
pub mod stats;
pub mod teams;
pub mod validation;

pub use health::health_check;
pub use pages::{back_home, navigate_to, show_page};
pub use signup::submit_signup;
pub use stats::signup_stats;
pub use teams::register_team;

use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::Response,
};

use crate::error::{AppError, Result};
use crate::session::{session_cookie, session_id_from_headers, Session, SessionId};
use crate::store::DatasetStore;
use crate::AppState;

/// Run `action` against the caller's session on the blocking pool
///
/// Starts a new session (loading both datasets) when the request carries no
/// known session cookie. Returns the session id, whether it was created, and
/// the action's output.
pub(crate) async fn run_in_session<T, F>(
    state: &AppState,
    headers: &HeaderMap,
    action: F,
) -> Result<(SessionId, bool, T)>
where
    F: FnOnce(&DatasetStore, &mut Session) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let requested = session_id_from_headers(headers);
    let store = state.store.clone();
    let sessions = state.sessions.clone();

    tokio::task::spawn_blocking(move || -> Result<(SessionId, bool, T)> {
        let (id, session, created) = sessions.resolve(requested, &store)?;
        let mut session = session.lock().map_err(|_| AppError::LockPoisoned)?;
        let output = action(&store, &mut session)?;
        Ok((id, created, output))
    })
    .await?
}

/// Attach the session cookie to a response for newly created sessions
pub(crate) fn with_session_cookie(
    mut response: Response,
    id: SessionId,
    created: bool,
) -> Result<Response> {
    if created {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, HeaderValue::from_str(&session_cookie(id))?);
    }
    Ok(response)
}
