use axum::{extract::State, http::HeaderMap, response::IntoResponse, response::Response, Json};
use serde::Serialize;

use crate::error::Result;
use crate::models::theme_counts;
use crate::routes::{run_in_session, with_session_cookie};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ThemeCount {
    pub theme: &'static str,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total: usize,
    pub themes: Vec<ThemeCount>,
}

/// Sign-up counts per character theme for the caller's session
///
/// GET /api/stats
pub async fn signup_stats(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let (id, created, stats) = run_in_session(&state, &headers, |_, session| {
        Ok(StatsResponse {
            total: session.signups.len(),
            themes: theme_counts(&session.signups)
                .into_iter()
                .map(|(theme, count)| ThemeCount {
                    theme: theme.label(),
                    count,
                })
                .collect(),
        })
    })
    .await?;

    with_session_cookie(Json(stats).into_response(), id, created)
}
