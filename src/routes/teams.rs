use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::constants::{ERR_TEAM_EMAIL_REQUIRED, ERR_TEAM_NAME_REQUIRED, MSG_TEAM_REGISTERED};
use crate::error::Result;
use crate::models::TeamRecord;
use crate::pages;
use crate::routes::validation::{checkbox, require_email, require_text};
use crate::routes::{run_in_session, with_session_cookie};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct TeamForm {
    pub team_name: String,
    #[serde(default)]
    pub team_captain: String,
    pub team_email: String,
    #[serde(default)]
    pub team_members: String,
    #[serde(default)]
    pub beta_interested: Option<String>,
}

impl TeamForm {
    /// Validate required fields and build the record to store
    ///
    /// Captain and members are optional; members are stored as typed.
    pub fn into_record(self) -> Result<TeamRecord> {
        Ok(TeamRecord {
            team_name: require_text(&self.team_name, ERR_TEAM_NAME_REQUIRED)?,
            team_captain: self.team_captain.trim().to_string(),
            team_email: require_email(&self.team_email, ERR_TEAM_EMAIL_REQUIRED)?,
            team_members: self.team_members,
            beta_interested: checkbox(&self.beta_interested),
        })
    }
}

/// Submit the team registration form
///
/// POST /teams
pub async fn register_team(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<TeamForm>,
) -> Result<Response> {
    let record = form.into_record()?;

    let (id, created, html) = run_in_session(&state, &headers, move |store, session| {
        pages::teams::submit(store, session, record)?;
        Ok(pages::render(session, Some(MSG_TEAM_REGISTERED)))
    })
    .await?;

    with_session_cookie(Html(html).into_response(), id, created)
}
