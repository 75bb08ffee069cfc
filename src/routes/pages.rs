use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

use crate::constants::ERR_UNKNOWN_PAGE;
use crate::error::{AppError, Result};
use crate::models::Page;
use crate::pages;
use crate::routes::{run_in_session, with_session_cookie};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    pub page: String,
}

/// Render the session's current page
///
/// GET /
pub async fn show_page(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let (id, created, html) =
        run_in_session(&state, &headers, |_, session| Ok(pages::render(session, None))).await?;

    with_session_cookie(Html(html).into_response(), id, created)
}

/// Page selector
///
/// POST /navigate
pub async fn navigate_to(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<NavigateForm>,
) -> Result<Response> {
    let page = Page::parse(&form.page).ok_or_else(|| {
        tracing::warn!("Unknown page requested: {}", form.page);
        AppError::InvalidInput(ERR_UNKNOWN_PAGE.to_string())
    })?;

    let (id, created, ()) = run_in_session(&state, &headers, move |_, session| {
        pages::navigate(session, page);
        Ok(())
    })
    .await?;

    with_session_cookie(Redirect::to("/").into_response(), id, created)
}

/// "Back to Home" from the team registration page
///
/// POST /teams/home
pub async fn back_home(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    let (id, created, ()) = run_in_session(&state, &headers, |_, session| {
        pages::teams::back_home(session);
        Ok(())
    })
    .await?;

    with_session_cookie(Redirect::to("/").into_response(), id, created)
}
