use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use crate::constants::{ERR_EMAIL_REQUIRED, ERR_NAME_REQUIRED, MSG_SIGNUP_RECORDED};
use crate::error::Result;
use crate::models::{AgeRange, CharacterTheme, ExperienceLevel, SignupRecord};
use crate::pages;
use crate::routes::validation::{checkbox, require_email, require_text};
use crate::routes::{run_in_session, with_session_cookie};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub age_range: AgeRange,
    pub experience_level: ExperienceLevel,
    pub character_theme: CharacterTheme,
    #[serde(default)]
    pub beta_interested: Option<String>,
}

impl SignupForm {
    /// Validate required fields and build the record to store
    pub fn into_record(self) -> Result<SignupRecord> {
        Ok(SignupRecord {
            name: require_text(&self.name, ERR_NAME_REQUIRED)?,
            email: require_email(&self.email, ERR_EMAIL_REQUIRED)?,
            age_range: self.age_range,
            experience_level: self.experience_level,
            character_theme: self.character_theme,
            beta_interested: checkbox(&self.beta_interested),
            time: Some(SignupRecord::placeholder_time()),
        })
    }
}

/// Submit the sign-up form
///
/// POST /signup
///
/// Appends the sign-up to the session's dataset, rewrites the sign-ups file
/// and re-renders the page with a confirmation.
pub async fn submit_signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SignupForm>,
) -> Result<Response> {
    let record = form.into_record()?;

    let (id, created, html) = run_in_session(&state, &headers, move |store, session| {
        pages::home::submit(store, session, record)?;
        Ok(pages::render(session, Some(MSG_SIGNUP_RECORDED)))
    })
    .await?;

    with_session_cookie(Html(html).into_response(), id, created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn form(name: &str, email: &str) -> SignupForm {
        SignupForm {
            name: name.to_string(),
            email: email.to_string(),
            age_range: AgeRange::From26To35,
            experience_level: ExperienceLevel::Advanced,
            character_theme: CharacterTheme::Yoshi,
            beta_interested: Some("on".to_string()),
        }
    }

    #[test]
    fn test_into_record() {
        let record = form(" Dana ", "dana@x.com").into_record().unwrap();
        assert_eq!(record.name, "Dana");
        assert_eq!(record.email, "dana@x.com");
        assert_eq!(record.character_theme, CharacterTheme::Yoshi);
        assert!(record.beta_interested);
        assert!((0.0..=100.0).contains(&record.time.unwrap()));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert!(matches!(
            form("", "dana@x.com").into_record(),
            Err(AppError::InvalidInput(msg)) if msg == ERR_NAME_REQUIRED
        ));
    }
}
