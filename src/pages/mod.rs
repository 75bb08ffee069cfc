//! Page controller: navigation state and dispatch to the page handlers.

pub mod home;
pub mod layout;
pub mod teams;

use crate::models::Page;
use crate::session::Session;

/// Switch the session to another page
pub fn navigate(session: &mut Session, page: Page) {
    if session.page != page {
        tracing::debug!("Navigating from {:?} to {:?}", session.page, page);
    }
    session.page = page;
}

/// Render the session's current page as a full HTML document
pub fn render(session: &Session, message: Option<&str>) -> String {
    let content = match session.page {
        Page::Home => home::render(message),
        Page::TeamRegistration => teams::render(&session.teams, message),
    };
    layout::document(session, &content)
}
