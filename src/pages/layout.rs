//! Page chrome shared by every page: sidebar navigation, sign-up stats, footer.

use std::fmt::Write;

use crate::constants::{CONTACT_EMAIL, MSG_NO_SIGNUPS};
use crate::models::{theme_counts, Page};
use crate::session::Session;

/// Escape text for use inside HTML element content or attribute values
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Success banner shown after a submission
pub fn notice(message: Option<&str>) -> String {
    match message {
        Some(message) => format!(r#"<p class="notice">{}</p>"#, escape_html(message)),
        None => String::new(),
    }
}

/// Wrap page content in the full HTML document
pub fn document(session: &Session, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Run Dome Beta | {title}</title>
</head>
<body>
<aside class="sidebar">
<h1>🏁 Run Dome Navigation</h1>
{nav}
{stats}
</aside>
<main>
{content}
</main>
<hr>
<footer><p style="text-align: center;">© 2025 Run Dome Beta | Contact: <a href="mailto:{email}">{email}</a></p></footer>
</body>
</html>
"#,
        title = session.page.label(),
        nav = navigation(session.page),
        stats = signup_stats(session),
        content = content,
        email = CONTACT_EMAIL,
    )
}

fn navigation(current: Page) -> String {
    let mut html = String::from(r#"<form method="post" action="/navigate"><p>Select a Page</p>"#);
    for page in Page::ALL {
        let marker = if page == current {
            r#" aria-current="page""#
        } else {
            ""
        };
        let _ = write!(
            html,
            r#"<button type="submit" name="page" value="{}"{}>{}</button>"#,
            page.key(),
            marker,
            page.label()
        );
    }
    html.push_str("</form>");
    html
}

fn signup_stats(session: &Session) -> String {
    let mut html = String::from("<h2>Sign-Up Stats 📊</h2>");
    let counts = theme_counts(&session.signups);
    if counts.is_empty() {
        let _ = write!(html, "<p>{}</p>", MSG_NO_SIGNUPS);
        return html;
    }

    html.push_str(r#"<ul class="stats">"#);
    for (theme, count) in counts {
        let _ = write!(html, "<li><strong>{}</strong>: {}</li>", theme.label(), count);
    }
    html.push_str("</ul>");
    html
}
