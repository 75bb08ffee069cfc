use std::fmt::Write;

use crate::error::Result;
use crate::models::{AgeRange, CharacterTheme, ExperienceLevel, SignupRecord};
use crate::pages::layout::notice;
use crate::session::Session;
use crate::store::{DatasetStore, Signups};

/// Record a sign-up in the session and persist the sign-ups file
///
/// Resubmitting the same form adds another row.
pub fn submit(store: &DatasetStore, session: &mut Session, record: SignupRecord) -> Result<()> {
    tracing::info!(
        "New sign-up: theme {}, {}",
        record.character_theme.label(),
        record.experience_level.label()
    );
    store.append::<Signups>(&mut session.signups, record)
}

/// Sign-up page body
pub fn render(message: Option<&str>) -> String {
    format!(
        r#"<h1>This Week:</h1>
<h1>The Real-Life Mario Kart Game</h1>
<p>Welcome to <strong>Run Dome Beta</strong> – where running meets the thrill of a gaming adventure!
Prepare for a fun, <strong>gamified running experience</strong> with exciting power-ups, challenging obstacles, and unique track themes.
Whether you're an avid runner or looking to try something new, join our beta and be part of the action! 🚀🏃‍♀️💨</p>
<hr>
<div class="columns">
<section>
<h2>Sign Up Now</h2>
{notice}
{form}
</section>
<section>
<h2>What to Expect</h2>
<p><strong>Exciting Race Formats:</strong></p>
<ul>
<li><strong>🎢 Thrilling Tracks:</strong> Navigate dynamic courses with fun challenges.</li>
<li><strong>🚀 Power-Ups &amp; Obstacles:</strong> Earn boosts and overcome obstacles.</li>
<li><strong>👟 Immersive Experience:</strong> Get ready for tech enhancements and exclusive gear.</li>
</ul>
<p>Stay tuned for updates on race events, tech upgrades, and special beta events!</p>
</section>
</div>
<hr>"#,
        notice = notice(message),
        form = signup_form(),
    )
}

fn signup_form() -> String {
    let mut html = String::from(
        r#"<form method="post" action="/signup">
<label>Name <input type="text" name="name" required title="Enter your full name"></label>
<label>Email <input type="email" name="email" required title="We'll send updates and beta details here"></label>
<label>Age Range <select name="age_range">"#,
    );
    for age in AgeRange::ALL {
        let _ = write!(html, "<option>{}</option>", age.label());
    }
    html.push_str("</select></label>\n<fieldset><legend>Experience Level</legend>");
    for (i, level) in ExperienceLevel::ALL.into_iter().enumerate() {
        let checked = if i == 0 { " checked" } else { "" };
        let _ = write!(
            html,
            r#"<label><input type="radio" name="experience_level" value="{0}"{1}> {0}</label>"#,
            level.label(),
            checked
        );
    }
    html.push_str(
        "</fieldset>\n<label>Character Theme <select name=\"character_theme\">",
    );
    for theme in CharacterTheme::ALL {
        let _ = write!(html, "<option>{}</option>", theme.label());
    }
    html.push_str(
        r#"</select></label>
<label><input type="checkbox" name="beta_interested" value="on"> Interested in beta testing power-ups and immersive gear</label>
<button type="submit">Submit</button>
</form>"#,
    );
    html
}
