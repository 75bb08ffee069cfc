use std::fmt::Write;

use crate::error::Result;
use crate::models::{csv_bool, Page, TeamRecord};
use crate::pages::layout::{escape_html, notice};
use crate::pages::navigate;
use crate::session::Session;
use crate::store::{DatasetStore, Teams};

/// Record a team in the session and persist the teams file
pub fn submit(store: &DatasetStore, session: &mut Session, record: TeamRecord) -> Result<()> {
    tracing::info!("New team registration: {}", record.team_name);
    store.append::<Teams>(&mut session.teams, record)
}

/// "Back to Home" action
pub fn back_home(session: &mut Session) {
    navigate(session, Page::Home);
}

/// Team registration page body, including the registered teams table
pub fn render(teams: &[TeamRecord], message: Option<&str>) -> String {
    let mut html = format!(
        r#"<h1>👥 Team Registration</h1>
<p>Register as an individual or gather your crew for a group running adventure!</p>
{notice}
<form method="post" action="/teams">
<label>Team Name <input type="text" name="team_name" required title="Enter your team's name"></label>
<label>Team Captain <input type="text" name="team_captain" title="Enter the captain's name (if applicable)"></label>
<label>Team Email <input type="email" name="team_email" required title="A contact email for your team"></label>
<label>Team Members <textarea name="team_members" title="List your team members separated by commas (e.g., John, Jane, Doe)"></textarea></label>
<label><input type="checkbox" name="beta_interested" value="on"> Interested in beta testing as a team</label>
<button type="submit">Register Team</button>
</form>
"#,
        notice = notice(message),
    );

    if !teams.is_empty() {
        html.push_str(&teams_table(teams));
    }

    html.push_str(
        r#"<form method="post" action="/teams/home"><button type="submit">Back to Home</button></form>"#,
    );
    html
}

fn teams_table(teams: &[TeamRecord]) -> String {
    let mut html = String::from("<h3>Registered Teams</h3>\n<table>\n<tr>");
    for header in TeamRecord::HEADERS {
        let _ = write!(html, "<th>{}</th>", header);
    }
    html.push_str("</tr>\n");

    for team in teams {
        let _ = writeln!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&team.team_name),
            escape_html(&team.team_captain),
            escape_html(&team.team_email),
            escape_html(&team.team_members),
            csv_bool::label(team.beta_interested)
        );
    }
    html.push_str("</table>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Dataset;

    #[test]
    fn test_render_lists_teams_escaped() {
        let mut teams = Teams::sample_rows();
        teams.push(TeamRecord {
            team_name: "<Blink>".to_string(),
            team_captain: String::new(),
            team_email: "b@example.com".to_string(),
            team_members: "A & B".to_string(),
            beta_interested: false,
        });

        let html = render(&teams, None);
        assert!(html.contains("Registered Teams"));
        assert!(html.contains("<td>Fast Runners</td>"));
        assert!(html.contains("<td>&lt;Blink&gt;</td>"));
        assert!(html.contains("<td>A &amp; B</td>"));
        assert!(html.contains("<td>David, Emma, Liam</td><td>True</td>"));
        assert!(html.contains("<td>A &amp; B</td><td>False</td>"));
        assert!(!html.contains("<td>true</td>"));
        assert!(html.contains("Back to Home"));
    }

    #[test]
    fn test_render_without_teams_hides_table() {
        let html = render(&[], None);
        assert!(!html.contains("Registered Teams"));
        assert!(html.contains("Back to Home"));
    }

    #[test]
    fn test_back_home_resets_page() {
        let mut session = Session {
            page: Page::TeamRegistration,
            signups: Vec::new(),
            teams: Vec::new(),
        };
        back_home(&mut session);
        assert_eq!(session.page, Page::Home);
    }
}
