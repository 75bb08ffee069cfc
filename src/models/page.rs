/// Page currently selected in a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Home,
    TeamRegistration,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Home, Page::TeamRegistration];

    /// Value used by the page selector form
    pub fn key(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::TeamRegistration => "TeamRegistration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::TeamRegistration => "Team Registration",
        }
    }

    /// Accepts either the selector key or the display label
    pub fn parse(raw: &str) -> Option<Page> {
        Page::ALL
            .into_iter()
            .find(|page| raw == page.key() || raw == page.label())
    }
}
