/// Default CSV file for individual race sign-ups
pub const DEFAULT_SIGNUPS_FILE: &str = "signups.csv";

/// Default CSV file for team registrations
pub const DEFAULT_TEAMS_FILE: &str = "teams.csv";

/// Column name used by older sign-up files for the character theme
pub const LEGACY_THEME_COLUMN: &str = "Character Choice";

/// Current column name for the character theme
pub const THEME_COLUMN: &str = "Character Theme";

/// Upper bound (inclusive) of the placeholder time given to new sign-ups
pub const MAX_PLACEHOLDER_TIME: u32 = 100;

/// Default cap on live sessions kept in memory
pub const DEFAULT_MAX_SESSIONS: usize = 1000;

/// Cookie carrying the browser session id
pub const SESSION_COOKIE: &str = "rundome_session";

// =============================================================================
// User-facing messages
// =============================================================================

pub const MSG_SIGNUP_RECORDED: &str =
    "Thanks for signing up! Your registration has been recorded. 🎉";

pub const MSG_TEAM_REGISTERED: &str = "Team registered successfully! 🎉";

pub const MSG_NO_SIGNUPS: &str = "No sign-ups yet! Be the first to join! 🎉";

pub const CONTACT_EMAIL: &str = "beta@rundome.com";

// =============================================================================
// Error Messages
// =============================================================================

pub const ERR_NAME_REQUIRED: &str = "Name is required";

pub const ERR_EMAIL_REQUIRED: &str = "Email is required";

pub const ERR_TEAM_NAME_REQUIRED: &str = "Team name is required";

pub const ERR_TEAM_EMAIL_REQUIRED: &str = "Team email is required";

pub const ERR_INVALID_EMAIL: &str = "Email address must contain '@'";

pub const ERR_UNKNOWN_PAGE: &str = "Unknown page";
