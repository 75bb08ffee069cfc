use serde::{de::DeserializeOwned, Serialize};
use std::fmt;

use crate::models::{AgeRange, CharacterTheme, ExperienceLevel, SignupRecord, TeamRecord};

/// Name of a persisted dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetName {
    Signups,
    Teams,
}

impl DatasetName {
    pub fn as_str(self) -> &'static str {
        match self {
            DatasetName::Signups => "signups",
            DatasetName::Teams => "teams",
        }
    }
}

impl fmt::Display for DatasetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dataset backed by one CSV file
pub trait Dataset {
    type Record: Serialize + DeserializeOwned + Clone + Send + 'static;

    const NAME: DatasetName;

    /// Header row, in column order
    const HEADERS: &'static [&'static str];

    /// Rows written when the file is missing or empty
    fn sample_rows() -> Vec<Self::Record>;
}

/// Individual race sign-ups
pub struct Signups;

/// Team registrations
pub struct Teams;

impl Dataset for Signups {
    type Record = SignupRecord;

    const NAME: DatasetName = DatasetName::Signups;
    const HEADERS: &'static [&'static str] = &SignupRecord::HEADERS;

    fn sample_rows() -> Vec<SignupRecord> {
        vec![
            SignupRecord {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                age_range: AgeRange::From18To25,
                experience_level: ExperienceLevel::Intermediate,
                character_theme: CharacterTheme::Mario,
                beta_interested: true,
                time: Some(5.21),
            },
            SignupRecord {
                name: "Bob".to_string(),
                email: "bob@example.com".to_string(),
                age_range: AgeRange::From26To35,
                experience_level: ExperienceLevel::Advanced,
                character_theme: CharacterTheme::Luigi,
                beta_interested: false,
                time: Some(5.29),
            },
            SignupRecord {
                name: "Charlie".to_string(),
                email: "charlie@example.com".to_string(),
                age_range: AgeRange::From18To25,
                experience_level: ExperienceLevel::Beginner,
                character_theme: CharacterTheme::Peach,
                beta_interested: true,
                time: Some(5.31),
            },
        ]
    }
}

impl Dataset for Teams {
    type Record = TeamRecord;

    const NAME: DatasetName = DatasetName::Teams;
    const HEADERS: &'static [&'static str] = &TeamRecord::HEADERS;

    fn sample_rows() -> Vec<TeamRecord> {
        vec![
            TeamRecord {
                team_name: "Fast Runners".to_string(),
                team_captain: "David".to_string(),
                team_email: "david@example.com".to_string(),
                team_members: "David, Emma, Liam".to_string(),
                beta_interested: true,
            },
            TeamRecord {
                team_name: "Speedsters".to_string(),
                team_captain: "Sara".to_string(),
                team_email: "sara@example.com".to_string(),
                team_members: "Sara, Tom".to_string(),
                beta_interested: false,
            },
        ]
    }
}
