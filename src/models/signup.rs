use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::MAX_PLACEHOLDER_TIME;
use crate::models::csv_bool;

/// Age bracket offered on the sign-up form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeRange {
    #[serde(rename = "Under 18")]
    Under18,
    #[serde(rename = "18–25")]
    From18To25,
    #[serde(rename = "26–35")]
    From26To35,
    #[serde(rename = "36–50")]
    From36To50,
    #[serde(rename = "50+")]
    Over50,
}

impl AgeRange {
    pub const ALL: [AgeRange; 5] = [
        AgeRange::Under18,
        AgeRange::From18To25,
        AgeRange::From26To35,
        AgeRange::From36To50,
        AgeRange::Over50,
    ];

    /// Label as shown on the form and stored in the CSV
    pub fn label(self) -> &'static str {
        match self {
            AgeRange::Under18 => "Under 18",
            AgeRange::From18To25 => "18–25",
            AgeRange::From26To35 => "26–35",
            AgeRange::From36To50 => "36–50",
            AgeRange::Over50 => "50+",
        }
    }
}

/// Self-reported running experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

/// In-game character theme picked by a runner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacterTheme {
    Mario,
    Luigi,
    Bowser,
    Peach,
    Goomba,
    Daisy,
    #[serde(rename = "Donkey Kong")]
    DonkeyKong,
    #[serde(rename = "Koopa Troopa")]
    KoopaTroopa,
    Yoshi,
    #[serde(rename = "Shy Guy")]
    ShyGuy,
    #[serde(rename = "Bowser Jr.")]
    BowserJr,
    Wario,
    Waluigi,
    #[serde(rename = "Funky Kong")]
    FunkyKong,
}

impl CharacterTheme {
    pub const ALL: [CharacterTheme; 14] = [
        CharacterTheme::Mario,
        CharacterTheme::Luigi,
        CharacterTheme::Bowser,
        CharacterTheme::Peach,
        CharacterTheme::Goomba,
        CharacterTheme::Daisy,
        CharacterTheme::DonkeyKong,
        CharacterTheme::KoopaTroopa,
        CharacterTheme::Yoshi,
        CharacterTheme::ShyGuy,
        CharacterTheme::BowserJr,
        CharacterTheme::Wario,
        CharacterTheme::Waluigi,
        CharacterTheme::FunkyKong,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CharacterTheme::Mario => "Mario",
            CharacterTheme::Luigi => "Luigi",
            CharacterTheme::Bowser => "Bowser",
            CharacterTheme::Peach => "Peach",
            CharacterTheme::Goomba => "Goomba",
            CharacterTheme::Daisy => "Daisy",
            CharacterTheme::DonkeyKong => "Donkey Kong",
            CharacterTheme::KoopaTroopa => "Koopa Troopa",
            CharacterTheme::Yoshi => "Yoshi",
            CharacterTheme::ShyGuy => "Shy Guy",
            CharacterTheme::BowserJr => "Bowser Jr.",
            CharacterTheme::Wario => "Wario",
            CharacterTheme::Waluigi => "Waluigi",
            CharacterTheme::FunkyKong => "Funky Kong",
        }
    }
}

/// One row of the sign-ups CSV
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Age Range")]
    pub age_range: AgeRange,
    #[serde(rename = "Experience Level")]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "Character Theme")]
    pub character_theme: CharacterTheme,
    #[serde(rename = "Beta Interested", with = "csv_bool")]
    pub beta_interested: bool,
    /// Placeholder value, not a measured race time.
    ///
    /// Files from older versions have no `Time` column, or blank cells for
    /// rows written before it existed; both load as `None`.
    #[serde(rename = "Time", default)]
    pub time: Option<f64>,
}

impl SignupRecord {
    pub const HEADERS: [&'static str; 7] = [
        "Name",
        "Email",
        "Age Range",
        "Experience Level",
        "Character Theme",
        "Beta Interested",
        "Time",
    ];

    /// Random stand-in for a race time, in `0..=MAX_PLACEHOLDER_TIME`
    pub fn placeholder_time() -> f64 {
        f64::from(rand::rng().random_range(0..=MAX_PLACEHOLDER_TIME))
    }
}

/// Per-theme sign-up counts, most popular first.
///
/// Ties keep the order in which the theme was first seen.
pub fn theme_counts(signups: &[SignupRecord]) -> Vec<(CharacterTheme, usize)> {
    let mut counts: Vec<(CharacterTheme, usize)> = Vec::new();
    for signup in signups {
        match counts
            .iter_mut()
            .find(|(theme, _)| *theme == signup.character_theme)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((signup.character_theme, 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}
