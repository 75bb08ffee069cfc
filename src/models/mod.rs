pub mod csv_bool;
pub mod page;
pub mod signup;
pub mod team;

pub use page::Page;
pub use signup::{theme_counts, AgeRange, CharacterTheme, ExperienceLevel, SignupRecord};
pub use team::TeamRecord;
