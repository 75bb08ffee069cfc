pub mod datasets;

use csv::StringRecord;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::Config;
use crate::constants::{LEGACY_THEME_COLUMN, THEME_COLUMN};
use crate::error::{AppError, Result};

pub use datasets::{Dataset, DatasetName, Signups, Teams};

/// Flat-file store for the sign-up and team datasets.
///
/// Each dataset lives in its own CSV file and is rewritten in full on every
/// save. Saves from this process are serialized, but sessions each hold their
/// own copy of the rows, so two sessions appending concurrently still race:
/// the last save wins.
#[derive(Debug)]
pub struct DatasetStore {
    data_dir: PathBuf,
    signups_path: PathBuf,
    teams_path: PathBuf,
    write_lock: Mutex<()>,
}

impl DatasetStore {
    pub fn new(data_dir: impl Into<PathBuf>, signups_file: &str, teams_file: &str) -> Self {
        let data_dir = data_dir.into();
        Self {
            signups_path: data_dir.join(signups_file),
            teams_path: data_dir.join(teams_file),
            data_dir,
            write_lock: Mutex::new(()),
        }
    }

    /// Open the store described by the configuration
    ///
    /// Creates the data directory if it doesn't exist. Files are created
    /// lazily on first load.
    pub fn open(config: &Config) -> Result<Self> {
        tracing::info!("Opening dataset store at: {:?}", config.data_dir);

        if !config.data_dir.exists() {
            fs::create_dir_all(&config.data_dir).map_err(|e| {
                tracing::error!("Failed to create data directory: {}", e);
                e
            })?;
        }

        Ok(Self::new(
            config.data_dir.clone(),
            &config.signups_file,
            &config.teams_file,
        ))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path_for(&self, name: DatasetName) -> &Path {
        match name {
            DatasetName::Signups => &self.signups_path,
            DatasetName::Teams => &self.teams_path,
        }
    }

    /// Load a dataset, seeding it with sample rows on first use
    ///
    /// A missing file and a file without data rows are both treated as a
    /// first run: the sample rows are written to disk and returned.
    pub fn load<D: Dataset>(&self) -> Result<Vec<D::Record>> {
        let path = self.path_for(D::NAME);

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!("No {} file at {:?}, seeding sample data", D::NAME, path);
                return self.seed::<D>();
            }
            Err(e) => return Err(e.into()),
        };

        let rows = read_rows::<D, _>(file)?;
        if rows.is_empty() {
            tracing::info!("{} file at {:?} is empty, seeding sample data", D::NAME, path);
            return self.seed::<D>();
        }

        tracing::debug!("Loaded {} {} rows", rows.len(), D::NAME);
        Ok(rows)
    }

    /// Overwrite the dataset file with the given rows
    pub fn save<D: Dataset>(&self, rows: &[D::Record]) -> Result<()> {
        let path = self.path_for(D::NAME);
        let _guard = self.write_lock.lock().map_err(|_| AppError::LockPoisoned)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(D::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        tracing::debug!("Saved {} {} rows to {:?}", rows.len(), D::NAME, path);
        Ok(())
    }

    /// Append one record to `rows` and persist the whole sequence
    ///
    /// On a failed save the record is removed again so `rows` keeps matching
    /// what is on disk.
    pub fn append<D: Dataset>(&self, rows: &mut Vec<D::Record>, record: D::Record) -> Result<()> {
        rows.push(record);
        if let Err(e) = self.save::<D>(rows) {
            rows.pop();
            return Err(e);
        }

        tracing::info!("Appended {} row ({} total)", D::NAME, rows.len());
        Ok(())
    }

    fn seed<D: Dataset>(&self) -> Result<Vec<D::Record>> {
        let rows = D::sample_rows();
        self.save::<D>(&rows)?;
        Ok(rows)
    }
}

/// Parse CSV content into dataset rows, renaming legacy columns first
fn read_rows<D: Dataset, R: Read>(source: R) -> Result<Vec<D::Record>> {
    let corrupt = |source| AppError::CorruptStorage {
        dataset: D::NAME,
        source,
    };

    let mut reader = csv::ReaderBuilder::new().from_reader(source);
    let headers = reader.headers().map_err(corrupt)?.clone();
    if let Some(renamed) = migrate_headers(&headers) {
        tracing::info!(
            "Renaming legacy column {:?} to {:?} in {}",
            LEGACY_THEME_COLUMN,
            THEME_COLUMN,
            D::NAME
        );
        reader.set_headers(renamed);
    }

    reader
        .deserialize()
        .collect::<std::result::Result<Vec<D::Record>, csv::Error>>()
        .map_err(corrupt)
}

/// Header row with `Character Choice` renamed to `Character Theme`, if needed
pub fn migrate_headers(headers: &StringRecord) -> Option<StringRecord> {
    let has_legacy = headers.iter().any(|h| h == LEGACY_THEME_COLUMN);
    let has_current = headers.iter().any(|h| h == THEME_COLUMN);
    if !has_legacy || has_current {
        return None;
    }

    Some(
        headers
            .iter()
            .map(|h| if h == LEGACY_THEME_COLUMN { THEME_COLUMN } else { h })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeRange, CharacterTheme, ExperienceLevel, SignupRecord, TeamRecord};
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> DatasetStore {
        DatasetStore::new(temp_dir.path(), "signups.csv", "teams.csv")
    }

    fn dana() -> SignupRecord {
        SignupRecord {
            name: "Dana".to_string(),
            email: "dana@x.com".to_string(),
            age_range: AgeRange::From26To35,
            experience_level: ExperienceLevel::Advanced,
            character_theme: CharacterTheme::Yoshi,
            beta_interested: true,
            time: Some(42.0),
        }
    }

    #[test]
    fn test_missing_file_seeds_samples() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let signups = store.load::<Signups>().unwrap();
        let names: Vec<&str> = signups.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

        // The file now exists and holds the same rows
        assert!(store.path_for(DatasetName::Signups).exists());
        let contents = fs::read_to_string(store.path_for(DatasetName::Signups)).unwrap();
        assert_eq!(contents.lines().count(), 4);
        assert_eq!(store.load::<Signups>().unwrap(), signups);
    }

    #[test]
    fn test_missing_teams_file_seeds_samples() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let teams = store.load::<Teams>().unwrap();
        assert_eq!(teams, Teams::sample_rows());
        assert_eq!(teams[0].team_members, "David, Emma, Liam");
        assert_eq!(store.load::<Teams>().unwrap(), teams);
    }

    #[test]
    fn test_empty_file_seeds_samples() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(store.path_for(DatasetName::Teams), "").unwrap();

        assert_eq!(store.load::<Teams>().unwrap(), Teams::sample_rows());
        assert_eq!(store.load::<Teams>().unwrap().len(), 2);
    }

    #[test]
    fn test_header_only_file_seeds_samples() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        store.save::<Signups>(&[]).unwrap();

        let contents = fs::read_to_string(store.path_for(DatasetName::Signups)).unwrap();
        assert_eq!(
            contents.trim_end(),
            "Name,Email,Age Range,Experience Level,Character Theme,Beta Interested,Time"
        );

        assert_eq!(store.load::<Signups>().unwrap(), Signups::sample_rows());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut rows = Signups::sample_rows();
        rows.push(dana());
        rows.push(SignupRecord {
            name: "O'Neil, \"Quick\"".to_string(),
            ..dana()
        });
        store.save::<Signups>(&rows).unwrap();

        assert_eq!(store.load::<Signups>().unwrap(), rows);
    }

    #[test]
    fn test_append_grows_by_one() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut rows = store.load::<Signups>().unwrap();
        let before = rows.clone();
        store.append::<Signups>(&mut rows, dana()).unwrap();

        let persisted = store.load::<Signups>().unwrap();
        assert_eq!(persisted.len(), before.len() + 1);
        assert_eq!(&persisted[..before.len()], before.as_slice());
        assert_eq!(persisted.last(), Some(&dana()));
        assert_eq!(persisted, rows);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut rows = store.load::<Signups>().unwrap();
        store.append::<Signups>(&mut rows, dana()).unwrap();
        store.append::<Signups>(&mut rows, dana()).unwrap();

        assert_eq!(store.load::<Signups>().unwrap().len(), 5);
    }

    #[test]
    fn test_legacy_column_is_renamed() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(
            store.path_for(DatasetName::Signups),
            "Name,Email,Age Range,Experience Level,Character Choice,Beta Interested,Time\n\
             Eve,eve@example.com,36–50,Beginner,Bowser Jr.,False,17\n",
        )
        .unwrap();

        let rows = store.load::<Signups>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Eve");
        assert_eq!(rows[0].age_range, AgeRange::From36To50);
        assert_eq!(rows[0].character_theme, CharacterTheme::BowserJr);
        assert!(!rows[0].beta_interested);
        assert_eq!(rows[0].time, Some(17.0));
    }

    #[test]
    fn test_legacy_file_without_time_column() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(
            store.path_for(DatasetName::Signups),
            "Name,Email,Age Range,Experience Level,Character Choice,Beta Interested\n\
             Ivy,ivy@example.com,18–25,Beginner,Daisy,True\n",
        )
        .unwrap();

        let mut rows = store.load::<Signups>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].character_theme, CharacterTheme::Daisy);
        assert_eq!(rows[0].time, None);

        // Next save writes the current header with a blank Time cell
        store.append::<Signups>(&mut rows, dana()).unwrap();
        let contents = fs::read_to_string(store.path_for(DatasetName::Signups)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines[0], SignupRecord::HEADERS.join(","));
        assert_eq!(lines[1], "Ivy,ivy@example.com,18–25,Beginner,Daisy,True,");
        assert_eq!(store.load::<Signups>().unwrap(), rows);
    }

    #[test]
    fn test_blank_time_cell_loads_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(
            store.path_for(DatasetName::Signups),
            "Name,Email,Age Range,Experience Level,Character Theme,Beta Interested,Time\n\
             Jo,jo@example.com,26–35,Intermediate,Mario,False,\n\
             Kai,kai@example.com,26–35,Advanced,Wario,True,88\n",
        )
        .unwrap();

        let rows = store.load::<Signups>().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].time, None);
        assert_eq!(rows[1].time, Some(88.0));
    }

    #[test]
    fn test_booleans_written_capitalized() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        store.load::<Teams>().unwrap();

        let contents = fs::read_to_string(store.path_for(DatasetName::Teams)).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines[0],
            "Team Name,Team Captain,Team Email,Team Members,Beta Interested"
        );
        assert_eq!(
            lines[1],
            "Fast Runners,David,david@example.com,\"David, Emma, Liam\",True"
        );
        assert!(lines[2].ends_with(",False"));
    }

    #[test]
    fn test_malformed_file_is_corrupt_storage() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);
        fs::write(
            store.path_for(DatasetName::Signups),
            "Name,Email,Age Range,Experience Level,Character Theme,Beta Interested,Time\n\
             Zed,zed@example.com,99+,Beginner,Mario,True,1\n",
        )
        .unwrap();

        match store.load::<Signups>() {
            Err(AppError::CorruptStorage { dataset, .. }) => {
                assert_eq!(dataset, DatasetName::Signups)
            }
            other => panic!("expected corrupt storage, got {:?}", other),
        }
    }

    #[test]
    fn test_migrate_headers() {
        let legacy = StringRecord::from(vec!["Name", "Character Choice"]);
        let renamed = migrate_headers(&legacy).unwrap();
        assert_eq!(renamed, StringRecord::from(vec!["Name", "Character Theme"]));

        let current = StringRecord::from(vec!["Name", "Character Theme"]);
        assert!(migrate_headers(&current).is_none());
    }

    #[test]
    fn test_team_members_kept_verbatim() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let mut teams = store.load::<Teams>().unwrap();
        let team = TeamRecord {
            team_name: "Night Owls".to_string(),
            team_captain: String::new(),
            team_email: "owls@example.com".to_string(),
            team_members: "Ann,  Bea ,Cy\nDee".to_string(),
            beta_interested: true,
        };
        store.append::<Teams>(&mut teams, team.clone()).unwrap();

        assert_eq!(store.load::<Teams>().unwrap()[2], team);
    }
}
