use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::team::Team;

/// Whole-list persistence of registered teams between runs.
///
/// The stored blob is opaque to the rest of the crate; a missing file loads
/// as an empty list, which callers treat as "no prior session".
pub struct TeamStore {
    path: PathBuf,
}

impl TeamStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TeamStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the stored list with `teams`.
    pub fn save(&self, teams: &[Team]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer(BufWriter::new(file), teams)?;
        tracing::debug!(teams = teams.len(), "team list saved");
        Ok(())
    }

    /// Load the stored list, or an empty one when nothing was ever saved.
    pub fn load(&self) -> Result<Vec<Team>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path)?;
        let teams = serde_json::from_reader(BufReader::new(file))?;
        Ok(teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::Player;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = TeamStore::new(dir.path().join("teams.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = TeamStore::new(dir.path().join("teams.json"));
        let teams = vec![
            Team::new("Compilers", "Los Compiladores", vec![Player::new("Ana", 1)], 1234),
            Team::new("Databases", "Equipo Datos", vec![], 5678),
        ];

        store.save(&teams).unwrap();
        assert_eq!(store.load().unwrap(), teams);
    }

    #[test]
    fn test_save_overwrites_the_previous_list() {
        let dir = TempDir::new().unwrap();
        let store = TeamStore::new(dir.path().join("teams.json"));
        store
            .save(&[Team::new("p", "Old", vec![], 1)])
            .unwrap();
        store
            .save(&[Team::new("p", "New", vec![], 2)])
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "New");
    }
}
