//! Profile storage.
//!
//! [`MemoryRepository`] keeps profiles in a map. [`JsonFileRepository`]
//! writes one pretty-printed `<id>.json` per profile into a directory.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{SessionError, SessionResult};
use crate::profile::{Profile, validate_id};

/// Somewhere profiles can be saved and found again by id.
pub trait ProfileRepository {
    /// Insert or replace the profile with `profile.id`.
    fn save(&mut self, profile: &Profile) -> SessionResult<()>;

    /// Load the profile with `id`.
    fn load(&self, id: &str) -> SessionResult<Profile>;

    /// Remove the profile with `id`.
    fn delete(&mut self, id: &str) -> SessionResult<()>;

    /// Every stored profile, ordered by id.
    fn list(&self) -> SessionResult<Vec<Profile>>;
}

/// In-memory profile store.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    profiles: BTreeMap<String, Profile>,
}

impl MemoryRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for MemoryRepository {
    fn save(&mut self, profile: &Profile) -> SessionResult<()> {
        validate_id(&profile.id)?;
        self.profiles.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> SessionResult<Profile> {
        validate_id(id)?;
        self.profiles
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::ProfileNotFound(id.to_string()))
    }

    fn delete(&mut self, id: &str) -> SessionResult<()> {
        validate_id(id)?;
        self.profiles
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SessionError::ProfileNotFound(id.to_string()))
    }

    fn list(&self) -> SessionResult<Vec<Profile>> {
        Ok(self.profiles.values().cloned().collect())
    }
}

/// Profile store backed by a directory of JSON files.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    dir: PathBuf,
}

impl JsonFileRepository {
    /// Open the store in `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> SessionResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Directory holding the profile files.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, id: &str) -> SessionResult<PathBuf> {
        validate_id(id)?;
        Ok(self.dir.join(format!("{id}.json")))
    }

    fn read(path: &Path) -> SessionResult<Profile> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn not_found(id: &str) -> impl FnOnce(std::io::Error) -> SessionError + '_ {
    move |e| {
        if e.kind() == ErrorKind::NotFound {
            SessionError::ProfileNotFound(id.to_string())
        } else {
            SessionError::Io(e)
        }
    }
}

impl ProfileRepository for JsonFileRepository {
    fn save(&mut self, profile: &Profile) -> SessionResult<()> {
        let path = self.path(&profile.id)?;
        let mut json = serde_json::to_string_pretty(profile)?;
        json.push('\n');
        std::fs::write(&path, json)?;
        tracing::debug!(id = %profile.id, path = %path.display(), "saved profile");
        Ok(())
    }

    fn load(&self, id: &str) -> SessionResult<Profile> {
        let path = self.path(id)?;
        let text = std::fs::read_to_string(&path).map_err(not_found(id))?;
        Ok(serde_json::from_str(&text)?)
    }

    fn delete(&mut self, id: &str) -> SessionResult<()> {
        let path = self.path(id)?;
        std::fs::remove_file(&path).map_err(not_found(id))?;
        tracing::debug!(id, path = %path.display(), "deleted profile");
        Ok(())
    }

    fn list(&self) -> SessionResult<Vec<Profile>> {
        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry.map_err(SessionError::Io)?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut profiles = paths
            .iter()
            .map(PathBuf::as_path)
            .map(Self::read)
            .collect::<SessionResult<Vec<_>>>()?;
        profiles.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(profiles)
    }
}
