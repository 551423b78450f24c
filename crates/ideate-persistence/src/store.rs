//! Opportunity store backed by per-record JSON files.
//!
//! Writes go to a temporary file in the target directory first and are then
//! renamed into place, so a record file is never left partially written.
//!
//! ```text
//! base_path/
//! └── opportunities/
//!     ├── opp-abc123.json
//!     └── opp-def456.json
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use ideate_models::{Opportunity, OpportunityId};

use crate::error::{PersistenceError, Result};

/// Manages persistence of captured opportunities.
pub struct OpportunityStore {
    base_path: PathBuf,
}

impl OpportunityStore {
    /// Creates a store rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Returns the platform-default store location (`~/.ideate`).
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".ideate")
    }

    fn opportunities_dir(&self) -> PathBuf {
        self.base_path.join("opportunities")
    }

    fn opportunity_path(&self, id: &OpportunityId) -> PathBuf {
        self.opportunities_dir().join(format!("{}.json", id))
    }

    /// Saves one opportunity.
    pub fn save(&self, opportunity: &Opportunity) -> Result<()> {
        let dir = self.opportunities_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|source| PersistenceError::Directory {
                path: dir.clone(),
                source,
            })?;
        }
        atomic_write_json(&self.opportunity_path(&opportunity.id), opportunity)
    }

    /// Loads an opportunity by id.
    pub fn load(&self, id: &OpportunityId) -> Result<Opportunity> {
        let path = self.opportunity_path(id);
        if !path.exists() {
            return Err(PersistenceError::NotFound(id.to_string()));
        }
        read_json(&path)
    }

    /// Lists all stored opportunities.
    ///
    /// Ordered by score (highest first), then by id for a stable order. A
    /// store that has never been written to yields an empty list.
    pub fn list(&self) -> Result<Vec<Opportunity>> {
        let dir = self.opportunities_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&dir).map_err(|source| PersistenceError::Read {
            path: dir.clone(),
            source,
        })?;

        let mut opportunities = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| PersistenceError::Read {
                path: dir.clone(),
                source,
            })?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                opportunities.push(read_json::<Opportunity>(&path)?);
            }
        }

        opportunities.sort_by(|a, b| {
            b.score_or_zero()
                .partial_cmp(&a.score_or_zero())
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });

        Ok(opportunities)
    }

    /// Deletes an opportunity by id.
    pub fn delete(&self, id: &OpportunityId) -> Result<()> {
        let path = self.opportunity_path(id);
        if !path.exists() {
            return Err(PersistenceError::NotFound(id.to_string()));
        }
        fs::remove_file(&path).map_err(|source| PersistenceError::Write { path, source })
    }
}

/// Writes JSON to a file atomically (temp file in the same directory, then
/// rename, so the rename stays on one filesystem).
fn atomic_write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let dir = path.parent().unwrap_or(Path::new("."));

    let mut temp_file =
        tempfile::NamedTempFile::new_in(dir).map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    temp_file
        .write_all(json.as_bytes())
        .and_then(|_| temp_file.flush())
        .map_err(|source| PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    temp_file.persist(path).map_err(|e| PersistenceError::Write {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let data = fs::read_to_string(path).map_err(|source| PersistenceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}
