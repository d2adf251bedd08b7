use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{require, Config, DATA_DIR};
use crate::error::{Error, Result};

/// One addressable unit of raw input.
///
/// `generate` is the companion enumerator: it derives every unit a
/// configuration describes, so the variant is picked as a type parameter
/// rather than wired in by the caller.
pub trait InputSource: Send + Sized + 'static {
    /// Materialize the unit's full content.
    fn read(&self) -> Result<String>;

    /// Enumerate all units for `config`. An empty result is not an error.
    fn generate(config: &Config) -> Result<Vec<Self>>;
}

/// File-backed input: one unit per regular file under the configured
/// `data_dir`.
#[derive(Debug)]
pub struct PathInput {
    path: PathBuf,
}

impl PathInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InputSource for PathInput {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| Error::Read {
            path: self.path.clone(),
            source,
        })
    }

    fn generate(config: &Config) -> Result<Vec<Self>> {
        let dir = PathBuf::from(require(config, DATA_DIR)?);
        let entries = fs::read_dir(&dir).map_err(|source| Error::ListDir {
            dir: dir.clone(),
            source,
        })?;

        let mut inputs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| Error::ListDir {
                dir: dir.clone(),
                source,
            })?;
            let path = entry.path();
            // subdirectories and other non-files are skipped
            if path.is_file() {
                inputs.push(PathInput::new(path));
            }
        }
        Ok(inputs)
    }
}
