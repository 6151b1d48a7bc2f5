use crate::models::StudentRecord;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the student dataset
///
/// All of these are fatal at startup: the server must not bind its
/// listen socket against a missing, corrupt, or empty dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Dataset file {path} contains no student records")]
    Empty { path: PathBuf },
}

/// Immutable, process-wide student dataset
///
/// Loaded exactly once at startup and shared by `Arc`; record order is
/// preserved exactly as found in the source file, since response order
/// depends on it.
#[derive(Debug, Clone)]
pub struct StudentStore {
    records: Vec<StudentRecord>,
    source: PathBuf,
}

impl StudentStore {
    /// Load the dataset from a JSON file containing an array of records
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();

        let text = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let records: Vec<StudentRecord> =
            serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if records.is_empty() {
            return Err(DatasetError::Empty {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            records,
            source: path.to_path_buf(),
        })
    }

    /// Build a store directly from in-memory records
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        Self {
            records,
            source: PathBuf::from("<memory>"),
        }
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }
}
