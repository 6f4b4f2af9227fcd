//! Reference data source configuration.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::embedded;
use crate::error::{Result, StandardsError};

/// Environment variable for loading the tables from a directory instead of
/// the embedded copies.
pub const DATA_DIR_ENV_VAR: &str = "IDCHECK_DATA_DIR";

/// Where the reference tables come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataSource {
    /// Tables compiled into the library.
    #[default]
    Embedded,
    /// A directory containing `iban-formats.txt` and `iso4217-currencies.txt`.
    Directory(PathBuf),
}

/// Configuration for building the reference tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataConfig {
    pub source: DataSource,
}

impl DataConfig {
    /// Use the embedded tables.
    pub fn embedded() -> Self {
        Self::default()
    }

    /// Read the tables from `dir`.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: DataSource::Directory(dir.into()),
        }
    }

    /// Resolve the source from the environment.
    ///
    /// Uses the directory named by `IDCHECK_DATA_DIR` when it is set and
    /// non-empty, otherwise the embedded tables.
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV_VAR) {
            Ok(dir) if !dir.trim().is_empty() => Self::directory(dir),
            _ => Self::embedded(),
        }
    }

    /// Read the IBAN table. Returns the table name and its text.
    pub(crate) fn iban_formats(&self) -> Result<(String, Cow<'static, str>)> {
        self.read(embedded::IBAN_FORMATS_FILE, embedded::IBAN_FORMATS)
    }

    /// Read the currency table. Returns the table name and its text.
    pub(crate) fn currencies(&self) -> Result<(String, Cow<'static, str>)> {
        self.read(embedded::CURRENCIES_FILE, embedded::CURRENCIES)
    }

    fn read(
        &self,
        file_name: &str,
        embedded: &'static str,
    ) -> Result<(String, Cow<'static, str>)> {
        match &self.source {
            DataSource::Embedded => Ok((format!("embedded:{file_name}"), Cow::Borrowed(embedded))),
            DataSource::Directory(dir) => {
                let path = dir.join(file_name);
                let content = read_table(dir, &path)?;
                Ok((path.display().to_string(), Cow::Owned(content)))
            }
        }
    }
}

fn read_table(dir: &Path, path: &Path) -> Result<String> {
    if !dir.is_dir() {
        return Err(StandardsError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).map_err(|source| StandardsError::Io {
        path: path.to_path_buf(),
        source,
    })
}
