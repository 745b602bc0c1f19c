use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use super::ConfigError;

pub trait ConfigContentProvider {
    /// `Ok(None)` when no config has been stored yet.
    fn get_config_content(&self) -> Result<Option<String>, ConfigError>;
    fn set_config_content(&self, content: &str) -> Result<(), ConfigError>;
}

pub struct FileContentConfigProvider {
    file_path: PathBuf,
}

impl FileContentConfigProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    fn display_path(&self) -> String {
        self.file_path.display().to_string()
    }
}

impl ConfigContentProvider for FileContentConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(ConfigError::Read {
                path: self.display_path(),
                source,
            }),
        }
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        std::fs::write(&self.file_path, content).map_err(|source| ConfigError::Write {
            path: self.display_path(),
            source,
        })
    }
}

/// Keeps the config text in memory; used by tests and by callers that must
/// not touch the filesystem.
#[derive(Default)]
pub struct InMemoryConfigProvider {
    content: Mutex<Option<String>>,
}

impl InMemoryConfigProvider {
    pub fn new(content: Option<String>) -> Self {
        Self {
            content: Mutex::new(content),
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl ConfigContentProvider for InMemoryConfigProvider {
    fn get_config_content(&self) -> Result<Option<String>, ConfigError> {
        Ok(self.content())
    }

    fn set_config_content(&self, content: &str) -> Result<(), ConfigError> {
        *self
            .content
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(content.to_string());
        Ok(())
    }
}
