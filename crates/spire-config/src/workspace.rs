use std::path::{Path, PathBuf};

use crate::{parse_settings, Settings, SettingsError};

const DEFAULT_WORKSPACE_PATH: &str = ".config/spire";
const SETTINGS_FILE_NAME: &str = "spire.yaml";

/// Directory holding the settings file.
pub struct Workspace {
    path: PathBuf,
}

impl Workspace {
    pub fn new(path: Option<&Path>) -> Result<Self, SettingsError> {
        let path = match path {
            Some(path) => path.to_owned(),
            None => Self::default_path()?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn settings_path(&self) -> PathBuf {
        self.path.join(SETTINGS_FILE_NAME)
    }

    /// Load the workspace settings, falling back to defaults when the file is absent.
    pub fn load(&self) -> Result<Settings, SettingsError> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(Settings::default());
        }
        load_settings(&path)
    }

    pub fn default_path() -> Result<PathBuf, SettingsError> {
        let path = std::env::var("HOME")
            .map(PathBuf::from)
            .map(|p| p.join(DEFAULT_WORKSPACE_PATH))
            .map_err(|_| SettingsError::EnvVarNotSet("HOME".to_string()))?;

        Ok(path)
    }
}

/// Read and parse a settings file.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    if !path.is_file() {
        return Err(SettingsError::SettingsNotFound(path.display().to_string()));
    }
    let input = std::fs::read_to_string(path)?;
    parse_settings(&input)
}
