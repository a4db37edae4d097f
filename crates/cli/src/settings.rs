use std::{
    fs, io,
    path::{Path, PathBuf},
};

use ::log::debug;
use liftcalc_domain::{Formula, WeightUnit};

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, Error>;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid settings in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub formula: Formula,
    pub output: Output,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Output {
    #[default]
    Text,
    Json,
}

/// Settings stored as JSON in a file. Without a file, or if the file does not
/// exist, the defaults apply.
pub struct FileSettings {
    path: Option<PathBuf>,
}

impl FileSettings {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path.map(Path::to_path_buf),
        }
    }
}

impl SettingsRepository for FileSettings {
    fn read_settings(&self) -> Result<Settings, Error> {
        let Some(path) = &self.path else {
            return Ok(Settings::default());
        };

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("settings file {} not found, using defaults", path.display());
                return Ok(Settings::default());
            }
            Err(source) => {
                return Err(Error::Io {
                    path: path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })
    }
}
