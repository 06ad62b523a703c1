use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("{path}: missing field `{field}`")]
    MissingField { path: PathBuf, field: &'static str },
}

/// Raw shape of the host application's package configuration file.
///
/// Only the fields the generator needs are modeled; everything else in the
/// manifest is ignored.
#[derive(Debug, Deserialize)]
struct RawManifest {
    version: Option<String>,
    jupyterlab: Option<RawJupyterLabSection>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJupyterLabSection {
    singleton_packages: Option<Vec<String>>,
}

/// The host package registry: the external source of core module names.
///
/// The generator only requires read access to the singleton name collection
/// and the host version; it needs nothing else from the manifest.
#[derive(Debug, Clone)]
pub struct CoreRegistry {
    /// Host application version, reported before the map is written
    pub version: String,
    /// Singleton packages always present in the host environment
    pub singletons: Vec<String>,
    /// Path the registry was loaded from
    pub path: PathBuf,
}

impl CoreRegistry {
    /// Load the registry from a `package.json`-style file.
    ///
    /// Fails immediately on a missing file, malformed JSON, or an absent
    /// `jupyterlab.singletonPackages` field; nothing is written downstream
    /// when loading fails.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = fs::read_to_string(path)?;
        let manifest: RawManifest = serde_json::from_str(&content)?;

        let singletons = manifest
            .jupyterlab
            .and_then(|section| section.singleton_packages)
            .ok_or_else(|| RegistryError::MissingField {
                path: path.to_path_buf(),
                field: "jupyterlab.singletonPackages",
            })?;

        let version = manifest.version.ok_or_else(|| RegistryError::MissingField {
            path: path.to_path_buf(),
            field: "version",
        })?;

        Ok(Self {
            version,
            singletons,
            path: path.to_path_buf(),
        })
    }
}
