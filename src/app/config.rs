//! Loading of the JSON configuration documents.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{AppError, RegistryConfig, SourceControlConfig};

/// Read and decode a source-control configuration document.
pub fn load_source_control_config(path: &Path) -> Result<SourceControlConfig, AppError> {
    read_document(path)
}

/// Read and decode a registry configuration document.
pub fn load_registry_config(path: &Path) -> Result<RegistryConfig, AppError> {
    read_document(path)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let content = fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| AppError::ParseError {
        what: path.display().to_string(),
        details: e.to_string(),
    })
}
