//! Application settings file
//!
//! Reads the `ConnectionStrings` section of an `appsettings.json` file:
//!
//! ```json
//! { "ConnectionStrings": { "DefaultConnection": "Data Source=dishmenu.db" } }
//! ```
//!
//! Other sections are ignored.

use dishmenu_core_types::Sensitive;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::errors::MenuError;

/// Settings file looked up in the working directory by default
pub const DEFAULT_SETTINGS_FILE: &str = "appsettings.json";

/// Connection string entry used when none is named
pub const DEFAULT_CONNECTION_NAME: &str = "DefaultConnection";

/// Parsed settings file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    #[serde(default)]
    connection_strings: BTreeMap<String, Sensitive<String>>,
}

impl AppSettings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MenuError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MenuError::SettingsNotFound {
                path: path.display().to_string(),
            },
            _ => MenuError::SettingsMalformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            },
        })?;

        Self::from_json_str(&text).map_err(|reason| MenuError::SettingsMalformed {
            path: path.display().to_string(),
            reason,
        })
    }

    /// Parse settings from JSON text
    pub fn from_json_str(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Look up a named connection string
    pub fn connection_string(&self, name: &str) -> Result<&Sensitive<String>, MenuError> {
        self.connection_strings
            .get(name)
            .ok_or_else(|| MenuError::ConnectionStringMissing {
                name: name.to_string(),
            })
    }
}
