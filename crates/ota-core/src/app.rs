//! App metadata carried through the services.

use serde::{Deserialize, Serialize};

/// Title, bundle identifier and version of the app being installed.
///
/// Each field is optional because requests may omit it; templates then
/// render the variable reference unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    pub title: Option<String>,
    pub bundle_identifier: Option<String>,
    pub bundle_version: Option<String>,
}

impl AppInfo {
    pub fn new(title: &str, bundle_identifier: &str, bundle_version: &str) -> Self {
        Self {
            title: Some(title.to_string()),
            bundle_identifier: Some(bundle_identifier.to_string()),
            bundle_version: Some(bundle_version.to_string()),
        }
    }

    /// Builds from request values that may each be missing.
    pub fn from_parts(
        title: Option<&str>,
        bundle_identifier: Option<&str>,
        bundle_version: Option<&str>,
    ) -> Self {
        Self {
            title: title.map(str::to_string),
            bundle_identifier: bundle_identifier.map(str::to_string),
            bundle_version: bundle_version.map(str::to_string),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn bundle_identifier(&self) -> Option<&str> {
        self.bundle_identifier.as_deref()
    }

    pub fn bundle_version(&self) -> Option<&str> {
        self.bundle_version.as_deref()
    }
}
