//! IPA URL derivation.
//!
//! The landing page (e.g. `MyApp-OTA.htm`) is uploaded next to the IPA it
//! installs, so the IPA URL is computed from the referer by swapping the
//! extension and, if requested, the classifier suffix of the file name.

mod replace;

pub use replace::replace_last;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{OtaError, Result};

/// Extension (with dot) of the installable artifact.
pub const IPA_EXTENSION: &str = ".ipa";

/// Longest accepted referer extension, dot included (`.html`).
const MAX_EXTENSION_CHARS: usize = 5;

/// Build variant classifiers of the IPA and of the OTA landing page.
///
/// Blank classifiers are stored as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classifiers {
    pub ipa: Option<String>,
    pub ota: Option<String>,
}

impl Classifiers {
    pub fn new(ipa: Option<&str>, ota: Option<&str>) -> Self {
        Self {
            ipa: non_blank(ipa),
            ota: non_blank(ota),
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn ipa(&self) -> Option<&str> {
        self.ipa.as_deref()
    }

    pub fn ota(&self) -> Option<&str> {
        self.ota.as_deref()
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Derives the URL of the IPA that sits next to the landing page `referer`.
///
/// - `http://h/p/test.htm`, no classifiers -> `http://h/p/test.ipa`
/// - `http://h/p/test-OTA.htm`, ipa `PROD`, ota `OTA` -> `http://h/p/test-PROD.ipa`
/// - `http://h/p/test-OTA.htm`, ota `OTA` only -> `http://h/p/test.ipa`
/// - `http://h/p/test.htm`, ipa `PROD` only -> `http://h/p/test-PROD.ipa`
///
/// Classifier substitution only touches the file name, never the directories.
///
/// The result is a parsed [`Url`], so it comes back normalized: a default
/// port is dropped and characters such as spaces are percent-encoded
/// (`http://h:80/p/My App.htm` -> `http://h/p/My%20App.ipa`).
pub fn derive_ipa_url(referer: &str, classifiers: &Classifiers) -> Result<Url> {
    let idx = match referer.rfind('.') {
        Some(idx) if idx > 0 && referer[idx..].chars().count() <= MAX_EXTENSION_CHARS => idx,
        _ => return Err(OtaError::MalformedReference(referer.to_string())),
    };

    let without_ext = &referer[..idx];
    let name_start = without_ext.rfind('/').map_or(0, |slash| slash + 1);
    let (dir, stem) = without_ext.split_at(name_start);

    let stem = match (classifiers.ipa(), classifiers.ota()) {
        (Some(ipa), Some(ota)) => replace_last(stem, &format!("-{ota}"), &format!("-{ipa}")),
        (None, Some(ota)) => replace_last(stem, &format!("-{ota}"), ""),
        (Some(ipa), None) => format!("{stem}-{ipa}"),
        (None, None) => stem.to_string(),
    };

    let ipa_url = format!("{dir}{stem}{IPA_EXTENSION}");
    tracing::trace!(referer, %ipa_url, "derived ipa url");
    Url::parse(&ipa_url).map_err(|_| OtaError::MalformedReference(referer.to_string()))
}
