//! Installer manifest (plist).

use super::{put, render};
use crate::app::AppInfo;
use crate::artifact::{derive_ipa_url, Classifiers};
use crate::error::Result;
use crate::names::{BUNDLE_IDENTIFIER, BUNDLE_VERSION, IPA_URL, TITLE};
use crate::template::{Mapping, TemplateRegistry, PLIST_TEMPLATE};

pub fn plist_mapping(referer: &str, app: &AppInfo, classifiers: &Classifiers) -> Result<Mapping> {
    let ipa_url = derive_ipa_url(referer, classifiers)?;
    let mut mapping = Mapping::new();
    mapping.insert(IPA_URL.to_string(), ipa_url.to_string());
    put(&mut mapping, BUNDLE_IDENTIFIER, app.bundle_identifier());
    put(&mut mapping, BUNDLE_VERSION, app.bundle_version());
    put(&mut mapping, TITLE, app.title());
    Ok(mapping)
}

/// Renders the manifest for the IPA next to `referer`.
pub fn generate_plist(
    registry: &TemplateRegistry,
    referer: &str,
    app: &AppInfo,
    classifiers: &Classifiers,
) -> Result<String> {
    let mapping = plist_mapping(referer, app, classifiers)?;
    render(registry, None, PLIST_TEMPLATE, &mapping)
}
