//! Landing page served by the HTML service.

use url::Url;

use super::{put, render};
use crate::app::AppInfo;
use crate::artifact::{derive_ipa_url, Classifiers};
use crate::error::Result;
use crate::names::{BUNDLE_IDENTIFIER, IPA_URL, PLIST_URL, TITLE};
use crate::template::{Mapping, TemplateRegistry, HTML_TEMPLATE};

/// Inputs of the landing page with the OTA and IPA install links.
#[derive(Debug, Clone, Copy)]
pub struct LandingPage<'a> {
    pub referer: &'a str,
    pub app: &'a AppInfo,
    pub classifiers: &'a Classifiers,
    /// Full PLIST service URL for this app, see [`crate::request_url::plist_request_url`].
    pub plist_url: &'a Url,
    /// Additional template variables from the configuration (e.g. `googleAnalyticsId`).
    /// The page's own variables take precedence.
    pub extra: &'a Mapping,
}

pub fn html_mapping(page: &LandingPage<'_>) -> Result<Mapping> {
    let ipa_url = derive_ipa_url(page.referer, page.classifiers)?;
    let mut mapping = page.extra.clone();
    mapping.insert(IPA_URL.to_string(), ipa_url.to_string());
    put(&mut mapping, BUNDLE_IDENTIFIER, page.app.bundle_identifier());
    mapping.insert(PLIST_URL.to_string(), page.plist_url.to_string());
    put(&mut mapping, TITLE, page.app.title());
    Ok(mapping)
}

/// Renders the landing page with `template` (default `template.html`).
pub fn generate_html(
    registry: &TemplateRegistry,
    template: Option<&str>,
    page: &LandingPage<'_>,
) -> Result<String> {
    let mapping = html_mapping(page)?;
    render(registry, template, HTML_TEMPLATE, &mapping)
}
