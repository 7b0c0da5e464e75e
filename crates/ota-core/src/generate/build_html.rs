//! Build-time page uploaded next to the IPA. It embeds the HTML service.

use url::Url;

use super::render;
use crate::app::AppInfo;
use crate::artifact::Classifiers;
use crate::error::Result;
use crate::names::{
    BUNDLE_IDENTIFIER, BUNDLE_VERSION, GOOGLE_ANALYTICS_ID, HTML_SERVICE_URL, HTML_URL,
    IPA_CLASSIFIER, OTA_CLASSIFIER, TITLE,
};
use crate::request_url::html_service_url;
use crate::template::{Mapping, TemplateRegistry, BUILD_HTML_TEMPLATE};

#[derive(Debug, Clone, Copy)]
pub struct BuildPage<'a> {
    pub html_service_url: &'a Url,
    pub app: &'a AppInfo,
    pub classifiers: &'a Classifiers,
    pub google_analytics_id: Option<&'a str>,
}

/// Absent values render as empty strings: the page ends up in form fields.
pub fn build_html_mapping(page: &BuildPage<'_>) -> Result<Mapping> {
    let html_url = html_service_url(page.html_service_url, page.app, page.classifiers)?;
    let entries = [
        (HTML_URL, Some(html_url.as_str())),
        (HTML_SERVICE_URL, Some(page.html_service_url.as_str())),
        (TITLE, page.app.title()),
        (BUNDLE_IDENTIFIER, page.app.bundle_identifier()),
        (BUNDLE_VERSION, page.app.bundle_version()),
        (IPA_CLASSIFIER, page.classifiers.ipa()),
        (OTA_CLASSIFIER, page.classifiers.ota()),
        (GOOGLE_ANALYTICS_ID, page.google_analytics_id),
    ];
    Ok(entries
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.unwrap_or_default().to_string()))
        .collect())
}

pub fn generate_build_html(
    registry: &TemplateRegistry,
    template: Option<&str>,
    page: &BuildPage<'_>,
) -> Result<String> {
    let mapping = build_html_mapping(page)?;
    render(registry, template, BUILD_HTML_TEMPLATE, &mapping)
}
