//! Outbound service URLs.
//!
//! Two shapes are produced:
//! - query style, `base?k1=v1&k2=v2`, for the HTML service;
//! - path style, `base/enc(k1=v1)/enc(k2=v2)`, for the PLIST service, where
//!   `enc` is [`codec::encode`].
//!
//! Parameters with an absent or empty value are left out entirely.

use url::Url;

use crate::app::AppInfo;
use crate::artifact::Classifiers;
use crate::codec;
use crate::error::{OtaError, Result};
use crate::names::{
    BUNDLE_IDENTIFIER, BUNDLE_VERSION, IPA_CLASSIFIER, OTA_CLASSIFIER, REFERER, TITLE,
};

/// A named parameter; `None` or `Some("")` is omitted from built URLs.
pub type Param<'a> = (&'a str, Option<&'a str>);

fn present<'a>(params: &'a [Param<'a>]) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
    params
        .iter()
        .filter_map(|(k, v)| v.filter(|v| !v.is_empty()).map(|v| (*k, v)))
}

/// Builds `base?k1=v1&k2=v2`; values are [`codec::url_encode`]d.
pub fn build_query_url(base: &str, params: &[Param<'_>]) -> String {
    let mut url = String::from(base);
    let mut sep = '?';
    for (key, value) in present(params) {
        url.push(sep);
        url.push_str(key);
        url.push('=');
        url.push_str(&codec::url_encode(value));
        sep = '&';
    }
    url
}

/// Builds `base/enc(k1=v1)/enc(k2=v2)`; trailing `/` of `base` are dropped first.
pub fn build_path_url(base: &str, params: &[Param<'_>]) -> String {
    let mut url = String::from(trim_prefix(base));
    for (key, value) in present(params) {
        url.push('/');
        url.push_str(&codec::encode(&format!("{key}={value}")));
    }
    url
}

/// Joins `prefix` and `suffix` with exactly one `/`.
pub fn join_url(prefix: &str, suffix: &str) -> Result<Url> {
    parse_url(&format!("{}/{}", trim_prefix(prefix), suffix))
}

/// URL of the PLIST manifest for one app, as linked from the landing page.
///
/// Segment order: `Referer`, `title`, `bundleIdentifier`, `bundleVersion`,
/// `ipaClassifier`, `otaClassifier`.
pub fn plist_request_url(
    plist_service_url: &str,
    referer: &str,
    app: &AppInfo,
    classifiers: &Classifiers,
) -> Result<Url> {
    let url = build_path_url(
        plist_service_url,
        &[
            (REFERER, Some(referer)),
            (TITLE, app.title()),
            (BUNDLE_IDENTIFIER, app.bundle_identifier()),
            (BUNDLE_VERSION, app.bundle_version()),
            (IPA_CLASSIFIER, classifiers.ipa()),
            (OTA_CLASSIFIER, classifiers.ota()),
        ],
    );
    parse_url(&url)
}

/// URL of the HTML service for one app, embedded in the build landing page.
pub fn html_service_url(
    html_service_url: &Url,
    app: &AppInfo,
    classifiers: &Classifiers,
) -> Result<Url> {
    let url = build_query_url(
        html_service_url.as_str(),
        &[
            (TITLE, app.title()),
            (BUNDLE_IDENTIFIER, app.bundle_identifier()),
            (BUNDLE_VERSION, app.bundle_version()),
            (IPA_CLASSIFIER, classifiers.ipa()),
            (OTA_CLASSIFIER, classifiers.ota()),
        ],
    );
    parse_url(&url)
}

/// Replaces the last path segment of `request_url` with `service_name`.
///
/// `http://host/ota/HTML` -> `http://host/ota/PLIST`. Returns `None` when
/// the URL has no `/` at all.
pub fn sibling_service_url(request_url: &str, service_name: &str) -> Option<String> {
    let (parent, _) = request_url.rsplit_once('/')?;
    Some(format!("{parent}/{service_name}"))
}

fn trim_prefix(prefix: &str) -> &str {
    prefix.trim().trim_end_matches('/')
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|source| OtaError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
