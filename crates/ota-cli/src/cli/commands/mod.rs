//! CLI command handlers. Each command is in its own file.

mod build_html;
mod codec;
mod completions;
mod html;
mod parse_path;
mod plist;
mod urls;

pub use build_html::run_build_html;
pub use codec::{run_decode, run_encode, run_url_decode, run_url_encode};
pub use completions::run_completions;
pub use html::run_html;
pub use parse_path::run_parse_path;
pub use plist::run_plist;
pub use urls::{run_html_url, run_ipa_url, run_plist_url};

use anyhow::{bail, Result};
use ota_core::names::{
    BUNDLE_IDENTIFIER, BUNDLE_VERSION, IPA_CLASSIFIER, OTA_CLASSIFIER, REFERER, TITLE,
};
use ota_core::service::ServiceRequest;

use crate::cli::AppArgs;

/// A command-line value, else the configured one; `key` names the config field.
fn flag_or_config(flag: Option<&str>, configured: Option<&str>, key: &str) -> Result<String> {
    match flag.or(configured).map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => bail!("no {key}: pass it on the command line or set it in the config file"),
    }
}

/// The query-style request a browser would send for this app.
fn service_request(referer: &str, app: &AppArgs) -> ServiceRequest {
    let fields = [
        (REFERER, Some(referer)),
        (TITLE, app.title.as_deref()),
        (BUNDLE_IDENTIFIER, app.bundle_identifier.as_deref()),
        (BUNDLE_VERSION, app.bundle_version.as_deref()),
        (IPA_CLASSIFIER, app.ipa_classifier.as_deref()),
        (OTA_CLASSIFIER, app.ota_classifier.as_deref()),
    ];
    ServiceRequest {
        query: fields
            .into_iter()
            .filter_map(|(k, v)| v.map(|v| (k.to_string(), v.to_string())))
            .collect(),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_config() {
        assert_eq!(
            flag_or_config(Some("http://a/PLIST"), Some("http://b/PLIST"), "plist_service_url")
                .unwrap(),
            "http://a/PLIST"
        );
        assert_eq!(
            flag_or_config(None, Some(" http://b/PLIST "), "plist_service_url").unwrap(),
            "http://b/PLIST"
        );
        assert!(flag_or_config(None, None, "plist_service_url").is_err());
        assert!(flag_or_config(Some(""), None, "plist_service_url").is_err());
    }

    #[test]
    fn service_request_skips_missing_fields() {
        let app = AppArgs {
            title: Some("MyApp".to_string()),
            ipa_classifier: Some("ipaClassifier".to_string()),
            ..Default::default()
        };
        let req = service_request("http://h/p/MyApp.htm", &app);
        assert_eq!(req.referer(), Some("http://h/p/MyApp.htm"));
        assert_eq!(req.param(TITLE), Some("MyApp"));
        assert_eq!(req.param(IPA_CLASSIFIER), Some("ipaClassifier"));
        assert_eq!(req.param(BUNDLE_VERSION), None);
        assert_eq!(req.query.len(), 3);
    }
}
