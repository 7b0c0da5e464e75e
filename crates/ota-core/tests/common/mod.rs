//! Shared fixtures for the integration tests.

use ota_core::app::AppInfo;
use ota_core::artifact::Classifiers;

pub const HTML_SERVICE: &str = "http://ota-server:8080/ota-service/HTML";
pub const REFERER: &str = "http://nexus:8081/repo/com/example/MyApp/1.0.5/MyApp-1.0.5-otaClassifier.htm";
pub const IPA_URL: &str = "http://nexus:8081/repo/com/example/MyApp/1.0.5/MyApp-1.0.5-ipaClassifier.ipa";

pub fn app() -> AppInfo {
    AppInfo::new("My App", "com.example.MyApp", "1.0.5")
}

pub fn classifiers() -> Classifiers {
    Classifiers::new(Some("ipaClassifier"), Some("otaClassifier"))
}

/// Value of the first `attr='...'` or `attr="..."` after `marker` in `html`.
pub fn quoted_after<'a>(html: &'a str, marker: &str) -> &'a str {
    let start = html.find(marker).expect("marker in page") + marker.len();
    let rest = &html[start..];
    let end = rest.find(['\'', '"']).expect("closing quote");
    &rest[..end]
}
