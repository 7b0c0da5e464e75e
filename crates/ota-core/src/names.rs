//! Parameter and template variable names shared by the services.

pub const REFERER: &str = "Referer";
pub const TITLE: &str = "title";
pub const BUNDLE_IDENTIFIER: &str = "bundleIdentifier";
pub const BUNDLE_VERSION: &str = "bundleVersion";
pub const IPA_CLASSIFIER: &str = "ipaClassifier";
pub const OTA_CLASSIFIER: &str = "otaClassifier";

pub const IPA_URL: &str = "ipaUrl";
pub const PLIST_URL: &str = "plistUrl";
pub const HTML_URL: &str = "htmlUrl";
pub const HTML_SERVICE_URL: &str = "htmlServiceUrl";
pub const GOOGLE_ANALYTICS_ID: &str = "googleAnalyticsId";

/// Default marker segment of the PLIST service in request paths.
pub const PLIST_SERVICE_NAME: &str = "PLIST";
