//! HTML service: landing page with the OTA and IPA install links.

use super::{ServiceContext, ServiceError, ServiceRequest, ServiceResponse, CONTENT_TYPE_HTML};
use crate::app::AppInfo;
use crate::artifact::Classifiers;
use crate::generate::{generate_html, LandingPage};
use crate::names::{
    BUNDLE_IDENTIFIER, BUNDLE_VERSION, IPA_CLASSIFIER, OTA_CLASSIFIER, TITLE,
};
use crate::request_url::{plist_request_url, sibling_service_url};

pub fn handle_html(
    ctx: &ServiceContext,
    req: &ServiceRequest,
) -> Result<ServiceResponse, ServiceError> {
    let referer = req.referer().ok_or(ServiceError::RefererRequired)?;
    let app = AppInfo::from_parts(
        req.param(TITLE),
        req.param(BUNDLE_IDENTIFIER),
        req.param(BUNDLE_VERSION),
    );
    let classifiers = Classifiers::new(req.param(IPA_CLASSIFIER), req.param(OTA_CLASSIFIER));

    let service_url = plist_service_url(ctx, req).ok_or(ServiceError::NoServiceUrl)?;
    let plist_url = plist_request_url(&service_url, referer, &app, &classifiers)?;

    tracing::info!(
        remote = req.remote(),
        referer,
        title = ?app.title(),
        bundle_identifier = ?app.bundle_identifier(),
        bundle_version = ?app.bundle_version(),
        ipa_classifier = ?classifiers.ipa(),
        ota_classifier = ?classifiers.ota(),
        "HTML request"
    );

    let extra = ctx.config.template_mapping();
    let page = LandingPage {
        referer,
        app: &app,
        classifiers: &classifiers,
        plist_url: &plist_url,
        extra: &extra,
    };
    let body = generate_html(&ctx.templates, ctx.config.html_template_path.as_deref(), &page)?;
    Ok(ServiceResponse {
        content_type: CONTENT_TYPE_HTML,
        body,
    })
}

/// Configured PLIST service URL, else the request URL with its last segment
/// swapped for the service marker.
fn plist_service_url(ctx: &ServiceContext, req: &ServiceRequest) -> Option<String> {
    match ctx.config.plist_service_url.as_deref().map(str::trim) {
        Some(url) if !url.is_empty() => Some(url.to_string()),
        _ => req
            .url
            .as_deref()
            .and_then(|url| sibling_service_url(url, &ctx.config.service_name)),
    }
}
