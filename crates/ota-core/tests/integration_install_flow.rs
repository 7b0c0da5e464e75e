//! Integration test: the full install flow across both services.
//!
//! Renders the build page, follows its HTML service link, takes the manifest
//! link from the landing page and asks the PLIST service for the manifest.

mod common;

use ota_core::generate::{generate_build_html, BuildPage};
use ota_core::service::{handle_html, handle_plist, ServiceContext, ServiceRequest};
use ota_core::template::TemplateRegistry;
use url::Url;

#[test]
fn build_page_to_manifest() {
    let html_service = Url::parse(common::HTML_SERVICE).unwrap();
    let app = common::app();
    let classifiers = common::classifiers();
    let build_page = generate_build_html(
        &TemplateRegistry::new(),
        None,
        &BuildPage {
            html_service_url: &html_service,
            app: &app,
            classifiers: &classifiers,
            google_analytics_id: None,
        },
    )
    .unwrap();

    // The browser opens the iframe with the build page as referer.
    let landing_url = common::quoted_after(&build_page, "<iframe src=\"");
    let ctx = ServiceContext::default();
    let landing = handle_html(
        &ctx,
        &ServiceRequest::from_url(landing_url)
            .unwrap()
            .with_header("Referer", common::REFERER),
    )
    .unwrap();
    assert!(landing.body.contains("Install App: My App"));
    assert!(landing.body.contains(common::IPA_URL));

    // The device fetches the manifest without any referer header.
    let manifest_url = common::quoted_after(&landing.body, "download-manifest&url=");
    assert!(manifest_url.starts_with("http://ota-server:8080/ota-service/PLIST/"));
    let manifest = handle_plist(&ctx, &ServiceRequest::from_url(manifest_url).unwrap()).unwrap();

    assert!(manifest.body.contains("<string>My App</string>"));
    assert!(manifest.body.contains("<string>com.example.MyApp</string>"));
    assert!(manifest.body.contains("<string>1.0.5</string>"));
    assert!(manifest.body.contains(&format!("<string>{}</string>", common::IPA_URL)));
}

#[test]
fn shared_context_across_threads() {
    let ctx = ServiceContext::default();
    let url = format!(
        "{}?title=T&bundleIdentifier=com.example.T&bundleVersion=1",
        common::HTML_SERVICE
    );
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let req = ServiceRequest::from_url(&url)
                    .unwrap()
                    .with_header("Referer", common::REFERER);
                let resp = handle_html(&ctx, &req).unwrap();
                assert!(resp.body.contains("Install App: T"));
            });
        }
    });
    assert_eq!(ctx.templates.len(), 1);
}
