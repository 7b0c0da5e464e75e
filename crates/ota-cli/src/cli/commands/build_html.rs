//! Build-html command: render the page uploaded next to the IPA.

use anyhow::{Context, Result};
use ota_core::config;
use ota_core::generate::{generate_build_html, BuildPage};
use ota_core::template::TemplateRegistry;
use url::Url;

use super::flag_or_config;
use crate::cli::AppArgs;

pub fn run_build_html(
    app: &AppArgs,
    service_url: Option<&str>,
    google_analytics_id: Option<&str>,
    template: Option<&str>,
) -> Result<()> {
    let cfg = config::load_or_init()?;
    let service_url = flag_or_config(
        service_url,
        cfg.html_service_url.as_deref(),
        "html_service_url",
    )?;
    let html_service_url =
        Url::parse(&service_url).with_context(|| format!("parse {service_url}"))?;
    let app_info = app.app();
    let classifiers = app.classifiers();
    let page = BuildPage {
        html_service_url: &html_service_url,
        app: &app_info,
        classifiers: &classifiers,
        google_analytics_id: google_analytics_id.or(cfg.google_analytics_id.as_deref()),
    };
    let html = generate_build_html(&TemplateRegistry::new(), template, &page)?;
    print!("{html}");
    Ok(())
}
