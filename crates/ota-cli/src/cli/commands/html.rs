//! Html command: render the landing page the HTML service would return.

use anyhow::Result;
use ota_core::config;
use ota_core::service::{handle_html, ServiceContext};

use super::service_request;
use crate::cli::AppArgs;

pub fn run_html(
    referer: &str,
    app: &AppArgs,
    plist_service_url: Option<&str>,
    template: Option<&str>,
) -> Result<()> {
    let mut cfg = config::load_or_init()?;
    if let Some(url) = plist_service_url {
        cfg.plist_service_url = Some(url.to_string());
    }
    if let Some(template) = template {
        cfg.html_template_path = Some(template.to_string());
    }
    let ctx = ServiceContext::new(cfg);
    let resp = handle_html(&ctx, &service_request(referer, app))?;
    print!("{}", resp.body);
    Ok(())
}
