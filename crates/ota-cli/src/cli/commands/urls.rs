//! URL commands: IPA, PLIST service and HTML service URLs.

use anyhow::{Context, Result};
use ota_core::artifact::{derive_ipa_url, Classifiers};
use ota_core::config;
use ota_core::request_url::{html_service_url, plist_request_url};
use url::Url;

use super::flag_or_config;
use crate::cli::AppArgs;

pub fn run_ipa_url(referer: &str, classifiers: &Classifiers) -> Result<()> {
    let url = derive_ipa_url(referer, classifiers)?;
    println!("{url}");
    Ok(())
}

pub fn run_plist_url(referer: &str, app: &AppArgs, service_url: Option<&str>) -> Result<()> {
    let cfg = config::load_or_init()?;
    let service_url = flag_or_config(
        service_url,
        cfg.plist_service_url.as_deref(),
        "plist_service_url",
    )?;
    let url = plist_request_url(&service_url, referer, &app.app(), &app.classifiers())?;
    println!("{url}");
    Ok(())
}

pub fn run_html_url(app: &AppArgs, service_url: Option<&str>) -> Result<()> {
    let cfg = config::load_or_init()?;
    let service_url = flag_or_config(
        service_url,
        cfg.html_service_url.as_deref(),
        "html_service_url",
    )?;
    let base = Url::parse(&service_url).with_context(|| format!("parse {service_url}"))?;
    let url = html_service_url(&base, &app.app(), &app.classifiers())?;
    println!("{url}");
    Ok(())
}
