//! Plist command: render the manifest the PLIST service would return.

use anyhow::Result;
use ota_core::config;
use ota_core::service::{handle_plist, ServiceContext};

use super::service_request;
use crate::cli::AppArgs;

pub fn run_plist(referer: &str, app: &AppArgs) -> Result<()> {
    let ctx = ServiceContext::new(config::load_or_init()?);
    let resp = handle_plist(&ctx, &service_request(referer, app))?;
    print!("{}", resp.body);
    Ok(())
}
