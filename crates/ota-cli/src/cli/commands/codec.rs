//! Token and form-encoding commands.

use anyhow::{Context, Result};
use ota_core::codec;

pub fn run_encode(value: &str) {
    println!("{}", codec::encode(value));
}

pub fn run_decode(token: &str) -> Result<()> {
    let decoded = codec::decode(token).with_context(|| format!("decode {token:?}"))?;
    println!("{decoded}");
    Ok(())
}

pub fn run_url_encode(value: &str) {
    println!("{}", codec::url_encode(value));
}

pub fn run_url_decode(value: &str) -> Result<()> {
    let decoded = codec::url_decode(value).with_context(|| format!("url-decode {value:?}"))?;
    println!("{decoded}");
    Ok(())
}
