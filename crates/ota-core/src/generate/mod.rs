//! Document generation: plist manifest, service landing page, build page.
//!
//! Each generator turns its inputs into a [`Mapping`] and renders it with a
//! template taken from a caller-owned [`TemplateRegistry`].

mod build_html;
mod html;
mod plist;

pub use build_html::{build_html_mapping, generate_build_html, BuildPage};
pub use html::{generate_html, html_mapping, LandingPage};
pub use plist::{generate_plist, plist_mapping};

use crate::error::Result;
use crate::template::{Mapping, TemplateRegistry};

/// Blank or missing identifiers fall back to `default`.
pub fn template_identifier<'a>(identifier: Option<&'a str>, default: &'a str) -> &'a str {
    match identifier.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => default,
    }
}

fn render(
    registry: &TemplateRegistry,
    identifier: Option<&str>,
    default: &str,
    mapping: &Mapping,
) -> Result<String> {
    let template = registry.get(template_identifier(identifier, default))?;
    Ok(template.render(mapping))
}

fn put(mapping: &mut Mapping, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        mapping.insert(key.to_string(), v.to_string());
    }
}
