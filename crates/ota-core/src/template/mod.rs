//! Plain variable substitution for the plist and HTML templates.
//!
//! A template is text with `$name` or `${name}` references. Rendering
//! replaces every reference that has an entry in the mapping and leaves the
//! others exactly as written, so a page rendered without e.g. a
//! `googleAnalyticsId` still shows `$googleAnalyticsId`.

mod registry;
mod source;

pub use registry::TemplateRegistry;
pub use source::{builtin, TemplateSource, BUILD_HTML_TEMPLATE, HTML_TEMPLATE, PLIST_TEMPLATE};

use std::collections::BTreeMap;

/// Variable name -> rendered value.
pub type Mapping = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    Text(String),
    Var { name: String, raw: String },
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    parts: Vec<Part>,
}

impl Template {
    pub fn parse(name: &str, source: &str) -> Self {
        let mut parts = Vec::new();
        let mut text = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find('$') {
            text.push_str(&rest[..pos]);
            let after = &rest[pos..];
            match reference(after) {
                Some((var, len)) => {
                    if !text.is_empty() {
                        parts.push(Part::Text(std::mem::take(&mut text)));
                    }
                    parts.push(Part::Var {
                        name: var.to_string(),
                        raw: after[..len].to_string(),
                    });
                    rest = &after[len..];
                }
                None => {
                    text.push('$');
                    rest = &after[1..];
                }
            }
        }
        text.push_str(rest);
        if !text.is_empty() {
            parts.push(Part::Text(text));
        }

        Self {
            name: name.to_string(),
            parts,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of all referenced variables, in order of first appearance.
    pub fn variables(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for part in &self.parts {
            if let Part::Var { name, .. } = part {
                if !seen.contains(&name.as_str()) {
                    seen.push(name);
                }
            }
        }
        seen
    }

    pub fn render(&self, mapping: &Mapping) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                Part::Text(t) => out.push_str(t),
                Part::Var { name, raw } => match mapping.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(raw),
                },
            }
        }
        out
    }
}

/// Parses a reference at the start of `s` (which begins with `$`).
/// Returns the variable name and the byte length of the whole reference.
fn reference(s: &str) -> Option<(&str, usize)> {
    let body = &s[1..];
    if let Some(braced) = body.strip_prefix('{') {
        let end = braced.find('}')?;
        let name = &braced[..end];
        return is_identifier(name).then_some((name, end + 3));
    }
    let len = identifier_len(body);
    (len > 0).then(|| (&body[..len], len + 1))
}

fn identifier_len(s: &str) -> usize {
    let mut chars = s.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() => {}
        _ => return 0,
    }
    chars
        .find(|(_, c)| !(c.is_ascii_alphanumeric() || *c == '_'))
        .map_or(s.len(), |(i, _)| i)
}

fn is_identifier(s: &str) -> bool {
    !s.is_empty() && identifier_len(s) == s.len()
}
