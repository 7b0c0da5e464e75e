//! Where templates come from: embedded defaults or files on disk.

use std::fs;
use std::path::PathBuf;

use super::Template;
use crate::error::{OtaError, Result};

/// Manifest consumed by the installer.
pub const PLIST_TEMPLATE: &str = "template.plist";
/// Landing page rendered by the HTML service.
pub const HTML_TEMPLATE: &str = "template.html";
/// Page generated at build time and uploaded next to the IPA.
pub const BUILD_HTML_TEMPLATE: &str = "buildTemplate.html";

/// Source text of an embedded template.
pub fn builtin(name: &str) -> Option<&'static str> {
    match name {
        PLIST_TEMPLATE => Some(include_str!("../../templates/template.plist")),
        HTML_TEMPLATE => Some(include_str!("../../templates/template.html")),
        BUILD_HTML_TEMPLATE => Some(include_str!("../../templates/buildTemplate.html")),
        _ => None,
    }
}

/// A template identifier resolved to its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin(String),
    File(PathBuf),
}

impl TemplateSource {
    /// Identifiers containing a path separator are files, everything else is
    /// looked up among the embedded templates.
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.contains('/') || identifier.contains('\\') {
            TemplateSource::File(PathBuf::from(identifier))
        } else {
            TemplateSource::Builtin(identifier.to_string())
        }
    }

    pub fn load(&self) -> Result<Template> {
        match self {
            TemplateSource::Builtin(name) => builtin(name)
                .map(|text| Template::parse(name, text))
                .ok_or_else(|| OtaError::TemplateNotFound(name.clone())),
            TemplateSource::File(path) => {
                if !path.is_file() {
                    return Err(OtaError::TemplateFileNotFound(path.clone()));
                }
                let text = fs::read_to_string(path)?;
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                tracing::debug!("loaded template {} from {}", name, path.display());
                Ok(Template::parse(&name, &text))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn identifiers_with_separators_are_files() {
        assert_eq!(
            TemplateSource::from_identifier("template.html"),
            TemplateSource::Builtin("template.html".to_string())
        );
        assert_eq!(
            TemplateSource::from_identifier("/etc/ota/page.html"),
            TemplateSource::File(PathBuf::from("/etc/ota/page.html"))
        );
        assert_eq!(
            TemplateSource::from_identifier(r"C:\ota\page.html"),
            TemplateSource::File(PathBuf::from(r"C:\ota\page.html"))
        );
    }

    #[test]
    fn loads_builtins() {
        for name in [PLIST_TEMPLATE, HTML_TEMPLATE, BUILD_HTML_TEMPLATE] {
            let t = TemplateSource::from_identifier(name).load().unwrap();
            assert_eq!(t.name(), name);
        }
    }

    #[test]
    fn unknown_builtin_is_not_found() {
        assert!(matches!(
            TemplateSource::from_identifier("doesnotexist.htm").load(),
            Err(OtaError::TemplateNotFound(_))
        ));
    }

    #[test]
    fn loads_file_by_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alternativeTemplate.html");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "ALTERNATIVE HTML TEMPLATE $title").unwrap();
        drop(f);

        let t = TemplateSource::from_identifier(path.to_str().unwrap())
            .load()
            .unwrap();
        assert_eq!(t.name(), "alternativeTemplate.html");
        assert_eq!(t.variables(), vec!["title"]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doesnotexist.htm");
        assert!(matches!(
            TemplateSource::from_identifier(path.to_str().unwrap()).load(),
            Err(OtaError::TemplateFileNotFound(_))
        ));
    }
}
