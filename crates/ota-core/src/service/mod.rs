//! Request handling for the PLIST and HTML services.
//!
//! Handlers are transport-agnostic: a [`ServiceRequest`] carries what an HTTP
//! front end would extract (query, headers, path, URL), and the result is a
//! [`ServiceResponse`] or a [`ServiceError`] with its status code.

mod html;
mod plist;

pub use html::handle_html;
pub use plist::handle_plist;

use thiserror::Error;
use url::Url;

use crate::config::OtaConfig;
use crate::error::OtaError;
use crate::names::REFERER;
use crate::template::TemplateRegistry;

pub const CONTENT_TYPE_PLIST: &str = "application/xml";
pub const CONTENT_TYPE_HTML: &str = "text/html";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Referer required")]
    RefererRequired,

    #[error("PLIST service URL unknown: set plist_service_url or provide the request URL")]
    NoServiceUrl,

    #[error(transparent)]
    Ota(#[from] OtaError),
}

impl ServiceError {
    /// HTTP status for this error: 400 for bad client input, 500 otherwise.
    pub fn status(&self) -> u16 {
        match self {
            ServiceError::RefererRequired => 400,
            ServiceError::NoServiceUrl => 500,
            ServiceError::Ota(err) => match err {
                OtaError::MalformedReference(_)
                | OtaError::InvalidUrl { .. }
                | OtaError::Codec(_) => 400,
                OtaError::TemplateNotFound(_)
                | OtaError::TemplateFileNotFound(_)
                | OtaError::Io(_) => 500,
            },
        }
    }
}

/// One incoming request, reduced to the parts the services read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceRequest {
    /// Decoded query parameters in order.
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    /// Request path, still percent-encoded (e.g. `/ota/PLIST/UmVm...`).
    pub uri: Option<String>,
    /// Request URL without the query string.
    pub url: Option<String>,
    pub remote_addr: Option<String>,
}

impl ServiceRequest {
    /// Splits an absolute request URL into query, path and base URL.
    pub fn from_url(url: &str) -> Result<Self, OtaError> {
        let parsed = Url::parse(url).map_err(|source| OtaError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let query = parsed
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        let uri = Some(parsed.path().to_string());
        let mut base = parsed;
        base.set_query(None);
        base.set_fragment(None);
        Ok(Self {
            query,
            headers: Vec::new(),
            uri,
            url: Some(base.to_string()),
            remote_addr: None,
        })
    }

    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_remote_addr(mut self, addr: &str) -> Self {
        self.remote_addr = Some(addr.to_string());
        self
    }

    /// First query value for `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// First header value for `name`, compared case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The `Referer` query parameter, or else the `Referer` header.
    pub fn referer(&self) -> Option<&str> {
        self.param(REFERER).or_else(|| self.header(REFERER))
    }

    fn remote(&self) -> &str {
        self.remote_addr.as_deref().unwrap_or("-")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceResponse {
    pub content_type: &'static str,
    pub body: String,
}

/// State shared by both services.
#[derive(Debug, Default)]
pub struct ServiceContext {
    pub config: OtaConfig,
    pub templates: TemplateRegistry,
}

impl ServiceContext {
    pub fn new(config: OtaConfig) -> Self {
        Self {
            config,
            templates: TemplateRegistry::new(),
        }
    }
}
