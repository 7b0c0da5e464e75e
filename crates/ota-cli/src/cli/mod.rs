//! CLI for the OTA service.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ota_core::app::AppInfo;
use ota_core::artifact::Classifiers;

use commands::{
    run_build_html, run_completions, run_decode, run_encode, run_html, run_html_url, run_ipa_url,
    run_parse_path, run_plist, run_plist_url, run_url_decode, run_url_encode,
};

/// Top-level CLI for the OTA service.
#[derive(Debug, Parser)]
#[command(name = "ota")]
#[command(about = "OTA: over-the-air install links, manifests and landing pages", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// App metadata and artifact classifiers shared by the URL and page commands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct AppArgs {
    /// App title shown on the device.
    #[arg(long)]
    pub title: Option<String>,

    /// Bundle identifier, e.g. com.example.MyApp.
    #[arg(long)]
    pub bundle_identifier: Option<String>,

    /// Bundle version, e.g. 1.0.2.
    #[arg(long)]
    pub bundle_version: Option<String>,

    /// Classifier of the IPA artifact.
    #[arg(long)]
    pub ipa_classifier: Option<String>,

    /// Classifier of the landing page artifact.
    #[arg(long)]
    pub ota_classifier: Option<String>,
}

impl AppArgs {
    pub fn app(&self) -> AppInfo {
        AppInfo::from_parts(
            self.title.as_deref(),
            self.bundle_identifier.as_deref(),
            self.bundle_version.as_deref(),
        )
    }

    pub fn classifiers(&self) -> Classifiers {
        Classifiers::new(self.ipa_classifier.as_deref(), self.ota_classifier.as_deref())
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Encode a value into a path token (base64, then form-encoded).
    Encode {
        value: String,
    },

    /// Decode a path token produced by `encode`.
    Decode {
        token: String,
    },

    /// Form-encode a value (space becomes `+`).
    UrlEncode {
        value: String,
    },

    /// Decode a form-encoded value.
    UrlDecode {
        value: String,
    },

    /// Print the IPA URL derived from a landing page URL.
    IpaUrl {
        /// Landing page URL, e.g. http://host/path/MyApp-otaClassifier.htm.
        referer: String,

        #[arg(long)]
        ipa_classifier: Option<String>,

        #[arg(long)]
        ota_classifier: Option<String>,
    },

    /// Print the PLIST service URL for an app.
    PlistUrl {
        /// Landing page URL the manifest belongs to.
        referer: String,

        #[command(flatten)]
        app: AppArgs,

        /// PLIST service base URL (default: plist_service_url from config).
        #[arg(long, value_name = "URL")]
        service_url: Option<String>,
    },

    /// Print the HTML service URL for an app.
    HtmlUrl {
        #[command(flatten)]
        app: AppArgs,

        /// HTML service base URL (default: html_service_url from config).
        #[arg(long, value_name = "URL")]
        service_url: Option<String>,
    },

    /// Parse the encoded parameters after the service marker of a request path.
    ParsePath {
        /// Request path, e.g. /ota-service/PLIST/UmVmZXJlcj1...
        path: String,

        /// Marker segment (default: service_name from config).
        #[arg(long)]
        marker: Option<String>,

        /// Print the entries as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Render the installer manifest.
    Plist {
        /// Landing page URL the IPA sits next to.
        referer: String,

        #[command(flatten)]
        app: AppArgs,
    },

    /// Render the landing page served by the HTML service.
    Html {
        /// Landing page URL the IPA sits next to.
        referer: String,

        #[command(flatten)]
        app: AppArgs,

        /// PLIST service base URL (default: plist_service_url from config).
        #[arg(long, value_name = "URL")]
        plist_service_url: Option<String>,

        /// Alternative template: builtin name or file path.
        #[arg(long, value_name = "TEMPLATE")]
        template: Option<String>,
    },

    /// Render the build page that is uploaded next to the IPA.
    BuildHtml {
        #[command(flatten)]
        app: AppArgs,

        /// HTML service base URL (default: html_service_url from config).
        #[arg(long, value_name = "URL")]
        service_url: Option<String>,

        /// Analytics account (default: google_analytics_id from config).
        #[arg(long, value_name = "ID")]
        google_analytics_id: Option<String>,

        /// Alternative template: builtin name or file path.
        #[arg(long, value_name = "TEMPLATE")]
        template: Option<String>,
    },

    /// Print shell completions.
    Completions {
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Encode { value } => run_encode(&value),
            CliCommand::Decode { token } => run_decode(&token)?,
            CliCommand::UrlEncode { value } => run_url_encode(&value),
            CliCommand::UrlDecode { value } => run_url_decode(&value)?,
            CliCommand::IpaUrl {
                referer,
                ipa_classifier,
                ota_classifier,
            } => run_ipa_url(
                &referer,
                &Classifiers::new(ipa_classifier.as_deref(), ota_classifier.as_deref()),
            )?,
            CliCommand::PlistUrl {
                referer,
                app,
                service_url,
            } => run_plist_url(&referer, &app, service_url.as_deref())?,
            CliCommand::HtmlUrl { app, service_url } => {
                run_html_url(&app, service_url.as_deref())?
            }
            CliCommand::ParsePath { path, marker, json } => {
                run_parse_path(&path, marker.as_deref(), json)?
            }
            CliCommand::Plist { referer, app } => run_plist(&referer, &app)?,
            CliCommand::Html {
                referer,
                app,
                plist_service_url,
                template,
            } => run_html(
                &referer,
                &app,
                plist_service_url.as_deref(),
                template.as_deref(),
            )?,
            CliCommand::BuildHtml {
                app,
                service_url,
                google_analytics_id,
                template,
            } => run_build_html(
                &app,
                service_url.as_deref(),
                google_analytics_id.as_deref(),
                template.as_deref(),
            )?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
