pub mod config;
pub mod logging;

pub mod app;
pub mod artifact;
pub mod codec;
pub mod error;
pub mod generate;
pub mod names;
pub mod params;
pub mod request_url;
pub mod service;
pub mod template;

pub use error::{CodecError, OtaError};
