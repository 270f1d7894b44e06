//! Conversions from the I/O and codec errors the client meets into the
//! shared [`Error`] type

use lendingclub_core::Error;

/// Transport failure: connect, timeout or body read
pub(crate) fn connection_error(err: reqwest::Error) -> Error {
    Error::connection("cannot connect correctly")
        .with_details(err.to_string())
        .with_source(err)
}

/// Undecodable response body; the raw body becomes the details
pub(crate) fn parse_error(err: serde_json::Error, body: &str) -> Error {
    Error::parse(format!("cannot decode response: {}", err))
        .with_details(body)
        .with_source(err)
}

pub(crate) fn config_read_error(err: std::io::Error, path: &std::path::Path) -> Error {
    Error::config(format!("cannot read config file {}", path.display()))
        .with_hint("set the environment variables or create the config file")
        .with_source(err)
}

pub(crate) fn config_parse_error(err: toml::de::Error, path: &std::path::Path) -> Error {
    Error::config(format!("cannot parse config file {}", path.display()))
        .with_details(err.to_string())
        .with_source(err)
}
