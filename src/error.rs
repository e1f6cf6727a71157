// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Fullscreen Error: {0}")]
    Fullscreen(#[from] FullscreenError),
}

/// Failures reported by a host fullscreen capability.
///
/// The controller never surfaces these to its caller: a failed request
/// degrades to a logical-only toggle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FullscreenError {
    /// The host environment exposes no fullscreen API.
    #[error("fullscreen is not supported by this environment")]
    Unsupported,

    /// The host refused the request (no user gesture, policy, ...).
    #[error("fullscreen request rejected: {0}")]
    Rejected(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn from_toml_error_produces_config_variant() {
        let toml_error = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn fullscreen_error_wraps_into_error() {
        let err: Error = FullscreenError::Rejected("no user gesture".into()).into();
        assert_eq!(
            format!("{}", err),
            "Fullscreen Error: fullscreen request rejected: no user gesture"
        );
    }

    #[test]
    fn unsupported_fullscreen_display() {
        assert!(FullscreenError::Unsupported
            .to_string()
            .contains("not supported"));
    }
}
