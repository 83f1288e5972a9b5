//! Domain error types.
//!
//! Trade rejections and degenerate indicator values are ordinary outcomes and
//! never surface here; only configuration and I/O faults do.

/// Top-level error type for fxsim.
#[derive(Debug, thiserror::Error)]
pub enum FxsimError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl FxsimError {
    pub(crate) fn invalid(section: &str, key: &str, reason: impl Into<String>) -> Self {
        FxsimError::ConfigInvalid {
            section: section.to_string(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&FxsimError> for std::process::ExitCode {
    fn from(err: &FxsimError) -> Self {
        let code: u8 = match err {
            FxsimError::Io(_) => 1,
            FxsimError::ConfigParse { .. } | FxsimError::ConfigInvalid { .. } => 2,
        };
        std::process::ExitCode::from(code)
    }
}
