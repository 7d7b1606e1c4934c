use crate::actuate::ActuationError;
use crate::errors::WlimError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Cannot start a hint session without targets")]
    NoTargets,

    #[error("Click failed: {source}")]
    ActuationFailed {
        #[from]
        source: ActuationError,
    },
}

impl WlimError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::NoTargets => "SESSION_NO_TARGETS",
            SessionError::ActuationFailed { .. } => "SESSION_ACTUATION_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SessionError::NoTargets => true,
            SessionError::ActuationFailed { source } => source.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actuation_failure_wraps_source() {
        let error: SessionError = ActuationError::Unsupported { platform: "macos" }.into();
        assert_eq!(error.error_code(), "SESSION_ACTUATION_FAILED");
        assert!(error.is_user_error());
        assert!(error.to_string().contains("macos"));
    }
}
