use crate::errors::WlimError;

#[derive(Debug, thiserror::Error)]
pub enum ActuationError {
    #[error("Cannot open '{path}': {source}")]
    DeviceOpenFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Virtual pointer setup failed at {step}: {source}")]
    DeviceSetupFailed {
        step: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write input event: {source}")]
    EventWriteFailed {
        #[source]
        source: std::io::Error,
    },

    #[error("Pointer injection is not supported on {platform}")]
    Unsupported { platform: &'static str },
}

impl WlimError for ActuationError {
    fn error_code(&self) -> &'static str {
        match self {
            ActuationError::DeviceOpenFailed { .. } => "ACTUATION_DEVICE_OPEN_FAILED",
            ActuationError::DeviceSetupFailed { .. } => "ACTUATION_DEVICE_SETUP_FAILED",
            ActuationError::EventWriteFailed { .. } => "ACTUATION_EVENT_WRITE_FAILED",
            ActuationError::Unsupported { .. } => "ACTUATION_UNSUPPORTED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Usually missing permissions on /dev/uinput
        matches!(
            self,
            ActuationError::DeviceOpenFailed { .. } | ActuationError::Unsupported { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_open_failed_display() {
        let error = ActuationError::DeviceOpenFailed {
            path: "/dev/uinput".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(error.to_string().starts_with("Cannot open '/dev/uinput'"));
        assert_eq!(error.error_code(), "ACTUATION_DEVICE_OPEN_FAILED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_setup_failed_is_not_user_error() {
        let error = ActuationError::DeviceSetupFailed {
            step: "create",
            source: std::io::Error::other("EINVAL"),
        };
        assert!(error.to_string().contains("at create"));
        assert!(!error.is_user_error());
    }
}
