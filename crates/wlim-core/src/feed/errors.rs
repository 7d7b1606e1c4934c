use crate::errors::WlimError;

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("HYPRLAND_INSTANCE_SIGNATURE is not set; is the compositor running?")]
    InstanceSignatureMissing,

    #[error("Could not connect to compositor socket (tried: {tried})")]
    SocketUnavailable { tried: String },

    #[error("Compositor request '{request}' failed: {source}")]
    RequestFailed {
        request: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read geometry feed '{path}': {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl WlimError for FeedError {
    fn error_code(&self) -> &'static str {
        match self {
            FeedError::InstanceSignatureMissing => "FEED_SIGNATURE_MISSING",
            FeedError::SocketUnavailable { .. } => "FEED_SOCKET_UNAVAILABLE",
            FeedError::RequestFailed { .. } => "FEED_REQUEST_FAILED",
            FeedError::ReadFailed { .. } => "FEED_READ_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            FeedError::InstanceSignatureMissing | FeedError::ReadFailed { .. }
        )
    }
}
