use crate::errors::WlimError;

#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("No clickable elements found.")]
    NoTargets,

    #[error("Failed to read accessible tree '{path}': {source}")]
    TreeUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Accessible tree '{path}' is not valid: {message}")]
    TreeInvalid { path: String, message: String },
}

impl WlimError for DiscoveryError {
    fn error_code(&self) -> &'static str {
        match self {
            DiscoveryError::NoTargets => "DISCOVERY_NO_TARGETS",
            DiscoveryError::TreeUnreadable { .. } => "DISCOVERY_TREE_UNREADABLE",
            DiscoveryError::TreeInvalid { .. } => "DISCOVERY_TREE_INVALID",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
