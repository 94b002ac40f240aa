use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum AppError {
    #[error("Could not reach the voting service: {0}")]
    Network(String),

    #[error("Voting service rejected the request ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Unexpected response from the voting service: {0}")]
    Decode(String),

    #[error("Invalid identity credential: {0}")]
    InvalidCredential(String),

    #[error("{0}")]
    Validation(String),

    #[error("Session storage failed: {0}")]
    Session(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds a backend failure, preferring the message the backend sent
    /// over the operation's generic fallback.
    pub fn backend(status: u16, message: Option<String>, fallback: &str) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Self::Backend { status, message }
    }

    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Unable to reach the voting service. Try again later.",
            Self::Backend { message, .. } => message,
            Self::Decode(_) => "The voting service sent an unexpected response.",
            Self::InvalidCredential(_) => "Google sign-in failed. Please try again.",
            Self::Validation(msg) => msg,
            Self::Session(_) => "Could not store your session. Please sign in again.",
            Self::Config(_) | Self::Internal(_) => "Something went wrong. Try again later.",
        }
    }
}

#[cfg(feature = "ssr")]
mod ssr_impl {
    use super::AppError;
    use server_fn::ServerFnError;

    impl AppError {
        /// Converts into the error a server function reports to the browser,
        /// carrying only the user-facing message.
        pub fn into_server_error(self) -> ServerFnError {
            ServerFnError::new(self.user_message())
        }
    }
}
