// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

#![allow(clippy::doc_markdown)]
//! Error types for view synchronization
//!
//! Every fetch-render cycle ends either with data or with a [`ViewSyncError`]. The
//! error's [`ErrorKind`] decides how the controller reacts: authentication failures
//! navigate away, everything else is rendered as a widget-level error panel.
//!
//! # Examples
//!
//! ```
//! use viewsync_core::{ErrorKind, ViewSyncError, Result};
//!
//! fn load() -> Result<Vec<u32>> {
//!     Err(ViewSyncError::status(503, "/api/orders"))
//! }
//!
//! let err = load().unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Transport);
//! assert!(err.is_recoverable());
//! ```

/// Root error type for all view synchronization operations
#[derive(Debug, thiserror::Error)]
pub enum ViewSyncError {
    /// The request never produced a response
    ///
    /// Network failures, DNS errors, refused connections.
    #[error("Transport error: {context}")]
    Transport {
        /// Description of the failed request
        context: String,
    },

    /// The server answered with a non-2xx status
    #[error("Unexpected status {status}: {context}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Request that produced the status
        context: String,
    },

    /// The session is no longer valid (401/403)
    ///
    /// Not recoverable locally: the controller redirects to the login entry point.
    #[error("Authentication required (status {status})")]
    Unauthorized {
        /// HTTP status code that signalled the failure
        status: u16,
    },

    /// The fetch did not settle within the configured timeout
    #[error("Timeout error: {context}")]
    Timeout {
        /// Context about the timeout (e.g. duration)
        context: String,
    },

    /// The response body did not have the expected shape
    #[error("Malformed response: {context}")]
    Malformed {
        /// What could not be parsed
        context: String,
    },

    /// The endpoint answered `{ success: false }`
    #[error("Request rejected: {message}")]
    Rejected {
        /// Message supplied by the endpoint
        message: String,
    },

    /// A widget id was not registered with the controller
    #[error("Unknown widget: {id}")]
    UnknownWidget {
        /// The id that was looked up
        id: String,
    },

    /// Two widgets were registered with the same id
    #[error("Duplicate widget id: {id}")]
    DuplicateWidget {
        /// The id registered twice
        id: String,
    },

    /// The controller was torn down
    #[error("Controller has been torn down")]
    TornDown,

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {context}")]
    Config {
        /// What is wrong with the configuration
        context: String,
    },

    /// Custom error from user code
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Coarse classification of a [`ViewSyncError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network failure or non-2xx response
    Transport,
    /// Fetch exceeded its deadline
    Timeout,
    /// Unexpected response shape
    Malformed,
    /// Endpoint reported `success: false`
    Rejected,
    /// Session invalid
    Unauthorized,
    /// Misuse of the controller (unknown/duplicate widget, torn down)
    Usage,
    /// Invalid configuration
    Config,
    /// Error raised by user code
    User,
}

impl ViewSyncError {
    /// Create a transport error with the given context
    pub fn transport(context: impl Into<String>) -> Self {
        Self::Transport {
            context: context.into(),
        }
    }

    /// Create a status error for a non-2xx response
    pub fn status(status: u16, context: impl Into<String>) -> Self {
        Self::Status {
            status,
            context: context.into(),
        }
    }

    /// Create an authentication failure
    pub const fn unauthorized(status: u16) -> Self {
        Self::Unauthorized { status }
    }

    /// Create a timeout error with the given context
    pub fn timeout(context: impl Into<String>) -> Self {
        Self::Timeout {
            context: context.into(),
        }
    }

    /// Create a malformed-response error with the given context
    pub fn malformed(context: impl Into<String>) -> Self {
        Self::Malformed {
            context: context.into(),
        }
    }

    /// Create a rejected-request error
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Create a configuration error with the given context
    pub fn config(context: impl Into<String>) -> Self {
        Self::Config {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Classify this error
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Status { .. } => ErrorKind::Transport,
            Self::Timeout { .. } => ErrorKind::Timeout,
            Self::Malformed { .. } => ErrorKind::Malformed,
            Self::Rejected { .. } => ErrorKind::Rejected,
            Self::Unauthorized { .. } => ErrorKind::Unauthorized,
            Self::UnknownWidget { .. } | Self::DuplicateWidget { .. } | Self::TornDown => {
                ErrorKind::Usage
            }
            Self::Config { .. } => ErrorKind::Config,
            Self::UserError(_) => ErrorKind::User,
        }
    }

    /// Returns `true` if this error means the session is gone
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Check if this is a recoverable error
    ///
    /// Recoverable errors are rendered with a retry affordance; a later refresh
    /// may succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Transport
                | ErrorKind::Timeout
                | ErrorKind::Malformed
                | ErrorKind::Rejected
                | ErrorKind::User
        )
    }

    /// Copy shown to the user in a widget's error panel
    ///
    /// The underlying cause is logged separately; this text never leaks internals.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport { .. } | Self::Status { .. } => {
                "Unable to reach the server. Please try again.".to_string()
            }
            Self::Timeout { .. } => "The request took too long. Please try again.".to_string(),
            Self::Malformed { .. } => "Received unexpected data from the server.".to_string(),
            Self::Rejected { message } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } => "The server could not process the request.".to_string(),
            Self::Unauthorized { .. } => "Your session has expired. Please sign in again.".to_string(),
            _ => "Something went wrong while loading this section.".to_string(),
        }
    }
}

/// Specialized Result type for view synchronization
///
/// This is the normalized fetch result: `Ok(data)` or an error carrying its
/// [`ErrorKind`].
pub type Result<T> = std::result::Result<T, ViewSyncError>;

/// Helper trait for adding context to foreign `Result`s
pub trait ResultExt<T> {
    /// Convert the error into a [`ViewSyncError::Transport`] with context
    ///
    /// # Errors
    /// Returns the converted error if `self` is `Err`.
    fn transport_context(self, context: impl Into<String>) -> Result<T>;

    /// Convert the error into a [`ViewSyncError::Malformed`] with context
    ///
    /// # Errors
    /// Returns the converted error if `self` is `Err`.
    fn malformed_context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: core::fmt::Display> ResultExt<T> for std::result::Result<T, E> {
    fn transport_context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ViewSyncError::transport(format!("{}: {e}", context.into())))
    }

    fn malformed_context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ViewSyncError::malformed(format!("{}: {e}", context.into())))
    }
}
