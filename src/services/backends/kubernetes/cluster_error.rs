
pub mod api_error_details;

use crate::services::backends::kubernetes::cluster_error::api_error_details::ApiErrorDetails;
use kube::core::ErrorResponse;
use kube::runtime::watcher;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// The error type for requests to the cluster API.
#[derive(Debug, Clone)]
pub enum ClusterError {
    /// The request did not produce a response
    Transport(String),
    /// The server answered with a non-success status
    Api(ApiErrorDetails),
    /// The response body was not the expected document
    Decode(String),
    /// The watch stream could not be opened or reported an error
    Watch(String),
    /// An error surfaced to the caller of a resolver, carrying the message chosen for it
    Request(String),
}

impl ClusterError {
    /// The server-provided message if there is one, else the message of the underlying error.
    pub fn status_message(&self) -> String {
        match self {
            ClusterError::Api(details) if !details.message.is_empty() => details.message.clone(),
            other => other.source_message(),
        }
    }

    /// The server-provided reason if there is one, else the message of the underlying error.
    pub fn list_message(&self) -> String {
        match self {
            ClusterError::Api(details) if !details.reason.is_empty() => details.reason.clone(),
            other => other.source_message(),
        }
    }

    /// The message of the underlying error, without the category prefix of [`Display`].
    pub fn source_message(&self) -> String {
        match self {
            ClusterError::Transport(message)
            | ClusterError::Decode(message)
            | ClusterError::Watch(message)
            | ClusterError::Request(message) => message.clone(),
            ClusterError::Api(details) => details.to_string(),
        }
    }

    pub fn into_status_error(self) -> ClusterError {
        ClusterError::Request(self.status_message())
    }

    pub fn into_list_error(self) -> ClusterError {
        ClusterError::Request(self.list_message())
    }
}

impl From<kube::Error> for ClusterError {
    fn from(error: kube::Error) -> Self {
        match error {
            kube::Error::Api(ErrorResponse {
                code, message, reason, ..
            }) => ClusterError::Api(ApiErrorDetails::new(code, message, reason)),
            kube::Error::SerdeError(e) => ClusterError::Decode(e.to_string()),
            other => ClusterError::Transport(other.to_string()),
        }
    }
}

impl From<watcher::Error> for ClusterError {
    fn from(error: watcher::Error) -> Self {
        ClusterError::Watch(error.to_string())
    }
}

impl From<serde_json::Error> for ClusterError {
    fn from(error: serde_json::Error) -> Self {
        ClusterError::Decode(error.to_string())
    }
}

impl Display for ClusterError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ClusterError::Transport(message) => write!(f, "Cluster API request failed: {}", message),
            ClusterError::Api(details) => write!(f, "Cluster API returned an error: {}", details),
            ClusterError::Decode(message) => write!(f, "Unexpected cluster API response: {}", message),
            ClusterError::Watch(message) => write!(f, "Watch failed: {}", message),
            ClusterError::Request(message) => write!(f, "{}", message),
        }
    }
}

impl Error for ClusterError {}
