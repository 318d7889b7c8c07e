//! Provisioning failure classification.
//!
//! The backend reports failures as free text. The kind derived here only steers logging and the
//! retry hint; the message shown to the user is always the backend's own.

use crate::api::ApiError;
use fulfill_domain::api::ProvisionResponse;
use serde::Serialize;
use strum::AsRefStr;

const UNKNOWN_MESSAGE: &str = "Unknown error occurred";

/// Coarse category of a failed provisioning attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    DnsNameTaken,
    ReservedName,
    PortalExists,
    InvalidCredentials,
    InvalidEmail,
    MissingParameters,
    InvalidDnsName,
    #[strum(serialize = "NETWORK_ERROR")]
    #[serde(rename = "NETWORK_ERROR")]
    Network,
    Timeout,
    #[strum(serialize = "UNKNOWN_ERROR")]
    #[serde(rename = "UNKNOWN_ERROR")]
    Unknown,
}

impl ErrorKind {
    /// Whether resubmitting the same input may succeed.
    #[must_use]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Network | Self::Timeout | Self::Unknown)
    }
}

/// Substring table, most specific first. `"DNS name"` must stay behind the entries whose
/// messages also mention the DNS name.
const MESSAGE_KINDS: [(&str, ErrorKind); 7] = [
    ("already taken", ErrorKind::DnsNameTaken),
    ("reserved name", ErrorKind::ReservedName),
    ("already has an active portal", ErrorKind::PortalExists),
    ("Invalid credentials", ErrorKind::InvalidCredentials),
    ("Invalid email format", ErrorKind::InvalidEmail),
    ("Missing required provisioning parameters", ErrorKind::MissingParameters),
    ("DNS name", ErrorKind::InvalidDnsName),
];

/// Maps a backend failure message to an [`ErrorKind`]. Matching is case-sensitive.
#[must_use]
pub fn classify_message(message: &str) -> ErrorKind {
    MESSAGE_KINDS
        .iter()
        .find(|(needle, _)| message.contains(needle))
        .map_or(ErrorKind::Unknown, |(_, kind)| *kind)
}

/// A failed provisioning attempt, ready for display and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionFailure {
    pub kind: ErrorKind,
    pub message: String,
    pub http_status: Option<u16>,
}

impl ProvisionFailure {
    /// Failure reported in a decoded `success: false` reply.
    #[must_use]
    pub fn from_response(response: &ProvisionResponse) -> Self {
        let message = response
            .message
            .clone()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| UNKNOWN_MESSAGE.to_owned());
        Self { kind: classify_message(&message), message, http_status: response.http_status }
    }

    /// Failure where no usable reply arrived.
    #[must_use]
    pub fn from_api_error(error: &ApiError) -> Self {
        let kind = if error.is_timeout() {
            ErrorKind::Timeout
        } else if error.is_transport() {
            ErrorKind::Network
        } else {
            ErrorKind::Unknown
        };
        Self { kind, message: error.user_message().into_owned(), http_status: error.http_status() }
    }

    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
