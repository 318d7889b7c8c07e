use std::borrow::Cow;

/// Failures talking to the fulfillment backend.
#[fulfill_derive::fulfill_error]
pub enum ApiError {
    #[error("Invalid API endpoint{}: {source}", format_context(.context))]
    Endpoint { source: url::ParseError, context: Option<Cow<'static, str>> },

    /// Connection, TLS or timeout failure; nothing was received.
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// A success status with a body that is not the expected JSON.
    #[error("Malformed response{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    /// A non-success status without a decodable body.
    #[error("Remote rejected request (HTTP {status}){}", format_context(.context))]
    Rejected { status: u16, context: Option<Cow<'static, str>> },

    #[error("Internal API error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl ApiError {
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport { source, .. } if source.is_timeout())
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    #[must_use]
    pub const fn http_status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for showing next to the form.
    #[must_use]
    pub fn user_message(&self) -> Cow<'static, str> {
        match self {
            _ if self.is_timeout() => Cow::Borrowed("Request timed out. Please try again."),
            Self::Transport { .. } => {
                Cow::Borrowed("Network error. Please check your connection and try again.")
            },
            Self::Rejected { status, .. } => {
                Cow::Owned(format!("The server rejected the request (HTTP {status})"))
            },
            Self::Decode { .. } => Cow::Borrowed("The server returned an unexpected response"),
            Self::Endpoint { .. } | Self::Internal { .. } => {
                Cow::Borrowed("An unexpected error occurred. Please try again.")
            },
        }
    }
}
