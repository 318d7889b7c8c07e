use crate::api::ApiError;
use std::borrow::Cow;

/// Fallback when a rejected status check carries no message.
pub(crate) const STATUS_CHECK_FAILED: &str = "Failed to check customer status";

/// Why the customer status could not be turned into a section.
#[fulfill_derive::fulfill_error]
pub enum StatusCheckError {
    /// Token, customer or product missing; the check was not attempted.
    #[error("Marketplace identity incomplete{}", format_context(.context))]
    MissingIdentity { context: Option<Cow<'static, str>> },

    #[error("Status check request failed{}: {source}", format_context(.context))]
    Remote { source: ApiError, context: Option<Cow<'static, str>> },

    /// The backend answered with `success: false`.
    #[error("Status check rejected{}: {message}", format_context(.context))]
    Rejected { message: String, context: Option<Cow<'static, str>> },

    #[error("Unknown customer status{}: {status}", format_context(.context))]
    UnknownStatus { status: String, context: Option<Cow<'static, str>> },
}

impl StatusCheckError {
    /// Code shown in the error section details.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MissingIdentity { .. } => "STATUS_CHECK_ERROR",
            Self::Remote { .. } | Self::Rejected { .. } => "STATUS_CHECK_FAILED",
            Self::UnknownStatus { .. } => "UNKNOWN_STATUS",
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingIdentity { .. } => {
                "Unable to verify customer status. Please try again.".to_owned()
            },
            Self::Remote { source, .. } => source.user_message().into_owned(),
            Self::Rejected { message, .. } => message.clone(),
            Self::UnknownStatus { status, .. } => format!("Unknown customer status: {status}"),
        }
    }
}
