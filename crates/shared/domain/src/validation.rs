use serde::Serialize;
use std::borrow::Cow;
use strum::AsRefStr;

/// Which rule rejected a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationFailure {
    Empty,
    Format,
    Length,
    Boundary,
    Charset,
    RepeatedHyphen,
    Reserved,
    MissingParameters,
}

/// Outcome of a validator. Either valid, or invalid with exactly one failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    message: Cow<'static, str>,
    failure: Option<ValidationFailure>,
}

impl ValidationResult {
    pub fn valid(message: impl Into<Cow<'static, str>>) -> Self {
        Self { is_valid: true, message: message.into(), failure: None }
    }

    pub fn invalid(failure: ValidationFailure, message: impl Into<Cow<'static, str>>) -> Self {
        Self { is_valid: false, message: message.into(), failure: Some(failure) }
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub const fn failure(&self) -> Option<ValidationFailure> {
        self.failure
    }
}
