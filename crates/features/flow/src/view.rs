use serde::Serialize;
use strum::AsRefStr;
use url::Url;

/// Styling hint for an inline form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
    Loading,
}

/// State of the form's submit control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    /// Request in flight; the control is disabled.
    Loading,
    Enabled,
}

impl SubmitState {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Loading => "Creating Portal...",
            Self::Enabled => "Create My Portal",
        }
    }
}

/// What the controller needs from the page while the provisioning form is active.
pub trait FormView {
    fn show_form_message(&mut self, message: &str, kind: MessageKind);

    fn set_submit_state(&mut self, state: SubmitState);

    /// Leaves the page. Called once, after a successful provisioning call.
    fn navigate(&mut self, url: &Url);
}
