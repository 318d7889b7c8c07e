use fulfill::features::flow::{FormView, MessageKind, SubmitState};
use tracing::debug;
use url::Url;

/// Terminal stand-in for the page: form messages go to stderr, the redirect is remembered.
#[derive(Debug, Default)]
pub struct ConsoleView {
    pub redirect: Option<Url>,
}

impl FormView for ConsoleView {
    fn show_form_message(&mut self, message: &str, kind: MessageKind) {
        let marker = match kind {
            MessageKind::Error => "✖",
            MessageKind::Success => "✔",
            MessageKind::Loading => "…",
        };
        eprintln!("{marker} {message}");
    }

    fn set_submit_state(&mut self, state: SubmitState) {
        debug!(state = state.as_ref(), label = state.label(), "Submit control updated");
    }

    fn navigate(&mut self, url: &Url) {
        self.redirect = Some(url.clone());
    }
}
