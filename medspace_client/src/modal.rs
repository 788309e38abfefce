use std::time::Duration;

use medspace_models::lead::FormType;

use crate::{
    api::LeadApiClient,
    form::{FormStatus, IntakeForm},
};

/// How long the success state stays visible before the modal closes itself.
pub const SUCCESS_DISPLAY: Duration = Duration::from_secs(3);

/// Delay between closing the modal and clearing the fields, so the reset is
/// not visible during the close transition.
pub const CLOSE_RESET_DELAY: Duration = Duration::from_millis(300);

/// Open/close context for one lead capture modal. Owned by the page root and
/// passed down explicitly; its lifetime is the page session.
#[derive(Debug)]
pub struct ModalSession {
    open: bool,
    form: IntakeForm,
}

impl ModalSession {
    pub fn new(form_type: Option<FormType>) -> Self {
        Self {
            open: false,
            form: IntakeForm::new(form_type),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut IntakeForm {
        &mut self.form
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the modal. Outside of an outstanding submission the fields are
    /// cleared after a short delay.
    pub async fn close(&mut self) {
        self.open = false;
        if *self.form.status() != FormStatus::Submitting {
            tokio::time::sleep(CLOSE_RESET_DELAY).await;
            self.form.reset();
        }
    }

    /// Runs one submission attempt: exactly one request, no retries. On
    /// success the form stays in the success state for [`SUCCESS_DISPLAY`]
    /// before the modal closes itself.
    pub async fn submit(&mut self, client: &LeadApiClient) {
        let Some(payload) = self.form.begin_submit() else {
            return;
        };

        match client.submit(&payload).await {
            Ok(_) => {
                self.form.complete(Ok(()));
                tokio::time::sleep(SUCCESS_DISPLAY).await;
                self.close().await;
            }
            Err(failure) => self.form.complete(Err(failure.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use httpmock::{Method::POST, MockServer};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use tokio::time::Instant;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn success_closes_after_display_window() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/submit");
                then.status(200)
                    .json_body(json!({ "success": true, "message": "Form submitted successfully" }));
            })
            .await;

        let client = LeadApiClient::new(server.url("/api/submit").parse().unwrap());
        let mut session = open_filled_session();

        let started = Instant::now();
        session.submit(&client).await;

        assert!(started.elapsed() >= SUCCESS_DISPLAY + CLOSE_RESET_DELAY);
        assert!(!session.is_open());
        assert_eq!(session.form().name, "");
        assert_eq!(*session.form().status(), FormStatus::Idle);
        mock.assert_async().await;
    }

    #[tokio::test(start_paused = true)]
    async fn error_keeps_modal_open_for_resubmission() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/submit");
                then.status(500)
                    .json_body(json!({ "error": "Failed to submit form. Please try again." }));
            })
            .await;

        let client = LeadApiClient::new(server.url("/api/submit").parse().unwrap());
        let mut session = open_filled_session();

        session.submit(&client).await;

        assert!(session.is_open());
        assert_eq!(
            *session.form().status(),
            FormStatus::Error("Failed to submit form. Please try again.".into())
        );
        // fields are retained for an immediate retry
        assert_eq!(session.form().name, "Dr. Jane Doe");
    }

    #[tokio::test(start_paused = true)]
    async fn close_resets_fields_after_delay() {
        let mut session = open_filled_session();

        let started = Instant::now();
        session.close().await;

        assert!(started.elapsed() >= CLOSE_RESET_DELAY);
        assert!(!session.is_open());
        assert_eq!(session.form().name, "");
        assert_eq!(session.form().email, "");
        assert_eq!(session.form().message, "");
    }

    fn open_filled_session() -> ModalSession {
        let mut session = ModalSession::new(None);
        session.open();
        session.form_mut().name = "Dr. Jane Doe".into();
        session.form_mut().email = "jane@example.com".into();
        session.form_mut().message = "Interested".into();
        session
    }
}
