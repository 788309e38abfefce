use medspace_models::lead::FormType;
use serde::Serialize;

use crate::presets::QuickInquiry;

/// Wire payload of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_type: Option<FormType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error(String),
}

/// The intake form state machine:
/// `idle --submit--> submitting --> success | error`.
///
/// Submission is guarded against re-entry; an error state allows immediate
/// resubmission.
#[derive(Debug, Clone, Default)]
pub struct IntakeForm {
    pub name: String,
    pub email: String,
    pub message: String,
    quick_inquiry: Option<QuickInquiry>,
    form_type: Option<FormType>,
    status: FormStatus,
}

impl IntakeForm {
    pub fn new(form_type: Option<FormType>) -> Self {
        Self {
            form_type,
            ..Self::default()
        }
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn quick_inquiry(&self) -> Option<QuickInquiry> {
        self.quick_inquiry
    }

    /// Overwrites the message field with the preset text. Manual edits of
    /// the message remain possible afterwards.
    pub fn select_quick_inquiry(&mut self, inquiry: QuickInquiry) {
        self.quick_inquiry = Some(inquiry);
        self.message = inquiry.message().into();
    }

    /// Starts a submission attempt and returns the payload to send, or
    /// `None` if a request is already outstanding.
    pub fn begin_submit(&mut self) -> Option<LeadPayload> {
        if self.status == FormStatus::Submitting {
            return None;
        }
        self.status = FormStatus::Submitting;

        Some(LeadPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
            form_type: self.form_type,
        })
    }

    /// Applies the outcome of the outstanding submission attempt.
    pub fn complete(&mut self, result: Result<(), String>) {
        if self.status != FormStatus::Submitting {
            return;
        }
        self.status = match result {
            Ok(()) => FormStatus::Success,
            Err(message) => FormStatus::Error(message),
        };
    }

    /// Clears all fields; the form type discriminator is retained.
    pub fn reset(&mut self) {
        *self = Self::new(self.form_type);
    }
}
