use medspace_models::lead::{
    FormType, LeadEmail, LeadEmailError, LeadMessage, LeadMessageError, LeadName, LeadNameError,
    LeadSubmission,
};
use serde::Deserialize;

use super::ApiFieldError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiLeadRequest {
    // absent fields go through validation as empty strings so that the
    // caller gets a field-level error instead of a deserialization failure
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub form_type: Option<FormType>,
}

impl ApiLeadRequest {
    /// Validates every field and reports all violations together.
    pub fn validate(self) -> Result<LeadSubmission, Vec<ApiFieldError>> {
        let mut details = Vec::new();

        let name = LeadName::try_from(self.name)
            .map_err(|err| details.push(name_error(err)))
            .ok();
        let email = LeadEmail::try_from(self.email)
            .map_err(|err| details.push(email_error(err)))
            .ok();
        let message = match self.message {
            Some(message) => match LeadMessage::try_from(message) {
                Ok(message) => Some(message),
                Err(err) => {
                    details.push(message_error(err));
                    None
                }
            },
            None => None,
        };

        match (name, email) {
            (Some(name), Some(email)) if details.is_empty() => Ok(LeadSubmission {
                name,
                email,
                message,
                form_type: self.form_type.unwrap_or_default(),
            }),
            _ => Err(details),
        }
    }
}

fn name_error(err: LeadNameError) -> ApiFieldError {
    let message = match err {
        LeadNameError::LenCharMinViolated => "Name must be at least 2 characters",
        LeadNameError::LenCharMaxViolated => "Name is too long",
        LeadNameError::PredicateViolated => "Invalid name format",
    };
    ApiFieldError {
        field: "name",
        message,
    }
}

fn email_error(err: LeadEmailError) -> ApiFieldError {
    let message = match err {
        LeadEmailError::LenCharMaxViolated => "Email is too long",
        LeadEmailError::PredicateViolated => "Invalid email address",
    };
    ApiFieldError {
        field: "email",
        message,
    }
}

fn message_error(err: LeadMessageError) -> ApiFieldError {
    let message = match err {
        LeadMessageError::LenCharMaxViolated => "Message is too long",
        LeadMessageError::PredicateViolated => "Invalid message format",
    };
    ApiFieldError {
        field: "message",
        message,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn valid_with_defaults() {
        let request = ApiLeadRequest {
            name: "  Dr. Jane Doe  ".into(),
            email: "JANE@Example.com".into(),
            message: None,
            form_type: None,
        };

        let submission = request.validate().unwrap();

        assert_eq!(&*submission.name, "Dr. Jane Doe");
        assert_eq!(&*submission.email, "jane@example.com");
        assert_eq!(submission.message, None);
        assert_eq!(submission.form_type, FormType::Contact);
    }

    #[test]
    fn valid_partnership() {
        let request = ApiLeadRequest {
            name: "Dr. Jane Doe".into(),
            email: "jane@example.com".into(),
            message: Some("Interested".into()),
            form_type: Some(FormType::Partnership),
        };

        let submission = request.validate().unwrap();

        assert_eq!(submission.form_type, FormType::Partnership);
        assert_eq!(&*submission.message.unwrap(), "Interested");
    }

    #[test]
    fn all_violations_reported() {
        let request = ApiLeadRequest {
            name: "J".into(),
            email: "not-an-email".into(),
            message: Some("=SUM(A1:A10)".into()),
            form_type: None,
        };

        let details = request.validate().unwrap_err();

        assert_eq!(
            details,
            [
                ApiFieldError {
                    field: "name",
                    message: "Name must be at least 2 characters",
                },
                ApiFieldError {
                    field: "email",
                    message: "Invalid email address",
                },
                ApiFieldError {
                    field: "message",
                    message: "Invalid message format",
                },
            ]
        );
    }

    #[test]
    fn missing_fields_reported_as_validation_errors() {
        let request: ApiLeadRequest = serde_json::from_str("{}").unwrap();

        let details = request.validate().unwrap_err();

        assert_eq!(
            details,
            [
                ApiFieldError {
                    field: "name",
                    message: "Name must be at least 2 characters",
                },
                ApiFieldError {
                    field: "email",
                    message: "Invalid email address",
                },
            ]
        );
    }

    #[test]
    fn formula_name_rejected() {
        let request = ApiLeadRequest {
            name: "=SUM(A1:A10)".into(),
            email: "jane@example.com".into(),
            message: None,
            form_type: None,
        };

        let details = request.validate().unwrap_err();

        assert_eq!(
            details,
            [ApiFieldError {
                field: "name",
                message: "Invalid name format",
            }]
        );
    }
}
