use nutype::nutype;
use serde::{Deserialize, Serialize};

/// A prospective customer's contact submission captured via a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: LeadName,
    pub email: LeadEmail,
    pub message: Option<LeadMessage>,
    pub form_type: FormType,
}

#[nutype(
    sanitize(trim),
    validate(
        len_char_min = 2,
        len_char_max = 100,
        predicate = crate::formula_safe
    ),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct LeadName(String);

#[nutype(
    sanitize(trim, lowercase),
    validate(
        len_char_max = 100,
        predicate = crate::valid_email
    ),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct LeadEmail(String);

#[nutype(
    sanitize(trim),
    validate(len_char_max = 500, predicate = crate::formula_safe),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct LeadMessage(String);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormType {
    #[default]
    Contact,
    Partnership,
}

impl FormType {
    /// The worksheet tab a submission of this type is appended to.
    pub fn tab_name(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Partnership => "Partnership",
        }
    }
}
