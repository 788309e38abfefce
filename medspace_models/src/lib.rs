use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

pub mod lead;
pub mod sheet;

/// Leading characters that make a spreadsheet cell parse as a formula.
pub static FORMULA_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[=+\-@]").unwrap());

pub(crate) fn formula_safe(value: &str) -> bool {
    !FORMULA_PREFIX_REGEX.is_match(value)
}

pub(crate) fn valid_email(value: &str) -> bool {
    email_address::EmailAddress::is_valid(value)
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sensitive<T>(pub T);

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[redacted]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
