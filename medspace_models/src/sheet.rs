use serde::Serialize;

use crate::lead::FormType;

/// Column span of a lead row: timestamp, name, email, message.
pub const COLUMN_SPAN: &str = "A:D";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SheetRange {
    tab: &'static str,
}

impl SheetRange {
    pub fn for_form_type(form_type: FormType) -> Self {
        Self {
            tab: form_type.tab_name(),
        }
    }

    pub fn tab(self) -> &'static str {
        self.tab
    }
}

impl std::fmt::Display for SheetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}!{COLUMN_SPAN}", self.tab)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetRow {
    pub timestamp: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl SheetRow {
    pub fn into_values(self) -> [String; 4] {
        [self.timestamp, self.name, self.email, self.message]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn range_display() {
        assert_eq!(
            SheetRange::for_form_type(FormType::Contact).to_string(),
            "contact!A:D"
        );
        assert_eq!(
            SheetRange::for_form_type(FormType::Partnership).to_string(),
            "Partnership!A:D"
        );
    }

    #[test]
    fn row_column_order() {
        let row = SheetRow {
            timestamp: "07/08/2026, 10:15:00 am".into(),
            name: "Dr. Jane Doe".into(),
            email: "jane@example.com".into(),
            message: String::new(),
        };
        assert_eq!(
            row.into_values(),
            [
                "07/08/2026, 10:15:00 am".to_owned(),
                "Dr. Jane Doe".to_owned(),
                "jane@example.com".to_owned(),
                String::new(),
            ]
        );
    }
}
