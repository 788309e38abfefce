use serde::Serialize;

pub mod lead;

#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    pub error: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ApiFieldError>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFieldError {
    pub field: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiSubmitResponse {
    pub success: bool,
    pub message: &'static str,
}
