use serde::Serialize;

/// The uniform response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub code: u16,
    pub msg: String,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            code: 0,
            msg: String::new(),
        }
    }

    pub fn error(code: u16, msg: impl Into<String>) -> Self {
        Self {
            data: None,
            code,
            msg: msg.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
