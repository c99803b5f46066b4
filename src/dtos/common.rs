use serde::Serialize;

/// Envelope for paginated listings.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub total: i64,
    pub data: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
