use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    pub success: bool,
    pub data: serde_json::Value,
}

impl PreviewResponse {
    pub fn new(data: serde_json::Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Error body shared by every failing route.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub detail: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub mode: &'static str,
}
