use serde::{Deserialize, Serialize};
use serde_json::Value;

/// POST /api/gemini-image { prompt, count? }
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GenerateImagesRequest {
    pub prompt: Option<Value>,
    pub count: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct GenerateImagesResponse {
    pub ok: bool,
    pub images: Vec<String>,
}
