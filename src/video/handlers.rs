use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::{
    app::SpaService,
    extractors::JsonBody,
    error::{AppError, Result},
    state::AppState,
};

use super::SAMPLE_VIDEO_URL;

/// POST /api/video-from-images { images: [...] }
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct VideoRequest {
    pub images: Option<Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub ok: bool,
    pub video_url: String,
}

pub fn video_routes(spa: SpaService) -> Router<AppState> {
    Router::new().route(
        "/video-from-images",
        post(video_from_images).fallback_service(spa),
    )
}

/// The images are checked for shape only; their content does not affect the result.
#[instrument(skip(body))]
pub async fn video_from_images(
    JsonBody(body): JsonBody<VideoRequest>,
) -> Result<Json<VideoResponse>> {
    let frames = match body.images {
        Some(Value::Array(items)) if !items.is_empty() => items.len(),
        _ => {
            warn!("video request without images");
            return Err(AppError::Validation("images must be a non-empty array".into()));
        }
    };

    info!(frames, "returning sample video");
    Ok(Json(VideoResponse {
        ok: true,
        video_url: SAMPLE_VIDEO_URL.to_string(),
    }))
}
