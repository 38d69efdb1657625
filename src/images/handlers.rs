use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    app::SpaService,
    extractors::JsonBody,
    error::{AppError, Result},
    state::AppState,
};

use super::dto::{GenerateImagesRequest, GenerateImagesResponse};
use super::services::{image_count, prompt_text};

pub fn image_routes(spa: SpaService) -> Router<AppState> {
    Router::new().route(
        "/gemini-image",
        post(generate_images).fallback_service(spa),
    )
}

#[instrument(skip(state, body))]
pub async fn generate_images(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<GenerateImagesRequest>,
) -> Result<Json<GenerateImagesResponse>> {
    let Some(prompt) = prompt_text(body.prompt.as_ref()) else {
        warn!("image request without prompt");
        return Err(AppError::Validation("prompt is required".into()));
    };
    let count = image_count(body.count.as_ref());

    let images = state
        .images
        .generate(&prompt, count)
        .await
        .map_err(|e| AppError::internal("Image generation failed due to a server error", e))?;

    info!(count = images.len(), "images generated");
    Ok(Json(GenerateImagesResponse { ok: true, images }))
}
