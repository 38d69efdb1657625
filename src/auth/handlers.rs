use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    app::SpaService,
    auth::{
        dto::{LoginRequest, LoginResponse, SignupRequest, SignupResponse},
        services,
    },
    error::Result,
    extractors::JsonBody,
    state::AppState,
};

pub fn auth_routes(spa: SpaService) -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup).fallback_service(spa.clone()))
        .route("/auth/login", post(login).fallback_service(spa))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<SignupRequest>,
) -> Result<Json<SignupResponse>> {
    let user = match services::signup(state.users.as_ref(), payload).await {
        Ok(u) => u,
        Err(e) => {
            warn!(error = %e, "signup rejected");
            return Err(e);
        }
    };

    let total = state.users.count().await.unwrap_or_default();
    info!(email = %user.email, total, "user signed up");
    Ok(Json(SignupResponse {
        ok: true,
        email: user.email,
        name: user.name,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let (user, token) = match services::login(state.users.as_ref(), payload).await {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "login rejected");
            return Err(e);
        }
    };

    info!(email = %user.email, "user logged in");
    Ok(Json(LoginResponse {
        ok: true,
        email: user.email,
        name: user.name,
        token,
    }))
}
