use crate::app::SpaService;
use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
pub mod repo;
pub mod repo_types;
pub mod services;

pub fn router(spa: SpaService) -> Router<AppState> {
    Router::new().merge(handlers::auth_routes(spa))
}
