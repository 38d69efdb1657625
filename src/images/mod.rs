mod dto;
pub mod handlers;
pub mod services;

use crate::app::SpaService;
use crate::state::AppState;
use axum::Router;

pub fn router(spa: SpaService) -> Router<AppState> {
    Router::new().merge(handlers::image_routes(spa))
}
