pub mod handlers;

use crate::app::SpaService;
use crate::state::AppState;
use axum::Router;

/// Sample clip returned for every request until real video synthesis exists.
pub const SAMPLE_VIDEO_URL: &str =
    "https://sample-videos.com/video321/mp4/720/big_buck_bunny_720p_1mb.mp4";

pub fn router(spa: SpaService) -> Router<AppState> {
    Router::new().merge(handlers::video_routes(spa))
}
