use std::net::SocketAddr;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::routes::health::health_route;
use crate::state::AppState;
use crate::{auth, images, video};

const BODY_LIMIT: usize = 2 * 1024 * 1024; // 2MB

/// Static assets with `index.html` behind every miss.
pub type SpaService = ServeDir<ServeFile>;

pub fn spa_service(config: &AppConfig) -> SpaService {
    ServeDir::new(&config.static_dir).fallback(ServeFile::new(config.index_file()))
}

pub fn build_app(state: AppState) -> Router {
    // Existing assets are served as-is, anything else gets index.html so the
    // front-end router can handle it. API paths hit with the wrong method
    // fall through to the same service.
    let spa = spa_service(&state.config);

    Router::new()
        .nest("/api",
              Router::new()
                  .merge(auth::router(spa.clone()))
                  .merge(images::router(spa.clone()))
                  .merge(video::router(spa.clone()))
                  .route("/health", get(health_route).fallback_service(spa.clone()))
        )
        .fallback_service(spa)
        .with_state(state)
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &axum::http::Request<_>| {
                    let method = req.method().clone();
                    let uri = req.uri().clone();
                    tracing::info_span!("http_request", %method, uri = %uri, status = tracing::field::Empty)
                })
                .on_request(|req: &axum::http::Request<_>, _span: &tracing::Span| {
                    tracing::info!(method = %req.method(), path = %req.uri().path(), "request");
                })
                .on_response(
                    |res: &axum::http::Response<_>,
                     _latency: std::time::Duration,
                     span: &tracing::Span| {
                        let status = res.status();
                        span.record("status", tracing::field::display(status));
                        if status.is_server_error() {
                            tracing::error!(%status, "response");
                        } else {
                            tracing::info!(%status, "response");
                        }
                    },
                ),
        )
}

pub async fn serve(app: Router, state: &AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port).parse()?;

    tracing::info!("modemode.ai API server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::services::ImageGenerator;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt; // for `oneshot`

    const INDEX_HTML: &str = "<!doctype html><title>modemode</title><div id=\"root\"></div>";

    fn spa_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log('hi');").unwrap();
        dir
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let mut req = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(v) => {
                req = req.header("content-type", "application/json");
                Body::from(v.to_string())
            }
            None => Body::empty(),
        };
        let resp = app.clone().oneshot(req.body(body).unwrap()).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let (status, bytes) = send(app, Method::POST, uri, Some(body)).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_reports_status() {
        let dir = spa_dir();
        let app = build_app(AppState::fake_with_static_dir(dir.path().to_path_buf()));

        let (status, bytes) = send(&app, Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["ok"], true);
        assert_eq!(v["hasGeminiKey"], false);
        assert!(v["message"].as_str().unwrap().contains("modemode.ai"));
    }

    #[tokio::test]
    async fn signup_login_scenario() {
        let dir = spa_dir();
        let state = AppState::fake_with_static_dir(dir.path().to_path_buf());
        let users = state.users.clone();
        let app = build_app(state);

        let signup = json!({"name": "A", "email": "a@x.com", "password": "p"});
        let (status, v) = post_json(&app, "/api/auth/signup", signup.clone()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v, json!({"ok": true, "email": "a@x.com", "name": "A"}));

        let (status, v) = post_json(&app, "/api/auth/signup", signup).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["ok"], false);
        assert!(!v["msg"].as_str().unwrap().is_empty());
        assert_eq!(users.count().await.unwrap(), 1);

        let (status, v) = post_json(
            &app,
            "/api/auth/login",
            json!({"email": "a@x.com", "password": "p"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["ok"], true);
        assert_eq!(v["email"], "a@x.com");
        assert_eq!(v["name"], "A");
        assert!(v["token"].as_str().unwrap().starts_with("demo-token-"));

        let (status, v) = post_json(
            &app,
            "/api/auth/login",
            json!({"email": "a@x.com", "password": "wrong"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(v["ok"], false);

        let (status, unknown) = post_json(
            &app,
            "/api/auth/login",
            json!({"email": "nobody@x.com", "password": "p"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(unknown, v);
    }

    #[tokio::test]
    async fn signup_missing_fields_is_bad_request() {
        let app = build_app(AppState::fake());
        for body in [
            json!({"email": "a@x.com", "password": "p"}),
            json!({"name": "A", "password": "p"}),
            json!({"name": "A", "email": "a@x.com"}),
            json!({"name": "", "email": "a@x.com", "password": "p"}),
        ] {
            let (status, v) = post_json(&app, "/api/auth/signup", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(v["ok"], false);
        }
    }

    #[tokio::test]
    async fn login_missing_fields_is_bad_request() {
        let app = build_app(AppState::fake());
        let (status, v) = post_json(&app, "/api/auth/login", json!({"email": "a@x.com"})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["ok"], false);
    }

    #[tokio::test]
    async fn malformed_json_uses_envelope() {
        let app = build_app(AppState::fake());
        let req = Request::builder()
            .method(Method::POST)
            .uri("/api/auth/login")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["ok"], false);
    }

    #[tokio::test]
    async fn image_generation_caps_and_defaults() {
        let app = build_app(AppState::fake());

        let (status, v) = post_json(&app, "/api/gemini-image", json!({"prompt": "hat", "count": 10})).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["ok"], true);
        assert_eq!(v["images"].as_array().unwrap().len(), 4);

        let (_, v) = post_json(&app, "/api/gemini-image", json!({"prompt": "hat"})).await;
        assert_eq!(v["images"].as_array().unwrap().len(), 4);

        let (_, v) = post_json(&app, "/api/gemini-image", json!({"prompt": "hat", "count": 2})).await;
        let images = v["images"].as_array().unwrap();
        assert_eq!(images.len(), 2);
        assert!(images[0].as_str().unwrap().starts_with("https://picsum.photos/seed/hat-0-"));
    }

    #[tokio::test]
    async fn image_generation_requires_prompt() {
        let app = build_app(AppState::fake());
        let (status, v) = post_json(&app, "/api/gemini-image", json!({"count": 2})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["ok"], false);
    }

    #[tokio::test]
    async fn image_generation_failure_is_internal_error() {
        struct Broken;
        #[async_trait::async_trait]
        impl ImageGenerator for Broken {
            async fn generate(&self, _prompt: &str, _count: usize) -> anyhow::Result<Vec<String>> {
                anyhow::bail!("backend down")
            }
        }

        let fake = AppState::fake();
        let state = AppState::from_parts(fake.config, fake.users, Arc::new(Broken));
        let app = build_app(state);

        let (status, v) = post_json(&app, "/api/gemini-image", json!({"prompt": "hat"})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(v["ok"], false);
        assert!(!v["msg"].as_str().unwrap().contains("backend down"));
    }

    #[tokio::test]
    async fn video_returns_sample_for_images() {
        let app = build_app(AppState::fake());
        let (status, v) = post_json(
            &app,
            "/api/video-from-images",
            json!({"images": ["https://picsum.photos/seed/a/800/1200"]}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["ok"], true);
        assert_eq!(v["videoUrl"], crate::video::SAMPLE_VIDEO_URL);
    }

    #[tokio::test]
    async fn video_rejects_non_array_or_empty_images() {
        let app = build_app(AppState::fake());
        for body in [json!({"images": "nope"}), json!({"images": []}), json!({})] {
            let (status, v) = post_json(&app, "/api/video-from-images", body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(v["ok"], false);
        }
    }

    #[tokio::test]
    async fn unmatched_paths_serve_spa_entry() {
        let dir = spa_dir();
        let app = build_app(AppState::fake_with_static_dir(dir.path().to_path_buf()));

        for uri in ["/anything-unmatched", "/studio/123", "/"] {
            let (status, bytes) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(String::from_utf8(bytes).unwrap(), INDEX_HTML);
        }
    }

    #[tokio::test]
    async fn existing_assets_are_served() {
        let dir = spa_dir();
        let app = build_app(AppState::fake_with_static_dir(dir.path().to_path_buf()));

        let (status, bytes) = send(&app, Method::GET, "/app.js", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(String::from_utf8(bytes).unwrap(), "console.log('hi');");
    }

    #[tokio::test]
    async fn get_on_post_only_api_paths_serves_spa_entry() {
        let dir = spa_dir();
        let app = build_app(AppState::fake_with_static_dir(dir.path().to_path_buf()));

        for uri in [
            "/api/gemini-image",
            "/api/video-from-images",
            "/api/auth/login",
            "/api/auth/signup",
            "/api/unknown",
        ] {
            let (status, bytes) = send(&app, Method::GET, uri, None).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
            assert_eq!(String::from_utf8(bytes).unwrap(), INDEX_HTML, "{}", uri);
        }
    }

    #[tokio::test]
    async fn wrong_field_type_gets_generic_message() {
        let app = build_app(AppState::fake());
        let (status, v) = post_json(
            &app,
            "/api/auth/signup",
            json!({"name": "A", "email": "a@x.com", "password": 1234}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["ok"], false);
        assert_eq!(v["msg"], "Invalid JSON body");
    }

    #[tokio::test]
    async fn oversized_body_is_payload_too_large() {
        let app = build_app(AppState::fake());
        let prompt = "x".repeat(3 * 1024 * 1024);
        let (status, v) = post_json(&app, "/api/gemini-image", json!({"prompt": prompt})).await;
        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(v["ok"], false);
    }
}
