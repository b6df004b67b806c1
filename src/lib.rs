pub mod client;
pub mod dates;
pub mod editor;
pub mod error;
pub mod handlers;
pub mod list;
pub mod models;
pub mod openapi;
pub mod session;
pub mod settings;
pub mod ui;
pub mod validation;
pub mod view;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use handlers::{
    close_editor, delete_seminar, healthz_live, healthz_ready, list_page, open_editor,
    submit_editor,
};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::client::SeminarsClient;
use crate::openapi::ApiDoc;
use crate::session::Session;
use crate::settings::Settings;
use crate::view::Renderer;

#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub session: Arc<Session>,
    pub renderer: Arc<Renderer>,
}

impl AppState {
    pub fn new(settings: Settings) -> Result<Self, minijinja::Error> {
        let client = SeminarsClient::new(settings.api_url.clone());
        Ok(Self {
            settings,
            session: Arc::new(Session::new(client)),
            renderer: Arc::new(Renderer::new()?),
        })
    }
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::from_env()?;

    let env_filter = if settings.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .without_time()
        .init();

    let state = AppState::new(settings)?;
    info!("Using seminars API at {}", state.settings.api_url);

    let session = state.session.clone();
    tokio::spawn(async move { session.mount().await });

    let app = build_router(state.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], state.settings.port));
    info!("Starting seminars UI on {addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let session = state.session.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("Failed to listen for shutdown signal: {err}");
            }
            session.unmount();
        })
        .await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        );

    let mut router = Router::new()
        .route("/", get(list_page))
        .route("/healthz/live", get(healthz_live))
        .route("/healthz/ready", get(healthz_ready))
        .route("/seminars/{id}/delete", post(delete_seminar))
        .route("/seminars/{id}/edit", post(open_editor))
        .route("/editor", post(submit_editor))
        .route("/editor/close", post(close_editor))
        .with_state(state.clone());

    if state.settings.enable_swagger {
        let openapi = ApiDoc::openapi();
        let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi);
        router = router.merge(swagger);
    }

    router.layer(trace_layer)
}
