use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::header::{HeaderValue, CONTENT_TYPE},
    http::Method,
    routing::{get, post},
    Router,
};
use clap::Parser;
use dotenvy::dotenv;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use tm_common::embedding::{create_embedder, EmbedderConfig, ModelCell};
use tm_common::logging::init_logging;

pub mod error;
pub mod handlers;

use error::ApiError;
use handlers::{assist, health, matching};

#[derive(Debug, Clone, Parser)]
#[command(name = "tm-api", about = "Embedding-based matching service for the HR platform")]
struct Cli {
    /// Server port
    #[arg(long, env = "PORT", default_value_t = 8000)]
    port: u16,

    /// Comma separated list of allowed CORS origins
    #[arg(long, env = "TM_CORS_ORIGINS", default_value = "http://localhost:3000")]
    cors_origins: String,

    /// Sentence encoder implementation to load at startup
    #[arg(long, env = "TM_EMBEDDER", default_value = "hash")]
    embedder: String,

    /// Embedding dimension for the loaded encoder
    #[arg(long, env = "TM_EMBED_DIMENSION", default_value_t = 384)]
    embed_dimension: usize,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub embedder: String,
    pub embed_dimension: usize,
}

impl AppConfig {
    fn from_cli(cli: Cli) -> Result<Self, ApiError> {
        let cors_origins = cli
            .cors_origins
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect::<Vec<_>>();

        if cli.embed_dimension == 0 {
            return Err(ApiError::BadRequest(
                "TM_EMBED_DIMENSION must be positive".into(),
            ));
        }

        Ok(Self {
            port: cli.port,
            cors_origins,
            embedder: cli.embedder,
            embed_dimension: cli.embed_dimension,
        })
    }
}

pub struct AppState {
    pub model: ModelCell,
    pub config: AppConfig,
}

pub type SharedState = Arc<AppState>;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed = origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn create_router(state: SharedState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let ai_routes = Router::new()
        .route("/skills-match", post(matching::skills_match))
        .route("/rank-resumes", post(matching::rank_resumes))
        .route("/generate-onboarding", post(assist::generate_onboarding))
        .route("/generate-questions", post(assist::generate_questions))
        .route("/query", post(assist::query_policy))
        .route("/perf-insight", post(assist::perf_insight));

    Router::new()
        .route("/health", get(health::health_check))
        .route("/readyz", get(health::readyz))
        .nest("/ai", ai_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub async fn run() -> Result<(), ApiError> {
    dotenv().ok();
    init_logging("tm-api");

    let cli = Cli::parse();
    let config = AppConfig::from_cli(cli)?;

    tm_metrics::init_metrics("TM_METRICS_PORT");

    // Load the encoder exactly once at startup; requests that land before
    // `install` completes see 503 from the readiness/ranking paths.
    let model = ModelCell::new();
    model.begin_loading();
    model.install(create_embedder(
        &config.embedder,
        EmbedderConfig {
            dimension: config.embed_dimension,
        },
    ));

    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();
    let state = Arc::new(AppState {
        model,
        config: config.clone(),
    });
    let app = create_router(state);

    info!(%addr, embedder = %config.embedder, dimension = config.embed_dimension, "tm-api listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    axum::serve(listener, app)
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?;

    Ok(())
}

/// State with a ready encoder, for router-level tests.
pub fn test_state() -> SharedState {
    let model = ModelCell::new();
    model.begin_loading();
    model.install(create_embedder("hash", EmbedderConfig::default()));
    Arc::new(AppState {
        model,
        config: test_config(),
    })
}

/// State whose encoder never finished loading; readiness and ranking must
/// refuse with 503.
pub fn test_state_unloaded() -> SharedState {
    let model = ModelCell::new();
    model.begin_loading();
    Arc::new(AppState {
        model,
        config: test_config(),
    })
}

fn test_config() -> AppConfig {
    AppConfig {
        port: 8000,
        cors_origins: Vec::new(),
        embedder: "hash".into(),
        embed_dimension: 384,
    }
}
