use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use emotion_furnace::adapters::ai::{
    ChatCompletionConfig, ChatCompletionProvider, LlmEmotionClassifier,
};
use emotion_furnace::adapters::http::{build_router, AppState};
use emotion_furnace::adapters::storage::InMemoryBurnRecordRepository;
use emotion_furnace::application::handlers::AnalyzeTextHandler;
use emotion_furnace::config::AppConfig;
use emotion_furnace::domain::emotion::AssetCatalog;
use emotion_furnace::ports::EmotionClassifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config);

    let classifier: Option<Arc<dyn EmotionClassifier>> = match config.upstream.credentials() {
        Some(credentials) => {
            let provider = ChatCompletionProvider::new(ChatCompletionConfig::from_credentials(
                credentials,
                config.upstream.timeout(),
            ))?;
            Some(Arc::new(LlmEmotionClassifier::new(Arc::new(provider))))
        }
        None => {
            warn!("Upstream API key, URL or model missing; every analysis uses the keyword fallback");
            None
        }
    };

    let state = AppState {
        analyze_handler: Arc::new(AnalyzeTextHandler::new(classifier)),
        records: Arc::new(InMemoryBurnRecordRepository::new()),
        assets: Arc::new(AssetCatalog::new()),
    };
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, environment = ?config.server.environment, "Emotion furnace listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
