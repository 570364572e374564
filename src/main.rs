use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use langgate::application::services::DetectionService;
use langgate::infrastructure::detectors::DetectorFactory;
use langgate::infrastructure::observability::{TracingConfig, init_tracing};
use langgate::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let detectors = DetectorFactory::create_all(&settings.detectors);
    tracing::info!(providers = detectors.len(), "Detector registry built");

    let detection_service = Arc::new(DetectionService::new(detectors));
    let state = AppState::new(detection_service);
    let router = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.server.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
