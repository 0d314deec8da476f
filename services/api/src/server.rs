use crate::cli::ServeArgs;
use crate::infra::{load_cutoffs, AppState};
use crate::routes::with_calculator_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use enlist_calc::calculators::{SavingsEngine, SavingsTables, ScoreEngine};
use enlist_calc::config::AppConfig;
use enlist_calc::error::AppError;
use enlist_calc::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let cutoffs = load_cutoffs(None, &config.datasets)?;
    let score_engine = Arc::new(ScoreEngine::new(Arc::new(cutoffs)));
    let savings_engine = Arc::new(SavingsEngine::new(Arc::new(SavingsTables::standard())));

    let app = with_calculator_routes(score_engine, savings_engine)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "enlistment calculators ready");

    axum::serve(listener, app).await?;
    Ok(())
}
