mod analysis;
mod models;
mod tools;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use analysis::{
    analyze_market_data, build_insights, enhance_query, research_catalog, save_results,
    summarize_metrics,
};
use models::{AnalyzeRequest, AnalyzeResponse, ErrorMessage, ResearchCatalog};
use tools::tavily::{SearchProvider, TavilyClient};

#[derive(Clone)]
struct AppState {
    search: Arc<dyn SearchProvider>,
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("market_research_assistant=debug,tower_http=info")
        .init();

    let api_key = env::var("TAVILY_API_KEY")
        .map_err(|_| anyhow::anyhow!("TAVILY_API_KEY not set"))?;
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let output_dir = env::var("OUTPUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));

    let state = AppState {
        search: Arc::new(TavilyClient::new(api_key)),
        output_dir,
    };

    let app = Router::new()
        .route("/health", get(health))
        .route("/templates", get(templates))
        .route("/analyze", post(analyze))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("Market research assistant running on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn templates() -> Json<ResearchCatalog> {
    Json(research_catalog())
}

#[instrument(skip(state))]
async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, Json<ErrorMessage>)> {
    let start_time = std::time::Instant::now();

    if req.query.trim().is_empty() {
        warn!("Rejected analysis request with a blank query");
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Please enter a research query",
        ));
    }

    let analysis_id = Uuid::new_v4().to_string();
    info!("Starting analysis {} ({})", analysis_id, req.analysis_type);

    let Some(response) =
        analyze_market_data(state.search.as_ref(), &req.query, req.analysis_type).await
    else {
        return Err(reject(StatusCode::BAD_GATEWAY, "Analysis failed"));
    };

    let saved_to = if response.results.is_empty() {
        info!("Analysis {} returned no results", analysis_id);
        None
    } else {
        match save_results(&response, &state.output_dir) {
            Ok(path) => {
                info!("Research saved to {}", path.display());
                Some(path.display().to_string())
            }
            Err(e) => {
                warn!("Could not save research artifact: {:#}", e);
                None
            }
        }
    };

    let insights = build_insights(&response.results);
    let metric_summary = summarize_metrics(&response.results);

    Ok(Json(AnalyzeResponse {
        analysis_id,
        enhanced_query: enhance_query(&req.query, req.analysis_type),
        query: req.query,
        analysis_type: req.analysis_type,
        insights,
        metric_summary,
        results: response.results,
        saved_to,
        total_time_ms: start_time.elapsed().as_millis() as u64,
    }))
}

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<ErrorMessage>) {
    (
        status,
        Json(ErrorMessage {
            message: message.to_string(),
        }),
    )
}
