use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

mod models;
mod routes;
mod services;

use routes::{
    health::health_check, highlights::highlighted_verses, passage::passage_lookup,
    search::passage_search,
};
use services::esv::{EsvClient, DEFAULT_BASE_URL};

type Esv = Arc<EsvClient>;

fn app(esv: Esv) -> Router {
    Router::new()
        .route("/status", get(health_check))
        .route("/api", get(passage_lookup))
        .route("/search", get(passage_search))
        .route("/highlighted", get(highlighted_verses))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(esv)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("scripture_service=info,tower_http=info")
        .init();

    let api_key = match std::env::var("API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            error!("API_KEY must be set to an ESV API credential");
            std::process::exit(1);
        }
    };

    let base_url = std::env::var("ESV_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

    let esv: Esv = match EsvClient::new(&base_url, &api_key) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            error!("Failed to build upstream client: {}", e);
            std::process::exit(1);
        }
    };

    let port = std::env::var("PORT").unwrap_or_else(|_| "7004".to_string());
    let addr = format!("0.0.0.0:{}", port);

    info!("Scripture service starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app(esv)).await.unwrap();
}
