//! Dashboard HTTP server.
//!
//! A thin axum layer over the query functions: the single page is
//! served from an embedded template, and each UI interaction hits one
//! JSON endpoint. The dataset and aggregates live in a shared,
//! read-only [`AppState`] built once at startup and injected into the
//! handlers; no handler mutates anything.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::aggregator::{payload_marks, Aggregates, PayloadMark};
use crate::chart::{PieChart, ScatterChart};
use crate::dataset::LaunchRecord;
use crate::query::{pie_chart_data, scatter_data, SiteSelection};
use crate::utils::config::{
    ALL_SITES, PAYLOAD_SLIDER_MAX_KG, PAYLOAD_SLIDER_MIN_KG, PAYLOAD_SLIDER_STEP_KG,
    SCATTER_Y_MAX, SCATTER_Y_MIN,
};
use crate::utils::error::QueryError;

const INDEX_HTML: &str = include_str!("index.html");

/// Read-only shared state behind every handler.
pub struct AppState {
    pub records: Vec<LaunchRecord>,
    pub aggregates: Aggregates,
}

/// Build the dashboard router with its state attached.
///
/// **Public** - split from [`serve`] so integration tests can drive
/// the router without binding a socket.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/meta", get(meta_handler))
        .route("/api/pie", get(pie_handler))
        .route("/api/scatter", get(scatter_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the dashboard until the process is killed.
pub async fn serve(
    records: Vec<LaunchRecord>,
    aggregates: Aggregates,
    port: u16,
) -> anyhow::Result<()> {
    let state = Arc::new(AppState { records, aggregates });
    let app = build_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Dashboard running at http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

// API handlers

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Option for the site selector dropdown.
#[derive(Debug, Serialize)]
struct SiteOption {
    value: String,
    label: String,
}

#[derive(Debug, Serialize)]
struct SliderConfig {
    min: f64,
    max: f64,
    step: f64,
    marks: Vec<PayloadMark>,
}

/// Everything the frontend needs to build its two controls.
#[derive(Debug, Serialize)]
struct Meta {
    sites: Vec<SiteOption>,
    slider: SliderConfig,
    /// Initial slider selection: observed payload min/max
    initial_range: (f64, f64),
}

async fn meta_handler(State(state): State<Arc<AppState>>) -> Json<Meta> {
    let aggregates = &state.aggregates;

    let mut sites = vec![SiteOption {
        value: ALL_SITES.to_string(),
        label: "All Sites".to_string(),
    }];
    for code in aggregates.sites.codes() {
        if let Some(name) = aggregates.sites.name_for(code) {
            sites.push(SiteOption {
                value: code.clone(),
                label: name.to_string(),
            });
        }
    }

    Json(Meta {
        sites,
        slider: SliderConfig {
            min: PAYLOAD_SLIDER_MIN_KG,
            max: PAYLOAD_SLIDER_MAX_KG,
            step: PAYLOAD_SLIDER_STEP_KG,
            marks: payload_marks(),
        },
        initial_range: (aggregates.payload_min_kg, aggregates.payload_max_kg),
    })
}

#[derive(Debug, Deserialize)]
struct PieParams {
    site: String,
}

async fn pie_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PieParams>,
) -> Json<PieChart> {
    let selection = SiteSelection::parse(&params.site);
    match pie_chart_data(&state.aggregates, &selection) {
        Ok(chart) => Json(chart),
        Err(QueryError::UnknownSite(code)) => {
            warn!("Pie query for unknown site code {:?}", code);
            Json(PieChart::empty(format!("No data for site {}", code)))
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScatterParams {
    site: String,
    low: f64,
    high: f64,
}

async fn scatter_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ScatterParams>,
) -> Json<ScatterChart> {
    let selection = SiteSelection::parse(&params.site);
    let range = (params.low, params.high);
    match scatter_data(&state.records, &state.aggregates, &selection, range) {
        Ok(chart) => Json(chart),
        Err(QueryError::UnknownSite(code)) => {
            warn!("Scatter query for unknown site code {:?}", code);
            Json(ScatterChart::empty(
                format!("No data for site {}", code),
                range,
                (SCATTER_Y_MIN, SCATTER_Y_MAX),
            ))
        }
    }
}
