use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use uuid::Uuid;

use crate::algorithm::{render_route, DistanceTable, FrontierKind, ShortestPathEngine};
use crate::graph::{Graph, StationGraph};
use crate::web::models::*;
use crate::Error;

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<Mutex<HashMap<Uuid, NetworkSession>>>,
    max_sessions: usize,
    session_timeout: Duration,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_limits(1000, 60)
    }

    /// State that keeps at most `max_sessions` sessions, each for `timeout_minutes`
    ///
    /// Expired sessions are dropped whenever the store is read or written.
    pub fn with_limits(max_sessions: usize, timeout_minutes: i64) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            max_sessions,
            session_timeout: Duration::minutes(timeout_minutes),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<Uuid, NetworkSession>>, ApiError> {
        self.sessions.lock().map_err(|_| {
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_store_unavailable",
                "Session store is unavailable".to_string(),
            )
        })
    }

    /// Drops sessions older than the configured timeout
    fn prune_expired(&self, sessions: &mut HashMap<Uuid, NetworkSession>) {
        let cutoff = Utc::now() - self.session_timeout;
        sessions.retain(|_, s| s.created_at > cutoff);
    }

    fn session(&self, id: Uuid) -> Result<NetworkSession, ApiError> {
        let mut sessions = self.lock()?;
        self.prune_expired(&mut sessions);
        sessions.get(&id).cloned().ok_or_else(session_not_found)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the API router
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/api/networks", post(create_network))
        .route("/api/networks/:session_id", get(get_network))
        .route("/api/networks/:session_id/run", post(rerun_network))
        .route("/api/networks/:session_id/travel-times", get(travel_times))
        .route("/api/networks/:session_id/stations/:station", get(station_report))
        .route("/api/sessions", get(list_sessions))
        .route("/api/health", get(health_check))
}

/// Build a station graph from an edge list and run it from the requested origin
pub async fn create_network(
    State(state): State<AppState>,
    Json(request): Json<NetworkRequest>,
) -> ApiResult<NetworkSummary> {
    let model = request.travel_time_model();
    let graph = StationGraph::from_edges(request.edges).map_err(engine_error)?;
    let (table, metrics) = run_engine(&graph, &request.origin, request.frontier)?;
    let session = NetworkSession::new(graph, table, model, metrics);
    let summary = summarize(&session);

    {
        let mut sessions = state.lock()?;
        state.prune_expired(&mut sessions);

        if sessions.len() >= state.max_sessions {
            log::warn!("rejecting network: {} sessions already open", sessions.len());
            return Err(error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "too_many_sessions",
                format!("At most {} sessions may be open", state.max_sessions),
            ));
        }
        sessions.insert(session.id, session);
    }

    log::info!(
        "created network {} with {} stations from origin {}",
        summary.id,
        summary.station_count,
        summary.origin
    );
    Ok(Json(summary))
}

/// Get the summary of a session
pub async fn get_network(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<NetworkSummary> {
    let session = state.session(session_id)?;
    Ok(Json(summarize(&session)))
}

/// Re-run a session's graph from a different origin
pub async fn rerun_network(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<RunRequest>,
) -> ApiResult<NetworkSummary> {
    let session = state.session(session_id)?;
    let frontier = request.frontier.unwrap_or(session.metrics.frontier);
    let (table, metrics) = run_engine(&session.graph, &request.origin, frontier)?;

    let mut sessions = state.lock()?;
    let stored = sessions.get_mut(&session_id).ok_or_else(session_not_found)?;
    stored.table = table;
    stored.metrics = metrics;
    Ok(Json(summarize(stored)))
}

/// Reports for every station, quickest first and unreachable stations last
pub async fn travel_times(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> ApiResult<Vec<StationReport>> {
    let session = state.session(session_id)?;

    let reachable = session
        .model
        .sorted_travel_times(&session.table)
        .map_err(engine_error)?;
    let mut unreachable: Vec<&str> = session
        .table
        .iter()
        .filter(|(_, entry)| !entry.is_reachable())
        .map(|(station, _)| station)
        .collect();
    unreachable.sort_unstable();

    let mut reports = Vec::with_capacity(session.table.len());
    for (station, _) in &reachable {
        reports.push(build_report(&session, station).map_err(engine_error)?);
    }
    for station in unreachable {
        reports.push(build_report(&session, station).map_err(engine_error)?);
    }
    Ok(Json(reports))
}

/// Distance, travel time and route for one station
pub async fn station_report(
    State(state): State<AppState>,
    Path((session_id, station)): Path<(Uuid, String)>,
) -> ApiResult<StationReport> {
    let session = state.session(session_id)?;
    let report = build_report(&session, &station).map_err(engine_error)?;
    // Unreachable stations are listed in travel-times but are an error here
    if !report.reachable {
        return Err(engine_error(Error::UnreachableNode(station)));
    }
    Ok(Json(report))
}

/// List all active sessions
pub async fn list_sessions(State(state): State<AppState>) -> ApiResult<Vec<Uuid>> {
    let mut sessions = state.lock()?;
    state.prune_expired(&mut sessions);
    let session_ids: Vec<Uuid> = sessions.keys().cloned().collect();
    Ok(Json(session_ids))
}

/// Health check endpoint
pub async fn health_check() -> ApiResult<serde_json::Value> {
    Ok(Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    })))
}

// Helper functions

fn run_engine(
    graph: &StationGraph<u64>,
    origin: &str,
    frontier: FrontierKind,
) -> Result<(DistanceTable<u64>, RunMetrics), ApiError> {
    if !graph.has_station(origin) {
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "unknown_origin",
            format!("Origin {} is not a station of this network", origin),
        ));
    }

    let start_time = Instant::now();
    let (table, stats) = ShortestPathEngine::new()
        .with_frontier(frontier)
        .run_with_stats(graph, origin)
        .map_err(engine_error)?;
    let metrics = RunMetrics {
        frontier,
        execution_time_ms: start_time.elapsed().as_secs_f64() * 1000.0,
        stats,
    };
    Ok((table, metrics))
}

fn build_report(session: &NetworkSession, station: &str) -> crate::Result<StationReport> {
    let distance = session.table.distance(station)?;
    if distance.is_none() {
        return Ok(StationReport {
            station: station.to_string(),
            reachable: false,
            distance: None,
            minutes: None,
            hops: None,
            route: None,
            rendered_route: None,
        });
    }

    let route = session.table.trace_route(station)?;
    let minutes = session.model.time_for(&session.table, station)?;
    Ok(StationReport {
        station: station.to_string(),
        reachable: true,
        distance,
        minutes: Some(minutes),
        hops: Some(route.len() - 1),
        rendered_route: Some(render_route(&route)),
        route: Some(route),
    })
}

fn summarize(session: &NetworkSession) -> NetworkSummary {
    NetworkSummary {
        id: session.id,
        origin: session.table.origin().to_string(),
        station_count: session.graph.station_count(),
        edge_count: session.graph.edge_count(),
        reachable_count: session.table.reachable_count(),
        model: session.model,
        metrics: session.metrics.clone(),
        created_at: session.created_at,
    }
}

fn error_response(status: StatusCode, error: &str, message: String) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.to_string(),
            message,
            details: None,
        }),
    )
}

fn session_not_found() -> ApiError {
    error_response(
        StatusCode::NOT_FOUND,
        "session_not_found",
        "Session not found".to_string(),
    )
}

fn engine_error(err: Error) -> ApiError {
    let (status, error) = match &err {
        Error::KeyNotFound(_) => (StatusCode::NOT_FOUND, "station_not_found"),
        Error::UnreachableNode(_) => (StatusCode::UNPROCESSABLE_ENTITY, "station_unreachable"),
        Error::InvalidEdgeWeight { .. } => (StatusCode::BAD_REQUEST, "invalid_edge_weight"),
        Error::InvalidStationName { .. } => (StatusCode::BAD_REQUEST, "invalid_station_name"),
        Error::MalformedRecord { .. } => (StatusCode::BAD_REQUEST, "malformed_record"),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, "algorithm_execution_failed"),
    };
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        log::warn!("request failed: {}", err);
    }
    error_response(status, error, err.to_string())
}
