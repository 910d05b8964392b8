use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{DistanceTable, FrontierKind, RunStats, TravelTimeModel};
use crate::graph::{Edge, StationGraph};

/// Request body for creating a network session
#[derive(Debug, Deserialize)]
pub struct NetworkRequest {
    pub edges: Vec<Edge>,
    pub origin: String,
    #[serde(default)]
    pub frontier: FrontierKind,
    #[serde(default)]
    pub minutes_per_distance_unit: Option<f64>,
    #[serde(default)]
    pub minutes_per_stop: Option<f64>,
}

impl NetworkRequest {
    pub fn travel_time_model(&self) -> TravelTimeModel {
        let mut model = TravelTimeModel::default();
        if let Some(minutes) = self.minutes_per_distance_unit {
            model = model.with_minutes_per_distance_unit(minutes);
        }
        if let Some(minutes) = self.minutes_per_stop {
            model = model.with_minutes_per_stop(minutes);
        }
        model
    }
}

/// Request body for re-running a session from another origin
#[derive(Debug, Deserialize)]
pub struct RunRequest {
    pub origin: String,
    #[serde(default)]
    pub frontier: Option<FrontierKind>,
}

/// Metrics collected during the last run
#[derive(Debug, Clone, Serialize)]
pub struct RunMetrics {
    pub frontier: FrontierKind,
    pub execution_time_ms: f64,
    #[serde(flatten)]
    pub stats: RunStats,
}

/// Overview of a session returned by most endpoints
#[derive(Debug, Clone, Serialize)]
pub struct NetworkSummary {
    pub id: Uuid,
    pub origin: String,
    pub station_count: usize,
    pub edge_count: usize,
    pub reachable_count: usize,
    pub model: TravelTimeModel,
    pub metrics: RunMetrics,
    pub created_at: DateTime<Utc>,
}

/// Everything known about one station relative to the origin
#[derive(Debug, Clone, Serialize)]
pub struct StationReport {
    pub station: String,
    pub reachable: bool,
    pub distance: Option<u64>,
    pub minutes: Option<f64>,
    pub hops: Option<usize>,
    pub route: Option<Vec<String>>,
    pub rendered_route: Option<String>,
}

/// Error response for API
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

/// Session holding a station graph and the table of its latest run
#[derive(Debug, Clone)]
pub struct NetworkSession {
    pub id: Uuid,
    pub graph: StationGraph<u64>,
    pub table: DistanceTable<u64>,
    pub model: TravelTimeModel,
    pub metrics: RunMetrics,
    pub created_at: DateTime<Utc>,
}

impl NetworkSession {
    pub fn new(
        graph: StationGraph<u64>,
        table: DistanceTable<u64>,
        model: TravelTimeModel,
        metrics: RunMetrics,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            graph,
            table,
            model,
            metrics,
            created_at: Utc::now(),
        }
    }
}
