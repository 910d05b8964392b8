use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;
use travel_time::web::{build_app, ServerConfig};

fn network_body() -> Value {
    json!({
        "edges": [
            {"from": "Westside", "to": "A", "distance": 2},
            {"from": "A", "to": "B", "distance": 3},
            {"from": "Westside", "to": "B", "distance": 10},
            {"from": "Island", "to": "Reef", "distance": 4}
        ],
        "origin": "Westside"
    })
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_session(app: &Router) -> String {
    let (status, summary) = send(app, "POST", "/api/networks", Some(network_body())).await;
    assert_eq!(status, StatusCode::OK, "{}", summary);
    summary["id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_create_network_summary() {
    let app = build_app(&ServerConfig::default());
    let (status, summary) = send(&app, "POST", "/api/networks", Some(network_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["origin"], "Westside");
    assert_eq!(summary["station_count"], 5);
    assert_eq!(summary["edge_count"], 4);
    assert_eq!(summary["reachable_count"], 3);
    assert_eq!(summary["metrics"]["frontier"], "ordered-stack");
    assert_eq!(summary["metrics"]["stale_pops"], 1);

    let id = summary["id"].as_str().unwrap();
    let (status, fetched) = send(&app, "GET", &format!("/api/networks/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["id"], summary["id"]);

    let (_, sessions) = send(&app, "GET", "/api/sessions", None).await;
    assert_eq!(sessions.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_station_report() {
    let app = build_app(&ServerConfig::default());
    let id = create_session(&app).await;

    let (status, report) = send(&app, "GET", &format!("/api/networks/{}/stations/B", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["reachable"], true);
    assert_eq!(report["distance"], 5);
    assert_eq!(report["minutes"], 42.5);
    assert_eq!(report["hops"], 2);
    assert_eq!(report["route"], json!(["Westside", "A", "B"]));
    assert_eq!(report["rendered_route"], "Westside->A->B");
}

#[tokio::test]
async fn test_travel_times_list_quickest_first() {
    let app = build_app(&ServerConfig::default());
    let id = create_session(&app).await;

    let (status, reports) = send(&app, "GET", &format!("/api/networks/{}/travel-times", id), None).await;
    assert_eq!(status, StatusCode::OK);

    let stations: Vec<&str> = reports
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["station"].as_str().unwrap())
        .collect();
    assert_eq!(stations, vec!["Westside", "A", "B", "Island", "Reef"]);
    assert_eq!(reports[0]["minutes"], 0.0);
    assert_eq!(reports[3]["reachable"], false);
    assert_eq!(reports[3]["minutes"], Value::Null);
}

#[tokio::test]
async fn test_station_errors() {
    let app = build_app(&ServerConfig::default());
    let id = create_session(&app).await;

    let (status, body) = send(&app, "GET", &format!("/api/networks/{}/stations/Atlantis", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "station_not_found");

    let (status, body) = send(&app, "GET", &format!("/api/networks/{}/stations/Reef", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "station_unreachable");

    let missing = "00000000-0000-0000-0000-000000000000";
    let (status, body) = send(&app, "GET", &format!("/api/networks/{}", missing), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "session_not_found");
}

#[tokio::test]
async fn test_rejects_bad_networks() {
    let app = build_app(&ServerConfig::default());

    let negative = json!({
        "edges": [{"from": "A", "to": "B", "distance": -1}],
        "origin": "A"
    });
    let (status, body) = send(&app, "POST", "/api/networks", Some(negative)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_edge_weight");

    let mut unknown_origin = network_body();
    unknown_origin["origin"] = json!("Eastside");
    let (status, body) = send(&app, "POST", "/api/networks", Some(unknown_origin)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "unknown_origin");
}

#[tokio::test]
async fn test_session_limit() {
    let config = ServerConfig {
        max_sessions: 1,
        ..Default::default()
    };
    let app = build_app(&config);
    create_session(&app).await;

    let (status, body) = send(&app, "POST", "/api/networks", Some(network_body())).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "too_many_sessions");
}

#[tokio::test]
async fn test_rejects_blank_station_names() {
    let app = build_app(&ServerConfig::default());
    let blank = json!({
        "edges": [{"from": "", "to": "B", "distance": 1}],
        "origin": "B"
    });
    let (status, body) = send(&app, "POST", "/api/networks", Some(blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid_station_name");
}

#[tokio::test]
async fn test_expired_sessions_are_dropped() {
    let config = ServerConfig {
        max_sessions: 1,
        session_timeout_minutes: 0,
        ..Default::default()
    };
    let app = build_app(&config);
    let id = create_session(&app).await;

    for path in ["", "/travel-times", "/stations/B"] {
        let (status, body) = send(&app, "GET", &format!("/api/networks/{}{}", id, path), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "path {:?}", path);
        assert_eq!(body["error"], "session_not_found");
    }

    let (_, sessions) = send(&app, "GET", "/api/sessions", None).await;
    assert_eq!(sessions, json!([]));

    // The expired session no longer counts against the limit
    create_session(&app).await;
}

#[tokio::test]
async fn test_live_sessions_survive_other_creates() {
    let app = build_app(&ServerConfig::default());
    let first = create_session(&app).await;
    create_session(&app).await;

    let (status, report) = send(&app, "GET", &format!("/api/networks/{}/stations/A", first), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["minutes"], 20.0);

    let (_, sessions) = send(&app, "GET", "/api/sessions", None).await;
    assert_eq!(sessions.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_rerun_from_new_origin() {
    let app = build_app(&ServerConfig::default());
    let id = create_session(&app).await;

    let (status, summary) = send(
        &app,
        "POST",
        &format!("/api/networks/{}/run", id),
        Some(json!({"origin": "Island", "frontier": "binary-heap"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["origin"], "Island");
    assert_eq!(summary["reachable_count"], 2);
    assert_eq!(summary["metrics"]["frontier"], "binary-heap");

    let (status, report) = send(&app, "GET", &format!("/api/networks/{}/stations/Reef", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["minutes"], 25.0);

    let (status, body) = send(&app, "GET", &format!("/api/networks/{}/stations/B", id), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "station_unreachable");
}

#[tokio::test]
async fn test_health_check() {
    let app = build_app(&ServerConfig::default());
    let (status, body) = send(&app, "GET", "/api/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
