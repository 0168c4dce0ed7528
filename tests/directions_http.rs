use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use delivery_route_display::clients::google_directions_client::GoogleDirectionsClient;
use delivery_route_display::models::coordinate::Coordinate;
use delivery_route_display::models::route::RouteRequest;
use delivery_route_display::services::routing_service::{RoutingError, RoutingService};

async fn directions_ok(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("key").map(String::as_str) != Some("clave") {
        return Json(json!({
            "status": "REQUEST_DENIED",
            "error_message": "The provided API key is invalid."
        }));
    }
    Json(json!({
        "status": "OK",
        "routes": [{
            "summary": "Los Carrera",
            "legs": [
                {
                    "distance": {"text": "6 km", "value": 6000},
                    "duration": {"text": "10 min", "value": 600}
                },
                {
                    "distance": {"text": "4 km", "value": 4000},
                    "duration": {"text": "7 min", "value": 420}
                }
            ],
            "overview_polyline": {"points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@"},
            "waypoint_order": [0]
        }]
    }))
}

async fn directions_zero_results() -> impl IntoResponse {
    Json(json!({"status": "ZERO_RESULTS", "routes": []}))
}

async fn directions_server_error() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "backend caído")
}

async fn directions_no_routes() -> impl IntoResponse {
    Json(json!({"status": "OK", "routes": []}))
}

async fn directions_garbage() -> impl IntoResponse {
    (StatusCode::OK, "<html>no es json</html>")
}

async fn directions_bad_polyline() -> impl IntoResponse {
    let points = format!("}}{}F", "~".repeat(11)).repeat(6);
    Json(json!({
        "status": "OK",
        "routes": [{"legs": [], "overview_polyline": {"points": points}}]
    }))
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/ok/directions/json", get(directions_ok))
        .route("/zero/directions/json", get(directions_zero_results))
        .route("/error/directions/json", get(directions_server_error))
        .route("/empty/directions/json", get(directions_no_routes))
        .route("/garbage/directions/json", get(directions_garbage))
        .route("/polyline/directions/json", get(directions_bad_polyline));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn client(addr: SocketAddr, prefix: &str, key: &str) -> GoogleDirectionsClient {
    GoogleDirectionsClient::new(
        key.to_string(),
        format!("http://{}/{}/", addr, prefix),
        Duration::from_secs(5),
    )
    .unwrap()
}

fn request() -> RouteRequest {
    let origin = Coordinate::new(-36.827, -73.050);
    RouteRequest::from_path(&[origin, Coordinate::new(-36.8, -73.0), origin]).unwrap()
}

#[tokio::test]
async fn test_ok_response_is_decoded() {
    let addr = spawn_server().await;
    let route = client(addr, "ok", "clave").route(&request()).await.unwrap();

    assert_eq!(route.summary, "Los Carrera");
    assert_eq!(route.legs.len(), 2);
    assert_eq!(route.overview_path.len(), 3);
    assert_eq!(route.waypoint_order, vec![0]);
}

#[tokio::test]
async fn test_denied_status_carries_message() {
    let addr = spawn_server().await;
    let result = client(addr, "ok", "otra").route(&request()).await;

    assert_eq!(
        result,
        Err(RoutingError::Status {
            status: "REQUEST_DENIED".to_string(),
            message: "The provided API key is invalid.".to_string()
        })
    );
}

#[tokio::test]
async fn test_zero_results_is_status_error() {
    let addr = spawn_server().await;
    let result = client(addr, "zero", "clave").route(&request()).await;

    assert_eq!(
        result,
        Err(RoutingError::Status {
            status: "ZERO_RESULTS".to_string(),
            message: String::new()
        })
    );
}

#[tokio::test]
async fn test_http_error_is_status_error() {
    let addr = spawn_server().await;
    let result = client(addr, "error", "clave").route(&request()).await;

    match result {
        Err(RoutingError::Status { status, message }) => {
            assert_eq!(status, "HTTP 500");
            assert_eq!(message, "backend caído");
        }
        other => panic!("se esperaba error HTTP, se obtuvo {:?}", other),
    }
}

#[tokio::test]
async fn test_ok_without_routes_is_no_route() {
    let addr = spawn_server().await;
    let result = client(addr, "empty", "clave").route(&request()).await;

    assert_eq!(result, Err(RoutingError::NoRoute));
}

#[tokio::test]
async fn test_undecodable_body_is_decode_error() {
    let addr = spawn_server().await;
    let result = client(addr, "garbage", "clave").route(&request()).await;

    assert!(matches!(result, Err(RoutingError::Decode(_))));
}

#[tokio::test]
async fn test_overflowing_polyline_is_decode_error() {
    let addr = spawn_server().await;
    let result = client(addr, "polyline", "clave").route(&request()).await;

    assert!(matches!(result, Err(RoutingError::Decode(_))));
}
