use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::cookie::Jar;
use reqwest::Url;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use delivery_route_display::clients::delete_point_client::HttpDeletionTransport;
use delivery_route_display::services::delete_point_service::{
    DeleteOutcome, DeletePointService, DeletionError, DeletionTransport, PageReloader, UserDialogs,
};

async fn borrar_ok(headers: HeaderMap) -> impl IntoResponse {
    let token_ok = headers.get("x-csrftoken").map(|v| v == "tok3n").unwrap_or(false);
    let ajax = headers.get("x-requested-with").map(|v| v == "XMLHttpRequest").unwrap_or(false);
    if token_ok && ajax {
        (StatusCode::OK, Json(json!({"ok": true})))
    } else {
        (StatusCode::FORBIDDEN, Json(json!({"ok": false, "error": "CSRF verification failed"})))
    }
}

async fn borrar_locked() -> impl IntoResponse {
    Json(json!({"ok": false, "error": "locked"}))
}

async fn borrar_falla() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({"ok": false, "error": "database is locked"})))
}

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/borrar_punto/1/", post(borrar_ok))
        .route("/borrar_punto/2/", post(borrar_locked))
        .route("/borrar_punto/3/", post(borrar_falla));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn transport(addr: SocketAddr, with_cookie: bool) -> HttpDeletionTransport {
    let base = Url::parse(&format!("http://{}/", addr)).unwrap();
    let jar = Arc::new(Jar::default());
    if with_cookie {
        jar.add_cookie_str("csrftoken=tok3n; Path=/", &base);
    }
    HttpDeletionTransport::new(
        jar,
        "csrftoken".to_string(),
        Some(base),
        Duration::from_secs(5),
    )
    .unwrap()
}

struct AcceptingDialogs {
    alerts: Mutex<Vec<String>>,
}

impl UserDialogs for AcceptingDialogs {
    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
struct Reloads(AtomicUsize);

impl PageReloader for Reloads {
    fn reload(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

fn dialogs() -> AcceptingDialogs {
    AcceptingDialogs {
        alerts: Mutex::new(Vec::new()),
    }
}

#[tokio::test]
async fn test_delete_sends_csrf_and_reloads() {
    let addr = spawn_server().await;
    let service = DeletePointService::new(transport(addr, true));
    let dialogs = dialogs();
    let reloads = Reloads::default();

    let outcome = service.delete_point("/borrar_punto/1/", &dialogs, &reloads).await;

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(reloads.0.load(Ordering::SeqCst), 1);
    assert!(dialogs.alerts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_cookie_is_rejected_by_server() {
    let addr = spawn_server().await;
    let result = transport(addr, false).submit_delete("/borrar_punto/1/").await;

    assert_eq!(
        result,
        Err(DeletionError::Status {
            status: 403,
            message: "CSRF verification failed".to_string()
        })
    );
}

#[tokio::test]
async fn test_locked_payload_does_not_reload() {
    let addr = spawn_server().await;
    let service = DeletePointService::new(transport(addr, true));
    let dialogs = dialogs();
    let reloads = Reloads::default();

    let outcome = service.delete_point("/borrar_punto/2/", &dialogs, &reloads).await;

    assert_eq!(outcome, DeleteOutcome::Failed("No se pudo eliminar el punto: locked".to_string()));
    assert_eq!(reloads.0.load(Ordering::SeqCst), 0);
    assert_eq!(dialogs.alerts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let addr = spawn_server().await;
    let service = DeletePointService::new(transport(addr, true));
    let dialogs = dialogs();
    let reloads = Reloads::default();

    let outcome = service.delete_point("/borrar_punto/3/", &dialogs, &reloads).await;

    assert_eq!(
        outcome,
        DeleteOutcome::Failed("No se pudo eliminar el punto: database is locked".to_string())
    );
    assert_eq!(reloads.0.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = transport(addr, true).submit_delete("/borrar_punto/1/").await;
    assert!(matches!(result, Err(DeletionError::Transport(_))));
}
