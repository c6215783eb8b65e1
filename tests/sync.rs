use axum::{body::to_bytes, http::Request, Router};
use serde_json::{json, Value};
use squadload_rs::config::{Config, SyncConfig};
use squadload_rs::error::SyncError;
use squadload_rs::sync::{sync_label, TRAINING_LABEL};
use squadload_rs::types::session::DayType;
use squadload_rs::{routes, state::AppState};
use tower::ServiceExt;

fn app(config: Config) -> Router {
    routes::router().with_state(AppState::new(config))
}

async fn post_sync(app: Router, payload: Value) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/sync")
                .method("POST")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    (status, serde_json::from_slice(&body).expect("json body"))
}

#[test]
fn match_day_needs_an_opponent() {
    assert_eq!(
        sync_label(&DayType::MatchDay, Some(" Rivals ")).expect("label"),
        "Rivals"
    );
    assert!(matches!(
        sync_label(&DayType::MatchDay, Some("")),
        Err(SyncError::MissingOpponent)
    ));
    assert_eq!(
        sync_label(&DayType::Before(2), Some("ignored")).expect("label"),
        TRAINING_LABEL
    );
}

#[test]
fn day_type_labels_round_trip() {
    for label in DayType::LABELS {
        let day_type = DayType::from_str(label).expect("known label");
        assert_eq!(day_type.to_string(), label);
    }
    assert_eq!(DayType::from_str("md-6"), None);
    assert_eq!(DayType::from_str("md+1"), Some(DayType::After(1)));
}

#[tokio::test]
async fn unknown_day_type_is_rejected() {
    let (status, body) = post_sync(app(Config::default()), json!({"day_type": "MD-9"})).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().expect("error").contains("MD-9"));
}

#[tokio::test]
async fn match_day_without_opponent_is_rejected() {
    let (status, _) = post_sync(app(Config::default()), json!({"day_type": "MD"})).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unconfigured_sync_is_service_unavailable() {
    let (status, _) = post_sync(app(Config::default()), json!({"day_type": "MD-1"})).await;

    assert_eq!(status, axum::http::StatusCode::SERVICE_UNAVAILABLE);
}

#[cfg(unix)]
fn shell_config(script: &str) -> (Config, std::path::PathBuf) {
    let dir = std::env::temp_dir().join(format!("squadload-sync-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let config = Config {
        sync: SyncConfig {
            program: Some("/bin/sh".into()),
            args: vec!["-c".to_string(), script.to_string()],
            script: None,
            stdout_log: dir.join("out.txt"),
            stderr_log: dir.join("err.txt"),
        },
        ..Config::default()
    };
    (config, dir)
}

#[cfg(unix)]
#[tokio::test]
async fn sync_passes_day_type_and_opponent_to_the_script() {
    let (config, dir) = shell_config("echo \"$DAY_TYPE $DAY_TIPE\"");
    let (status, body) = post_sync(app(config), json!({"day_type": "md", "opponent": "Rivals"})).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["day_type"], "MD");
    assert_eq!(body["log"].as_str().expect("log").trim(), "MD Rivals");
    let _ = std::fs::remove_dir_all(&dir);
}

#[cfg(unix)]
#[tokio::test]
async fn failed_sync_reports_the_error_log() {
    let (config, dir) = shell_config("echo boom >&2; exit 3");
    let (status, body) = post_sync(app(config), json!({"day_type": "MD+1"})).await;

    assert_eq!(status, axum::http::StatusCode::BAD_GATEWAY);
    assert_eq!(body["success"], false);
    assert_eq!(body["exit_code"], 3);
    assert_eq!(body["label"], "TRAINING");
    assert!(body["log"].as_str().expect("log").contains("boom"));
    let _ = std::fs::remove_dir_all(&dir);
}

#[cfg(unix)]
#[tokio::test]
async fn script_path_may_contain_spaces() {
    let (mut config, dir) = shell_config("");
    let script_dir = dir.join("sync scripts");
    std::fs::create_dir_all(&script_dir).expect("script dir");
    let script = script_dir.join("pull gps.sh");
    std::fs::write(&script, "echo \"$DAY_TYPE ran\"\n").expect("script");
    config.sync.args = Vec::new();
    config.sync.script = Some(script);

    let (status, body) = post_sync(app(config), json!({"day_type": "MD-2"})).await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["log"].as_str().expect("log").trim(), "MD-2 ran");
    let _ = std::fs::remove_dir_all(&dir);
}
