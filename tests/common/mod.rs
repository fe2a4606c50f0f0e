use std::collections::HashMap;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path as UrlPath, State};
use axum::http::StatusCode as AxumStatus;
use axum::routing::post;
use axum::{Json, Router};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tokio::sync::Mutex;

use sinchon::config::Config;
use sinchon::state::SharedState;

/// One request the fake Telegram API received.
#[derive(Debug, Clone)]
pub struct TelegramCall {
    pub path: String,
    pub body: Value,
}

/// In-process stand-in for api.telegram.org.
pub struct FakeTelegram {
    pub addr: SocketAddr,
    calls: Arc<Mutex<Vec<TelegramCall>>>,
}

#[derive(Clone)]
struct FakeTelegramState {
    calls: Arc<Mutex<Vec<TelegramCall>>>,
    status: AxumStatus,
    delay: Duration,
}

impl FakeTelegram {
    /// Start a fake API that answers every call with `status`.
    pub async fn start(status: u16) -> FakeTelegram {
        Self::start_with_delay(status, Duration::ZERO).await
    }

    /// Start a fake API that waits `delay` before answering.
    pub async fn start_with_delay(status: u16, delay: Duration) -> FakeTelegram {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let state = FakeTelegramState {
            calls: calls.clone(),
            status: AxumStatus::from_u16(status).unwrap(),
            delay,
        };

        let app = Router::new()
            .route("/{*path}", post(record_call))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake telegram");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Fake telegram failed");
        });

        FakeTelegram { addr, calls }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn calls(&self) -> Vec<TelegramCall> {
        self.calls.lock().await.clone()
    }
}

async fn record_call(
    State(state): State<FakeTelegramState>,
    UrlPath(path): UrlPath<String>,
    Json(body): Json<Value>,
) -> (AxumStatus, Json<Value>) {
    state.calls.lock().await.push(TelegramCall { path, body });
    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, Json(json!({ "ok": state.status.is_success() })))
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub state: SharedState,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit an application as JSON, return (body, status).
    pub async fn submit(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/application"))
            .json(data)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Submit form-urlencoded data, return (body, status).
    pub async fn submit_form(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/application"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a JSON endpoint, return (body, status).
    pub async fn get_json(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// GET a page, return (text, status).
    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

pub fn test_config(telegram: Option<&FakeTelegram>, static_dir: Option<&Path>) -> Config {
    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("HOST", "127.0.0.1".to_string());
    vars.insert("PORT", "0".to_string());
    vars.insert("LOG_LEVEL", "warn".to_string());

    if let Some(dir) = static_dir {
        vars.insert("STATIC_DIR", dir.display().to_string());
    }

    match telegram {
        Some(fake) => {
            vars.insert("TELEGRAM_API_URL", fake.url());
            vars.insert("TELEGRAM_BOT_TOKEN", "test-token".to_string());
            vars.insert("TELEGRAM_CHAT_ID", "12345".to_string());
        }
        // Unroutable base so an accidental call fails fast instead of hitting the real API.
        None => {
            vars.insert("TELEGRAM_API_URL", "http://127.0.0.1:9".to_string());
        }
    }

    Config::from_vars(|key| vars.get(key).cloned()).expect("Invalid test config")
}

/// Spawn a test app bound to a random port.
pub async fn spawn_app(telegram: Option<&FakeTelegram>) -> TestApp {
    spawn_app_with_config(test_config(telegram, None)).await
}

pub async fn spawn_app_with_config(config: Config) -> TestApp {
    let (app, state) = sinchon::build_app(config).expect("Failed to build app");

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp {
        addr,
        client,
        state,
    }
}

/// A scratch directory under the system temp dir, unique per test.
pub fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("sinchon_test_{name}_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("Failed to create scratch dir");
    dir
}
