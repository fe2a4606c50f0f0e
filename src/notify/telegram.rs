use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{message, Notifier};
use crate::config::{Config, TelegramConfig};
use crate::models::Application;

pub const SEND_TIMEOUT: Duration = Duration::from_secs(10);

pub struct TelegramNotifier {
    client: reqwest::Client,
    api_url: String,
    credentials: Option<TelegramConfig>,
}

impl TelegramNotifier {
    pub fn new(api_url: &str, credentials: Option<TelegramConfig>) -> Result<Self, String> {
        Self::with_timeout(api_url, credentials, SEND_TIMEOUT)
    }

    pub fn with_timeout(
        api_url: &str,
        credentials: Option<TelegramConfig>,
        timeout: Duration,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| format!("Failed to build Telegram client: {e}"))?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, String> {
        Self::new(&config.telegram_api_url, config.telegram.clone())
    }

    /// POST a preformatted HTML message to `sendMessage`.
    async fn send_text(&self, text: &str) -> bool {
        let Some(creds) = &self.credentials else {
            tracing::warn!("Telegram not configured (TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID missing)");
            return false;
        };

        let url = format!("{}/bot{}/sendMessage", self.api_url, creds.bot_token);
        let body = json!({
            "chat_id": creds.chat_id,
            "text": text,
            "parse_mode": "HTML",
        });

        match self.client.post(&url).json(&body).send().await {
            Ok(resp) if resp.status().is_success() => {
                tracing::info!("Telegram notification delivered");
                true
            }
            Ok(resp) => {
                tracing::warn!("Telegram notification rejected: status {}", resp.status());
                false
            }
            // The error's Display would include the URL and with it the bot token.
            Err(e) => {
                tracing::warn!("Telegram notification failed: {}", e.without_url());
                false
            }
        }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn notify(&self, application: &Application) -> bool {
        self.send_text(&message::render(application)).await
    }
}
