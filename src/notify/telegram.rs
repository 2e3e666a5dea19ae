use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use super::{ContactNotifier, NotifyError, render_text};
use crate::config::TelegramConfig;
use crate::models::ContactSubmission;

const API_BASE: &str = "https://api.telegram.org";

/// Posts contact submissions to a chat through the Telegram Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    api_base: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Result<Self, String> {
        Self::with_api_base(config, API_BASE)
    }

    pub fn with_api_base(config: &TelegramConfig, api_base: &str) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {e}"))?;

        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone(),
            chat_id: config.chat_id.clone(),
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base, self.bot_token)
    }
}

#[async_trait]
impl ContactNotifier for TelegramNotifier {
    fn id(&self) -> &str {
        "telegram"
    }

    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let body = json!({
            "chat_id": &self.chat_id,
            "text": render_text(submission),
        });

        let resp = self
            .client
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("Telegram request failed: {e}"))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(format!("Telegram returned {status}: {text}").into());
        }

        Ok(())
    }
}
