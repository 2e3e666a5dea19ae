//! Outbound notifications for new contact submissions.
//!
//! Notifiers are best-effort: a failed delivery is logged and the
//! submission is still acknowledged.

pub mod email;
pub mod telegram;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::models::ContactSubmission;

#[derive(Debug)]
pub struct NotifyError {
    pub message: String,
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for NotifyError {
    fn from(s: String) -> Self {
        NotifyError { message: s }
    }
}

impl From<&str> for NotifyError {
    fn from(s: &str) -> Self {
        NotifyError {
            message: s.to_string(),
        }
    }
}

#[async_trait]
pub trait ContactNotifier: Send + Sync {
    fn id(&self) -> &str;
    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError>;
}

#[derive(Default)]
pub struct NotifierRegistry {
    notifiers: Vec<Arc<dyn ContactNotifier>>,
}

impl NotifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every channel that is fully configured.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();

        if let Some(smtp) = &config.smtp {
            match email::EmailNotifier::new(smtp) {
                Ok(notifier) => {
                    tracing::info!("Email notifications enabled");
                    registry.register(Arc::new(notifier));
                }
                Err(e) => tracing::warn!("Email notifications not available: {e}"),
            }
        }

        if let Some(telegram) = &config.telegram {
            match telegram::TelegramNotifier::new(telegram) {
                Ok(notifier) => {
                    tracing::info!("Telegram notifications enabled");
                    registry.register(Arc::new(notifier));
                }
                Err(e) => tracing::warn!("Telegram notifications not available: {e}"),
            }
        }

        registry
    }

    pub fn register(&mut self, notifier: Arc<dyn ContactNotifier>) {
        self.notifiers.push(notifier);
    }

    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Deliver to every channel, returning how many succeeded.
    pub async fn dispatch(&self, submission: &ContactSubmission) -> usize {
        let mut delivered = 0;
        for notifier in &self.notifiers {
            match notifier.notify(submission).await {
                Ok(()) => {
                    tracing::debug!(notifier = notifier.id(), submission_id = %submission.id, "Contact notification sent");
                    delivered += 1;
                }
                Err(e) => {
                    tracing::warn!(notifier = notifier.id(), submission_id = %submission.id, "Contact notification failed: {e}");
                }
            }
        }
        delivered
    }
}

/// Plain-text summary shared by the text-based channels.
pub fn render_text(submission: &ContactSubmission) -> String {
    format!(
        "Новая заявка с сайта\n\nИмя: {}\nТелефон: {}\nEmail: {}\n\n{}",
        submission.name, submission.phone, submission.email, submission.message
    )
}
