use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{ContactNotifier, NotifyError};
use crate::config::SmtpConfig;
use crate::models::ContactSubmission;

pub struct EmailNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: String,
}

impl EmailNotifier {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
            to: config.notify_to.clone(),
        })
    }
}

#[async_trait]
impl ContactNotifier for EmailNotifier {
    fn id(&self) -> &str {
        "email"
    }

    async fn notify(&self, submission: &ContactSubmission) -> Result<(), NotifyError> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(self
                .to
                .parse()
                .map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(format!("Новая заявка: {}", submission.name))
            .header(ContentType::TEXT_HTML)
            .body(render_html(submission))
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn render_html(submission: &ContactSubmission) -> String {
    let name = escape(&submission.name);
    let phone = escape(&submission.phone);
    let email = escape(&submission.email);
    let message = escape(&submission.message).replace('\n', "<br>");
    let received = submission.created_at.format("%d.%m.%Y %H:%M UTC");
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Новая заявка с сайта</h2>
    <p><strong>Имя:</strong> {name}</p>
    <p><strong>Телефон:</strong> {phone}</p>
    <p><strong>Email:</strong> {email}</p>
    <p>{message}</p>
    <p style="color: #666; font-size: 14px;">Получено {received}</p>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    #[test]
    fn html_escapes_user_input() {
        let submission = ContactSubmission {
            id: Uuid::nil(),
            name: "<script>".into(),
            phone: "1".into(),
            email: "a&b@example.com".into(),
            message: "line one\nline two".into(),
            status: "new".into(),
            created_at: Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap(),
        };
        let html = render_html(&submission);
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a&amp;b@example.com"));
        assert!(html.contains("line one<br>line two"));
        assert!(html.contains("01.03.2025 12:30 UTC"));
    }
}
