use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: Option<String>,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub smtp: Option<SmtpConfig>,
    pub telegram: Option<TelegramConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    /// Studio inbox that receives contact notifications.
    pub notify_to: String,
}

#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let host: IpAddr = env_or("KONTRAST_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid KONTRAST_HOST: {e}"))?;

        let port: u16 = env_or("KONTRAST_PORT", "8001")
            .parse()
            .map_err(|e| format!("Invalid KONTRAST_PORT: {e}"))?;

        let max_body_size: usize = env_or("KONTRAST_MAX_BODY_SIZE", "10485760")
            .parse()
            .map_err(|e| format!("Invalid KONTRAST_MAX_BODY_SIZE: {e}"))?;

        let cors_origins = parse_list(&env_or("KONTRAST_CORS_ORIGINS", ""));

        let log_level = env_or("KONTRAST_LOG_LEVEL", "info");

        let smtp = match (
            std::env::var("KONTRAST_SMTP_HOST").ok(),
            std::env::var("KONTRAST_SMTP_PORT").ok(),
            std::env::var("KONTRAST_SMTP_USER").ok(),
            std::env::var("KONTRAST_SMTP_PASS").ok(),
            std::env::var("KONTRAST_SMTP_FROM").ok(),
            std::env::var("KONTRAST_NOTIFY_EMAIL").ok(),
        ) {
            (Some(host), Some(port), Some(user), Some(pass), Some(from), Some(notify_to)) => {
                Some(SmtpConfig {
                    host,
                    port: port
                        .parse()
                        .map_err(|e| format!("Invalid KONTRAST_SMTP_PORT: {e}"))?,
                    user,
                    pass,
                    from,
                    notify_to,
                })
            }
            _ => None,
        };

        let telegram = match (
            std::env::var("KONTRAST_TELEGRAM_BOT_TOKEN").ok(),
            std::env::var("KONTRAST_TELEGRAM_CHAT_ID").ok(),
        ) {
            (Some(bot_token), Some(chat_id)) => Some(TelegramConfig { bot_token, chat_id }),
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            cors_origins,
            log_level,
            smtp,
            telegram,
        })
    }
}

impl Default for Config {
    /// Local defaults: in-memory store, no notifiers.
    fn default() -> Self {
        Config {
            database_url: None,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8001,
            max_body_size: 10 * 1024 * 1024,
            cors_origins: vec![],
            log_level: "info".to_string(),
            smtp: None,
            telegram: None,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_list_skips_blank_entries() {
        assert_eq!(
            parse_list(" https://a.example , ,https://b.example,"),
            vec!["https://a.example", "https://b.example"]
        );
        assert!(parse_list("").is_empty());
    }

    #[test]
    fn default_config_has_no_notifiers() {
        let config = Config::default();
        assert!(config.database_url.is_none());
        assert!(config.smtp.is_none());
        assert!(config.telegram.is_none());
    }
}
