use reqwest::{Client, StatusCode};

/// Why a Telegram send failed. The caller logs these; nothing retries.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("telegram request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("telegram API answered with status {0}")]
    Status(StatusCode),
}

/// Bot credentials as read from the environment.
///
/// Both values are required to send anything; either missing downgrades the
/// notifier to a logged no-op instead of an error.
#[derive(Debug, Default)]
pub struct TelegramConfig {
    pub bot_token: Option<String>,
    pub chat_id: Option<String>,
}

impl TelegramConfig {
    /// Reads `TG_BOT_TOKEN` and `TG_CHAT_ID`, treating empty values as
    /// unset.
    pub fn from_env() -> Self {
        TelegramConfig {
            bot_token: std::env::var("TG_BOT_TOKEN").ok().filter(|v| !v.is_empty()),
            chat_id: std::env::var("TG_CHAT_ID").ok().filter(|v| !v.is_empty()),
        }
    }
}

/// Sends messages to one chat through the Telegram bot API.
#[derive(Debug)]
pub struct TelegramNotifier {
    client: Client,
    bot_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    /// Validates the configuration up front; `None` means the caller should
    /// log a diagnostic and skip sending, never abort.
    pub fn from_config(config: &TelegramConfig) -> Option<Self> {
        let bot_token = config.bot_token.as_ref()?;
        let chat_id = config.chat_id.as_ref()?;
        Some(TelegramNotifier {
            client: Client::new(),
            bot_token: bot_token.to_owned(),
            chat_id: chat_id.to_owned(),
        })
    }

    /// One fire-and-forget `sendMessage` call in HTML parse mode.
    ///
    /// No retry, no queue, and no delivery tracking beyond the immediate
    /// HTTP status.
    pub async fn send(&self, text: &str, disable_preview: bool) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let payload = serde_json::json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "HTML",
            "disable_web_page_preview": disable_preview,
        });

        let response = self.client.post(url).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(NotifyError::Status(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_token_means_no_notifier() {
        let config = TelegramConfig {
            bot_token: None,
            chat_id: Some("1234".to_owned()),
        };
        assert!(TelegramNotifier::from_config(&config).is_none());
    }

    #[test]
    fn missing_chat_id_means_no_notifier() {
        let config = TelegramConfig {
            bot_token: Some("123:abc".to_owned()),
            chat_id: None,
        };
        assert!(TelegramNotifier::from_config(&config).is_none());
    }

    #[test]
    fn complete_config_builds_a_notifier() {
        let config = TelegramConfig {
            bot_token: Some("123:abc".to_owned()),
            chat_id: Some("1234".to_owned()),
        };
        let notifier = TelegramNotifier::from_config(&config).unwrap();
        assert_eq!(notifier.bot_token, "123:abc");
        assert_eq!(notifier.chat_id, "1234");
    }
}
