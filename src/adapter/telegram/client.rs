use chrono::Utc;
use reqwest::Client;
use tracing::debug;

use crate::domain::dedup::{self, CommandBatch};
use crate::domain::update::Update;
use crate::error::{Error, Result};
use crate::port::{ArbitrageNotice, Messaging, ParseMode};

use super::template;
use super::wire::{GetUpdatesResponse, SendMessageBody, SendMessageResponse};

/// Bot API client. One instance per process, cheap to clone via the inner
/// `reqwest::Client`.
pub struct TelegramClient {
    client: Client,
    base_url: String,
    bot_name: String,
    author_id: i64,
    author: String,
}

impl TelegramClient {
    pub fn new(client: Client, token: &str, bot_name: String, author_id: i64, author: String) -> Self {
        Self::with_base_url(
            client,
            format!("https://api.telegram.org/bot{token}"),
            bot_name,
            author_id,
            author,
        )
    }

    /// Same as [`new`](Self::new) with an explicit base URL, for tests
    /// pointed at a local mock server.
    pub fn with_base_url(
        client: Client,
        base_url: String,
        bot_name: String,
        author_id: i64,
        author: String,
    ) -> Self {
        Self {
            client,
            base_url,
            bot_name,
            author_id,
            author,
        }
    }
}

#[async_trait::async_trait]
impl Messaging for TelegramClient {
    async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let url = format!("{}/getUpdates", self.base_url);
        let mut request = self.client.get(&url);
        if offset > 0 {
            request = request.query(&[("offset", offset)]);
        }

        let body = request.send().await?.text().await?;
        let response: GetUpdatesResponse = serde_json::from_str(&body)?;
        if !response.ok {
            return Err(Error::Api {
                endpoint: "getUpdates",
                reason: "provider replied not ok".to_string(),
            });
        }

        debug!(count = response.result.len(), offset, "fetched updates");
        Ok(response.result.into_iter().map(Update::from).collect())
    }

    async fn get_bot_command_updates(&self, offset: i64) -> Result<CommandBatch> {
        let updates = self.get_updates(offset).await?;
        Ok(dedup::collect_commands(&updates, &self.bot_name))
    }

    async fn send_message(&self, chat_id: i64, text: &str, parse_mode: ParseMode) -> Result<()> {
        let url = format!("{}/sendMessage", self.base_url);
        let body = SendMessageBody {
            chat_id,
            text,
            parse_mode: match parse_mode {
                ParseMode::Plain => None,
                ParseMode::Html => Some("HTML"),
            },
        };

        let raw = self.client.post(&url).json(&body).send().await?.text().await?;
        let response: SendMessageResponse = serde_json::from_str(&raw)?;
        if !response.ok {
            return Err(Error::Api {
                endpoint: "sendMessage",
                reason: response
                    .description
                    .unwrap_or_else(|| "provider replied not ok".to_string()),
            });
        }

        debug!(chat_id, "message sent");
        Ok(())
    }

    async fn send_arbitrage_notify(&self, notice: &ArbitrageNotice) -> Result<()> {
        let text = template::arbitrage_notify(notice, self.author_id, &self.author);
        self.send_message(notice.chat_id, &text, ParseMode::Html).await
    }

    async fn send_error_notify(&self, chat_id: i64, title: &str, err_msg: &str) -> Result<()> {
        let text = template::error_notify(title, err_msg, Utc::now());
        self.send_message(chat_id, &text, ParseMode::Html).await
    }
}
