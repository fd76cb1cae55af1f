#![allow(dead_code)]
//! In-process mock ports shared by the integration suites.

use async_trait::async_trait;
use parking_lot::Mutex;
use rust_decimal::Decimal;

use spreadwatch::domain::dedup::{self, CommandBatch};
use spreadwatch::domain::quote::{Exchange, QuotationInfo, QuotationMap};
use spreadwatch::domain::update::{Message, MessageEntity, Update, ENTITY_BOT_COMMAND};
use spreadwatch::error::{Error, Result};
use spreadwatch::port::{ArbitrageNotice, Messaging, ParseMode, Quotes};

/// Messaging double that models the provider's offset semantics: the buffer
/// holds every update, and `get_updates(offset)` returns those with
/// `update_id >= offset` (all of them for a zero offset).
#[derive(Default)]
pub struct MockMessaging {
    pub bot_name: String,
    pub buffer: Mutex<Vec<Update>>,
    pub sent: Mutex<Vec<(i64, String)>>,
    pub notices: Mutex<Vec<ArbitrageNotice>>,
    pub error_notices: Mutex<Vec<(i64, String, String)>>,
    /// When true, every send fails with an API error.
    pub fail_sends: Mutex<bool>,
}

impl MockMessaging {
    pub fn new(bot_name: &str) -> Self {
        Self {
            bot_name: bot_name.to_string(),
            ..Self::default()
        }
    }

    pub fn push_update(&self, update: Update) {
        self.buffer.lock().push(update);
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().len() + self.notices.lock().len()
    }
}

#[async_trait]
impl Messaging for MockMessaging {
    async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        Ok(self
            .buffer
            .lock()
            .iter()
            .filter(|u| offset == 0 || u.update_id >= offset)
            .cloned()
            .collect())
    }

    async fn get_bot_command_updates(&self, offset: i64) -> Result<CommandBatch> {
        let updates = self.get_updates(offset).await?;
        Ok(dedup::collect_commands(&updates, &self.bot_name))
    }

    async fn send_message(&self, chat_id: i64, text: &str, _parse_mode: ParseMode) -> Result<()> {
        if *self.fail_sends.lock() {
            return Err(Error::Api {
                endpoint: "sendMessage",
                reason: "mock failure".to_string(),
            });
        }
        self.sent.lock().push((chat_id, text.to_string()));
        Ok(())
    }

    async fn send_arbitrage_notify(&self, notice: &ArbitrageNotice) -> Result<()> {
        if *self.fail_sends.lock() {
            return Err(Error::Api {
                endpoint: "sendMessage",
                reason: "mock failure".to_string(),
            });
        }
        self.notices.lock().push(notice.clone());
        Ok(())
    }

    async fn send_error_notify(&self, chat_id: i64, title: &str, err_msg: &str) -> Result<()> {
        self.error_notices
            .lock()
            .push((chat_id, title.to_string(), err_msg.to_string()));
        Ok(())
    }
}

/// Quote double returning a fixed quotation map.
#[derive(Default)]
pub struct MockQuotes {
    pub quotations: Mutex<QuotationMap>,
}

impl MockQuotes {
    pub fn set(&self, exchange: &str, buy_price: Decimal, sell_price: Decimal) {
        self.quotations.lock().insert(
            Exchange::from(exchange),
            QuotationInfo {
                buy_price,
                sell_price,
                update_time: chrono::Utc::now(),
            },
        );
    }
}

#[async_trait]
impl Quotes for MockQuotes {
    async fn get_quotations(&self) -> Result<QuotationMap> {
        Ok(self.quotations.lock().clone())
    }
}

/// A well-formed command update originating from `chat_id`.
pub fn command_update(update_id: i64, chat_id: i64, from_id: i64, text: &str) -> Update {
    Update {
        update_id,
        message: Some(Message {
            message_id: update_id * 10,
            from_id: Some(from_id),
            chat_id: Some(chat_id),
            date: None,
            text: Some(text.to_string()),
            entities: vec![MessageEntity {
                kind: ENTITY_BOT_COMMAND.to_string(),
                offset: 0,
                length: text.len() as i64,
            }],
        }),
    }
}

/// An update that carries no message at all (e.g. a membership event).
pub fn service_update(update_id: i64) -> Update {
    Update {
        update_id,
        message: None,
    }
}
