//! Traits for the two external collaborators: the messaging provider and the
//! quote provider. Adapters implement these; services depend only on them.

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::domain::dedup::CommandBatch;
use crate::domain::quote::{Exchange, QuotationMap};
use crate::domain::update::Update;
use crate::error::Result;

/// Parse mode of an outbound chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Plain,
    Html,
}

/// Everything needed to render one arbitrage notification.
#[derive(Debug, Clone)]
pub struct ArbitrageNotice {
    pub chat_id: i64,
    pub invest_amount: Decimal,
    pub exchange_buy: Exchange,
    pub exchange_sell: Exchange,
    pub buy_price: Decimal,
    pub sell_price: Decimal,
    pub spread: Decimal,
    pub arbitrage: Decimal,
    pub profit: Decimal,
    pub is_excited_arbitrage: bool,
    pub is_excited_spread: bool,
}

/// Messaging provider: inbound update polling and outbound sends.
#[async_trait]
pub trait Messaging: Send + Sync {
    /// Fetch buffered updates with `update_id >= offset`. A zero offset
    /// returns the full still-buffered backlog.
    async fn get_updates(&self, offset: i64) -> Result<Vec<Update>>;

    /// Convenience composition of [`get_updates`](Messaging::get_updates) and
    /// command extraction: the batch maximum plus every extracted command.
    async fn get_bot_command_updates(&self, offset: i64) -> Result<CommandBatch>;

    async fn send_message(&self, chat_id: i64, text: &str, parse_mode: ParseMode) -> Result<()>;

    async fn send_arbitrage_notify(&self, notice: &ArbitrageNotice) -> Result<()>;

    async fn send_error_notify(&self, chat_id: i64, title: &str, err_msg: &str) -> Result<()>;
}

/// Quote provider: current buy/sell quotes per exchange.
#[async_trait]
pub trait Quotes: Send + Sync {
    async fn get_quotations(&self) -> Result<QuotationMap>;
}
