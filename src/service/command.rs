//! Total dispatch from a parsed command to its reply.

use std::sync::Arc;

use rust_decimal_macros::dec;
use tracing::debug;

use crate::config::Config;
use crate::domain::arbitrage;
use crate::domain::update::CommandType;
use crate::error::{DomainError, Result};
use crate::port::{ArbitrageNotice, Messaging, ParseMode, Quotes};

const REPLY_ALIVE_AUTHOR: &str = "I'm alive";
const REPLY_ALIVE: &str = "I'm a lazy rat, but not a dead one";
const REPLY_DEPTH: &str = "I'm a lazy rat, this one isn't wired up yet";
const REPLY_UNKNOWN: &str = "I'm a lazy rat, no idea what you're talking about";

/// Maps every command, recognized or not, to exactly one reply.
pub struct CommandDispatcher {
    config: Arc<Config>,
    messaging: Arc<dyn Messaging>,
    quotes: Arc<dyn Quotes>,
}

impl CommandDispatcher {
    pub fn new(
        config: Arc<Config>,
        messaging: Arc<dyn Messaging>,
        quotes: Arc<dyn Quotes>,
    ) -> Self {
        Self {
            config,
            messaging,
            quotes,
        }
    }

    /// Produce the reply for one command. Total over [`CommandType`]; the
    /// only failure modes are I/O and quote-domain errors, never "no match".
    pub async fn reply(&self, command: &CommandType, to_user_id: i64, chat_id: i64) -> Result<()> {
        debug!(?command, to_user_id, chat_id, "dispatching command");
        match command {
            CommandType::Alive => {
                let text = if to_user_id == self.config.author_id {
                    REPLY_ALIVE_AUTHOR
                } else {
                    REPLY_ALIVE
                };
                self.messaging
                    .send_message(chat_id, text, ParseMode::Plain)
                    .await
            }
            CommandType::Help => {
                let thresholds = &self.config.thresholds;
                let text = format!(
                    "I'm a lazy rat, I only move orders with spread above {} and arbitrage above {}%",
                    thresholds.min_spread,
                    (thresholds.min_arbitrage * dec!(100)).normalize(),
                );
                self.messaging
                    .send_message(chat_id, &text, ParseMode::Plain)
                    .await
            }
            CommandType::Depth => {
                self.messaging
                    .send_message(chat_id, REPLY_DEPTH, ParseMode::Plain)
                    .await
            }
            // On-demand evaluation always answers; only the scheduled notify
            // job gates on the minimum thresholds.
            CommandType::Arbitrage => self.reply_arbitrage(chat_id).await,
            CommandType::Unknown(_) => {
                self.messaging
                    .send_message(chat_id, REPLY_UNKNOWN, ParseMode::Plain)
                    .await
            }
        }
    }

    async fn reply_arbitrage(&self, chat_id: i64) -> Result<()> {
        let config = &self.config;
        let quotations = self.quotes.get_quotations().await?;

        let buy = quotations
            .get(&config.exchange_buy)
            .ok_or_else(|| DomainError::MissingQuotation {
                exchange: config.exchange_buy.to_string(),
            })?;
        let sell = quotations
            .get(&config.exchange_sell)
            .ok_or_else(|| DomainError::MissingQuotation {
                exchange: config.exchange_sell.to_string(),
            })?;

        let invest = config.thresholds.default_invest;
        let eval = arbitrage::evaluate(
            invest,
            buy.buy_price,
            sell.sell_price,
            &config.thresholds,
        )?;

        self.messaging
            .send_arbitrage_notify(&ArbitrageNotice {
                chat_id,
                invest_amount: invest,
                exchange_buy: config.exchange_buy.clone(),
                exchange_sell: config.exchange_sell.clone(),
                buy_price: buy.buy_price,
                sell_price: sell.sell_price,
                spread: eval.spread,
                arbitrage: eval.arbitrage,
                profit: eval.profit,
                is_excited_arbitrage: eval.is_excited_arbitrage,
                is_excited_spread: eval.is_excited_spread,
            })
            .await
    }
}
