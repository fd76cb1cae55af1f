//! The scheduled arbitrage-notify job.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::domain::arbitrage;
use crate::error::{DomainError, Result};
use crate::port::{ArbitrageNotice, Messaging, Quotes};
use crate::scheduler::{Job, JobCadence};

/// Evaluates the configured exchange pair every tick and notifies the group
/// chat when the opportunity clears the minimum thresholds.
pub struct NotifyService {
    config: Arc<Config>,
    messaging: Arc<dyn Messaging>,
    quotes: Arc<dyn Quotes>,
}

impl NotifyService {
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

    pub async fn run_once(&self) -> Result<()> {
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

        if !eval.clears_minimums(&config.thresholds) {
            debug!(
                spread = %eval.spread,
                arbitrage = %eval.arbitrage,
                "below minimum thresholds, suppressing notification"
            );
            return Ok(());
        }

        self.messaging
            .send_arbitrage_notify(&ArbitrageNotice {
                chat_id: config.notify_chat_id(),
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

#[async_trait]
impl Job for NotifyService {
    fn name(&self) -> &'static str {
        "notify"
    }

    fn cadence(&self) -> JobCadence {
        JobCadence {
            lifetime: self.config.job_lifetime,
            tick: self.config.notify_tick,
        }
    }

    async fn run(&self) -> Result<()> {
        self.run_once().await
    }
}
