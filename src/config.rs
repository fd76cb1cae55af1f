//! Environment-sourced configuration.
//!
//! All tunables live here as one immutable value built once at startup and
//! injected into each component. The bot token is the only hard requirement;
//! everything else carries a compiled default that mirrors the production
//! deployment.

use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::quote::Exchange;
use crate::error::{ConfigError, Result};

/// Runtime environment. `development` swaps the notification target to the
/// test group and narrows the reply allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram Bot API token, startup-fatal when absent.
    pub bot_token: String,
    /// Platform-assigned listen port. This worker binds no listener; the value
    /// is kept for deployment parity and logged at startup.
    pub port: u16,
    pub environment: Environment,

    /// Bot mention suffix stripped from commands, e.g. `@spreadwatch_bot`.
    pub bot_name: String,

    // Chat routing.
    pub admin_chat_id: i64,
    pub author_id: i64,
    pub author: String,
    pub group_chat_id: i64,
    pub test_group_chat_id: i64,

    /// Exchange pair evaluated by the notify job and the /arbitrage command.
    pub exchange_buy: Exchange,
    pub exchange_sell: Exchange,

    pub thresholds: Thresholds,

    // Job cadence.
    pub reply_tick: Duration,
    pub notify_tick: Duration,
    /// Overall lifetime shared by both jobs.
    pub job_lifetime: Duration,
}

/// Exact-decimal arbitrage thresholds. Comparisons always use these
/// full-precision values, never display-truncated ones.
#[derive(Debug, Clone)]
pub struct Thresholds {
    pub default_invest: Decimal,
    pub min_spread: Decimal,
    pub min_arbitrage: Decimal,
    pub excited_spread: Decimal,
    pub excited_arbitrage: Decimal,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            default_invest: dec!(500000),
            min_spread: dec!(0.15),
            min_arbitrage: dec!(0.005),
            excited_spread: dec!(0.3),
            excited_arbitrage: dec!(0.01),
        }
    }
}

impl Config {
    /// Build configuration from the process environment.
    ///
    /// Fails with [`ConfigError::MissingVar`] when `TELEGRAM_BOT_TOKEN` is
    /// absent; every other variable is optional.
    pub fn from_env() -> Result<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingVar {
                var: "TELEGRAM_BOT_TOKEN",
            })?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: "PORT",
                reason: format!("`{raw}` is not a port number"),
            })?,
            Err(_) => 8080,
        };

        let environment = match std::env::var("SPREADWATCH_ENV").as_deref() {
            Ok("development") => Environment::Development,
            _ => Environment::Production,
        };

        Ok(Self {
            bot_token,
            port,
            environment,
            ..Self::with_token(String::new())
        })
    }

    /// Configuration with compiled defaults and the given token. Used by
    /// `from_env` and by tests that never talk to the real API.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            port: 8080,
            environment: Environment::Production,
            bot_name: "@spreadwatch_bot".to_string(),
            admin_chat_id: 1881712391,
            author_id: 1881712391,
            author: "t.me/gummy789j".to_string(),
            group_chat_id: -781207517,
            test_group_chat_id: -905284654,
            exchange_buy: Exchange::from("Rybit"),
            exchange_sell: Exchange::from("MAX"),
            thresholds: Thresholds::default(),
            reply_tick: Duration::from_secs(2),
            notify_tick: Duration::from_secs(60),
            job_lifetime: Duration::from_secs(365 * 24 * 60 * 60),
        }
    }

    /// Chat the notify job posts to: the production group, or the test group
    /// in development.
    pub fn notify_chat_id(&self) -> i64 {
        match self.environment {
            Environment::Production => self.group_chat_id,
            Environment::Development => self.test_group_chat_id,
        }
    }

    /// Chats the reply job accepts commands from.
    pub fn reply_allowed_chats(&self) -> Vec<i64> {
        match self.environment {
            Environment::Production => vec![
                self.group_chat_id,
                self.test_group_chat_id,
                self.admin_chat_id,
            ],
            Environment::Development => vec![self.test_group_chat_id, self.admin_chat_id],
        }
    }
}
