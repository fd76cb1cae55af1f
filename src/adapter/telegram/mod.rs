//! Telegram Bot API adapter: offset-based update polling and message sends.

mod client;
mod template;
mod wire;

pub use client::TelegramClient;
