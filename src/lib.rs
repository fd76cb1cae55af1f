//! Spreadwatch - cross-exchange USDT arbitrage watcher with a Telegram bot.
//!
//! Two recurring jobs share one process: the reply job polls the Telegram Bot
//! API for inbound commands and answers them, and the notify job polls an
//! exchange-rate comparison API, evaluates the configured buy/sell pair, and
//! posts an arbitrage notification when the opportunity clears the minimum
//! thresholds. A single mutex-guarded watermark over provider update IDs keeps
//! inbound commands at-most-once across polling cycles.
//!
//! # Modules
//!
//! - [`config`] - environment-sourced configuration and decimal thresholds
//! - [`domain`] - updates, command parsing, deduplication, arbitrage math
//! - [`port`] - traits for the messaging and quote providers
//! - [`adapter`] - reqwest-backed Telegram and comparison-API clients
//! - [`service`] - the job bodies, command dispatch, and the watermark
//! - [`scheduler`] - per-job timers, lifetimes, and failure escalation
//! - [`app`] - process wiring

pub mod adapter;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;
pub mod scheduler;
pub mod service;
