//! Pure types and computation: updates, command parsing, deduplication,
//! quotations, and arbitrage math. Nothing in here performs I/O.

pub mod arbitrage;
pub mod dedup;
pub mod quote;
pub mod update;
