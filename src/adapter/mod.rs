//! Implementations of the ports against real HTTP APIs.

pub mod comparison;
pub mod telegram;
