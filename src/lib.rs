//! Benefit Simulation Engine for Brazilian social security and labour rules.
//!
//! This crate provides three simulations over the 2024 rule tables: an INSS
//! retirement estimate, a private pension projection, and a severance
//! (rescisão trabalhista) breakdown, together with boundary validation,
//! formatting helpers, a bounded simulation history, and an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod history;
pub mod models;
pub mod report;
