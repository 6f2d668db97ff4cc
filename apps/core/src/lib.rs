//! Smart Responder
//!
//! Rule-based auto-responder: classifies a message by keyword, composes a reply
//! from per-category templates, signs it and records the exchange.

pub mod brain;
pub mod config;
pub mod decoration;
pub mod error;
pub mod fs_manager;
pub mod history;
pub mod responder;
pub mod server;
pub mod settings;
pub mod signature;

pub use config::{ConfigStore, ResponderConfig};
pub use error::AppError;
pub use history::{Exchange, HistoryLog, HistoryStore, InMemoryHistoryStore, JsonFileHistoryStore};
pub use responder::{Responder, ResponseOutcome};
pub use settings::Settings;

#[cfg(test)]
mod tests;
