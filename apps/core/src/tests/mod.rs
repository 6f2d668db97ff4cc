//! Test Module
//!
//! Scenario suites for the responder.
//!
//! ## Test Categories
//! - `brain_tests`: Classification and composition properties
//! - `history_tests`: History persistence and recovery
//! - `integration_tests`: Full message-to-history workflows
//! - `server_tests`: HTTP boundary

pub mod integration_tests;
