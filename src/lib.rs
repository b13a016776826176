//! `Havoc` — chaos fault-injection decision engine
//!
//! This library decides, per intercepted unit of work, whether a fault
//! should be injected and which registered assault behavior fires.
//! Interception, configuration reload, and the blocking fault actions
//! themselves live outside this crate.

pub mod assault;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod observability;
pub mod toggles;
