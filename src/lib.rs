//! calc — single-shot integer calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod arith;
pub mod config;
pub mod constants;
pub mod dispatch;
pub mod env;
pub mod logging;
pub mod models;
pub mod output;
