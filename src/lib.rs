//! Azure Cosmos DB query optimizations demo.
//!
//! Runs a fixed set of queries against two Cosmos DB accounts — one with
//! the query engine improvements enabled, one without — and prints a
//! side-by-side comparison of RU charge and execution latency.

pub mod client;
pub mod config;
pub mod error;
pub mod menu;
pub mod runner;

pub use client::{CosmosClient, MasterKey, QueryDefinition, QueryPage, QueryParameter, QueryTransport};
pub use config::DemoConfig;
pub use error::{DemoError, DemoResult};
pub use menu::{demo_for_key, Demo, DEMOS};
pub use runner::{QueryRunner, QueryStats};
