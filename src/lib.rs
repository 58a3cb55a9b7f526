//! FinBEE - Terminal-based personal finance tracker
//!
//! This library provides the core functionality for the FinBEE finance
//! tracker. Users record incomes and expenses; the analytics engine turns
//! those records into monthly aggregates, category breakdowns,
//! month-over-month changes, income-tax estimates and spending alerts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `analytics`: Pure functions over record slices (the analytics engine)
//! - `audit`: Audit logging system
//! - `cli`: Command handlers for the `finbee` binary
//! - `config`: Configuration and path management
//! - `display`: Tables and currency formatting
//! - `error`: Custom error types
//! - `export`: CSV, JSON and YAML export
//! - `models`: Core data models (incomes, expenses, money, periods)
//! - `reports`: Dashboard report and its sections
//! - `services`: Business logic layer
//! - `storage`: JSON file storage layer
//!
//! # Example
//!
//! ```rust,ignore
//! use finbee::analytics::{calculate_tax, tax_slab_label};
//!
//! assert_eq!(calculate_tax(750_000.0), 30_000.0);
//! assert_eq!(tax_slab_label(750_000.0), "₹15,000 + 10% above ₹6,00,000");
//! ```

pub mod analytics;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FinbeeError, FinbeeResult};
