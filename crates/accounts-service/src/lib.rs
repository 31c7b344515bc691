//! # Accounts Service
//!
//! Persistence and validation for small full company accounts filings, built
//! on [`filing_framework`].
//!
//! ## Modules
//!
//! - **[model]**: REST representations and persisted field sets of every resource
//! - **[company_accounts]**, **[small_full]**, **[approval]**, **[statements]**,
//!   **[directors_report]**, **[notes]**: one module per resource, each with its
//!   descriptor, transformer, validator and service constructor
//! - **[config]**: YAML configuration
//! - **[lifecycle]**: [`AccountsSystem`](lifecycle::AccountsSystem) wiring and tracing setup
//!
//! ## Quick Start
//!
//! The entry point in `main.rs` files a complete set of accounts: company
//! accounts, small full, notes, directors, approval and statements.

pub mod approval;
pub mod company_accounts;
pub mod config;
pub mod directors_report;
pub mod lifecycle;
pub mod model;
pub mod notes;
pub mod small_full;
pub mod statements;
