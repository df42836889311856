//! # Artistly Architecture
//!
//! Artistly is a **library for browsing and booking performing artists** that
//! happens to have a terminal client. The pages (landing, artist directory,
//! onboarding form, manager dashboard) are built as plain data here; the
//! `artistly` binary is one way of rendering them.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments into a FilterState, renders pages       │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads the record store once, dispatches to commands      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per page or operation                         │
//! │  - Filter engine (filter/) + presentation adapter (present) │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/)                                      │
//! │  - RecordSource trait: bundled demo data, JSON file, memory │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Filtering Engine
//!
//! The directory and the dashboard share one engine. A view owns a
//! [`filter::FilterState`]; every change to it re-derives the filtered view by
//! a single linear scan that keeps records passing every applicable predicate.
//! The result borrows from the store and keeps store order. An invalid
//! drop-down value matches nothing instead of failing, and an empty result is
//! just an empty page.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns
//! `Result<CmdResult>`. It never writes to stdout/stderr and never exits the
//! process. The only asynchronous step is the simulated onboarding submission.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: per-page logic
//! - [`filter`]: selectors, filter state, predicates, evaluator
//! - [`present`]: records to cards and table rows
//! - [`store`]: record sources and the immutable record store
//! - [`validation`]: onboarding form checks
//! - [`model`]: enumerations, records, routes
//! - [`config`]: `config.json` settings
//! - [`init`]: config dir discovery and session setup
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod present;
pub mod store;
pub mod validation;
