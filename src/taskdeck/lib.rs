//! # Taskdeck Architecture
//!
//! Taskdeck is a **UI-agnostic to-do library** with a command-line client on top.
//! The terminal client is one possible shell; the same core could drive a desktop
//! window or a web page.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Persists the session after every mutation                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + View Engine (view.rs)      │
//! │  - Pure logic over a TaskCollection                         │
//! │  - Returns CmdResult, never prints                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session + Storage Layer (session.rs, store/)               │
//! │  - Active user and its task collection                      │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Session
//!
//! There is no global "active user". A [`session::Session`] is built once by the
//! client and handed to the API, which owns it for the lifetime of the process.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** and **view**: unit tests against in-memory collections.
//! 2. **Store**: `InMemoryStore` fixtures and temp-dir `FileStore` tests.
//! 3. **CLI**: integration tests in `tests/` driving the binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each command
//! - [`view`]: View modes and the filter engine
//! - [`model`]: Core data types (`Task`, `Category`, `Priority`, `TaskCollection`)
//! - [`session`]: Explicit session context
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod view;
