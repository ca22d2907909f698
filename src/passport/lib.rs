//! # Coffee Passport Architecture
//!
//! Coffee Passport keeps a personal log of coffees tried: which ones were
//! tasted, the tasting note and photo from each check-in, favorites, and the
//! badges earned along the way. Everything lives on one device.
//!
//! Like any UI for it, the bundled `passport` binary is a client of the
//! library; all state handling lives here.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Presentation (the `passport` CLI, or any other UI)         │
//! │  - Renders views, collects input                            │
//! │  - Subscribes to changes, never mutates entries directly    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - CollectionStore: load/seed, mutate, persist, notify      │
//! │  - SharedCollection: mutex-serialized handle                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over the ordered entries                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (codec.rs, store/)                           │
//! │  - One JSON document per collection                         │
//! │  - KeyValueStore: FileStore, InMemoryStore                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`api`]: `CollectionStore`, the entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`model`]: Core data types (`CoffeeEntry`, filters, badges)
//! - [`codec`]: Collection encoding
//! - [`store`]: Storage abstraction and implementations
//! - [`observer`]: Change notification
//! - [`seed`]: Sample coffees for a fresh collection
//! - [`config`]: Configuration management
//! - [`init`]: Data directory resolution and wiring
//! - [`error`]: Error types

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod observer;
pub mod seed;
pub mod store;
