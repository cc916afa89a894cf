//! `word2llm` - A local store for learning records
//!
//! This library provides durable storage for saved study sessions: the words
//! studied, the generated reading article, and optional translation and
//! comprehension questions. The whole collection is persisted as one JSON
//! array under a fixed key in a pluggable key-value backend.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{Article, LanguagePoint, LearningRecord, Translation};
pub use store::{RecordStore, StoreStats, DEFAULT_MAX_RECORDS, STORE_KEY};
