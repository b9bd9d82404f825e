//! # aluna-core
//!
//! Core library for Aluna - a personal wellness journal.
//!
//! This library provides:
//! - Domain types for emotion check-ins, body sensations, and context tags
//! - Ingest boundary normalizing store documents (legacy and current shapes)
//! - Analytics over check-in history: frequencies, trends, streaks, consistency
//! - Geometry and selection state for the two-level emotion wheel
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! Data flows through three layers:
//! - **Raw:** JSON documents as the store hands them back (two generations)
//! - **Canonical:** [`LogEntry`] values with one resolved UTC instant each
//! - **Derived:** analytics view-models, recomputed from entries on demand
//!
//! ## Example
//!
//! ```rust,no_run
//! use aluna_core::analytics::{calculate_streak, emotion_frequency};
//! use aluna_core::ingest::parse_entries;
//!
//! let json = std::fs::read_to_string("checkins.json").expect("failed to read snapshot");
//! let entries = parse_entries(&json).expect("failed to parse snapshot");
//!
//! let dates: Vec<_> = entries.iter().map(|e| e.date).collect();
//! let streak = calculate_streak(&dates);
//! println!("{} day streak", streak.current);
//!
//! for freq in emotion_frequency(&entries) {
//!     println!("{}: {} ({}%)", freq.emotion, freq.count, freq.percentage);
//! }
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use ingest::{parse_entries, parse_snapshot, IngestResult};
pub use types::*;

// Public modules
pub mod analytics;
pub mod catalog;
pub mod config;
pub mod error;
pub mod format;
pub mod ingest;
pub mod logging;
pub mod types;
pub mod wheel;
