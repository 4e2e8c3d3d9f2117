//! # versedial-reader
//!
//! Async content layer for the verse dial: HTTP client for the
//! alquran.cloud API with retry/backoff, session verse cache,
//! bounded-width batch fetching, local override tables, query parsing and
//! resolution, recitation playlist state, and persisted settings.
//!
//! The pure dial/sequencer logic lives in `versedial-core`.

pub mod batch;
pub mod cache;
pub mod client;
pub mod error;
pub mod overrides;
pub mod playlist;
pub mod provider;
pub mod query;
pub mod resolver;
pub mod retry;
pub mod settings;
pub mod types;

pub use cache::{MemoryCache, TextCache};
pub use client::AlQuranClient;
pub use error::{Error, Result};
pub use overrides::LocalOverrides;
pub use playlist::{Playlist, Track};
pub use provider::VerseSource;
pub use resolver::{SourceMode, VerseResolver};
pub use settings::Settings;
pub use types::{Chapter, ChapterVerse, VerseDetails, VerseKey, VerseText};
