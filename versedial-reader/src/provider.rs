//! Pluggable verse data provider
//!
//! The resolver talks to remote data through this seam so tests (and any
//! alternative backend) can substitute their own source.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Chapter, VerseDetails, VerseKey, VerseText};

/// Source of verse content
///
/// Implementations are expected to be cheap to call repeatedly; caching is
/// the resolver's job, not the source's.
#[async_trait]
pub trait VerseSource: Send + Sync {
    /// Primary/secondary translation pair for one verse
    async fn verse_text(&self, key: VerseKey) -> Result<VerseText>;

    /// A full chapter with every verse resolved
    async fn chapter(&self, surah: u32) -> Result<Chapter>;

    /// Everything needed to display one verse.
    ///
    /// With `include_translations` false only the arabic text and
    /// transliteration are fetched and the text pair is left empty; the
    /// caller fills it from a local override table.
    async fn verse_details(&self, key: VerseKey, include_translations: bool)
        -> Result<VerseDetails>;
}
