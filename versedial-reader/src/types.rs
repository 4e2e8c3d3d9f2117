//! Shared reader types
//!
//! The composite verse key and the display payloads produced by a
//! [`crate::provider::VerseSource`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Composite lookup key: chapter (surah) plus verse number within it.
///
/// Displays and parses as `"surah:verse"`, the format used by the cache,
/// the local override file, and the query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseKey {
    pub surah: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(surah: u32, verse: u32) -> Self {
        Self { surah, verse }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.surah, self.verse)
    }
}

impl FromStr for VerseKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (surah, verse) = s
            .split_once(':')
            .ok_or_else(|| Error::Parse(format!("verse key \"{s}\" must be \"surah:verse\"")))?;
        let parse_num = |part: &str| {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(Error::Parse(format!(
                    "verse key \"{s}\" must contain only digits around ':'"
                )));
            }
            part.parse::<u32>()
                .map_err(|e| Error::Parse(format!("verse key \"{s}\": {e}")))
        };
        Ok(Self {
            surah: parse_num(surah)?,
            verse: parse_num(verse)?,
        })
    }
}

/// Primary/secondary translation pair for one verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseText {
    pub primary: String,
    /// Empty when no secondary translation is available
    pub secondary: String,
}

impl VerseText {
    pub fn new(primary: impl Into<String>, secondary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            secondary: secondary.into(),
        }
    }

    /// Placeholder shown when a fetch fails after retries are exhausted.
    /// Failures are scoped to the one verse; they never abort a view.
    pub fn placeholder(key: VerseKey) -> Self {
        Self {
            primary: format!("Could not load verse {key}."),
            secondary: format!("আয়াত {key} লোড করা যায়নি।"),
        }
    }
}

/// Fully resolved verse for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseDetails {
    pub key: VerseKey,
    pub surah_name: String,
    pub arabic: String,
    pub transliteration: String,
    pub text: VerseText,
    pub audio_url: String,
}

/// One verse within a fetched chapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterVerse {
    pub number_in_surah: u32,
    pub arabic: String,
    pub transliteration: String,
    pub text: VerseText,
    pub audio_url: String,
}

/// A full chapter with all verses resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: u32,
    pub english_name: String,
    pub arabic_name: String,
    pub revelation_type: String,
    pub verse_count: u32,
    pub verses: Vec<ChapterVerse>,
}
