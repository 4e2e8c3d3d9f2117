//! Verse text cache
//!
//! Successful online fetches are cached for the life of the process so a
//! verse is only fetched once. Placeholders and locally overridden text are
//! never written here.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::types::{VerseKey, VerseText};

/// Storage seam for resolved verse text
#[async_trait]
pub trait TextCache: Send + Sync {
    async fn get(&self, key: VerseKey) -> Option<VerseText>;
    async fn put(&self, key: VerseKey, text: VerseText);
}

/// In-memory cache keyed by verse
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<VerseKey, VerseText>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl TextCache for MemoryCache {
    async fn get(&self, key: VerseKey) -> Option<VerseText> {
        self.entries.read().await.get(&key).cloned()
    }

    async fn put(&self, key: VerseKey, text: VerseText) {
        self.entries.write().await.insert(key, text);
    }
}
