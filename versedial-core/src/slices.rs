//! Fixed slice dataset
//!
//! The dial presents 114 slices, one per chapter, each carrying its verse
//! count. The table is compiled in and immutable; there is no lifecycle
//! beyond process start.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Number of slices on the dial
pub const TOTAL_SLICES: u32 = 114;

/// Verse counts indexed by chapter number - 1
const VERSE_COUNTS: [u32; TOTAL_SLICES as usize] = [
    7, 286, 200, 176, 120, 165, 206, 75, 129, 109, // 1-10
    123, 111, 43, 52, 99, 128, 111, 110, 98, 135, // 11-20
    112, 78, 118, 64, 77, 227, 93, 88, 69, 60, // 21-30
    34, 30, 73, 54, 45, 83, 182, 88, 75, 85, // 31-40
    54, 53, 89, 59, 37, 35, 38, 29, 18, 45, // 41-50
    60, 49, 62, 55, 78, 96, 29, 22, 24, 13, // 51-60
    14, 11, 11, 18, 12, 12, 30, 52, 52, 44, // 61-70
    28, 28, 20, 56, 40, 31, 50, 40, 46, 42, // 71-80
    29, 19, 36, 25, 22, 17, 19, 26, 30, 20, // 81-90
    15, 21, 11, 8, 8, 19, 5, 8, 8, 11, // 91-100
    11, 8, 3, 9, 5, 4, 7, 3, 6, 3, // 101-110
    5, 4, 5, 6, // 111-114
];

/// One slice of the dial: a chapter and its verse count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slice {
    /// Chapter number, 1..=114
    pub id: u32,
    /// Number of verses in the chapter
    pub verse_count: u32,
}

static SLICES: Lazy<Vec<Slice>> = Lazy::new(|| {
    VERSE_COUNTS
        .iter()
        .enumerate()
        .map(|(i, &count)| Slice {
            id: i as u32 + 1,
            verse_count: count,
        })
        .collect()
});

/// All slices in chapter order
pub fn all() -> &'static [Slice] {
    &SLICES
}

/// Look up a slice by chapter number (1..=114)
pub fn get(id: u32) -> Option<&'static Slice> {
    if id == 0 {
        return None;
    }
    SLICES.get(id as usize - 1)
}

/// Verse count for a chapter, or 0 for an out-of-range id
pub fn verse_count(id: u32) -> u32 {
    get(id).map(|s| s.verse_count).unwrap_or(0)
}
