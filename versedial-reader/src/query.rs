//! Lookup query language
//!
//! Comma-separated terms naming verses, ranges, chapters, or a verse
//! position across all chapters:
//!
//! - `2:255`  one verse
//! - `97:1-5` a verse range within one chapter
//! - `112`    a whole chapter
//! - `:7`     verse 7 of every chapter long enough to have one

use versedial_core::slices;

use crate::error::{Error, Result};
use crate::provider::VerseSource;
use crate::resolver::VerseResolver;
use crate::types::{VerseDetails, VerseKey, VerseText};

/// One parsed query term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    Single { surah: u32, verse: u32 },
    Range { surah: u32, start: u32, end: u32 },
    Chapter(u32),
    AtVerse(u32),
}

fn parse_num(part: &str, input: &str) -> Result<u32> {
    if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidQuery(format!(
            "\"{input}\": expected a number, found \"{part}\""
        )));
    }
    part.parse()
        .map_err(|e| Error::InvalidQuery(format!("\"{input}\": {e}")))
}

fn check_surah(surah: u32, input: &str) -> Result<u32> {
    if slices::get(surah).is_none() {
        return Err(Error::InvalidQuery(format!(
            "\"{input}\": chapter {surah} is out of range (1-114)"
        )));
    }
    Ok(surah)
}

fn check_verse(surah: u32, verse: u32, input: &str) -> Result<u32> {
    let count = slices::verse_count(surah);
    if verse == 0 || verse > count {
        return Err(Error::InvalidQuery(format!(
            "\"{input}\": chapter {surah} has verses 1-{count}, not {verse}"
        )));
    }
    Ok(verse)
}

fn parse_term(term: &str) -> Result<Query> {
    match term.split_once(':') {
        None => Ok(Query::Chapter(check_surah(
            parse_num(term, term)?,
            term,
        )?)),
        Some(("", after)) => {
            let n = parse_num(after, term)?;
            let max = slices::all()
                .iter()
                .map(|s| s.verse_count)
                .max()
                .unwrap_or(0);
            if n == 0 || n > max {
                return Err(Error::InvalidQuery(format!(
                    "\"{term}\": verse position must be 1-{max}"
                )));
            }
            Ok(Query::AtVerse(n))
        }
        Some((before, after)) => {
            let surah = check_surah(parse_num(before, term)?, term)?;
            match after.split_once('-') {
                None => {
                    let verse = check_verse(surah, parse_num(after, term)?, term)?;
                    Ok(Query::Single { surah, verse })
                }
                Some((lo, hi)) => {
                    let start = check_verse(surah, parse_num(lo, term)?, term)?;
                    let end = check_verse(surah, parse_num(hi, term)?, term)?;
                    if start > end {
                        return Err(Error::InvalidQuery(format!(
                            "\"{term}\": range start {start} is after end {end}"
                        )));
                    }
                    Ok(Query::Range { surah, start, end })
                }
            }
        }
    }
}

/// Parse a comma-separated query string into terms.
///
/// En and em dashes are accepted as range separators. Whitespace around
/// terms is ignored and empty terms (stray or trailing commas) are
/// skipped; a query with no terms at all is an error.
pub fn parse(input: &str) -> Result<Vec<Query>> {
    let normalized = input.replace(['\u{2013}', '\u{2014}'], "-");
    let mut queries = Vec::new();
    for term in normalized.split(',') {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        queries.push(parse_term(term)?);
    }
    if queries.is_empty() {
        return Err(Error::InvalidQuery(format!("\"{input}\": no terms")));
    }
    Ok(queries)
}

/// Expand one term into the verse keys it names.
///
/// `Chapter` is not expanded here; it resolves through the chapter
/// endpoint instead of verse-by-verse.
fn expand(query: Query) -> Vec<VerseKey> {
    match query {
        Query::Single { surah, verse } => vec![VerseKey::new(surah, verse)],
        Query::Range { surah, start, end } => {
            (start..=end).map(|v| VerseKey::new(surah, v)).collect()
        }
        Query::AtVerse(n) => slices::all()
            .iter()
            .filter(|s| s.verse_count >= n)
            .map(|s| VerseKey::new(s.id, n))
            .collect(),
        Query::Chapter(_) => Vec::new(),
    }
}

/// Resolve parsed terms to display payloads.
///
/// Verse terms run through the batched details path; whole chapters come
/// from the chapter endpoint. Individual failures are dropped.
pub async fn run<S: VerseSource>(
    resolver: &VerseResolver<S>,
    queries: &[Query],
) -> Vec<VerseDetails> {
    let mut results = Vec::new();
    for &query in queries {
        if let Query::Chapter(surah) = query {
            match resolver.chapter(surah).await {
                Ok(chapter) => {
                    results.extend(chapter.verses.iter().map(|v| VerseDetails {
                        key: VerseKey::new(surah, v.number_in_surah),
                        surah_name: chapter.english_name.clone(),
                        arabic: v.arabic.clone(),
                        transliteration: v.transliteration.clone(),
                        text: VerseText::new(v.text.primary.clone(), v.text.secondary.clone()),
                        audio_url: v.audio_url.clone(),
                    }));
                }
                Err(err) => {
                    tracing::warn!(surah, error = %err, "chapter fetch failed");
                }
            }
            continue;
        }
        let keys = expand(query);
        results.extend(resolver.verse_details_many(&keys).await);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_verse() {
        assert_eq!(
            parse("2:255").unwrap(),
            vec![Query::Single { surah: 2, verse: 255 }]
        );
    }

    #[test]
    fn test_parse_chapter_and_range() {
        assert_eq!(
            parse("112, 97:1-5").unwrap(),
            vec![
                Query::Chapter(112),
                Query::Range { surah: 97, start: 1, end: 5 }
            ]
        );
    }

    #[test]
    fn test_parse_at_verse() {
        assert_eq!(parse(":7").unwrap(), vec![Query::AtVerse(7)]);
    }

    #[test]
    fn test_parse_normalizes_dashes() {
        assert_eq!(
            parse("97:1\u{2013}5").unwrap(),
            vec![Query::Range { surah: 97, start: 1, end: 5 }]
        );
        assert_eq!(
            parse("97:1\u{2014}5").unwrap(),
            vec![Query::Range { surah: 97, start: 1, end: 5 }]
        );
    }

    #[test]
    fn test_parse_rejects_out_of_domain() {
        assert!(parse("115").is_err());
        assert!(parse("0").is_err());
        assert!(parse("1:8").is_err()); // chapter 1 has 7 verses
        assert!(parse("2:0").is_err());
        assert!(parse("97:5-1").is_err());
        assert!(parse(":287").is_err()); // longest chapter has 286
        assert!(parse("abc").is_err());
        assert!(parse("2:255:7").is_err());
    }

    #[test]
    fn test_parse_skips_empty_terms() {
        assert_eq!(
            parse("2:255,").unwrap(),
            vec![Query::Single { surah: 2, verse: 255 }]
        );
        assert_eq!(
            parse(", 112, ,97:1").unwrap(),
            vec![Query::Chapter(112), Query::Single { surah: 97, verse: 1 }]
        );
        assert!(parse(",").is_err());
        assert!(parse("  ").is_err());
    }

    #[test]
    fn test_expand_range() {
        let keys = expand(Query::Range { surah: 97, start: 1, end: 5 });
        assert_eq!(keys.len(), 5);
        assert_eq!(keys[0], VerseKey::new(97, 1));
        assert_eq!(keys[4], VerseKey::new(97, 5));
    }

    #[test]
    fn test_expand_at_verse_filters_short_chapters() {
        // Only chapters with at least 200 verses qualify
        let keys = expand(Query::AtVerse(200));
        let chapters: Vec<u32> = keys.iter().map(|k| k.surah).collect();
        assert_eq!(chapters, vec![2, 3, 7, 26]);
        assert!(keys.iter().all(|k| k.verse == 200));
    }

    #[test]
    fn test_expand_at_verse_one_hits_every_chapter() {
        assert_eq!(expand(Query::AtVerse(1)).len(), 114);
    }
}
