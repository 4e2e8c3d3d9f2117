//! alquran.cloud HTTP client
//!
//! Thin typed wrapper over the public REST API. Every request goes through
//! the retry helper, so transient failures are absorbed here and callers
//! only see errors once the attempts are exhausted.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::provider::VerseSource;
use crate::retry::{retry_with_backoff, RETRY_ATTEMPTS, RETRY_BASE_DELAY};
use crate::types::{Chapter, ChapterVerse, VerseDetails, VerseKey, VerseText};

/// Production API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.alquran.cloud/v1";

/// Audio CDN, 128kbps Alafasy recitation, addressed by absolute verse number
const AUDIO_CDN_BASE: &str = "https://cdn.islamic.network/quran/audio/128/ar.alafasy";

/// Arabic source text edition
const EDITION_ARABIC: &str = "quran-uthmani";
/// Primary (English) translation edition
const EDITION_PRIMARY: &str = "en.sahih";
/// Secondary (Bengali) translation edition
const EDITION_SECONDARY: &str = "bn.bengali";
/// Latin-script transliteration edition
const EDITION_TRANSLITERATION: &str = "en.transliteration";

/// HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Client for the alquran.cloud verse API
pub struct AlQuranClient {
    client: reqwest::Client,
    base_url: String,
}

/// Common response envelope: every endpoint wraps its payload in
/// `{ "code": 200, "status": "OK", "data": ... }`.
#[derive(Debug, Deserialize)]
struct ApiEnvelope<T> {
    code: u16,
    data: T,
}

#[derive(Debug, Deserialize)]
struct EditionRef {
    identifier: String,
}

/// One ayah as returned by `/ayah/{ref}/editions/...`
#[derive(Debug, Deserialize)]
struct EditionAyah {
    /// Absolute verse number across the whole text (1..=6236)
    number: u32,
    text: String,
    edition: EditionRef,
    #[serde(rename = "numberInSurah")]
    number_in_surah: u32,
    surah: Option<SurahRef>,
}

#[derive(Debug, Deserialize)]
struct SurahRef {
    #[serde(rename = "englishName")]
    english_name: String,
}

/// One ayah nested in a surah payload. Unlike the `/ayah` endpoints the
/// edition tag sits on the surah object, not on each ayah.
#[derive(Debug, Deserialize)]
struct SurahAyah {
    /// Absolute verse number across the whole text (1..=6236)
    number: u32,
    text: String,
    #[serde(rename = "numberInSurah")]
    number_in_surah: u32,
}

/// One surah as returned by `/surah/{n}/editions/...`
#[derive(Debug, Deserialize)]
struct SurahEdition {
    number: u32,
    name: String,
    #[serde(rename = "englishName")]
    english_name: String,
    #[serde(rename = "revelationType")]
    revelation_type: String,
    edition: EditionRef,
    ayahs: Vec<SurahAyah>,
}

impl AlQuranClient {
    /// Create a client against the production API
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate base URL (used by tests)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Audio URL for the Alafasy recitation of one verse.
    ///
    /// The CDN is addressed by absolute verse number, which the API reports
    /// as `number` on every ayah payload.
    pub fn audio_url(absolute_number: u32) -> String {
        format!("{AUDIO_CDN_BASE}/{absolute_number}.mp3")
    }

    /// GET `path` and deserialize the envelope payload.
    ///
    /// Status and body errors are mapped onto the retryable/terminal split:
    /// connect and timeout failures become [`Error::Network`], non-2xx
    /// responses become [`Error::Api`], and a decode failure or a non-200
    /// envelope code becomes [`Error::Parse`].
    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}/{path}", self.base_url);
        let url = url.as_str();
        let client = &self.client;
        retry_with_backoff(RETRY_ATTEMPTS, RETRY_BASE_DELAY, move || async move {
            debug!(url, "fetching");
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| Error::Network(e.to_string()))?;
            let status = response.status();
            if !status.is_success() {
                return Err(Error::Api {
                    status: status.as_u16(),
                });
            }
            let envelope: ApiEnvelope<T> = response
                .json()
                .await
                .map_err(|e| Error::Parse(e.to_string()))?;
            if envelope.code != 200 {
                return Err(Error::Parse(format!(
                    "API envelope code {} for {url}",
                    envelope.code
                )));
            }
            Ok(envelope.data)
        })
        .await
    }

    fn text_for<'a>(ayahs: &'a [EditionAyah], edition: &str) -> Option<&'a str> {
        ayahs
            .iter()
            .find(|a| a.edition.identifier == edition)
            .map(|a| a.text.as_str())
    }
}

impl Default for AlQuranClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerseSource for AlQuranClient {
    async fn verse_text(&self, key: VerseKey) -> Result<VerseText> {
        let path = format!("ayah/{key}/editions/{EDITION_PRIMARY},{EDITION_SECONDARY}");
        let ayahs: Vec<EditionAyah> = self.get_json(&path).await?;
        let primary = Self::text_for(&ayahs, EDITION_PRIMARY)
            .ok_or_else(|| Error::Parse(format!("missing {EDITION_PRIMARY} text for {key}")))?;
        let secondary = Self::text_for(&ayahs, EDITION_SECONDARY).unwrap_or("");
        Ok(VerseText::new(primary, secondary))
    }

    async fn chapter(&self, surah: u32) -> Result<Chapter> {
        let path = format!(
            "surah/{surah}/editions/{EDITION_ARABIC},{EDITION_PRIMARY},{EDITION_SECONDARY},{EDITION_TRANSLITERATION}"
        );
        let editions: Vec<SurahEdition> = self.get_json(&path).await?;
        let by_id = |id: &str| editions.iter().find(|e| e.edition.identifier == id);

        let arabic = by_id(EDITION_ARABIC)
            .ok_or_else(|| Error::Parse(format!("missing {EDITION_ARABIC} for surah {surah}")))?;
        let primary = by_id(EDITION_PRIMARY)
            .ok_or_else(|| Error::Parse(format!("missing {EDITION_PRIMARY} for surah {surah}")))?;
        let secondary = by_id(EDITION_SECONDARY);
        let translit = by_id(EDITION_TRANSLITERATION);

        let verses = arabic
            .ayahs
            .iter()
            .enumerate()
            .map(|(i, ayah)| {
                let text_at = |edition: Option<&SurahEdition>| {
                    edition
                        .and_then(|e| e.ayahs.get(i))
                        .map(|a| a.text.clone())
                        .unwrap_or_default()
                };
                ChapterVerse {
                    number_in_surah: ayah.number_in_surah,
                    arabic: ayah.text.clone(),
                    transliteration: text_at(translit),
                    text: VerseText::new(text_at(Some(primary)), text_at(secondary)),
                    audio_url: Self::audio_url(ayah.number),
                }
            })
            .collect::<Vec<_>>();

        Ok(Chapter {
            number: arabic.number,
            english_name: arabic.english_name.clone(),
            arabic_name: arabic.name.clone(),
            revelation_type: arabic.revelation_type.clone(),
            verse_count: verses.len() as u32,
            verses,
        })
    }

    async fn verse_details(
        &self,
        key: VerseKey,
        include_translations: bool,
    ) -> Result<VerseDetails> {
        let editions = if include_translations {
            format!(
                "{EDITION_ARABIC},{EDITION_TRANSLITERATION},{EDITION_PRIMARY},{EDITION_SECONDARY}"
            )
        } else {
            format!("{EDITION_ARABIC},{EDITION_TRANSLITERATION}")
        };
        let path = format!("ayah/{key}/editions/{editions}");
        let ayahs: Vec<EditionAyah> = self.get_json(&path).await?;

        let arabic_ayah = ayahs
            .iter()
            .find(|a| a.edition.identifier == EDITION_ARABIC)
            .ok_or_else(|| Error::Parse(format!("missing {EDITION_ARABIC} text for {key}")))?;
        let surah_name = arabic_ayah
            .surah
            .as_ref()
            .map(|s| s.english_name.clone())
            .unwrap_or_default();

        let text = if include_translations {
            let primary = Self::text_for(&ayahs, EDITION_PRIMARY)
                .ok_or_else(|| Error::Parse(format!("missing {EDITION_PRIMARY} text for {key}")))?;
            let secondary = Self::text_for(&ayahs, EDITION_SECONDARY).unwrap_or("");
            VerseText::new(primary, secondary)
        } else {
            VerseText::new("", "")
        };

        Ok(VerseDetails {
            key,
            surah_name,
            arabic: arabic_ayah.text.clone(),
            transliteration: Self::text_for(&ayahs, EDITION_TRANSLITERATION)
                .unwrap_or("")
                .to_string(),
            text,
            audio_url: Self::audio_url(arabic_ayah.number),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_url_uses_absolute_number() {
        assert_eq!(
            AlQuranClient::audio_url(262),
            "https://cdn.islamic.network/quran/audio/128/ar.alafasy/262.mp3"
        );
    }

    #[test]
    fn test_edition_ayah_parses_api_shape() {
        let json = r#"{
            "number": 262,
            "text": "Allah - there is no deity except Him.",
            "edition": { "identifier": "en.sahih" },
            "numberInSurah": 255,
            "surah": { "englishName": "Al-Baqara" }
        }"#;
        let ayah: EditionAyah = serde_json::from_str(json).unwrap();
        assert_eq!(ayah.number, 262);
        assert_eq!(ayah.number_in_surah, 255);
        assert_eq!(ayah.edition.identifier, "en.sahih");
        assert_eq!(ayah.surah.unwrap().english_name, "Al-Baqara");
    }

    #[test]
    fn test_envelope_parses_list_payload() {
        let json = r#"{
            "code": 200,
            "status": "OK",
            "data": [
                {
                    "number": 1,
                    "text": "In the name of Allah",
                    "edition": { "identifier": "en.sahih" },
                    "numberInSurah": 1
                },
                {
                    "number": 1,
                    "text": "আল্লাহর নামে",
                    "edition": { "identifier": "bn.bengali" },
                    "numberInSurah": 1
                }
            ]
        }"#;
        let envelope: ApiEnvelope<Vec<EditionAyah>> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.code, 200);
        assert_eq!(envelope.data.len(), 2);
        assert_eq!(
            AlQuranClient::text_for(&envelope.data, "bn.bengali"),
            Some("আল্লাহর নামে")
        );
        assert_eq!(AlQuranClient::text_for(&envelope.data, "quran-uthmani"), None);
    }

    #[test]
    fn test_surah_payload_has_no_per_ayah_edition() {
        // The surah endpoints tag the edition once at the surah level;
        // nested ayahs carry only their numbers and text.
        let json = r#"{
            "code": 200,
            "status": "OK",
            "data": [
                {
                    "number": 114,
                    "name": "سورة الناس",
                    "englishName": "An-Naas",
                    "englishNameTranslation": "Mankind",
                    "revelationType": "Meccan",
                    "numberOfAyahs": 6,
                    "edition": {
                        "identifier": "quran-uthmani",
                        "language": "ar",
                        "name": "Uthmani",
                        "format": "text",
                        "type": "quran"
                    },
                    "ayahs": [
                        {
                            "number": 6231,
                            "text": "...",
                            "numberInSurah": 1,
                            "juz": 30,
                            "manzil": 7,
                            "page": 604,
                            "ruku": 556,
                            "hizbQuarter": 240,
                            "sajda": false
                        }
                    ]
                }
            ]
        }"#;
        let envelope: ApiEnvelope<Vec<SurahEdition>> = serde_json::from_str(json).unwrap();
        let surah = &envelope.data[0];
        assert_eq!(surah.number, 114);
        assert_eq!(surah.english_name, "An-Naas");
        assert_eq!(surah.edition.identifier, "quran-uthmani");
        assert_eq!(surah.ayahs[0].number, 6231);
        assert_eq!(surah.ayahs[0].number_in_surah, 1);
    }
}
