//! Recitation playlist
//!
//! Pure state machine over an ordered track list. The caller owns actual
//! audio playback and reports completion or failure back; a failed track
//! advances exactly as if it had finished, so one bad stream never stalls
//! the list.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::types::VerseKey;

/// One playable verse recitation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub key: VerseKey,
    pub audio_url: String,
}

/// Ordered track list with a play cursor
#[derive(Debug, Clone, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
    index: usize,
    playing: bool,
    repeat: bool,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            index: 0,
            playing: false,
            repeat: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The track under the cursor, if any
    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.index)
    }

    pub fn toggle_play(&mut self) {
        if self.tracks.is_empty() {
            return;
        }
        self.playing = !self.playing;
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat = !self.repeat;
    }

    /// Jump the cursor to `index`; out-of-range values are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.tracks.len() {
            self.index = index;
        }
    }

    /// Reorder the tracks randomly and rewind to the start
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.tracks.shuffle(rng);
        self.index = 0;
    }

    /// The current track finished. Advance, wrapping when repeat is on;
    /// without repeat the list stops at the end with the cursor rewound.
    pub fn track_finished(&mut self) {
        if self.tracks.is_empty() || !self.playing {
            return;
        }
        if self.index + 1 < self.tracks.len() {
            self.index += 1;
        } else if self.repeat {
            self.index = 0;
        } else {
            self.index = 0;
            self.playing = false;
        }
    }

    /// The current track failed to play. Treated as finished so playback
    /// continues down the list.
    pub fn track_failed(&mut self) {
        if let Some(track) = self.current() {
            debug!(verse = %track.key, "track failed, skipping");
        }
        self.track_finished();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tracks(n: u32) -> Vec<Track> {
        (1..=n)
            .map(|v| Track {
                key: VerseKey::new(1, v),
                audio_url: format!("https://example.invalid/{v}.mp3"),
            })
            .collect()
    }

    #[test]
    fn test_finished_advances_then_stops_without_repeat() {
        let mut playlist = Playlist::new(tracks(3));
        playlist.toggle_play();
        assert!(playlist.is_playing());

        playlist.track_finished();
        assert_eq!(playlist.index(), 1);
        playlist.track_finished();
        assert_eq!(playlist.index(), 2);
        playlist.track_finished();
        assert_eq!(playlist.index(), 0);
        assert!(!playlist.is_playing());
    }

    #[test]
    fn test_repeat_wraps_and_keeps_playing() {
        let mut playlist = Playlist::new(tracks(2));
        playlist.toggle_play();
        playlist.toggle_repeat();

        playlist.track_finished();
        playlist.track_finished();
        assert_eq!(playlist.index(), 0);
        assert!(playlist.is_playing());
    }

    #[test]
    fn test_failure_advances_like_finished() {
        let mut playlist = Playlist::new(tracks(3));
        playlist.toggle_play();

        playlist.track_failed();
        assert_eq!(playlist.index(), 1);
        assert!(playlist.is_playing());
    }

    #[test]
    fn test_finished_ignored_while_stopped() {
        let mut playlist = Playlist::new(tracks(3));
        playlist.track_finished();
        assert_eq!(playlist.index(), 0);
        assert!(!playlist.is_playing());
    }

    #[test]
    fn test_toggle_play_noop_when_empty() {
        let mut playlist = Playlist::new(Vec::new());
        playlist.toggle_play();
        assert!(!playlist.is_playing());
        assert!(playlist.current().is_none());
    }

    #[test]
    fn test_select_bounds() {
        let mut playlist = Playlist::new(tracks(3));
        playlist.select(2);
        assert_eq!(playlist.index(), 2);
        playlist.select(3);
        assert_eq!(playlist.index(), 2);
    }

    #[test]
    fn test_shuffle_preserves_tracks_and_rewinds() {
        let mut playlist = Playlist::new(tracks(10));
        playlist.select(5);
        let mut rng = StdRng::seed_from_u64(7);
        playlist.shuffle(&mut rng);

        assert_eq!(playlist.index(), 0);
        assert_eq!(playlist.len(), 10);
        let mut verses: Vec<u32> = playlist.tracks.iter().map(|t| t.key.verse).collect();
        verses.sort_unstable();
        assert_eq!(verses, (1..=10).collect::<Vec<_>>());
    }
}
