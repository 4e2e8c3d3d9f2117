//! Play/step/off sequencer over a user-defined chapter list
//!
//! The sequencer is a pure state machine: it decides which chapter the dial
//! should align with next and what transition follows once an animation
//! settles. It never touches a clock; the driver (UI frame loop, tokio
//! task, test) asks for the next advance, runs the tween, reports back with
//! [`Sequencer::settled`], and waits [`crate::tween::DWELL`] between
//! automatic advances.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dial;
use crate::slices::TOTAL_SLICES;
use crate::tween::spin_duration;

/// Sequencer mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Idle, dial under manual control
    Off,
    /// Advance one entry, then return to Off
    Step,
    /// Advance automatically, wrapping at the end when looping is enabled
    Play,
}

/// What the driver should do after an animation settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settled {
    /// Pause for the dwell time, then drive the next advance
    Dwell,
    /// Sequence finished (or was in Step mode); sequencer is now Off
    Stopped,
}

/// One sequencer-driven dial transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    /// Chapter the dial should align with
    pub slice_id: u32,
    /// Rotation that aligns it with anchor point 1
    pub target_rotation: f64,
    /// Animation duration scaled by ring distance from the current slice
    pub duration: Duration,
}

/// Linear sequencer over an ordered chapter list
#[derive(Debug, Clone)]
pub struct Sequencer {
    sequence: Vec<u32>,
    index: usize,
    mode: Mode,
    loop_at_end: bool,
}

/// Extract a chapter sequence from free-form input.
///
/// Digit runs are parsed and values outside 1..=114 dropped, so
/// "23, 114, 1, 77" and "23-114-1" both work.
pub fn parse_sequence(input: &str) -> Vec<u32> {
    input
        .split(|c: char| !c.is_ascii_digit())
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse::<u32>().ok())
        .filter(|&n| (1..=TOTAL_SLICES).contains(&n))
        .collect()
}

impl Sequencer {
    pub fn new(sequence: Vec<u32>) -> Self {
        Self {
            sequence,
            index: 0,
            mode: Mode::Off,
            loop_at_end: true,
        }
    }

    /// Build from free-form text input
    pub fn from_input(input: &str) -> Self {
        Self::new(parse_sequence(input))
    }

    pub fn with_loop(mut self, loop_at_end: bool) -> Self {
        self.loop_at_end = loop_at_end;
        self
    }

    /// Replace the sequence; resets to Off at index 0
    pub fn set_sequence(&mut self, sequence: Vec<u32>) {
        self.sequence = sequence;
        self.index = 0;
        self.mode = Mode::Off;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Start automatic playback from the beginning
    pub fn play(&mut self) {
        if self.sequence.is_empty() {
            return;
        }
        debug!(len = self.sequence.len(), "sequencer: play");
        self.index = 0;
        self.mode = Mode::Play;
    }

    pub fn stop(&mut self) {
        if self.mode != Mode::Off {
            debug!("sequencer: stop");
        }
        self.mode = Mode::Off;
    }

    /// Advance one entry and settle (Q/E-style stepping)
    pub fn step_forward(&mut self) {
        if self.sequence.is_empty() {
            self.mode = Mode::Off;
            return;
        }
        if self.mode != Mode::Off {
            self.index += 1;
        }
        if self.index >= self.sequence.len() {
            self.index = 0;
            self.mode = Mode::Off;
        } else {
            self.mode = Mode::Step;
        }
    }

    /// Step back one entry, saturating at the start
    pub fn step_backward(&mut self) {
        if self.sequence.is_empty() {
            self.mode = Mode::Off;
            return;
        }
        self.index = self.index.saturating_sub(1);
        self.mode = Mode::Step;
    }

    /// Chapter currently targeted, if the sequencer is active
    pub fn current_target(&self) -> Option<u32> {
        if self.mode == Mode::Off || self.sequence.is_empty() {
            return None;
        }
        self.sequence.get(self.index % self.sequence.len()).copied()
    }

    /// Transition the driver should animate next, from `current_rotation`
    pub fn next_advance(&self, current_rotation: f64) -> Option<Advance> {
        let slice_id = self.current_target()?;
        let from_id = dial::slice_id_at_point(1, current_rotation);
        Some(Advance {
            slice_id,
            target_rotation: dial::target_rotation(slice_id),
            duration: spin_duration(from_id, slice_id),
        })
    }

    /// Report that the current advance finished animating.
    ///
    /// In Play the index moves on (wrapping when looping); in Step the
    /// sequencer turns Off.
    pub fn settled(&mut self) -> Settled {
        match self.mode {
            Mode::Off => Settled::Stopped,
            Mode::Step => {
                self.mode = Mode::Off;
                Settled::Stopped
            }
            Mode::Play => {
                let next = self.index + 1;
                if next >= self.sequence.len() {
                    if self.loop_at_end {
                        self.index = 0;
                        Settled::Dwell
                    } else {
                        self.mode = Mode::Off;
                        Settled::Stopped
                    }
                } else {
                    self.index = next;
                    Settled::Dwell
                }
            }
        }
    }
}
