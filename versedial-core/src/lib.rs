//! # versedial-core
//!
//! Pure domain logic for the rotating chapter dial:
//! - Fixed 114-slice dataset (chapter number + verse count)
//! - Rotation-to-index mapping and its inverse
//! - Easing curves and rotation tweens for animated transitions
//! - Play/step/off sequencer state machine over a chapter list
//!
//! No I/O and no async here; the content layer lives in `versedial-reader`.

pub mod dial;
pub mod easing;
pub mod sequencer;
pub mod slices;
pub mod tween;

pub use dial::{slice_at_point, slice_id_at_point, SLICE_ANGLE};
pub use easing::Easing;
pub use sequencer::{Mode, Sequencer};
pub use slices::{Slice, TOTAL_SLICES};
pub use tween::RotationTween;
