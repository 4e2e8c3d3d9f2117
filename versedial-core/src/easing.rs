//! Easing curves for animated dial transitions

use serde::{Deserialize, Serialize};

/// Easing curve applied to normalized animation progress
///
/// - Linear: constant rate of change
/// - CubicInOut: smooth acceleration and deceleration, used for all dial
///   spins so long travels don't start or stop abruptly
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// v(t) = t
    Linear,
    /// v(t) = 4t^3 below the midpoint, 1 - (-2t + 2)^3 / 2 above it
    CubicInOut,
}

impl Easing {
    /// Eased value at normalized progress `t`, clamped to `[0, 1]`
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::CubicInOut
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        for easing in [Easing::Linear, Easing::CubicInOut] {
            assert!((easing.apply(0.0) - 0.0).abs() < 1e-12);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_cubic_midpoint() {
        assert!((Easing::CubicInOut.apply(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_cubic_is_monotonic() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = Easing::CubicInOut.apply(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn test_clamps_out_of_range_progress() {
        assert_eq!(Easing::CubicInOut.apply(-0.5), 0.0);
        assert_eq!(Easing::CubicInOut.apply(1.5), 1.0);
    }
}
