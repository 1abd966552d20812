// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves and linear interpolation.

/// Cubic ease-out: `1 - (1 - t)^3`.
///
/// Fast start, decelerating towards the end. The input is clamped to
/// `[0, 1]`, so `ease_out_cubic(0.0) == 0.0` and `ease_out_cubic(1.0) == 1.0`
/// hold exactly.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Linearly interpolates between `a` and `b`.
///
/// Written as `a * (1 - t) + b * t` so that `t == 1.0` yields `b` exactly.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Maps a normalized time fraction to a normalized progress fraction.
#[derive(Copy, Clone, Debug, Default)]
pub enum Easing {
    /// Progress equals time.
    Linear,
    /// See [`ease_out_cubic`].
    #[default]
    EaseOutCubic,
    /// Caller-provided curve.
    ///
    /// The function should be monotonic with `f(0) == 0` and `f(1) == 1`;
    /// it is always called with an input clamped to `[0, 1]`.
    Custom(fn(f64) -> f64),
}

impl Easing {
    /// Evaluates the curve at `t`, clamping `t` into `[0, 1]` first.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOutCubic => ease_out_cubic(t),
            Self::Custom(f) => f(t),
        }
    }
}
