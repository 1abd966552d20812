// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Carousel configuration.

use core::fmt;

use understory_swipe::{Orientation, TextDirection};

/// Default scroll animation duration, in milliseconds.
pub const DEFAULT_DURATION: u64 = 250;

/// Static configuration for a [`Carousel`](crate::Carousel).
///
/// Every field can also be changed on a live carousel through its setters.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Gap between pages, in pixels.
    pub spacing: f64,
    /// Duration of scroll animations started by navigation, in milliseconds.
    pub animation_duration: u64,
    /// Duration of the grow/shrink animation of inserted and removed pages.
    pub reveal_duration: u64,
    /// Whether wheel, keyboard and swipe input is accepted.
    pub interactive: bool,
    /// Whether one swipe may travel past the adjacent pages.
    pub allow_long_swipes: bool,
    /// Whether pages can be dragged with a mouse (touch always can).
    pub allow_mouse_drag: bool,
    /// Main axis.
    pub orientation: Orientation,
    /// Reading direction; mirrors horizontal carousels when right to left.
    pub text_direction: TextDirection,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            animation_duration: DEFAULT_DURATION,
            reveal_duration: 0,
            interactive: true,
            allow_long_swipes: false,
            allow_mouse_drag: true,
            orientation: Orientation::Horizontal,
            text_direction: TextDirection::Ltr,
        }
    }
}

impl CarouselConfig {
    /// Sets [`spacing`](Self::spacing).
    #[must_use]
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Sets [`animation_duration`](Self::animation_duration).
    #[must_use]
    pub fn with_animation_duration(mut self, duration: u64) -> Self {
        self.animation_duration = duration;
        self
    }

    /// Sets [`reveal_duration`](Self::reveal_duration).
    #[must_use]
    pub fn with_reveal_duration(mut self, duration: u64) -> Self {
        self.reveal_duration = duration;
        self
    }

    /// Sets [`interactive`](Self::interactive).
    #[must_use]
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Sets [`allow_long_swipes`](Self::allow_long_swipes).
    #[must_use]
    pub fn with_allow_long_swipes(mut self, allow: bool) -> Self {
        self.allow_long_swipes = allow;
        self
    }

    /// Sets [`allow_mouse_drag`](Self::allow_mouse_drag).
    #[must_use]
    pub fn with_allow_mouse_drag(mut self, allow: bool) -> Self {
        self.allow_mouse_drag = allow;
        self
    }

    /// Sets [`orientation`](Self::orientation).
    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Sets [`text_direction`](Self::text_direction).
    #[must_use]
    pub fn with_text_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }

    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_spacing(self.spacing) {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }
        Ok(())
    }
}

pub(crate) fn is_valid_spacing(spacing: f64) -> bool {
    spacing.is_finite() && spacing >= 0.0
}

/// Error returned by [`CarouselConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Spacing was negative, infinite or NaN.
    InvalidSpacing(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpacing(spacing) => {
                write!(f, "spacing must be finite and non-negative, got {spacing}")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
