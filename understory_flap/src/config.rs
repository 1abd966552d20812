// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flap configuration and the enums it is made of.

use core::fmt;

use understory_swipe::{Orientation, TextDirection};

/// Default reveal and fold animation duration, in milliseconds.
pub const DEFAULT_DURATION: u64 = 250;

/// When the flap folds, that is, floats above the content instead of sitting
/// beside it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FoldPolicy {
    /// Never fold.
    Never,
    /// Always fold.
    Always,
    /// Fold when the container is narrower than the minimum sizes of flap,
    /// separator and content combined.
    #[default]
    Auto,
}

/// How the flap and the content move while the flap is revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TransitionType {
    /// The flap slides in over the content.
    #[default]
    Over,
    /// The content slides away, uncovering the flap below it.
    Under,
    /// Flap and content slide together.
    Slide,
}

impl TransitionType {
    /// Whether the content is stacked above the flap.
    #[must_use]
    pub fn is_content_above_flap(self) -> bool {
        !matches!(self, Self::Over)
    }

    pub(crate) fn content_motion_factor(self) -> f64 {
        match self {
            Self::Over => 0.0,
            Self::Under | Self::Slide => 1.0,
        }
    }

    pub(crate) fn flap_motion_factor(self) -> f64 {
        match self {
            Self::Over | Self::Slide => 1.0,
            Self::Under => 0.0,
        }
    }
}

/// Which edge of the container the flap is attached to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FlapPosition {
    /// Leading edge: left, or right in right-to-left horizontal layouts; top
    /// when vertical.
    #[default]
    Start,
    /// Trailing edge.
    End,
}

/// Initial configuration of a [`Flap`](crate::Flap).
#[derive(Clone, Debug, PartialEq)]
pub struct FlapConfig {
    /// Duration of reveal animations started by [`Flap::set_reveal_flap`](crate::Flap::set_reveal_flap).
    pub reveal_duration: u64,
    /// Duration of fold and unfold animations.
    pub fold_duration: u64,
    /// Folding policy.
    pub fold_policy: FoldPolicy,
    /// Transition type.
    pub transition_type: TransitionType,
    /// Edge the flap is attached to.
    pub flap_position: FlapPosition,
    /// Whether the flap starts revealed.
    pub reveal_flap: bool,
    /// A locked flap keeps its reveal state when folding or unfolding.
    pub locked: bool,
    /// Whether a swipe may open the flap.
    pub swipe_to_open: bool,
    /// Whether a swipe may close the flap.
    pub swipe_to_close: bool,
    /// Main axis.
    pub orientation: Orientation,
    /// Reading direction; swaps the edges of horizontal flaps when right to left.
    pub text_direction: TextDirection,
}

impl Default for FlapConfig {
    fn default() -> Self {
        Self {
            reveal_duration: DEFAULT_DURATION,
            fold_duration: DEFAULT_DURATION,
            fold_policy: FoldPolicy::Auto,
            transition_type: TransitionType::Over,
            flap_position: FlapPosition::Start,
            reveal_flap: true,
            locked: false,
            swipe_to_open: true,
            swipe_to_close: true,
            orientation: Orientation::Horizontal,
            text_direction: TextDirection::Ltr,
        }
    }
}

impl FlapConfig {
    /// Sets [`reveal_duration`](Self::reveal_duration).
    #[must_use]
    pub fn with_reveal_duration(mut self, duration: u64) -> Self {
        self.reveal_duration = duration;
        self
    }

    /// Sets [`fold_duration`](Self::fold_duration).
    #[must_use]
    pub fn with_fold_duration(mut self, duration: u64) -> Self {
        self.fold_duration = duration;
        self
    }

    /// Sets [`fold_policy`](Self::fold_policy).
    #[must_use]
    pub fn with_fold_policy(mut self, policy: FoldPolicy) -> Self {
        self.fold_policy = policy;
        self
    }

    /// Sets [`transition_type`](Self::transition_type).
    #[must_use]
    pub fn with_transition_type(mut self, transition: TransitionType) -> Self {
        self.transition_type = transition;
        self
    }

    /// Sets [`flap_position`](Self::flap_position).
    #[must_use]
    pub fn with_flap_position(mut self, position: FlapPosition) -> Self {
        self.flap_position = position;
        self
    }

    /// Sets [`reveal_flap`](Self::reveal_flap).
    #[must_use]
    pub fn with_reveal_flap(mut self, reveal: bool) -> Self {
        self.reveal_flap = reveal;
        self
    }

    /// Sets [`locked`](Self::locked).
    #[must_use]
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Sets [`swipe_to_open`](Self::swipe_to_open).
    #[must_use]
    pub fn with_swipe_to_open(mut self, allow: bool) -> Self {
        self.swipe_to_open = allow;
        self
    }

    /// Sets [`swipe_to_close`](Self::swipe_to_close).
    #[must_use]
    pub fn with_swipe_to_close(mut self, allow: bool) -> Self {
        self.swipe_to_close = allow;
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

    /// Checks that the fields are consistent with each other.
    ///
    /// An unlocked flap hides whenever it folds, so it cannot start revealed
    /// under [`FoldPolicy::Always`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fold_policy == FoldPolicy::Always && self.reveal_flap && !self.locked {
            return Err(ConfigError::RevealedWhileFolded);
        }
        Ok(())
    }
}

/// Error returned by [`FlapConfig::validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// An unlocked, always folded flap was configured to start revealed.
    RevealedWhileFolded,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RevealedWhileFolded => {
                f.write_str("an unlocked flap that always folds cannot start revealed")
            }
        }
    }
}

impl core::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = FlapConfig::default();
        assert_eq!(config.reveal_duration, 250);
        assert_eq!(config.fold_duration, 250);
        assert_eq!(config.fold_policy, FoldPolicy::Auto);
        assert!(config.reveal_flap);
        assert!(config.swipe_to_open && config.swipe_to_close);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn revealed_always_folded_needs_lock() {
        let config = FlapConfig::default().with_fold_policy(FoldPolicy::Always);
        assert_eq!(config.validate(), Err(ConfigError::RevealedWhileFolded));
        assert!(config.clone().with_locked(true).validate().is_ok());
        assert!(config.with_reveal_flap(false).validate().is_ok());
    }

    #[test]
    fn transition_factors() {
        assert!(!TransitionType::Over.is_content_above_flap());
        assert!(TransitionType::Under.is_content_above_flap());
        assert_eq!(TransitionType::Under.flap_motion_factor(), 0.0);
        assert_eq!(TransitionType::Slide.flap_motion_factor(), 1.0);
        assert_eq!(TransitionType::Over.content_motion_factor(), 0.0);
    }

    #[test]
    fn error_message() {
        assert_eq!(
            ConfigError::RevealedWhileFolded.to_string(),
            "an unlocked flap that always folds cannot start revealed"
        );
    }
}
