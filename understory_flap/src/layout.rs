// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sizing and placing the flap, separator and content.
//!
//! Sizes are computed for the four corner states (folded or not, revealed or
//! not) and interpolated by reveal progress, then by fold progress. Positions
//! are laid out for a flap on the leading edge and mirrored otherwise.

use kurbo::{Rect, Size};
use understory_animation::lerp;
use understory_swipe::{Orientation, SWIPE_BORDER, TextDirection};

use crate::config::{FlapPosition, FoldPolicy, TransitionType};

/// Size a child asks for along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SizeRequest {
    /// Minimum size.
    pub min: f64,
    /// Preferred size.
    pub natural: f64,
    /// Whether the child wants all the space it can get on this axis.
    pub expand: bool,
}

/// Measured sizes of the flap's children along one axis.
///
/// A missing flap or content is `None`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlapMeasurements {
    /// The flap.
    pub flap: Option<SizeRequest>,
    /// The content.
    pub content: Option<SizeRequest>,
    /// Minimum size of the separator, `0.0` without one.
    pub separator: f64,
}

impl FlapMeasurements {
    /// Combined minimum size; below it an auto-folding flap folds.
    #[must_use]
    pub fn min_total(&self) -> f64 {
        self.flap.map_or(0.0, |r| r.min) + self.content.map_or(0.0, |r| r.min) + self.separator
    }
}

/// Rectangles of the three children, in container coordinates.
///
/// Rectangles may extend past the container while the flap slides in or out.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlapLayout {
    /// The flap.
    pub flap: Rect,
    /// The separator between flap and content.
    pub separator: Rect,
    /// The content.
    pub content: Rect,
}

/// Progress and placement state the layout is computed from.
#[derive(Copy, Clone, Debug)]
pub(crate) struct LayoutState {
    pub(crate) reveal_progress: f64,
    pub(crate) fold_progress: f64,
    pub(crate) transition: TransitionType,
    pub(crate) position: FlapPosition,
    pub(crate) orientation: Orientation,
    pub(crate) direction: TextDirection,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct Sizes {
    flap: f64,
    content: f64,
    separator: f64,
}

impl Sizes {
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self {
            flap: lerp(a.flap, b.flap, t),
            content: lerp(a.content, b.content, t),
            separator: lerp(a.separator, b.separator, t),
        }
    }
}

pub(crate) fn main_axis(size: Size, orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Horizontal => (size.width, size.height),
        Orientation::Vertical => (size.height, size.width),
    }
}

pub(crate) fn main_extent(rect: Rect, orientation: Orientation) -> f64 {
    match orientation {
        Orientation::Horizontal => rect.width(),
        Orientation::Vertical => rect.height(),
    }
}

/// How far the flap travels between hidden and revealed.
///
/// The separator stops counting as the flap folds over the content.
pub(crate) fn swipe_distance(flap: f64, separator: f64, state: &LayoutState) -> f64 {
    if state.transition.is_content_above_flap() {
        flap + separator
    } else {
        flap + separator * (1.0 - state.fold_progress)
    }
}

// Grows `sizes` towards their natural sizes, smallest gap first, sharing
// `extra` evenly. Returns what could not be handed out.
fn distribute_natural(mut extra: f64, sizes: &mut [(f64, f64); 2]) -> f64 {
    let gap = |s: (f64, f64)| (s.1 - s.0).max(0.0);
    let order = if gap(sizes[1]) < gap(sizes[0]) {
        [1, 0]
    } else {
        [0, 1]
    };
    for (k, i) in order.into_iter().enumerate() {
        let share = if k == 0 { extra / 2.0 } else { extra };
        let given = gap(sizes[i]).min(share);
        sizes[i].0 += given;
        extra -= given;
    }
    extra
}

fn compute_sizes(m: &FlapMeasurements, total: f64, folded: bool, revealed: bool) -> Sizes {
    let separator = m.separator;
    let (flap, content) = match (m.flap, m.content) {
        (None, None) => return Sizes::default(),
        (None, Some(_)) => {
            return Sizes {
                flap: 0.0,
                content: total,
                separator,
            };
        }
        (Some(_), None) => {
            return Sizes {
                flap: total,
                content: 0.0,
                separator,
            };
        }
        (Some(flap), Some(content)) => (flap, content),
    };

    if folded {
        let flap = if flap.expand {
            total
        } else {
            flap.natural.min(total)
        };
        return Sizes {
            flap,
            content: total,
            separator,
        };
    }

    let total = if revealed { total - separator } else { total };
    let mut out = Sizes {
        flap: flap.min,
        content: content.min,
        separator,
    };

    if flap.expand && content.expand {
        out.flap = out.flap.max(total / 2.0);
        out.content = if revealed { total - out.flap } else { total };
        return out;
    }

    let mut extra = total - out.content - out.flap;
    if extra > 0.0 && flap.expand {
        out.flap += extra;
        if !revealed {
            out.content = total;
        }
        return out;
    }
    if extra > 0.0 && content.expand {
        out.content += extra;
        extra = 0.0;
    }
    if extra > 0.0 {
        let mut sizes = [(out.flap, flap.natural), (out.content, content.natural)];
        let rest = distribute_natural(extra, &mut sizes);
        out.flap = sizes[0].0;
        out.content = sizes[1].0 + rest;
    }
    if !revealed {
        out.content = total;
    }
    out
}

fn interpolate_reveal(m: &FlapMeasurements, total: f64, folded: bool, progress: f64) -> Sizes {
    if progress <= 0.0 {
        compute_sizes(m, total, folded, false)
    } else if progress >= 1.0 {
        compute_sizes(m, total, folded, true)
    } else {
        let hidden = compute_sizes(m, total, folded, false);
        let revealed = compute_sizes(m, total, folded, true);
        Sizes::lerp(hidden, revealed, progress)
    }
}

fn interpolate_fold(m: &FlapMeasurements, total: f64, state: &LayoutState) -> Sizes {
    let reveal = state.reveal_progress;
    if state.fold_progress <= 0.0 {
        interpolate_reveal(m, total, false, reveal)
    } else if state.fold_progress >= 1.0 {
        interpolate_reveal(m, total, true, reveal)
    } else {
        let unfolded = interpolate_reveal(m, total, false, reveal);
        let folded = interpolate_reveal(m, total, true, reveal);
        Sizes::lerp(unfolded, folded, state.fold_progress)
    }
}

/// Lays out the children in a container of `size`.
pub(crate) fn compute(m: &FlapMeasurements, size: Size, state: &LayoutState) -> FlapLayout {
    let (total, cross) = main_axis(size, state.orientation);
    let sizes = interpolate_fold(m, total, state);
    let rect = |pos: f64, extent: f64| match state.orientation {
        Orientation::Horizontal => Rect::new(pos, 0.0, pos + extent, cross),
        Orientation::Vertical => Rect::new(0.0, pos, cross, pos + extent),
    };

    if m.flap.is_none() {
        return FlapLayout {
            flap: rect(0.0, sizes.flap),
            separator: rect(0.0, sizes.separator),
            content: rect(0.0, sizes.content),
        };
    }

    let transition = state.transition;
    let reveal = state.reveal_progress;
    let distance = swipe_distance(sizes.flap, sizes.separator, state);

    let mut flap_pos = -(1.0 - reveal) * transition.flap_motion_factor() * distance;
    let mut content_pos;
    let mut separator_pos;
    if transition.is_content_above_flap() {
        content_pos = reveal * transition.content_motion_factor() * distance;
        separator_pos = flap_pos + sizes.flap;
    } else {
        content_pos = total - sizes.content
            + reveal * state.fold_progress * transition.content_motion_factor() * distance;
        separator_pos = content_pos - sizes.separator;
    }

    if state.position != leading_edge(state.orientation, state.direction) {
        flap_pos = total - flap_pos - sizes.flap;
        separator_pos = total - separator_pos - sizes.separator;
        content_pos = total - content_pos - sizes.content;
    }

    FlapLayout {
        flap: rect(flap_pos, sizes.flap),
        separator: rect(separator_pos, sizes.separator),
        content: rect(content_pos, sizes.content),
    }
}

// The position that sits on the left (or top) edge.
fn leading_edge(orientation: Orientation, direction: TextDirection) -> FlapPosition {
    if orientation == Orientation::Horizontal && direction == TextDirection::Rtl {
        FlapPosition::End
    } else {
        FlapPosition::Start
    }
}

/// Combined size request of the container.
///
/// Along the main axis the flap only adds to the minimum while it takes up
/// space beside the content; across it, the largest child wins.
pub(crate) fn measure(
    m: &FlapMeasurements,
    main_axis: bool,
    policy: FoldPolicy,
    locked: bool,
    state: &LayoutState,
) -> SizeRequest {
    let content = m.content.unwrap_or_default();
    let flap = m.flap.unwrap_or_default();
    let separator = m.separator;
    let expand = content.expand || flap.expand;

    if !main_axis {
        return SizeRequest {
            min: content.min.max(flap.min).max(separator),
            natural: content.natural.max(flap.natural).max(separator),
            expand,
        };
    }

    let (min_progress, nat_progress) = match policy {
        FoldPolicy::Never => ((1.0 - state.fold_progress) * state.reveal_progress, 1.0),
        FoldPolicy::Always => (0.0, 0.0),
        FoldPolicy::Auto => (0.0, if locked { state.reveal_progress } else { 1.0 }),
    };
    SizeRequest {
        min: (content.min + (flap.min + separator) * min_progress).max(flap.min),
        natural: (content.natural + (flap.natural + separator) * nat_progress).max(flap.natural),
        expand,
    }
}

/// Strip of the container a drag may start in, in container coordinates.
///
/// When only one layer moves and it is mostly off screen, drags are limited
/// to its visible part, widened to at least [`SWIPE_BORDER`].
pub(crate) fn swipe_area(
    layout: &FlapLayout,
    size: Size,
    is_drag: bool,
    state: &LayoutState,
) -> Rect {
    let full = size.to_rect();
    let flap_factor = state.transition.flap_motion_factor();
    let content_factor = state.transition.content_motion_factor();
    if !is_drag
        || (flap_factor >= 1.0 && content_factor >= 1.0)
        || (state.fold_progress < 1.0 && flap_factor > 0.0)
    {
        return full;
    }

    let moving = if state.transition.is_content_above_flap() {
        layout.content
    } else {
        layout.flap
    };
    match state.orientation {
        Orientation::Horizontal => {
            if moving.x0 <= 0.0 {
                Rect::new(0.0, moving.y0, moving.x1.max(SWIPE_BORDER), moving.y1)
            } else if moving.x1 >= size.width {
                let width = (size.width - moving.x0).max(SWIPE_BORDER);
                Rect::new(size.width - width, moving.y0, size.width, moving.y1)
            } else {
                full
            }
        }
        Orientation::Vertical => {
            if moving.y0 <= 0.0 {
                Rect::new(moving.x0, 0.0, moving.x1, moving.y1.max(SWIPE_BORDER))
            } else if moving.y1 >= size.height {
                let height = (size.height - moving.y0).max(SWIPE_BORDER);
                Rect::new(moving.x0, size.height - height, moving.x1, size.height)
            } else {
                full
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sidebar() -> FlapMeasurements {
        FlapMeasurements {
            flap: Some(SizeRequest {
                min: 100.0,
                natural: 100.0,
                expand: false,
            }),
            content: Some(SizeRequest {
                min: 200.0,
                natural: 300.0,
                expand: true,
            }),
            separator: 1.0,
        }
    }

    fn state(reveal: f64, fold: f64, transition: TransitionType) -> LayoutState {
        LayoutState {
            reveal_progress: reveal,
            fold_progress: fold,
            transition,
            position: FlapPosition::Start,
            orientation: Orientation::Horizontal,
            direction: TextDirection::Ltr,
        }
    }

    fn spans(layout: &FlapLayout) -> [(f64, f64); 3] {
        [
            (layout.flap.x0, layout.flap.x1),
            (layout.separator.x0, layout.separator.x1),
            (layout.content.x0, layout.content.x1),
        ]
    }

    const SIZE: Size = Size::new(400.0, 300.0);

    #[test]
    fn unfolded_revealed_sits_beside_content() {
        let layout = compute(&sidebar(), SIZE, &state(1.0, 0.0, TransitionType::Over));
        assert_eq!(spans(&layout), [(0.0, 100.0), (100.0, 101.0), (101.0, 400.0)]);
        assert_eq!(layout.content.height(), 300.0);
    }

    #[test]
    fn unfolded_hidden_flap_is_off_screen() {
        let layout = compute(&sidebar(), SIZE, &state(0.0, 0.0, TransitionType::Over));
        assert_eq!(spans(&layout), [(-101.0, -1.0), (-1.0, 0.0), (0.0, 400.0)]);
    }

    #[test]
    fn end_position_mirrors() {
        let mut s = state(1.0, 0.0, TransitionType::Over);
        s.position = FlapPosition::End;
        let layout = compute(&sidebar(), SIZE, &s);
        assert_eq!(spans(&layout), [(300.0, 400.0), (299.0, 300.0), (0.0, 299.0)]);
    }

    #[test]
    fn rtl_start_is_on_the_right() {
        let mut s = state(1.0, 0.0, TransitionType::Over);
        s.direction = TextDirection::Rtl;
        let layout = compute(&sidebar(), SIZE, &s);
        assert_eq!(layout.flap.x0, 300.0);
    }

    #[test]
    fn folded_over_covers_content() {
        let layout = compute(&sidebar(), SIZE, &state(1.0, 1.0, TransitionType::Over));
        assert_eq!(spans(&layout)[0], (0.0, 100.0));
        assert_eq!(spans(&layout)[2], (0.0, 400.0));
    }

    #[test]
    fn folded_slide_pushes_content() {
        let layout = compute(&sidebar(), SIZE, &state(1.0, 1.0, TransitionType::Slide));
        assert_eq!(spans(&layout), [(0.0, 100.0), (100.0, 101.0), (101.0, 501.0)]);
    }

    #[test]
    fn folded_under_moves_only_content() {
        let layout = compute(&sidebar(), SIZE, &state(0.5, 1.0, TransitionType::Under));
        assert_eq!(layout.flap.x0, 0.0);
        assert_eq!(layout.content.x0, 50.5);
    }

    #[test]
    fn vertical_uses_height() {
        let mut s = state(1.0, 0.0, TransitionType::Over);
        s.orientation = Orientation::Vertical;
        let layout = compute(&sidebar(), Size::new(300.0, 400.0), &s);
        assert_eq!((layout.flap.y0, layout.flap.y1), (0.0, 100.0));
        assert_eq!(layout.flap.width(), 300.0);
    }

    #[test]
    fn missing_flap_gives_content_everything() {
        let m = FlapMeasurements {
            flap: None,
            ..sidebar()
        };
        let layout = compute(&m, SIZE, &state(1.0, 0.0, TransitionType::Over));
        assert_eq!(layout.content.width(), 400.0);
        assert_eq!(layout.flap.width(), 0.0);
    }

    #[test]
    fn natural_sizes_are_shared_when_nothing_expands() {
        let m = FlapMeasurements {
            flap: Some(SizeRequest {
                min: 50.0,
                natural: 80.0,
                expand: false,
            }),
            content: Some(SizeRequest {
                min: 100.0,
                natural: 400.0,
                expand: false,
            }),
            separator: 0.0,
        };
        let sizes = compute_sizes(&m, 300.0, false, true);
        assert_eq!(sizes.flap, 80.0);
        assert_eq!(sizes.content, 220.0);
    }

    #[test]
    fn both_expanding_split_evenly() {
        let mut m = sidebar();
        if let Some(flap) = m.flap.as_mut() {
            flap.expand = true;
        }
        let sizes = compute_sizes(&m, 401.0, false, true);
        assert_eq!(sizes.flap, 200.0);
        assert_eq!(sizes.content, 200.0);
    }

    #[test]
    fn measure_main_axis_by_policy() {
        let m = sidebar();
        let s = state(1.0, 0.0, TransitionType::Over);
        let never = measure(&m, true, FoldPolicy::Never, false, &s);
        assert_eq!((never.min, never.natural), (301.0, 401.0));
        let always = measure(&m, true, FoldPolicy::Always, false, &s);
        assert_eq!((always.min, always.natural), (200.0, 300.0));
        let cross = measure(&m, false, FoldPolicy::Never, false, &s);
        assert_eq!((cross.min, cross.natural), (200.0, 300.0));
    }

    #[test]
    fn folded_hidden_flap_is_dragged_by_border_strip() {
        let s = state(0.0, 1.0, TransitionType::Over);
        let layout = compute(&sidebar(), SIZE, &s);
        assert_eq!(layout.flap.x1, 0.0);
        let area = swipe_area(&layout, SIZE, true, &s);
        assert_eq!(area, Rect::new(0.0, 0.0, SWIPE_BORDER, 300.0));
        assert_eq!(swipe_area(&layout, SIZE, false, &s), SIZE.to_rect());
    }

    #[test]
    fn unfolded_flap_can_be_dragged_anywhere() {
        let s = state(0.0, 0.0, TransitionType::Over);
        let layout = compute(&sidebar(), SIZE, &s);
        assert_eq!(swipe_area(&layout, SIZE, true, &s), SIZE.to_rect());
    }
}
