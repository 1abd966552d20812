// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Measuring pages and placing them along the main axis.

use alloc::vec::Vec;

use kurbo::{Rect, Size};
use understory_swipe::{Orientation, TextDirection};

use crate::registry::ChildRegistry;

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

/// Measures children on behalf of a carousel.
///
/// Implemented for any `FnMut(&H, Orientation, f64) -> SizeRequest`.
pub trait Measure<H> {
    /// Measures `child` along `orientation`, given `for_size` on the other axis.
    fn measure(&mut self, child: &H, orientation: Orientation, for_size: f64) -> SizeRequest;
}

impl<H, F> Measure<H> for F
where
    F: FnMut(&H, Orientation, f64) -> SizeRequest,
{
    fn measure(&mut self, child: &H, orientation: Orientation, for_size: f64) -> SizeRequest {
        self(child, orientation, for_size)
    }
}

/// Where a page goes, in carousel coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChildPlacement<H> {
    /// The page.
    pub handle: H,
    /// Allocated rectangle; may lie partly or fully outside the carousel.
    pub rect: Rect,
    /// Whether `rect` overlaps the carousel along the main axis.
    pub visible: bool,
}

fn main_axis(size: Size, orientation: Orientation) -> (f64, f64) {
    match orientation {
        Orientation::Horizontal => (size.width, size.height),
        Orientation::Vertical => (size.height, size.width),
    }
}

/// Combined request of all live pages: the largest of each.
pub(crate) fn measure_pages<H, M: Measure<H> + ?Sized>(
    registry: &ChildRegistry<H>,
    orientation: Orientation,
    for_size: f64,
    measure: &mut M,
) -> SizeRequest {
    let mut total = SizeRequest::default();
    for record in registry.records().iter().filter(|r| !r.removing) {
        let req = measure.measure(record.handle(), orientation, for_size);
        total.min = total.min.max(req.min);
        total.natural = total.natural.max(req.natural);
        total.expand |= req.expand;
    }
    total
}

/// Main-axis size shared by all pages when allocated `size`.
pub(crate) fn page_extent<H, M: Measure<H> + ?Sized>(
    registry: &ChildRegistry<H>,
    orientation: Orientation,
    size: Size,
    measure: &mut M,
) -> f64 {
    let (extent, cross) = main_axis(size, orientation);
    let mut page = 0.0_f64;
    for record in registry.records().iter().filter(|r| !r.removing) {
        let req = measure.measure(record.handle(), orientation, cross);
        let wanted = if req.expand { extent } else { req.natural };
        page = page.max(req.min.max(wanted));
    }
    page
}

/// Places live pages for `position`.
///
/// The page at `position` is centred; every record, removing ones included,
/// advances the next page by `distance` times its reveal size.
pub(crate) fn place<H: Copy>(
    registry: &ChildRegistry<H>,
    orientation: Orientation,
    direction: TextDirection,
    size: Size,
    page: f64,
    distance: f64,
    position: f64,
) -> Vec<ChildPlacement<H>> {
    let (extent, _) = main_axis(size, orientation);
    let rtl = orientation == Orientation::Horizontal && direction == TextDirection::Rtl;
    let centering = (extent - page) / 2.0;
    let mut cursor = if rtl {
        distance * position + centering
    } else {
        centering - distance * position
    };

    let mut placements = Vec::with_capacity(registry.count(false));
    for record in registry.records() {
        if !record.removing {
            let rect = match orientation {
                Orientation::Horizontal => Rect::new(cursor, 0.0, cursor + page, size.height),
                Orientation::Vertical => Rect::new(0.0, cursor, size.width, cursor + page),
            };
            placements.push(ChildPlacement {
                handle: *record.handle(),
                rect,
                visible: cursor < extent && cursor + page > 0.0,
            });
        }
        let advance = distance * record.size;
        if rtl {
            cursor -= advance;
        } else {
            cursor += advance;
        }
    }
    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(sizes: &[f64]) -> ChildRegistry<usize> {
        let mut reg = ChildRegistry::default();
        for h in 0..sizes.len() {
            reg.insert(h, usize::MAX);
        }
        for (record, size) in reg.records_mut().iter_mut().zip(sizes) {
            record.size = *size;
            record.adding = false;
        }
        reg.recompute_snap_points();
        reg
    }

    #[test]
    fn page_extent_takes_largest_request() {
        let reg = registry(&[1.0, 1.0]);
        let mut measure = |h: &usize, _: Orientation, _: f64| SizeRequest {
            min: 10.0,
            natural: if *h == 0 { 40.0 } else { 60.0 },
            expand: false,
        };
        let page = page_extent(&reg, Orientation::Horizontal, Size::new(200.0, 50.0), &mut measure);
        assert_eq!(page, 60.0);
    }

    #[test]
    fn expanding_page_fills_extent() {
        let reg = registry(&[1.0]);
        let mut measure = |_: &usize, _: Orientation, _: f64| SizeRequest {
            min: 0.0,
            natural: 20.0,
            expand: true,
        };
        let page = page_extent(&reg, Orientation::Vertical, Size::new(50.0, 300.0), &mut measure);
        assert_eq!(page, 300.0);
    }

    #[test]
    fn measure_pages_skips_removing() {
        let mut reg = registry(&[1.0, 1.0]);
        reg.records_mut()[1].removing = true;
        let mut measure = |h: &usize, _: Orientation, _: f64| SizeRequest {
            min: 1.0,
            natural: if *h == 0 { 5.0 } else { 500.0 },
            expand: false,
        };
        let req = measure_pages(&reg, Orientation::Horizontal, -1.0, &mut measure);
        assert_eq!(req.natural, 5.0);
        assert_eq!(req.min, 1.0);
    }

    #[test]
    fn ltr_places_current_page_at_origin() {
        let reg = registry(&[1.0, 1.0, 1.0]);
        let size = Size::new(100.0, 40.0);
        let out = place(&reg, Orientation::Horizontal, TextDirection::Ltr, size, 100.0, 100.0, 1.0);
        let xs: Vec<f64> = out.iter().map(|p| p.rect.x0).collect();
        assert_eq!(xs, [-100.0, 0.0, 100.0]);
        assert_eq!(out.iter().filter(|p| p.visible).count(), 1);
        assert_eq!(out[1].rect.height(), 40.0);
    }

    #[test]
    fn rtl_mirrors_horizontal_order() {
        let reg = registry(&[1.0, 1.0, 1.0]);
        let size = Size::new(100.0, 40.0);
        let out = place(&reg, Orientation::Horizontal, TextDirection::Rtl, size, 100.0, 100.0, 1.0);
        let xs: Vec<f64> = out.iter().map(|p| p.rect.x0).collect();
        assert_eq!(xs, [100.0, 0.0, -100.0]);
    }

    #[test]
    fn vertical_ignores_text_direction() {
        let reg = registry(&[1.0, 1.0]);
        let size = Size::new(40.0, 100.0);
        let out = place(&reg, Orientation::Vertical, TextDirection::Rtl, size, 100.0, 100.0, 0.5);
        let ys: Vec<f64> = out.iter().map(|p| p.rect.y0).collect();
        assert_eq!(ys, [-50.0, 50.0]);
        assert!(out.iter().all(|p| p.visible));
        assert_eq!(out[0].rect.width(), 40.0);
    }

    #[test]
    fn smaller_pages_are_centred_and_spaced() {
        let reg = registry(&[1.0, 1.0]);
        let size = Size::new(100.0, 10.0);
        // 60px pages with 10px spacing.
        let out = place(&reg, Orientation::Horizontal, TextDirection::Ltr, size, 60.0, 70.0, 0.0);
        assert_eq!(out[0].rect.x0, 20.0);
        assert_eq!(out[1].rect.x0, 90.0);
    }

    #[test]
    fn removing_pages_are_skipped_but_take_space() {
        let mut reg = registry(&[1.0, 0.5, 1.0]);
        reg.records_mut()[1].removing = true;
        let size = Size::new(100.0, 10.0);
        let out = place(&reg, Orientation::Horizontal, TextDirection::Ltr, size, 100.0, 100.0, 0.0);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].handle, 0);
        assert_eq!(out[1].handle, 2);
        assert_eq!(out[1].rect.x0, 150.0);
    }
}
