//! Pure geometry: where each panel goes on a display, and where the stripe, icon and label sit
//! inside it. Panel-local frames use the same bottom-left origin as screen frames.

use crate::platform::Bounds;

pub const OVERLAY_WIDTH: f64 = 500.0;
pub const OVERLAY_HEIGHT: f64 = 80.0;

/// Gap between the top of the usable region and the slot 0 panel.
pub const TOP_MARGIN: f64 = 40.0;
/// Vertical distance between consecutive slots.
pub const SLOT_SPACING: f64 = 90.0;

pub const STRIPE_WIDTH: f64 = 4.0;
pub const CONTENT_PADDING: f64 = 10.0;
pub const ICON_SIZE: f64 = 60.0;
pub const ICON_SPACING: f64 = 5.0;
pub const LABEL_PADDING: f64 = 4.0;

const LABEL_TRAILING_INSET: f64 = 20.0;

/// Places the overlay horizontally centered in `region`, `40 + slot * 90` below its top edge.
///
/// Large slots are not clamped and can land below the region.
pub fn overlay_geometry(region: &Bounds, slot: u32) -> Bounds {
    let y_offset = TOP_MARGIN + slot as f64 * SLOT_SPACING;
    let x = region.x() + (region.width() - OVERLAY_WIDTH) / 2.0;
    let y = region.y() + region.height() - OVERLAY_HEIGHT - y_offset;
    Bounds::new(x, y, OVERLAY_WIDTH, OVERLAY_HEIGHT)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentLayout {
    pub stripe: Bounds,
    pub icon: Option<Bounds>,
    pub label: Bounds,
    /// Left edge of the first content element after the stripe.
    pub content_start: f64,
}

pub fn content_layout(has_icon: bool, line_height: f64) -> ContentLayout {
    let stripe = Bounds::new(0.0, 0.0, STRIPE_WIDTH, OVERLAY_HEIGHT);
    let content_start = STRIPE_WIDTH + CONTENT_PADDING;

    let (icon, label_x, label_width) = if has_icon {
        let icon = Bounds::new(
            content_start,
            (OVERLAY_HEIGHT - ICON_SIZE) / 2.0,
            ICON_SIZE,
            ICON_SIZE,
        );
        let label_x = content_start + ICON_SIZE + ICON_SPACING;
        (
            Some(icon),
            label_x,
            OVERLAY_WIDTH - label_x - LABEL_TRAILING_INSET,
        )
    } else {
        (
            None,
            content_start,
            OVERLAY_WIDTH - STRIPE_WIDTH - CONTENT_PADDING - LABEL_TRAILING_INSET,
        )
    };

    let label_height = line_height + LABEL_PADDING;
    let label = Bounds::new(
        label_x,
        (OVERLAY_HEIGHT - label_height) / 2.0,
        label_width,
        label_height,
    );

    ContentLayout {
        stripe,
        icon,
        content_start,
        label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> Bounds {
        Bounds::new(0.0, 0.0, 1920.0, 1055.0)
    }

    #[test]
    fn test_slot_zero() {
        let geometry = overlay_geometry(&region(), 0);
        assert_eq!(geometry, Bounds::new(710.0, 935.0, 500.0, 80.0));
    }

    #[test]
    fn test_slots_stack_downward() {
        let regions = [
            region(),
            Bounds::new(-1440.0, 200.0, 1440.0, 875.0),
            Bounds::new(1920.0, -300.0, 2560.0, 1415.0),
        ];
        for region in &regions {
            for slot in 0..8 {
                let current = overlay_geometry(region, slot);
                let next = overlay_geometry(region, slot + 1);
                assert_eq!(next.y(), current.y() - 90.0);
                assert_eq!(next.x(), current.x());
                assert_eq!(next.size, current.size);
            }
        }
    }

    #[test]
    fn test_horizontally_centered() {
        let region = Bounds::new(-1280.0, 100.0, 1280.0, 775.0);
        let geometry = overlay_geometry(&region, 3);
        let left_gap = geometry.x() - region.x();
        let right_gap = region.max_x() - geometry.max_x();
        assert_eq!(left_gap, right_gap);
        assert_eq!(geometry.x(), -890.0);
    }

    #[test]
    fn test_odd_width_centers_on_half_point() {
        let geometry = overlay_geometry(&Bounds::new(0.0, 0.0, 1511.0, 944.0), 0);
        assert_eq!(geometry.x(), 505.5);
    }

    #[test]
    fn test_large_slot_not_clamped() {
        let region = Bounds::new(0.0, 0.0, 1440.0, 875.0);
        let geometry = overlay_geometry(&region, 20);
        assert!(geometry.y() < region.y());
        assert!(!region.contains(&geometry));
    }

    #[test]
    fn test_content_without_icon() {
        let layout = content_layout(false, 20.0);
        assert_eq!(layout.stripe, Bounds::new(0.0, 0.0, 4.0, 80.0));
        assert_eq!(layout.content_start, 14.0);
        assert!(layout.icon.is_none());
        assert_eq!(layout.label, Bounds::new(14.0, 28.0, 466.0, 24.0));
    }

    #[test]
    fn test_content_with_icon() {
        let layout = content_layout(true, 20.0);
        assert_eq!(layout.content_start, 14.0);
        assert_eq!(layout.icon, Some(Bounds::new(14.0, 10.0, 60.0, 60.0)));
        assert_eq!(layout.label, Bounds::new(79.0, 28.0, 401.0, 24.0));
    }

    #[test]
    fn test_label_fits_inside_panel() {
        let panel = Bounds::new(0.0, 0.0, OVERLAY_WIDTH, OVERLAY_HEIGHT);
        for has_icon in [false, true] {
            let layout = content_layout(has_icon, 19.5);
            assert!(panel.contains(&layout.label));
            assert!(!layout.stripe.intersects(&layout.label));
            if let Some(icon) = layout.icon {
                assert!(!icon.intersects(&layout.label));
                assert!(!icon.intersects(&layout.stripe));
            }
        }
    }
}
