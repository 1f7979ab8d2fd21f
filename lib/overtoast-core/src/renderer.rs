//! Turns a request into one [`PanelSpec`] per display and hands them to the platform.
//!
//! Panels never receive pointer events. Raising the window that triggered a toast when it is
//! clicked would need accessibility permission and per-window targeting; if that is ever added,
//! it belongs in `PanelFactory::create_panel`, not in the geometry here.

use crate::icon::Icon;
use crate::layout::{content_layout, overlay_geometry, ContentLayout};
use crate::palette::{color_pair, ColorPair, Rgba, TEXT};
use crate::platform::{Bounds, Display, DisplayId, PanelFactory};
use crate::request::NotificationRequest;
use log::{debug, warn};
use std::path::Path;
use std::rc::Rc;

pub const CORNER_RADIUS: f64 = 8.0;
pub const PANEL_OPACITY: f64 = 0.95;

#[derive(Debug, Clone, PartialEq)]
pub struct LabelFont {
    pub size: f64,
    pub bold: bool,
}

pub const LABEL_FONT: LabelFont = LabelFont {
    size: 16.0,
    bold: true,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StripeSpec {
    pub frame: Bounds,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IconSpec {
    pub frame: Bounds,
    pub image: Rc<Icon>,
}

/// A single-line, centered, tail-truncated label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub frame: Bounds,
    pub text: String,
    pub font: LabelFont,
    pub color: Rgba,
}

/// Everything needed to build one panel. `frame` is in screen coordinates; the stripe, icon and
/// label frames are relative to the panel's bottom-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub display_id: DisplayId,
    pub frame: Bounds,
    pub corner_radius: f64,
    pub opacity: f64,
    pub background: Rgba,
    pub stripe: StripeSpec,
    pub icon: Option<IconSpec>,
    pub label: LabelSpec,
}

impl PanelSpec {
    pub fn new(
        display: &Display,
        request: &NotificationRequest,
        colors: &ColorPair,
        content: &ContentLayout,
        icon: Option<&Rc<Icon>>,
    ) -> Self {
        Self {
            display_id: display.id,
            frame: overlay_geometry(&display.work_area, request.slot),
            corner_radius: CORNER_RADIUS,
            opacity: PANEL_OPACITY,
            background: colors.background,
            stripe: StripeSpec {
                frame: content.stripe.clone(),
                color: colors.accent,
            },
            icon: match (&content.icon, icon) {
                (Some(frame), Some(image)) => Some(IconSpec {
                    frame: frame.clone(),
                    image: image.clone(),
                }),
                _ => None,
            },
            label: LabelSpec {
                frame: content.label.clone(),
                text: request.message.clone(),
                font: LABEL_FONT,
                color: TEXT,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub attempted: usize,
    pub created: usize,
    pub failed: usize,
}

/// Asks the host to decode the icon once. Missing, unreadable or undecodable icons are dropped
/// silently, and every panel is then laid out as if no icon had been given.
pub fn load_icon<F: PanelFactory + ?Sized>(factory: &mut F, path: Option<&Path>) -> Option<Icon> {
    let path = path.filter(|p| !p.as_os_str().is_empty())?;
    match factory.load_icon(path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            debug!("Omitting icon: {}", e);
            None
        }
    }
}

/// Attempts one panel per display. A display whose panel cannot be created is skipped; the rest
/// are still attempted.
pub fn render_panels<F: PanelFactory + ?Sized>(
    displays: &[Display],
    request: &NotificationRequest,
    factory: &mut F,
) -> RenderReport {
    let colors = color_pair(request.category);
    let icon = load_icon(factory, request.icon_path.as_deref()).map(Rc::new);
    let line_height = factory.line_height(&LABEL_FONT);
    let content = content_layout(icon.is_some(), line_height);

    let mut report = RenderReport::default();
    for display in displays {
        report.attempted += 1;
        let spec = PanelSpec::new(display, request, &colors, &content, icon.as_ref());
        match factory.create_panel(&spec) {
            Ok(()) => report.created += 1,
            Err(e) => {
                warn!("Skipping display {} ({}): {}", display.id, display.name, e);
                report.failed += 1;
            }
        }
    }

    report
}
