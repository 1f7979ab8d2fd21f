use crate::icon::{Icon, IconError};
use crate::palette::Rgba;
use crate::platform::macos::platform::ns_rect;
use crate::platform::macos::MacOSPlatform;
use crate::platform::{PanelFactory, PlatformError, PlatformResult, Size};
use crate::renderer::{IconSpec, LabelFont, LabelSpec, PanelSpec, StripeSpec};
use objc2::rc::Retained;
use objc2::{AnyThread, MainThreadMarker, MainThreadOnly};
use objc2_app_kit::{
    NSBackingStoreType, NSBox, NSBoxType, NSColor, NSFont, NSImage, NSImageScaling, NSImageView,
    NSLineBreakMode, NSTextAlignment, NSTextField, NSTitlePosition, NSWindow,
    NSWindowCollectionBehavior, NSWindowLevel, NSWindowStyleMask,
};
use objc2_foundation::NSString;
use std::path::Path;

/// kCGStatusWindowLevel: above normal windows, the dock and the menu bar.
const STATUS_WINDOW_LEVEL: NSWindowLevel = 25;

impl PanelFactory for MacOSPlatform {
    fn line_height(&self, font: &LabelFont) -> f64 {
        let font = system_font(font);
        font.ascender() - font.descender() + font.leading()
    }

    fn load_icon(&mut self, path: &Path) -> Result<Icon, IconError> {
        let rejected = || IconError::Rejected {
            path: path.to_path_buf(),
        };
        let file = path.to_str().ok_or_else(rejected)?;

        unsafe {
            let file = NSString::from_str(file);
            let image = NSImage::initWithContentsOfFile(NSImage::alloc(), &file)
                .ok_or_else(rejected)?;
            if !image.isValid() {
                return Err(rejected());
            }

            let size = image.size();
            self.icon = Some(image);
            Ok(Icon::new(path, Size::new(size.width, size.height)))
        }
    }

    fn create_panel(&mut self, spec: &PanelSpec) -> PlatformResult<()> {
        let window = make_window(self.mtm, spec, self.icon.as_deref())?;
        self.panels.push(window);
        Ok(())
    }
}

fn make_window(
    mtm: MainThreadMarker,
    spec: &PanelSpec,
    image: Option<&NSImage>,
) -> PlatformResult<Retained<NSWindow>> {
    unsafe {
        let window = NSWindow::initWithContentRect_styleMask_backing_defer(
            NSWindow::alloc(mtm),
            ns_rect(&spec.frame),
            NSWindowStyleMask::Borderless,
            NSBackingStoreType::Buffered,
            false,
        );
        window.setReleasedWhenClosed(false);
        window.setOpaque(false);
        window.setHasShadow(false);
        window.setBackgroundColor(Some(&NSColor::clearColor()));
        window.setAlphaValue(spec.opacity);
        window.setLevel(STATUS_WINDOW_LEVEL);
        window.setIgnoresMouseEvents(true);
        window.setCollectionBehavior(
            NSWindowCollectionBehavior::CanJoinAllSpaces | NSWindowCollectionBehavior::Stationary,
        );

        let content_view = window
            .contentView()
            .ok_or_else(|| PlatformError::Panel("window has no content view".to_string()))?;
        content_view.setWantsLayer(true);

        // The rounded fill lives on the layer; the window itself stays clear so the corners
        // are actually cut.
        let layer = content_view
            .layer()
            .ok_or_else(|| PlatformError::Panel("content view is not layer-backed".to_string()))?;
        layer.setCornerRadius(spec.corner_radius);
        layer.setMasksToBounds(true);
        layer.setBackgroundColor(Some(&ns_color(spec.background).CGColor()));

        content_view.addSubview(&make_stripe(mtm, &spec.stripe));

        if let Some(icon) = &spec.icon {
            let image = image.ok_or_else(|| {
                PlatformError::Panel("icon was not loaded through this platform".to_string())
            })?;
            content_view.addSubview(&make_icon_view(mtm, icon, image));
        }

        content_view.addSubview(&make_label(mtm, &spec.label));

        // Shows the panel without activating the app or taking key focus.
        window.orderFrontRegardless();

        Ok(window)
    }
}

fn make_stripe(mtm: MainThreadMarker, stripe: &StripeSpec) -> Retained<NSBox> {
    unsafe {
        let view = NSBox::initWithFrame(NSBox::alloc(mtm), ns_rect(&stripe.frame));
        view.setBoxType(NSBoxType::Custom);
        view.setFillColor(&ns_color(stripe.color));
        view.setBorderWidth(0.0);
        view.setTitlePosition(NSTitlePosition::NoTitle);
        view
    }
}

fn make_icon_view(
    mtm: MainThreadMarker,
    icon: &IconSpec,
    image: &NSImage,
) -> Retained<NSImageView> {
    unsafe {
        let view = NSImageView::initWithFrame(NSImageView::alloc(mtm), ns_rect(&icon.frame));
        view.setImage(Some(image));
        view.setImageScaling(NSImageScaling::ScaleProportionallyUpOrDown);
        view
    }
}

fn make_label(mtm: MainThreadMarker, label: &LabelSpec) -> Retained<NSTextField> {
    unsafe {
        let field = NSTextField::initWithFrame(NSTextField::alloc(mtm), ns_rect(&label.frame));
        field.setStringValue(&NSString::from_str(&label.text));
        field.setBezeled(false);
        field.setDrawsBackground(false);
        field.setEditable(false);
        field.setSelectable(false);
        field.setTextColor(Some(&ns_color(label.color)));
        field.setAlignment(NSTextAlignment::Center);
        field.setFont(Some(&system_font(&label.font)));
        field.setLineBreakMode(NSLineBreakMode::ByTruncatingTail);
        if let Some(cell) = field.cell() {
            cell.setWraps(false);
        }
        field
    }
}

fn system_font(font: &LabelFont) -> Retained<NSFont> {
    if font.bold {
        NSFont::boldSystemFontOfSize(font.size)
    } else {
        NSFont::systemFontOfSize(font.size)
    }
}

fn ns_color(color: Rgba) -> Retained<NSColor> {
    let (r, g, b, a) = color.components();
    NSColor::colorWithSRGBRed_green_blue_alpha(r, g, b, a)
}
