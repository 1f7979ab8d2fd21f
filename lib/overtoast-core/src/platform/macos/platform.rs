use crate::platform::macos::event_loop::DismissTimer;
use crate::platform::{Bounds, Display, DisplayProvider, PlatformError, PlatformResult, Timer};
use objc2::rc::Retained;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSDeviceDescriptionKey, NSImage, NSScreen, NSWindow};
use objc2_core_foundation::{CGPoint, CGRect, CGSize};
use objc2_foundation::{NSNumber, NSRect};
use std::time::Instant;
use winit::event_loop::EventLoop;
use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};
use winit::platform::run_on_demand::EventLoopExtRunOnDemand;

/// The AppKit host. Owns the application's event loop and every panel created through it, so
/// dropping it (or exiting the process) tears all panels down together.
pub struct MacOSPlatform {
    pub(super) mtm: MainThreadMarker,
    event_loop: EventLoop<()>,
    pub(super) panels: Vec<Retained<NSWindow>>,
    pub(super) icon: Option<Retained<NSImage>>,
}

impl MacOSPlatform {
    /// Must be called on the main thread. The process runs as an accessory app: no dock icon, no
    /// menu bar, and it never becomes the active application.
    pub fn new() -> PlatformResult<Self> {
        let mtm = MainThreadMarker::new().ok_or(PlatformError::NotMainThread)?;

        let event_loop = EventLoop::builder()
            .with_activation_policy(ActivationPolicy::Accessory)
            .with_default_menu(false)
            .build()
            .map_err(|e| PlatformError::EventLoop(e.to_string()))?;

        Ok(Self {
            mtm,
            event_loop,
            panels: Vec::new(),
            icon: None,
        })
    }
}

impl DisplayProvider for MacOSPlatform {
    fn list_displays(&self) -> PlatformResult<Vec<Display>> {
        let screens = NSScreen::screens(self.mtm);
        let mut displays = Vec::with_capacity(screens.count());

        for (index, screen) in screens.iter().enumerate() {
            let id = screen_number(&screen).unwrap_or(index as u32);
            unsafe {
                displays.push(Display {
                    id,
                    name: screen.localizedName().to_string(),
                    bounds: screen.frame().into(),
                    work_area: screen.visibleFrame().into(),
                });
            }
        }

        Ok(displays)
    }
}

impl Timer for MacOSPlatform {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn run_until(&mut self, deadline: Instant) -> PlatformResult<()> {
        let mut timer = DismissTimer::new(deadline);
        self.event_loop
            .run_app_on_demand(&mut timer)
            .map_err(|e| PlatformError::EventLoop(e.to_string()))
    }
}

fn screen_number(screen: &NSScreen) -> Option<u32> {
    unsafe {
        let desc = screen.deviceDescription();
        let key = NSDeviceDescriptionKey::from_str("NSScreenNumber");
        let obj = desc.objectForKey(&key)?;
        let number = Retained::cast_unchecked::<NSNumber>(obj);
        Some(number.unsignedIntegerValue() as u32)
    }
}

pub(super) fn ns_rect(bounds: &Bounds) -> NSRect {
    CGRect::new(
        CGPoint::new(bounds.x(), bounds.y()),
        CGSize::new(bounds.width(), bounds.height()),
    )
}

impl From<NSRect> for Bounds {
    fn from(value: NSRect) -> Self {
        Bounds::new(
            value.origin.x,
            value.origin.y,
            value.size.width,
            value.size.height,
        )
    }
}
