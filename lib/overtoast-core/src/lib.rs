use crate::lifecycle::{Lifecycle, LifecycleError};
use crate::platform::{PlatformError, ToastPlatform};
use crate::renderer::RenderReport;
use log::{debug, info};
use thiserror::Error;

pub mod icon;
pub mod layout;
pub mod lifecycle;
pub mod palette;
pub mod platform;
pub mod renderer;
pub mod request;

pub use request::{Category, NotificationRequest, RawArgs};

pub fn version() -> &'static str {
    option_env!("VERSION").unwrap_or("v0.0.0-dev")
}

#[derive(Debug, Error)]
pub enum OvertoastError {
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

pub type OvertoastResult<T> = Result<T, OvertoastError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub displays: usize,
    pub render: RenderReport,
}

/// Shows `request` on every display of `platform` and blocks until it is dismissed.
///
/// Only a platform that cannot enumerate displays or run its event loop is an error. Individual
/// panels that fail to appear are logged and counted in the report.
pub fn run<P: ToastPlatform + ?Sized>(
    platform: &mut P,
    request: &NotificationRequest,
) -> OvertoastResult<RunReport> {
    let mut lifecycle = Lifecycle::new(request.dismiss_seconds);
    lifecycle.begin_render()?;

    let displays = platform.list_displays()?;
    debug!("Found {} display(s)", displays.len());

    let render = renderer::render_panels(&displays, request, &mut *platform);
    info!(
        "Showing {:?} toast on {}/{} display(s) for {:?}",
        request.category,
        render.created,
        displays.len(),
        lifecycle.dismiss()
    );

    lifecycle::run_until(&mut *platform, &mut lifecycle)?;

    Ok(RunReport {
        displays: displays.len(),
        render,
    })
}
