use crate::icon::{Icon, IconError};
use crate::platform::{Display, PlatformResult};
use crate::renderer::{LabelFont, PanelSpec};
use std::path::Path;
use std::time::Instant;

pub trait DisplayProvider {
    /// Returns the usable region of every active display, in whatever order the host reports
    /// them. An empty list is valid.
    fn list_displays(&self) -> PlatformResult<Vec<Display>>;
}

pub trait PanelFactory {
    /// Height of one line of text set in `font`, taken from the host's font metrics
    /// (ascender - descender + leading).
    fn line_height(&self, font: &LabelFont) -> f64;

    /// Decodes `path` with the host's own image loader. An icon returned here is one the factory
    /// can draw in every panel it creates afterwards.
    fn load_icon(&mut self, path: &Path) -> Result<Icon, IconError>;

    /// Creates and shows one panel. The panel must stay on screen until the process exits; the
    /// factory keeps whatever handle is needed for that.
    fn create_panel(&mut self, spec: &PanelSpec) -> PlatformResult<()>;
}

pub trait Timer {
    fn now(&self) -> Instant;

    /// Dispatches host events and blocks until `deadline` has passed. A deadline that is already
    /// in the past returns on the next tick of the host loop.
    fn run_until(&mut self, deadline: Instant) -> PlatformResult<()>;
}

/// Everything the pipeline needs from the host.
pub trait ToastPlatform: DisplayProvider + PanelFactory + Timer {}

impl<T> ToastPlatform for T where T: DisplayProvider + PanelFactory + Timer {}
