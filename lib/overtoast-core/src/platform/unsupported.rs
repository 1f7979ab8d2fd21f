use crate::icon::{Icon, IconError};
use crate::platform::{Display, DisplayProvider, PanelFactory, PlatformError, PlatformResult, Timer};
use crate::renderer::{LabelFont, PanelSpec};
use std::path::Path;
use std::time::Instant;

/// Stand-in for hosts without a native backend. It cannot be constructed, so running on such a
/// host fails up front instead of silently showing nothing.
pub struct UnsupportedPlatform {
    _private: (),
}

impl UnsupportedPlatform {
    pub fn new() -> PlatformResult<Self> {
        Err(PlatformError::Unsupported)
    }
}

impl DisplayProvider for UnsupportedPlatform {
    fn list_displays(&self) -> PlatformResult<Vec<Display>> {
        Err(PlatformError::Unsupported)
    }
}

impl PanelFactory for UnsupportedPlatform {
    fn line_height(&self, font: &LabelFont) -> f64 {
        font.size
    }

    fn load_icon(&mut self, path: &Path) -> Result<Icon, IconError> {
        Err(IconError::Rejected {
            path: path.to_path_buf(),
        })
    }

    fn create_panel(&mut self, _spec: &PanelSpec) -> PlatformResult<()> {
        Err(PlatformError::Unsupported)
    }
}

impl Timer for UnsupportedPlatform {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn run_until(&mut self, _deadline: Instant) -> PlatformResult<()> {
        Err(PlatformError::Unsupported)
    }
}
