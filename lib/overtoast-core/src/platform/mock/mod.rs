//! In-memory platform with a fake clock. Records every panel it is asked for instead of drawing
//! anything.

use crate::icon::{Icon, IconError};
use crate::platform::{
    Display, DisplayId, DisplayProvider, PanelFactory, PlatformError, PlatformResult, Timer,
};
use crate::renderer::{LabelFont, PanelSpec};
use std::collections::HashSet;
use std::path::Path;
use std::time::{Duration, Instant};

pub const DEFAULT_LINE_HEIGHT: f64 = 20.0;

pub struct MockPlatform {
    displays: Vec<Display>,
    enumeration_fails: bool,
    failing: HashSet<DisplayId>,
    line_height: f64,
    rejects_icons: bool,
    render_cost: Duration,
    attempts: usize,
    panels: Vec<PanelSpec>,
    started: Instant,
    now: Instant,
    waits: Vec<Instant>,
}

impl MockPlatform {
    pub fn new(displays: Vec<Display>) -> Self {
        let now = Instant::now();
        Self {
            displays,
            enumeration_fails: false,
            failing: HashSet::new(),
            line_height: DEFAULT_LINE_HEIGHT,
            rejects_icons: false,
            render_cost: Duration::ZERO,
            attempts: 0,
            panels: Vec::new(),
            started: now,
            now,
            waits: Vec::new(),
        }
    }

    /// Panel creation for `display` returns an error.
    pub fn fail_on(mut self, display: DisplayId) -> Self {
        self.failing.insert(display);
        self
    }

    /// Display enumeration returns an error, as if no window server were reachable.
    pub fn without_window_server(mut self) -> Self {
        self.enumeration_fails = true;
        self
    }

    pub fn with_line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }

    /// Icon loading fails even for images the `image` crate can decode, as if the host toolkit
    /// did not support the format.
    pub fn rejecting_icons(mut self) -> Self {
        self.rejects_icons = true;
        self
    }

    /// Advances the fake clock by `cost` for every panel attempt.
    pub fn with_render_cost(mut self, cost: Duration) -> Self {
        self.render_cost = cost;
        self
    }

    pub fn panels(&self) -> &[PanelSpec] {
        &self.panels
    }

    pub fn attempts(&self) -> usize {
        self.attempts
    }

    /// Deadlines passed to `run_until`, in call order.
    pub fn waits(&self) -> &[Instant] {
        &self.waits
    }

    /// Fake time elapsed since the platform was created.
    pub fn elapsed(&self) -> Duration {
        self.now - self.started
    }

    pub fn started(&self) -> Instant {
        self.started
    }
}

impl DisplayProvider for MockPlatform {
    fn list_displays(&self) -> PlatformResult<Vec<Display>> {
        if self.enumeration_fails {
            return Err(PlatformError::Display(
                "window server unavailable".to_string(),
            ));
        }
        Ok(self.displays.clone())
    }
}

impl PanelFactory for MockPlatform {
    fn line_height(&self, _font: &LabelFont) -> f64 {
        self.line_height
    }

    fn load_icon(&mut self, path: &Path) -> Result<Icon, IconError> {
        if self.rejects_icons {
            return Err(IconError::Rejected {
                path: path.to_path_buf(),
            });
        }
        Icon::decode(path)
    }

    fn create_panel(&mut self, spec: &PanelSpec) -> PlatformResult<()> {
        self.attempts += 1;
        self.now += self.render_cost;

        if self.failing.contains(&spec.display_id) {
            return Err(PlatformError::Panel(format!(
                "could not create window on display {}",
                spec.display_id
            )));
        }

        self.panels.push(spec.clone());
        Ok(())
    }
}

impl Timer for MockPlatform {
    fn now(&self) -> Instant {
        self.now
    }

    fn run_until(&mut self, deadline: Instant) -> PlatformResult<()> {
        self.waits.push(deadline);
        self.now = self.now.max(deadline);
        Ok(())
    }
}
