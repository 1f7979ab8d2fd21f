use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no windowing backend is available on this platform")]
    Unsupported,
    #[error("the platform must be driven from the main thread")]
    NotMainThread,
    #[error("event loop error: {0}")]
    EventLoop(String),
    #[error("display enumeration failed: {0}")]
    Display(String),
    #[error("panel creation failed: {0}")]
    Panel(String),
}

pub type PlatformResult<T> = Result<T, PlatformError>;

pub type DisplayId = u32;

/// A rectangle in screen coordinates. The origin is the bottom-left corner and `y` grows upward,
/// which is how AppKit reports screen frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Bounds {
    pub position: Position,
    pub size: Size,
}

impl Bounds {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn max_x(&self) -> f64 {
        self.position.x + self.size.width
    }

    pub fn max_y(&self) -> f64 {
        self.position.y + self.size.height
    }

    pub fn contains(&self, other: &Bounds) -> bool {
        other.x() >= self.x()
            && other.y() >= self.y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        self.x() < other.max_x()
            && self.max_x() > other.x()
            && self.y() < other.max_y()
            && self.max_y() > other.y()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A connected display. `work_area` excludes the menu bar, dock and other reserved chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    pub id: DisplayId,
    pub name: String,
    pub bounds: Bounds,
    pub work_area: Bounds,
}
