pub use platform::*;

mod event_loop;
mod panel;
mod platform;
