use log::trace;
use std::time::Instant;
use winit::application::ApplicationHandler;
use winit::event::{StartCause, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::WindowId;

/// Keeps the event loop parked until `deadline`, then exits it.
pub(super) struct DismissTimer {
    deadline: Instant,
}

impl DismissTimer {
    pub(super) fn new(deadline: Instant) -> Self {
        Self { deadline }
    }
}

impl ApplicationHandler for DismissTimer {
    fn new_events(&mut self, event_loop: &ActiveEventLoop, cause: StartCause) {
        trace!("Event loop woke up: {:?}", cause);
        if Instant::now() >= self.deadline {
            event_loop.exit();
        }
    }

    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _id: WindowId,
        _event: WindowEvent,
    ) {
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.deadline));
    }
}
