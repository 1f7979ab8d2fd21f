use crate::platform::{PlatformError, Timer};
use log::debug;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Idle,
    Rendering,
    Running { deadline: Instant },
    Terminating,
}

impl LifecycleState {
    pub fn name(&self) -> &'static str {
        match self {
            LifecycleState::Idle => "idle",
            LifecycleState::Rendering => "rendering",
            LifecycleState::Running { .. } => "running",
            LifecycleState::Terminating => "terminating",
        }
    }
}

impl Display for LifecycleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

/// Upper bound on a single toast's lifetime, so the deadline always fits in an `Instant`.
pub const MAX_DISMISS: Duration = Duration::from_secs(u32::MAX as u64);

/// Converts the requested lifetime into a timer duration. Zero, negative and non-finite values
/// dismiss on the next tick.
pub fn dismiss_duration(seconds: f64) -> Duration {
    if seconds.is_finite() && seconds > 0.0 {
        Duration::try_from_secs_f64(seconds)
            .unwrap_or(MAX_DISMISS)
            .min(MAX_DISMISS)
    } else {
        Duration::ZERO
    }
}

/// Tracks one toast from first render to termination. There is exactly one way out of
/// `Running`: the deadline passing.
#[derive(Debug)]
pub struct Lifecycle {
    state: LifecycleState,
    dismiss: Duration,
}

impl Lifecycle {
    pub fn new(dismiss_seconds: f64) -> Self {
        Self {
            state: LifecycleState::Idle,
            dismiss: dismiss_duration(dismiss_seconds),
        }
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn dismiss(&self) -> Duration {
        self.dismiss
    }

    pub fn deadline(&self) -> Option<Instant> {
        match self.state {
            LifecycleState::Running { deadline } => Some(deadline),
            _ => None,
        }
    }

    pub fn begin_render(&mut self) -> Result<(), LifecycleError> {
        match self.state {
            LifecycleState::Idle => {
                self.state = LifecycleState::Rendering;
                Ok(())
            }
            other => Err(invalid(other, "rendering")),
        }
    }

    /// Arms the dismiss timer. `now` should be taken after the last panel was created, so the
    /// visible lifetime does not depend on how long rendering took.
    pub fn arm(&mut self, now: Instant) -> Result<Instant, LifecycleError> {
        match self.state {
            LifecycleState::Rendering => {
                let deadline = now.checked_add(self.dismiss).unwrap_or(now);
                self.state = LifecycleState::Running { deadline };
                Ok(deadline)
            }
            other => Err(invalid(other, "running")),
        }
    }

    /// Returns true once the lifecycle has reached `Terminating`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.state {
            LifecycleState::Running { deadline } if now >= deadline => {
                self.state = LifecycleState::Terminating;
                true
            }
            LifecycleState::Terminating => true,
            _ => false,
        }
    }
}

fn invalid(from: LifecycleState, to: &'static str) -> LifecycleError {
    LifecycleError::InvalidTransition {
        from: from.name(),
        to,
    }
}

/// Arms the timer and blocks in the host loop until the deadline passes. On return the
/// lifecycle is `Terminating` and the caller is expected to exit.
pub fn run_until<T: Timer + ?Sized>(
    timer: &mut T,
    lifecycle: &mut Lifecycle,
) -> Result<(), LifecycleError> {
    let deadline = lifecycle.arm(timer.now())?;
    debug!("Dismissing in {:?}", lifecycle.dismiss());

    // The host loop always gets at least one tick, so panels are drawn even with a zero
    // lifetime. It may also wake early; keep waiting until the deadline has really passed.
    loop {
        timer.run_until(deadline)?;
        if lifecycle.poll(timer.now()) {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformResult;

    struct FakeTimer {
        now: Instant,
        waits: Vec<Instant>,
        step: Option<Duration>,
    }

    impl FakeTimer {
        fn new() -> Self {
            Self {
                now: Instant::now(),
                waits: Vec::new(),
                step: None,
            }
        }
    }

    impl Timer for FakeTimer {
        fn now(&self) -> Instant {
            self.now
        }

        fn run_until(&mut self, deadline: Instant) -> PlatformResult<()> {
            self.waits.push(deadline);
            self.now = match self.step {
                Some(step) => self.now + step,
                None => self.now.max(deadline),
            };
            Ok(())
        }
    }

    #[test]
    fn test_dismiss_duration() {
        assert_eq!(dismiss_duration(4.0), Duration::from_secs(4));
        assert_eq!(dismiss_duration(0.25), Duration::from_millis(250));
        assert_eq!(dismiss_duration(0.0), Duration::ZERO);
        assert_eq!(dismiss_duration(-3.0), Duration::ZERO);
        assert_eq!(dismiss_duration(f64::NAN), Duration::ZERO);
        assert_eq!(dismiss_duration(1e300), MAX_DISMISS);
    }

    #[test]
    fn test_state_machine() {
        let start = Instant::now();
        let mut lifecycle = Lifecycle::new(2.0);
        assert_eq!(lifecycle.state(), LifecycleState::Idle);

        lifecycle.begin_render().unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Rendering);
        assert!(lifecycle.deadline().is_none());

        let deadline = lifecycle.arm(start).unwrap();
        assert_eq!(deadline, start + Duration::from_secs(2));
        assert_eq!(lifecycle.deadline(), Some(deadline));

        assert!(!lifecycle.poll(start + Duration::from_millis(1999)));
        assert!(lifecycle.poll(deadline));
        assert_eq!(lifecycle.state(), LifecycleState::Terminating);
        assert!(lifecycle.poll(start));
    }

    #[test]
    fn test_no_rearm() {
        let now = Instant::now();
        let mut lifecycle = Lifecycle::new(1.0);
        assert!(lifecycle.arm(now).is_err());

        lifecycle.begin_render().unwrap();
        lifecycle.arm(now).unwrap();
        assert!(matches!(
            lifecycle.arm(now),
            Err(LifecycleError::InvalidTransition {
                from: "running",
                to: "running"
            })
        ));
        assert!(lifecycle.begin_render().is_err());
    }

    #[test]
    fn test_run_until_waits_for_dismiss() {
        let mut timer = FakeTimer::new();
        let start = timer.now;
        let mut lifecycle = Lifecycle::new(4.0);
        lifecycle.begin_render().unwrap();

        run_until(&mut timer, &mut lifecycle).unwrap();

        assert_eq!(timer.waits, vec![start + Duration::from_secs(4)]);
        assert_eq!(timer.now, start + Duration::from_secs(4));
        assert_eq!(lifecycle.state(), LifecycleState::Terminating);
    }

    #[test]
    fn test_run_until_survives_early_wakeups() {
        let mut timer = FakeTimer::new();
        timer.step = Some(Duration::from_millis(400));
        let start = timer.now;
        let mut lifecycle = Lifecycle::new(1.0);
        lifecycle.begin_render().unwrap();

        run_until(&mut timer, &mut lifecycle).unwrap();

        assert_eq!(timer.waits.len(), 3);
        assert!(timer.now >= start + Duration::from_secs(1));
    }

    #[test]
    fn test_non_positive_dismiss_fires_next_tick() {
        for seconds in [0.0, -5.0] {
            let mut timer = FakeTimer::new();
            let start = timer.now;
            let mut lifecycle = Lifecycle::new(seconds);
            lifecycle.begin_render().unwrap();

            run_until(&mut timer, &mut lifecycle).unwrap();

            assert_eq!(timer.waits, vec![start]);
            assert_eq!(timer.now, start);
            assert_eq!(lifecycle.state(), LifecycleState::Terminating);
        }
    }
}
