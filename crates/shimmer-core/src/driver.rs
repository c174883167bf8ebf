//! # Animation Driver
//!
//! The single source of time-based state: a cyclic progress value in [0, 1].
//!
//! ## Responsibilities
//! - **Advancing**: `tick(dt)` moves a linear cycle value forward by `dt / period`
//!   and exposes it through the configured easing curve.
//! - **Cycling**: on completion either repeats seamlessly (infinite, no delay),
//!   restarts from 0, pauses for `delay` first, or stops when the loop budget
//!   is spent.
//! - **Control**: `start`, `set_enabled`, `dispose`.
//!
//! ## Key Types
//! - `AnimationDriver`: the driver itself.
//! - `DriverState`: `Stopped`, `Running` or `AwaitingDelay`.
//! - `AnimationState`: progress, completed cycles, running flag.
//!
//! The delay pause is a timed continuation serviced by later ticks, never a
//! blocking wait. The continuation checks the liveness flag on entry, so a
//! disposed driver never acts on it.

use crate::config::ShimmerConfig;
use crate::easing::EasingType;
use crate::error::ConfigError;
use std::fmt;
use std::time::Duration;
use tracing::{debug, trace, warn};

/// Observable state of the driver.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DriverState {
    Stopped,
    Running,
    AwaitingDelay,
}

/// Progress, completed cycles and whether the driver is advancing.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    /// Eased progress in [0, 1].
    pub progress: f64,
    pub cycle_count: u32,
    pub running: bool,
}

/// Delivered to cycle listeners each time progress reaches 1.0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CycleEvent {
    /// 1-based number of the cycle that just completed.
    pub cycle: u32,
    /// True when the loop budget is spent and no further cycle will run.
    pub last: bool,
}

/// Result of one clock tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Tick {
    /// Nothing moved; no repaint is needed.
    Idle,
    /// Progress was updated to the contained value.
    Advanced(f64),
}

impl Tick {
    pub fn progress(self) -> Option<f64> {
        match self {
            Tick::Idle => None,
            Tick::Advanced(progress) => Some(progress),
        }
    }
}

/// Timing parameters taken from `ShimmerConfig`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Timing {
    pub period: Duration,
    pub curve: EasingType,
    pub delay: Duration,
    pub loop_count: u32,
}

impl Timing {
    pub fn from_config(config: &ShimmerConfig) -> Result<Self, ConfigError> {
        if config.period.is_zero() {
            return Err(ConfigError::NonPositivePeriod);
        }
        Ok(Self {
            period: config.period,
            curve: config.curve,
            delay: config.delay,
            loop_count: config.loop_count,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Phase {
    Stopped,
    Running,
    AwaitingDelay { remaining: Duration },
}

type CycleListener = Box<dyn FnMut(&CycleEvent)>;

pub struct AnimationDriver {
    timing: Timing,
    enabled: bool,
    alive: bool,
    /// Time spent in the current cycle.
    elapsed: Duration,
    state: AnimationState,
    phase: Phase,
    /// Remaining pause frozen by `set_enabled(false)` during a delay.
    suspended_delay: Option<Duration>,
    listeners: Vec<CycleListener>,
}

impl AnimationDriver {
    /// Creates a stopped driver at progress 0. Call `start` to begin.
    pub fn new(config: &ShimmerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            timing: Timing::from_config(config)?,
            enabled: config.enabled,
            alive: true,
            elapsed: Duration::ZERO,
            state: AnimationState::default(),
            phase: Phase::Stopped,
            suspended_delay: None,
            listeners: Vec::new(),
        })
    }

    /// Begins advancing from the current progress if enabled.
    pub fn start(&mut self) {
        if !self.alive || !self.enabled || self.is_finished() {
            return;
        }
        if self.phase == Phase::Stopped {
            self.resume();
        }
    }

    /// Enabling resumes from the current progress; disabling freezes it.
    pub fn set_enabled(&mut self, enabled: bool) {
        if !self.alive || self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if enabled {
            self.start();
        } else {
            if let Phase::AwaitingDelay { remaining } = self.phase {
                self.suspended_delay = Some(remaining);
            }
            self.set_phase(Phase::Stopped);
            debug!(progress = self.state.progress, "shimmer animation disabled");
        }
    }

    /// Replaces the timing parameters. Progress and cycle count are kept; the
    /// new period applies from the next tick.
    pub fn retime(&mut self, timing: Timing) {
        if timing.period.is_zero() {
            warn!("ignoring retime with zero period");
            return;
        }
        let value = self.cycle_value();
        self.timing = timing;
        self.elapsed = timing.period.mul_f64(value);
        self.state.progress = timing.curve.eval(value);
    }

    /// Registers a callback invoked synchronously whenever a cycle completes.
    pub fn on_cycle_complete(&mut self, listener: impl FnMut(&CycleEvent) + 'static) {
        if self.alive {
            self.listeners.push(Box::new(listener));
        }
    }

    /// Detaches listeners and drops any pending delay continuation. Further
    /// calls, and every later tick, are no-ops.
    pub fn dispose(&mut self) {
        if !self.alive {
            warn!("animation driver disposed twice");
            return;
        }
        self.alive = false;
        self.listeners.clear();
        self.suspended_delay = None;
        self.set_phase(Phase::Stopped);
        debug!(cycles = self.state.cycle_count, "animation driver disposed");
    }

    /// Advances the clock by `dt`.
    pub fn tick(&mut self, dt: Duration) -> Tick {
        if !self.alive {
            return Tick::Idle;
        }
        match self.phase {
            Phase::Stopped => Tick::Idle,
            Phase::AwaitingDelay { remaining } => {
                if dt < remaining {
                    self.phase = Phase::AwaitingDelay {
                        remaining: remaining - dt,
                    };
                    Tick::Idle
                } else {
                    self.after_delay(dt - remaining)
                }
            }
            Phase::Running => self.advance(dt),
        }
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn cycle_count(&self) -> u32 {
        self.state.cycle_count
    }

    pub fn animation_state(&self) -> AnimationState {
        self.state
    }

    pub fn state(&self) -> DriverState {
        match self.phase {
            Phase::Stopped => DriverState::Stopped,
            Phase::Running => DriverState::Running,
            Phase::AwaitingDelay { .. } => DriverState::AwaitingDelay,
        }
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_disposed(&self) -> bool {
        !self.alive
    }

    /// True once a finite loop budget has been used up.
    pub fn is_finished(&self) -> bool {
        self.timing.loop_count > 0 && self.state.cycle_count >= self.timing.loop_count
    }

    /// Linear position within the current cycle, before easing.
    fn cycle_value(&self) -> f64 {
        (self.elapsed.as_secs_f64() / self.timing.period.as_secs_f64()).min(1.0)
    }

    fn resume(&mut self) {
        match self.suspended_delay.take() {
            Some(remaining) => self.set_phase(Phase::AwaitingDelay { remaining }),
            None => {
                // A cycle that already ran to its end starts over.
                if self.elapsed >= self.timing.period {
                    self.elapsed = Duration::ZERO;
                    self.state.progress = self.timing.curve.eval(0.0);
                }
                self.set_phase(Phase::Running);
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.state.running = phase == Phase::Running;
    }

    fn advance(&mut self, dt: Duration) -> Tick {
        let period = self.timing.period;
        let elapsed = self.elapsed.saturating_add(dt);
        if elapsed < period {
            self.elapsed = elapsed;
            self.state.progress = self.timing.curve.eval(self.cycle_value());
            trace!(progress = self.state.progress, "shimmer tick");
            return Tick::Advanced(self.state.progress);
        }

        let overshoot = elapsed - period;
        let next = self.next_step();
        if next == AfterCycle::Repeat {
            // Every whole period inside this tick completes a cycle.
            let (extra, rest) = split_spans(overshoot, period, u128::MAX);
            self.elapsed = rest;
            self.complete_cycles(extra.saturating_add(1), next);
            self.state.progress = self.timing.curve.eval(self.cycle_value());
            return Tick::Advanced(self.state.progress);
        }

        self.elapsed = period;
        self.state.progress = self.timing.curve.eval(1.0);
        self.complete_cycles(1, next);
        match next {
            AfterCycle::Restart => {
                self.elapsed = Duration::ZERO;
                self.state.progress = self.timing.curve.eval(0.0);
                self.set_phase(Phase::Running);
            }
            AfterCycle::Pause if overshoot < self.timing.delay => {
                self.set_phase(Phase::AwaitingDelay {
                    remaining: self.timing.delay - overshoot,
                });
            }
            AfterCycle::Pause => {
                let leftover = overshoot - self.timing.delay;
                if let Tick::Advanced(progress) = self.after_delay(leftover) {
                    return Tick::Advanced(progress);
                }
            }
            AfterCycle::Stop => self.set_phase(Phase::Stopped),
            AfterCycle::Repeat => {}
        }
        Tick::Advanced(self.state.progress)
    }

    /// What follows the cycle that is about to complete.
    fn next_step(&self) -> AfterCycle {
        if !self.timing.delay.is_zero() {
            AfterCycle::Pause
        } else if self.timing.loop_count == 0 {
            AfterCycle::Repeat
        } else if self.state.cycle_count.saturating_add(1) < self.timing.loop_count {
            AfterCycle::Restart
        } else {
            AfterCycle::Stop
        }
    }

    /// Counts `cycles` completions and notifies listeners once with the
    /// latest cycle number.
    fn complete_cycles(&mut self, cycles: u128, next: AfterCycle) {
        let cycles = u32::try_from(cycles).unwrap_or(u32::MAX);
        self.state.cycle_count = self.state.cycle_count.saturating_add(cycles);
        let cycle = self.state.cycle_count;
        debug!(cycle, completed = cycles, ?next, "shimmer cycle complete");

        let event = CycleEvent {
            cycle,
            last: self.is_finished(),
        };
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Continuation scheduled by a delay pause. `leftover` is the part of
    /// the tick that ran past the end of the pause.
    fn after_delay(&mut self, leftover: Duration) -> Tick {
        if !self.alive {
            return Tick::Idle;
        }
        if self.is_finished() {
            self.set_phase(Phase::Stopped);
            debug!(cycles = self.state.cycle_count, "shimmer loop budget spent");
            return Tick::Idle;
        }
        self.elapsed = Duration::ZERO;
        self.state.progress = self.timing.curve.eval(0.0);
        self.set_phase(Phase::Running);
        let leftover = self.skip_delayed_cycles(leftover);
        self.advance(leftover)
    }

    /// Folds whole cycle-plus-pause spans of `time` into the cycle count,
    /// keeping the final cycle of a finite budget for `advance` to run.
    fn skip_delayed_cycles(&mut self, time: Duration) -> Duration {
        if self.timing.delay.is_zero() {
            return time;
        }
        let span = self.timing.period.saturating_add(self.timing.delay);
        let limit = match self.timing.loop_count {
            0 => u128::MAX,
            budget => u128::from(budget.saturating_sub(self.state.cycle_count).saturating_sub(1)),
        };
        let (cycles, rest) = split_spans(time, span, limit);
        if cycles > 0 {
            self.complete_cycles(cycles, AfterCycle::Pause);
        }
        rest
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Splits `time` into at most `limit` whole `span`s and what is left over.
fn split_spans(time: Duration, span: Duration, limit: u128) -> (u128, Duration) {
    let span = span.as_nanos();
    let time = time.as_nanos();
    let count = (time / span).min(limit);
    let rest = time - count * span;
    let rest = Duration::new((rest / NANOS_PER_SEC) as u64, (rest % NANOS_PER_SEC) as u32);
    (count, rest)
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum AfterCycle {
    Repeat,
    Restart,
    Pause,
    Stop,
}

impl fmt::Debug for AnimationDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationDriver")
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("enabled", &self.enabled)
            .field("alive", &self.alive)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn driver(config: ShimmerConfig) -> AnimationDriver {
        let mut driver = AnimationDriver::new(&config).unwrap();
        driver.start();
        driver
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_zero_period_is_rejected() {
        let config = ShimmerConfig::default().with_period(Duration::ZERO);
        assert_eq!(
            AnimationDriver::new(&config).unwrap_err(),
            ConfigError::NonPositivePeriod
        );
    }

    #[test]
    fn test_new_driver_is_stopped_until_started() {
        let mut driver = AnimationDriver::new(&ShimmerConfig::default()).unwrap();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.tick(ms(100)), Tick::Idle);
        driver.start();
        assert_eq!(driver.state(), DriverState::Running);
        assert!(driver.animation_state().running);
    }

    #[test]
    fn test_start_ignored_when_disabled() {
        let mut driver = AnimationDriver::new(&ShimmerConfig::default().with_enabled(false)).unwrap();
        driver.start();
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.tick(ms(100)), Tick::Idle);
    }

    #[test]
    fn test_progress_follows_period() {
        let mut driver = driver(ShimmerConfig::default().with_period(ms(1000)));
        assert!(approx(driver.tick(ms(250)).progress().unwrap(), 0.25));
        assert!(approx(driver.tick(ms(250)).progress().unwrap(), 0.5));
        assert_eq!(driver.cycle_count(), 0);
    }

    #[test]
    fn test_curve_shapes_progress() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(1000))
                .with_curve(EasingType::EaseIn),
        );
        let progress = driver.tick(ms(250)).progress().unwrap();
        assert!(progress < 0.25);
    }

    #[test]
    fn test_infinite_repeat_carries_overshoot() {
        let mut driver = driver(ShimmerConfig::default().with_period(ms(1000)));
        driver.tick(ms(900));
        let progress = driver.tick(ms(300)).progress().unwrap();
        assert!(approx(progress, 0.2), "got {}", progress);
        assert_eq!(driver.cycle_count(), 1);
        assert_eq!(driver.state(), DriverState::Running);

        // Several periods in one tick complete several cycles.
        driver.tick(ms(3000));
        assert_eq!(driver.cycle_count(), 4);
        assert!(approx(driver.progress(), 0.2));
    }

    #[test]
    fn test_infinite_loop_runs_indefinitely() {
        let mut driver = driver(ShimmerConfig::default().with_period(ms(100)));
        for _ in 0..1000 {
            driver.tick(ms(50));
        }
        assert_eq!(driver.cycle_count(), 500);
        assert_eq!(driver.state(), DriverState::Running);
        assert!(!driver.is_finished());
    }

    #[test]
    fn test_finite_loop_stops_after_budget() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_loop_count(3),
        );
        // First two completions restart from zero, dropping the overshoot.
        assert_eq!(driver.tick(ms(120)), Tick::Advanced(0.0));
        assert_eq!(driver.cycle_count(), 1);
        assert_eq!(driver.tick(ms(100)), Tick::Advanced(0.0));
        assert_eq!(driver.tick(ms(100)), Tick::Advanced(1.0));
        assert_eq!(driver.cycle_count(), 3);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(driver.is_finished());

        assert_eq!(driver.tick(ms(100)), Tick::Idle);
        assert_eq!(driver.progress(), 1.0);
        driver.start();
        assert_eq!(driver.state(), DriverState::Stopped);
    }

    #[test]
    fn test_delay_pauses_then_restarts_at_zero() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(300)),
        );
        assert_eq!(driver.tick(ms(150)), Tick::Advanced(1.0));
        assert_eq!(driver.state(), DriverState::AwaitingDelay);
        assert_eq!(driver.cycle_count(), 1);

        // The 50ms past the cycle end already count towards the pause.
        assert_eq!(driver.tick(ms(200)), Tick::Idle);
        assert_eq!(driver.tick(ms(49)), Tick::Idle);
        assert_eq!(driver.progress(), 1.0);
        assert_eq!(driver.state(), DriverState::AwaitingDelay);

        assert_eq!(driver.tick(ms(1)), Tick::Advanced(0.0));
        assert_eq!(driver.state(), DriverState::Running);
        assert!(approx(driver.tick(ms(50)).progress().unwrap(), 0.5));
    }

    #[test]
    fn test_delay_ends_exactly_delay_after_cycle_end() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(300)),
        );
        assert_eq!(driver.tick(ms(150)), Tick::Advanced(1.0));
        // t = 400ms is the cycle end plus the full delay.
        assert_eq!(driver.tick(ms(250)), Tick::Advanced(0.0));
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn test_time_past_delay_runs_into_next_cycle() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(100)),
        );
        driver.tick(ms(100));
        assert!(approx(driver.tick(ms(150)).progress().unwrap(), 0.5));
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.cycle_count(), 1);
    }

    #[test]
    fn test_single_tick_spans_cycle_and_delay() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(100)),
        );
        driver.tick(ms(30));
        // 70ms finish the cycle, 100ms of pause, 80ms into the next cycle.
        assert!(approx(driver.tick(ms(250)).progress().unwrap(), 0.8));
        assert_eq!(driver.cycle_count(), 1);
        assert_eq!(driver.state(), DriverState::Running);
    }

    #[test]
    fn test_huge_tick_with_tiny_period_notifies_once() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut driver = driver(ShimmerConfig::default().with_period(Duration::from_nanos(1)));
        let sink = events.clone();
        driver.on_cycle_complete(move |event| sink.borrow_mut().push(*event));

        assert_eq!(driver.tick(Duration::from_secs(1)), Tick::Advanced(0.0));
        assert_eq!(driver.cycle_count(), 1_000_000_000);
        assert_eq!(
            *events.borrow(),
            vec![CycleEvent {
                cycle: 1_000_000_000,
                last: false
            }]
        );
    }

    #[test]
    fn test_huge_tick_with_tiny_period_and_delay() {
        let calls = Rc::new(RefCell::new(0));
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(Duration::from_nanos(1))
                .with_delay(Duration::from_nanos(1)),
        );
        let counter = calls.clone();
        driver.on_cycle_complete(move |_| *counter.borrow_mut() += 1);

        // Each cycle plus its pause takes 2ns.
        assert_eq!(driver.tick(Duration::from_secs(1)), Tick::Advanced(0.0));
        assert_eq!(driver.cycle_count(), 500_000_000);
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(*calls.borrow(), 2);
    }

    #[test]
    fn test_huge_tick_respects_finite_budget_with_delay() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(100))
                .with_loop_count(3),
        );
        let sink = events.clone();
        driver.on_cycle_complete(move |event| sink.borrow_mut().push(*event));

        assert_eq!(driver.tick(Duration::from_secs(10)), Tick::Advanced(1.0));
        assert_eq!(driver.cycle_count(), 3);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert!(driver.is_finished());
        assert_eq!(events.borrow().last(), Some(&CycleEvent { cycle: 3, last: true }));
    }

    #[test]
    fn test_delay_with_finite_loop_stops_after_last_pause() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(50))
                .with_loop_count(1),
        );
        driver.tick(ms(100));
        assert_eq!(driver.state(), DriverState::AwaitingDelay);
        assert_eq!(driver.tick(ms(50)), Tick::Idle);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.tick(ms(500)), Tick::Idle);
    }

    #[test]
    fn test_disable_freezes_and_enable_resumes() {
        let mut driver = driver(ShimmerConfig::default().with_period(ms(1000)));
        driver.tick(ms(400));
        driver.set_enabled(false);
        assert_eq!(driver.state(), DriverState::Stopped);
        assert_eq!(driver.tick(ms(300)), Tick::Idle);
        assert!(approx(driver.progress(), 0.4));

        driver.set_enabled(true);
        assert_eq!(driver.state(), DriverState::Running);
        assert!(approx(driver.tick(ms(100)).progress().unwrap(), 0.5));
    }

    #[test]
    fn test_disable_during_delay_keeps_remaining_pause() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(200)),
        );
        driver.tick(ms(100));
        driver.tick(ms(50));
        driver.set_enabled(false);
        assert_eq!(driver.tick(ms(1000)), Tick::Idle);

        driver.set_enabled(true);
        assert_eq!(driver.state(), DriverState::AwaitingDelay);
        assert_eq!(driver.tick(ms(149)), Tick::Idle);
        assert_eq!(driver.tick(ms(1)), Tick::Advanced(0.0));
    }

    #[test]
    fn test_cycle_listener_receives_events() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_loop_count(2),
        );
        let sink = events.clone();
        driver.on_cycle_complete(move |event| sink.borrow_mut().push(*event));
        driver.tick(ms(100));
        driver.tick(ms(100));
        assert_eq!(
            *events.borrow(),
            vec![
                CycleEvent { cycle: 1, last: false },
                CycleEvent { cycle: 2, last: true },
            ]
        );
    }

    #[test]
    fn test_dispose_stops_callbacks_and_pending_delay() {
        let calls = Rc::new(RefCell::new(0));
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(100)),
        );
        let counter = calls.clone();
        driver.on_cycle_complete(move |_| *counter.borrow_mut() += 1);
        driver.tick(ms(100));
        assert_eq!(*calls.borrow(), 1);
        assert_eq!(driver.state(), DriverState::AwaitingDelay);

        driver.dispose();
        assert!(driver.is_disposed());
        assert_eq!(driver.tick(ms(500)), Tick::Idle);
        assert_eq!(driver.progress(), 1.0);

        driver.set_enabled(false);
        driver.set_enabled(true);
        driver.start();
        assert_eq!(driver.tick(ms(500)), Tick::Idle);
        assert_eq!(*calls.borrow(), 1);

        // Second dispose is harmless.
        driver.dispose();
    }

    #[test]
    fn test_delayed_continuation_checks_liveness() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_delay(ms(100)),
        );
        driver.tick(ms(100));
        driver.alive = false;
        assert_eq!(driver.after_delay(Duration::ZERO), Tick::Idle);
        assert_eq!(driver.progress(), 1.0);
    }

    #[test]
    fn test_retime_keeps_progress() {
        let mut driver = driver(ShimmerConfig::default().with_period(ms(1000)));
        driver.tick(ms(500));
        let timing = Timing {
            period: ms(2000),
            ..driver.timing()
        };
        driver.retime(timing);
        assert!(approx(driver.progress(), 0.5));
        assert!(approx(driver.tick(ms(500)).progress().unwrap(), 0.75));
    }

    #[test]
    fn test_raised_budget_restarts_finished_driver_from_zero() {
        let mut driver = driver(
            ShimmerConfig::default()
                .with_period(ms(100))
                .with_loop_count(1),
        );
        driver.tick(ms(100));
        assert!(driver.is_finished());

        driver.retime(Timing {
            loop_count: 2,
            ..driver.timing()
        });
        driver.start();
        assert_eq!(driver.state(), DriverState::Running);
        assert_eq!(driver.progress(), 0.0);
        assert!(approx(driver.tick(ms(40)).progress().unwrap(), 0.4));
        assert_eq!(driver.cycle_count(), 1);
    }
}
