use crate::compositor::{Change, ShimmerCompositor};
use crate::config::ShimmerConfig;
use crate::driver::{AnimationDriver, CycleEvent, Tick, Timing};
use crate::error::ConfigError;
use crate::layer::PaintContext;
use kurbo::{Point, Size};
use std::time::Duration;
use tracing::debug;

/// One shimmer effect: an `AnimationDriver` feeding a `ShimmerCompositor`.
///
/// The host calls `advance` once per frame with the elapsed time, then
/// `layout` and/or `paint` as the returned `Change` demands.
#[derive(Debug)]
pub struct Shimmer {
    config: ShimmerConfig,
    driver: AnimationDriver,
    compositor: ShimmerCompositor,
}

impl Shimmer {
    /// Validates `config` and starts the animation if it is enabled.
    pub fn new(config: ShimmerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut driver = AnimationDriver::new(&config)?;
        let compositor = ShimmerCompositor::new(&config);
        driver.start();
        Ok(Self {
            config,
            driver,
            compositor,
        })
    }

    /// Advances the clock and forwards new progress to the compositor.
    pub fn advance(&mut self, dt: Duration) -> Change {
        match self.driver.tick(dt) {
            Tick::Idle => Change::None,
            Tick::Advanced(progress) => self.compositor.set_percent(progress),
        }
    }

    /// Applies a new configuration, returning the work it requires.
    ///
    /// Timing changes take effect from the next tick without resetting
    /// progress. Raising the loop budget of a finished shimmer starts a new
    /// cycle from 0.
    pub fn reconfigure(&mut self, config: ShimmerConfig) -> Result<Change, ConfigError> {
        config.validate()?;
        let timing = Timing::from_config(&config)?;
        if timing != self.driver.timing() {
            debug!(?timing, "shimmer retimed");
            self.driver.retime(timing);
        }
        self.driver.set_enabled(config.enabled);
        self.driver.start();
        let change = self
            .compositor
            .update(&config)
            .merge(self.compositor.set_percent(self.driver.progress()));
        self.config = config;
        Ok(change)
    }

    pub fn set_enabled(&mut self, enabled: bool) -> Change {
        self.config.enabled = enabled;
        self.driver.set_enabled(enabled);
        self.compositor.set_enabled(enabled)
    }

    pub fn on_cycle_complete(&mut self, listener: impl FnMut(&CycleEvent) + 'static) {
        self.driver.on_cycle_complete(listener);
    }

    pub fn layout(&mut self, child_size: Option<Size>) -> Size {
        self.compositor.layout(child_size)
    }

    pub fn paint<C: PaintContext>(&mut self, ctx: &mut C, offset: Point, child: Option<&C::Child>) {
        self.compositor.paint(ctx, offset, child);
    }

    /// Stops the animation for good; the compositor keeps its last frame.
    pub fn dispose(&mut self) {
        self.driver.dispose();
    }

    pub fn progress(&self) -> f64 {
        self.driver.progress()
    }

    pub fn config(&self) -> &ShimmerConfig {
        &self.config
    }

    pub fn driver(&self) -> &AnimationDriver {
        &self.driver
    }

    pub fn compositor(&self) -> &ShimmerCompositor {
        &self.compositor
    }
}
