//! Run/pause lifecycle and tick scheduling for the simulation.
//!
//! The controller is a cooperative state machine driven by [`tick`]: the
//! host loop (timer, event loop, test harness) calls `tick` with the current
//! time and the controller decides whether a wake-up is due. One tick is at
//! most one generation transition plus one render notification; `step` never
//! runs concurrently with itself because at most one wake-up is armed.
//!
//! [`tick`]: SimulationController::tick

use std::time::{Duration, Instant};

use log::{debug, trace};

use super::grid::{Grid, GridError};
use crate::schema::SimulationConfig;

/// Render collaborator notified after every completed step, and once for
/// the deferred first frame. Must not mutate cells.
pub trait Renderer {
    fn render(&mut self, grid: &Grid);
}

/// Lifecycle state. An explicit enum instead of separate `running` /
/// `stop_requested` booleans, so illegal combinations are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// No wake-up armed.
    Idle,
    /// A tick loop is active: each due wake-up steps, renders, re-arms.
    Running,
    /// Stop accepted; honored at the next wake-up without another step.
    StopRequested,
}

/// Outcome of a single [`SimulationController::tick`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Nothing armed; the controller is idle.
    Idle,
    /// A wake-up is armed but its deadline has not been reached.
    Pending,
    /// Deferred first frame: rendered the seed without stepping.
    Rendered,
    /// One generation computed and rendered.
    Stepped,
    /// A pending stop was honored; the controller is now idle.
    Stopped,
}

/// Owns the [`Grid`] and the run/pause/restart lifecycle around it.
pub struct SimulationController {
    grid: Grid,
    interval: Duration,
    state: RunState,
    /// True until the first step after construction or [`reset_grid`];
    /// makes the initial seed visible for one full interval.
    ///
    /// [`reset_grid`]: SimulationController::reset_grid
    first_frame: bool,
    next_wake: Option<Instant>,
}

impl SimulationController {
    /// Build a controller with a freshly seeded grid from `config`.
    pub fn new(config: &SimulationConfig) -> Result<Self, GridError> {
        let grid = Grid::new(config.width, config.height, config.life_probability)?;
        Ok(Self {
            grid,
            interval: config.interval(),
            state: RunState::Idle,
            first_frame: true,
            next_wake: None,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    /// Deadline of the armed wake-up, if any. Host loops sleep until this
    /// before calling [`tick`](Self::tick) again.
    pub fn next_wake(&self) -> Option<Instant> {
        self.next_wake
    }

    /// Tick period. Changes apply when the next wake-up is armed.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for cell editors. Only valid between ticks; see
    /// the module docs for the serialization discipline.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Begin (or resume) the tick loop.
    ///
    /// Idempotent while `Running`: a second `start` never arms a second
    /// wake-up, which is what keeps at most one tick in flight. Called in
    /// `StopRequested` it cancels the pending stop and the loop continues
    /// on its existing cadence with no visible pause.
    pub fn start(&mut self, now: Instant) {
        match self.state {
            RunState::Running => {}
            RunState::StopRequested => {
                self.state = RunState::Running;
                debug!("pending stop cancelled, resuming");
            }
            RunState::Idle => {
                self.state = RunState::Running;
                self.next_wake = Some(if self.first_frame {
                    // Render-only wake-up first: the seed stays on screen
                    // for one full interval before the first step.
                    now
                } else {
                    now + self.interval
                });
                debug!(
                    "simulation started ({}x{}, interval {:?})",
                    self.grid.width(),
                    self.grid.height(),
                    self.interval
                );
            }
        }
    }

    /// Request a stop. Takes effect at the next wake-up, never mid-step;
    /// a no-op unless `Running`.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::StopRequested;
            debug!("stop requested");
        }
    }

    /// Replace the grid wholesale. Permitted in any state; the controller
    /// goes idle and does not auto-restart, so a running caller must invoke
    /// [`start`](Self::start) again to resume.
    pub fn reset_grid(
        &mut self,
        width: usize,
        height: usize,
        life_probability: f64,
    ) -> Result<(), GridError> {
        self.grid = Grid::new(width, height, life_probability)?;
        self.first_frame = true;
        self.state = RunState::Idle;
        self.next_wake = None;
        debug!("grid reset to {}x{}", width, height);
        Ok(())
    }

    /// Process one cooperative wake-up.
    ///
    /// Before the armed deadline this is a cheap no-op (`Pending`). At the
    /// deadline: a pending stop goes idle without stepping; otherwise the
    /// grid advances one generation (or, for the deferred first frame,
    /// only renders) and the next wake-up is armed at `now + interval`.
    pub fn tick<R: Renderer>(&mut self, now: Instant, renderer: &mut R) -> Tick {
        let Some(deadline) = self.next_wake else {
            return Tick::Idle;
        };
        if now < deadline {
            return Tick::Pending;
        }

        match self.state {
            RunState::Idle => Tick::Idle,
            RunState::StopRequested => {
                self.state = RunState::Idle;
                self.next_wake = None;
                debug!("simulation stopped at generation {}", self.grid.generation());
                Tick::Stopped
            }
            RunState::Running if self.first_frame => {
                self.first_frame = false;
                renderer.render(&self.grid);
                self.next_wake = Some(now + self.interval);
                trace!("first frame rendered");
                Tick::Rendered
            }
            RunState::Running => {
                self.grid.step();
                renderer.render(&self.grid);
                self.next_wake = Some(now + self.interval);
                trace!(
                    "generation {} ({} live)",
                    self.grid.generation(),
                    self.grid.population()
                );
                Tick::Stepped
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingRenderer {
        renders: usize,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, _grid: &Grid) {
            self.renders += 1;
        }
    }

    fn test_config() -> SimulationConfig {
        SimulationConfig {
            width: 8,
            height: 8,
            interval_ms: 100,
            life_probability: 0.5,
        }
    }

    fn controller() -> SimulationController {
        SimulationController::new(&test_config()).unwrap()
    }

    #[test]
    fn test_starts_idle() {
        let sim = controller();
        assert_eq!(sim.state(), RunState::Idle);
        assert_eq!(sim.next_wake(), None);
    }

    #[test]
    fn test_first_start_renders_before_first_step() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        let t0 = Instant::now();

        sim.start(t0);
        assert!(sim.is_running());

        // First wake-up shows the seed without stepping.
        assert_eq!(sim.tick(t0, &mut renderer), Tick::Rendered);
        assert_eq!(renderer.renders, 1);
        assert_eq!(sim.grid().generation(), 0);

        // One interval later the first step runs.
        let t1 = t0 + sim.interval();
        assert_eq!(sim.tick(t1, &mut renderer), Tick::Stepped);
        assert_eq!(renderer.renders, 2);
        assert_eq!(sim.grid().generation(), 1);
    }

    #[test]
    fn test_tick_before_deadline_is_pending() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        let t0 = Instant::now();

        sim.start(t0);
        sim.tick(t0, &mut renderer);

        let early = t0 + sim.interval() / 2;
        assert_eq!(sim.tick(early, &mut renderer), Tick::Pending);
        assert_eq!(renderer.renders, 1);
    }

    #[test]
    fn test_double_start_keeps_single_tick_loop() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        let t0 = Instant::now();
        let interval = sim.interval();

        sim.start(t0);
        let armed = sim.next_wake();
        sim.start(t0 + interval / 4);
        // Second start must not re-arm or double the cadence.
        assert_eq!(sim.next_wake(), armed);

        let mut now = t0;
        for _ in 0..4 {
            sim.tick(now, &mut renderer);
            now += interval;
        }
        // 1 first-frame render + 3 steps, not twice that.
        assert_eq!(renderer.renders, 4);
        assert_eq!(sim.grid().generation(), 3);
    }

    #[test]
    fn test_stop_defers_to_wake_up_boundary() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        let t0 = Instant::now();
        let interval = sim.interval();

        sim.start(t0);
        sim.tick(t0, &mut renderer);
        sim.tick(t0 + interval, &mut renderer);
        assert_eq!(sim.grid().generation(), 1);

        sim.stop();
        // Stop is not instantaneous: still StopRequested, wake-up armed.
        assert_eq!(sim.state(), RunState::StopRequested);
        assert!(sim.next_wake().is_some());

        // The wake-up honors the stop without another step.
        assert_eq!(sim.tick(t0 + 2 * interval, &mut renderer), Tick::Stopped);
        assert_eq!(sim.state(), RunState::Idle);
        assert_eq!(sim.next_wake(), None);
        assert_eq!(sim.grid().generation(), 1);
        assert_eq!(renderer.renders, 2);
    }

    #[test]
    fn test_start_cancels_pending_stop_without_pause() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        let t0 = Instant::now();
        let interval = sim.interval();

        sim.start(t0);
        sim.tick(t0, &mut renderer);

        sim.stop();
        let armed = sim.next_wake();
        sim.start(t0 + interval / 2);

        // Loop continues unabated on the original cadence.
        assert_eq!(sim.state(), RunState::Running);
        assert_eq!(sim.next_wake(), armed);
        assert_eq!(sim.tick(t0 + interval, &mut renderer), Tick::Stepped);
        assert_eq!(sim.grid().generation(), 1);
    }

    #[test]
    fn test_stop_while_idle_is_noop() {
        let mut sim = controller();
        sim.stop();
        assert_eq!(sim.state(), RunState::Idle);
    }

    #[test]
    fn test_reset_goes_idle_and_restores_first_frame() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        let t0 = Instant::now();
        let interval = sim.interval();

        sim.start(t0);
        sim.tick(t0, &mut renderer);
        sim.tick(t0 + interval, &mut renderer);

        sim.reset_grid(6, 4, 0.0).unwrap();
        // Reset never auto-restarts.
        assert_eq!(sim.state(), RunState::Idle);
        assert_eq!(sim.next_wake(), None);
        assert_eq!(sim.grid().width(), 6);
        assert_eq!(sim.grid().height(), 4);
        assert_eq!(sim.grid().generation(), 0);

        // Every in-bounds read on the fresh grid succeeds.
        for y in 0..4 {
            for x in 0..6 {
                assert!(sim.grid().get(x, y).is_ok());
            }
        }

        // Restart behaves like a first run again: render-only wake-up.
        let t1 = t0 + 10 * interval;
        sim.start(t1);
        assert_eq!(sim.tick(t1, &mut renderer), Tick::Rendered);
        assert_eq!(sim.grid().generation(), 0);
    }

    #[test]
    fn test_reset_rejects_zero_dimensions() {
        let mut sim = controller();
        assert!(matches!(
            sim.reset_grid(0, 4, 0.5),
            Err(GridError::InvalidDimension { width: 0, height: 4 })
        ));
        // The old grid is untouched.
        assert_eq!(sim.grid().width(), 8);
        assert_eq!(sim.grid().height(), 8);
    }

    #[test]
    fn test_interval_change_applies_on_next_rearm() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        let t0 = Instant::now();
        let old = sim.interval();

        sim.start(t0);
        sim.tick(t0, &mut renderer);

        let new = Duration::from_millis(25);
        sim.set_interval(new);
        // The already-armed deadline still uses the old interval.
        assert_eq!(sim.next_wake(), Some(t0 + old));

        sim.tick(t0 + old, &mut renderer);
        assert_eq!(sim.next_wake(), Some(t0 + old + new));
    }

    #[test]
    fn test_tick_while_idle_does_nothing() {
        let mut sim = controller();
        let mut renderer = CountingRenderer::default();
        assert_eq!(sim.tick(Instant::now(), &mut renderer), Tick::Idle);
        assert_eq!(renderer.renders, 0);
    }
}
