//! The board: scheduler, lifecycle state machine, and driver loop.
//!
//! The `Board` owns the link table and component collection, advances them in
//! discrete ticks, and exposes a read-only status snapshot that concurrent
//! callers can poll while stepping continues.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::component::Component;
use crate::config::{BoardConfig, ConfigError};
use crate::error::SimError;
use crate::link::LinkTable;
use crate::registry::{default_registry, ComponentRegistry};
use crate::snapshot::{ComponentStatus, StatusSnapshot};
use crate::types::{ComponentId, Tick};

/// Lifecycle states of a board.
///
/// Transitions: `Uninitialized → Ready → Running → Stopped`. `stop` is
/// idempotent; every other transition out of order is `InvalidState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum BoardState {
    Uninitialized,
    Ready,
    Running,
    Stopped,
}

impl std::fmt::Display for BoardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BoardState::Uninitialized => "Uninitialized",
            BoardState::Ready => "Ready",
            BoardState::Running => "Running",
            BoardState::Stopped => "Stopped",
        };
        f.write_str(name)
    }
}

/// Counters collected while stepping.
#[derive(Clone, Debug, Default)]
pub struct BoardStats {
    /// Total ticks executed since `init`
    pub ticks_executed: u64,
    /// Total component evaluations
    pub component_evaluations: u64,
    /// Evaluations that returned an error (logged, not fatal)
    pub eval_faults: u64,
}

/// The mutable simulation state, guarded by one lock.
///
/// A step holds the write guard for the whole pass, so a reader can never
/// observe a link table mixing values from two different ticks.
struct SimState {
    links: LinkTable,
    components: Vec<Box<dyn Component>>,
    /// Evaluation order: drivers (clocks) in declaration order, then all
    /// remaining components in declaration order. One fixed pass per tick;
    /// combinational chains are not iterated to a fixed point.
    order: Vec<ComponentId>,
    tick: Tick,
    stats: BoardStats,
    tick_interval: Duration,
    ticks_per_second: u64,
    last_capture: Instant,
    last_capture_tick: Tick,
}

impl SimState {
    /// Executes one full evaluation pass.
    fn step(&mut self) {
        self.tick += 1;
        let tick = self.tick;

        for &id in &self.order {
            let component = &mut self.components[id];
            self.stats.component_evaluations += 1;
            if let Err(err) = component.evaluate(tick, &mut self.links) {
                self.stats.eval_faults += 1;
                tracing::warn!(
                    component = id,
                    kind = component.type_name(),
                    %err,
                    "component evaluation faulted"
                );
            }
        }

        self.stats.ticks_executed += 1;
        self.capture_speed();
    }

    /// Recomputes the measured stepping rate about once per second.
    fn capture_speed(&mut self) {
        let elapsed = self.last_capture.elapsed();
        if elapsed >= Duration::from_secs(1) {
            let delta = self.tick - self.last_capture_tick;
            self.ticks_per_second = (delta as f64 / elapsed.as_secs_f64()) as u64;
            self.last_capture = Instant::now();
            self.last_capture_tick = self.tick;
        }
    }

    fn snapshot(&self, state: BoardState) -> StatusSnapshot {
        let components = self
            .components
            .iter()
            .map(|component| ComponentStatus {
                kind: component.type_name().to_string(),
                outputs: component
                    .output_links()
                    .iter()
                    .map(|&link| self.links.get(link).unwrap_or(false))
                    .collect(),
            })
            .collect();

        StatusSnapshot {
            state,
            tick: self.tick,
            ticks_per_second: self.ticks_per_second,
            links: self.links.values().to_vec(),
            components,
        }
    }
}

struct BoardInner {
    registry: ComponentRegistry,
    state: RwLock<BoardState>,
    sim: RwLock<Option<SimState>>,
    driver: Mutex<Option<JoinHandle<()>>>,
}

/// A digital logic board: the engine the external glue talks to.
///
/// `Board` is a cheaply cloneable handle; clones share the same underlying
/// simulation, so one can drive the lifecycle while others poll status.
///
/// # Example
///
/// ```rust
/// use bitgrid::{Board, BoardConfig};
///
/// let config = BoardConfig::from_json(r#"{
///     "links": 3,
///     "components": [
///         { "type": "CLK", "CLK_Speed": 1, "inputs": [1], "outputs": [0] },
///         { "type": "AND", "inputs": [0, 1], "outputs": [2] }
///     ]
/// }"#).unwrap();
///
/// let board = Board::new();
/// board.init(&config).unwrap();
/// board.step().unwrap();
///
/// let status = board.status().unwrap();
/// assert_eq!(status.link(0), Some(true));  // clock toggled high
/// assert_eq!(status.link(2), Some(false)); // link 1 never driven high
/// ```
#[derive(Clone)]
pub struct Board {
    inner: Arc<BoardInner>,
}

impl Board {
    /// Creates an uninitialized board with the built-in component types.
    pub fn new() -> Self {
        Self::with_registry(default_registry())
    }

    /// Creates an uninitialized board with a custom component registry.
    pub fn with_registry(registry: ComponentRegistry) -> Self {
        Self {
            inner: Arc::new(BoardInner {
                registry,
                state: RwLock::new(BoardState::Uninitialized),
                sim: RwLock::new(None),
                driver: Mutex::new(None),
            }),
        }
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> BoardState {
        *self.inner.state.read()
    }

    /// Returns the number of ticks completed since `init`.
    pub fn tick(&self) -> Tick {
        self.inner.sim.read().as_ref().map(|sim| sim.tick).unwrap_or(0)
    }

    /// Builds the board from a validated topology and transitions to `Ready`.
    ///
    /// The topology is write-once: re-initializing an initialized board is
    /// `InvalidState`. On any validation or build error nothing is retained
    /// and the board stays `Uninitialized`.
    ///
    /// # Errors
    /// * `InvalidTopology` - bad link index, arity mismatch, unknown type
    /// * `InvalidState` - the board was already initialized
    pub fn init(&self, config: &BoardConfig) -> Result<(), SimError> {
        let mut state = self.inner.state.write();
        if *state != BoardState::Uninitialized {
            return Err(SimError::InvalidState {
                operation: "init",
                state: *state,
            });
        }

        // Bounds are checked once, here; never re-checked per tick.
        config.validate().map_err(|err| match err {
            ConfigError::Validation(msg) => SimError::InvalidTopology(msg),
            other => SimError::Config(other),
        })?;

        let mut components: Vec<Box<dyn Component>> = Vec::with_capacity(config.components.len());
        for (index, entry) in config.components.iter().enumerate() {
            let mut component = self.inner.registry.create(entry).map_err(|err| match err {
                SimError::InvalidTopology(msg) => SimError::InvalidTopology(format!(
                    "component {} ({}): {}",
                    index, entry.kind, msg
                )),
                other => other,
            })?;
            component.init();
            components.push(component);
        }

        // Drivers first so gates see the tick's fresh clock levels, then
        // everything else in declaration order.
        let mut order: Vec<ComponentId> = (0..components.len())
            .filter(|&id| components[id].is_driver())
            .collect();
        order.extend((0..components.len()).filter(|&id| !components[id].is_driver()));

        let sim = SimState {
            links: LinkTable::new(config.links),
            components,
            order,
            tick: 0,
            stats: BoardStats::default(),
            tick_interval: Duration::from_micros(config.simulation.tick_interval_us),
            ticks_per_second: 0,
            last_capture: Instant::now(),
            last_capture_tick: 0,
        };

        tracing::info!(
            links = config.links,
            components = config.components.len(),
            "board initialized"
        );

        *self.inner.sim.write() = Some(sim);
        *state = BoardState::Ready;
        Ok(())
    }

    /// Begins continuous stepping on an internal driver thread.
    ///
    /// Fire-and-forget: returns as soon as the thread is spawned. Stepping
    /// is paced by the configured `tick_interval_us` (free-running if 0).
    ///
    /// # Errors
    /// `InvalidState` unless the board is `Ready` (double `start` included).
    pub fn start(&self) -> Result<(), SimError> {
        {
            let mut state = self.inner.state.write();
            if *state != BoardState::Ready {
                return Err(SimError::InvalidState {
                    operation: "start",
                    state: *state,
                });
            }
            *state = BoardState::Running;
        }

        let inner = Arc::clone(&self.inner);
        let handle = thread::spawn(move || driver_loop(inner));
        *self.inner.driver.lock() = Some(handle);

        tracing::info!("board started");
        Ok(())
    }

    /// Stops continuous stepping and joins the driver thread.
    ///
    /// Idempotent: stopping a board that is not running is a no-op. After
    /// `stop`, `status` keeps returning the last committed snapshot.
    pub fn stop(&self) -> Result<(), SimError> {
        {
            let mut state = self.inner.state.write();
            if *state != BoardState::Running {
                return Ok(());
            }
            *state = BoardState::Stopped;
        }

        if let Some(handle) = self.inner.driver.lock().take() {
            let _ = handle.join();
        }

        tracing::info!("board stopped");
        Ok(())
    }

    /// Executes a single tick manually.
    ///
    /// Available in `Ready` for deterministic, externally clocked stepping
    /// (tests, manual-clock tooling). While `Running` the driver thread owns
    /// the timeline and manual stepping is `InvalidState`.
    pub fn step(&self) -> Result<(), SimError> {
        // The state guard is held across the pass; a concurrent `start`
        // cannot hand the timeline to the driver thread mid-step.
        let state = self.inner.state.read();
        if *state != BoardState::Ready {
            return Err(SimError::InvalidState {
                operation: "step",
                state: *state,
            });
        }

        let mut sim = self.inner.sim.write();
        match sim.as_mut() {
            Some(sim) => {
                sim.step();
                Ok(())
            }
            None => Err(SimError::InvalidState {
                operation: "step",
                state: *state,
            }),
        }
    }

    /// Returns a consistent snapshot of the current board state.
    ///
    /// Safe to call concurrently with stepping: the snapshot is taken under
    /// the read lock and always reflects a completed tick.
    ///
    /// # Errors
    /// `InvalidState` before `init`.
    pub fn status(&self) -> Result<StatusSnapshot, SimError> {
        let state = *self.inner.state.read();
        let sim = self.inner.sim.read();
        match sim.as_ref() {
            Some(sim) => Ok(sim.snapshot(state)),
            None => Err(SimError::InvalidState {
                operation: "status",
                state,
            }),
        }
    }

    /// Returns the stepping counters collected so far.
    pub fn stats(&self) -> BoardStats {
        self.inner
            .sim
            .read()
            .as_ref()
            .map(|sim| sim.stats.clone())
            .unwrap_or_default()
    }

    /// Exports board statistics as JSON.
    pub fn export_stats(&self) -> serde_json::Value {
        let state = *self.inner.state.read();
        let sim = self.inner.sim.read();

        match sim.as_ref() {
            Some(sim) => serde_json::json!({
                "board": {
                    "state": state.to_string(),
                    "tick": sim.tick,
                    "ticks_per_second": sim.ticks_per_second,
                    "link_count": sim.links.len(),
                    "component_count": sim.components.len(),
                    "ticks_executed": sim.stats.ticks_executed,
                    "component_evaluations": sim.stats.component_evaluations,
                    "eval_faults": sim.stats.eval_faults,
                }
            }),
            None => serde_json::json!({
                "board": { "state": state.to_string() }
            }),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// The driver loop: steps until the state leaves `Running`.
fn driver_loop(inner: Arc<BoardInner>) {
    loop {
        if *inner.state.read() != BoardState::Running {
            break;
        }

        let interval = {
            let mut sim = inner.sim.write();
            match sim.as_mut() {
                Some(sim) => {
                    sim.step();
                    sim.tick_interval
                }
                None => break,
            }
        };

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    tracing::debug!("driver loop exited");
}
