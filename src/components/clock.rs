//! Clock component: the source of new information on a board.
//!
//! A clock toggles its level every `speed` ticks and drives that level onto
//! its output links. Everything else on a board is combinational logic
//! reacting to clock edges.

use crate::component::Component;
use crate::config::ComponentConfig;
use crate::error::SimError;
use crate::link::LinkTable;
use crate::types::{LinkId, Tick};

/// A clock with a configurable toggle period.
///
/// With `speed = 1` the level toggles on every tick; with `speed = N` it
/// changes only every N ticks. The phase counter and current level persist
/// across ticks and are reset by `init`.
///
/// Declared `inputs` are bounds-validated like any other index list but are
/// otherwise unused: they are reserved for a future enable/reset extension
/// and carry no hidden semantic today.
///
/// # Example
///
/// ```rust
/// use bitgrid::components::Clock;
/// use bitgrid::component::Component;
/// use bitgrid::link::LinkTable;
///
/// let mut clock = Clock::new(1, vec![], vec![0]).unwrap();
/// let mut links = LinkTable::new(1);
///
/// clock.evaluate(1, &mut links).unwrap();
/// assert_eq!(links.get(0).unwrap(), true);
///
/// clock.evaluate(2, &mut links).unwrap();
/// assert_eq!(links.get(0).unwrap(), false);
/// ```
#[derive(Debug)]
pub struct Clock {
    speed: u64,
    inputs: Vec<LinkId>,
    outputs: Vec<LinkId>,
    ticks: Tick,
    level: bool,
}

impl Clock {
    /// Creates a clock toggling every `speed` ticks.
    ///
    /// # Errors
    /// `InvalidTopology` if `speed` is zero or no output link is declared.
    pub fn new(speed: u64, inputs: Vec<LinkId>, outputs: Vec<LinkId>) -> Result<Self, SimError> {
        if speed == 0 {
            return Err(SimError::InvalidTopology(
                "CLK_Speed must be a positive tick count".to_string(),
            ));
        }
        super::check_outputs("CLK", &outputs)?;

        Ok(Self {
            speed,
            inputs,
            outputs,
            ticks: 0,
            level: false,
        })
    }

    /// Builds a clock from its configuration entry.
    ///
    /// # Errors
    /// `InvalidTopology` if `CLK_Speed` is missing or invalid.
    pub fn from_config(config: &ComponentConfig) -> Result<Self, SimError> {
        let speed = config.clk_speed.ok_or_else(|| {
            SimError::InvalidTopology("CLK component requires a CLK_Speed parameter".to_string())
        })?;
        Self::new(speed, config.inputs.clone(), config.outputs.clone())
    }

    /// Returns the configured toggle period in ticks.
    pub fn speed(&self) -> u64 {
        self.speed
    }

    /// Returns the current output level.
    pub fn level(&self) -> bool {
        self.level
    }
}

impl Component for Clock {
    fn init(&mut self) {
        self.ticks = 0;
        self.level = false;
    }

    fn evaluate(&mut self, _tick: Tick, links: &mut LinkTable) -> Result<(), SimError> {
        self.ticks += 1;
        if self.ticks % self.speed == 0 {
            self.level = !self.level;
        }
        for &out in &self.outputs {
            links.set(out, self.level)?;
        }
        Ok(())
    }

    fn is_driver(&self) -> bool {
        true
    }

    fn input_links(&self) -> &[LinkId] {
        &self.inputs
    }

    fn output_links(&self) -> &[LinkId] {
        &self.outputs
    }

    fn type_name(&self) -> &'static str {
        "CLK"
    }
}
