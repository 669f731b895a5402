//! AND gate component.

use crate::component::Component;
use crate::config::ComponentConfig;
use crate::error::SimError;
use crate::link::LinkTable;
use crate::types::{LinkId, Tick};

/// A logical AND over two or more input links.
///
/// The output is high only if every input is high, and is written to all
/// declared output links. Pure function of the current link levels; no
/// internal state.
#[derive(Debug)]
pub struct AndGate {
    inputs: Vec<LinkId>,
    outputs: Vec<LinkId>,
}

impl AndGate {
    /// Creates an AND gate.
    ///
    /// # Errors
    /// `InvalidTopology` if fewer than 2 inputs or no outputs are declared.
    pub fn new(inputs: Vec<LinkId>, outputs: Vec<LinkId>) -> Result<Self, SimError> {
        super::check_inputs("AND", &inputs, 2)?;
        super::check_outputs("AND", &outputs)?;
        Ok(Self { inputs, outputs })
    }

    /// Builds an AND gate from its configuration entry.
    pub fn from_config(config: &ComponentConfig) -> Result<Self, SimError> {
        Self::new(config.inputs.clone(), config.outputs.clone())
    }
}

impl Component for AndGate {
    fn evaluate(&mut self, _tick: Tick, links: &mut LinkTable) -> Result<(), SimError> {
        let mut value = true;
        for &input in &self.inputs {
            value &= links.get(input)?;
        }
        for &output in &self.outputs {
            links.set(output, value)?;
        }
        Ok(())
    }

    fn input_links(&self) -> &[LinkId] {
        &self.inputs
    }

    fn output_links(&self) -> &[LinkId] {
        &self.outputs
    }

    fn type_name(&self) -> &'static str {
        "AND"
    }
}
