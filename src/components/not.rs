//! NOT gate (inverter) component.

use crate::component::Component;
use crate::config::ComponentConfig;
use crate::error::SimError;
use crate::link::LinkTable;
use crate::types::{LinkId, Tick};

/// A logical inverter over exactly one input link.
#[derive(Debug)]
pub struct NotGate {
    inputs: Vec<LinkId>,
    outputs: Vec<LinkId>,
}

impl NotGate {
    /// Creates a NOT gate.
    ///
    /// # Errors
    /// `InvalidTopology` unless exactly one input and at least one output
    /// are declared.
    pub fn new(inputs: Vec<LinkId>, outputs: Vec<LinkId>) -> Result<Self, SimError> {
        if inputs.len() != 1 {
            return Err(SimError::InvalidTopology(format!(
                "NOT gate needs exactly 1 input link, got {}",
                inputs.len()
            )));
        }
        super::check_outputs("NOT", &outputs)?;
        Ok(Self { inputs, outputs })
    }

    /// Builds a NOT gate from its configuration entry.
    pub fn from_config(config: &ComponentConfig) -> Result<Self, SimError> {
        Self::new(config.inputs.clone(), config.outputs.clone())
    }
}

impl Component for NotGate {
    fn evaluate(&mut self, _tick: Tick, links: &mut LinkTable) -> Result<(), SimError> {
        let value = !links.get(self.inputs[0])?;
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
        "NOT"
    }
}
