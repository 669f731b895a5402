//! OR gate component.

use crate::component::Component;
use crate::config::ComponentConfig;
use crate::error::SimError;
use crate::link::LinkTable;
use crate::types::{LinkId, Tick};

/// A logical OR over two or more input links.
///
/// The output is high if any input is high. Stateless, like all
/// combinational gates.
#[derive(Debug)]
pub struct OrGate {
    inputs: Vec<LinkId>,
    outputs: Vec<LinkId>,
}

impl OrGate {
    /// Creates an OR gate.
    ///
    /// # Errors
    /// `InvalidTopology` if fewer than 2 inputs or no outputs are declared.
    pub fn new(inputs: Vec<LinkId>, outputs: Vec<LinkId>) -> Result<Self, SimError> {
        super::check_inputs("OR", &inputs, 2)?;
        super::check_outputs("OR", &outputs)?;
        Ok(Self { inputs, outputs })
    }

    /// Builds an OR gate from its configuration entry.
    pub fn from_config(config: &ComponentConfig) -> Result<Self, SimError> {
        Self::new(config.inputs.clone(), config.outputs.clone())
    }
}

impl Component for OrGate {
    fn evaluate(&mut self, _tick: Tick, links: &mut LinkTable) -> Result<(), SimError> {
        let mut value = false;
        for &input in &self.inputs {
            value |= links.get(input)?;
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
        "OR"
    }
}
