//! Built-in component implementations.
//!
//! One module per component kind. All of them implement the same
//! [`Component`](crate::component::Component) contract; the board picks them
//! up through the [`registry`](crate::registry) by their configuration type
//! name (`CLK`, `AND`, `OR`, `XOR`, `NOT`).

pub mod and;
pub mod clock;
pub mod not;
pub mod or;
pub mod xor;

pub use and::AndGate;
pub use clock::Clock;
pub use not::NotGate;
pub use or::OrGate;
pub use xor::XorGate;

use crate::error::SimError;
use crate::types::LinkId;

/// Checks a gate's declared input count against its minimum arity.
pub(crate) fn check_inputs(kind: &str, inputs: &[LinkId], min: usize) -> Result<(), SimError> {
    if inputs.len() < min {
        return Err(SimError::InvalidTopology(format!(
            "{} gate needs at least {} input link(s), got {}",
            kind,
            min,
            inputs.len()
        )));
    }
    Ok(())
}

/// Checks that a component declares at least one output link.
pub(crate) fn check_outputs(kind: &str, outputs: &[LinkId]) -> Result<(), SimError> {
    if outputs.is_empty() {
        return Err(SimError::InvalidTopology(format!(
            "{} component needs at least one output link",
            kind
        )));
    }
    Ok(())
}
