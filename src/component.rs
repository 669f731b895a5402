//! The `Component` trait: the shared evaluation contract.
//!
//! A component is a unit of logic (a clock or a gate) that reads its input
//! links and drives its output links once per tick. The board never needs to
//! know concrete types, only this capability; new component kinds plug in by
//! implementing the trait and registering a factory.

use crate::error::SimError;
use crate::link::LinkTable;
use crate::types::{LinkId, Tick};

/// The core trait every simulation component implements.
///
/// Components communicate exclusively through the [`LinkTable`]: `evaluate`
/// reads zero or more input links and writes zero or more output links, and
/// nothing else. Any internal state (a clock's phase, a latch's stored bit)
/// lives inside the component and persists across calls until `init` resets
/// it.
pub trait Component: Send + Sync {
    /// Resets internal state before a run.
    ///
    /// Called once while the board is built, before the first tick.
    fn init(&mut self) {}

    /// Evaluates the component for one tick.
    ///
    /// # Arguments
    /// * `tick` - The board tick being executed (1-based)
    /// * `links` - The shared link table to read inputs from and write
    ///   outputs to
    ///
    /// # Errors
    /// Built-in components cannot fail after a validated build; custom
    /// components may report a fault, which the board logs and isolates
    /// without halting the rest of the pass.
    fn evaluate(&mut self, tick: Tick, links: &mut LinkTable) -> Result<(), SimError>;

    /// Returns true if this component originates new information each tick.
    ///
    /// Drivers (clocks) are evaluated before all other components so that
    /// combinational logic in the same pass sees the tick's fresh levels.
    fn is_driver(&self) -> bool {
        false
    }

    /// The input link indices, in declaration order.
    fn input_links(&self) -> &[LinkId];

    /// The output link indices, in declaration order.
    fn output_links(&self) -> &[LinkId];

    /// The configuration type name this component was built from.
    fn type_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal component that counts how often it is evaluated.
    struct ProbeComponent {
        inputs: Vec<LinkId>,
        outputs: Vec<LinkId>,
        evaluations: u64,
    }

    impl Component for ProbeComponent {
        fn init(&mut self) {
            self.evaluations = 0;
        }

        fn evaluate(&mut self, _tick: Tick, _links: &mut LinkTable) -> Result<(), SimError> {
            self.evaluations += 1;
            Ok(())
        }

        fn input_links(&self) -> &[LinkId] {
            &self.inputs
        }

        fn output_links(&self) -> &[LinkId] {
            &self.outputs
        }

        fn type_name(&self) -> &'static str {
            "PROBE"
        }
    }

    #[test]
    fn test_component_trait() {
        let mut probe = ProbeComponent {
            inputs: vec![0],
            outputs: vec![1],
            evaluations: 5,
        };
        let mut links = LinkTable::new(2);

        probe.init();
        assert_eq!(probe.evaluations, 0);

        probe.evaluate(1, &mut links).unwrap();
        assert_eq!(probe.evaluations, 1);

        assert!(!probe.is_driver());
        assert_eq!(probe.input_links(), &[0]);
        assert_eq!(probe.output_links(), &[1]);
        assert_eq!(probe.type_name(), "PROBE");
    }
}
