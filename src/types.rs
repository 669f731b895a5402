//! Core type definitions for the simulation core.
//!
//! This module defines the fundamental types used throughout the engine.

/// Index of a link (shared wire) in the board's link table.
///
/// Links are the only communication medium between components: a component
/// never addresses another component by identity, only by the links they
/// share.
pub type LinkId = usize;

/// Index of a component in the board's component collection.
///
/// Components are stored in declaration order; the index doubles as a stable
/// identifier in snapshots and statistics.
pub type ComponentId = usize;

/// Discrete simulation time, counted in ticks since `init`.
///
/// One tick is one full evaluation pass over all components.
pub type Tick = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_aliases() {
        let link: LinkId = 2;
        let component: ComponentId = 0;
        let tick: Tick = 1000;

        assert_eq!(link, 2);
        assert_eq!(component, 0);
        assert_eq!(tick, 1000);
    }
}
