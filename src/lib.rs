//! # Bitgrid Logic Simulator
//!
//! A discrete-tick digital logic simulator. Clocked and combinational
//! components are coupled exclusively through a fixed table of shared wires
//! ("links"); a board advances them over discrete ticks and exposes a
//! consistent, queryable snapshot of circuit state.
//!
//! ## Design Principles
//!
//! - **Link-Coupled**: components never hold references to each other; all
//!   communication goes through integer-indexed links, which makes topology
//!   validation a plain bounds check and rules out reference cycles.
//! - **Validated Once**: link bounds and gate arities are checked at `init`,
//!   never per tick. A successful `init` means the run cannot hit a bounds
//!   error.
//! - **Fixed Evaluation Order**: each tick is one pass — clocks first, then
//!   all other components in declaration order. Combinational chains settle
//!   across ticks, not within one.
//! - **Snapshot Reads**: `status()` runs concurrently with stepping and
//!   always observes a completed tick, never a torn link table.
//!
//! ## Quick Start
//!
//! ```rust
//! use bitgrid::{Board, BoardConfig};
//!
//! let config = BoardConfig::from_json(r#"{
//!     "links": 3,
//!     "components": [
//!         { "type": "CLK", "CLK_Speed": 1, "inputs": [1], "outputs": [0] },
//!         { "type": "AND", "inputs": [0, 1], "outputs": [2] }
//!     ]
//! }"#).unwrap();
//!
//! let board = Board::new();
//! board.init(&config).unwrap();
//!
//! board.step().unwrap();
//! let status = board.status().unwrap();
//! assert_eq!(status.link(0), Some(true));
//! ```
//!
//! ## Continuous Stepping
//!
//! ```rust,ignore
//! board.start()?;                    // internal driver thread
//! let status = board.status()?;      // poll concurrently
//! println!("{}", status.to_json()?);
//! board.stop()?;                     // idempotent
//! ```
//!
//! ## Custom Components
//!
//! New component kinds implement [`component::Component`] and register a
//! factory in a [`registry::ComponentRegistry`]; the board only ever sees
//! the trait.

pub mod board;
pub mod component;
pub mod components;
pub mod config;
pub mod error;
pub mod link;
pub mod registry;
pub mod snapshot;
pub mod types;

// Re-export commonly used types
pub use board::{Board, BoardState, BoardStats};
pub use component::Component;
pub use components::{AndGate, Clock, NotGate, OrGate, XorGate};
pub use config::{BoardConfig, ComponentConfig, ConfigError, SimulationParams};
pub use error::{SimError, SimResult};
pub use link::LinkTable;
pub use registry::{default_registry, ComponentRegistry};
pub use snapshot::{ComponentStatus, StatusSnapshot};
pub use types::{ComponentId, LinkId, Tick};

/// Initialize the tracing subscriber for logging.
///
/// Call this at the start of your program to enable logging.
///
/// # Example
///
/// ```rust,ignore
/// bitgrid::init_logging("info");
/// ```
pub fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
