//! Point-in-time status views of a running board.
//!
//! A snapshot is an immutable copy of the link table and per-component output
//! levels, taken under the board's read lock. It always reflects the state
//! after some completed tick, never a value mid-write, though it may be one
//! tick stale by the time the caller looks at it.

use serde::Serialize;

use crate::board::BoardState;
use crate::types::{LinkId, Tick};

/// The observable output levels of one component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ComponentStatus {
    /// The component's configuration type name
    #[serde(rename = "type")]
    pub kind: String,
    /// Current levels of the component's output links, in declaration order
    pub outputs: Vec<bool>,
}

/// A consistent, serializable view of board state at one instant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusSnapshot {
    /// Lifecycle state at capture time
    pub state: BoardState,
    /// Ticks completed since `init`
    pub tick: Tick,
    /// Measured stepping rate, recomputed about once per wall-clock second;
    /// 0 until the first capture window closes
    pub ticks_per_second: u64,
    /// Level of every link, indexed `0..links`
    pub links: Vec<bool>,
    /// Per-component output levels, in declaration order
    pub components: Vec<ComponentStatus>,
}

impl StatusSnapshot {
    /// Returns the level of one link, or `None` if the index is out of range.
    pub fn link(&self, index: LinkId) -> Option<bool> {
        self.links.get(index).copied()
    }

    /// Serializes the snapshot to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
