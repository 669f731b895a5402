//! The link table: shared binary wires connecting components.
//!
//! All cross-component communication goes through this table. Components hold
//! integer link indices rather than references to each other, which sidesteps
//! reference cycles and makes topology validation a plain bounds check.

use crate::error::SimError;
use crate::types::LinkId;

/// A fixed-size table of binary signal levels.
///
/// Created once per board with all links low. The size never changes after
/// construction; every index a component carries has been validated against
/// it at build time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkTable {
    values: Vec<bool>,
}

impl LinkTable {
    /// Creates a table of `len` links, all initialized low.
    pub fn new(len: usize) -> Self {
        Self {
            values: vec![false; len],
        }
    }

    /// Returns the number of links in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the table holds no links.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reads the level of a link.
    pub fn get(&self, index: LinkId) -> Result<bool, SimError> {
        self.values.get(index).copied().ok_or(SimError::OutOfRange {
            index,
            len: self.values.len(),
        })
    }

    /// Writes the level of a link.
    ///
    /// The single value write is the only side effect.
    pub fn set(&mut self, index: LinkId, value: bool) -> Result<(), SimError> {
        let len = self.values.len();
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SimError::OutOfRange { index, len }),
        }
    }

    /// Returns all link levels in index order, for snapshotting.
    pub fn values(&self) -> &[bool] {
        &self.values
    }

    /// Drives every link low again.
    pub fn reset(&mut self) {
        for value in &mut self.values {
            *value = false;
        }
    }
}
