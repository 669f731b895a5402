//! Component factory registry for configuration-driven board building.
//!
//! The registry maps the `type` string of a configuration entry to a factory
//! that builds the component. New component kinds are added by registering a
//! factory, never by editing the board's dispatch.
//!
//! # Example
//!
//! ```
//! use bitgrid::registry::ComponentRegistry;
//! use bitgrid::component::Component;
//! use bitgrid::components::NotGate;
//! use bitgrid::config::ComponentConfig;
//!
//! let mut registry = ComponentRegistry::new();
//! registry.register("INV", |config| {
//!     Ok(Box::new(NotGate::from_config(config)?))
//! });
//!
//! let entry = ComponentConfig::new("INV", vec![0], vec![1]);
//! let component = registry.create(&entry).unwrap();
//! assert_eq!(component.type_name(), "NOT");
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::component::Component;
use crate::components::{AndGate, Clock, NotGate, OrGate, XorGate};
use crate::config::ComponentConfig;
use crate::error::SimError;

/// Type alias for component factory functions.
pub type ComponentFactory =
    Arc<dyn Fn(&ComponentConfig) -> Result<Box<dyn Component>, SimError> + Send + Sync>;

/// A registry of component factories keyed by type name.
#[derive(Default)]
pub struct ComponentRegistry {
    factories: HashMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component factory with the given type name.
    ///
    /// # Arguments
    /// * `name` - The `type` string to match in configuration entries
    /// * `factory` - A function that builds the component, applying its own
    ///   arity checks
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&ComponentConfig) -> Result<Box<dyn Component>, SimError> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
    }

    /// Builds a component from its configuration entry.
    ///
    /// # Errors
    /// `InvalidTopology` if the type is not registered or the factory's own
    /// validation fails.
    pub fn create(&self, config: &ComponentConfig) -> Result<Box<dyn Component>, SimError> {
        match self.factories.get(&config.kind) {
            Some(factory) => factory(config),
            None => Err(SimError::InvalidTopology(format!(
                "component type '{}' is not registered",
                config.kind
            ))),
        }
    }

    /// Returns true if a type is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Returns true if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Returns an iterator over registered type names.
    pub fn type_names(&self) -> impl Iterator<Item = &String> {
        self.factories.keys()
    }
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("registered_types", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Creates a registry with the built-in component types.
///
/// Includes:
/// - `CLK` - Clock
/// - `AND` - AndGate
/// - `OR` - OrGate
/// - `XOR` - XorGate
/// - `NOT` - NotGate
pub fn default_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();

    registry.register("CLK", |config| Ok(Box::new(Clock::from_config(config)?)));
    registry.register("AND", |config| Ok(Box::new(AndGate::from_config(config)?)));
    registry.register("OR", |config| Ok(Box::new(OrGate::from_config(config)?)));
    registry.register("XOR", |config| Ok(Box::new(XorGate::from_config(config)?)));
    registry.register("NOT", |config| Ok(Box::new(NotGate::from_config(config)?)));

    registry
}
