//! Configuration model for a board.
//!
//! A board is described declaratively by a link count and an ordered list of
//! component entries. JSON is the primary format (matching the external
//! interface); YAML is accepted as well.
//!
//! # Configuration File Structure
//!
//! ```json
//! {
//!     "links": 3,
//!     "components": [
//!         { "type": "CLK", "CLK_Speed": 1, "inputs": [1], "outputs": [0] },
//!         { "type": "AND", "inputs": [0, 1], "outputs": [2] }
//!     ]
//! }
//! ```
//!
//! The optional `simulation` section tunes the driver loop:
//!
//! ```json
//! { "simulation": { "tick_interval_us": 1000 }, "links": 1, "components": [] }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::types::LinkId;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown file format: {0}")]
    UnknownFormat(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Driver-loop parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Wall-clock pause between ticks in microseconds; 0 means free-running.
    #[serde(default = "default_tick_interval_us")]
    pub tick_interval_us: u64,

    /// Logging level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tick_interval_us() -> u64 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            tick_interval_us: default_tick_interval_us(),
            log_level: default_log_level(),
        }
    }
}

/// One entry in the component list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ComponentConfig {
    /// Component type name (`CLK`, `AND`, `OR`, `XOR`, `NOT`, or a
    /// registered custom type)
    #[serde(rename = "type")]
    pub kind: String,

    /// Clock toggle period in ticks (required for `CLK`)
    #[serde(rename = "CLK_Speed", default, skip_serializing_if = "Option::is_none")]
    pub clk_speed: Option<u64>,

    /// Input link indices, in declaration order
    #[serde(default)]
    pub inputs: Vec<LinkId>,

    /// Output link indices, in declaration order
    #[serde(default)]
    pub outputs: Vec<LinkId>,

    /// Additional parameters for custom component types
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl ComponentConfig {
    /// Creates an entry with the given type name and wiring.
    pub fn new(kind: impl Into<String>, inputs: Vec<LinkId>, outputs: Vec<LinkId>) -> Self {
        Self {
            kind: kind.into(),
            clk_speed: None,
            inputs,
            outputs,
            extra: HashMap::new(),
        }
    }

    /// Sets the clock speed parameter.
    pub fn with_clk_speed(mut self, speed: u64) -> Self {
        self.clk_speed = Some(speed);
        self
    }
}

/// Complete description of a board: link count plus component list.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Driver-loop parameters
    #[serde(default)]
    pub simulation: SimulationParams,

    /// Total number of distinct links (wires)
    pub links: usize,

    /// Component entries, in declaration order
    #[serde(default)]
    pub components: Vec<ComponentConfig>,
}

impl BoardConfig {
    /// Creates a configuration with the given link count and no components.
    pub fn new(links: usize) -> Self {
        Self {
            simulation: SimulationParams::default(),
            links,
            components: Vec::new(),
        }
    }

    /// Appends a component entry.
    pub fn with_component(mut self, component: ComponentConfig) -> Self {
        self.components.push(component);
        self
    }

    /// Loads configuration from a JSON string.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: BoardConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Loads configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> ConfigResult<Self> {
        let config: BoardConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Loads configuration from a file, auto-detecting format.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Self::from_yaml_file(path),
            "json" => Self::from_json_file(path),
            _ => Err(ConfigError::UnknownFormat(ext.to_string())),
        }
    }

    /// Validates link bounds for every component.
    ///
    /// This is the single gate that makes `OutOfRange` unreachable at
    /// runtime: every index any component carries is checked here, once.
    /// Type-specific arity rules are enforced by the component constructors
    /// during the board build.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.links == 0 {
            return Err(ConfigError::Validation(
                "board needs at least one link".to_string(),
            ));
        }

        for (index, component) in self.components.iter().enumerate() {
            if component.kind.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "component {} has no type",
                    index
                )));
            }
            for &link in component.inputs.iter().chain(component.outputs.iter()) {
                if link >= self.links {
                    return Err(ConfigError::Validation(format!(
                        "component {} ({}) references link {} but the board has only {} links",
                        index, component.kind, link, self.links
                    )));
                }
            }
        }

        Ok(())
    }

    /// Converts to JSON string.
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Converts to YAML string.
    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Returns the number of component entries.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The sample document the simulator was originally driven with.
    const SAMPLE: &str = r#"{
        "links": 3,
        "components": [
            { "type": "CLK", "CLK_Speed": 1, "inputs": [1], "outputs": [0] },
            { "type": "AND", "inputs": [0, 1], "outputs": [2] },
            { "type": "AND", "inputs": [0, 1], "outputs": [2] }
        ]
    }"#;

    #[test]
    fn test_sample_document_parses() {
        let config = BoardConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.links, 3);
        assert_eq!(config.component_count(), 3);
        assert_eq!(config.components[0].kind, "CLK");
        assert_eq!(config.components[0].clk_speed, Some(1));
        assert_eq!(config.components[1].inputs, vec![0, 1]);
        assert_eq!(config.components[1].outputs, vec![2]);
    }

    #[test]
    fn test_defaults_apply() {
        let config = BoardConfig::from_json(r#"{ "links": 1, "components": [] }"#).unwrap();
        assert_eq!(config.simulation.tick_interval_us, 1000);
        assert_eq!(config.simulation.log_level, "info");
    }

    #[test]
    fn test_validation_rejects_zero_links() {
        let result = BoardConfig::from_json(r#"{ "links": 0, "components": [] }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rejects_out_of_range_link() {
        let json = r#"{
            "links": 2,
            "components": [
                { "type": "AND", "inputs": [0, 5], "outputs": [1] }
            ]
        }"#;
        let err = BoardConfig::from_json(json).unwrap_err();
        assert!(err.to_string().contains("link 5"));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r#"
links: 2
components:
  - type: CLK
    CLK_Speed: 4
    outputs: [0]
  - type: NOT
    inputs: [0]
    outputs: [1]
"#;
        let config = BoardConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.links, 2);
        assert_eq!(config.components[0].clk_speed, Some(4));
        assert_eq!(config.components[1].kind, "NOT");
    }

    #[test]
    fn test_extra_parameters_survive() {
        let json = r#"{
            "links": 2,
            "components": [
                { "type": "ROM", "inputs": [0], "outputs": [1], "ROM_Image": "boot" }
            ]
        }"#;
        let config = BoardConfig::from_json(json).unwrap();
        assert_eq!(
            config.components[0].extra.get("ROM_Image"),
            Some(&serde_json::json!("boot"))
        );
    }

    #[test]
    fn test_builder_roundtrip() {
        let config = BoardConfig::new(3)
            .with_component(ComponentConfig::new("CLK", vec![], vec![0]).with_clk_speed(1))
            .with_component(ComponentConfig::new("AND", vec![0, 1], vec![2]));

        let json = config.to_json().unwrap();
        let restored = BoardConfig::from_json(&json).unwrap();
        assert_eq!(restored.links, 3);
        assert_eq!(restored.component_count(), 2);
        assert_eq!(restored.components[0].clk_speed, Some(1));
    }

    #[test]
    fn test_unknown_format() {
        let result = BoardConfig::from_file("board.toml");
        assert!(matches!(result, Err(ConfigError::UnknownFormat(_))));
    }
}
