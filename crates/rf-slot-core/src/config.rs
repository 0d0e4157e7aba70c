//! Slot engine configuration
//!
//! Reel strips, the multiplier table and paylines are plain data. They can be
//! written in JSON or YAML:
//!
//! ```yaml
//! reels:
//!   - [A, A, K, "10", K, J]
//!   - [Q, Q, J, "10", X, X]
//! multipliers: { A: 20, K: 15, Q: 10, J: 5, "10": 2, X: 0 }
//! patterns:
//!   - [{ row: 1, col: 0 }, { row: 1, col: 1 }]
//! wild: X
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::SlotEngine;
use crate::error::SlotError;
use crate::grid::GridShape;
use crate::paytable::{LinePayTable, Pattern};
use crate::reel::{Reel, StripReel, WINDOW_SIZE};
use crate::rng::SharedRng;
use crate::symbols::{Symbol, WILD_SYMBOL, symbols};

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Slot(#[from] SlotError),
}

fn default_wild() -> Symbol {
    Symbol::from(WILD_SYMBOL)
}

/// Complete slot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    /// One strip per reel, left to right
    pub reels: Vec<Vec<Symbol>>,
    /// Payout multiplier per symbol (unmapped symbols pay 0)
    #[serde(default)]
    pub multipliers: BTreeMap<Symbol, f64>,
    /// Paylines
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    /// Wild token
    #[serde(default = "default_wild")]
    pub wild: Symbol,
}

impl SlotConfig {
    /// Stock 4-reel card game with a single middle line
    pub fn classic() -> Self {
        let multipliers = [("A", 20.0), ("K", 15.0), ("Q", 10.0), ("J", 5.0), ("10", 2.0), ("X", 0.0)]
            .into_iter()
            .map(|(s, m)| (Symbol::from(s), m))
            .collect();

        Self {
            reels: vec![
                symbols(&["A", "A", "K", "10", "K", "J"]),
                symbols(&["Q", "Q", "J", "10", "X", "X"]),
                symbols(&["A", "K", "Q", "10", "J", "X"]),
                symbols(&["A", "K", "Q", "10", "J", "J"]),
            ],
            multipliers,
            patterns: vec![Pattern::straight(1, 4)],
            wild: default_wild(),
        }
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text)?,
            Some("yaml" | "yml") => Self::from_yaml(&text)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or_default().to_string(),
                ));
            }
        };

        log::info!(
            "Loaded slot config from {:?}: {} reels, {} patterns",
            path,
            config.reels.len(),
            config.patterns.len()
        );
        Ok(config)
    }

    /// Export as JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Export as YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yml::to_string(self)?)
    }

    /// Grid shape an engine built from this config will have
    pub fn shape(&self) -> GridShape {
        GridShape::new(WINDOW_SIZE, self.reels.len())
    }

    /// Build the pay table
    pub fn build_paytable(&self) -> Result<LinePayTable, SlotError> {
        let paytable = LinePayTable::new(
            self.multipliers.iter().map(|(s, &m)| (s.clone(), m)),
            self.patterns.clone(),
        )?;
        Ok(paytable.with_wild(self.wild.clone()))
    }

    /// Build an engine whose reels all draw from `rng`
    ///
    /// Strips shorter than the window are accepted here and fail on spin.
    pub fn build_engine(&self, rng: SharedRng) -> Result<SlotEngine, SlotError> {
        for (reel_index, strip) in self.reels.iter().enumerate() {
            if strip.len() < WINDOW_SIZE {
                log::warn!(
                    "Reel {} has {} symbols; every spin on it will fail",
                    reel_index,
                    strip.len()
                );
            }
        }

        let reels: Vec<Box<dyn Reel>> = self
            .reels
            .iter()
            .map(|strip| Box::new(StripReel::new(strip.clone(), rng.clone())) as Box<dyn Reel>)
            .collect();

        SlotEngine::new(reels, self.build_paytable()?)
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlotErrorKind;
    use crate::grid::Coordinate;

    #[test]
    fn test_classic_config() {
        let config = SlotConfig::classic();
        assert_eq!(config.shape(), GridShape::new(3, 4));
        assert_eq!(config.multipliers[&Symbol::from("A")], 20.0);
        assert_eq!(config.wild, Symbol::wild());

        let engine = config.build_engine(SharedRng::seeded(1)).unwrap();
        assert_eq!(engine.reel_count(), 4);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SlotConfig::classic();
        let json = config.to_json().unwrap();
        assert_eq!(SlotConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_yaml_config() {
        let yaml = r#"
reels:
  - [A, K, Q, "10"]
  - [A, K, Q, "10"]
multipliers: { A: 20, K: 15 }
patterns:
  - [{ row: 0, col: 0 }, { row: 1, col: 1 }]
"#;
        let config = SlotConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.reels[0][3], "10");
        assert_eq!(config.wild, Symbol::wild());
        assert_eq!(
            config.patterns[0].coordinates(),
            &[Coordinate::new(0, 0), Coordinate::new(1, 1)]
        );
        assert_eq!(config.shape(), GridShape::new(3, 2));
    }

    #[test]
    fn test_invalid_json() {
        let err = SlotConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_pattern_outside_grid_fails_build() {
        let mut config = SlotConfig::classic();
        config.patterns.push(Pattern::new(vec![Coordinate::new(3, 0)]));

        let err = config.build_engine(SharedRng::seeded(1)).unwrap_err();
        assert_eq!(err.kind(), SlotErrorKind::InvalidPattern);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("slot.json");
        std::fs::write(&json_path, SlotConfig::classic().to_json().unwrap()).unwrap();
        assert_eq!(SlotConfig::load(&json_path).unwrap(), SlotConfig::classic());

        let yaml_path = dir.path().join("slot.yml");
        std::fs::write(&yaml_path, SlotConfig::classic().to_yaml().unwrap()).unwrap();
        assert_eq!(SlotConfig::load(&yaml_path).unwrap(), SlotConfig::classic());

        let txt_path = dir.path().join("slot.txt");
        std::fs::write(&txt_path, "").unwrap();
        assert!(matches!(
            SlotConfig::load(&txt_path),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }
}
