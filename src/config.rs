//! Configuration loading for VyuhaMaze

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VyuhaError};
use crate::generate::GeneratorConfig;
use crate::search::{Heuristic, SearchConfig};

/// Main configuration structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VyuhaConfig {
    /// Grid dimensions and endpoints
    #[serde(default)]
    pub grid: GridSection,
    /// Maze generation settings
    #[serde(default)]
    pub generator: GeneratorSection,
    /// Search engine settings
    #[serde(default)]
    pub search: SearchSection,
}

/// Grid dimensions and endpoints
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GridSection {
    /// Grid dimension N; the maze is N x N cells (default: 40)
    #[serde(default = "default_size")]
    pub size: usize,

    /// Start cell as [row, col] (default: top-left corner)
    #[serde(default)]
    pub start: Option<[usize; 2]>,

    /// Goal cell as [row, col] (default: bottom-right corner)
    #[serde(default)]
    pub goal: Option<[usize; 2]>,
}

/// Maze generation settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GeneratorSection {
    /// Parallel carve workers (default: 4)
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Minimum boundary links per adjacent section pair (default: 1)
    #[serde(default = "default_stitch_min")]
    pub stitch_min: usize,

    /// Maximum boundary links per adjacent section pair (default: 3)
    #[serde(default = "default_stitch_max")]
    pub stitch_max: usize,

    /// Random seed; 0 = entropy-based, non-deterministic (default: 0)
    #[serde(default)]
    pub seed: u64,

    /// Carve repair links until the maze is fully connected (default: true)
    #[serde(default = "default_repair")]
    pub repair_connectivity: bool,
}

/// Search engine settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchSection {
    /// Frontier pops per turn before yielding to the observer (default: 64)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Heuristic name: "manhattan" or "diagonal-adjusted" (default: "manhattan")
    #[serde(default = "default_heuristic")]
    pub heuristic: String,

    /// Manhattan weight for the diagonal-adjusted heuristic (default: 1.0)
    #[serde(default = "default_diagonal_weight")]
    pub diagonal_weight: f32,
}

// Default value functions
fn default_size() -> usize {
    40
}
fn default_workers() -> usize {
    4
}
fn default_stitch_min() -> usize {
    1
}
fn default_stitch_max() -> usize {
    3
}
fn default_repair() -> bool {
    true
}
fn default_batch_size() -> usize {
    64
}
fn default_heuristic() -> String {
    "manhattan".to_string()
}
fn default_diagonal_weight() -> f32 {
    1.0
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            size: default_size(),
            start: None,
            goal: None,
        }
    }
}

impl Default for GeneratorSection {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            stitch_min: default_stitch_min(),
            stitch_max: default_stitch_max(),
            seed: 0,
            repair_connectivity: default_repair(),
        }
    }
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            heuristic: default_heuristic(),
            diagonal_weight: default_diagonal_weight(),
        }
    }
}

impl VyuhaConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VyuhaError::Config(format!("Failed to read config file: {}", e)))?;
        let config: VyuhaConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

impl GeneratorSection {
    /// Convert to GeneratorConfig
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            workers: self.workers,
            stitch_min: self.stitch_min,
            stitch_max: self.stitch_max,
            seed: self.seed,
            repair_connectivity: self.repair_connectivity,
        }
    }
}

impl SearchSection {
    /// Convert to SearchConfig; rejects unknown heuristic names
    pub fn to_search_config(&self) -> Result<SearchConfig> {
        let heuristic = match self.heuristic.as_str() {
            "manhattan" => Heuristic::Manhattan,
            "diagonal-adjusted" => Heuristic::DiagonalAdjusted {
                weight: self.diagonal_weight,
            },
            other => {
                return Err(VyuhaError::Config(format!(
                    "unknown heuristic '{other}' (expected 'manhattan' or 'diagonal-adjusted')"
                )))
            }
        };
        Ok(SearchConfig {
            batch_size: self.batch_size,
            heuristic,
        })
    }
}
