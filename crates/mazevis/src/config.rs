use anyhow::{Context, Result};
use mazevis_core::{Algorithm, TimingConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "mazevis";

pub const MIN_CELL_SIZE: u32 = 8;
pub const MAX_CELL_SIZE: u32 = 128;
pub const DEFAULT_CELL_SIZE: u32 = 48;

const VALID_KEYS: &str = "animation.visit_budget_ms, animation.path_budget_ms, \
    animation.min_step_ms, animation.max_step_ms, animation.hold_ms, \
    animation.algorithms, display.theme, display.cell_size";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnimationConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visit_budget_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_budget_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_step_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_step_ms: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_ms: Option<f64>,

    /// Algorithm keys in cycle order, e.g. `[bfs, dfs]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub algorithms: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_size: Option<u32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    /// The config file, or defaults when it does not exist yet. A file that
    /// exists but cannot be read or parsed is an error.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_existing(&path)
    }

    pub fn load_existing(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path).with_context(|| {
            format!("Config file {} is invalid. Fix or delete it.", path.display())
        })
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `mazevis config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = ?e, "ignoring config file, using defaults");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# mazevis configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "animation.visit_budget_ms" => {
                self.animation_mut().visit_budget_ms = Some(parse_millis(key, value)?);
            }
            "animation.path_budget_ms" => {
                self.animation_mut().path_budget_ms = Some(parse_millis(key, value)?);
            }
            "animation.min_step_ms" => {
                self.animation_mut().min_step_ms = Some(parse_millis(key, value)?);
            }
            "animation.max_step_ms" => {
                self.animation_mut().max_step_ms = Some(parse_millis(key, value)?);
            }
            "animation.hold_ms" => {
                self.animation_mut().hold_ms = Some(parse_millis(key, value)?);
            }
            "animation.algorithms" => {
                let algorithms = parse_algorithm_list(value)?;
                self.animation_mut().algorithms =
                    Some(algorithms.iter().map(|a| a.key().to_string()).collect());
            }
            "display.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.display.get_or_insert_with(DisplayConfig::default).theme =
                    Some(value.to_string());
            }
            "display.cell_size" => {
                let size: u32 = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid cell_size: {value}. Must be a whole number of pixels.")
                })?;
                if !(MIN_CELL_SIZE..=MAX_CELL_SIZE).contains(&size) {
                    anyhow::bail!(
                        "Invalid cell_size: {value}. Must be between {MIN_CELL_SIZE} and {MAX_CELL_SIZE}."
                    );
                }
                self.display.get_or_insert_with(DisplayConfig::default).cell_size = Some(size);
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {VALID_KEYS}"),
        }
        Ok(())
    }

    fn animation_mut(&mut self) -> &mut AnimationConfig {
        self.animation.get_or_insert_with(AnimationConfig::default)
    }

    /// Configured timing on top of the defaults.
    pub fn timing(&self) -> Result<TimingConfig> {
        let mut timing = TimingConfig::default();
        if let Some(a) = &self.animation {
            if let Some(v) = a.visit_budget_ms {
                timing.visit_budget_ms = v;
            }
            if let Some(v) = a.path_budget_ms {
                timing.path_budget_ms = v;
            }
            if let Some(v) = a.min_step_ms {
                timing.min_step_ms = v;
            }
            if let Some(v) = a.max_step_ms {
                timing.max_step_ms = v;
            }
            if let Some(v) = a.hold_ms {
                timing.hold_ms = v;
            }
        }
        timing.validate()?;
        Ok(timing)
    }

    /// Configured algorithm cycle, or every algorithm when unset.
    pub fn algorithms(&self) -> Result<Vec<Algorithm>> {
        let keys = self.animation.as_ref().and_then(|a| a.algorithms.as_ref());
        match keys {
            Some(keys) if !keys.is_empty() => keys
                .iter()
                .map(|k| k.parse::<Algorithm>().map_err(anyhow::Error::msg))
                .collect(),
            _ => Ok(Algorithm::ALL.to_vec()),
        }
    }

    pub fn theme_name(&self) -> &str {
        self.display
            .as_ref()
            .and_then(|d| d.theme.as_deref())
            .unwrap_or("dark")
    }

    pub fn cell_size(&self) -> u32 {
        self.display
            .as_ref()
            .and_then(|d| d.cell_size)
            .unwrap_or(DEFAULT_CELL_SIZE)
            .clamp(MIN_CELL_SIZE, MAX_CELL_SIZE)
    }

    /// The configuration with every default filled in, for `config show`.
    pub fn resolved(&self) -> Result<Self> {
        let timing = self.timing()?;
        let algorithms = self.algorithms()?;
        Ok(Self {
            animation: Some(AnimationConfig {
                visit_budget_ms: Some(timing.visit_budget_ms),
                path_budget_ms: Some(timing.path_budget_ms),
                min_step_ms: Some(timing.min_step_ms),
                max_step_ms: Some(timing.max_step_ms),
                hold_ms: Some(timing.hold_ms),
                algorithms: Some(algorithms.iter().map(|a| a.key().to_string()).collect()),
            }),
            display: Some(DisplayConfig {
                theme: Some(self.theme_name().to_string()),
                cell_size: Some(self.cell_size()),
            }),
        })
    }
}

fn parse_millis(key: &str, value: &str) -> Result<f64> {
    match value.parse::<f64>() {
        Ok(ms) if ms.is_finite() && ms >= 0.0 => Ok(ms),
        _ => anyhow::bail!("Invalid {key}: {value}. Must be a non-negative number of milliseconds."),
    }
}

fn parse_algorithm_list(value: &str) -> Result<Vec<Algorithm>> {
    let algorithms = value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Algorithm>().map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()?;
    if algorithms.is_empty() {
        anyhow::bail!("Invalid algorithms: {value}. Give a comma-separated list such as 'bfs,dfs'.");
    }
    Ok(algorithms)
}
