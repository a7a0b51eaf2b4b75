use anyhow::ensure;
use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tracing::{error, info};

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Settings for the walkthrough, loaded from `config/default.toml`.
///
/// Every field has a default matching the classic demo values, so a partial
/// file only needs to name the settings it overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub walkthrough: WalkthroughSettings,
    pub numbers: NumberSettings,
    pub point: PointSettings,
    pub random: RandomSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalkthroughSettings {
    /// How many numbered lines the greeting loop prints.
    pub loop_iterations: u32,
    /// Prompt shown before reading the user's name.
    pub name_prompt: String,
    /// Longest accepted name, in characters. Longer input is truncated.
    pub max_name_len: usize,
    /// Color label highlighted at the end of the palette tour.
    pub favorite_color: String,
}

impl Default for WalkthroughSettings {
    fn default() -> Self {
        Self {
            loop_iterations: 5,
            name_prompt: "Enter your name: ".to_string(),
            max_name_len: 64,
            favorite_color: "green".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NumberSettings {
    pub first: i64,
    pub second: i64,
    pub converge_start: i64,
    pub converge_target: i64,
    pub values: Vec<i64>,
    pub factorial_of: u64,
    pub gcd_first: u64,
    pub gcd_second: u64,
    pub dividend: f64,
    pub divisor: f64,
}

impl Default for NumberSettings {
    fn default() -> Self {
        Self {
            first: 10,
            second: 5,
            converge_start: 3,
            converge_target: 7,
            values: vec![1, 2, 3, 4, 5],
            factorial_of: 5,
            gcd_first: 12,
            gcd_second: 18,
            dividend: 10.0,
            divisor: 4.0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PointSettings {
    pub x: i32,
    pub y: i32,
}

impl Default for PointSettings {
    fn default() -> Self {
        Self { x: 3, y: 7 }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RandomSettings {
    /// How many values the random step prints.
    pub count: usize,
    /// Exclusive upper bound for every printed value.
    pub upper_bound: u32,
    /// Fixed seed for reproducible runs. Unset means OS entropy.
    pub seed: Option<u64>,
}

impl Default for RandomSettings {
    fn default() -> Self {
        Self {
            count: 5,
            upper_bound: 100,
            seed: None,
        }
    }
}

impl Settings {
    /// Rejects settings no walkthrough step could act on.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.walkthrough.name_prompt.is_empty(),
            "walkthrough.name_prompt must not be empty"
        );
        ensure!(
            self.walkthrough.max_name_len >= 1,
            "walkthrough.max_name_len must be at least 1"
        );
        ensure!(
            self.random.count <= 10_000,
            "random.count must be at most 10000"
        );
        ensure!(
            self.random.upper_bound >= 1,
            "random.upper_bound must be at least 1"
        );
        Ok(())
    }
}

pub fn load_settings() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
