use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    action::Action,
    plant::{Plant, ResourceDelta},
    weather::Weather,
};

fn default_initial() -> InitialStock {
    InitialStock {
        water: 50,
        energy: 50,
        growth: 0,
    }
}

fn default_grow() -> ResourceDelta {
    ResourceDelta::new(-2, -1, 1)
}

fn default_wait() -> ResourceDelta {
    ResourceDelta::new(-1, 0, 0)
}

fn default_bloom_penalty() -> ResourceDelta {
    ResourceDelta::new(-1, -1, 0)
}

fn default_invalid_penalty() -> ResourceDelta {
    ResourceDelta::new(0, -1, 0)
}

fn default_bloom_threshold() -> u32 {
    10
}

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("rules validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitialStock {
    pub water: i32,
    pub energy: i32,
    pub growth: u32,
}

impl Default for InitialStock {
    fn default() -> Self {
        default_initial()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherEffects {
    pub sunny: ResourceDelta,
    pub rainy: ResourceDelta,
    pub cloudy: ResourceDelta,
}

impl Default for WeatherEffects {
    fn default() -> Self {
        Self {
            sunny: ResourceDelta::new(0, 2, 0),
            rainy: ResourceDelta::new(2, 0, 0),
            cloudy: ResourceDelta::NONE,
        }
    }
}

impl WeatherEffects {
    pub fn effect(&self, weather: Weather) -> ResourceDelta {
        match weather {
            Weather::Sunny => self.sunny,
            Weather::Rainy => self.rainy,
            Weather::Cloudy => self.cloudy,
        }
    }
}

/// Every numeric constant of a game, plus how strictly actions are matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rules {
    #[serde(default = "default_initial")]
    pub initial: InitialStock,
    #[serde(default = "default_grow")]
    pub grow: ResourceDelta,
    #[serde(default = "default_wait")]
    pub wait: ResourceDelta,
    #[serde(default = "default_bloom_penalty")]
    pub bloom_penalty: ResourceDelta,
    #[serde(default = "default_invalid_penalty")]
    pub invalid_penalty: ResourceDelta,
    #[serde(default = "default_bloom_threshold")]
    pub bloom_threshold: u32,
    #[serde(default)]
    pub weather: WeatherEffects,
    #[serde(default)]
    pub min_resource: i32,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            initial: default_initial(),
            grow: default_grow(),
            wait: default_wait(),
            bloom_penalty: default_bloom_penalty(),
            invalid_penalty: default_invalid_penalty(),
            bloom_threshold: default_bloom_threshold(),
            weather: WeatherEffects::default(),
            min_resource: 0,
            case_sensitive: false,
        }
    }
}

impl Rules {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let rules: Rules = serde_yaml::from_str(text).context("Failed to parse rules")?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesError> {
        if self.bloom_threshold == 0 {
            return Err(RulesError::Validation(
                "bloom_threshold must be greater than zero".to_string(),
            ));
        }
        if self.initial.water <= self.min_resource || self.initial.energy <= self.min_resource {
            return Err(RulesError::Validation(format!(
                "initial water and energy must be above min_resource {}",
                self.min_resource
            )));
        }
        if self.bloom_penalty.growth != 0 {
            return Err(RulesError::Validation(
                "bloom_penalty must not change growth".to_string(),
            ));
        }
        if self.initial.growth >= self.bloom_threshold {
            return Err(RulesError::Validation(format!(
                "initial growth {} already reaches bloom_threshold {}",
                self.initial.growth, self.bloom_threshold
            )));
        }
        Ok(())
    }

    /// What an action takes from the plant. Bloom only pays when it is too early.
    pub fn action_cost(&self, action: Action) -> ResourceDelta {
        match action {
            Action::Grow => self.grow,
            Action::Wait => self.wait,
            Action::Bloom => self.bloom_penalty,
        }
    }

    pub fn starting_plant(&self) -> Plant {
        Plant::new(self.initial.water, self.initial.energy, self.initial.growth)
    }
}

/// Named rule tables reproducing the game's earlier editions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Preset {
    #[default]
    Canonical,
    /// Small starting stock, three growth stages, exact-case commands.
    /// The plant survives at exactly zero water or energy.
    Seedling,
    /// Like seedling but starts unsprouted with less water.
    Potted,
    /// Large swings in both costs and weather. Unrecognized input is free,
    /// but weather still follows the action.
    Garden,
}

impl Preset {
    pub fn rules(self) -> Rules {
        match self {
            Preset::Canonical => Rules::default(),
            Preset::Seedling => Rules {
                initial: InitialStock {
                    water: 10,
                    energy: 5,
                    growth: 1,
                },
                bloom_threshold: 3,
                min_resource: -1,
                case_sensitive: true,
                ..Rules::default()
            },
            Preset::Potted => Rules {
                initial: InitialStock {
                    water: 5,
                    energy: 5,
                    growth: 0,
                },
                bloom_threshold: 3,
                case_sensitive: true,
                ..Rules::default()
            },
            Preset::Garden => Rules {
                grow: ResourceDelta::new(-15, -15, 1),
                wait: ResourceDelta::new(-5, -5, 0),
                bloom_penalty: ResourceDelta::NONE,
                invalid_penalty: ResourceDelta::NONE,
                weather: WeatherEffects {
                    sunny: ResourceDelta::new(0, 20, 0),
                    rainy: ResourceDelta::new(20, 0, 0),
                    cloudy: ResourceDelta::new(10, 10, 0),
                },
                ..Rules::default()
            },
        }
    }
}

pub struct RulesLoader {
    base_dir: PathBuf,
}

impl RulesLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Rules> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read rules file {}", path.display()))?;
        Rules::from_yaml_str(&data).with_context(|| format!("Invalid rules in {}", path.display()))
    }
}
