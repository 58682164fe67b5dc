use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

use mulligan_core::{CardPool, DrawBounds};

const NAME_ALLOWED: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-";

/// Root scenario description loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    pub hand_size: u32,
    pub deck: Vec<CardGroup>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// One named block of identical cards in the deck list.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct CardGroup {
    pub name: String,
    pub copies: u32,
}

/// Draw constraint attached to a deck group by name.
///
/// A requirement whose `at_least` exceeds its `at_most` is accepted and
/// simply evaluates to probability zero.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Requirement {
    pub group: String,
    #[serde(default)]
    pub at_least: Option<u32>,
    #[serde(default)]
    pub at_most: Option<u32>,
}

impl ScenarioConfig {
    /// Load a scenario from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let cfg: ScenarioConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the scenario without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_name(&self.name)?;

        if self.deck.is_empty() {
            return Err(ValidationError::InvalidField {
                field: "deck".to_string(),
                message: "deck must list at least one card group".to_string(),
            });
        }

        let mut groups = HashSet::new();
        for group in &self.deck {
            if group.name.trim().is_empty() {
                return Err(ValidationError::InvalidField {
                    field: "deck".to_string(),
                    message: "card group names must be non-empty".to_string(),
                });
            }
            if !groups.insert(group.name.as_str()) {
                return Err(ValidationError::InvalidField {
                    field: "deck".to_string(),
                    message: format!("duplicate card group '{}'", group.name),
                });
            }
        }

        let deck_size = self.deck_size();
        if self.hand_size > deck_size {
            return Err(ValidationError::InvalidField {
                field: "hand_size".to_string(),
                message: format!("hand of {} exceeds deck of {deck_size}", self.hand_size),
            });
        }

        let mut constrained = HashSet::new();
        for requirement in &self.requirements {
            if !groups.contains(requirement.group.as_str()) {
                return Err(ValidationError::InvalidField {
                    field: "requirements".to_string(),
                    message: format!("unknown card group '{}'", requirement.group),
                });
            }
            if !constrained.insert(requirement.group.as_str()) {
                return Err(ValidationError::InvalidField {
                    field: "requirements".to_string(),
                    message: format!("duplicate requirement for group '{}'", requirement.group),
                });
            }
            if requirement.at_least.is_none() && requirement.at_most.is_none() {
                return Err(ValidationError::InvalidField {
                    field: "requirements".to_string(),
                    message: format!(
                        "requirement for '{}' sets neither at_least nor at_most",
                        requirement.group
                    ),
                });
            }
        }

        Ok(())
    }

    pub fn deck_size(&self) -> u32 {
        self.deck.iter().map(|group| group.copies).sum()
    }

    /// Per-type counts in deck-list order.
    pub fn pool(&self) -> CardPool {
        CardPool::new(self.deck.iter().map(|group| group.copies).collect())
    }

    /// Requirements mapped onto deck-list indices by group name.
    pub fn bounds(&self) -> DrawBounds {
        let mut minimums = vec![None; self.deck.len()];
        let mut maximums = vec![None; self.deck.len()];
        for requirement in &self.requirements {
            if let Some(index) = self
                .deck
                .iter()
                .position(|group| group.name == requirement.group)
            {
                minimums[index] = requirement.at_least;
                maximums[index] = requirement.at_most;
            }
        }
        DrawBounds::new(minimums, maximums)
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidField {
            field: "name".to_string(),
            message: "scenario name must be non-empty".to_string(),
        });
    }
    if let Some(bad) = name.chars().find(|c| !NAME_ALLOWED.contains(*c)) {
        return Err(ValidationError::InvalidField {
            field: "name".to_string(),
            message: format!("scenario name contains unsupported character '{bad}'"),
        });
    }
    Ok(())
}

/// Errors surfaced when loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario {path:?}: {source}")]
    Read {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse scenario {path:?}: {source}")]
    Parse {
        #[source]
        source: serde_yaml::Error,
        path: PathBuf,
    },
    #[error("invalid scenario in {path:?}: {source}")]
    Invalid {
        path: PathBuf,
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Parse { path, .. }
            | ConfigError::Invalid { path, .. } => path.as_path(),
        }
    }
}

/// Validation failures captured with contextual metadata.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: {message}")]
    InvalidField { field: String, message: String },
}
