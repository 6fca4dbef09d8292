//! Run configuration: the rule-family registry, logging, artifact path.
//!
//! Every business rule the assembler knows is represented here as an
//! independently toggleable registry entry carrying its own parameters.
//! Validation happens once at load time: an enabled family with a missing
//! parameter is a [`ConfigError`], never a fault in the middle of model
//! assembly. The loaded value is passed into the assembler explicitly and
//! is read-only for the duration of a solve.

use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    /// Write the assembled program to this LP file before solving.
    pub model_file: Option<PathBuf>,
    pub rules: Rules,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl LoggingConfig {
    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// Logs go to stderr; stdout is reserved for the roster report.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        match self.format.as_str() {
            "json" => {
                fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

/// The constraint-family registry.
///
/// Disabling a family means its constraints are never emitted, not that
/// trivially-satisfied rows are. Defaults follow the shipped parameter
/// dashboard: preferences, team-size cap, social rules, sponsor pins and
/// the extrovert minimum are on; the remaining composition rules are
/// opt-in and the thresholded ones have no default threshold.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Rules {
    pub capacity: CapacityRule,
    pub team_size: TeamSizeRule,
    pub likes: LikesRule,
    pub dislikes: DislikesRule,
    pub sponsors: SponsorRule,
    pub extroverts: ExtrovertRule,
    pub writing: WritingRule,
    pub leadership: LeadershipRule,
    pub programming: ProgrammingRule,
    pub manager: ManagerRule,
}

impl Rules {
    /// Fail fast on an inconsistent registry.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.capacity.enabled && self.capacity.projects_per_student == 0 {
            return Err(ConfigError::InvalidValue {
                field: "rules.capacity.projects_per_student",
                reason: "must be at least 1".into(),
            });
        }
        if self.team_size.min_enabled
            && self.team_size.max_enabled
            && self.team_size.min > self.team_size.max
        {
            return Err(ConfigError::InvalidValue {
                field: "rules.team_size",
                reason: format!(
                    "min {} exceeds max {}",
                    self.team_size.min, self.team_size.max
                ),
            });
        }
        if self.writing.enabled && self.writing.floor.is_none() {
            return Err(ConfigError::MissingThreshold {
                family: "writing",
                param: "floor",
            });
        }
        if self.programming.enabled && self.programming.floor.is_none() {
            return Err(ConfigError::MissingThreshold {
                family: "programming",
                param: "floor",
            });
        }
        Ok(())
    }

    /// Names of the enabled families, for logging.
    pub fn enabled_families(&self) -> Vec<&'static str> {
        let entries = [
            ("capacity", self.capacity.enabled),
            ("max_team_size", self.team_size.max_enabled),
            ("min_team_size", self.team_size.min_enabled),
            ("likes", self.likes.enabled),
            ("dislikes", self.dislikes.enabled),
            ("sponsors", self.sponsors.enabled),
            ("extroverts", self.extroverts.enabled),
            ("writing", self.writing.enabled),
            ("leadership", self.leadership.enabled),
            ("programming", self.programming.enabled),
            ("manager", self.manager.enabled),
        ];
        entries
            .into_iter()
            .filter_map(|(name, enabled)| enabled.then_some(name))
            .collect()
    }
}

/// Each student lands on exactly `projects_per_student` projects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CapacityRule {
    pub enabled: bool,
    pub projects_per_student: u32,
}

impl Default for CapacityRule {
    fn default() -> Self {
        Self {
            enabled: true,
            projects_per_student: 1,
        }
    }
}

/// Team-size bounds; the cap and the floor toggle independently.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TeamSizeRule {
    pub max_enabled: bool,
    pub max: u32,
    pub min_enabled: bool,
    pub min: u32,
}

impl Default for TeamSizeRule {
    fn default() -> Self {
        Self {
            max_enabled: true,
            max: 8,
            min_enabled: false,
            min: 4,
        }
    }
}

/// Liking students are forced onto the same project.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LikesRule {
    pub enabled: bool,
}

impl Default for LikesRule {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Disliking students are never both on one project.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DislikesRule {
    pub enabled: bool,
}

impl Default for DislikesRule {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Sponsor requests become hard pins.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SponsorRule {
    pub enabled: bool,
}

impl Default for SponsorRule {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Every team gets a minimum number of socially-active members.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtrovertRule {
    pub enabled: bool,
    pub required: u32,
}

impl Default for ExtrovertRule {
    fn default() -> Self {
        Self {
            enabled: true,
            required: 1,
        }
    }
}

/// Aggregate documentation competency per team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WritingRule {
    pub enabled: bool,
    pub floor: Option<Decimal>,
}

/// At least one leader per team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LeadershipRule {
    pub enabled: bool,
}

/// Aggregate technical competency per team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProgrammingRule {
    pub enabled: bool,
    pub floor: Option<Decimal>,
}

/// At least one manager per team.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ManagerRule {
    pub enabled: bool,
}
