//! Configuration management for swipedeck
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, FRAME_INTERVAL_MAX_MS, FRAME_INTERVAL_MIN_MS, MAX_AUTO_REFRESH_SECS,
};
use crate::icons::IconTheme;
use crate::model::{ItemKind, MutationKind};
use crate::swipe::SwipeConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Backend types the factory knows how to build
pub const SUPPORTED_BACKENDS: [&str; 2] = ["demo", "offline"];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub swipe: SwipeConfig,
    pub actions: ActionsConfig,
    pub sync: SyncConfig,
    pub logging: LoggingConfig,
    pub backend: BackendConfig,
}

/// Which list is shown first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    #[default]
    Tasks,
    Notifications,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support (required for drag swipes)
    pub mouse_enabled: bool,
    /// Icon theme: "ascii", "unicode" or "emoji"
    pub icon_theme: IconTheme,
    /// Interval between animation frames in milliseconds
    pub frame_interval_ms: u64,
    /// List shown on startup
    pub default_tab: Tab,
}

/// What a swipe in each direction does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionChoice {
    None,
    Complete,
    MarkRead,
    Delete,
}

impl ActionChoice {
    pub fn mutation(self) -> Option<MutationKind> {
        match self {
            ActionChoice::None => None,
            ActionChoice::Complete => Some(MutationKind::Complete),
            ActionChoice::MarkRead => Some(MutationKind::MarkRead),
            ActionChoice::Delete => Some(MutationKind::Delete),
        }
    }
}

/// Direction bindings for one kind of list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectionActions {
    pub right: ActionChoice,
    pub left: ActionChoice,
}

/// Direction bindings per list
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsConfig {
    pub task: DirectionActions,
    pub notification: DirectionActions,
}

/// Sync configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Auto-refresh interval in seconds (0 = disabled, manual refresh only)
    pub auto_refresh_interval_secs: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in addition to the in-memory buffer
    pub enabled: bool,
}

/// Backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Backend type: "demo" or "offline"
    pub backend_type: String,
    /// Artificial latency added to every demo backend call
    pub latency_ms: u64,
    /// Make every demo mutation fail (loads still succeed)
    pub fail_mutations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            icon_theme: IconTheme::default(),
            frame_interval_ms: 16,
            default_tab: Tab::Tasks,
        }
    }
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            task: DirectionActions {
                right: ActionChoice::Complete,
                left: ActionChoice::Delete,
            },
            notification: DirectionActions {
                right: ActionChoice::MarkRead,
                left: ActionChoice::Delete,
            },
        }
    }
}

impl ActionsConfig {
    pub fn for_kind(&self, kind: ItemKind) -> &DirectionActions {
        match kind {
            ItemKind::Task => &self.task,
            ItemKind::Notification => &self.notification,
        }
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            auto_refresh_interval_secs: 60,
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            backend_type: "demo".to_string(),
            latency_ms: 300,
            fail_mutations: false,
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("swipedeck.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("swipedeck").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(FRAME_INTERVAL_MIN_MS..=FRAME_INTERVAL_MAX_MS).contains(&self.ui.frame_interval_ms) {
            anyhow::bail!(
                "frame_interval_ms must be between {} and {}, got {}",
                FRAME_INTERVAL_MIN_MS,
                FRAME_INTERVAL_MAX_MS,
                self.ui.frame_interval_ms
            );
        }

        self.swipe
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid swipe configuration: {}", e))?;

        self.validate_actions()?;

        if self.sync.auto_refresh_interval_secs > MAX_AUTO_REFRESH_SECS {
            anyhow::bail!("auto_refresh_interval_secs cannot exceed {} (24 hours)", MAX_AUTO_REFRESH_SECS);
        }

        if !SUPPORTED_BACKENDS.contains(&self.backend.backend_type.as_str()) {
            anyhow::bail!(
                "unsupported backend_type '{}'. Available backends: {}",
                self.backend.backend_type,
                SUPPORTED_BACKENDS.join(", ")
            );
        }

        Ok(())
    }

    /// Reject actions bound to a list they cannot apply to
    fn validate_actions(&self) -> Result<()> {
        for kind in [ItemKind::Task, ItemKind::Notification] {
            let actions = self.actions.for_kind(kind);
            for (direction, choice) in [("right", actions.right), ("left", actions.left)] {
                if let Some(mutation) = choice.mutation() {
                    if !mutation.applies_to(kind) {
                        anyhow::bail!("actions.{}.{}: '{}' cannot be applied to a {}", kind, direction, mutation, kind);
                    }
                }
            }
        }
        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# swipedeck Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("swipedeck"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
