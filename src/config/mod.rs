// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast configuration, including loading and saving
//! it to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toasts]` - Queue capacity, removal delay and toaster tick interval
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass an explicit directory to `load_with_override()`/`save_with_override()`
//! 3. Set `TOAST_QUEUE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toast_queue::config;
//! use toast_queue::notifications::{NotificationQueue, ToastContent};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let queue: NotificationQueue<ToastContent> =
//!     NotificationQueue::new(config.toasts.queue_options());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::notifications::{Capacity, QueueOptions, RemoveDelay};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "ToastQueue";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOAST_QUEUE_CONFIG_DIR";

/// Warning key returned by [`load`] when an existing file cannot be parsed.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Toast queue settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToastConfig {
    /// Maximum number of toasts tracked at once.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Delay between dismissing a toast and removing it, in milliseconds.
    #[serde(default = "default_remove_delay_ms")]
    pub remove_delay_ms: u64,

    /// How often the toaster checks for due removals, in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_TOAST_CAPACITY,
            remove_delay_ms: DEFAULT_REMOVE_DELAY_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl ToastConfig {
    /// Builds queue options, clamping out-of-range values.
    #[must_use]
    pub fn queue_options(&self) -> QueueOptions {
        QueueOptions::new(
            Capacity::new(self.capacity),
            RemoveDelay::from_millis(self.remove_delay_ms),
        )
    }

    /// Toaster tick interval, clamped to the valid range.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(
            self.tick_interval_ms
                .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS),
        )
    }
}

fn default_capacity() -> usize {
    DEFAULT_TOAST_CAPACITY
}

fn default_remove_delay_ms() -> u64 {
    DEFAULT_REMOVE_DELAY_MS
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

// =============================================================================
// Root Config
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub toasts: ToastConfig,
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Returns the config directory.
///
/// # Resolution Order
///
/// 1. `override_dir` parameter (if `Some`) - most specific, for tests
/// 2. `TOAST_QUEUE_CONFIG_DIR` environment variable (if set and non-empty)
/// 3. Platform-specific config directory (with app name appended)
pub fn config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_dir {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn config_path_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir_with_override(override_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// Returns the defaults when no file exists. When a file exists but cannot be
/// read, the defaults are returned along with [`LOAD_ERROR_KEY`].
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "config load failed, using defaults"
                    );
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
