// SPDX-License-Identifier: MPL-2.0
//! Behavior configuration, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[page]` - Designated page identifiers (setup page, auto-save page)
//! - `[toast]` - Toast timeout and transition delays
//! - `[modal]` - Modal open/close delays
//! - `[sticky]` - Scroll fallback threshold
//! - `[autosave]` - Debounce window and on/off switch
//! - `[actions]` - Simulated save duration for action buttons
//! - `[progress]` - Progress bar animation duration and frame cadence
//!
//! Every field is optional; a missing field falls back to the value in
//! [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use sprint_ui::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.toast.timeout_ms = Some(5000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Designated page identifiers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    /// Page that must carry a sticky action bar.
    #[serde(default = "default_setup_page", skip_serializing_if = "Option::is_none")]
    pub setup_page: Option<String>,

    /// Page whose form input is auto-saved.
    #[serde(
        default = "default_autosave_page",
        skip_serializing_if = "Option::is_none"
    )]
    pub autosave_page: Option<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            setup_page: default_setup_page(),
            autosave_page: default_autosave_page(),
        }
    }
}

impl PageConfig {
    #[must_use]
    pub fn setup_page(&self) -> &str {
        self.setup_page.as_deref().unwrap_or(DEFAULT_SETUP_PAGE)
    }

    #[must_use]
    pub fn autosave_page(&self) -> &str {
        self.autosave_page.as_deref().unwrap_or(DEFAULT_AUTOSAVE_PAGE)
    }
}

/// Toast timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Default visible time when the caller gives none.
    #[serde(
        default = "default_toast_timeout",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_ms: Option<u64>,

    /// Delay before the visible class is applied.
    #[serde(
        default = "default_toast_show_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_delay_ms: Option<u64>,

    /// Fade-out time before the node is detached.
    #[serde(default = "default_toast_fade", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_toast_timeout(),
            show_delay_ms: default_toast_show_delay(),
            fade_ms: default_toast_fade(),
        }
    }
}

impl ToastConfig {
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_TOAST_TIMEOUT_MS)
    }

    #[must_use]
    pub fn show_delay_ms(&self) -> u64 {
        self.show_delay_ms.unwrap_or(DEFAULT_TOAST_SHOW_DELAY_MS)
    }

    #[must_use]
    pub fn fade_ms(&self) -> u64 {
        self.fade_ms.unwrap_or(DEFAULT_TOAST_FADE_MS)
    }
}

/// Modal timings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModalConfig {
    #[serde(
        default = "default_modal_open_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub open_delay_ms: Option<u64>,

    #[serde(
        default = "default_modal_close_delay",
        skip_serializing_if = "Option::is_none"
    )]
    pub close_delay_ms: Option<u64>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            open_delay_ms: default_modal_open_delay(),
            close_delay_ms: default_modal_close_delay(),
        }
    }
}

impl ModalConfig {
    #[must_use]
    pub fn open_delay_ms(&self) -> u64 {
        self.open_delay_ms.unwrap_or(DEFAULT_MODAL_OPEN_DELAY_MS)
    }

    #[must_use]
    pub fn close_delay_ms(&self) -> u64 {
        self.close_delay_ms.unwrap_or(DEFAULT_MODAL_CLOSE_DELAY_MS)
    }
}

/// Sticky bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StickyConfig {
    /// Scroll offset (px) past which the fallback marks the bar stuck.
    #[serde(
        default = "default_sticky_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub scroll_threshold_px: Option<f64>,
}

impl Default for StickyConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: default_sticky_threshold(),
        }
    }
}

impl StickyConfig {
    #[must_use]
    pub fn scroll_threshold_px(&self) -> f64 {
        self.scroll_threshold_px
            .unwrap_or(DEFAULT_STICKY_SCROLL_THRESHOLD_PX)
    }
}

/// Auto-save settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AutosaveConfig {
    #[serde(default = "default_true", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(
        default = "default_autosave_debounce",
        skip_serializing_if = "Option::is_none"
    )]
    pub debounce_ms: Option<u64>,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            debounce_ms: default_autosave_debounce(),
        }
    }
}

impl AutosaveConfig {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    #[must_use]
    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms.unwrap_or(DEFAULT_AUTOSAVE_DEBOUNCE_MS)
    }
}

/// Action button settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionsConfig {
    #[serde(default = "default_action_delay", skip_serializing_if = "Option::is_none")]
    pub simulated_delay_ms: Option<u64>,
}

impl Default for ActionsConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: default_action_delay(),
        }
    }
}

impl ActionsConfig {
    #[must_use]
    pub fn simulated_delay_ms(&self) -> u64 {
        self.simulated_delay_ms.unwrap_or(DEFAULT_ACTION_DELAY_MS)
    }
}

/// Progress bar animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressConfig {
    #[serde(
        default = "default_progress_duration",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,

    #[serde(
        default = "default_frame_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub frame_interval_ms: Option<u64>,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_progress_duration(),
            frame_interval_ms: default_frame_interval(),
        }
    }
}

impl ProgressConfig {
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms.unwrap_or(DEFAULT_PROGRESS_DURATION_MS)
    }

    /// Frame cadence, never below [`MIN_FRAME_INTERVAL_MS`].
    #[must_use]
    pub fn frame_interval_ms(&self) -> u64 {
        self.frame_interval_ms
            .unwrap_or(DEFAULT_FRAME_INTERVAL_MS)
            .max(MIN_FRAME_INTERVAL_MS)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Behavior configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub page: PageConfig,

    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub modal: ModalConfig,

    #[serde(default)]
    pub sticky: StickyConfig,

    #[serde(default)]
    pub autosave: AutosaveConfig,

    #[serde(default)]
    pub actions: ActionsConfig,

    #[serde(default)]
    pub progress: ProgressConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_setup_page() -> Option<String> {
    Some(DEFAULT_SETUP_PAGE.to_string())
}

fn default_autosave_page() -> Option<String> {
    Some(DEFAULT_AUTOSAVE_PAGE.to_string())
}

fn default_toast_timeout() -> Option<u64> {
    Some(DEFAULT_TOAST_TIMEOUT_MS)
}

fn default_toast_show_delay() -> Option<u64> {
    Some(DEFAULT_TOAST_SHOW_DELAY_MS)
}

fn default_toast_fade() -> Option<u64> {
    Some(DEFAULT_TOAST_FADE_MS)
}

fn default_modal_open_delay() -> Option<u64> {
    Some(DEFAULT_MODAL_OPEN_DELAY_MS)
}

fn default_modal_close_delay() -> Option<u64> {
    Some(DEFAULT_MODAL_CLOSE_DELAY_MS)
}

fn default_sticky_threshold() -> Option<f64> {
    Some(DEFAULT_STICKY_SCROLL_THRESHOLD_PX)
}

fn default_true() -> Option<bool> {
    Some(true)
}

fn default_autosave_debounce() -> Option<u64> {
    Some(DEFAULT_AUTOSAVE_DEBOUNCE_MS)
}

fn default_action_delay() -> Option<u64> {
    Some(DEFAULT_ACTION_DELAY_MS)
}

fn default_progress_duration() -> Option<u64> {
    Some(DEFAULT_PROGRESS_DURATION_MS)
}

fn default_frame_interval() -> Option<u64> {
    Some(DEFAULT_FRAME_INTERVAL_MS)
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some(format!("could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
