use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Smooth scrolling configuration
    #[serde(default)]
    pub scroll: ScrollConfig,
    /// Entrance animation configuration
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Copy feedback configuration
    #[serde(default)]
    pub copy: CopyConfig,
    /// Navbar styling configuration
    #[serde(default)]
    pub navbar: NavbarConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            scroll: ScrollConfig::default(),
            reveal: RevealConfig::default(),
            copy: CopyConfig::default(),
            navbar: NavbarConfig::default(),
        }
    }
}

/// Easing curve for scroll and reveal animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    /// Jump at the end, no interpolation
    None,
    Linear,
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Scroll animation duration in milliseconds
    #[serde(default = "default_scroll_duration")]
    pub animation_duration_ms: u64,
    /// Easing curve for scroll animations
    #[serde(default = "default_easing")]
    pub easing: EasingType,
    /// Lines moved per scroll step when smooth scrolling is off
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u8,
    /// Frame rate while an animation is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u8,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_scroll_duration(),
            easing: default_easing(),
            scroll_lines: default_scroll_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of a block's height that must be visible to trigger its reveal
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f64,
    /// Rows inset from the viewport's bottom edge when measuring visibility
    #[serde(default = "default_bottom_margin")]
    pub bottom_margin: u16,
    /// Reveal transition duration in milliseconds
    #[serde(default = "default_reveal_duration")]
    pub transition_ms: u64,
    /// Vertical offset in rows applied to hidden blocks
    #[serde(default = "default_offset_rows")]
    pub offset_rows: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            bottom_margin: default_bottom_margin(),
            transition_ms: default_reveal_duration(),
            offset_rows: default_offset_rows(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyConfig {
    /// How long the success feedback stays on a copy control, in milliseconds
    #[serde(default = "default_feedback_ms")]
    pub feedback_ms: u64,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            feedback_ms: default_feedback_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavbarConfig {
    /// Scroll offset above which the navbar uses the scrolled treatment
    #[serde(default = "default_scrolled_threshold")]
    pub scrolled_threshold: u16,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            scrolled_threshold: default_scrolled_threshold(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate() -> u64 {
    250
}

fn default_true() -> bool {
    true
}

fn default_scroll_duration() -> u64 {
    150
}

fn default_easing() -> EasingType {
    EasingType::Cubic
}

fn default_scroll_lines() -> u8 {
    1
}

fn default_animation_fps() -> u8 {
    60
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_bottom_margin() -> u16 {
    3
}

fn default_reveal_duration() -> u64 {
    500
}

fn default_offset_rows() -> u16 {
    2
}

fn default_feedback_ms() -> u64 {
    2000
}

fn default_scrolled_threshold() -> u16 {
    100
}

impl AppConfig {
    /// Path to the configuration file
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("docpager")
            .join("config.toml")
    }

    /// Load configuration from file, falling back to defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }
}
