use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::engine::EngineMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            engine: EngineConfig::default(),
            orbit: OrbitConfig::default(),
            advisor: AdvisorConfig::default(),
            ui: UiConfig::default(),
            catalog: CatalogConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Timing parameters for the position/progress engine.
///
/// One canonical parameter set, overridable per installation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Home sequence variant: rotating orbit or scroll-linked slideshow
    #[serde(default)]
    pub mode: EngineMode,
    /// Time spent on one item before auto-advancing (ms)
    #[serde(default = "default_dwell_duration")]
    pub dwell_duration_ms: u64,
    /// Minimum gap between accepted wheel gestures (ms)
    #[serde(default = "default_input_cooldown")]
    pub input_cooldown_ms: u64,
    /// Safety-net delay after which a programmatic move is considered
    /// settled even if no completion event arrived (ms)
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            mode: EngineMode::default(),
            dwell_duration_ms: default_dwell_duration(),
            input_cooldown_ms: default_input_cooldown(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

/// Geometry of the orbit carousel, in fractions of the render area.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Horizontal radius as a fraction of the available half-width
    #[serde(default = "default_radius_x_ratio")]
    pub radius_x_ratio: f64,
    /// Vertical radius as a fraction of the available half-height
    #[serde(default = "default_radius_y_ratio")]
    pub radius_y_ratio: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            radius_x_ratio: default_radius_x_ratio(),
            radius_y_ratio: default_radius_y_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Enable the AI advisor chat
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Advisor provider: "gemini" or "openai"
    #[serde(default = "default_advisor_provider")]
    pub provider: String,
    /// Gemini API key (for gemini provider)
    #[serde(default)]
    pub gemini_api_key: Option<String>,
    /// Gemini model name
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// OpenAI API key (for openai provider)
    #[serde(default)]
    pub openai_api_key: Option<String>,
    /// OpenAI model name
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    /// Max tokens per reply
    #[serde(default = "default_max_tokens")]
    pub max_reply_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            provider: default_advisor_provider(),
            gemini_api_key: None,
            gemini_model: default_gemini_model(),
            openai_api_key: None,
            openai_model: default_openai_model(),
            max_reply_tokens: default_max_tokens(),
            request_timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Display-side motion smoothing
    #[serde(default)]
    pub motion: MotionConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            motion: MotionConfig::default(),
        }
    }
}

/// Smoothing applied to the rendered scalar as it chases the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionConfig {
    /// Enable smooth motion (instant jumps when disabled)
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Animation duration in milliseconds
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    /// Easing function
    #[serde(default)]
    pub easing: EasingType,
    /// Animation frame rate while motion is active
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Easing function selection for display-side motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No interpolation, jump at completion
    None,
    Linear,
    Cubic,
    Quintic,
    EaseOut,
}

impl Default for EasingType {
    fn default() -> Self {
        EasingType::Cubic
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Optional TOML file overriding the built-in catalog
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self { path: None }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nelbac")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_dwell_duration() -> u64 {
    5000
}

fn default_input_cooldown() -> u64 {
    900 // long enough to absorb trackpad momentum
}

fn default_settle_delay() -> u64 {
    800
}

fn default_radius_x_ratio() -> f64 {
    0.85
}

fn default_radius_y_ratio() -> f64 {
    0.6
}

fn default_advisor_provider() -> String {
    "gemini".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash".to_string()
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    200
}

fn default_timeout() -> u64 {
    30
}

fn default_tick_rate() -> u64 {
    33 // ~30fps
}

fn default_animation_duration() -> u64 {
    400
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
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

    /// Get the configuration file path
    /// Always uses ~/.config/nelbac/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("nelbac")
            .join("config.toml")
    }

    /// Get the database file path
    pub fn database_path(&self) -> PathBuf {
        self.data_dir().join("nelbac.db")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_config() {
        let config = EngineConfig::default();
        assert_eq!(config.dwell_duration_ms, 5000);
        assert_eq!(config.settle_delay_ms, 800);
        assert!(config.input_cooldown_ms >= 700 && config.input_cooldown_ms <= 1200);
    }

    #[test]
    fn test_engine_mode_from_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [engine]
            mode = "scroll_linked"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.mode, EngineMode::ScrollLinked);
        assert_eq!(AppConfig::default().engine.mode, EngineMode::Orbit);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [engine]
            dwell_duration_ms = 3000
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.dwell_duration_ms, 3000);
        assert_eq!(config.engine.settle_delay_ms, 800);
        assert!(config.ui.motion.smooth_enabled);
        assert_eq!(config.ui.motion.easing, EasingType::Cubic);
    }
}
