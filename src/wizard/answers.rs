//! The wizard's output shape.

use serde::Serialize;
use std::fmt;

/// Whether the configuration embeds its own rules or extends a preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConfigStyle {
    #[serde(rename = "self-contained")]
    SelfContained,
    #[serde(rename = "preset")]
    Preset,
}

impl fmt::Display for ConfigStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigStyle::SelfContained => write!(f, "self-contained"),
            ConfigStyle::Preset => write!(f, "preset"),
        }
    }
}

/// The shipped presets a configuration can extend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Preset {
    #[serde(rename = "depmap/configs/recommended-warn-only")]
    RecommendedWarnOnly,
    #[serde(rename = "depmap/configs/recommended-strict")]
    RecommendedStrict,
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Preset::RecommendedWarnOnly => {
                write!(f, "recommended, warn only (good starter choice)")
            }
            Preset::RecommendedStrict => write!(f, "recommended, strict"),
        }
    }
}

/// Everything the wizard collected, ready to be rendered as JSON.
///
/// Questions that were skipped (monorepo, no TypeScript, no webpack, ...)
/// leave their fields `None` and drop out of the serialized output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitAnswers {
    pub config_type: ConfigStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<Preset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_location: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_tests_outside_source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_location: Option<Vec<String>>,
    #[serde(rename = "useYarnPnP", skip_serializing_if = "Option::is_none")]
    pub use_yarn_pnp: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_ts_config: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_pre_compilation_deps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_webpack_config: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub webpack_config: Option<String>,
}

impl InitAnswers {
    pub fn new(config_type: ConfigStyle) -> Self {
        Self {
            config_type,
            preset: None,
            source_location: None,
            has_tests_outside_source: None,
            test_location: None,
            use_yarn_pnp: None,
            use_ts_config: None,
            ts_config: None,
            ts_pre_compilation_deps: None,
            use_webpack_config: None,
            webpack_config: None,
        }
    }
}
