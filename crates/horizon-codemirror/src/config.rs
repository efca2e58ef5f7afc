//! Loading component configuration from JSON or TOML.
//!
//! An [`AdapterConfig`] carries the static part of a component's props (name,
//! styling, flags, widget options) so editors can be configured from files.
//! Keys are accepted both in snake_case and in the camelCase spelling used by
//! web-style editor configs (`className`, `autoFocus`,
//! `preserveScrollPosition`).
//!
//! # Example
//!
//! ```
//! use horizon_codemirror::config::AdapterConfig;
//! use horizon_codemirror::options::names;
//!
//! let config = AdapterConfig::from_toml_str(r#"
//!     name = "query"
//!     class_name = "sql"
//!     preserve_scroll_position = true
//!
//!     [options]
//!     mode = "sql"
//!     lineNumbers = true
//! "#).unwrap();
//!
//! let props = config.into_props();
//! assert_eq!(props.effective_name(), "query");
//! assert!(props.options.is_enabled(names::LINE_NUMBERS));
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use horizon_codemirror_core::logging::targets;
use horizon_codemirror_core::{Error, Result};

use crate::adapter::CodeMirrorProps;
use crate::options::EditorOptions;

/// The format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON format.
    Json,
    /// TOML format.
    Toml,
}

impl ConfigFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

/// Static component configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    /// Form name of the placeholder.
    pub name: String,
    /// Fallback form name.
    pub path: String,
    /// Extra container class.
    #[serde(alias = "className", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Focus the widget once mounted.
    #[serde(alias = "autoFocus")]
    pub auto_focus: bool,
    /// Keep the scroll offset across controlled value updates.
    #[serde(alias = "preserveScrollPosition")]
    pub preserve_scroll_position: bool,
    /// Options passed to the widget.
    pub options: EditorOptions,
}

impl AdapterConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(|e| Error::config(e.to_string()))
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| Error::config(e.to_string()))
    }

    /// Parse a configuration in the given format.
    pub fn from_str_with_format(s: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Json => Self::from_json_str(s),
            ConfigFormat::Toml => Self::from_toml_str(s),
        }
    }

    /// Load a configuration file, choosing the format by extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            Error::config(format!("unsupported config extension: {}", path.display()))
        })?;
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config = Self::from_str_with_format(&text, format)?;
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            options = config.options.len(),
            "loaded editor config"
        );
        Ok(config)
    }

    /// Serialize to a pretty-printed JSON string.
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Serialize to a TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Build component props from this configuration. Callbacks and the
    /// controlled value are left unset.
    pub fn into_props(self) -> CodeMirrorProps {
        CodeMirrorProps {
            name: self.name,
            path: self.path,
            class_name: self.class_name,
            auto_focus: self.auto_focus,
            preserve_scroll_position: self.preserve_scroll_position,
            options: self.options,
            ..CodeMirrorProps::default()
        }
    }
}

impl From<AdapterConfig> for CodeMirrorProps {
    fn from(config: AdapterConfig) -> Self {
        config.into_props()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{names, OptionValue};

    #[test]
    fn test_json_accepts_camel_case_keys() {
        let config = AdapterConfig::from_json_str(
            r#"{
                "path": "styles.css",
                "className": "css-editor",
                "autoFocus": true,
                "preserveScrollPosition": true,
                "options": { "mode": "css", "tabSize": 2, "gutters": ["lint"] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.class_name.as_deref(), Some("css-editor"));
        assert!(config.auto_focus);
        assert!(config.preserve_scroll_position);
        assert_eq!(
            config.options.get("gutters"),
            Some(&OptionValue::from(vec!["lint"]))
        );
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let config = AdapterConfig::from_toml_str("name = \"plain\"").unwrap();
        assert_eq!(config.name, "plain");
        assert!(!config.auto_focus);
        assert!(!config.preserve_scroll_position);
        assert!(config.options.is_empty());
    }

    #[test]
    fn test_invalid_input_is_a_config_error() {
        let err = AdapterConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }

    #[test]
    fn test_toml_round_trip_preserves_options() {
        let config = AdapterConfig {
            name: "main".into(),
            options: EditorOptions::new()
                .with(names::MODE, "rust")
                .with(names::INDENT_UNIT, 4),
            ..Default::default()
        };

        let text = config.to_toml_string().unwrap();
        assert_eq!(AdapterConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ConfigFormat::from_path(Path::new("a/editor.JSON")), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_path(Path::new("editor.toml")), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_path(Path::new("editor.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("editor")), None);
    }

    #[test]
    fn test_into_props_copies_static_fields() {
        let props: CodeMirrorProps = AdapterConfig {
            path: "fallback".into(),
            auto_focus: true,
            ..Default::default()
        }
        .into();

        assert_eq!(props.effective_name(), "fallback");
        assert!(props.auto_focus);
        assert!(props.value.is_none());
    }
}
