#![forbid(unsafe_code)]

//! Controller configuration.
//!
//! [`NavigationConfig`] is plain data with builder-style setters. With the
//! `config` feature it can also be loaded from TOML or JSON:
//!
//! ```toml
//! transition_duration_ms = 300
//! reduced_motion = false
//! layout_direction = "right-to-left"
//! ```
//!
//! Missing keys fall back to [`NavigationConfig::default`]; unknown keys are
//! rejected.

use std::time::Duration;

use navkit_core::LayoutDirection;

/// Default slide duration in milliseconds.
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 250;

/// Tunables for a [`NavigationController`](crate::NavigationController).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct NavigationConfig {
    /// Duration requested for slide transitions.
    pub transition_duration_ms: u64,
    /// When set, animated requests mount immediately without a transition.
    pub reduced_motion: bool,
    /// Overrides the host's layout direction when `Some`.
    pub layout_direction: Option<LayoutDirection>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            transition_duration_ms: DEFAULT_TRANSITION_DURATION_MS,
            reduced_motion: false,
            layout_direction: None,
        }
    }
}

impl NavigationConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the slide duration.
    #[must_use]
    pub fn with_transition_duration(mut self, duration: Duration) -> Self {
        self.transition_duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Enable or disable reduced motion.
    #[must_use]
    pub fn with_reduced_motion(mut self, reduced: bool) -> Self {
        self.reduced_motion = reduced;
        self
    }

    /// Force a layout direction instead of asking the host.
    #[must_use]
    pub fn with_layout_direction(mut self, direction: LayoutDirection) -> Self {
        self.layout_direction = Some(direction);
        self
    }

    /// Slide duration as a [`Duration`].
    #[must_use]
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }
}

#[cfg(feature = "config")]
pub use loading::ConfigError;

#[cfg(feature = "config")]
mod loading {
    use std::fmt;
    use std::io;
    use std::path::{Path, PathBuf};

    use super::NavigationConfig;

    /// Errors from loading a [`NavigationConfig`].
    #[derive(Debug)]
    pub enum ConfigError {
        /// The file could not be read.
        Io { path: PathBuf, source: io::Error },
        /// The contents did not parse as a configuration.
        Parse(String),
        /// The file extension is neither `.toml` nor `.json`.
        UnsupportedFormat(PathBuf),
    }

    impl fmt::Display for ConfigError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Self::Io { path, source } => {
                    write!(f, "failed to read {}: {source}", path.display())
                }
                Self::Parse(msg) => write!(f, "parse error: {msg}"),
                Self::UnsupportedFormat(path) => {
                    write!(f, "unsupported config format: {}", path.display())
                }
            }
        }
    }

    impl std::error::Error for ConfigError {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            match self {
                Self::Io { source, .. } => Some(source),
                _ => None,
            }
        }
    }

    impl NavigationConfig {
        /// Parse a TOML document.
        ///
        /// # Errors
        ///
        /// [`ConfigError::Parse`] on malformed input or unknown keys.
        pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
            toml::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))
        }

        /// Parse a JSON document.
        ///
        /// # Errors
        ///
        /// [`ConfigError::Parse`] on malformed input or unknown keys.
        pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
            serde_json::from_str(input).map_err(|e| ConfigError::Parse(e.to_string()))
        }

        /// Load from a `.toml` or `.json` file.
        ///
        /// # Errors
        ///
        /// - [`ConfigError::UnsupportedFormat`] for other extensions.
        /// - [`ConfigError::Io`] if the file cannot be read.
        /// - [`ConfigError::Parse`] if the contents are invalid.
        pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let path = path.as_ref();
            let ext = path
                .extension()
                .and_then(|e| e.to_str())
                .map(str::to_ascii_lowercase);
            let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
                Some("toml") => Self::from_toml_str,
                Some("json") => Self::from_json_str,
                _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
            };
            let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            let config = parse(&contents)?;
            tracing::debug!(path = %path.display(), ?config, "navkit: loaded config");
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = NavigationConfig::default();
        assert_eq!(config.transition_duration(), Duration::from_millis(250));
        assert!(!config.reduced_motion);
        assert_eq!(config.layout_direction, None);
    }

    #[test]
    fn builder_sets_fields() {
        let config = NavigationConfig::new()
            .with_transition_duration(Duration::from_millis(400))
            .with_reduced_motion(true)
            .with_layout_direction(LayoutDirection::RightToLeft);
        assert_eq!(config.transition_duration_ms, 400);
        assert!(config.reduced_motion);
        assert_eq!(config.layout_direction, Some(LayoutDirection::RightToLeft));
    }

    #[cfg(feature = "config")]
    #[test]
    fn toml_partial_uses_defaults() {
        let config = NavigationConfig::from_toml_str("reduced_motion = true").unwrap();
        assert!(config.reduced_motion);
        assert_eq!(
            config.transition_duration_ms,
            DEFAULT_TRANSITION_DURATION_MS
        );
    }

    #[cfg(feature = "config")]
    #[test]
    fn unknown_keys_are_rejected() {
        let err = NavigationConfig::from_json_str(r#"{"speed": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
