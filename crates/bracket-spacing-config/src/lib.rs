//! Layered configuration for the bracket spacing checker.
//!
//! Values are merged by `ortho_config` from, in increasing precedence, the
//! built-in defaults, a TOML configuration file (`--config-path` or
//! `BRACKET_SPACING_CONFIG_PATH`), `BRACKET_SPACING_*` environment variables
//! and command-line flags.
//!
//! The `mode` value is kept as raw text and resolved by
//! [`SpacingMode::resolve`], so unrecognised values fall back to `never`
//! instead of failing the load.

mod defaults;
mod logging;

use bracket_spacing_core::{LintOptions, SpacingMode};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_LOG_FILTER, default_log_filter, default_log_filter_string, default_log_format,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for one run of the checker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "BRACKET_SPACING")]
pub struct Config {
    /// Spacing mode name: `never`, `always` or `even`.
    #[serde(default)]
    pub mode: Option<String>,
    /// Whether computed class member names are checked.
    #[serde(default)]
    pub enforce_for_class_members: bool,
    /// Tracing filter expression.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Log output format.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: None,
            enforce_for_class_members: false,
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
        }
    }
}

impl Config {
    /// Returns the configured mode name exactly as supplied.
    #[must_use]
    pub fn mode_name(&self) -> Option<&str> {
        self.mode.as_deref()
    }

    /// Returns the resolved spacing mode.
    #[must_use]
    pub fn mode(&self) -> SpacingMode {
        SpacingMode::resolve(self.mode_name())
    }

    /// Returns `true` when a mode was supplied but is not a known name.
    ///
    /// Such values still resolve to [`SpacingMode::Never`]; callers may warn.
    #[must_use]
    pub fn has_unrecognised_mode(&self) -> bool {
        self.mode_name()
            .is_some_and(|name| name.parse::<SpacingMode>().is_err())
    }

    /// Returns whether computed class member names are checked.
    #[must_use]
    pub const fn enforce_for_class_members(&self) -> bool {
        self.enforce_for_class_members
    }

    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the log output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the rule options derived from this configuration.
    #[must_use]
    pub fn lint_options(&self) -> LintOptions {
        LintOptions::new(self.mode(), self.enforce_for_class_members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_select_never_and_compact_logs() {
        let config = Config::default();
        assert_eq!(config.mode(), SpacingMode::Never);
        assert!(!config.enforce_for_class_members());
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert_eq!(config.lint_options(), LintOptions::default());
    }

    #[rstest]
    #[case(None, SpacingMode::Never, false)]
    #[case(Some("always"), SpacingMode::Always, false)]
    #[case(Some("even"), SpacingMode::Even, false)]
    #[case(Some("never"), SpacingMode::Never, false)]
    #[case(Some("spaced"), SpacingMode::Never, true)]
    fn mode_resolution(
        #[case] name: Option<&str>,
        #[case] expected: SpacingMode,
        #[case] unrecognised: bool,
    ) {
        let config = Config {
            mode: name.map(str::to_owned),
            ..Config::default()
        };
        assert_eq!(config.mode(), expected);
        assert_eq!(config.has_unrecognised_mode(), unrecognised);
    }

    #[test]
    fn lint_options_carry_class_member_switch() {
        let config = Config {
            mode: Some("even".to_owned()),
            enforce_for_class_members: true,
            ..Config::default()
        };
        assert_eq!(
            config.lint_options(),
            LintOptions::new(SpacingMode::Even, true)
        );
    }
}
