//! The spacing policy applied inside computed brackets.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Spacing policy for the inside of computed brackets.
///
/// The policy is resolved once per session with [`SpacingMode::resolve`] and
/// never changes afterwards.
///
/// # Example
///
/// ```
/// use bracket_spacing_core::SpacingMode;
///
/// assert_eq!(SpacingMode::resolve(Some("even")), SpacingMode::Even);
/// assert_eq!(SpacingMode::resolve(Some("sometimes")), SpacingMode::Never);
/// assert_eq!(SpacingMode::resolve(None), SpacingMode::Never);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SpacingMode {
    /// No whitespace directly inside the brackets.
    #[default]
    Never,
    /// Whitespace required directly inside the brackets.
    Always,
    /// Matching spacing on both sides, at most one space each.
    Even,
}

/// Error raised when a mode name is parsed strictly and is not recognised.
pub type SpacingModeParseError = strum::ParseError;

impl SpacingMode {
    /// Resolves the configured mode value.
    ///
    /// `"always"` and `"even"` select their modes. Anything else, including an
    /// absent value, selects [`SpacingMode::Never`] without raising an error.
    #[must_use]
    pub fn resolve(value: Option<&str>) -> Self {
        value
            .and_then(|name| name.parse().ok())
            .unwrap_or_default()
    }

    /// Returns `true` when the mode demands whitespace inside the brackets.
    #[must_use]
    pub const fn requires_space(self) -> bool {
        matches!(self, Self::Always)
    }

    /// Returns the configuration name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Always => "always",
            Self::Even => "even",
        }
    }

    /// Returns all modes.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Never, Self::Always, Self::Even]
    }
}
