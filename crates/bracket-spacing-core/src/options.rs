//! Rule options shared by the traversal driver and the configuration layer.

use crate::mode::SpacingMode;

/// Options controlling which regions are checked and how.
///
/// # Example
///
/// ```
/// use bracket_spacing_core::{LintOptions, SpacingMode};
///
/// let options = LintOptions::default();
/// assert_eq!(options.mode(), SpacingMode::Never);
/// assert!(!options.enforce_for_class_members());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LintOptions {
    mode: SpacingMode,
    enforce_for_class_members: bool,
}

impl LintOptions {
    /// Creates options with an explicit mode and class member switch.
    #[must_use]
    pub const fn new(mode: SpacingMode, enforce_for_class_members: bool) -> Self {
        Self {
            mode,
            enforce_for_class_members,
        }
    }

    /// Returns a copy of these options using `mode`.
    #[must_use]
    pub const fn with_mode(self, mode: SpacingMode) -> Self {
        Self { mode, ..self }
    }

    /// Returns a copy of these options with class member checking toggled.
    #[must_use]
    pub const fn with_class_members(self, enforce: bool) -> Self {
        Self {
            enforce_for_class_members: enforce,
            ..self
        }
    }

    /// Returns the active spacing mode.
    #[must_use]
    pub const fn mode(&self) -> SpacingMode {
        self.mode
    }

    /// Returns whether computed class member names are checked.
    #[must_use]
    pub const fn enforce_for_class_members(&self) -> bool {
        self.enforce_for_class_members
    }
}
