//! Unit and behaviour tests for bracket-spacing-syntax.
