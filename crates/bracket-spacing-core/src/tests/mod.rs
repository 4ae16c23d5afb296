//! Unit tests for `bracket_spacing_core` types.

mod support;

mod diagnostic_tests;
mod evaluator_tests;
