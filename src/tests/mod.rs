//! Scenario tests for apimetrics.
//!
//! End-to-end checks of label computation against the built-in catalog,
//! concurrent use of a shared route tree, and metered calls driven by config.

mod cases_concurrent_test;
mod cases_path_template_test;

pub mod support;
