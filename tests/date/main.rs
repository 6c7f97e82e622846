//! Date Integration Tests
//!
//! Tests for `Date`, the `DateFormat` profiles, cultures and configuration.
//! Tests that need an ambient culture install a `CultureScope`; only the
//! configuration tests touch the process default.

#[path = "../common/mod.rs"]
mod common;

mod calendar;
mod config;
mod format;
