//! Log and Key exporter library, the code behind the `lk-exporter` binary.
//!
//! Re-exports the modules so external crates (e.g. `lk-e2e-tests`) can
//! drive a full export in-process against a scripted command runner.

pub mod config;
pub mod driver;
