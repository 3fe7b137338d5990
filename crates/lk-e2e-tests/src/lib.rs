//! Test-only crate. The end-to-end scenario suites live under `tests/`;
//! each pulls in the shared harness from `tests/helpers/`.
