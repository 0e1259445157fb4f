//! Cross-module tests for the radar pipeline.
//!
//! - `determinism.rs`: same seed and commands give identical state
//! - `integration.rs`: end-to-end behavior of tick, commands and filtering
//! - `helpers.rs`: setup utilities

mod helpers;
