//! Terminal interface for the `skycast` weather viewer.
//!
//! The binary lives in `main.rs`; this library exposes the UI modules so the
//! integration tests can drive them directly.

pub mod ui;
