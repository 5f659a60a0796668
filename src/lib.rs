//! uvc-scan library crate.
//!
//! Probes USB Video Class cameras by index and reports their USB vendor and
//! product IDs. The binary in `main.rs` is a thin CLI over these modules.

pub mod camera;
pub mod cli;
pub mod config;
pub mod indices;
pub mod render;
