// SvgSweep - lib.rs
//
// Library entry point, exposing all modules for integration testing.
// The binary in `main.rs` only parses the CLI, resolves configuration and
// prints the per-file console lines.

pub mod app;
pub mod core;
pub mod platform;
pub mod util;
