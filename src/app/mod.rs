// SvgSweep - app/mod.rs
//
// Application layer: orchestration of a relocation pass.
// Dependencies: core, platform.

pub mod relocate;
