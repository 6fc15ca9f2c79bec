// SvgSweep - core/mod.rs
//
// Core business logic layer: classification and naming.
// Must NOT depend on: platform, app.

pub mod model;
pub mod naming;
pub mod sniff;
