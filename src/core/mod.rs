// ChatScribe - core/mod.rs
//
// Core business logic layer.
// Dependencies: standard library plus regex.
// Must NOT depend on: ui, platform, app, or any I/O crate directly.

pub mod export;
pub mod extract;
pub mod model;
