// Auto Pulse - core/mod.rs
//
// Core business logic layer: tally, report rendering, export.
// Dependencies: standard library, chrono, serde/csv for export.
// Must NOT depend on: ui, platform, app, or any direct I/O.

pub mod export;
pub mod model;
pub mod report;
pub mod tally;
