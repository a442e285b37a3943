// Auto Pulse - platform/mod.rs
//
// Platform layer: path resolution and configuration loading.
// Dependencies: util layer, directories crate.

pub mod config;
