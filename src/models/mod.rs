// src/models/mod.rs

pub mod motion;
pub mod telemetry;
pub mod vehicle;
pub mod waypoint;
