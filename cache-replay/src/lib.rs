// Cache Replay Library

pub mod error;
pub mod generator;
pub mod models;
pub mod runner;
pub mod script;
pub mod stats;
