//! Member database and fitness class rosters for a small gym, driven by a
//! line-oriented console.

pub mod config;
pub mod error;
pub mod gym;
pub mod manager;
pub mod telemetry;
