//! Shared utilities (connection configuration, artifact writing).

pub mod config;
pub mod fs;
