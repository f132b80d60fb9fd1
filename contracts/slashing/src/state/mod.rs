//! This module manages the contract's persisted state.

pub mod config;
pub mod params;
