//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with external systems:
//! - Logging setup
//! - Platform integration (config directory, browser)
//! - Error types

pub mod error;
pub mod logging;
pub mod platform;
