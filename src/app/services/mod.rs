//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Text lookup (translations)
//! - Orders data, CSV export and order-number parsing
//! - Background order search

pub mod i18n;
pub mod orders;
pub mod search;
