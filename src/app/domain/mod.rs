//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Pages, languages and themes
//! - The settings document
//! - Activity history
//! - Message types for the event system

pub mod activity;
pub mod messages;
pub mod page;
pub mod preferences;
pub mod settings;

pub use activity::{ActivityEvent, ActivityLog};
pub use messages::{Message, PageCommand};
pub use page::Page;
pub use preferences::{Language, Palette, Theme};
pub use settings::ConfigStore;
