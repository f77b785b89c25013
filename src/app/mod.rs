//! Application layer - everything that runs without a window.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (pages, preferences, settings, messages, activity)
//! - `controllers/` - Orchestration (NavigationController)
//! - `pages/` - View models for every page
//! - `services/` - Business operations (i18n, orders export, background search)
//! - `infrastructure/` - External integrations (logging, platform, error)
//! - `context.rs` - Services shared by all pages
//! - `state.rs` - Main application coordinator

pub mod context;
pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod pages;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use context::AppContext;
pub use controllers::navigation::NavigationController;
pub use domain::{ConfigStore, Language, Message, Page, PageCommand, Palette, Theme};
pub use infrastructure::error::{AppError, Result};
pub use pages::{Notice, NoticeLevel, PageContent, PageView, TextRefresh};
pub use services::i18n::Translator;
pub use state::{AppState, Dispatch};
