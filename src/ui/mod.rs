//! fltk shell: window, header, content area and dialogs.
//!
//! Widgets are rebuilt from the view models in `crate::app`; nothing here
//! holds application state.

pub mod dialogs;
pub mod file_dialogs;
pub mod main_window;
pub mod page_renderer;
pub mod theme;
