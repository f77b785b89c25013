//! Controllers layer - orchestration and coordination.
//!
//! - Page navigation, chrome labels and text/theme propagation

pub mod navigation;
