//! User interface rendering layer with component-based architecture.
//!
//! This module turns view models into ANSI-styled text frames through
//! composable rendering components. It provides theme support and a layout that
//! adapts its card columns to the terminal width.
//!
//! # Architecture
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → frame String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared text layout utilities
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    CardItem, ContentView, DetailPanel, EmptyState, FooterInfo, HeaderInfo, PaginationInfo, SearchBarInfo,
    ToolbarInfo, UIViewModel,
};
