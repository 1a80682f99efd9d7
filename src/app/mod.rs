//! Application layer coordinating state, events, and actions.
//!
//! This module defines the controller, sitting between the terminal runtime
//! (main.rs) and the domain/directory/worker layers.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └────── Directory Responses ───────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`input`]: Maps command lines to events
//! - [`modes`]: Result-area phase and paging types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod input;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use input::parse_line;
pub use modes::{PageDelta, Phase, SortMode};
pub use state::{AppState, PAGE_SIZE};
