//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler returns a `Vec<Action>` after processing each event. It never
//! performs I/O itself; the binary's control loop executes these actions in order.
//!
//! # Example
//!
//! ```rust
//! use filmvilla::app::Action;
//! use filmvilla::worker::DirectoryRequest;
//!
//! let actions = vec![
//!     Action::Dispatch(DirectoryRequest::search(1, "batman".to_string(), 1)),
//! ];
//! ```

use crate::worker::DirectoryRequest;

/// Commands representing side effects to be executed by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Runs a request against the movie directory.
    ///
    /// The runtime hands the request to the directory worker, which answers later
    /// with an `Event::DirectoryResponse`.
    Dispatch(DirectoryRequest),

    /// Stops the control loop.
    Quit,
}
