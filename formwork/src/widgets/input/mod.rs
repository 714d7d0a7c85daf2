//! Input widget - a single-line text field with reactive state.

mod events;
mod state;

pub use state::{Input, InputId};
