//! Checkbox widget - a single boolean toggle with reactive state.

mod events;
mod state;

pub use state::{Checkbox, CheckboxId};
