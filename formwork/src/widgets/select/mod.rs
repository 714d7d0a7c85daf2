//! Select widget - a dropdown with reactive state.

mod events;
mod state;

pub use state::{Select, SelectId};
