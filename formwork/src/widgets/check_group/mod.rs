//! CheckGroup widget - a multi-select checkbox group with reactive state.
//!
//! Where a radio group keeps exactly one selected index, a check group
//! keeps a *set* of selected indices: each option is a checkbox bound to
//! "is this option's value present in the set-valued field".

mod events;
mod state;

pub use state::{CheckGroup, CheckGroupId};
