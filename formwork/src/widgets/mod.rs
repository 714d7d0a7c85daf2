//! Form widget state.
//!
//! Each widget is a handle over `Arc<RwLock<_>>` state: cloning is cheap,
//! reads never block the event loop for long, and a dirty flag tells the
//! render loop when something changed. Widgets carry their own validation
//! error (see [`Validatable`](crate::validation::Validatable)); the view
//! decides how to draw it.

pub mod check_group;
pub mod checkbox;
pub mod input;
pub mod select;

pub use check_group::{CheckGroup, CheckGroupId};
pub use checkbox::{Checkbox, CheckboxId};
pub use input::{Input, InputId};
pub use select::{Select, SelectId};
