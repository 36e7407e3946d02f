//! String-based convenience API for quick experimentation.

pub use crate::eval::Bindings;
pub use crate::ui::{diff, differentiate, evaluate, evaluate_with, parse};
