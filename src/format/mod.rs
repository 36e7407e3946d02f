//! Formatting helpers for rendering expressions.

pub mod expr;

pub use expr::{format_constant, render};
