//! Calculus routines (symbolic differentiation).

pub mod differentiate;

pub use differentiate::{differentiate, differentiate_n};
