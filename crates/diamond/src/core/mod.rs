//! Core types shared by the generator and its front ends
//!
//! Errors, symbols, render configuration and text helpers live here; the
//! diamond algorithm itself is in [`crate::generator`].

mod error;
pub mod logging;
mod symbol;
mod text;
mod types;

pub use error::*;
pub use logging::*;
pub use symbol::*;
pub use text::*;
pub use types::*;
