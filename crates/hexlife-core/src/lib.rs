//! Core types and utilities shared by the hexlife cellular automaton engine.

pub mod config;
pub mod error;
pub mod layout;
pub mod types;

pub use config::*;
pub use error::{Error, Result};
pub use layout::{Layout, LayoutWarning};
pub use types::*;
