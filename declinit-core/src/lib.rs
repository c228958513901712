//! Core types for declinit.
//!
//! This crate provides the runtime vocabulary shared by the builder, the
//! manifest loader and the CLI: dynamic [`Value`]s, constructor [`Args`],
//! constructed [`Instance`]s and the crate-wide [`Error`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod args;
mod error;
mod instance;
mod utils;
mod value;

pub use args::Args;
pub use error::{Error, Result};
pub use instance::Instance;
pub use utils::{AFTER_INITIALIZE, is_valid_identifier};
pub use value::Value;
