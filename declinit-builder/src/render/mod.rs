//! Textual rendering of generated definitions.
//!
//! The constructor never runs from text; rendering exists so that the IR a
//! builder accumulated can be inspected, diffed and snapshot-tested.
//!
//! - [`CodeBuilder`] - Fluent API for building indented code
//! - [`Builder::render`](crate::Builder::render) - Readers, constructor and hook

mod code_builder;
mod source;

pub use code_builder::{CodeBuilder, Indent};
