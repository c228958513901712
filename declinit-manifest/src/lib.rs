//! TOML class manifest parsing, validation and lowering for declinit.
//!
//! A manifest declares classes, their parents and their parameters:
//!
//! ```toml
//! [classes.Foo]
//! params = [{ name = "foo", type = "integer" }]
//! options = [{ name = "bar", optional = true }]
//!
//! [classes.Bar]
//! extends = "Foo"
//! params = [{ name = "baz", default = 0 }]
//! ```
//!
//! [`DeclinitToml`] parses and validates such a file, and
//! [`DeclinitToml::registry`] lowers it to ready-to-use classes.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod lower;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use file::DeclinitToml;
pub use lower::{Registry, to_value};
pub use manifest::{ClassDecl, Manifest, ParamDecl, ToleranceDecl};
