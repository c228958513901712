//! Declarative constructor builder.
//!
//! A class declares its positional parameters ("params") and keyword
//! parameters ("options") one at a time. Every declaration produces a new
//! [`Builder`] value holding the accumulated [`Signature`] and the code
//! fragments emitted by each registered [`Plugin`]. Calling the builder on a
//! [`Mixin`] regenerates the constructor, the readers and the private
//! after-initialize hook from scratch.
//!
//! # Module Organization
//!
//! - [`settings`] - Per-parameter settings ([`Settings`], [`ParamKind`])
//! - [`types`] - Type capabilities used by the type-constraint plugin
//! - [`signature`] - Ordered parameter declarations
//! - [`fragment`] - Constructor IR: statements and callbacks
//! - [`plugin`] - The plugin contract and the ordered plugin set
//! - [`plugins`] - Default code-generation strategies
//! - [`builder`] - The persistent builder itself
//! - [`mixin`] - Installation target and constructor execution
//! - [`class`] - The `param`/`option` DSL with inheritance
//! - [`render`] - Textual rendering of the generated definitions
//!
//! # Example
//!
//! ```
//! use declinit_builder::{Class, Settings};
//! use declinit_core::{Args, Value};
//!
//! let mut foo = Class::new("Foo");
//! foo.param("foo", Settings::new())?
//!     .option("bar", Settings::new().default_value(Value::Nil))?;
//!
//! let instance = foo.instantiate(Args::new().arg(1))?;
//! assert_eq!(instance.read("foo")?, &Value::Int(1));
//! assert_eq!(instance.read("bar")?, &Value::Nil);
//! # Ok::<(), declinit_core::Error>(())
//! ```

pub mod builder;
pub mod class;
pub mod fragment;
pub mod mixin;
pub mod plugin;
pub mod plugins;
pub mod render;
pub mod settings;
pub mod signature;
pub mod types;

pub use builder::{Builder, Tolerance};
pub use class::Class;
pub use fragment::{Callback, CodeFragment, Statement};
pub use mixin::{Frame, Mixin};
pub use plugin::{Plugin, PluginSet};
pub use settings::{DefaultFn, ParamKind, Settings};
pub use signature::{Parameter, Signature};
pub use types::Type;
