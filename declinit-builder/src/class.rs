//! The `param`/`option` DSL and inheritance.

use std::sync::Arc;

use declinit_core::{Args, Instance, Result};
use tracing::debug;

use crate::{Builder, Mixin, Plugin, Settings, Tolerance};

/// A class whose constructor is generated from its declarations.
///
/// Each class owns one [`Builder`] and one [`Mixin`]. Every declaration
/// replaces the builder with the one returned by
/// [`Builder::define`] and reinstalls the mixin from it.
///
/// A subclass starts with the parent's builder value. Because builders are
/// immutable, the subclass's own declarations never reach the parent.
///
/// # Example
///
/// ```
/// use declinit_builder::{Class, Settings};
/// use declinit_core::{Args, Value};
///
/// let mut foo = Class::new("Foo");
/// foo.param("foo", Settings::new())?.option("bar", Settings::new())?;
///
/// let mut bar = foo.subclass("Bar");
/// bar.param("baz", Settings::new())?;
///
/// let child = bar.instantiate(Args::new().arg(1).arg(2).opt("bar", 3))?;
/// assert_eq!(child.read("baz")?, &Value::Int(2));
///
/// let parent = foo.instantiate(Args::new().arg(1).opt("bar", 3))?;
/// assert!(!parent.responds_to("baz"));
/// # Ok::<(), declinit_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Class {
    name: Arc<str>,
    ancestors: Vec<Arc<str>>,
    builder: Builder,
    mixin: Mixin,
}

impl Class {
    /// Create a root class with the default plugins and no parameters.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self::with_builder(name, Builder::new())
    }

    /// Create a root class from a preconfigured builder.
    pub fn with_builder(name: impl Into<Arc<str>>, builder: Builder) -> Self {
        let mut mixin = Mixin::new();
        builder.call(&mut mixin);
        Self {
            name: name.into(),
            ancestors: Vec::new(),
            builder,
            mixin,
        }
    }

    /// Create a subclass that inherits the current declarations.
    pub fn subclass(&self, name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        debug!(class = %name, parent = %self.name, "inherited builder");

        let mut ancestors = Vec::with_capacity(self.ancestors.len() + 1);
        ancestors.push(Arc::clone(&self.name));
        ancestors.extend(self.ancestors.iter().cloned());

        Self {
            name,
            ancestors,
            builder: self.builder.clone(),
            mixin: self.mixin.clone(),
        }
    }

    /// Declare a positional parameter.
    pub fn param(&mut self, name: &str, settings: Settings) -> Result<&mut Self> {
        self.define(name, settings.option(false))
    }

    /// Declare a keyword parameter.
    pub fn option(&mut self, name: &str, settings: Settings) -> Result<&mut Self> {
        self.define(name, settings.option(true))
    }

    /// Register a plugin for this class's subsequent declarations.
    pub fn register(&mut self, plugin: impl Plugin + 'static) -> &mut Self {
        self.builder = self.builder.register(plugin);
        self
    }

    pub fn tolerant_to_unknown_options(&mut self) -> &mut Self {
        self.reload(self.builder.tolerant_to_unknown_options())
    }

    pub fn intolerant_to_unknown_options(&mut self) -> &mut Self {
        self.reload(self.builder.intolerant_to_unknown_options())
    }

    pub fn absorbing_unknown_options(&mut self) -> &mut Self {
        self.reload(self.builder.absorbing_unknown_options())
    }

    /// Construct an instance with the generated constructor.
    pub fn instantiate(&self, args: Args) -> Result<Instance> {
        self.mixin.instantiate(&self.name, args)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parent(&self) -> Option<&str> {
        self.ancestors.first().map(|a| a.as_ref())
    }

    /// Parent, grandparent and so on.
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        self.ancestors.iter().map(|a| a.as_ref())
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    pub fn mixin(&self) -> &Mixin {
        &self.mixin
    }

    pub fn tolerance(&self) -> Tolerance {
        self.builder.tolerance()
    }

    /// Whether instances get a public reader named `name`.
    pub fn defines_reader(&self, name: &str) -> bool {
        self.mixin.defines_reader(name)
    }

    /// Source of the currently installed definitions.
    pub fn source(&self) -> String {
        self.builder.render()
    }

    fn define(&mut self, name: &str, settings: Settings) -> Result<&mut Self> {
        let builder = self.builder.define(name, settings)?;
        Ok(self.reload(builder))
    }

    fn reload(&mut self, builder: Builder) -> &mut Self {
        builder.call(&mut self.mixin);
        self.builder = builder;
        self
    }
}
