//! The persistent constructor builder.

use std::sync::Arc;

use declinit_core::Result;
use indexmap::IndexSet;
use tracing::debug;

use crate::{
    Callback, CodeFragment, Mixin, Plugin, PluginSet, Settings, Signature, Statement,
    mixin::Constructor,
    plugins::{DefaultValue, TypeConstraint, VariableSetter},
};

/// How a generated constructor treats keyword arguments that match no
/// declared option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tolerance {
    /// Fail with an unknown-option error.
    #[default]
    Reject,
    /// Accept and discard them.
    Ignore,
    /// Accept and keep them on the instance.
    Absorb,
}

impl Tolerance {
    /// Trailing catch-all rendered after the declared parameters. It is
    /// anonymous so it can never clash with a declared name.
    pub fn catch_all(self) -> Option<&'static str> {
        match self {
            Self::Reject => None,
            Self::Ignore | Self::Absorb => Some("**"),
        }
    }
}

/// Accumulates parameter declarations and regenerates the constructor.
///
/// A builder is an immutable value. [`register`](Self::register),
/// [`define`](Self::define) and the tolerance setters all return a new
/// builder and leave the receiver usable. Cloning is cheap, which is how a
/// subclass starts from its parent's builder without being able to change it.
///
/// # Example
///
/// ```
/// use declinit_builder::{Builder, Mixin, Settings};
///
/// let base = Builder::new().define("foo", Settings::new())?;
/// let extended = base.define("bar", Settings::new().option(true))?;
///
/// assert_eq!(base.signature().len(), 1);
/// assert_eq!(extended.signature().render_parameter_list(), "foo, bar:");
///
/// let mut mixin = Mixin::new();
/// extended.call(&mut mixin);
/// assert!(mixin.defines_reader("bar"));
/// # Ok::<(), declinit_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    signature: Signature,
    plugins: PluginSet,
    parts: Arc<Vec<CodeFragment>>,
    tolerance: Tolerance,
}

impl Builder {
    /// Create a builder with the default plugins installed.
    pub fn new() -> Self {
        Self::without_plugins()
            .register(TypeConstraint)
            .register(VariableSetter)
            .register(DefaultValue)
    }

    /// Create a builder with no plugins. Parameters declared on it generate
    /// readers and a parameter list, but no assignments.
    pub fn without_plugins() -> Self {
        Self {
            signature: Signature::new(),
            plugins: PluginSet::new(),
            parts: Arc::default(),
            tolerance: Tolerance::default(),
        }
    }

    /// Register a plugin to be applied to subsequent declarations.
    pub fn register(&self, plugin: impl Plugin + 'static) -> Self {
        self.register_arc(Arc::new(plugin))
    }

    /// Like [`register`](Self::register), for an already shared plugin.
    pub fn register_arc(&self, plugin: Arc<dyn Plugin>) -> Self {
        Self {
            plugins: self.plugins.with(plugin),
            ..self.clone()
        }
    }

    /// Accept and discard unknown keyword arguments.
    pub fn tolerant_to_unknown_options(&self) -> Self {
        self.with_tolerance(Tolerance::Ignore)
    }

    /// Reject unknown keyword arguments.
    pub fn intolerant_to_unknown_options(&self) -> Self {
        self.with_tolerance(Tolerance::Reject)
    }

    /// Accept unknown keyword arguments and keep them on the instance.
    pub fn absorbing_unknown_options(&self) -> Self {
        self.with_tolerance(Tolerance::Absorb)
    }

    pub fn with_tolerance(&self, tolerance: Tolerance) -> Self {
        Self {
            tolerance,
            ..self.clone()
        }
    }

    /// Declare a parameter.
    ///
    /// Appends it to the signature and appends the fragments every active
    /// plugin emits for it. Nothing is installed until [`call`](Self::call).
    ///
    /// # Errors
    ///
    /// Fails with the signature's declaration errors, most notably
    /// [`DuplicateParameter`](declinit_core::Error::DuplicateParameter).
    pub fn define(&self, name: &str, settings: Settings) -> Result<Self> {
        let fragments = self.plugins.apply(name, &settings);
        let signature = self.signature.add(name, settings)?;

        debug!(
            parameter = name,
            fragments = fragments.len(),
            total = signature.len(),
            "defined parameter"
        );

        let mut parts = Vec::with_capacity(self.parts.len() + fragments.len());
        parts.extend(self.parts.iter().cloned());
        parts.extend(fragments);

        Ok(Self {
            signature,
            parts: Arc::new(parts),
            ..self.clone()
        })
    }

    /// Install readers, the constructor and the after-initialize hook into
    /// `mixin`, replacing whatever an earlier call installed.
    pub fn call<'m>(&self, mixin: &'m mut Mixin) -> &'m mut Mixin {
        self.define_readers(mixin);
        self.reload_initializer(mixin);
        self.reload_callback(mixin);
        debug!(
            parameters = self.signature.len(),
            readers = mixin.readers().len(),
            "installed constructor"
        );
        mixin
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn plugins(&self) -> &PluginSet {
        &self.plugins
    }

    pub fn parts(&self) -> &[CodeFragment] {
        &self.parts
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Names of the parameters that get a public reader.
    pub fn reader_names(&self) -> IndexSet<String> {
        self.signature
            .parameters()
            .iter()
            .filter(|p| p.settings.has_reader())
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.parts.iter().filter_map(CodeFragment::as_statement)
    }

    pub fn callbacks(&self) -> impl Iterator<Item = &Callback> {
        self.parts.iter().filter_map(CodeFragment::as_callback)
    }

    fn define_readers(&self, mixin: &mut Mixin) {
        mixin.define_readers(self.reader_names());
    }

    fn reload_initializer(&self, mixin: &mut Mixin) {
        let statements = self.statements().cloned().collect();
        mixin.define_constructor(Constructor::new(
            self.signature.clone(),
            statements,
            self.tolerance,
        ));
    }

    fn reload_callback(&self, mixin: &mut Mixin) {
        mixin.define_after_initialize(self.callbacks().cloned().collect());
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use declinit_core::{Args, Error, Value};

    use super::*;
    use crate::Type;

    fn sources(builder: &Builder) -> Vec<String> {
        builder
            .parts()
            .iter()
            .map(|part| match part {
                CodeFragment::Statement(s) => s.source(),
                CodeFragment::Callback(c) => c.source().to_string(),
            })
            .collect()
    }

    #[test]
    fn test_default_plugins_in_order() {
        let builder = Builder::new();
        assert_eq!(
            builder.plugins().names().collect::<Vec<_>>(),
            vec!["type_constraint", "variable_setter", "default_value"]
        );
    }

    #[test]
    fn test_define_appends_fragments_in_plugin_order() {
        let builder = Builder::new()
            .define("foo", Settings::new())
            .unwrap()
            .define(
                "bar",
                Settings::new()
                    .of_type(Type::integer())
                    .default_value(1),
            )
            .unwrap();

        assert_eq!(
            sources(&builder),
            vec![
                "self.foo = foo;",
                "bar = integer(bar)?;",
                "self.bar = bar;",
                "self.bar.get_or_insert_with(default_bar);",
            ]
        );
    }

    #[test]
    fn test_define_is_pure() {
        let base = Builder::new().define("foo", Settings::new()).unwrap();
        let _ = base.define("bar", Settings::new()).unwrap();

        assert_eq!(base.signature().len(), 1);
        assert_eq!(base.parts().len(), 1);
    }

    #[test]
    fn test_duplicate_define_fails_and_keeps_builder() {
        let builder = Builder::new().define("foo", Settings::new()).unwrap();
        let err = builder.define("foo", Settings::new()).unwrap_err();

        assert_eq!(err, Error::DuplicateParameter { name: "foo".into() });
        assert_eq!(builder.parts().len(), 1);
    }

    #[test]
    fn test_register_twice_has_no_effect() {
        let once = Builder::new().define("foo", Settings::new()).unwrap();
        let twice = Builder::new()
            .register(VariableSetter)
            .define("foo", Settings::new())
            .unwrap();

        assert_eq!(sources(&once), sources(&twice));
    }

    #[test]
    fn test_plugin_applies_to_later_declarations_only() {
        let builder = Builder::without_plugins()
            .define("foo", Settings::new())
            .unwrap()
            .register(VariableSetter)
            .define("bar", Settings::new())
            .unwrap();

        assert_eq!(sources(&builder), vec!["self.bar = bar;"]);
    }

    #[test]
    fn test_tolerance_setters() {
        let builder = Builder::new();
        assert_eq!(builder.tolerance(), Tolerance::Reject);
        assert_eq!(
            builder.tolerant_to_unknown_options().tolerance(),
            Tolerance::Ignore
        );
        assert_eq!(
            builder
                .absorbing_unknown_options()
                .intolerant_to_unknown_options()
                .tolerance(),
            Tolerance::Reject
        );
    }

    #[test]
    fn test_call_replaces_previous_installation() {
        let mut mixin = Mixin::new();
        let first = Builder::new().define("foo", Settings::new()).unwrap();
        first.call(&mut mixin);

        let second = Builder::new()
            .define("bar", Settings::new().option(true))
            .unwrap();
        second.call(&mut mixin);

        assert!(!mixin.defines_reader("foo"));
        let class = Arc::from("Foo");
        let instance = mixin
            .instantiate(&class, Args::new().opt("bar", 1))
            .unwrap();
        assert_eq!(instance.read("bar"), Ok(&Value::Int(1)));
    }

    #[test]
    fn test_reader_false_is_excluded() {
        let builder = Builder::new()
            .define("foo", Settings::new().reader(false))
            .unwrap()
            .define("bar", Settings::new())
            .unwrap();

        let names: Vec<_> = builder.reader_names().into_iter().collect();
        assert_eq!(names, vec!["bar"]);
    }
}
