//! Installation target for generated definitions, and the constructor
//! program that runs per instantiation.

use std::sync::Arc;

use declinit_core::{Args, Error, Instance, Result, Value};
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

use crate::{Callback, Signature, Statement, Tolerance};

/// Working state of one constructor invocation.
///
/// Arguments are bound as locals first. An argument that was omitted and has
/// a default is simply absent, which keeps it distinct from an explicit
/// `nil`.
#[derive(Debug)]
pub struct Frame {
    locals: IndexMap<String, Value>,
    instance: Instance,
}

impl Frame {
    pub fn class_name(&self) -> &str {
        self.instance.class_name()
    }

    /// The bound argument, or `None` when it was not supplied.
    pub fn local(&self, name: &str) -> Option<&Value> {
        self.locals.get(name)
    }

    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.locals.insert(name.into(), value);
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn instance_mut(&mut self) -> &mut Instance {
        &mut self.instance
    }

    fn into_instance(self) -> Instance {
        self.instance
    }
}

/// A generated constructor: how to bind arguments, and the body to run.
#[derive(Debug, Clone)]
pub struct Constructor {
    signature: Signature,
    statements: Arc<Vec<Statement>>,
    tolerance: Tolerance,
}

impl Constructor {
    pub(crate) fn new(
        signature: Signature,
        statements: Vec<Statement>,
        tolerance: Tolerance,
    ) -> Self {
        Self {
            signature,
            statements: Arc::new(statements),
            tolerance,
        }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Bind positional then keyword arguments, enforcing arity, required
    /// keywords and the unknown-option policy.
    fn bind(&self, mut instance: Instance, args: Args) -> Result<Frame> {
        let class = instance.class_name().to_string();
        let (positional, mut keywords) = args.into_parts();
        let params: Vec<_> = self.signature.positionals().collect();

        let required = self.signature.required_positionals();
        if positional.len() < required {
            let name = params
                .get(positional.len())
                .map(|p| p.name.clone())
                .unwrap_or_default();
            return Err(Error::MissingArgument {
                class,
                name,
                kind: "positional",
            });
        }
        if positional.len() > params.len() {
            return Err(Error::TooManyArguments {
                class,
                given: positional.len(),
                expected: params.len(),
            });
        }

        let mut locals = IndexMap::new();
        for (param, value) in params.iter().zip(positional) {
            locals.insert(param.name.clone(), value);
        }

        for param in self.signature.keywords() {
            match keywords.shift_remove(&param.name) {
                Some(value) => {
                    locals.insert(param.name.clone(), value);
                }
                None if param.settings.has_default() => {}
                None => {
                    return Err(Error::MissingArgument {
                        class,
                        name: param.name.clone(),
                        kind: "keyword",
                    });
                }
            }
        }

        match self.tolerance {
            Tolerance::Reject => {
                if let Some(name) = keywords.keys().next() {
                    return Err(Error::UnknownOption {
                        class,
                        name: name.clone(),
                    });
                }
            }
            Tolerance::Ignore => {}
            Tolerance::Absorb => instance.set_unknown_options(keywords),
        }

        Ok(Frame { locals, instance })
    }
}

/// Where a builder installs its readers, constructor and private
/// after-initialize hook. Each installation replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct Mixin {
    readers: Arc<IndexSet<String>>,
    constructor: Option<Constructor>,
    after_initialize: Arc<Vec<Callback>>,
}

impl Mixin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn readers(&self) -> &IndexSet<String> {
        &self.readers
    }

    pub fn defines_reader(&self, name: &str) -> bool {
        self.readers.contains(name)
    }

    pub fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }

    pub(crate) fn define_readers(&mut self, readers: IndexSet<String>) {
        self.readers = Arc::new(readers);
    }

    pub(crate) fn define_constructor(&mut self, constructor: Constructor) {
        self.constructor = Some(constructor);
    }

    pub(crate) fn define_after_initialize(&mut self, callbacks: Vec<Callback>) {
        self.after_initialize = Arc::new(callbacks);
    }

    /// Run the installed constructor for an instance of `class`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotInstalled`] if nothing was installed, otherwise
    /// any binding, type-constraint or callback error.
    pub fn instantiate(&self, class: &Arc<str>, args: Args) -> Result<Instance> {
        let constructor = self.constructor.as_ref().ok_or_else(|| Error::NotInstalled {
            class: class.to_string(),
        })?;
        trace!(class = %class, "running constructor");

        let instance = Instance::new(Arc::clone(class), Arc::clone(&self.readers));
        let mut frame = constructor.bind(instance, args)?;
        for statement in constructor.statements.iter() {
            statement.execute(&mut frame)?;
        }

        let mut instance = frame.into_instance();
        self.after_initialize(&mut instance)?;
        Ok(instance)
    }

    fn after_initialize(&self, instance: &mut Instance) -> Result<()> {
        for callback in self.after_initialize.iter() {
            callback.call(instance)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Builder, Settings, Type};

    fn install(builder: Builder) -> Mixin {
        let mut mixin = Mixin::new();
        builder.call(&mut mixin);
        mixin
    }

    fn class() -> Arc<str> {
        Arc::from("Foo")
    }

    #[test]
    fn test_not_installed() {
        let err = Mixin::new().instantiate(&class(), Args::new()).unwrap_err();
        assert_eq!(err, Error::NotInstalled { class: "Foo".into() });
    }

    #[test]
    fn test_missing_positional() {
        let mixin = install(
            Builder::new()
                .define("foo", Settings::new())
                .unwrap()
                .define("bar", Settings::new())
                .unwrap(),
        );
        let err = mixin
            .instantiate(&class(), Args::new().arg(1))
            .unwrap_err();
        assert_eq!(
            err,
            Error::MissingArgument {
                class: "Foo".into(),
                name: "bar".into(),
                kind: "positional"
            }
        );
    }

    #[test]
    fn test_too_many_positionals() {
        let mixin = install(Builder::new().define("foo", Settings::new()).unwrap());
        let err = mixin
            .instantiate(&class(), Args::new().arg(1).arg(2))
            .unwrap_err();
        assert_eq!(
            err,
            Error::TooManyArguments {
                class: "Foo".into(),
                given: 2,
                expected: 1
            }
        );
    }

    #[test]
    fn test_missing_keyword() {
        let mixin = install(
            Builder::new()
                .define("bar", Settings::new().option(true))
                .unwrap(),
        );
        let err = mixin.instantiate(&class(), Args::new()).unwrap_err();
        assert!(matches!(err, Error::MissingArgument { kind: "keyword", .. }));
    }

    #[test]
    fn test_unknown_option_by_tolerance() {
        let builder = Builder::new()
            .define("bar", Settings::new().option(true))
            .unwrap();
        let args = Args::new().opt("bar", 1).opt("extra", 2);

        let err = install(builder.clone())
            .instantiate(&class(), args.clone())
            .unwrap_err();
        assert_eq!(
            err,
            Error::UnknownOption {
                class: "Foo".into(),
                name: "extra".into()
            }
        );

        let ignored = install(builder.tolerant_to_unknown_options())
            .instantiate(&class(), args.clone())
            .unwrap();
        assert_eq!(ignored.read("bar"), Ok(&Value::Int(1)));
        assert!(ignored.unknown_options().is_none());

        let absorbed = install(builder.absorbing_unknown_options())
            .instantiate(&class(), args)
            .unwrap();
        let unknown = absorbed.unknown_options().unwrap();
        assert_eq!(unknown.get("extra"), Some(&Value::Int(2)));
        assert!(!absorbed.responds_to("extra"));
    }

    #[test]
    fn test_type_constraint_error_carries_name_and_value() {
        let mixin = install(
            Builder::new()
                .define("foo", Settings::new().of_type(Type::integer()))
                .unwrap(),
        );
        let err = mixin
            .instantiate(&class(), Args::new().arg("one"))
            .unwrap_err();
        assert_eq!(
            err,
            Error::TypeConstraint {
                class: "Foo".into(),
                name: "foo".into(),
                value: Value::from("one"),
                reason: "expected integer, got string".into(),
            }
        );
        assert!(err.is_construction_error());
    }

    #[test]
    fn test_coercion_applies_before_assignment() {
        let mixin = install(
            Builder::new()
                .define("foo", Settings::new().of_type(Type::coercible_integer()))
                .unwrap(),
        );
        let instance = mixin
            .instantiate(&class(), Args::new().arg("12"))
            .unwrap();
        assert_eq!(instance.read("foo"), Ok(&Value::Int(12)));
    }

    #[test]
    fn test_type_is_not_applied_to_defaults() {
        let mixin = install(
            Builder::new()
                .define(
                    "foo",
                    Settings::new()
                        .of_type(Type::integer())
                        .default_value(Value::Nil),
                )
                .unwrap(),
        );
        let instance = mixin.instantiate(&class(), Args::new()).unwrap();
        assert_eq!(instance.read("foo"), Ok(&Value::Nil));
    }

    #[test]
    fn test_custom_statement_sees_frame() {
        let builder = Builder::new()
            .define("foo", Settings::new())
            .unwrap()
            .register(Doubler)
            .define("bar", Settings::new().reader(false))
            .unwrap();
        let instance = install(builder)
            .instantiate(&class(), Args::new().arg(2).arg(5))
            .unwrap();

        assert_eq!(instance.read("foo"), Ok(&Value::Int(2)));
        assert_eq!(instance.ivar("bar"), Some(&Value::Int(10)));
        assert!(!instance.responds_to("bar"));
    }

    struct Doubler;

    impl crate::Plugin for Doubler {
        fn name(&self) -> &'static str {
            "doubler"
        }

        fn call(&self, name: &str, _settings: &Settings) -> Option<crate::CodeFragment> {
            let slot = name.to_string();
            let statement = Statement::custom(format!("self.{} *= 2;", name), move |frame| {
                if let Some(value) = frame.instance().ivar(&slot).and_then(Value::as_int) {
                    frame.instance_mut().set_ivar(slot.as_str(), Value::Int(value * 2));
                }
                Ok(())
            });
            Some(statement.into())
        }
    }
}
