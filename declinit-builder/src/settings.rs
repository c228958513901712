//! Per-parameter declaration settings.

use std::{fmt, sync::Arc};

use declinit_core::{Instance, Value};

use crate::Type;

/// Lazily evaluated default. Receives the instance as assigned so far, so a
/// default may depend on other parameters.
pub type DefaultFn = Arc<dyn Fn(&Instance) -> Value + Send + Sync>;

/// Whether a parameter is passed positionally or by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParamKind {
    #[default]
    Positional,
    Keyword,
}

impl ParamKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positional => "positional",
            Self::Keyword => "keyword",
        }
    }
}

/// Settings recognized for one declared parameter.
///
/// # Example
///
/// ```
/// use declinit_builder::{Settings, Type};
/// use declinit_core::Value;
///
/// let settings = Settings::new()
///     .of_type(Type::integer())
///     .default_value(Value::Int(0))
///     .reader(false);
///
/// assert!(settings.has_default());
/// assert!(!settings.has_reader());
/// ```
#[derive(Clone, Default)]
pub struct Settings {
    kind: ParamKind,
    default: Option<DefaultFn>,
    ty: Option<Type>,
    reader: Option<bool>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the parameter as keyword (`true`) or positional (`false`).
    ///
    /// The DSL sets this itself; `param` and `option` overwrite any value
    /// given here.
    pub fn option(mut self, option: bool) -> Self {
        self.kind = if option {
            ParamKind::Keyword
        } else {
            ParamKind::Positional
        };
        self
    }

    /// Compute a default from the partially assigned instance.
    pub fn default_with(
        mut self,
        f: impl Fn(&Instance) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.default = Some(Arc::new(f));
        self
    }

    /// Use a constant default.
    pub fn default_value(self, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.default_with(move |_| value.clone())
    }

    pub fn of_type(mut self, ty: Type) -> Self {
        self.ty = Some(ty);
        self
    }

    pub fn reader(mut self, reader: bool) -> Self {
        self.reader = Some(reader);
        self
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn is_option(&self) -> bool {
        self.kind == ParamKind::Keyword
    }

    pub fn default_fn(&self) -> Option<&DefaultFn> {
        self.default.as_ref()
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn ty(&self) -> Option<&Type> {
        self.ty.as_ref()
    }

    /// Readers are generated unless explicitly disabled.
    pub fn has_reader(&self) -> bool {
        self.reader != Some(false)
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("kind", &self.kind)
            .field("default", &self.default.as_ref().map(|_| ".."))
            .field("type", &self.ty.as_ref().map(Type::name))
            .field("reader", &self.reader)
            .finish()
    }
}
