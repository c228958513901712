//! Constructor IR.
//!
//! Plugins emit [`CodeFragment`]s. Statements form the constructor body and
//! run in order against a [`Frame`]; callbacks run afterwards, in order,
//! from the private after-initialize hook with the instance as receiver.

use std::{fmt, sync::Arc};

use declinit_core::{Error, Instance, Result};

use crate::{Frame, Type};

type StatementFn = dyn Fn(&mut Frame) -> Result<()> + Send + Sync;
type CallbackFn = dyn Fn(&mut Instance) -> Result<()> + Send + Sync;

/// A fragment of generated construction logic.
#[derive(Debug, Clone)]
pub enum CodeFragment {
    Statement(Statement),
    Callback(Callback),
}

impl CodeFragment {
    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Self::Statement(s) => Some(s),
            Self::Callback(_) => None,
        }
    }

    pub fn as_callback(&self) -> Option<&Callback> {
        match self {
            Self::Callback(c) => Some(c),
            Self::Statement(_) => None,
        }
    }
}

impl From<Statement> for CodeFragment {
    fn from(s: Statement) -> Self {
        Self::Statement(s)
    }
}

impl From<Callback> for CodeFragment {
    fn from(c: Callback) -> Self {
        Self::Callback(c)
    }
}

/// A constructor-body statement.
#[derive(Clone)]
pub enum Statement {
    /// Store the bound argument in the slot of the same name. An unset
    /// argument leaves the slot unset.
    Assign { name: String },
    /// Pass a supplied argument through a type capability and rebind it to
    /// the result.
    Coerce { name: String, ty: Type },
    /// Arbitrary step contributed by a third-party plugin.
    Custom { source: String, run: Arc<StatementFn> },
}

impl Statement {
    pub fn assign(name: impl Into<String>) -> Self {
        Self::Assign { name: name.into() }
    }

    pub fn coerce(name: impl Into<String>, ty: Type) -> Self {
        Self::Coerce {
            name: name.into(),
            ty,
        }
    }

    /// A custom statement. `source` is what the renderer prints for it.
    pub fn custom(
        source: impl Into<String>,
        run: impl Fn(&mut Frame) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self::Custom {
            source: source.into(),
            run: Arc::new(run),
        }
    }

    pub fn execute(&self, frame: &mut Frame) -> Result<()> {
        match self {
            Self::Assign { name } => {
                match frame.local(name).cloned() {
                    Some(value) => frame.instance_mut().set_ivar(name.as_str(), value),
                    None => frame.instance_mut().unset_ivar(name),
                }
                Ok(())
            }
            Self::Coerce { name, ty } => {
                let Some(value) = frame.local(name).cloned() else {
                    return Ok(());
                };
                let coerced = ty.call(value.clone()).map_err(|reason| Error::TypeConstraint {
                    class: frame.class_name().to_string(),
                    name: name.clone(),
                    value,
                    reason,
                })?;
                frame.bind(name.as_str(), coerced);
                Ok(())
            }
            Self::Custom { run, .. } => run(frame),
        }
    }

    /// Source line printed in the rendered constructor.
    pub fn source(&self) -> String {
        match self {
            Self::Assign { name } => format!("self.{} = {};", name, name),
            Self::Coerce { name, ty } => format!("{} = {}({})?;", name, ty.name(), name),
            Self::Custom { source, .. } => source.clone(),
        }
    }
}

impl fmt::Debug for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Statement").field(&self.source()).finish()
    }
}

/// A deferred step run by the after-initialize hook.
#[derive(Clone)]
pub struct Callback {
    source: String,
    run: Arc<CallbackFn>,
}

impl Callback {
    pub fn new(
        source: impl Into<String>,
        run: impl Fn(&mut Instance) -> Result<()> + Send + Sync + 'static,
    ) -> Self {
        Self {
            source: source.into(),
            run: Arc::new(run),
        }
    }

    pub fn call(&self, instance: &mut Instance) -> Result<()> {
        (self.run)(instance)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Callback").field(&self.source).finish()
    }
}
