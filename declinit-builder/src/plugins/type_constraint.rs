use crate::{CodeFragment, Plugin, Settings, Statement};

/// Runs the declared type capability on supplied arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeConstraint;

impl Plugin for TypeConstraint {
    fn name(&self) -> &'static str {
        "type_constraint"
    }

    fn call(&self, name: &str, settings: &Settings) -> Option<CodeFragment> {
        let ty = settings.ty()?;
        Some(Statement::coerce(name, ty.clone()).into())
    }
}
