use crate::{CodeFragment, Plugin, Settings, Statement};

/// Stores every argument into the instance slot of the same name.
#[derive(Debug, Clone, Copy, Default)]
pub struct VariableSetter;

impl Plugin for VariableSetter {
    fn name(&self) -> &'static str {
        "variable_setter"
    }

    fn call(&self, name: &str, _settings: &Settings) -> Option<CodeFragment> {
        Some(Statement::assign(name).into())
    }
}
